//! Outing Match - group outing preference matching
//!
//! Members of a group each pick an area, a purpose, and a five-axis
//! condition. Once everyone is ready, the crate derives per-axis consensus,
//! mismatch scores, a group type, radar chart geometry, and recommendation
//! tags from a fresh snapshot of the group.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
