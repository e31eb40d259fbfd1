//! Application handlers.

pub mod group;
