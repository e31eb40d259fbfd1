//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, value objects, errors, events)
//! - `preference` - Axis vocabularies and the stored condition string format
//! - `group` - Member rows, group snapshots, readiness, and selection drafts
//! - `analysis` - Pure group analysis (consensus, mismatch, radar, tags)

pub mod analysis;
pub mod foundation;
pub mod group;
pub mod preference;
