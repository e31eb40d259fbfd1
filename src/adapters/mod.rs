//! Adapters - Implementations of port interfaces.
//!
//! - `memory` - In-process member store
//! - `identity` - Viewer resolution (fixed or from a request header)
//! - `http` - axum routes over the application handlers

pub mod http;
pub mod identity;
pub mod memory;

pub use identity::{HeaderIdentity, StaticIdentity, USER_ID_HEADER};
pub use memory::InMemoryMemberStore;
