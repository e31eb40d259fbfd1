//! Identity adapters.

mod header_identity;
mod static_identity;

pub use header_identity::{HeaderIdentity, USER_ID_HEADER};
pub use static_identity::StaticIdentity;
