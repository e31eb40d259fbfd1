//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `MemberStore` - Member rows of a group (read, upsert, change subscription)
//! - `MemberChangeHandler` - Callback invoked when a group's members change
//! - `IdentityProvider` - Resolves the current viewer

mod identity_provider;
mod member_change_handler;
mod member_store;

pub use identity_provider::IdentityProvider;
pub use member_change_handler::MemberChangeHandler;
pub use member_store::{MemberStore, SubscriptionId};
