//! In-process adapters.

mod in_memory_member_store;

pub use in_memory_member_store::InMemoryMemberStore;
