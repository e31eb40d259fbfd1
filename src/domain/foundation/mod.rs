//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, error types, and event plumbing
//! that form the vocabulary of the outing-match domain.

mod errors;
mod events;
mod ids;
mod percentage;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use events::{
    domain_event, DomainEvent, EventEnvelope, EventId, EventMetadata, SerializableDomainEvent,
};
pub use ids::{GroupCode, GroupId, UserId, MAX_GROUP_CODE_LENGTH};
pub use percentage::Percentage;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
