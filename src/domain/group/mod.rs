//! Group module - members of one outing group and their readiness.
//!
//! # Components
//!
//! - `MemberChoice` - one member's stored row (area, purpose, condition, ready flag)
//! - `GroupSnapshot` - all rows of a group at one read, split into ready / not ready
//! - `SelectionDraft` - local selection state checked before a member confirms
//! - `SelectionStage` / `ReadinessCoordinator` - per-member state machine,
//!   group-level gate, and page routing
//! - Events published when a member's row changes

mod draft;
mod events;
mod member_choice;
mod readiness;
mod snapshot;

pub use draft::{CompleteSelection, SelectionDraft};
pub use events::{MemberChoiceChanged, SelectionReopened, SelectionSubmitted};
pub use member_choice::{MemberChoice, MemberChoiceUpdate};
pub use readiness::{PageRoute, ReadinessCoordinator, SelectionStage};
pub use snapshot::GroupSnapshot;
