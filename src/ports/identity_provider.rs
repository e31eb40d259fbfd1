//! IdentityProvider port - who is looking at the group.
//!
//! Identity only decides which series is "self" and where the viewer is
//! routed. It takes no part in scoring and enforces no authorization.

use crate::domain::foundation::UserId;

/// Resolves the current viewer.
pub trait IdentityProvider: Send + Sync {
    /// Returns the viewer's user ID, or `None` when anonymous.
    fn current_user_id(&self) -> Option<UserId>;
}
