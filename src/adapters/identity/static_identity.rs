//! Fixed viewer identity, for long-lived subscribers and tests.

use crate::domain::foundation::UserId;
use crate::ports::IdentityProvider;

/// Always resolves to the same viewer (or to nobody).
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity {
    user_id: Option<UserId>,
}

impl StaticIdentity {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id: Some(user_id),
        }
    }

    /// An anonymous viewer.
    pub fn anonymous() -> Self {
        Self::default()
    }
}

impl IdentityProvider for StaticIdentity {
    fn current_user_id(&self) -> Option<UserId> {
        self.user_id.clone()
    }
}
