//! Viewer identity taken from a request header.
//!
//! Authentication is handled upstream; whatever sits in front of this
//! service is trusted to set the header.

use axum::http::HeaderMap;

use crate::domain::foundation::UserId;
use crate::ports::IdentityProvider;

/// Header carrying the viewer's user ID.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Identity resolved from one request's headers.
#[derive(Debug, Clone, Default)]
pub struct HeaderIdentity {
    user_id: Option<UserId>,
}

impl HeaderIdentity {
    /// Reads [`USER_ID_HEADER`]. Missing, non-UTF-8, or blank values
    /// resolve to an anonymous viewer.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let user_id = headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| UserId::new(v.trim()).ok());
        Self { user_id }
    }
}

impl IdentityProvider for HeaderIdentity {
    fn current_user_id(&self) -> Option<UserId> {
        self.user_id.clone()
    }
}
