//! Request extractors shared by the HTTP adapters.

use std::convert::Infallible;

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::adapters::identity::HeaderIdentity;

/// The viewer of a request, read from the `X-User-Id` header.
///
/// Never rejects; a missing header is an anonymous viewer.
#[derive(Debug, Clone)]
pub struct Viewer(pub HeaderIdentity);

#[async_trait]
impl<S> FromRequestParts<S> for Viewer
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Viewer(HeaderIdentity::from_headers(&parts.headers)))
    }
}
