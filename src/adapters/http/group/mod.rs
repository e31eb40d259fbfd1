//! HTTP adapter for group endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ErrorResponse, MemberResponse, ReopenResponse, RouteQuery, SaveProgressResponse,
    SelectionRequest, SubmitResponse,
};
pub use handlers::GroupAppState;
pub use routes::group_router;
