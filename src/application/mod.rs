//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers write a member's own row; query handlers read a fresh
//! snapshot and derive everything from it.

pub mod handlers;

pub use handlers::group::{
    GetGroupResultHandler, GetGroupResultQuery, GetPageRouteHandler, GetPageRouteQuery,
    GroupError, GroupResult, GroupResultView, LiveResult, MemberRecommendation, PageRouteResult,
    ReopenSelectionCommand, ReopenSelectionHandler, ReopenSelectionResult, ResultRefresher,
    SaveProgressCommand, SaveProgressHandler, SaveProgressResult, SubmitSelectionCommand,
    SubmitSelectionHandler, SubmitSelectionResult,
};
