//! Group handlers - selection commands, result queries, and live refresh.

mod error;
mod get_group_result;
mod get_page_route;
mod reopen_selection;
mod result_refresher;
mod save_progress;
mod submit_selection;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::GroupError;
pub use get_group_result::{
    GetGroupResultHandler, GetGroupResultQuery, GroupResult, GroupResultView, MemberRecommendation,
};
pub use get_page_route::{GetPageRouteHandler, GetPageRouteQuery, PageRouteResult};
pub use reopen_selection::{ReopenSelectionCommand, ReopenSelectionHandler, ReopenSelectionResult};
pub use result_refresher::{LiveResult, ResultRefresher};
pub use save_progress::{SaveProgressCommand, SaveProgressHandler, SaveProgressResult};
pub use submit_selection::{SubmitSelectionCommand, SubmitSelectionHandler, SubmitSelectionResult};
