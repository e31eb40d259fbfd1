//! HTTP DTOs for group endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;
use crate::domain::group::{MemberChoice, PageRoute, SelectionDraft, SelectionStage};
use crate::domain::preference::{ParsedCondition, PreferenceCodec};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// A member's selection, either structured or as a stored condition string.
///
/// `condition` wins over `selected_value` when both are present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SelectionRequest {
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub purpose: Option<String>,
    #[serde(default)]
    pub condition: Option<ParsedCondition>,
    #[serde(default)]
    pub selected_value: Option<String>,
}

impl From<SelectionRequest> for SelectionDraft {
    fn from(req: SelectionRequest) -> Self {
        let condition = match req.condition {
            Some(condition) => condition,
            None => PreferenceCodec::parse(req.selected_value.as_deref()),
        };
        SelectionDraft {
            area: req.area,
            purpose: req.purpose,
            condition,
        }
    }
}

/// Query parameters for the route endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RouteQuery {
    #[serde(default)]
    pub current: Option<PageRoute>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// A member row.
#[derive(Debug, Clone, Serialize)]
pub struct MemberResponse {
    pub user_id: String,
    pub selected_area: Option<String>,
    pub selected_purpose: Option<String>,
    pub selected_value: Option<String>,
    pub is_ready: bool,
    pub stage: SelectionStage,
    pub updated_at: Timestamp,
}

impl From<MemberChoice> for MemberResponse {
    fn from(member: MemberChoice) -> Self {
        Self {
            stage: SelectionStage::of(&member),
            user_id: member.user_id.to_string(),
            selected_area: member.selected_area,
            selected_purpose: member.selected_purpose,
            selected_value: member.selected_value,
            is_ready: member.is_ready,
            updated_at: member.updated_at,
        }
    }
}

/// Response to a submit.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitResponse {
    pub member: MemberResponse,
    pub event_id: String,
}

/// Response to a progress save.
#[derive(Debug, Clone, Serialize)]
pub struct SaveProgressResponse {
    pub member: MemberResponse,
    pub missing: Vec<&'static str>,
}

/// Response to a reopen.
#[derive(Debug, Clone, Serialize)]
pub struct ReopenResponse {
    pub member: MemberResponse,
    pub draft: SelectionDraft,
    pub reopened: bool,
}

/// Error body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl ToString, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}
