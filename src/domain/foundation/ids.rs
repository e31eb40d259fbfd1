//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Maximum length of a group passcode.
pub const MAX_GROUP_CODE_LENGTH: usize = 32;

/// Identifier of a member, issued by the identity provider.
///
/// Opaque to this crate; only equality matters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Creates a new UserId, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("user_id"));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Shared passcode a member types in to join a group.
///
/// Normalized to upper case so `abc-1` and `ABC-1` name the same group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GroupCode(String);

impl GroupCode {
    /// Parses and normalizes a passcode.
    ///
    /// Accepts 1-32 characters of ASCII letters, digits, `-` and `_`.
    pub fn new(code: impl AsRef<str>) -> Result<Self, ValidationError> {
        let code = code.as_ref().trim();
        if code.is_empty() {
            return Err(ValidationError::empty_field("group_code"));
        }
        if code.chars().count() > MAX_GROUP_CODE_LENGTH {
            return Err(ValidationError::out_of_range(
                "group_code",
                1,
                MAX_GROUP_CODE_LENGTH as i32,
                code.chars().count() as i32,
            ));
        }
        if let Some(bad) = code
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        {
            return Err(ValidationError::invalid_format(
                "group_code",
                format!("unexpected character '{}'", bad),
            ));
        }
        Ok(Self(code.to_ascii_uppercase()))
    }

    /// Returns the normalized passcode.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for GroupCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<GroupCode> for String {
    fn from(code: GroupCode) -> Self {
        code.0
    }
}

impl fmt::Display for GroupCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GroupCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Key of a group in the member store.
///
/// Groups are addressed by their normalized passcode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(String);

impl GroupId {
    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<GroupCode> for GroupId {
    fn from(code: GroupCode) -> Self {
        Self(code.0)
    }
}

impl From<&GroupCode> for GroupId {
    fn from(code: &GroupCode) -> Self {
        Self(code.0.clone())
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GroupId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GroupCode::new(s).map(Self::from)
    }
}
