use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForumErrorKind {
    InvalidInput,
    Storage,
    Decode,
    Internal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForumError {
    pub kind: ForumErrorKind,
    pub message: String,
}

impl ForumError {
    pub fn new(kind: ForumErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ForumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ForumError {}

pub fn invalid_input(message: impl Into<String>) -> ForumError {
    ForumError::new(ForumErrorKind::InvalidInput, message)
}

pub fn storage_error(message: impl Into<String>) -> ForumError {
    ForumError::new(ForumErrorKind::Storage, message)
}

pub fn decode_error(message: impl Into<String>) -> ForumError {
    ForumError::new(ForumErrorKind::Decode, message)
}

pub fn internal_error(message: impl Into<String>) -> ForumError {
    ForumError::new(ForumErrorKind::Internal, message)
}
