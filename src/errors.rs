// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{fmt, io};

#[derive(Debug)]
pub enum GenoscanError {
    Io(io::Error),
    // File contents are not valid UTF-8 text.
    Decode(String),
    // Normalized sequence is unusable (currently: shorter than MIN_SEQUENCE_LEN).
    Validation(String),
    Format(String),
    Json(serde_json::Error),
}

impl GenoscanError {
    pub fn too_short() -> Self {
        GenoscanError::Validation(String::from("sequence too short or invalid"))
    }
}

// These allow conversion to GenoscanError, required for main() to return Result<()> and for '?'
// to work.

impl From<io::Error> for GenoscanError {
    fn from(e: io::Error) -> Self {
        GenoscanError::Io(e)
    }
}

impl From<std::string::FromUtf8Error> for GenoscanError {
    fn from(e: std::string::FromUtf8Error) -> Self {
        GenoscanError::Decode(e.to_string())
    }
}

impl From<serde_json::Error> for GenoscanError {
    fn from(e: serde_json::Error) -> Self {
        GenoscanError::Json(e)
    }
}

impl fmt::Display for GenoscanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenoscanError::Io(e) => write!(f, "I/O error: {}", e),
            GenoscanError::Decode(msg) => write!(f, "Decode error: {}", msg),
            GenoscanError::Validation(msg) => write!(f, "Validation error: {}", msg),
            GenoscanError::Format(msg) => write!(f, "Format error: {}", msg),
            GenoscanError::Json(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for GenoscanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenoscanError::Io(e) => Some(e),
            GenoscanError::Json(e) => Some(e),
            _ => None,
        }
    }
}
