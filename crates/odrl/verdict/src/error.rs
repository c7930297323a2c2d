//! Error types for verdict production

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Verdict errors
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerdictError {
    /// The request graph does not name exactly one value for a property
    #[error("malformed request: expected exactly one {property}, found {found}")]
    MalformedRequest { property: String, found: usize },
}

/// Result type for verdict operations
pub type Result<T> = std::result::Result<T, VerdictError>;
