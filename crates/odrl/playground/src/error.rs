//! Error types for the playground

use crate::codec::CodecError;
use crate::engine::EngineError;
use crate::inputs::InputBuffer;
use thiserror::Error;

/// Errors from one evaluate-and-explain pass.
///
/// Decoding and classification problems never surface here; they only blank
/// the summary line.
#[derive(Debug, Error)]
pub enum SessionError {
    /// One of the three input buffers does not parse
    #[error("invalid {buffer} input: {source}")]
    InvalidInput {
        buffer: InputBuffer,
        #[source]
        source: CodecError,
    },

    /// The engine failed
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// The report graph could not be rendered as text
    #[error("could not render report: {0}")]
    Render(#[source] CodecError),
}

impl SessionError {
    /// Whether the caller should offer to reset the inputs to the samples
    pub fn offers_reset(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    /// The offending buffer, for input errors
    pub fn buffer(&self) -> Option<InputBuffer> {
        match self {
            Self::InvalidInput { buffer, .. } => Some(*buffer),
            _ => None,
        }
    }
}

/// Errors from the remote test-case index.
#[derive(Debug, Error)]
pub enum TestCaseError {
    /// No index URL configured
    #[error("test-case index URL is not configured")]
    NotConfigured,

    /// Transport failure or non-success status
    #[error("failed to fetch test-case index from {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// The index document does not parse
    #[error("test-case index does not parse: {0}")]
    Parse(#[from] CodecError),

    /// No test case with this identifier
    #[error("unknown test case: {identifier}")]
    UnknownTestCase { identifier: String },

    /// The test case does not link one of its graphs
    #[error("test case {identifier} has no {part}")]
    MissingPart {
        identifier: String,
        part: &'static str,
    },
}

/// Result type for session operations
pub type Result<T> = std::result::Result<T, SessionError>;
