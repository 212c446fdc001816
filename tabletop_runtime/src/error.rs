//! Error taxonomy for the runtime layer.
//!
//! Every failure surfaced to the transport boundary is a [`SessionError`];
//! [`ErrorCode`] is the transport-agnostic classification the HTTP layer
//! maps onto a status code.

use serde::Serialize;
use thiserror::Error;

use tabletop_engine::invariants::InvariantViolation;
use tabletop_engine::transitions::TransitionError;

use crate::llm::LlmError;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("session store internal error: {0}")]
    Internal(String),
}

/// Failure inside a content source.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error(transparent)]
    Llm(#[from] LlmError),
    #[error("malformed scenario from content source: {0}")]
    Malformed(String),
    #[error("content source internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("{0}")]
    Validation(String),

    #[error("Session not found")]
    NotFound(String),

    #[error("Session {0:?} is already complete")]
    Complete(String),

    #[error("content generation failed: {0}")]
    Generator(#[from] ContentError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("invariant violation: {0}")]
    Invariant(#[from] InvariantViolation),

    #[error("{0}")]
    Internal(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Validation,
    NotFound,
    Generator,
    Internal,
}

impl ErrorCode {
    pub fn http_status(&self) -> u16 {
        match self {
            ErrorCode::Validation => 400,
            ErrorCode::NotFound => 404,
            ErrorCode::Generator => 502,
            ErrorCode::Internal => 500,
        }
    }
}

impl SessionError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::Validation(_) => ErrorCode::Validation,
            // A finished session no longer accepts choices; callers see it
            // the same way as an unknown id.
            SessionError::NotFound(_) | SessionError::Complete(_) => ErrorCode::NotFound,
            SessionError::Generator(_) => ErrorCode::Generator,
            SessionError::Store(_) | SessionError::Invariant(_) | SessionError::Internal(_) => {
                ErrorCode::Internal
            }
        }
    }
}

impl From<TransitionError> for SessionError {
    fn from(err: TransitionError) -> Self {
        match err {
            TransitionError::Complete(id) => SessionError::Complete(id),
            e @ TransitionError::ChoiceOutOfRange { .. } => SessionError::Validation(e.to_string()),
            e @ TransitionError::Overflow(_) => SessionError::Internal(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_map_to_status() {
        assert_eq!(SessionError::Validation("x".into()).code().http_status(), 400);
        assert_eq!(SessionError::NotFound("s".into()).code().http_status(), 404);
        assert_eq!(SessionError::Complete("s".into()).code().http_status(), 404);
        assert_eq!(
            SessionError::Generator(ContentError::Malformed("bad".into())).code().http_status(),
            502
        );
        assert_eq!(SessionError::Internal("boom".into()).code().http_status(), 500);
    }

    #[test]
    fn test_transition_errors_classify() {
        let e: SessionError = TransitionError::ChoiceOutOfRange {
            index: 4,
            stage: 0,
            available: 3,
        }
        .into();
        assert_eq!(e.code(), ErrorCode::Validation);

        let e: SessionError = TransitionError::Complete("s1".into()).into();
        assert!(matches!(e, SessionError::Complete(ref id) if id == "s1"));
    }
}
