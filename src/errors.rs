use opkit_block::BlockError;
use opkit_json::{JsonError, JsonKind, RangeReason};
use opkit_primitives::{DecodeError, ReplaceError};
use opkit_vrf::{SigError, VrfError};
use thiserror::Error;

/// Every hard failure of an opkit primitive.
///
/// A VRF proof or signature that does not verify is not an error; it is
/// reported as `false` by the operation itself.
#[derive(Debug, Error)]
pub enum OpError {
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("parse error: {message}")]
    Parse { message: String },

    #[error("field not found: {key:?}")]
    FieldNotFound { key: String },

    #[error("type mismatch for {key:?}: expected {expected}, found {found}")]
    TypeMismatch {
        key: String,
        expected: JsonKind,
        found: &'static str,
    },

    #[error("range error for {key:?}: {reason}")]
    Range { key: String, reason: RangeReason },

    #[error("malformed input: {field} must be {expected} bytes, got {got}")]
    MalformedInput {
        field: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("out of bounds: {0}")]
    OutOfBounds(#[from] ReplaceError),

    #[error("block lookup: {0}")]
    Block(#[from] BlockError),
}

impl From<JsonError> for OpError {
    fn from(e: JsonError) -> Self {
        match e {
            JsonError::Parse(inner) => Self::Parse {
                message: inner.to_string(),
            },
            JsonError::FieldNotFound { key } => Self::FieldNotFound { key },
            JsonError::TypeMismatch {
                key,
                expected,
                found,
            } => Self::TypeMismatch {
                key,
                expected,
                found,
            },
            JsonError::Range { key, reason } => Self::Range { key, reason },
        }
    }
}

impl From<VrfError> for OpError {
    fn from(e: VrfError) -> Self {
        match e {
            VrfError::MalformedInput {
                field,
                expected,
                got,
            } => Self::MalformedInput {
                field,
                expected,
                got,
            },
        }
    }
}

impl From<SigError> for OpError {
    fn from(e: SigError) -> Self {
        match e {
            SigError::MalformedInput {
                field,
                expected,
                got,
            } => Self::MalformedInput {
                field,
                expected,
                got,
            },
        }
    }
}
