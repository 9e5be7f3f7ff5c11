//! The error-reporting sink.
//!
//! Every failure that crosses into the host becomes one [`ErrorReport`],
//! logged once as a structured event and then returned to the caller.

use derive_more::Display;
use phonepack_types::{CodecError, PhoneNumberError};
use thiserror::Error;

/// SQLSTATE-style classification of a failure.
#[derive(Display, PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum ErrCode {
    #[display(fmt = "22P02")]
    InvalidTextRepresentation,
    #[display(fmt = "22P03")]
    InvalidBinaryRepresentation,
    #[display(fmt = "2202E")]
    ArraySubscriptError,
    #[display(fmt = "53200")]
    OutOfMemory,
}

#[derive(Error, PartialEq, Eq, Clone, Debug)]
#[error("{message}")]
pub struct ErrorReport {
    pub code: ErrCode,
    pub message: String,
    pub detail: Option<String>,
}

impl ErrorReport {
    /// `subject` is what the host was working on: the input text, or a rendering of the record.
    pub fn new(err: &PhoneNumberError, subject: &str) -> Self {
        match err {
            PhoneNumberError::Parse(err) => Self {
                code: ErrCode::InvalidTextRepresentation,
                message: format!("unable to parse '{}' as a phone number", err.input),
                detail: Some(err.kind.to_string()),
            },
            PhoneNumberError::Codec(err) => Self::from_codec(err, subject),
        }
    }

    fn from_codec(err: &CodecError, subject: &str) -> Self {
        let (code, message) = match err {
            CodecError::EncodingOverflow { .. } => (
                ErrCode::InvalidTextRepresentation,
                format!("phone number '{subject}' is too long"),
            ),
            CodecError::InvalidDigit { .. } => (
                ErrCode::InvalidTextRepresentation,
                format!("unable to parse '{subject}' as a phone number"),
            ),
            CodecError::Malformed(_) => (
                ErrCode::InvalidBinaryRepresentation,
                format!("invalid binary phone number '{subject}'"),
            ),
            CodecError::IndexOutOfRange { .. } => (
                ErrCode::ArraySubscriptError,
                format!("digit index out of range in phone number '{subject}'"),
            ),
            CodecError::AllocationFailure { .. } => {
                (ErrCode::OutOfMemory, String::from("out of memory"))
            }
        };
        Self {
            code,
            message,
            detail: Some(err.to_string()),
        }
    }

    /// Logs this report, then hands it back.
    pub fn emit(self) -> Self {
        tracing::error!(
            code = %self.code,
            message = %self.message,
            detail = self.detail.as_deref().unwrap_or_default(),
            "phone number error"
        );
        self
    }
}

/// Builds and emits the report for `err`.
pub fn report(err: impl Into<PhoneNumberError>, subject: &str) -> ErrorReport {
    ErrorReport::new(&err.into(), subject).emit()
}
