//! Uniform response envelope returned by every gateway command.

use serde::Serialize;

/// Outcome class of a command, for transports that map to status codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Outcome {
    #[default]
    Ok,
    Created,
    /// Validation failure; the caller can correct the input.
    BadRequest,
    NotFound,
    /// Unexpected core fault.
    Internal,
}

impl Outcome {
    /// Conventional HTTP status code for this outcome.
    pub fn status_code(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::Created => 201,
            Self::BadRequest => 400,
            Self::NotFound => 404,
            Self::Internal => 500,
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, Self::Ok | Self::Created)
    }
}

/// `{data, message, success}` response value.
///
/// `outcome` is not part of the wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Envelope<T> {
    pub data: Option<T>,
    pub message: String,
    pub success: bool,
    #[serde(skip)]
    pub outcome: Outcome,
}

impl<T> Envelope<T> {
    pub(crate) fn ok(data: T, message: impl Into<String>) -> Self {
        Self::with_outcome(Some(data), message, Outcome::Ok)
    }

    pub(crate) fn created(data: T, message: impl Into<String>) -> Self {
        Self::with_outcome(Some(data), message, Outcome::Created)
    }

    /// Success without a payload (`data: null`).
    pub(crate) fn empty(message: impl Into<String>) -> Self {
        Self::with_outcome(None, message, Outcome::Ok)
    }

    pub(crate) fn bad_request(message: impl Into<String>) -> Self {
        Self::with_outcome(None, message, Outcome::BadRequest)
    }

    pub(crate) fn not_found(message: impl Into<String>) -> Self {
        Self::with_outcome(None, message, Outcome::NotFound)
    }

    pub(crate) fn internal(message: impl Into<String>) -> Self {
        Self::with_outcome(None, message, Outcome::Internal)
    }

    fn with_outcome(data: Option<T>, message: impl Into<String>, outcome: Outcome) -> Self {
        Self {
            data,
            message: message.into(),
            success: outcome.is_success(),
            outcome,
        }
    }

    /// Payload of a successful envelope.
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}
