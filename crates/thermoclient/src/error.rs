//! Result and error model for the generated client.
//!
//! Every endpoint call resolves to exactly one of three outcomes: a typed
//! success value, a structured validation failure, or a transport failure.
//! The two failure arms are the variants of [`ApiError`], so a caller
//! matching on `Result<T, ApiError>` covers all outcomes with no fallthrough.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result alias for all endpoint accessors.
pub type ApiResult<T> = Result<T, ApiError>;

/// The failure arm of an endpoint call.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The backend rejected the request with a field-located error list.
    /// Recoverable; surface the entries to the caller for correction.
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    /// Network failure, 5xx, or any response that could not be decoded.
    #[error("transport failure: {0}")]
    Transport(#[from] TransportFailure),
}

impl ApiError {
    /// The validation entries, when this is a validation failure.
    pub fn validation_detail(&self) -> Option<&[FieldError]> {
        match self {
            ApiError::Validation(errors) => Some(&errors.detail),
            ApiError::Transport(_) => None,
        }
    }
}

/// The backend's validation-failure body: `{"detail": [{loc, msg, type}]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationErrors {
    #[serde(default)]
    pub detail: Vec<FieldError>,
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in &self.detail {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{error}")?;
            first = false;
        }
        Ok(())
    }
}

/// One field-located validation entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub loc: Vec<LocSegment>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for segment in &self.loc {
            if !first {
                write!(f, ".")?;
            }
            write!(f, "{segment}")?;
            first = false;
        }
        write!(f, ": {} ({})", self.msg, self.kind)
    }
}

/// One step of a validation-error location: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocSegment {
    Index(u64),
    Key(String),
}

impl fmt::Display for LocSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocSegment::Index(i) => write!(f, "{i}"),
            LocSegment::Key(k) => f.write_str(k),
        }
    }
}

/// A failure below the validation layer.
#[derive(Error, Debug)]
pub enum TransportFailure {
    /// The backend answered with a non-success status that did not carry a
    /// structured validation body.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The request never completed.
    #[error("network error: {0}")]
    Network(String),

    /// The response body did not match the declared shape.
    #[error("decode error: {0}")]
    Decode(String),
}
