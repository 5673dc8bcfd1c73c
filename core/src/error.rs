//! Error types for the todo store.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the resource does not exist" from "the server returned an unexpected
//! status." All other non-2xx responses land in `HttpError` with the raw
//! status code and body for debugging. A body that parses as JSON but lacks
//! the list envelope is `MalformedResponse`, distinct from a body that is not
//! JSON at all.

use thiserror::Error;

/// Errors returned by `TodoClient` parse methods and the fetch path.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response was JSON but the expected envelope fields were absent.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// No response was obtained from the transport.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Opaque failure reported by the host's transport.
#[derive(Debug, Error)]
#[error("transport failure: {message}")]
pub struct TransportError {
    message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A save action that did not produce a stored todo.
#[derive(Debug, Error)]
#[error("failed to save todo: {0}")]
pub struct SaveFailure(#[from] pub ApiError);
