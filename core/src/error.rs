//! Error types for the messaging REST client.
//!
//! # Design
//! Every facade call either returns an `ApiResponse` or one of these kinds —
//! never a raw transport or serde error. Callers branch on the kind: `Io`
//! means the service was never reached, `Client` means the service processed
//! the request and rejected it (the vendor's own `code`/`message` ride along
//! for programmatic handling). Nothing in this layer retries.

use std::fmt;

use crate::responses::RestStatus;

/// Errors raised by the transport delegate and propagated unchanged by the
/// resource facades.
#[derive(Debug)]
pub enum Error {
    /// Network-level failure (DNS, connect, read) before any HTTP response
    /// was received. No status code is available.
    Io(String),

    /// The service returned 401 — credentials rejected. The body at that
    /// point is HTML, not JSON, so no structured payload is carried.
    Authentication,

    /// The service returned a 4xx with a vendor error envelope.
    Client {
        /// HTTP status that accompanied the envelope.
        status: u16,
        /// The vendor's `{status, code, message}` envelope.
        error: RestStatus,
    },

    /// The response body was empty, unparseable, or missing its root
    /// element where one was required.
    Protocol(String),

    /// Catch-all: an unrecognized status (5xx and friends), a 4xx whose
    /// body was not a vendor envelope, or a failure while assembling the
    /// request. Carries no structured payload.
    Service(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(msg) => write!(f, "I/O error: {msg}"),
            Error::Authentication => write!(f, "authentication failed"),
            Error::Client { status, error } => {
                write!(f, "client error (HTTP {status})")?;
                if let Some(code) = &error.code {
                    write!(f, ", code {code}")?;
                }
                if let Some(message) = &error.message {
                    write!(f, ": {message}")?;
                }
                Ok(())
            }
            Error::Protocol(msg) => write!(f, "protocol error: {msg}"),
            Error::Service(msg) => write!(f, "service error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}
