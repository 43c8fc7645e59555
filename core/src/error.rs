//! Error types for the compile service client.
//!
//! # Design
//! Transport failures get their own variant with a coarse classification
//! because callers surface "the server is unreachable" very differently from
//! "the server answered with garbage." All non-2xx responses land in `Http`
//! with the raw status code and body for debugging.

use std::fmt;
use std::io;

/// Coarse classification of a transport-level failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    /// The request exceeded a connect or response timeout.
    Timeout,
    /// The remote end refused the connection.
    Refused,
    /// The connection was reset or aborted mid-flight.
    Reset,
    /// The host could not be reached or resolved.
    Unreachable,
    /// Any other I/O or protocol failure.
    Other,
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportKind::Timeout => write!(f, "request timed out"),
            TransportKind::Refused => write!(f, "connection refused"),
            TransportKind::Reset => write!(f, "connection reset"),
            TransportKind::Unreachable => write!(f, "server unreachable"),
            TransportKind::Other => write!(f, "network error"),
        }
    }
}

/// Errors produced between building a request and obtaining a parsed result.
#[derive(Debug)]
pub enum ClientError {
    /// The request never produced an HTTP response.
    Transport { kind: TransportKind, message: String },

    /// The server returned a non-2xx status.
    Http { status: u16, body: String },

    /// The server returned 2xx with an empty body.
    EmptyBody,

    /// The 2xx response body could not be deserialized; carries the raw body.
    Deserialization { message: String, body: String },

    /// The request payload could not be serialized to JSON.
    Serialization(String),
}

impl ClientError {
    /// Classify a ureq transport error into a `Transport` variant.
    pub(crate) fn from_transport(err: ureq::Error) -> Self {
        let kind = match &err {
            ureq::Error::Timeout(_) => TransportKind::Timeout,
            ureq::Error::ConnectionFailed | ureq::Error::HostNotFound => TransportKind::Unreachable,
            ureq::Error::Io(io_err) => classify_io(io_err),
            _ => TransportKind::Other,
        };
        ClientError::Transport {
            kind,
            message: err.to_string(),
        }
    }
}

fn classify_io(err: &io::Error) -> TransportKind {
    match err.kind() {
        io::ErrorKind::ConnectionRefused => TransportKind::Refused,
        io::ErrorKind::ConnectionReset
        | io::ErrorKind::ConnectionAborted
        | io::ErrorKind::BrokenPipe => TransportKind::Reset,
        io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => TransportKind::Timeout,
        io::ErrorKind::NotConnected | io::ErrorKind::AddrNotAvailable => TransportKind::Unreachable,
        _ => TransportKind::Other,
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Transport { kind, message } => {
                write!(f, "{kind}: {message}")
            }
            ClientError::Http { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ClientError::EmptyBody => write!(f, "empty response body"),
            ClientError::Deserialization { message, .. } => {
                write!(f, "deserialization failed: {message}")
            }
            ClientError::Serialization(msg) => {
                write!(f, "serialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ClientError {}
