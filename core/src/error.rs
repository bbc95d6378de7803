//! Error types for header fetching.
//!
//! # Design
//! `Connect` is kept separate from `Io` because callers distinguish "the
//! target was never reached" from "the connection dropped mid-exchange".
//! Non-UTF-8 header bytes get their own `Decode` variant. Every variant
//! carries the host, since errors from concurrent fetches arrive
//! interleaved.

use std::fmt;
use std::io;
use std::string::FromUtf8Error;

/// Errors returned by `fetch`.
#[derive(Debug)]
pub enum FetchError {
    /// DNS resolution or the TCP connect failed.
    Connect { host: String, source: io::Error },

    /// The connection failed while sending the request or reading headers.
    Io { host: String, source: io::Error },

    /// A header line was not valid UTF-8.
    Decode {
        host: String,
        source: FromUtf8Error,
    },
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Connect { host, source } => {
                write!(f, "connect to {host} failed: {source}")
            }
            FetchError::Io { host, source } => {
                write!(f, "i/o with {host} failed: {source}")
            }
            FetchError::Decode { host, source } => {
                write!(f, "header line from {host} is not utf-8: {source}")
            }
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Connect { source, .. } | FetchError::Io { source, .. } => Some(source),
            FetchError::Decode { source, .. } => Some(source),
        }
    }
}
