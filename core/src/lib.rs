//! Concurrent HTTP/1.0 header fetcher.
//!
//! # Overview
//! Opens one TCP connection per target host, sends a fixed `GET / HTTP/1.0`
//! request, and returns the response's header lines up to the blank-line
//! boundary. The `wget` binary drives one fetch task per host in a fixed
//! list and prints the rendered lines as each fetch completes.
//!
//! # Design
//! - `http` holds the pure wire helpers — request rendering, terminator
//!   detection, console-line rendering. No I/O, fully unit-tested.
//! - `fetcher::fetch` performs one whole exchange: connect, send, flush,
//!   read lines until the terminator or end of stream, close on drop.
//! - Each connection is owned by exactly one task for its entire lifetime;
//!   tasks share nothing, so there is no locking anywhere in this crate.
//! - No TLS, no redirects, no timeouts, no retries, no connection reuse.

pub mod error;
pub mod fetcher;
pub mod http;
pub mod types;

pub use error::FetchError;
pub use fetcher::fetch;
pub use types::{Target, HTTP_PORT};
