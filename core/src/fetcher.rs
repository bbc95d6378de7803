//! The header fetcher: one connection, one request, one header block.
//!
//! # Design
//! `fetch` performs the whole exchange for a single target and returns the
//! raw decoded header lines in wire order. Printing is the caller's job;
//! `http::header_line` renders one console line per returned element. The
//! connection is owned by the calling task for its entire lifetime and
//! closes on drop at every exit path.

use std::mem;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, BufWriter};
use tokio::net::TcpStream;

use crate::error::FetchError;
use crate::http;
use crate::types::Target;

/// Fetch the response header block from one target.
///
/// Connects to `(host, port)`, sends `GET / HTTP/1.0` with a `Host` header,
/// and reads one line at a time until the blank-line terminator or end of
/// stream. Returned lines are raw: decoded as UTF-8 but with their `\r\n`
/// still attached. The terminator itself is never returned, and bytes past
/// it (the body) are never taken off the reader.
///
/// A missing terminator is not an error: a peer that closes the stream
/// early yields the lines received up to that point. Each await point
/// suspends only the calling task.
pub async fn fetch(target: &Target) -> Result<Vec<String>, FetchError> {
    let host = target.host.as_str();

    let stream = TcpStream::connect((host, target.port))
        .await
        .map_err(|e| FetchError::Connect {
            host: host.to_string(),
            source: e,
        })?;

    let mut writer = BufWriter::new(stream);
    writer
        .write_all(http::get_request(host).as_bytes())
        .await
        .map_err(|e| FetchError::Io {
            host: host.to_string(),
            source: e,
        })?;
    // Suspends under outbound backpressure; a no-op for a request this
    // small, but the request must be on the wire before we wait for lines.
    writer.flush().await.map_err(|e| FetchError::Io {
        host: host.to_string(),
        source: e,
    })?;

    let mut reader = BufReader::new(writer.into_inner());
    let mut headers = Vec::new();
    let mut line = Vec::new();
    loop {
        let n = reader
            .read_until(b'\n', &mut line)
            .await
            .map_err(|e| FetchError::Io {
                host: host.to_string(),
                source: e,
            })?;
        if n == 0 {
            // End of stream before the terminator: stop without error.
            break;
        }
        let decoded = String::from_utf8(mem::take(&mut line)).map_err(|e| FetchError::Decode {
            host: host.to_string(),
            source: e,
        })?;
        if http::is_terminator(&decoded) {
            break;
        }
        headers.push(decoded);
    }
    Ok(headers)
}
