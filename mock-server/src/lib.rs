//! Scriptable TCP server for exercising the header fetcher.
//!
//! # Design
//! The fetcher's wire format is hand-rolled HTTP/1.0 bytes, so its tests
//! need control below HTTP framing: exact response bytes, write timing,
//! close behavior. Every accepted connection gets the same treatment —
//! read the request up to its `\r\n\r\n` terminator (or end of stream),
//! record the bytes in a shared log, wait the configured delay, write the
//! configured reply, close.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::RwLock;

/// Response served by the standalone binary.
pub const DEFAULT_RESPONSE: &[u8] =
    b"HTTP/1.0 200 OK\r\nContent-Type: text/html\r\n\r\n<html>ok</html>";

/// Exact request bytes received, one entry per connection, in accept order.
pub type RequestLog = Arc<RwLock<Vec<Vec<u8>>>>;

/// What a scripted listener sends back.
#[derive(Clone, Debug)]
pub enum Reply {
    /// Write these bytes after the request terminator arrives, then close.
    Payload(Bytes),
    /// Close without writing anything.
    Hangup,
}

/// A server that gives every connection the same scripted treatment.
#[derive(Clone)]
pub struct MockServer {
    reply: Reply,
    delay: Duration,
    requests: RequestLog,
}

impl MockServer {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            delay: Duration::ZERO,
            requests: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Pause this long between reading a request and writing the reply.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Handle to the shared request log.
    pub fn requests(&self) -> RequestLog {
        Arc::clone(&self.requests)
    }

    /// Accept connections forever, one spawned task per connection.
    pub async fn run(self, listener: TcpListener) -> io::Result<()> {
        loop {
            let (socket, _) = listener.accept().await?;
            let server = self.clone();
            tokio::spawn(async move {
                // A failed connection only affects the one client it serves.
                let _ = server.serve_one(socket).await;
            });
        }
    }

    async fn serve_one(&self, mut socket: TcpStream) -> io::Result<()> {
        let request = read_request(&mut socket).await?;
        self.requests.write().await.push(request);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if let Reply::Payload(bytes) = &self.reply {
            socket.write_all(bytes).await?;
            socket.flush().await?;
        }
        Ok(())
    }
}

/// Read until the `\r\n\r\n` request terminator, or end of stream.
async fn read_request(socket: &mut TcpStream) -> io::Result<Vec<u8>> {
    let mut request = Vec::new();
    let mut buf = [0u8; 1024];
    loop {
        let n = socket.read(&mut buf).await?;
        if n == 0 {
            break;
        }
        request.extend_from_slice(&buf[..n]);
        if request.windows(4).any(|window| window == b"\r\n\r\n") {
            break;
        }
    }
    Ok(request)
}
