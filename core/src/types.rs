//! Fetch targets.
//!
//! # Design
//! A `Target` is plain immutable data: created from the host list at
//! startup, read by exactly one fetch task, discarded when that fetch
//! completes. The port is carried alongside the host so tests can point a
//! fetch at a listener on an OS-assigned port; production callers use
//! `Target::new` and always get port 80.

/// Default port for plain-HTTP fetches.
pub const HTTP_PORT: u16 = 80;

/// An immutable fetch target: one hostname and one port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub host: String,
    pub port: u16,
}

impl Target {
    pub fn new(host: &str) -> Self {
        Self::with_port(host, HTTP_PORT)
    }

    pub fn with_port(host: &str, port: u16) -> Self {
        Self {
            host: host.to_string(),
            port,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_targets_use_the_http_port() {
        let target = Target::new("example.com");
        assert_eq!(target.host, "example.com");
        assert_eq!(target.port, 80);
    }

    #[test]
    fn with_port_overrides_the_default() {
        let target = Target::with_port("127.0.0.1", 8080);
        assert_eq!(target.host, "127.0.0.1");
        assert_eq!(target.port, 8080);
    }
}
