//! Pure HTTP/1.0 wire and console helpers.
//!
//! # Design
//! The exact bytes sent on the wire and the exact lines printed on the
//! console are both produced here, as plain string functions with no I/O.
//! The fetcher and the driver go through this module, so the wire format
//! and output format stay testable without a socket.

/// Render the request sent to every target.
///
/// The byte sequence is fixed: request line, `Host` header, blank line.
/// HTTP/1.0 with no `Connection` header means the server closes the stream
/// after responding.
pub fn get_request(host: &str) -> String {
    format!("GET / HTTP/1.0\r\nHost: {host}\r\n\r\n")
}

/// True iff a decoded line is the blank-line boundary between the header
/// block and the body.
pub fn is_terminator(line: &str) -> bool {
    line == "\r\n"
}

/// Render one console line for a received header.
///
/// Trailing whitespace (the line terminator included) is stripped from the
/// raw decoded line before rendering.
pub fn header_line(host: &str, raw: &str) -> String {
    format!("{host} header > {}", raw.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_bytes_are_exact() {
        assert_eq!(
            get_request("www.sohu.com"),
            "GET / HTTP/1.0\r\nHost: www.sohu.com\r\n\r\n"
        );
        assert_eq!(get_request("t.tt"), "GET / HTTP/1.0\r\nHost: t.tt\r\n\r\n");
    }

    #[test]
    fn terminator_is_exactly_crlf() {
        assert!(is_terminator("\r\n"));
        assert!(!is_terminator(""));
        assert!(!is_terminator("\n"));
        assert!(!is_terminator(" \r\n"));
        assert!(!is_terminator("HTTP/1.0 200 OK\r\n"));
    }

    #[test]
    fn header_line_strips_trailing_whitespace() {
        assert_eq!(
            header_line("t.tt", "HTTP/1.0 200 OK\r\n"),
            "t.tt header > HTTP/1.0 200 OK"
        );
        assert_eq!(
            header_line("t.tt", "Server: nginx \t\r\n"),
            "t.tt header > Server: nginx"
        );
    }

    #[test]
    fn header_line_keeps_leading_whitespace() {
        // Obsolete header folding indents continuation lines; only the tail
        // is stripped.
        assert_eq!(
            header_line("t.tt", "  continued-value\r\n"),
            "t.tt header >   continued-value"
        );
    }
}
