use crate::router::strip_query;
use may_minihttp::Request;
use std::collections::HashMap;
use std::io::Read;
use tracing::{debug, warn};

/// Pieces of an HTTP request the service looks at.
#[derive(Debug, PartialEq)]
pub struct ParsedRequest {
    /// HTTP method as sent (GET, POST, etc.)
    pub method: String,
    /// Request path without the query string
    pub path: String,
    /// HTTP headers (lowercase keys)
    pub headers: HashMap<String, String>,
    /// Raw request body; empty when none was sent
    pub body: Vec<u8>,
}

impl ParsedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}

/// Extract useful information from a `may_minihttp::Request`.
///
/// The body is kept as bytes. Decoding it is the dispatcher's job, so a
/// malformed payload can be reported as a 400 for the right reason.
pub fn parse_request(req: Request) -> ParsedRequest {
    let method = req.method().to_string();
    let path = strip_query(req.path()).to_string();

    let headers: HashMap<String, String> = req
        .headers()
        .iter()
        .map(|h| {
            (
                h.name.to_ascii_lowercase(),
                String::from_utf8_lossy(h.value).to_string(),
            )
        })
        .collect();

    let mut body = Vec::new();
    if let Err(e) = req.body().read_to_end(&mut body) {
        warn!(error = %e, "failed to read request body");
        body.clear();
    }

    debug!(
        method = %method,
        path = %path,
        header_count = headers.len(),
        body_bytes = body.len(),
        "HTTP request parsed"
    );

    ParsedRequest {
        method,
        path,
        headers,
        body,
    }
}
