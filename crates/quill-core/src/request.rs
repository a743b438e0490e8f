//! HTTP Request types

use crate::{connection, cookie};
use bytes::Bytes;
use quill_parser::Method;
use smallvec::SmallVec;

/// Version string for HTTP/1.0
pub const HTTP_1_0: &str = "HTTP/1.0";

/// Version string for HTTP/1.1
pub const HTTP_1_1: &str = "HTTP/1.1";

/// Header list in arrival order (stack-allocated for small header counts)
pub type Headers = SmallVec<[(String, String); 16]>;

/// HTTP Request
///
/// Built by [`Request::parse`] or [`RequestBuilder`] and read-only afterwards.
/// Derived values such as cookies and keep-alive are computed from the
/// headers on every call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    pub(crate) method: Method,
    /// Request-target exactly as received
    pub(crate) target: Bytes,
    pub(crate) version: String,
    pub(crate) headers: Headers,
}

impl Request {
    /// HTTP method
    pub fn method(&self) -> Method {
        self.method
    }

    /// Raw request-target, undecoded
    pub fn target(&self) -> &[u8] {
        &self.target
    }

    /// Request-target as text, if it is valid UTF-8
    pub fn target_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.target).ok()
    }

    /// Target up to the first `?`
    pub fn path(&self) -> &[u8] {
        match self.query_start() {
            Some(i) => &self.target[..i],
            None => &self.target,
        }
    }

    /// Target after the first `?`, without the `?`
    pub fn query(&self) -> Option<&[u8]> {
        self.query_start().map(|i| &self.target[i + 1..])
    }

    fn query_start(&self) -> Option<usize> {
        self.target.iter().position(|&b| b == b'?')
    }

    /// Protocol version, e.g. `HTTP/1.1`
    pub fn version(&self) -> &str {
        &self.version
    }

    /// All headers in the order they were received
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Get a header value (case-insensitive, first match)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Every value for a header name, in order
    pub fn header_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.headers
            .iter()
            .filter(move |(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Check if a header is present
    pub fn has_header(&self, name: &str) -> bool {
        self.header(name).is_some()
    }

    /// Get content-length header
    pub fn content_length(&self) -> Option<usize> {
        self.header("content-length").and_then(|v| v.trim().parse().ok())
    }

    /// Whether the client intends to keep the connection open.
    /// See [`connection::is_persistent`].
    pub fn is_persistent(&self) -> bool {
        connection::is_persistent(self)
    }

    /// Cookies from the `Cookie` header, in header order
    pub fn cookies(&self) -> Vec<(String, String)> {
        cookie::cookies(self)
    }

    /// First cookie with the given name
    pub fn cookie(&self, name: &str) -> Option<String> {
        cookie::cookie(self, name)
    }

    pub(crate) fn push_header(&mut self, name: String, value: String) {
        self.headers.push((name, value));
    }
}

/// Builder for constructing requests
pub struct RequestBuilder {
    request: Request,
}

impl RequestBuilder {
    /// Create a new HTTP/1.1 request builder
    pub fn new(method: Method, target: impl AsRef<[u8]>) -> Self {
        Self {
            request: Request {
                method,
                target: Bytes::copy_from_slice(target.as_ref()),
                version: HTTP_1_1.to_string(),
                headers: SmallVec::new(),
            },
        }
    }

    /// Set the version string
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.request.version = version.into();
        self
    }

    /// Add a header
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.request.push_header(name.into(), value.into());
        self
    }

    /// Build the request
    pub fn build(self) -> Request {
        self.request
    }
}
