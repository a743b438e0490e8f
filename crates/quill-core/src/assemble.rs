//! Request assembly
//!
//! A fresh [`Assembler`] subscribes to parser events and copies each element
//! into a [`Request`]. The request is handed out only after the parser reports
//! that the whole head was read, so callers never see a partial request.

use crate::{Error, Request, Result};
use bytes::Bytes;
use quill_parser::{Handler, Method, Parser, ParserConfig, State};
use tracing::{debug, warn};

/// Accumulates parser events into a request under construction
#[derive(Debug, Default)]
struct Assembler {
    request: Request,
}

impl Handler for Assembler {
    fn on_method(&mut self, method: Method) {
        self.request.method = method;
    }

    fn on_target(&mut self, target: &[u8]) {
        self.request.target = Bytes::copy_from_slice(target);
    }

    fn on_version(&mut self, version: &[u8]) {
        self.request.version = text(version);
    }

    fn on_header(&mut self, name: &[u8], value: &[u8]) {
        self.request.push_header(text(name), text(value));
    }
}

fn text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

impl Request {
    /// Parse a request head from raw bytes.
    ///
    /// `raw` must hold the request line and every header line up to and
    /// including the terminating blank line. Anything after that is ignored.
    ///
    /// # Errors
    ///
    /// * [`Error::MalformedRequest`] if the input ends before the header block
    ///   is closed, including empty input
    /// * [`Error::Parse`] for any syntax error found by the parser
    ///
    /// # Example
    /// ```
    /// use quill_core::{Method, Request};
    ///
    /// let req = Request::parse(b"GET /a?b=c HTTP/1.0\r\nConnection: keep-alive\r\n\r\n").unwrap();
    /// assert_eq!(req.method(), Method::Get);
    /// assert_eq!(req.target(), b"/a?b=c");
    /// assert!(req.is_persistent());
    /// ```
    pub fn parse(raw: &[u8]) -> Result<Self> {
        Self::parse_with(raw, &ParserConfig::default())
    }

    /// Parse with explicit parser limits
    pub fn parse_with(raw: &[u8], config: &ParserConfig) -> Result<Self> {
        Self::parse_head_with(raw, config).map(|(request, _)| request)
    }

    /// Parse and also return the length of the head.
    ///
    /// `raw[len..]` is where the body, if any, starts.
    pub fn parse_head(raw: &[u8]) -> Result<(Self, usize)> {
        Self::parse_head_with(raw, &ParserConfig::default())
    }

    /// [`Request::parse_head`] with explicit parser limits
    pub fn parse_head_with(raw: &[u8], config: &ParserConfig) -> Result<(Self, usize)> {
        let mut parser = Parser::with_config(*config);
        let mut assembler = Assembler::default();

        let consumed = parser.parse(raw, &mut assembler).map_err(|err| {
            warn!(error = %err, "rejected request head");
            Error::from(err)
        })?;

        if parser.state() != State::Body {
            debug!(state = ?parser.state(), len = raw.len(), "incomplete HTTP request");
            return Err(Error::incomplete());
        }

        let request = assembler.request;
        debug!(
            method = %request.method,
            headers = request.headers.len(),
            keep_alive = request.is_persistent(),
            "request assembled"
        );
        Ok((request, consumed))
    }
}
