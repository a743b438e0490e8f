//! Push-style request-head parser
//!
//! Bytes are fed in with [`Parser::parse`], in one piece or in arbitrary
//! chunks. Each recognized element is reported to a [`Handler`] as soon as it
//! is complete. Parsing stops after the blank line that ends the header block;
//! at that point the parser is in [`State::Body`] and any remaining bytes
//! belong to the body, which this crate never reads.

use crate::{Method, ParseError, ParserConfig, Result};
use memchr::{memchr, memchr3};
use tracing::trace;

/// Parser state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Reading the method token
    Method,
    /// Reading the request-target
    Target,
    /// Reading the protocol version
    Version,
    /// Reading header lines
    Headers,
    /// Head fully read, ready for body
    Body,
    /// A syntax error was found
    Error,
}

/// Receives parse events.
///
/// Slices borrow the parser's input or its internal scratch buffer and are
/// only valid for the duration of the call. Handlers that keep the data must
/// copy it.
pub trait Handler {
    fn on_method(&mut self, _method: Method) {}
    fn on_target(&mut self, _target: &[u8]) {}
    fn on_version(&mut self, _version: &[u8]) {}
    fn on_header(&mut self, _name: &[u8], _value: &[u8]) {}
}

/// Incremental HTTP/1.x request-head parser
#[derive(Debug)]
pub struct Parser {
    config: ParserConfig,
    state: State,
    /// Partial token or line carried between calls
    buf: Vec<u8>,
    header_count: usize,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    /// Create a parser with default limits
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    /// Create a parser with custom limits
    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            config,
            state: State::Method,
            buf: Vec::new(),
            header_count: 0,
        }
    }

    /// Current state
    #[inline]
    pub fn state(&self) -> State {
        self.state
    }

    /// True once the whole head has been read
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.state == State::Body
    }

    /// Limits in effect
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Feed bytes into the parser.
    ///
    /// Returns the number of bytes consumed. This is less than `data.len()`
    /// only when the head ends inside `data`; the rest is body. Once an error
    /// is returned the parser stays in [`State::Error`] and every further call
    /// fails with [`ParseError::Failed`].
    pub fn parse<H: Handler + ?Sized>(&mut self, data: &[u8], handler: &mut H) -> Result<usize> {
        if self.state == State::Error {
            return Err(ParseError::Failed);
        }

        match self.advance(data, handler) {
            Ok(consumed) => Ok(consumed),
            Err(err) => {
                trace!(state = ?self.state, error = %err, "parse failed");
                self.state = State::Error;
                self.buf.clear();
                Err(err)
            }
        }
    }

    fn advance<H: Handler + ?Sized>(&mut self, data: &[u8], handler: &mut H) -> Result<usize> {
        let mut pos = 0;

        while pos < data.len() {
            let rest = &data[pos..];

            match self.state {
                State::Method => {
                    let Some(n) = self.take_token(rest)? else {
                        return Ok(data.len());
                    };
                    pos += n;

                    let method = Method::parse(&self.buf).ok_or_else(|| {
                        ParseError::InvalidMethod(String::from_utf8_lossy(&self.buf).into_owned())
                    })?;
                    handler.on_method(method);
                    self.transition(State::Target);
                }
                State::Target => {
                    let Some(n) = self.take_token(rest)? else {
                        return Ok(data.len());
                    };
                    pos += n;

                    if self.buf.is_empty() {
                        return Err(ParseError::InvalidRequestLine);
                    }
                    handler.on_target(&self.buf);
                    self.transition(State::Version);
                }
                State::Version => {
                    let Some(n) = self.take_line(rest)? else {
                        return Ok(data.len());
                    };
                    pos += n;

                    if !is_http_version(&self.buf) {
                        return Err(ParseError::InvalidVersion(
                            String::from_utf8_lossy(&self.buf).into_owned(),
                        ));
                    }
                    handler.on_version(&self.buf);
                    self.transition(State::Headers);
                }
                State::Headers => {
                    let Some(n) = self.take_line(rest)? else {
                        return Ok(data.len());
                    };
                    pos += n;

                    if self.buf.is_empty() {
                        self.transition(State::Body);
                        return Ok(pos);
                    }
                    self.header_line(handler)?;
                    self.buf.clear();
                }
                State::Body | State::Error => return Ok(pos),
            }
        }

        Ok(pos)
    }

    fn transition(&mut self, next: State) {
        trace!(from = ?self.state, to = ?next, "parser state");
        self.state = next;
        self.buf.clear();
    }

    /// Buffer up to the next SP of the request line.
    ///
    /// Returns the bytes used including the SP, or `None` if `rest` ran out
    /// first. CR or LF before the SP means the request line is short.
    fn take_token(&mut self, rest: &[u8]) -> Result<Option<usize>> {
        let limit = self.config.max_line_len;
        match memchr3(b' ', b'\r', b'\n', rest) {
            Some(i) if rest[i] == b' ' => {
                self.stash(&rest[..i], limit)?;
                Ok(Some(i + 1))
            }
            Some(_) => Err(ParseError::InvalidRequestLine),
            None => {
                self.stash(rest, limit)?;
                Ok(None)
            }
        }
    }

    /// Buffer up to the next LF, dropping the line terminator.
    fn take_line(&mut self, rest: &[u8]) -> Result<Option<usize>> {
        // Room for the CR that precedes LF
        let limit = self.config.max_line_len.saturating_add(1);
        match memchr(b'\n', rest) {
            Some(i) => {
                self.stash(&rest[..i], limit)?;
                if self.buf.last() == Some(&b'\r') {
                    self.buf.pop();
                }
                if self.buf.len() > self.config.max_line_len {
                    return Err(ParseError::LineTooLong {
                        limit: self.config.max_line_len,
                    });
                }
                Ok(Some(i + 1))
            }
            None => {
                self.stash(rest, limit)?;
                Ok(None)
            }
        }
    }

    fn stash(&mut self, bytes: &[u8], limit: usize) -> Result<()> {
        if self.buf.len() + bytes.len() > limit {
            return Err(ParseError::LineTooLong {
                limit: self.config.max_line_len,
            });
        }
        self.buf.extend_from_slice(bytes);
        Ok(())
    }

    fn header_line<H: Handler + ?Sized>(&mut self, handler: &mut H) -> Result<()> {
        if self.header_count >= self.config.max_headers {
            return Err(ParseError::TooManyHeaders {
                limit: self.config.max_headers,
            });
        }

        let line = &self.buf;
        let invalid = || ParseError::InvalidHeader(String::from_utf8_lossy(line).into_owned());

        // obs-fold is not supported
        if matches!(line.first(), Some(b' ' | b'\t')) {
            return Err(invalid());
        }

        let colon = memchr(b':', line).ok_or_else(invalid)?;
        let name = &line[..colon];
        if name.is_empty() || !name.iter().all(|&b| is_token(b)) {
            return Err(invalid());
        }

        handler.on_header(name, trim_ows(&line[colon + 1..]));
        self.header_count += 1;
        Ok(())
    }
}

/// `HTTP/<digit>.<digit>`
fn is_http_version(v: &[u8]) -> bool {
    matches!(v, [b'H', b'T', b'T', b'P', b'/', major, b'.', minor]
        if major.is_ascii_digit() && minor.is_ascii_digit())
}

/// RFC 7230 tchar
#[inline]
fn is_token(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'!' | b'#' | b'$' | b'%' | b'&' | b'\'' | b'*' | b'+' | b'-' | b'.' | b'^' | b'_'
                | b'`' | b'|' | b'~'
        )
}

fn trim_ows(mut s: &[u8]) -> &[u8] {
    while let [b' ' | b'\t', rest @ ..] = s {
        s = rest;
    }
    while let [rest @ .., b' ' | b'\t'] = s {
        s = rest;
    }
    s
}
