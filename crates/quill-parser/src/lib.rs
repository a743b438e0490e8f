//! quill-parser: push-style HTTP/1.x request-head parser
//!
//! Recognizes the request line and header block and reports each element to a
//! [`Handler`] as it completes. The parser keeps no copy of what it reports,
//! never reads the body, and makes no decisions about what a request means.
//!
//! ## Example
//! ```
//! use quill_parser::{Handler, Method, Parser, State};
//!
//! #[derive(Default)]
//! struct Count(usize);
//!
//! impl Handler for Count {
//!     fn on_header(&mut self, _name: &[u8], _value: &[u8]) {
//!         self.0 += 1;
//!     }
//! }
//!
//! let mut parser = Parser::new();
//! let mut count = Count::default();
//! parser.parse(b"GET / HTTP/1.1\r\nHost: a\r\n\r\n", &mut count).unwrap();
//!
//! assert_eq!(parser.state(), State::Body);
//! assert_eq!(count.0, 1);
//! # let _ = Method::Get;
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all)]

mod config;
mod error;
mod method;
mod parser;

pub use config::{ParserConfig, DEFAULT_MAX_LINE_LEN, MAX_HEADERS};
pub use error::{ParseError, Result};
pub use method::Method;
pub use parser::{Handler, Parser, State};
