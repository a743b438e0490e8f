//! quill-core: HTTP request assembly and request-level semantics
//!
//! Turns the events of [`quill_parser`] into an owned [`Request`] and derives
//! what a server needs to know from it.
//!
//! ## Modules
//! - `assemble` - [`Request::parse`], accepted only once the head is complete
//! - `connection` - keep-alive intent
//! - `cookie` - `Cookie` header decomposition
//! - `repository` - table lookup by name
//!
//! ## Example
//! ```
//! use quill_core::Request;
//!
//! let req = Request::parse(b"GET / HTTP/1.1\r\nCookie: a=1; b=2\r\n\r\n").unwrap();
//! assert!(req.is_persistent());
//! assert_eq!(req.cookie("b").as_deref(), Some("2"));
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all)]

mod assemble;
pub mod connection;
pub mod cookie;
pub mod error;
pub mod repository;
pub mod request;

// Re-exports
pub use connection::is_persistent;
pub use cookie::{cookies, parse_cookie_header};
pub use error::{Error, Result};
pub use repository::{MemoryTableRepository, TableRepository};
pub use request::{Headers, Request, RequestBuilder, HTTP_1_0, HTTP_1_1};

// Parser re-exports
pub use quill_parser::{Method, ParseError, ParserConfig};
