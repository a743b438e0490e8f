//! Persistent-connection intent
//!
//! Computes whether the client asked for the connection to stay open after
//! this request. Nothing here touches a socket.

use crate::request::{Request, HTTP_1_1};

/// `Connection` value that requests a persistent connection below HTTP/1.1
pub const KEEP_ALIVE: &str = "keep-alive";

/// Whether the request asks for a persistent connection.
///
/// * `HTTP/1.1` is always persistent. An explicit `Connection: close` does
///   not change that.
/// * Any other version is persistent only when the first `Connection` header
///   is exactly `keep-alive` (value compared case-sensitively).
///
/// Recomputed from the headers on every call.
pub fn is_persistent(request: &Request) -> bool {
    if request.version() == HTTP_1_1 {
        return true;
    }

    request.header("Connection") == Some(KEEP_ALIVE)
}
