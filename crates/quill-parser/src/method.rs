//! HTTP Method enum
//!
//! The closed set of request methods the parser recognizes on the wire.

use crate::ParseError;

/// HTTP Method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Method {
    #[default]
    Get = 0,
    Post = 1,
    Put = 2,
    Delete = 3,
    Patch = 4,
    Head = 5,
    Options = 6,
    Connect = 7,
    Trace = 8,
}

impl Method {
    /// Parse a method token exactly as it appears on the wire (case-sensitive)
    #[inline(always)]
    pub fn parse(bytes: &[u8]) -> Option<Self> {
        // Fast path: check first byte
        match bytes.first()? {
            b'G' if bytes == b"GET" => Some(Method::Get),
            b'P' => match bytes {
                b"POST" => Some(Method::Post),
                b"PUT" => Some(Method::Put),
                b"PATCH" => Some(Method::Patch),
                _ => None,
            },
            b'D' if bytes == b"DELETE" => Some(Method::Delete),
            b'H' if bytes == b"HEAD" => Some(Method::Head),
            b'O' if bytes == b"OPTIONS" => Some(Method::Options),
            b'C' if bytes == b"CONNECT" => Some(Method::Connect),
            b'T' if bytes == b"TRACE" => Some(Method::Trace),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Patch => "PATCH",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
            Method::Connect => "CONNECT",
            Method::Trace => "TRACE",
        }
    }
}

/// Case-insensitive, for callers naming a method in code or config.
impl std::str::FromStr for Method {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::parse(s.to_ascii_uppercase().as_bytes())
            .ok_or_else(|| ParseError::InvalidMethod(s.to_string()))
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_parse_bytes() {
        assert_eq!(Method::parse(b"GET"), Some(Method::Get));
        assert_eq!(Method::parse(b"POST"), Some(Method::Post));
        assert_eq!(Method::parse(b"PUT"), Some(Method::Put));
        assert_eq!(Method::parse(b"DELETE"), Some(Method::Delete));
        assert_eq!(Method::parse(b"PATCH"), Some(Method::Patch));
        assert_eq!(Method::parse(b"HEAD"), Some(Method::Head));
        assert_eq!(Method::parse(b"OPTIONS"), Some(Method::Options));
        assert_eq!(Method::parse(b"CONNECT"), Some(Method::Connect));
        assert_eq!(Method::parse(b"TRACE"), Some(Method::Trace));
        assert_eq!(Method::parse(b"INVALID"), None);
        assert_eq!(Method::parse(b""), None);
    }

    #[test]
    fn test_method_parse_is_case_sensitive() {
        assert_eq!(Method::parse(b"get"), None);
        assert_eq!(Method::parse(b"Post"), None);
    }

    #[test]
    fn test_method_from_str() {
        assert_eq!("GET".parse::<Method>().unwrap(), Method::Get);
        assert_eq!("post".parse::<Method>().unwrap(), Method::Post);
        assert!(matches!(
            "BREW".parse::<Method>(),
            Err(ParseError::InvalidMethod(m)) if m == "BREW"
        ));
    }

    #[test]
    fn test_method_default_is_get() {
        assert_eq!(Method::default(), Method::Get);
        assert_eq!(Method::Get.to_string(), "GET");
        assert_eq!(Method::Options.as_str(), "OPTIONS");
    }
}
