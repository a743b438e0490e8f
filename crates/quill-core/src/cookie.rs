//! Cookie header decomposition
//!
//! Cookies are never stored on the request. Each call re-reads the `Cookie`
//! header and splits it again.

use crate::Request;

/// Split a `Cookie` header value into `(name, value)` pairs.
///
/// Pairs are separated by `;` and trimmed. Segments that are empty, have no
/// `=`, or have an empty name are skipped. Order follows the header.
pub fn parse_cookie_header(header: &str) -> Vec<(String, String)> {
    header
        .split(';')
        .filter_map(|part| {
            let (name, value) = part.trim().split_once('=')?;
            let name = name.trim();
            if name.is_empty() {
                return None;
            }
            Some((name.to_string(), value.trim().to_string()))
        })
        .collect()
}

/// Cookies sent with the request, in header order.
///
/// Uses the first `Cookie` header; a request without one has no cookies.
pub fn cookies(request: &Request) -> Vec<(String, String)> {
    parse_cookie_header(request.header("Cookie").unwrap_or(""))
}

/// Value of the first cookie named `name` (exact match)
pub fn cookie(request: &Request, name: &str) -> Option<String> {
    cookies(request)
        .into_iter()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RequestBuilder;
    use quill_parser::Method;

    fn pairs(list: &[(&str, &str)]) -> Vec<(String, String)> {
        list.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn with_cookie(value: &str) -> Request {
        RequestBuilder::new(Method::Get, "/")
            .header("Cookie", value)
            .build()
    }

    #[test]
    fn test_parse_cookie_header() {
        assert_eq!(parse_cookie_header("a=1; b=2"), pairs(&[("a", "1"), ("b", "2")]));
        assert_eq!(
            parse_cookie_header("session=abc123; theme=dark; lang=en"),
            pairs(&[("session", "abc123"), ("theme", "dark"), ("lang", "en")])
        );
    }

    #[test]
    fn test_malformed_segments_skipped() {
        assert_eq!(parse_cookie_header("; ;c=3"), pairs(&[("c", "3")]));
        assert_eq!(parse_cookie_header("flag; =orphan; d=4"), pairs(&[("d", "4")]));
        assert!(parse_cookie_header("").is_empty());
    }

    #[test]
    fn test_values_kept_literally() {
        assert_eq!(
            parse_cookie_header(" token = a=b=c ; empty="),
            pairs(&[("token", "a=b=c"), ("empty", "")])
        );
        assert_eq!(parse_cookie_header("q=\"x y\""), pairs(&[("q", "\"x y\"")]));
    }

    #[test]
    fn test_duplicate_names_preserved() {
        assert_eq!(parse_cookie_header("a=1; a=2"), pairs(&[("a", "1"), ("a", "2")]));
        assert_eq!(cookie(&with_cookie("a=1; a=2"), "a"), Some("1".to_string()));
    }

    #[test]
    fn test_request_cookies() {
        let req = with_cookie("a=1; b=2");
        assert_eq!(cookies(&req), pairs(&[("a", "1"), ("b", "2")]));
        assert_eq!(req.cookie("b"), Some("2".to_string()));
        assert_eq!(req.cookie("B"), None);
    }

    #[test]
    fn test_missing_cookie_header() {
        let req = RequestBuilder::new(Method::Get, "/").build();
        assert!(cookies(&req).is_empty());
        assert_eq!(req.cookie("a"), None);
    }

    #[test]
    fn test_cookie_header_name_case_insensitive() {
        let req = RequestBuilder::new(Method::Get, "/")
            .header("cookie", "x=9")
            .header("Cookie", "y=8")
            .build();
        assert_eq!(req.cookies(), pairs(&[("x", "9")]));
    }

    #[test]
    fn test_idempotent() {
        let req = with_cookie("a=1; b=2");
        assert_eq!(req.cookies(), req.cookies());
    }
}
