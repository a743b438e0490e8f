//! Parser limits

/// Default cap on a single buffered token or header line
pub const DEFAULT_MAX_LINE_LEN: usize = 8 * 1024;

/// Maximum number of headers to parse
pub const MAX_HEADERS: usize = 64;

/// Parser configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Longest method, target, version or header line accepted (bytes, excluding CRLF)
    pub max_line_len: usize,
    /// Maximum number of header lines
    pub max_headers: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_line_len: DEFAULT_MAX_LINE_LEN,
            max_headers: MAX_HEADERS,
        }
    }
}

impl ParserConfig {
    /// Create config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set max line length
    pub fn with_max_line_len(mut self, len: usize) -> Self {
        self.max_line_len = len;
        self
    }

    /// Set max header count
    pub fn with_max_headers(mut self, count: usize) -> Self {
        self.max_headers = count;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ParserConfig::default();
        assert_eq!(config.max_line_len, 8192);
        assert_eq!(config.max_headers, 64);
    }

    #[test]
    fn test_builders() {
        let config = ParserConfig::new().with_max_line_len(128).with_max_headers(4);
        assert_eq!(config.max_line_len, 128);
        assert_eq!(config.max_headers, 4);
    }
}
