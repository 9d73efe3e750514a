//! Slash-delimited request paths.

use percent_encoding::percent_decode_str;

/// A request path, percent-decoded and split on `/`.
///
/// Segment 0 is whatever precedes the first slash, which is the empty string
/// for every absolute path. `/fibonacci/10` therefore splits into
/// `["", "fibonacci", "10"]`. Decoding happens before splitting, so an
/// encoded `%2F` separates segments like a literal slash. Invalid UTF-8 is
/// replaced with U+FFFD.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segments {
    parts: Vec<String>,
}

impl Segments {
    pub fn parse(path: &str) -> Self {
        let decoded = percent_decode_str(path).decode_utf8_lossy();
        Self {
            parts: decoded.split('/').map(str::to_owned).collect(),
        }
    }

    /// Segment at `index`, if the path is long enough.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.parts.get(index).map(String::as_str)
    }
}
