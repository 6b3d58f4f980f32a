use std::error::Error;
use std::fmt;

/// A single parse failure. Parsing never aborts on one of these — the
/// parser records it and keeps going, so a caller sees every problem in
/// one pass instead of one-at-a-time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for ParseError {}
