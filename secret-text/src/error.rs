//! Errors raised while parsing secrets from external input.

use serde_json::error::Category;

/// Returned by [`Secret::unmarshal_json`](crate::Secret::unmarshal_json) when
/// the input is not a JSON string literal.
///
/// Only the error category and position are kept. `serde_json` messages quote
/// scalar input verbatim, and that input is the secret, so the underlying
/// error is not kept as a source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error(
    "secret must be a JSON string ({} error at line {line} column {column})",
    category_name(.category)
)]
pub struct ParseError {
    category: Category,
    line: usize,
    column: usize,
}

impl ParseError {
    /// Kind of failure: syntax, data, EOF or I/O.
    #[must_use]
    pub fn classify(&self) -> Category {
        self.category
    }

    /// Line of the input where decoding failed, starting at 1.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Column of the input where decoding failed, starting at 1.
    #[must_use]
    pub fn column(&self) -> usize {
        self.column
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        Self {
            category: err.classify(),
            line: err.line(),
            column: err.column(),
        }
    }
}

fn category_name(category: &Category) -> &'static str {
    match category {
        Category::Io => "io",
        Category::Syntax => "syntax",
        Category::Data => "data",
        Category::Eof => "eof",
    }
}
