//! Support for reading Lisp expressions from strings.

use std::io::ErrorKind;

use crate::data::Value;

mod cursor;
mod parse;
mod quotes;
mod token;

pub use cursor::{Cursor, MAX_DEPTH};
pub use parse::read_form;
pub use quotes::{balanced_quotes, properly_quoted_string};
pub use token::tokenize;


/// Read the first form from the string.
///
/// Anything after the first complete form is ignored.
pub fn read_str(input: &str) -> ReadResult<Value> {
    let tokens = tokenize(input);
    let mut cursor = Cursor::new(tokens);
    let form = read_form(&mut cursor)?;
    if !cursor.is_empty() {
        tracing::debug!(
            "ignoring {} token(s) after the first form",
            cursor.remaining()
        );
    }
    Ok(form)
}

/// Error type if a read does not complete.
///
/// The reader does not distinguish between running out of tokens mid-form,
/// an unclosed bracket, an odd-sized mapping, or a malformed string:
/// any of them means "this text is not one well-formed form".
/// The detail is for humans only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadErr {
    detail: String,
}

impl ReadErr {
    pub fn eof(detail: impl Into<String>) -> Self {
        ReadErr {
            detail: detail.into(),
        }
    }

    /// Add additional context to an error.
    pub fn annotate(self, more: impl AsRef<str>) -> Self {
        ReadErr {
            detail: format!("{}: {}", more.as_ref(), self.detail),
        }
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl std::fmt::Display for ReadErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        write!(f, "EOF: {}", self.detail)
    }
}

impl std::error::Error for ReadErr {}

/// The main result type for this module:
/// a T (token, form, etc), or a read error.
pub type ReadResult<T> = Result<T, ReadErr>;

impl From<ReadErr> for std::io::Error {
    fn from(value: ReadErr) -> Self {
        std::io::Error::new(ErrorKind::UnexpectedEof, value.detail)
    }
}
