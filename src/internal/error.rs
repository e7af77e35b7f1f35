use std::io;
use thiserror::Error;

// ========================================================================= //

/// The error returned when a string is not the tag of any
/// [`Colour`](crate::Colour).
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("'{text}' could not be converted to enum value")]
pub struct ParseColourError {
    text: String,
}

impl ParseColourError {
    pub(crate) fn new(text: &str) -> ParseColourError {
        ParseColourError { text: text.to_string() }
    }

    /// Returns the string that failed to match any tag.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consumes the error, returning the string that failed to match.
    pub fn into_text(self) -> String {
        self.text
    }
}

impl From<ParseColourError> for io::Error {
    fn from(error: ParseColourError) -> io::Error {
        io::Error::new(io::ErrorKind::InvalidInput, error)
    }
}

// ========================================================================= //


// ========================================================================= //
