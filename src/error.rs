//! Error types for view construction, access and parsing
//!
//! Every failure is local and surfaced immediately: a bounds violation
//! or malformed input. Nothing here is transient, so nothing is retried.

use std::fmt;

/// Errors raised by [`View`](crate::View) and [`ViewMut`](crate::ViewMut) operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// A requested range or index does not fit inside its bound.
    ///
    /// `offset` and `length` describe the request; `bound` is the length
    /// of the storage or view it was checked against. Element access is
    /// reported as a range of length 1.
    OutOfRange {
        offset: usize,
        length: usize,
        bound: usize,
    },
    /// Viewed content is not a valid base-10 integer for the target type
    Parse(ParseIntegerError),
    /// Viewed bytes are not valid UTF-8
    InvalidUtf8 { valid_up_to: usize },
}

impl ViewError {
    pub(crate) fn out_of_range(offset: usize, length: usize, bound: usize) -> Self {
        ViewError::OutOfRange {
            offset,
            length,
            bound,
        }
    }

    /// Check if this is a bounds violation
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, ViewError::OutOfRange { .. })
    }
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewError::OutOfRange {
                offset,
                length,
                bound,
            } => write!(
                f,
                "Out of range: [{}, {}+{}) exceeds bound {}",
                offset, offset, length, bound
            ),
            ViewError::Parse(e) => write!(f, "Parse error: {}", e),
            ViewError::InvalidUtf8 { valid_up_to } => {
                write!(f, "Invalid UTF-8 after {} valid bytes", valid_up_to)
            }
        }
    }
}

impl std::error::Error for ViewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ViewError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseIntegerError> for ViewError {
    fn from(e: ParseIntegerError) -> Self {
        ViewError::Parse(e)
    }
}

/// Why an integer could not be parsed from a view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseIntegerError {
    /// The view holds no elements
    Empty,
    /// Element at `position` is not a digit (or a sign in an invalid place)
    InvalidDigit { position: usize },
    /// Value does not fit the target integer type
    Overflow,
}

impl fmt::Display for ParseIntegerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseIntegerError::Empty => write!(f, "cannot parse integer from empty view"),
            ParseIntegerError::InvalidDigit { position } => {
                write!(f, "invalid digit at position {}", position)
            }
            ParseIntegerError::Overflow => write!(f, "number too large for target type"),
        }
    }
}

impl std::error::Error for ParseIntegerError {}
