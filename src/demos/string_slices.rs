//! String Slicing Demonstration
//!
//! Two windows over one string, compared with each other both ways and
//! with the whole string. The outcome borrows its text from the input.

use log::debug;
use serde::Serialize;

use crate::config::Window;
use crate::error::ViewError;
use crate::span::{compare, Ordinal, View};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StringSlicesOutcome<'a> {
    pub first: &'a str,
    pub second: &'a str,
    pub first_vs_second: Ordinal,
    pub second_vs_first: Ordinal,
    /// First window against the entire text
    pub first_vs_whole: Ordinal,
}

pub fn run<'a>(text: &'a str, windows: &[Window; 2]) -> Result<StringSlicesOutcome<'a>, ViewError> {
    let [a, b] = windows;
    let first = View::from_text(text, a.start, a.length)?;
    let second = View::from_text(text, b.start, b.length)?;

    let outcome = StringSlicesOutcome {
        first: first.to_str()?,
        second: second.to_str()?,
        first_vs_second: compare(first, second),
        second_vs_first: compare(second, first),
        first_vs_whole: first.compare_to_storage(text.as_bytes()),
    };

    debug!(
        "'{}' vs '{}': {:?}, reverse {:?}, vs whole {:?}",
        outcome.first,
        outcome.second,
        outcome.first_vs_second,
        outcome.second_vs_first,
        outcome.first_vs_whole
    );

    Ok(outcome)
}
