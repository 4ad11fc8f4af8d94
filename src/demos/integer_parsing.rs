//! Integer Parsing Demonstration
//!
//! Numbers parsed directly out of windows over a delimited string, with no
//! substring allocated per field.

use log::debug;

use crate::config::Window;
use crate::error::ViewError;
use crate::span::View;

/// Parse an `i32` out of each window over `text`, in order
pub fn run(text: &str, windows: &[Window]) -> Result<Vec<i32>, ViewError> {
    let source = View::from(text);
    let mut values = Vec::with_capacity(windows.len());

    for window in windows {
        let field = source.slice(window.start, window.length)?;
        let value: i32 = field.parse()?;
        debug!("[{}, +{}) -> {}", window.start, window.length, value);
        values.push(value);
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseIntegerError;

    #[test]
    fn test_two_fields() {
        let windows = [Window::new(0, 4), Window::new(5, 4)];
        assert_eq!(run("3489,3972", &windows), Ok(vec![3489, 3972]));
    }

    #[test]
    fn test_stops_at_first_bad_field() {
        let windows = [Window::new(0, 4), Window::new(4, 5)];
        assert_eq!(
            run("3489,3972", &windows),
            Err(ViewError::Parse(ParseIntegerError::InvalidDigit { position: 0 }))
        );
    }

    #[test]
    fn test_overflowing_field() {
        let windows = [Window::new(0, 10)];
        assert_eq!(
            run("9999999999", &windows),
            Err(ViewError::Parse(ParseIntegerError::Overflow))
        );
    }

    #[test]
    fn test_no_windows() {
        assert_eq!(run("3489,3972", &[]), Ok(vec![]));
    }
}
