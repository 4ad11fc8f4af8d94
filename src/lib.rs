//! Zero-copy views over strings and byte buffers
//!
//! A [`View`] borrows a contiguous range of some backing storage (a stack
//! array, a `String`, a `Vec`) and reads, slices, compares and parses it
//! without copying a single element. The borrow checker ties every view to
//! the lifetime of its storage, so a view can never dangle; range checks
//! happen once, when the view is created.
//!
//! ```
//! use span_views::{Ordinal, View};
//!
//! let text = "Hello World";
//! let hello = View::from_text(text, 0, 5)?;
//! let world = View::from_text(text, 6, 5)?;
//! assert_eq!(hello.compare(&world), Ordinal::Before);
//!
//! let numbers = View::from("3489,3972");
//! assert_eq!(numbers.slice(5, 4)?.parse::<i32>()?, 3972);
//! # Ok::<(), span_views::ViewError>(())
//! ```

pub mod config;
pub mod demos;
pub mod error;
pub mod span;
pub mod telemetry;

pub use config::{ConfigError, DemoConfig, Window};
pub use demos::{run_all, DemoReport};
pub use error::{ParseIntegerError, ViewError};
pub use span::{compare, parse_integer, Ordinal, View, ViewMut};
