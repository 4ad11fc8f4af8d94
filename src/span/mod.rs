//! Zero-copy views over borrowed storage
//!
//! This module provides:
//! - `View`: read-only (storage, start, length) window, `Copy`, bounds checked once
//! - `ViewMut`: the writable counterpart over exclusively borrowed storage
//! - Ordinal comparison (raw element value, no locale)
//! - Base-10 integer parsing straight from the viewed elements

pub mod view;
pub mod view_mut;
pub mod ordinal;
pub mod parse;

pub use view::View;
pub use view_mut::ViewMut;
pub use ordinal::{compare, compare_ordinal, Ordinal};
pub use parse::{parse_integer, DigitElement, ParseInteger};
