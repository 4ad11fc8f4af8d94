//! Ordinal Comparison
//!
//! Lexicographic comparison by raw element value: no locale, no case
//! folding. Only the relative order is reported, never a distance.
//!
//! For byte views over UTF-8 text, byte order and code point order agree,
//! so comparing encoded bytes orders text by code point.

use std::cmp::Ordering;

use serde::Serialize;

use super::view::View;

/// Relative order of two element sequences
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Ordinal {
    /// Left sorts before right
    Before,
    /// Same length, same elements
    Equal,
    /// Left sorts after right
    After,
}

impl Ordinal {
    /// Order seen from the other side
    pub fn reverse(self) -> Self {
        match self {
            Ordinal::Before => Ordinal::After,
            Ordinal::Equal => Ordinal::Equal,
            Ordinal::After => Ordinal::Before,
        }
    }

    pub fn is_eq(self) -> bool {
        self == Ordinal::Equal
    }
}

impl From<Ordering> for Ordinal {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Ordinal::Before,
            Ordering::Equal => Ordinal::Equal,
            Ordering::Greater => Ordinal::After,
        }
    }
}

impl From<Ordinal> for Ordering {
    fn from(ordinal: Ordinal) -> Self {
        match ordinal {
            Ordinal::Before => Ordering::Less,
            Ordinal::Equal => Ordering::Equal,
            Ordinal::After => Ordering::Greater,
        }
    }
}

/// Compare two element sequences by ordinal value.
///
/// Pairwise up to the shorter length; the first mismatch decides. If every
/// pair matches, the shorter sequence comes first.
pub fn compare_ordinal<T: Ord>(left: &[T], right: &[T]) -> Ordinal {
    for (l, r) in left.iter().zip(right) {
        match l.cmp(r) {
            Ordering::Equal => continue,
            other => return other.into(),
        }
    }
    left.len().cmp(&right.len()).into()
}

/// Compare two views by ordinal value
pub fn compare<T: Ord>(left: View<'_, T>, right: View<'_, T>) -> Ordinal {
    compare_ordinal(left.as_slice(), right.as_slice())
}

impl<'a, T: Ord> View<'a, T> {
    /// Ordinal comparison against another view
    pub fn compare(&self, other: &View<'_, T>) -> Ordinal {
        compare_ordinal(self.as_slice(), other.as_slice())
    }

    /// Ordinal comparison against a whole sequence, treated as a full-range view
    pub fn compare_to_storage(&self, storage: &[T]) -> Ordinal {
        self.compare(&View::new(storage))
    }
}

impl<'a, 'b, T: PartialEq> PartialEq<View<'b, T>> for View<'a, T> {
    fn eq(&self, other: &View<'b, T>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<'a, T: Eq> Eq for View<'a, T> {}

impl<'a, T: PartialEq> PartialEq<[T]> for View<'a, T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<'a, T: PartialEq, const N: usize> PartialEq<[T; N]> for View<'a, T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other
    }
}

impl<'a> PartialEq<str> for View<'a, u8> {
    fn eq(&self, other: &str) -> bool {
        self.as_slice() == other.as_bytes()
    }
}

impl<'a, T: Ord> PartialOrd for View<'a, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<'a, T: Ord> Ord for View<'a, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hello_before_world() {
        let text = "Hello World";
        let hello = View::from_text(text, 0, 5).unwrap();
        let world = View::from_text(text, 6, 5).unwrap();

        assert_eq!(compare(hello, world), Ordinal::Before);
        assert_eq!(compare(world, hello), Ordinal::After);
        assert_eq!(hello.compare(&hello), Ordinal::Equal);
    }

    #[test]
    fn test_prefix_sorts_first() {
        let text = "Hello World";
        let hello = View::from_text(text, 0, 5).unwrap();

        assert_eq!(hello.compare_to_storage(text.as_bytes()), Ordinal::Before);
        assert_eq!(View::from(text).compare(&hello), Ordinal::After);
    }

    #[test]
    fn test_ordinal_not_case_folded() {
        // 'Z' (0x5A) < 'a' (0x61) by raw value
        let upper = View::from("Zebra");
        let lower = View::from("apple");
        assert_eq!(upper.compare(&lower), Ordinal::Before);
    }

    #[test]
    fn test_equal_content_different_storage() {
        let a = "xxabcxx";
        let b = "abc";
        let left = View::from_text(a, 2, 3).unwrap();
        let right = View::from(b);

        assert_eq!(left.compare(&right), Ordinal::Equal);
        assert_eq!(left, right);
        assert!(left == *"abc");
    }

    #[test]
    fn test_empty_views() {
        let empty: View<'_, u8> = View::from("");
        let a = View::from("a");
        assert_eq!(empty.compare(&empty), Ordinal::Equal);
        assert_eq!(empty.compare(&a), Ordinal::Before);
    }

    #[test]
    fn test_utf16_code_units() {
        let wide: Vec<u16> = "Hello World".encode_utf16().collect();
        let hello = View::from_storage(&wide, 0, 5).unwrap();
        let world = View::from_storage(&wide, 6, 5).unwrap();
        assert_eq!(hello.compare(&world), Ordinal::Before);
    }

    #[test]
    fn test_ord_sorts_views() {
        let text = "pear,fig,apple";
        let mut views = vec![
            View::from_text(text, 0, 4).unwrap(),
            View::from_text(text, 5, 3).unwrap(),
            View::from_text(text, 9, 5).unwrap(),
        ];
        views.sort();
        let sorted: Vec<&str> = views.iter().map(|v| v.to_str().unwrap()).collect();
        assert_eq!(sorted, vec!["apple", "fig", "pear"]);
    }

    #[test]
    fn test_ordering_conversions() {
        assert_eq!(Ordinal::from(Ordering::Less), Ordinal::Before);
        assert_eq!(Ordering::from(Ordinal::After), Ordering::Greater);
        assert_eq!(Ordinal::Before.reverse(), Ordinal::After);
        assert!(Ordinal::Equal.reverse().is_eq());
    }
}
