//! Method-style access to the sequence helpers on `Vec<T>`.

use std::fmt::Display;

use super::ops;

/// Extension trait exposing the helpers in [`ops`] as methods.
///
/// Mutating methods return the same vector so calls can be chained.
///
/// ```rust
/// use helperkit::SequenceExt;
///
/// let mut items = vec![1, 2, 2, 3, 4];
/// let len = items.remove_first(&2).shuffle_in_place().len();
/// assert_eq!(len, 4);
/// ```
pub trait SequenceExt<T> {
    /// See [`ops::random_item`].
    fn random_item(&self) -> Option<&T>;

    /// See [`ops::pick_one`].
    fn pick_one(&mut self, index: Option<usize>) -> Option<T>;

    /// See [`ops::remove_where`].
    fn remove_where<F>(&mut self, predicate: F) -> Vec<T>
    where
        F: FnMut(&T, usize) -> bool;

    /// See [`ops::shuffle`].
    fn shuffle_in_place(&mut self) -> &mut Self;

    /// See [`ops::remove_first`].
    fn remove_first(&mut self, value: &T) -> &mut Self
    where
        T: PartialEq;

    /// See [`ops::remove_all`].
    fn remove_all(&self, value: &T) -> Vec<T>
    where
        T: PartialEq + Clone;

    /// See [`ops::join_custom`].
    fn join_custom(&self, separator: Option<&str>, end: Option<&str>) -> String
    where
        T: Display;
}

impl<T> SequenceExt<T> for Vec<T> {
    fn random_item(&self) -> Option<&T> {
        ops::random_item(self)
    }

    fn pick_one(&mut self, index: Option<usize>) -> Option<T> {
        ops::pick_one(self, index)
    }

    fn remove_where<F>(&mut self, predicate: F) -> Vec<T>
    where
        F: FnMut(&T, usize) -> bool,
    {
        ops::remove_where(self, predicate)
    }

    fn shuffle_in_place(&mut self) -> &mut Self {
        ops::shuffle(self.as_mut_slice());
        self
    }

    fn remove_first(&mut self, value: &T) -> &mut Self
    where
        T: PartialEq,
    {
        ops::remove_first(self, value)
    }

    fn remove_all(&self, value: &T) -> Vec<T>
    where
        T: PartialEq + Clone,
    {
        ops::remove_all(self, value)
    }

    fn join_custom(&self, separator: Option<&str>, end: Option<&str>) -> String
    where
        T: Display,
    {
        ops::join_custom(self, separator, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chaining_mutations() {
        let mut items = vec![1, 2, 2, 3];
        let len = items.remove_first(&2).remove_first(&2).len();
        assert_eq!(len, 2);
        assert_eq!(items, vec![1, 3]);
    }

    #[test]
    fn test_methods_match_free_functions() {
        let mut items = vec!["a", "b", "c", "d"];
        assert_eq!(items.pick_one(Some(3)), Some("d"));
        assert_eq!(items.join_custom(Some(", "), Some(" & ")), "a, b & c");
        assert_eq!(items.remove_all(&"b"), vec!["a", "c"]);
        assert_eq!(items.remove_where(|item, _| *item == "a"), vec!["a"]);
        assert_eq!(items, vec!["b", "c"]);
    }

    #[test]
    fn test_shuffle_in_place_keeps_members() {
        let mut items: Vec<u8> = (0..16).collect();
        items.shuffle_in_place();
        assert!(items.random_item().is_some());

        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..16).collect::<Vec<u8>>());
    }
}
