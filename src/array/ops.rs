//! Sequence helpers: random selection, extraction, filtered removal,
//! shuffling and custom joins.
//!
//! Every randomised helper has a `*_with` twin taking an explicit RNG so
//! callers can seed it. Mutating helpers work in place and hand the same
//! sequence back for chaining.

use std::fmt::Display;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

use crate::error::{HelperError, HelperResult};

// =============================================================================
// RANDOM SELECTION
// =============================================================================

/// Returns a uniformly random element, or `None` for an empty sequence.
///
/// ```rust
/// use helperkit::random_item;
///
/// let items = [2, 3, 4, 5];
/// assert!(items.contains(random_item(&items).unwrap()));
/// assert_eq!(random_item::<i32>(&[]), None);
/// ```
pub fn random_item<T>(seq: &[T]) -> Option<&T> {
    random_item_with(seq, &mut rand::thread_rng())
}

/// [`random_item`] with a caller-supplied RNG.
pub fn random_item_with<'a, T, R: Rng + ?Sized>(seq: &'a [T], rng: &mut R) -> Option<&'a T> {
    seq.choose(rng)
}

/// Removes and returns the element at `index`, or at a random index when
/// `index` is `None`.
///
/// An explicit index past the end extracts nothing and leaves the sequence
/// untouched.
pub fn pick_one<T>(seq: &mut Vec<T>, index: Option<usize>) -> Option<T> {
    pick_one_with(seq, index, &mut rand::thread_rng())
}

/// [`pick_one`] with a caller-supplied RNG.
pub fn pick_one_with<T, R: Rng + ?Sized>(
    seq: &mut Vec<T>,
    index: Option<usize>,
    rng: &mut R,
) -> Option<T> {
    let index = match index {
        Some(index) => index,
        None if seq.is_empty() => return None,
        None => rng.gen_range(0..seq.len()),
    };

    if index >= seq.len() {
        trace!(index, len = seq.len(), "pick_one: index out of range, nothing extracted");
        return None;
    }

    Some(seq.remove(index))
}

/// [`pick_one`] with a relative index: negative values count back from the
/// end, the way `Array.prototype.splice` reads its start argument.
///
/// ```rust
/// use helperkit::pick_one_relative;
///
/// let mut items = vec!['a', 'b', 'c'];
/// assert_eq!(pick_one_relative(&mut items, Some(-1)), Some('c'));
/// assert_eq!(items, vec!['a', 'b']);
/// ```
pub fn pick_one_relative<T>(seq: &mut Vec<T>, index: Option<isize>) -> Option<T> {
    pick_one_relative_with(seq, index, &mut rand::thread_rng())
}

/// [`pick_one_relative`] with a caller-supplied RNG.
pub fn pick_one_relative_with<T, R: Rng + ?Sized>(
    seq: &mut Vec<T>,
    index: Option<isize>,
    rng: &mut R,
) -> Option<T> {
    let index = index.map(|index| resolve_relative_index(index, seq.len()));
    pick_one_with(seq, index, rng)
}

/// Negative indices count back from `len`, clamped at 0.
fn resolve_relative_index(index: isize, len: usize) -> usize {
    if index >= 0 {
        index as usize
    } else {
        len.saturating_sub(index.unsigned_abs())
    }
}

/// Strict variant of [`pick_one`] that reports why nothing was extracted.
pub fn try_pick_one<T>(seq: &mut Vec<T>, index: Option<usize>) -> HelperResult<T> {
    try_pick_one_with(seq, index, &mut rand::thread_rng())
}

/// [`try_pick_one`] with a caller-supplied RNG.
pub fn try_pick_one_with<T, R: Rng + ?Sized>(
    seq: &mut Vec<T>,
    index: Option<usize>,
    rng: &mut R,
) -> HelperResult<T> {
    match index {
        Some(index) if index >= seq.len() => {
            Err(HelperError::index_out_of_bounds(index, seq.len()))
        }
        None if seq.is_empty() => Err(HelperError::EmptySequence),
        _ => pick_one_with(seq, index, rng).ok_or(HelperError::EmptySequence),
    }
}

// =============================================================================
// REMOVAL
// =============================================================================

/// Removes every element matching `predicate` and returns them in their
/// original relative order.
///
/// The predicate sees each element with its original index, visited from
/// the last index down to the first. Removal happens behind the cursor, so
/// indices not yet visited never shift.
///
/// ```rust
/// use helperkit::remove_where;
///
/// let mut items = vec![2, 3, 5, 6];
/// assert_eq!(remove_where(&mut items, |_, index| index < 1), vec![2]);
/// assert_eq!(items, vec![3, 5, 6]);
/// ```
pub fn remove_where<T, F>(seq: &mut Vec<T>, mut predicate: F) -> Vec<T>
where
    F: FnMut(&T, usize) -> bool,
{
    let mut removed = Vec::new();
    for index in (0..seq.len()).rev() {
        if predicate(&seq[index], index) {
            removed.push(seq.remove(index));
        }
    }
    removed.reverse();

    trace!(removed = removed.len(), remaining = seq.len(), "remove_where");
    removed
}

/// Removes the first element equal to `value`, if any.
pub fn remove_first<'a, T: PartialEq>(seq: &'a mut Vec<T>, value: &T) -> &'a mut Vec<T> {
    if let Some(index) = seq.iter().position(|item| item == value) {
        seq.remove(index);
    }
    seq
}

/// Returns a new sequence without any element equal to `value`.
///
/// Unlike [`remove_first`], the input is left untouched.
pub fn remove_all<T: PartialEq + Clone>(seq: &[T], value: &T) -> Vec<T> {
    seq.iter().filter(|item| *item != value).cloned().collect()
}

// =============================================================================
// SHUFFLE
// =============================================================================

/// Shuffles the sequence in place and returns it.
///
/// Single backward pass: each position `i` is swapped with a random
/// position in `[0, i]`. The pass starts at the last valid index; the
/// JavaScript helper this replaces started one past the end and appended an
/// empty slot, which is not reproduced.
pub fn shuffle<T>(seq: &mut [T]) -> &mut [T] {
    shuffle_with(seq, &mut rand::thread_rng())
}

/// [`shuffle`] with a caller-supplied RNG.
pub fn shuffle_with<'a, T, R: Rng + ?Sized>(seq: &'a mut [T], rng: &mut R) -> &'a mut [T] {
    for i in (1..seq.len()).rev() {
        let j = rng.gen_range(0..=i);
        seq.swap(i, j);
    }
    seq
}

// =============================================================================
// JOIN
// =============================================================================

/// Joins elements with `separator`, using `end` for the final junction.
///
/// `separator` defaults to the empty string and `end` defaults to
/// `separator`.
///
/// ```rust
/// use helperkit::join_custom;
///
/// assert_eq!(join_custom(&["a", "b", "c"], Some(", "), Some(" and ")), "a, b and c");
/// assert_eq!(join_custom(&["a"], None, None), "a");
/// ```
pub fn join_custom<T: Display>(seq: &[T], separator: Option<&str>, end: Option<&str>) -> String {
    let separator = separator.unwrap_or("");
    let end = end.unwrap_or(separator);
    let last = seq.len().saturating_sub(1);

    let mut joined = String::new();
    for (index, item) in seq.iter().enumerate() {
        if index > 0 {
            joined.push_str(if index == last { end } else { separator });
        }
        joined.push_str(&item.to_string());
    }
    joined
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_random_item_is_member() {
        let items = vec![2, 3, 4, 5];
        for _ in 0..50 {
            let item = random_item(&items).unwrap();
            assert!(items.contains(item));
        }
    }

    #[test]
    fn test_random_item_empty() {
        let items: Vec<String> = Vec::new();
        assert!(random_item(&items).is_none());
    }

    #[test]
    fn test_random_item_seeded_is_deterministic() {
        let items: Vec<u32> = (0..100).collect();
        let first: Vec<u32> = {
            let mut rng = rng();
            (0..10).map(|_| *random_item_with(&items, &mut rng).unwrap()).collect()
        };
        let second: Vec<u32> = {
            let mut rng = rng();
            (0..10).map(|_| *random_item_with(&items, &mut rng).unwrap()).collect()
        };
        assert_eq!(first, second);
    }

    #[test]
    fn test_pick_one_explicit_index() {
        let mut items = vec!["a", "b", "c", "d"];
        assert_eq!(pick_one(&mut items, Some(1)), Some("b"));
        assert_eq!(items, vec!["a", "c", "d"]);
    }

    #[test]
    fn test_pick_one_out_of_range_leaves_sequence() {
        let mut items = vec![1, 2, 3];
        assert_eq!(pick_one(&mut items, Some(3)), None);
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn test_pick_one_random() {
        let mut items = vec![10, 20, 30];
        let picked = pick_one_with(&mut items, None, &mut rng()).unwrap();
        assert!([10, 20, 30].contains(&picked));
        assert_eq!(items.len(), 2);
        assert!(!items.contains(&picked));
    }

    #[test]
    fn test_pick_one_empty() {
        let mut items: Vec<i32> = Vec::new();
        assert_eq!(pick_one(&mut items, None), None);
        assert_eq!(pick_one(&mut items, Some(0)), None);
    }

    #[test]
    fn test_pick_one_relative_counts_from_end() {
        let mut items = vec![1, 2, 3, 4];
        assert_eq!(pick_one_relative(&mut items, Some(-1)), Some(4));
        assert_eq!(pick_one_relative(&mut items, Some(-3)), Some(1));
        assert_eq!(items, vec![2, 3]);
    }

    #[test]
    fn test_pick_one_relative_clamps_far_negative() {
        let mut items = vec!["x", "y"];
        assert_eq!(pick_one_relative(&mut items, Some(-10)), Some("x"));
        assert_eq!(items, vec!["y"]);
    }

    #[test]
    fn test_pick_one_relative_positive_and_random() {
        let mut items = vec![5, 6, 7];
        assert_eq!(pick_one_relative(&mut items, Some(1)), Some(6));
        assert_eq!(pick_one_relative(&mut items, Some(2)), None);
        assert_eq!(items, vec![5, 7]);

        let picked = pick_one_relative_with(&mut items, None, &mut rng()).unwrap();
        assert!([5, 7].contains(&picked));
        assert_eq!(items.len(), 1);

        let mut empty: Vec<u8> = Vec::new();
        assert_eq!(pick_one_relative(&mut empty, Some(-1)), None);
    }

    #[test]
    fn test_try_pick_one_errors() {
        let mut empty: Vec<i32> = Vec::new();
        assert_eq!(try_pick_one(&mut empty, None), Err(HelperError::EmptySequence));

        let mut items = vec![1, 2];
        assert_eq!(
            try_pick_one(&mut items, Some(5)),
            Err(HelperError::index_out_of_bounds(5, 2))
        );
        assert_eq!(try_pick_one(&mut items, Some(0)), Ok(1));
        assert_eq!(items, vec![2]);
    }

    #[test]
    fn test_remove_where_by_value() {
        let mut items = vec![2, 3, 5, 6];
        let removed = remove_where(&mut items, |item, _| *item == 3);
        assert_eq!(removed, vec![3]);
        assert_eq!(items, vec![2, 5, 6]);
    }

    #[test]
    fn test_remove_where_by_original_index() {
        let mut items = vec![2, 3, 5, 6];
        let removed = remove_where(&mut items, |_, index| index < 1);
        assert_eq!(removed, vec![2]);
        assert_eq!(items, vec![3, 5, 6]);
    }

    #[test]
    fn test_remove_where_keeps_relative_order() {
        let mut items = vec![1, 2, 3, 4, 5, 6];
        let removed = remove_where(&mut items, |item, _| item % 2 == 0);
        assert_eq!(removed, vec![2, 4, 6]);
        assert_eq!(items, vec![1, 3, 5]);
    }

    #[test]
    fn test_remove_where_visits_back_to_front() {
        let mut items = vec!['a', 'b', 'c'];
        let mut visited = Vec::new();
        remove_where(&mut items, |item, index| {
            visited.push((index, *item));
            index == 1
        });
        assert_eq!(visited, vec![(2, 'c'), (1, 'b'), (0, 'a')]);
        assert_eq!(items, vec!['a', 'c']);
    }

    #[test]
    fn test_remove_first() {
        let mut items = vec![1, 2, 2, 3];
        remove_first(&mut items, &2);
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn test_remove_first_absent_is_noop() {
        let mut items = vec![1, 2, 3];
        remove_first(&mut items, &9);
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn test_remove_all_leaves_input() {
        let items = vec![1, 2, 2, 3];
        assert_eq!(remove_all(&items, &2), vec![1, 3]);
        assert_eq!(items, vec![1, 2, 2, 3]);
    }

    #[test]
    fn test_remove_all_idempotent() {
        let items = vec!["x", "y", "x", "z"];
        let once = remove_all(&items, &"x");
        let twice = remove_all(&once, &"x");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let original: Vec<u32> = vec![1, 1, 2, 3, 5, 8, 13, 21];
        let mut rng = rng();
        for _ in 0..20 {
            let mut shuffled = original.clone();
            shuffle_with(&mut shuffled, &mut rng);
            assert_eq!(shuffled.len(), original.len());

            let mut sorted = shuffled.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, original);
        }
    }

    #[test]
    fn test_shuffle_never_grows() {
        let mut rng = rng();
        for len in 0..6u32 {
            let mut items: Vec<u32> = (0..len).collect();
            shuffle_with(&mut items, &mut rng);
            assert_eq!(items.len(), len as usize);
        }
    }

    #[test]
    fn test_shuffle_short_sequences() {
        let mut empty: Vec<u8> = Vec::new();
        assert!(shuffle(&mut empty).is_empty());

        let mut single = vec![7];
        assert_eq!(shuffle(&mut single).to_vec(), vec![7]);
    }

    #[test]
    fn test_shuffle_eventually_reorders() {
        let original: Vec<u32> = (0..10).collect();
        let mut rng = rng();
        let moved = (0..10).any(|_| {
            let mut items = original.clone();
            shuffle_with(&mut items, &mut rng);
            items != original
        });
        assert!(moved);
    }

    #[test]
    fn test_join_custom() {
        assert_eq!(join_custom(&["a", "b", "c"], Some(", "), Some(" and ")), "a, b and c");
    }

    #[test]
    fn test_join_custom_defaults() {
        assert_eq!(join_custom(&["a"], None, None), "a");
        assert_eq!(join_custom(&[1, 2, 3], None, None), "123");
        assert_eq!(join_custom(&[1, 2, 3], Some("-"), None), "1-2-3");
        assert_eq!(join_custom::<&str>(&[], Some(", "), Some(" or ")), "");
    }

    #[test]
    fn test_join_custom_two_items_uses_end() {
        assert_eq!(join_custom(&["tea", "coffee"], Some(", "), Some(" or ")), "tea or coffee");
    }
}
