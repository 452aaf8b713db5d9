//! WASM bindings for the array helpers.
//!
//! Each function works on a JavaScript `Array` of arbitrary values. Helpers
//! that mutate in Rust mutate the JS array in place too, and element
//! comparison is strict equality (`===`).

use js_sys::{Array, Function};
use wasm_bindgen::prelude::*;

use super::ops;
use crate::error::HelperError;
use crate::interop::js_string;

/// Replaces the contents of `array` with `items`, keeping the same JS object.
fn refill(array: &Array, items: Vec<JsValue>) {
    array.set_length(0);
    for item in items {
        array.push(&item);
    }
}

/// Returns a random item, or `undefined` for an empty array.
///
/// # Example (JavaScript)
/// ```js
/// arrayRandomItem([2, 3, 4, '5']); // '5'
/// ```
#[wasm_bindgen(js_name = arrayRandomItem)]
pub fn array_random_item(array: &Array) -> JsValue {
    let items = array.to_vec();
    ops::random_item(&items)
        .cloned()
        .unwrap_or(JsValue::UNDEFINED)
}

/// Removes and returns the item at `index` (random when omitted).
///
/// Negative indices count back from the end, as with `splice`. Returns
/// `undefined` when nothing could be extracted.
///
/// # Example (JavaScript)
/// ```js
/// const items = [1, 2, 3];
/// arrayPickOne(items, -1); // 3, items is now [1, 2]
/// ```
#[wasm_bindgen(js_name = arrayPickOne)]
pub fn array_pick_one(array: &Array, index: Option<i32>) -> JsValue {
    let mut items = array.to_vec();
    match ops::pick_one_relative(&mut items, index.map(|i| i as isize)) {
        Some(item) => {
            refill(array, items);
            item
        }
        None => JsValue::UNDEFINED,
    }
}

/// Removes every item for which `predicate(item, index)` is truthy and
/// returns the removed items in their original order.
///
/// The predicate runs for every index, last to first, before the array is
/// touched, so a throwing predicate leaves the array unchanged.
///
/// # Example (JavaScript)
/// ```js
/// const items = [2, 3, 5, 6];
/// arrayRemove(items, (item) => item === 3); // [3], items is now [2, 5, 6]
/// ```
#[wasm_bindgen(js_name = arrayRemove)]
pub fn array_remove(array: &Array, predicate: &Function) -> Result<Array, JsValue> {
    let mut items = array.to_vec();

    let mut matches = vec![false; items.len()];
    for index in (0..items.len()).rev() {
        let verdict = predicate
            .call2(&JsValue::NULL, &items[index], &JsValue::from(index as u32))
            .map_err(|e| HelperError::predicate(js_string(&e)))?;
        matches[index] = verdict.is_truthy();
    }

    let removed = ops::remove_where(&mut items, |_, index| matches[index]);
    refill(array, items);
    Ok(removed.into_iter().collect())
}

/// Shuffles the array in place and returns it.
#[wasm_bindgen(js_name = arrayShuffleItems)]
pub fn array_shuffle_items(array: &Array) -> Array {
    let mut items = array.to_vec();
    ops::shuffle(&mut items);
    refill(array, items);
    array.clone()
}

/// Removes the first item strictly equal to `value`, in place.
#[wasm_bindgen(js_name = arrayRemoveItemOnce)]
pub fn array_remove_item_once(array: &Array, value: JsValue) -> Array {
    let mut items = array.to_vec();
    let before = items.len();
    ops::remove_first(&mut items, &value);
    if items.len() != before {
        refill(array, items);
    }
    array.clone()
}

/// Returns a new array without any item strictly equal to `value`.
#[wasm_bindgen(js_name = arrayRemoveItemAll)]
pub fn array_remove_item_all(array: &Array, value: JsValue) -> Array {
    ops::remove_all(&array.to_vec(), &value).into_iter().collect()
}

/// Joins items with `separator`, using `end` for the last junction.
///
/// # Example (JavaScript)
/// ```js
/// arrayJoin(['a', 'b', 'c'], ', ', ' and '); // 'a, b and c'
/// ```
#[wasm_bindgen(js_name = arrayJoin)]
pub fn array_join(array: &Array, separator: Option<String>, end: Option<String>) -> String {
    let parts: Vec<String> = array.iter().map(|item| js_string(&item)).collect();
    ops::join_custom(&parts, separator.as_deref(), end.as_deref())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use js_sys::BigInt;
    use wasm_bindgen_test::wasm_bindgen_test;

    fn numbers(values: &[u32]) -> Array {
        values.iter().map(|v| JsValue::from(*v)).collect()
    }

    #[wasm_bindgen_test]
    fn test_pick_one_negative_index_takes_last() {
        let items = numbers(&[1, 2, 3]);
        assert_eq!(array_pick_one(&items, Some(-1)), JsValue::from(3u32));
        assert_eq!(items.length(), 2);
        assert_eq!(items.get(1), JsValue::from(2u32));
    }

    #[wasm_bindgen_test]
    fn test_pick_one_out_of_range_is_undefined() {
        let items = numbers(&[1, 2, 3]);
        assert!(array_pick_one(&items, Some(3)).is_undefined());
        assert_eq!(items.length(), 3);
    }

    #[wasm_bindgen_test]
    fn test_join_renders_bigints() {
        let items: Array = [1u64, 2u64]
            .iter()
            .map(|v| JsValue::from(BigInt::from(*v)))
            .collect();
        assert_eq!(array_join(&items, Some("-".to_string()), None), "1-2");
    }
}
