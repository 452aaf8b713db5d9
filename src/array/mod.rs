//! Array helpers module.
//!
//! Stateless operations over ordered, mutable sequences of any element type.

pub mod ext;
pub mod ops;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-exports for convenience
pub use ext::SequenceExt;
pub use ops::{
    join_custom, pick_one, pick_one_relative, pick_one_relative_with, pick_one_with, random_item,
    random_item_with, remove_all, remove_first, remove_where, shuffle, shuffle_with, try_pick_one,
    try_pick_one_with,
};
