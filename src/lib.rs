//! HelperKit - Array helpers and runtime environment probes.
//!
//! Two independent groups of stateless functions:
//!
//! - **Array helpers**: random selection, extraction, predicate removal,
//!   shuffling, value removal and custom joins over any `Vec<T>`
//! - **Environment probes**: browser engine, platform and tab-focus checks
//!   evaluated against an injected [`EnvironmentProvider`]
//!
//! Nothing here panics on degenerate input: empty sequences, out-of-range
//! indices and missing globals come back as `None`, `false` or an untouched
//! sequence.
//!
//! # Example
//!
//! ```rust
//! use helperkit::{join_custom, remove_where, is_blink, EnvSnapshot, Signal};
//!
//! let mut scores = vec![2, 3, 5, 6];
//! let odd = remove_where(&mut scores, |score, _| score % 2 == 1);
//! assert_eq!(odd, vec![3, 5]);
//! assert_eq!(join_custom(&scores, Some(", "), Some(" and ")), "2 and 6");
//!
//! // Probes read from a provider instead of process globals
//! let env = EnvSnapshot::new()
//!     .with_window()
//!     .with_flag(Signal::Chrome)
//!     .with_flag(Signal::ChromeRuntime)
//!     .with_flag(Signal::Css);
//! assert!(is_blink(&env));
//! ```

pub mod array;
pub mod env;
pub mod error;

#[cfg(feature = "wasm")]
mod interop;

// Re-exports for convenience
pub use array::{
    join_custom, pick_one, pick_one_relative, pick_one_relative_with, pick_one_with, random_item,
    random_item_with, remove_all, remove_first, remove_where, shuffle, shuffle_with, try_pick_one,
    try_pick_one_with, SequenceExt,
};
pub use env::{
    in_browser, in_weex, is_android, is_blink, is_browser_tab_focused, is_chrome, is_edge,
    is_edge_chromium, is_firefox, is_ios, is_opera, is_safari, weex_platform, EnvSnapshot,
    EnvironmentProvider, ProbeReport, Signal, SignalValue,
};
pub use error::{HelperError, HelperResult};

#[cfg(feature = "wasm")]
pub use env::GlobalScope;
