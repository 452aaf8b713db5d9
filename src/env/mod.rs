//! Environment detection module.
//!
//! Probes answer questions about the hosting runtime through an injected
//! [`EnvironmentProvider`]; [`ambient`] binds them to the current process.

pub mod ambient;
pub mod probes;
pub mod provider;
pub mod report;
pub mod snapshot;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-exports for convenience
pub use probes::{
    in_browser, in_weex, is_android, is_blink, is_browser_tab_focused, is_chrome, is_edge,
    is_edge_chromium, is_firefox, is_ios, is_opera, is_safari, weex_platform,
};
pub use provider::{EnvironmentProvider, Signal, SignalValue};
pub use report::ProbeReport;
pub use snapshot::EnvSnapshot;

#[cfg(feature = "wasm")]
pub use wasm::GlobalScope;
