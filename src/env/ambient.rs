//! Nullary probes over the process's own environment.
//!
//! On `wasm32` with the `wasm` feature the JS global scope is read; anywhere
//! else the host has no browser globals and every probe sees an empty
//! [`EnvSnapshot`]. Nothing is cached, so each call reflects the current
//! state (e.g. tab focus toggling).

use super::probes;
use super::report::ProbeReport;

#[cfg(not(all(feature = "wasm", target_arch = "wasm32")))]
use super::snapshot::EnvSnapshot;

/// The provider backing the ambient probes.
#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
pub fn provider() -> super::wasm::GlobalScope {
    super::wasm::GlobalScope
}

/// The provider backing the ambient probes.
#[cfg(not(all(feature = "wasm", target_arch = "wasm32")))]
pub fn provider() -> EnvSnapshot {
    EnvSnapshot::default()
}

pub fn in_browser() -> bool {
    probes::in_browser(&provider())
}

pub fn in_weex() -> bool {
    probes::in_weex(&provider())
}

pub fn weex_platform() -> Option<String> {
    probes::weex_platform(&provider())
}

pub fn is_android() -> bool {
    probes::is_android(&provider())
}

pub fn is_ios() -> bool {
    probes::is_ios(&provider())
}

pub fn is_opera() -> bool {
    probes::is_opera(&provider())
}

pub fn is_firefox() -> bool {
    probes::is_firefox(&provider())
}

pub fn is_safari() -> bool {
    probes::is_safari(&provider())
}

pub fn is_edge() -> bool {
    probes::is_edge(&provider())
}

pub fn is_chrome() -> bool {
    probes::is_chrome(&provider())
}

pub fn is_edge_chromium() -> bool {
    probes::is_edge_chromium(&provider())
}

pub fn is_browser_tab_focused() -> bool {
    probes::is_browser_tab_focused(&provider())
}

pub fn is_blink() -> bool {
    probes::is_blink(&provider())
}

/// Every ambient probe at once.
pub fn report() -> ProbeReport {
    ProbeReport::collect(&provider())
}
