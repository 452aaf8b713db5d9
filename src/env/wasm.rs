//! WASM bindings for the environment probes.
//!
//! [`GlobalScope`] reads the real JS global object through `Reflect`, and the
//! exported functions evaluate the probes against it on every call.

use js_sys::Reflect;
use tracing::trace;
use wasm_bindgen::prelude::*;

use super::probes;
use super::provider::{EnvironmentProvider, Signal, SignalValue};
use super::report::ProbeReport;
use super::snapshot::EnvSnapshot;
use crate::interop::{js_string, to_js_value};

// =============================================================================
// GLOBAL SCOPE PROVIDER
// =============================================================================

/// Provider backed by `globalThis`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalScope;

impl GlobalScope {
    /// Walks `path` from `target`; any missing or non-object step is `None`.
    fn lookup(target: &JsValue, path: &[&str]) -> Option<JsValue> {
        let mut current = target.clone();
        for key in path {
            if current.is_null() || current.is_undefined() {
                return None;
            }
            current = Reflect::get(&current, &JsValue::from_str(key)).ok()?;
        }
        if current.is_undefined() {
            None
        } else {
            Some(current)
        }
    }

    fn global(path: &[&str]) -> Option<JsValue> {
        Self::lookup(&JsValue::from(js_sys::global()), path)
    }

    fn window() -> Option<JsValue> {
        Self::global(&["window"])
    }
}

impl EnvironmentProvider for GlobalScope {
    fn has_window(&self) -> bool {
        Self::window().is_some()
    }

    fn ua(&self) -> Option<String> {
        Self::global(&["UA"]).and_then(|value| value.as_string())
    }

    fn weex_platform(&self) -> Option<String> {
        Self::global(&["WXEnvironment", "platform"]).and_then(|value| value.as_string())
    }

    fn navigator_user_agent(&self) -> Option<String> {
        Self::global(&["navigator", "userAgent"]).and_then(|value| value.as_string())
    }

    fn signal(&self, signal: Signal) -> Option<SignalValue> {
        let window = Self::window()?;
        let value = Self::lookup(&window, signal.path())?;
        trace!(?signal, "Found vendor global");
        Some(SignalValue::new(value.is_truthy(), js_string(&value)))
    }

    fn document_hidden(&self) -> Option<bool> {
        Self::global(&["document", "hidden"]).and_then(|value| value.as_bool())
    }
}

// =============================================================================
// EXPORTED PROBES
// =============================================================================

#[wasm_bindgen(js_name = inBrowser)]
pub fn in_browser() -> bool {
    probes::in_browser(&GlobalScope)
}

#[wasm_bindgen(js_name = inWeex)]
pub fn in_weex() -> bool {
    probes::in_weex(&GlobalScope)
}

/// Lower-cased alternate-runtime platform, or `false` outside it.
#[wasm_bindgen(js_name = weexPlatform)]
pub fn weex_platform() -> JsValue {
    match probes::weex_platform(&GlobalScope) {
        Some(platform) => JsValue::from_str(&platform),
        None => JsValue::FALSE,
    }
}

#[wasm_bindgen(js_name = isAndroid)]
pub fn is_android() -> bool {
    probes::is_android(&GlobalScope)
}

#[wasm_bindgen(js_name = isIOS)]
pub fn is_ios() -> bool {
    probes::is_ios(&GlobalScope)
}

#[wasm_bindgen(js_name = isOpera)]
pub fn is_opera() -> bool {
    probes::is_opera(&GlobalScope)
}

#[wasm_bindgen(js_name = isFirefox)]
pub fn is_firefox() -> bool {
    probes::is_firefox(&GlobalScope)
}

#[wasm_bindgen(js_name = isSafari)]
pub fn is_safari() -> bool {
    probes::is_safari(&GlobalScope)
}

#[wasm_bindgen(js_name = isEdge)]
pub fn is_edge() -> bool {
    probes::is_edge(&GlobalScope)
}

#[wasm_bindgen(js_name = isChrome)]
pub fn is_chrome() -> bool {
    probes::is_chrome(&GlobalScope)
}

#[wasm_bindgen(js_name = isEdgeChromium)]
pub fn is_edge_chromium() -> bool {
    probes::is_edge_chromium(&GlobalScope)
}

#[wasm_bindgen(js_name = isBrowserTabFocused)]
pub fn is_browser_tab_focused() -> bool {
    probes::is_browser_tab_focused(&GlobalScope)
}

#[wasm_bindgen(js_name = isBlink)]
pub fn is_blink() -> bool {
    probes::is_blink(&GlobalScope)
}

/// Every probe at once, as a plain object keyed by probe name.
///
/// # Example (JavaScript)
/// ```js
/// const env = detectEnvironment();
/// if (env.isBlink && env.isBrowserTabFocused) { ... }
/// ```
#[wasm_bindgen(js_name = detectEnvironment)]
pub fn detect_environment() -> Result<JsValue, JsValue> {
    let report = ProbeReport::collect(&GlobalScope);
    Ok(to_js_value(&report)?)
}

/// Evaluates every probe against a snapshot object instead of the globals.
///
/// # Example (JavaScript)
/// ```js
/// detectEnvironmentFrom({ window: true, signals: { StyleMedia: {} } }).isEdge; // true
/// ```
#[wasm_bindgen(js_name = detectEnvironmentFrom)]
pub fn detect_environment_from(snapshot: JsValue) -> Result<JsValue, JsValue> {
    let snapshot: EnvSnapshot = serde_wasm_bindgen::from_value(snapshot)?;
    let report = ProbeReport::collect(&snapshot);
    Ok(to_js_value(&report)?)
}
