//! In-memory environment description.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::provider::{EnvironmentProvider, Signal, SignalValue};
use crate::error::HelperResult;

/// An owned, serializable description of a hosting runtime.
///
/// The default snapshot is a host with no globals at all, which is what a
/// native process looks like to the probes.
///
/// ```rust
/// use helperkit::{is_chrome, EnvSnapshot, Signal};
///
/// let env = EnvSnapshot::new()
///     .with_window()
///     .with_flag(Signal::Chrome)
///     .with_flag(Signal::ChromeRuntime);
/// assert!(is_chrome(&env));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnvSnapshot {
    /// Whether a window-like global exists.
    pub window: bool,

    /// The `UA` global.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ua: Option<String>,

    /// `WXEnvironment.platform`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weex_platform: Option<String>,

    /// `navigator.userAgent`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigator_user_agent: Option<String>,

    /// Vendor globals present on the window object.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub signals: BTreeMap<Signal, SignalValue>,

    /// `document.hidden`; `None` when there is no document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_hidden: Option<bool>,
}

impl EnvSnapshot {
    /// Creates an empty snapshot (no globals).
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a snapshot from JSON.
    pub fn from_json(json: &str) -> HelperResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the snapshot to pretty JSON.
    pub fn to_json(&self) -> HelperResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Builder: Mark a window-like global as present.
    pub fn with_window(mut self) -> Self {
        self.window = true;
        self
    }

    /// Builder: Set the `UA` global.
    pub fn with_ua(mut self, ua: impl Into<String>) -> Self {
        self.ua = Some(ua.into());
        self
    }

    /// Builder: Set the alternate-runtime platform string.
    pub fn with_weex_platform(mut self, platform: impl Into<String>) -> Self {
        self.weex_platform = Some(platform.into());
        self
    }

    /// Builder: Set `navigator.userAgent`.
    pub fn with_navigator_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.navigator_user_agent = Some(user_agent.into());
        self
    }

    /// Builder: Define a vendor global with an explicit value.
    pub fn with_signal(mut self, signal: Signal, value: SignalValue) -> Self {
        self.signals.insert(signal, value);
        self
    }

    /// Builder: Define a vendor global as a plain truthy object.
    pub fn with_flag(self, signal: Signal) -> Self {
        self.with_signal(signal, SignalValue::object())
    }

    /// Builder: Set `document.hidden`.
    pub fn with_document_hidden(mut self, hidden: bool) -> Self {
        self.document_hidden = Some(hidden);
        self
    }
}

impl EnvironmentProvider for EnvSnapshot {
    fn has_window(&self) -> bool {
        self.window
    }

    fn ua(&self) -> Option<String> {
        self.ua.clone()
    }

    fn weex_platform(&self) -> Option<String> {
        self.weex_platform.clone()
    }

    fn navigator_user_agent(&self) -> Option<String> {
        self.navigator_user_agent.clone()
    }

    fn signal(&self, signal: Signal) -> Option<SignalValue> {
        // A property of a missing object is missing too.
        if let Some(parent) = signal.parent() {
            self.signals.get(&parent)?;
        }
        self.signals.get(&signal).cloned()
    }

    fn document_hidden(&self) -> Option<bool> {
        self.document_hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HelperError;

    #[test]
    fn test_default_has_nothing() {
        let env = EnvSnapshot::default();
        assert!(!env.has_window());
        assert!(env.ua().is_none());
        assert!(env.navigator_user_agent().is_none());
        assert!(Signal::ALL.iter().all(|signal| env.signal(*signal).is_none()));
        assert!(env.document_hidden().is_none());
    }

    #[test]
    fn test_child_signal_needs_parent() {
        let orphan = EnvSnapshot::new().with_flag(Signal::ChromeRuntime);
        assert!(orphan.signal(Signal::ChromeRuntime).is_none());

        let nested = orphan.with_flag(Signal::Chrome);
        assert!(nested.is_truthy(Signal::ChromeRuntime));
    }

    #[test]
    fn test_json_roundtrip() {
        let env = EnvSnapshot::new()
            .with_window()
            .with_navigator_user_agent("Mozilla/5.0 Firefox/126.0")
            .with_signal(Signal::InstallTrigger, SignalValue::falsy("null"))
            .with_document_hidden(false);

        let json = env.to_json().unwrap();
        assert!(json.contains("\"InstallTrigger\""));
        assert_eq!(EnvSnapshot::from_json(&json).unwrap(), env);
    }

    #[test]
    fn test_json_partial_document() {
        let env = EnvSnapshot::from_json(
            r#"{ "window": true, "signals": { "chrome": {}, "chrome.webstore": { "truthy": false } } }"#,
        )
        .unwrap();
        assert!(env.has_window());
        assert!(env.is_truthy(Signal::Chrome));
        assert!(env.is_defined(Signal::ChromeWebstore));
        assert!(!env.is_truthy(Signal::ChromeWebstore));
    }

    #[test]
    fn test_json_rejects_unknown_keys() {
        let err = EnvSnapshot::from_json(r#"{ "windows": true }"#).unwrap_err();
        assert!(matches!(err, HelperError::Snapshot(_)));
    }
}
