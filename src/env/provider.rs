//! The environment capability the probes read from.

use serde::{Deserialize, Serialize};

// =============================================================================
// VENDOR SIGNALS
// =============================================================================

/// Vendor-specific globals inspected by the browser probes.
///
/// Each signal is a property path relative to the window object. Serialized
/// names are the dotted JS paths (`"opr.addons"`, `"InstallTrigger"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Signal {
    #[serde(rename = "opr")]
    Opr,
    #[serde(rename = "opr.addons")]
    OprAddons,
    #[serde(rename = "opera")]
    Opera,
    #[serde(rename = "InstallTrigger")]
    InstallTrigger,
    #[serde(rename = "HTMLElement")]
    HtmlElement,
    #[serde(rename = "safari")]
    Safari,
    #[serde(rename = "safari.pushNotification")]
    SafariPushNotification,
    #[serde(rename = "StyleMedia")]
    StyleMedia,
    #[serde(rename = "chrome")]
    Chrome,
    #[serde(rename = "chrome.webstore")]
    ChromeWebstore,
    #[serde(rename = "chrome.runtime")]
    ChromeRuntime,
    #[serde(rename = "CSS")]
    Css,
}

impl Signal {
    /// Every signal, in declaration order.
    pub const ALL: [Signal; 12] = [
        Signal::Opr,
        Signal::OprAddons,
        Signal::Opera,
        Signal::InstallTrigger,
        Signal::HtmlElement,
        Signal::Safari,
        Signal::SafariPushNotification,
        Signal::StyleMedia,
        Signal::Chrome,
        Signal::ChromeWebstore,
        Signal::ChromeRuntime,
        Signal::Css,
    ];

    /// Property path relative to the window object.
    pub fn path(self) -> &'static [&'static str] {
        match self {
            Signal::Opr => &["opr"],
            Signal::OprAddons => &["opr", "addons"],
            Signal::Opera => &["opera"],
            Signal::InstallTrigger => &["InstallTrigger"],
            Signal::HtmlElement => &["HTMLElement"],
            Signal::Safari => &["safari"],
            Signal::SafariPushNotification => &["safari", "pushNotification"],
            Signal::StyleMedia => &["StyleMedia"],
            Signal::Chrome => &["chrome"],
            Signal::ChromeWebstore => &["chrome", "webstore"],
            Signal::ChromeRuntime => &["chrome", "runtime"],
            Signal::Css => &["CSS"],
        }
    }

    /// The object this signal is a property of, if it is nested.
    pub fn parent(self) -> Option<Signal> {
        match self {
            Signal::OprAddons => Some(Signal::Opr),
            Signal::SafariPushNotification => Some(Signal::Safari),
            Signal::ChromeWebstore | Signal::ChromeRuntime => Some(Signal::Chrome),
            _ => None,
        }
    }
}

/// A defined global: its JS truthiness and its `String(value)` form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SignalValue {
    #[serde(default = "default_truthy")]
    pub truthy: bool,

    #[serde(default)]
    pub repr: String,
}

fn default_truthy() -> bool {
    true
}

impl SignalValue {
    /// Creates a value with explicit truthiness and string form.
    pub fn new(truthy: bool, repr: impl Into<String>) -> Self {
        Self {
            truthy,
            repr: repr.into(),
        }
    }

    /// A plain truthy object.
    pub fn object() -> Self {
        Self::new(true, "[object Object]")
    }

    /// A defined but falsy value (`0`, `""`, `false`, `null`).
    pub fn falsy(repr: impl Into<String>) -> Self {
        Self::new(false, repr)
    }
}

// =============================================================================
// PROVIDER TRAIT
// =============================================================================

/// Read-only access to the signals of a hosting runtime.
///
/// Every accessor is presence-checked: an absent global is `None` (or
/// `false`), never an error.
pub trait EnvironmentProvider {
    /// Whether a window-like global exists.
    fn has_window(&self) -> bool;

    /// The ambient `UA` user-agent global.
    fn ua(&self) -> Option<String>;

    /// Platform string of the alternate-runtime (`WXEnvironment`) descriptor.
    fn weex_platform(&self) -> Option<String>;

    /// `navigator.userAgent`.
    fn navigator_user_agent(&self) -> Option<String>;

    /// Looks up a vendor global on the window object.
    fn signal(&self, signal: Signal) -> Option<SignalValue>;

    /// `document.hidden`.
    fn document_hidden(&self) -> Option<bool>;

    /// Whether the signal is defined and truthy.
    fn is_truthy(&self, signal: Signal) -> bool {
        self.signal(signal).is_some_and(|value| value.truthy)
    }

    /// Whether the signal is defined at all (`typeof x !== "undefined"`).
    fn is_defined(&self, signal: Signal) -> bool {
        self.signal(signal).is_some()
    }
}

impl<P: EnvironmentProvider + ?Sized> EnvironmentProvider for &P {
    fn has_window(&self) -> bool {
        (**self).has_window()
    }

    fn ua(&self) -> Option<String> {
        (**self).ua()
    }

    fn weex_platform(&self) -> Option<String> {
        (**self).weex_platform()
    }

    fn navigator_user_agent(&self) -> Option<String> {
        (**self).navigator_user_agent()
    }

    fn signal(&self, signal: Signal) -> Option<SignalValue> {
        (**self).signal(signal)
    }

    fn document_hidden(&self) -> Option<bool> {
        (**self).document_hidden()
    }
}
