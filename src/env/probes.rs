//! Environment probes.
//!
//! Each probe answers one question about a provider and is re-evaluated on
//! every call. Missing globals read as "not present".

use super::provider::{EnvironmentProvider, Signal};

/// Markers matched against the `UA` global for iOS.
///
/// `"ipad}ipod"` reproduces a long-standing malformed alternation: a bare
/// `"ipad"` does not match.
const IOS_MARKERS: [&str; 3] = ["iphone", "ipad}ipod", "ios"];

/// String form of Safari's push notification object.
const SAFARI_REMOTE_NOTIFICATION: &str = "[object SafariRemoteNotification]";

// =============================================================================
// RUNTIME
// =============================================================================

/// Whether a window-like global is present.
pub fn in_browser<P: EnvironmentProvider + ?Sized>(env: &P) -> bool {
    env.has_window()
}

/// Whether the alternate-runtime descriptor exposes a non-empty platform.
pub fn in_weex<P: EnvironmentProvider + ?Sized>(env: &P) -> bool {
    env.weex_platform().is_some_and(|platform| !platform.is_empty())
}

/// The alternate-runtime platform, lower-cased.
pub fn weex_platform<P: EnvironmentProvider + ?Sized>(env: &P) -> Option<String> {
    if !in_weex(env) {
        return None;
    }
    env.weex_platform().map(|platform| platform.to_lowercase())
}

// =============================================================================
// OPERATING SYSTEM
// =============================================================================

/// Android, from the `UA` global or the alternate-runtime platform.
///
/// The `UA` match is case-sensitive and must not start at offset 0.
pub fn is_android<P: EnvironmentProvider + ?Sized>(env: &P) -> bool {
    let from_ua = env
        .ua()
        .is_some_and(|ua| ua.find("android").is_some_and(|offset| offset > 0));
    from_ua || weex_platform(env).as_deref() == Some("android")
}

/// iOS, from the `UA` global or the alternate-runtime platform.
pub fn is_ios<P: EnvironmentProvider + ?Sized>(env: &P) -> bool {
    let from_ua = env
        .ua()
        .is_some_and(|ua| IOS_MARKERS.iter().any(|marker| ua.contains(marker)));
    from_ua || weex_platform(env).as_deref() == Some("ios")
}

// =============================================================================
// BROWSER ENGINES
// =============================================================================

fn navigator_ua_contains<P: EnvironmentProvider + ?Sized>(env: &P, needle: &str) -> bool {
    env.navigator_user_agent()
        .is_some_and(|ua| ua.contains(needle))
}

/// Opera (Presto globals or the Chromium-era `OPR/` token).
pub fn is_opera<P: EnvironmentProvider + ?Sized>(env: &P) -> bool {
    (env.is_truthy(Signal::Opr) && env.is_truthy(Signal::OprAddons))
        || env.is_truthy(Signal::Opera)
        || navigator_ua_contains(env, " OPR/")
}

/// Firefox: `InstallTrigger` is defined, whatever its value.
pub fn is_firefox<P: EnvironmentProvider + ?Sized>(env: &P) -> bool {
    env.is_defined(Signal::InstallTrigger)
}

/// Safari, from the legacy `HTMLElementConstructor` or the push
/// notification object.
pub fn is_safari<P: EnvironmentProvider + ?Sized>(env: &P) -> bool {
    let legacy_constructor = env
        .signal(Signal::HtmlElement)
        .is_some_and(|value| value.repr.to_lowercase().contains("constructor"));

    let push_notification = env.is_truthy(Signal::Safari)
        && env
            .signal(Signal::SafariPushNotification)
            .is_some_and(|value| value.repr == SAFARI_REMOTE_NOTIFICATION);

    legacy_constructor || push_notification
}

/// Legacy (EdgeHTML) Edge.
pub fn is_edge<P: EnvironmentProvider + ?Sized>(env: &P) -> bool {
    env.is_truthy(Signal::StyleMedia)
}

/// Chrome: a `chrome` object carrying `webstore` or `runtime`.
pub fn is_chrome<P: EnvironmentProvider + ?Sized>(env: &P) -> bool {
    env.is_truthy(Signal::Chrome)
        && (env.is_truthy(Signal::ChromeWebstore) || env.is_truthy(Signal::ChromeRuntime))
}

/// Chromium-based Edge.
pub fn is_edge_chromium<P: EnvironmentProvider + ?Sized>(env: &P) -> bool {
    is_chrome(env) && navigator_ua_contains(env, "Edg")
}

/// Blink: Chrome or Opera with the `CSS` namespace available.
pub fn is_blink<P: EnvironmentProvider + ?Sized>(env: &P) -> bool {
    (is_chrome(env) || is_opera(env)) && env.is_truthy(Signal::Css)
}

// =============================================================================
// DOCUMENT
// =============================================================================

/// True unless the document reports itself hidden.
pub fn is_browser_tab_focused<P: EnvironmentProvider + ?Sized>(env: &P) -> bool {
    env.document_hidden() != Some(true)
}
