//! One-shot evaluation of every probe.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::probes;
use super::provider::EnvironmentProvider;

/// The answer of every probe for one provider at one moment.
///
/// Field names serialize to the JavaScript probe names (`inBrowser`,
/// `isIOS`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbeReport {
    pub in_browser: bool,
    pub in_weex: bool,
    pub weex_platform: Option<String>,
    pub is_android: bool,
    #[serde(rename = "isIOS")]
    pub is_ios: bool,
    pub is_opera: bool,
    pub is_firefox: bool,
    pub is_safari: bool,
    pub is_edge: bool,
    pub is_chrome: bool,
    pub is_edge_chromium: bool,
    pub is_browser_tab_focused: bool,
    pub is_blink: bool,
}

impl ProbeReport {
    /// Evaluates every probe against `env`.
    pub fn collect<P: EnvironmentProvider + ?Sized>(env: &P) -> Self {
        let report = Self {
            in_browser: probes::in_browser(env),
            in_weex: probes::in_weex(env),
            weex_platform: probes::weex_platform(env),
            is_android: probes::is_android(env),
            is_ios: probes::is_ios(env),
            is_opera: probes::is_opera(env),
            is_firefox: probes::is_firefox(env),
            is_safari: probes::is_safari(env),
            is_edge: probes::is_edge(env),
            is_chrome: probes::is_chrome(env),
            is_edge_chromium: probes::is_edge_chromium(env),
            is_browser_tab_focused: probes::is_browser_tab_focused(env),
            is_blink: probes::is_blink(env),
        };

        debug!(
            in_browser = report.in_browser,
            in_weex = report.in_weex,
            is_chrome = report.is_chrome,
            is_firefox = report.is_firefox,
            is_safari = report.is_safari,
            "Collected environment probe report"
        );
        report
    }

    /// Name of the detected browser engine family, if any probe matched.
    ///
    /// Chromium Edge wins over Chrome, and Opera over Chrome, because both
    /// also carry Chrome's signals.
    pub fn browser(&self) -> Option<&'static str> {
        if self.is_edge_chromium {
            Some("edge-chromium")
        } else if self.is_opera {
            Some("opera")
        } else if self.is_chrome {
            Some("chrome")
        } else if self.is_firefox {
            Some("firefox")
        } else if self.is_safari {
            Some("safari")
        } else if self.is_edge {
            Some("edge")
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::provider::Signal;
    use crate::env::snapshot::EnvSnapshot;

    #[test]
    fn test_empty_environment_report() {
        let report = ProbeReport::collect(&EnvSnapshot::default());
        assert_eq!(
            report,
            ProbeReport {
                is_browser_tab_focused: true,
                ..ProbeReport::default()
            }
        );
        assert_eq!(report.browser(), None);
    }

    #[test]
    fn test_report_uses_js_names() {
        let env = EnvSnapshot::new().with_weex_platform("iOS");
        let value = serde_json::to_value(ProbeReport::collect(&env)).unwrap();

        assert_eq!(value["isIOS"], true);
        assert_eq!(value["weexPlatform"], "ios");
        assert_eq!(value["isBrowserTabFocused"], true);
        assert!(value.get("is_ios").is_none());
    }

    #[test]
    fn test_browser_prefers_edge_chromium() {
        let env = EnvSnapshot::new()
            .with_window()
            .with_navigator_user_agent("Mozilla/5.0 Chrome/124.0 Edg/124.0")
            .with_flag(Signal::Chrome)
            .with_flag(Signal::ChromeRuntime);
        let report = ProbeReport::collect(&env);
        assert!(report.is_chrome);
        assert_eq!(report.browser(), Some("edge-chromium"));
    }
}
