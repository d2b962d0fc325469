use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub demo: DemoConfig,
}

/// Settings for the trend seed HTTP endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the API (scheme + host).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path of the feed endpoint, appended to `base_url`.
    #[serde(default = "default_feed_path")]
    pub feed_path: String,
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Breakpoints driving the mobile/desktop layout switch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Viewport widths strictly below this are mobile.
    #[serde(default = "default_mobile_breakpoint")]
    pub mobile_breakpoint: u32,
    /// Feed scroll offset past which the mobile header hides.
    #[serde(default = "default_header_hide_offset")]
    pub header_hide_offset: u32,
}

/// Offline demo dataset settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// How many times the mock feed is repeated.
    #[serde(default = "default_demo_repeat")]
    pub repeat: usize,
}

fn default_base_url() -> String {
    "https://zu621tawdd.execute-api.ap-northeast-2.amazonaws.com".to_string()
}

fn default_feed_path() -> String {
    "/trend-seeds".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_mobile_breakpoint() -> u32 {
    768
}

fn default_header_hide_offset() -> u32 {
    50
}

fn default_demo_repeat() -> usize {
    1
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.timeout_seconds))
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.connect_timeout_seconds))
    }

    /// Full URL of the feed endpoint.
    pub fn feed_url(&self) -> String {
        join_url(&self.base_url, &self.feed_path)
    }
}

pub(crate) fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.is_empty() {
        return base.to_string();
    }
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            feed_path: default_feed_path(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: default_mobile_breakpoint(),
            header_hide_offset: default_header_hide_offset(),
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            repeat: default_demo_repeat(),
        }
    }
}
