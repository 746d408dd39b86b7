use serde::{Deserialize, Serialize};

const DEFAULT_API_ROOT: &str = "https://network-pulse-api-production.herokuapp.com/api/pulse";
const DEFAULT_SIGNUP_URL: &str = "https://foundation.mozilla.org/api/campaigns/signups/0/";

/// Application configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PulseConfig {
    /// Root of the Pulse REST API, without a trailing slash
    pub api_root: String,
    /// Login endpoint, relative to `api_root`
    pub login_path: String,
    /// Newsletter signup endpoint
    pub signup_url: String,
    /// Newsletter the signup form subscribes to
    pub newsletter: String,
    /// Entries per list page
    pub page_size: u32,
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            api_root: DEFAULT_API_ROOT.to_string(),
            login_path: "/login".to_string(),
            signup_url: DEFAULT_SIGNUP_URL.to_string(),
            newsletter: "mozilla-foundation".to_string(),
            page_size: 12,
        }
    }
}

impl PulseConfig {
    /// Defaults overridden by `PULSE_API` and `PULSE_SIGNUP_URL` at compile time.
    ///
    /// Browser builds have no process environment, so the values are baked in.
    pub fn from_env() -> Self {
        Self::from_overrides(option_env!("PULSE_API"), option_env!("PULSE_SIGNUP_URL"))
    }

    fn from_overrides(api_root: Option<&str>, signup_url: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(root) = api_root.filter(|r| !r.is_empty()) {
            config.api_root = root.trim_end_matches('/').to_string();
        }
        if let Some(url) = signup_url.filter(|u| !u.is_empty()) {
            config.signup_url = url.to_string();
        }
        config
    }

    /// Absolute URL for an API path such as `/entries/`.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_root, path)
    }

    /// Login URL that sends the user back to `original_url`.
    pub fn login_url(&self, original_url: &str) -> String {
        let query = serde_urlencoded::to_string(&[("original_url", original_url)]).unwrap_or_default();
        format!("{}?{}", self.api_url(&self.login_path), query)
    }
}
