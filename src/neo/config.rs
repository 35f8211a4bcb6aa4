//! Feed settings: endpoint, access key and date window.
//!
//! The access key is read from the environment instead of being compiled
//! in. Without one, NASA's public rate-limited `DEMO_KEY` is used.

use bevy::prelude::*;
use url::Url;

use crate::types::CalendarDate;

/// Default NEO feed endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.nasa.gov/neo/rest/v1/feed";

/// Public, rate-limited NASA API key.
pub const DEMO_API_KEY: &str = "DEMO_KEY";

/// First day of the default feed window.
pub const DEFAULT_START: CalendarDate = CalendarDate::new(2024, 10, 1);

/// Days covered by one feed request (start and end inclusive).
pub const WINDOW_DAYS: i64 = 7;

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "NEO_API_KEY";
/// Environment variable holding the first day of the window (`YYYY-MM-DD`).
pub const ENV_START_DATE: &str = "NEO_FEED_START";
/// Environment variable overriding the endpoint URL.
pub const ENV_ENDPOINT: &str = "NEO_FEED_URL";

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("invalid {var} value {value:?}: expected YYYY-MM-DD")]
    InvalidDate { var: &'static str, value: String },

    #[error("invalid {var} value {value:?}: {reason}")]
    InvalidUrl {
        var: &'static str,
        value: String,
        reason: String,
    },

    #[error("{var} is set but empty")]
    EmptyApiKey { var: &'static str },
}

/// Inclusive date range requested from the feed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeedWindow {
    pub start: CalendarDate,
    pub end: CalendarDate,
}

impl FeedWindow {
    /// A [`WINDOW_DAYS`]-day window beginning on `start`.
    pub fn starting(start: CalendarDate) -> Self {
        Self {
            start,
            end: start.add_days(WINDOW_DAYS - 1),
        }
    }
}

impl Default for FeedWindow {
    fn default() -> Self {
        Self::starting(DEFAULT_START)
    }
}

/// Everything needed to issue the feed request.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct NeoFeedConfig {
    pub endpoint: Url,
    pub api_key: String,
    pub window: FeedWindow,
}

impl Default for NeoFeedConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL"),
            api_key: DEMO_API_KEY.to_string(),
            window: FeedWindow::default(),
        }
    }
}

impl NeoFeedConfig {
    /// Build the config from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable lookup.
    ///
    /// Unset variables fall back to the defaults; set-but-invalid ones are
    /// errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(key) = lookup(ENV_API_KEY) {
            let key = key.trim();
            if key.is_empty() {
                return Err(ConfigError::EmptyApiKey { var: ENV_API_KEY });
            }
            config.api_key = key.to_string();
        }

        if let Some(value) = lookup(ENV_START_DATE) {
            let start = CalendarDate::parse(&value).ok_or(ConfigError::InvalidDate {
                var: ENV_START_DATE,
                value: value.clone(),
            })?;
            config.window = FeedWindow::starting(start);
        }

        if let Some(value) = lookup(ENV_ENDPOINT) {
            config.endpoint = Url::parse(value.trim()).map_err(|e| ConfigError::InvalidUrl {
                var: ENV_ENDPOINT,
                value: value.clone(),
                reason: e.to_string(),
            })?;
        }

        Ok(config)
    }

    /// Full request URL including the access key.
    pub fn request_url(&self) -> Url {
        self.url_with_key(&self.api_key)
    }

    /// Request URL with the key masked, for logging.
    pub fn redacted_url(&self) -> Url {
        self.url_with_key("***")
    }

    fn url_with_key(&self, key: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("start_date", &self.window.start.to_string())
            .append_pair("end_date", &self.window.end.to_string())
            .append_pair("api_key", key);
        url
    }
}
