//! NEO feed response shape and the blocking fetch.
//!
//! Parsing is permissive: only `near_earth_objects` is
//! required, and each record's `orbit_data.semi_major_axis` may be a
//! number, a numeric string, or missing.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::config::NeoFeedConfig;

#[derive(thiserror::Error, Debug)]
pub enum NeoFeedError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("feed returned HTTP {0}")]
    Status(u16),

    #[error("could not decode feed: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Top level of a feed response.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NeoFeed {
    /// Records grouped by `YYYY-MM-DD` date; iterated in date order.
    pub near_earth_objects: BTreeMap<String, Vec<NearEarthObjectRecord>>,
}

impl NeoFeed {
    /// Decode a JSON response body.
    pub fn from_json(body: &str) -> Result<Self, NeoFeedError> {
        Ok(serde_json::from_str(body)?)
    }

    /// Every record across every date, dates ascending.
    pub fn records(&self) -> impl Iterator<Item = &NearEarthObjectRecord> {
        self.near_earth_objects.values().flatten()
    }

    pub fn record_count(&self) -> usize {
        self.near_earth_objects.values().map(Vec::len).sum()
    }
}

/// One near-Earth object. Only the orbit data is read.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NearEarthObjectRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub orbit_data: Option<OrbitData>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct OrbitData {
    #[serde(default)]
    pub semi_major_axis: Option<AxisValue>,
}

/// A semi-major axis as the feed sends it. NASA encodes numbers as strings.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AxisValue {
    Number(f64),
    Text(String),
}

impl NearEarthObjectRecord {
    /// Semi-major axis used for placement.
    ///
    /// Missing, null and empty values fall back to 1.0, as do numeric zero
    /// and NaN. Text is otherwise taken as written: `"0"` is 0.0, blank text
    /// is 0.0, and text that is not a number yields NaN.
    pub fn effective_semi_major_axis(&self) -> f64 {
        let value = self
            .orbit_data
            .as_ref()
            .and_then(|orbit| orbit.semi_major_axis.as_ref());

        match value {
            None => 1.0,
            Some(AxisValue::Number(n)) if *n == 0.0 || n.is_nan() => 1.0,
            Some(AxisValue::Number(n)) => *n,
            Some(AxisValue::Text(s)) if s.is_empty() => 1.0,
            Some(AxisValue::Text(s)) => match s.trim() {
                "" => 0.0,
                s => s.parse().unwrap_or(f64::NAN),
            },
        }
    }
}

/// Fetch and decode the feed for the configured window. Blocks the calling
/// thread; run it on a task pool.
pub fn fetch_feed(config: &NeoFeedConfig) -> Result<NeoFeed, NeoFeedError> {
    let response = feed_client()?
        .get(config.request_url())
        .header("Accept", "application/json")
        .send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(NeoFeedError::Status(status.as_u16()));
    }

    let body = response.text()?;
    NeoFeed::from_json(&body)
}

/// HTTP client for the feed. The request waits as long as the server takes;
/// there is no timeout and no abort.
pub fn feed_client() -> Result<reqwest::blocking::Client, NeoFeedError> {
    Ok(reqwest::blocking::Client::builder()
        .user_agent(concat!("neo-orrery/", env!("CARGO_PKG_VERSION")))
        .timeout(None)
        .build()?)
}
