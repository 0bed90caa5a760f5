//! Wall configuration parsed from the page's query string.
//!
//! Recognised keys:
//! - `poll`: gallery poll interval in seconds (default 3000)
//! - `after_mutation`: `reload` (default) or `patch`
//! - `api`: base URL prefix for API calls (default: same origin)
//!
//! Values arrive already percent-decoded by `URLSearchParams`. Parsing
//! never fails; unknown keys are skipped and malformed values fall
//! back to their defaults with a console warning.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_POLL_SECS: u64 = 3000;

/// What the wall does after a like or delete succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AfterMutation {
    /// Re-fetch stats and photos; the wall re-renders from scratch.
    #[default]
    Reload,
    /// Update the affected photo in place and keep the viewport.
    Patch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallConfig {
    pub poll_secs: u64,
    pub after_mutation: AfterMutation,
    pub api_base: String,
}

impl Default for WallConfig {
    fn default() -> Self {
        Self { poll_secs: DEFAULT_POLL_SECS, after_mutation: AfterMutation::Reload, api_base: String::new() }
    }
}

impl WallConfig {
    /// Build the config from decoded query parameters. `param` returns the
    /// first value for a key, as `URLSearchParams.get` does.
    #[must_use]
    pub fn from_query(param: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(value) = param("poll") {
            match parse_poll_secs(&value) {
                Some(secs) => config.poll_secs = secs,
                None => leptos::logging::warn!("ignoring invalid poll interval {value:?}"),
            }
        }
        if let Some(value) = param("after_mutation") {
            match parse_after_mutation(&value) {
                Some(policy) => config.after_mutation = policy,
                None => leptos::logging::warn!("ignoring unknown after_mutation {value:?}"),
            }
        }
        if let Some(value) = param("api") {
            config.api_base = value.trim().trim_end_matches('/').to_owned();
        }
        config
    }

    /// Read the configuration from `window.location.search`.
    #[must_use]
    pub fn from_location() -> Self {
        #[cfg(feature = "csr")]
        {
            let search = web_sys::window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            match web_sys::UrlSearchParams::new_with_str(&search) {
                Ok(params) => Self::from_query(|key| params.get(key)),
                Err(e) => {
                    leptos::logging::warn!("could not parse query string {search:?}: {e:?}");
                    Self::default()
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::default()
        }
    }

    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_secs)
    }
}

fn parse_poll_secs(raw: &str) -> Option<u64> {
    raw.trim().parse::<u64>().ok().filter(|secs| *secs > 0)
}

fn parse_after_mutation(raw: &str) -> Option<AfterMutation> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "reload" => Some(AfterMutation::Reload),
        "patch" => Some(AfterMutation::Patch),
        _ => None,
    }
}
