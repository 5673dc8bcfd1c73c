//! Client configuration.

use crate::validator::MIN_TITLE_LEN;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root; `/todos` is appended.
    pub base_url: String,
    /// Titles must be longer than this to be saved.
    pub min_title_len: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            min_title_len: MIN_TITLE_LEN,
        }
    }
}

impl ClientConfig {
    /// Read `TODO_API_URL` and `TODO_MIN_TITLE_LEN`. Missing or unparsable
    /// values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let base_url = lookup("TODO_API_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.base_url);
        let min_title_len = lookup("TODO_MIN_TITLE_LEN")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(defaults.min_title_len);
        Self {
            base_url,
            min_title_len,
        }
    }
}
