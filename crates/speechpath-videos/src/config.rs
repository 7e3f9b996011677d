use std::fmt;
use std::time::Duration;

use crate::MAX_VIDEOS_PER_ACTIVITY;

pub const DEFAULT_SEARCH_URL: &str = "https://www.googleapis.com/youtube/v3/search";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(8);

pub const DEFAULT_MAX_CONCURRENT: usize = 4;

/// Settings for [`crate::youtube::YouTubeClient`].
#[derive(Clone)]
pub struct VideoConfig {
    pub api_key: Option<String>,
    pub search_url: String,
    /// Budget for a single HTTP attempt.
    pub timeout: Duration,
    /// Searches allowed in flight at once across all plan resolutions.
    pub max_concurrent: usize,
    pub max_results: usize,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            search_url: DEFAULT_SEARCH_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            max_results: MAX_VIDEOS_PER_ACTIVITY,
        }
    }
}

impl VideoConfig {
    /// Short prefix of the API key, safe to log. Keys of eight characters
    /// or fewer are fully masked.
    pub fn key_hint(&self) -> Option<String> {
        self.api_key.as_deref().map(|k| {
            if k.chars().count() > 8 {
                format!("{}...", k.chars().take(4).collect::<String>())
            } else {
                "****".to_string()
            }
        })
    }
}

impl fmt::Debug for VideoConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VideoConfig")
            .field("api_key", &self.key_hint())
            .field("search_url", &self.search_url)
            .field("timeout", &self.timeout)
            .field("max_concurrent", &self.max_concurrent)
            .field("max_results", &self.max_results)
            .finish()
    }
}
