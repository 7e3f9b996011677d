//! YouTube Data API v3 search client.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use speechpath_core::models::video::VideoResult;
use tokio::sync::Semaphore;
use tracing::{debug, error, info, warn};

use crate::config::VideoConfig;
use crate::error::VideoError;
use crate::query::{build_query, watch_url};
use crate::{MAX_VIDEOS_PER_ACTIVITY, VideoSearch};

/// Stateless search client. Cheap to clone; clones share the HTTP
/// connection pool and the concurrency limiter.
#[derive(Clone)]
pub struct YouTubeClient {
    http: reqwest::Client,
    config: VideoConfig,
    permits: Arc<Semaphore>,
}

// ── Response shape ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Deserialize)]
struct SearchItem {
    id: ItemId,
    #[serde(default)]
    snippet: Snippet,
}

#[derive(Deserialize)]
struct ItemId {
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

#[derive(Deserialize, Default)]
struct Snippet {
    #[serde(default)]
    title: String,
    #[serde(default)]
    thumbnails: Thumbnails,
}

#[derive(Deserialize, Default)]
struct Thumbnails {
    medium: Option<Thumbnail>,
}

#[derive(Deserialize)]
struct Thumbnail {
    url: String,
}

impl SearchResponse {
    /// Channel and playlist hits carry no `videoId` and are skipped.
    fn into_videos(self, limit: usize) -> Vec<VideoResult> {
        self.items
            .into_iter()
            .filter_map(|item| {
                let video_id = item.id.video_id.filter(|id| !id.is_empty())?;
                Some(VideoResult {
                    title: item.snippet.title,
                    url: watch_url(&video_id),
                    thumbnail: item.snippet.thumbnails.medium.map(|t| t.url),
                })
            })
            .take(limit)
            .collect()
    }
}

/// Result of a search together with the number of HTTP attempts it took.
#[derive(Debug)]
pub struct SearchOutcome {
    pub result: Result<Vec<VideoResult>, VideoError>,
    pub attempts: u32,
}

impl SearchOutcome {
    fn refused(error: VideoError) -> Self {
        Self {
            result: Err(error),
            attempts: 0,
        }
    }
}

// ── Client ───────────────────────────────────────────────────────────────────

impl YouTubeClient {
    pub fn new(config: VideoConfig) -> Result<Self, VideoError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| VideoError::Client(e.to_string()))?;
        let permits = Arc::new(Semaphore::new(config.max_concurrent.max(1)));

        Ok(Self {
            http,
            config,
            permits,
        })
    }

    pub fn is_configured(&self) -> bool {
        self.api_key().is_ok()
    }

    fn api_key(&self) -> Result<&str, VideoError> {
        self.config
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or(VideoError::MissingApiKey)
    }

    fn result_limit(&self) -> usize {
        self.config.max_results.clamp(1, MAX_VIDEOS_PER_ACTIVITY)
    }

    /// Search with retries, surfacing the final error.
    ///
    /// The credential is checked before any request is made. Retryable
    /// failures (timeouts, transport errors, non-4xx statuses) are retried
    /// while `attempts_remaining` allows; everything else returns at once.
    pub async fn search(
        &self,
        keywords: &str,
        language: &str,
        attempts_remaining: u32,
    ) -> Result<Vec<VideoResult>, VideoError> {
        self.search_counted(keywords, language, attempts_remaining)
            .await
            .result
    }

    /// Like [`search`](Self::search), also reporting the HTTP attempts made.
    /// Zero attempts means the search was refused before any request.
    pub async fn search_counted(
        &self,
        keywords: &str,
        language: &str,
        attempts_remaining: u32,
    ) -> SearchOutcome {
        let api_key = match self.api_key() {
            Ok(key) => key,
            Err(e) => return SearchOutcome::refused(e),
        };
        if keywords.trim().is_empty() {
            return SearchOutcome::refused(VideoError::EmptyQuery);
        }
        let query = build_query(keywords, language);

        let mut attempts: u32 = 0;
        loop {
            attempts += 1;
            match self.search_once(api_key, &query, language).await {
                Ok(videos) => {
                    debug!(query = %query, attempts, count = videos.len(), "video search complete");
                    return SearchOutcome {
                        result: Ok(videos),
                        attempts,
                    };
                }
                Err(e) if e.is_retryable() && attempts <= attempts_remaining => {
                    warn!(query = %query, attempts, error = %e, "video search failed, retrying");
                }
                Err(e) => {
                    return SearchOutcome {
                        result: Err(e),
                        attempts,
                    };
                }
            }
        }
    }

    /// One HTTP attempt. Holds a limiter permit only for its own duration.
    async fn search_once(
        &self,
        api_key: &str,
        query: &str,
        language: &str,
    ) -> Result<Vec<VideoResult>, VideoError> {
        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|e| VideoError::Transport(e.to_string()))?;

        let limit = self.result_limit();
        let max_results = limit.to_string();
        let response = self
            .http
            .get(&self.config.search_url)
            .query(&[
                ("part", "snippet"),
                ("q", query),
                ("key", api_key),
                ("maxResults", max_results.as_str()),
                ("type", "video"),
                ("safeSearch", "strict"),
                ("relevanceLanguage", language),
            ])
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(VideoError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: SearchResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                VideoError::Timeout(self.config.timeout)
            } else {
                VideoError::Decode(e.to_string())
            }
        })?;

        Ok(parsed.into_videos(limit))
    }

    fn transport_error(&self, e: reqwest::Error) -> VideoError {
        if e.is_timeout() {
            VideoError::Timeout(self.config.timeout)
        } else {
            VideoError::Transport(e.to_string())
        }
    }
}

#[async_trait]
impl VideoSearch for YouTubeClient {
    async fn fetch_videos(
        &self,
        keywords: &str,
        language: &str,
        attempts_remaining: u32,
    ) -> Vec<VideoResult> {
        let outcome = self
            .search_counted(keywords, language, attempts_remaining)
            .await;
        match outcome.result {
            Ok(videos) => {
                if videos.is_empty() {
                    info!(keywords, language, "no videos found");
                }
                videos
            }
            Err(VideoError::MissingApiKey) => {
                error!(keywords, "video search skipped: YOUTUBE_API_KEY is not configured");
                Vec::new()
            }
            Err(e) => {
                warn!(
                    query = %build_query(keywords, language),
                    language,
                    attempts = outcome.attempts,
                    error = %e,
                    "video enrichment degraded"
                );
                Vec::new()
            }
        }
    }
}
