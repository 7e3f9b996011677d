//! speechpath-videos
//!
//! Video recommendations for therapy activities. Wraps the YouTube Data API
//! search endpoint with a per-request timeout, a single retry for transient
//! failures, and a process-wide cap on in-flight searches.
//!
//! Enrichment never fails a plan: [`VideoSearch::fetch_videos`] always
//! resolves, degrading to an empty list and logging the failure.

pub mod config;
pub mod error;
pub mod query;
pub mod youtube;

use async_trait::async_trait;
use speechpath_core::models::video::VideoResult;

/// Upper bound on videos attached to a single activity.
pub const MAX_VIDEOS_PER_ACTIVITY: usize = 2;

/// Retry budget used by plan resolution: one retry after the first attempt.
pub const DEFAULT_RETRY_BUDGET: u32 = 1;

/// Source of video recommendations for an activity.
#[async_trait]
pub trait VideoSearch: Send + Sync {
    /// Search for videos matching `keywords`.
    ///
    /// `attempts_remaining` is the number of retries allowed after the first
    /// attempt. Implementations must not return errors: unrecoverable
    /// failures resolve to an empty list.
    async fn fetch_videos(
        &self,
        keywords: &str,
        language: &str,
        attempts_remaining: u32,
    ) -> Vec<VideoResult>;
}
