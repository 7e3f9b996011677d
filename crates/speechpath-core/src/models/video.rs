use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A single video recommendation attached to an activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VideoResult {
    pub title: String,
    /// External watch-page URL.
    pub url: String,
    pub thumbnail: Option<String>,
}
