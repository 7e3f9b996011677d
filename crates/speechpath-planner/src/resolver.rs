use std::sync::Arc;
use std::time::Duration;

use speechpath_catalog::Catalog;
use speechpath_catalog::template::Activity;
use speechpath_core::models::plan::{PlanDraft, ResolvedActivity};
use speechpath_core::models::video::VideoResult;
use speechpath_videos::{DEFAULT_RETRY_BUDGET, VideoSearch};
use tokio::task::JoinSet;
use tracing::{error, info, warn};

use crate::error::PlanError;
use crate::request::PlanRequest;

/// Upper bound on one activity's enrichment, retries and limiter wait included.
/// The search client enforces its own per-request timeout; this one catches
/// implementations that never resolve.
pub const DEFAULT_ACTIVITY_DEADLINE: Duration = Duration::from_secs(20);

/// Resolves plan requests against a shared catalog and video source.
#[derive(Clone)]
pub struct PlanResolver {
    catalog: Arc<Catalog>,
    videos: Arc<dyn VideoSearch>,
    retry_budget: u32,
    activity_deadline: Duration,
}

impl PlanResolver {
    pub fn new(catalog: Arc<Catalog>, videos: Arc<dyn VideoSearch>) -> Self {
        Self {
            catalog,
            videos,
            retry_budget: DEFAULT_RETRY_BUDGET,
            activity_deadline: DEFAULT_ACTIVITY_DEADLINE,
        }
    }

    pub fn with_activity_deadline(mut self, deadline: Duration) -> Self {
        self.activity_deadline = deadline;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Validate, select the template and enrich its activities.
    ///
    /// Only [`PlanError::Validation`] and [`PlanError::NotFound`] are
    /// returned. Enrichment failures leave the affected activity with no
    /// videos.
    pub async fn resolve(&self, request: &PlanRequest) -> Result<PlanDraft, PlanError> {
        let request = request.validate()?;
        let template = self
            .catalog
            .lookup(&request.diagnosis, request.age, request.severity)?;

        let activities = self.enrich(&template.activities, &request.language).await;

        info!(
            diagnosis = %request.diagnosis,
            age = request.age,
            language = %request.language,
            goals = template.goals.len(),
            activities = activities.len(),
            videos = activities.iter().map(|a| a.videos.len()).sum::<usize>(),
            "resolved therapy plan"
        );

        Ok(PlanDraft {
            goals: template.goals.clone(),
            activities,
            language: request.language,
        })
    }

    /// Fetch videos for every activity concurrently and return them in
    /// template order, whatever order the searches finish in.
    async fn enrich(&self, activities: &[Activity], language: &str) -> Vec<ResolvedActivity> {
        let mut tasks = JoinSet::new();

        for (index, activity) in activities.iter().enumerate() {
            let videos = Arc::clone(&self.videos);
            let keywords = activity.search_keywords.clone();
            let language = language.to_string();
            let retry_budget = self.retry_budget;
            let deadline = self.activity_deadline;

            tasks.spawn(async move {
                let search = videos.fetch_videos(&keywords, &language, retry_budget);
                let found = match tokio::time::timeout(deadline, search).await {
                    Ok(found) => found,
                    Err(_) => {
                        warn!(keywords = %keywords, ?deadline, "video enrichment deadline exceeded");
                        Vec::new()
                    }
                };
                (index, found)
            });
        }

        // A panicked task keeps its empty slot.
        let mut slots: Vec<Vec<VideoResult>> = vec![Vec::new(); activities.len()];
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, found)) => slots[index] = found,
                Err(e) => error!(error = %e, "video enrichment task failed"),
            }
        }

        activities
            .iter()
            .zip(slots)
            .map(|(activity, videos)| ResolvedActivity {
                name: activity.name.clone(),
                videos,
            })
            .collect()
    }
}
