use std::sync::Arc;

use speechpath_planner::resolver::PlanResolver;
use speechpath_storage::store::DocumentStore;

use crate::config::LanguagePolicy;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub resolver: PlanResolver,
    pub store: Arc<dyn DocumentStore>,
    pub language_policy: LanguagePolicy,
}
