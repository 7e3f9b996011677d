use speechpath_catalog::error::CatalogError;
use thiserror::Error;

/// Failures that cross the resolver boundary. Video problems never do.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("invalid plan request: {0}")]
    Validation(String),

    /// Carries the attempted lookup key for diagnostics.
    #[error("no plan template found for {key}")]
    NotFound { key: String },
}

impl From<CatalogError> for PlanError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::NotFound { key } => PlanError::NotFound {
                key: key.to_string(),
            },
            other @ CatalogError::SeverityRequired => PlanError::Validation(other.to_string()),
        }
    }
}
