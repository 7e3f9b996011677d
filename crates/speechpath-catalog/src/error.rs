use thiserror::Error;

use crate::template::TemplateKey;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("no plan template found for {key}")]
    NotFound { key: TemplateKey },

    #[error("severity (mild or moderate) is required for aphasia")]
    SeverityRequired,
}
