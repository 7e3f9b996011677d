use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid severity: {0} (expected mild or moderate)")]
    InvalidSeverity(String),
}
