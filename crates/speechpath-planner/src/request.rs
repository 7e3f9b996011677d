use serde::Deserialize;
use speechpath_core::clinical::{self, Severity};
use speechpath_core::models::patient::PatientRecord;

use crate::error::PlanError;

/// Raw plan inputs, as received from a caller.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlanRequest {
    #[serde(default)]
    pub diagnosis: String,
    pub age: Option<i64>,
    pub language: Option<String>,
    pub severity: Option<String>,
}

impl PlanRequest {
    pub fn new(diagnosis: &str, age: i64, language: &str) -> Self {
        Self {
            diagnosis: diagnosis.to_string(),
            age: Some(age),
            language: Some(language.to_string()),
            severity: None,
        }
    }

    pub fn with_severity(mut self, severity: &str) -> Self {
        self.severity = Some(severity.to_string());
        self
    }

    /// Build a request from a stored patient record.
    pub fn for_patient(patient: &PatientRecord, language: &str) -> Self {
        Self {
            diagnosis: patient.diagnosis.clone(),
            age: Some(i64::from(patient.age)),
            language: Some(language.to_string()),
            severity: patient.aphasia_severity.map(|s| s.as_str().to_string()),
        }
    }

    /// Normalize and check the request.
    ///
    /// Severity is parsed only for aphasia; for any other diagnosis it is
    /// dropped, whatever its value.
    pub fn validate(&self) -> Result<ValidRequest, PlanError> {
        let diagnosis = clinical::normalize_code(&self.diagnosis);
        if diagnosis.is_empty() {
            return Err(PlanError::Validation("diagnosis is required".to_string()));
        }

        let age = match self.age {
            None => return Err(PlanError::Validation("age is required".to_string())),
            Some(age) if age < 0 => {
                return Err(PlanError::Validation(format!(
                    "age must be zero or greater, got {age}"
                )));
            }
            Some(age) => u32::try_from(age)
                .map_err(|_| PlanError::Validation(format!("age out of range: {age}")))?,
        };

        let severity = if clinical::is_aphasia(&diagnosis) {
            let raw = self
                .severity
                .as_deref()
                .filter(|s| !s.trim().is_empty())
                .ok_or_else(|| {
                    PlanError::Validation(
                        "severity (mild or moderate) is required for aphasia".to_string(),
                    )
                })?;
            Some(
                raw.parse::<Severity>()
                    .map_err(|e| PlanError::Validation(e.to_string()))?,
            )
        } else {
            None
        };

        Ok(ValidRequest {
            diagnosis,
            age,
            language: clinical::normalize_language(self.language.as_deref()),
            severity,
        })
    }
}

/// A request that passed validation. Fields are normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidRequest {
    pub diagnosis: String,
    pub age: u32,
    pub language: String,
    pub severity: Option<Severity>,
}
