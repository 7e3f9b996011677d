//! speechpath-catalog
//!
//! Therapy plan templates keyed by diagnosis and age band (or severity for
//! aphasia). Pure data, no I/O. The [`Catalog`] is built once at startup
//! and shared read-only.

pub mod diagnoses;
pub mod error;
pub mod template;

use std::collections::HashMap;

use serde::Serialize;
use speechpath_core::clinical::{self, Severity};
use ts_rs::TS;

use error::CatalogError;
use template::{AgeBand, Selector, Template, TemplateKey};

/// Trait implemented by each supported diagnosis.
pub trait Diagnosis: Send + Sync {
    /// Normalized lowercase code (e.g., "articulation").
    fn code(&self) -> &str;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// Templates for this diagnosis, in declaration order.
    fn templates(&self) -> &[(Selector, Template)];
}

/// Return all registered diagnoses.
pub fn all_diagnoses() -> Vec<Box<dyn Diagnosis>> {
    vec![
        Box::new(diagnoses::articulation::Articulation),
        Box::new(diagnoses::language::Language),
        Box::new(diagnoses::stuttering::Stuttering),
        Box::new(diagnoses::apraxia::Apraxia),
        Box::new(diagnoses::aphasia::Aphasia),
        Box::new(diagnoses::pragmatic::Pragmatic),
    ]
}

/// A recognized diagnosis and the template keys available for it.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct DiagnosisSummary {
    pub code: String,
    pub name: String,
    pub selectors: Vec<Selector>,
}

/// Immutable lookup table from (diagnosis, age band | severity) to template.
#[derive(Debug, Clone)]
pub struct Catalog {
    summaries: Vec<DiagnosisSummary>,
    templates: HashMap<TemplateKey, Template>,
}

impl Catalog {
    /// The catalog of every registered diagnosis.
    pub fn builtin() -> Self {
        Self::from_diagnoses(&all_diagnoses())
    }

    pub fn from_diagnoses(diagnoses: &[Box<dyn Diagnosis>]) -> Self {
        let mut summaries = Vec::with_capacity(diagnoses.len());
        let mut templates = HashMap::new();

        for diagnosis in diagnoses {
            let code = clinical::normalize_code(diagnosis.code());
            let mut selectors = Vec::new();
            for (selector, template) in diagnosis.templates() {
                selectors.push(*selector);
                templates.insert(
                    TemplateKey {
                        diagnosis: code.clone(),
                        selector: *selector,
                    },
                    template.clone(),
                );
            }
            summaries.push(DiagnosisSummary {
                code,
                name: diagnosis.name().to_string(),
                selectors,
            });
        }

        Self {
            summaries,
            templates,
        }
    }

    /// Recognized diagnoses in declaration order.
    pub fn diagnoses(&self) -> &[DiagnosisSummary] {
        &self.summaries
    }

    pub fn is_recognized(&self, diagnosis: &str) -> bool {
        let code = clinical::normalize_code(diagnosis);
        self.summaries.iter().any(|s| s.code == code)
    }

    /// Select the template for a diagnosis.
    ///
    /// Aphasia ignores `age` and requires `severity`; every other diagnosis
    /// ignores `severity` and selects by [`AgeBand::from_age`].
    pub fn lookup(
        &self,
        diagnosis: &str,
        age: u32,
        severity: Option<Severity>,
    ) -> Result<&Template, CatalogError> {
        let code = clinical::normalize_code(diagnosis);
        let selector = if clinical::is_aphasia(&code) {
            Selector::Severity(severity.ok_or(CatalogError::SeverityRequired)?)
        } else {
            Selector::AgeBand(AgeBand::from_age(age))
        };

        let key = TemplateKey {
            diagnosis: code,
            selector,
        };
        match self.templates.get(&key) {
            Some(template) => Ok(template),
            None => Err(CatalogError::NotFound { key }),
        }
    }
}
