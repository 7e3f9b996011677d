use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::clinical::Severity;

/// The subset of a patient record that plan generation reads.
///
/// Patients are owned by the patient service; this crate never writes them.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientRecord {
    pub id: Uuid,
    pub patient_name: String,
    pub age: u32,
    pub diagnosis: String,
    pub native_language: String,
    #[serde(default)]
    pub aphasia_severity: Option<Severity>,
}
