//! S3 key/path conventions.
//!
//! Pure string functions. One plan document per patient: keying plans by
//! patient id is what keeps the patient → plan relation 1:1.

use uuid::Uuid;

pub const PLANS_PREFIX: &str = "plans/";

pub const PATIENTS_PREFIX: &str = "patients/";

pub fn plan(patient_id: Uuid) -> String {
    format!("{PLANS_PREFIX}{patient_id}.json")
}

pub fn patient(patient_id: Uuid) -> String {
    format!("{PATIENTS_PREFIX}{patient_id}.json")
}
