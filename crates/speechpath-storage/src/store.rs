use async_trait::async_trait;
use speechpath_core::models::patient::PatientRecord;
use speechpath_core::models::plan::TherapyPlan;
use uuid::Uuid;

use crate::error::StorageError;

/// Document storage for therapy plans, keyed by patient id.
///
/// Patients are read-only here; the patient service owns them.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn get_patient(&self, patient_id: Uuid) -> Result<PatientRecord, StorageError>;

    async fn get_plan(&self, patient_id: Uuid) -> Result<TherapyPlan, StorageError>;

    /// Create or fully replace the patient's plan.
    async fn put_plan(&self, plan: &TherapyPlan) -> Result<(), StorageError>;

    /// Remove the patient's plan. Deleting a missing plan succeeds.
    async fn delete_plan(&self, patient_id: Uuid) -> Result<(), StorageError>;
}
