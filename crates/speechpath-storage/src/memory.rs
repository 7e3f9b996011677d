use std::collections::HashMap;

use async_trait::async_trait;
use speechpath_core::models::patient::PatientRecord;
use speechpath_core::models::plan::TherapyPlan;
use speechpath_core::s3_keys;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::StorageError;
use crate::store::DocumentStore;

/// Process-local store for development and tests. Contents are lost on exit.
#[derive(Default)]
pub struct MemoryStore {
    patients: RwLock<HashMap<Uuid, PatientRecord>>,
    plans: RwLock<HashMap<Uuid, TherapyPlan>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a patient, standing in for the patient service.
    pub async fn insert_patient(&self, patient: PatientRecord) {
        self.patients.write().await.insert(patient.id, patient);
    }

    pub async fn plan_count(&self) -> usize {
        self.plans.read().await.len()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get_patient(&self, patient_id: Uuid) -> Result<PatientRecord, StorageError> {
        self.patients
            .read()
            .await
            .get(&patient_id)
            .cloned()
            .ok_or_else(|| StorageError::NotFound {
                key: s3_keys::patient(patient_id),
            })
    }

    async fn get_plan(&self, patient_id: Uuid) -> Result<TherapyPlan, StorageError> {
        self.plans
            .read()
            .await
            .get(&patient_id)
            .cloned()
            .ok_or_else(|| StorageError::NotFound {
                key: s3_keys::plan(patient_id),
            })
    }

    async fn put_plan(&self, plan: &TherapyPlan) -> Result<(), StorageError> {
        self.plans
            .write()
            .await
            .insert(plan.patient_id, plan.clone());
        Ok(())
    }

    async fn delete_plan(&self, patient_id: Uuid) -> Result<(), StorageError> {
        self.plans.write().await.remove(&patient_id);
        Ok(())
    }
}
