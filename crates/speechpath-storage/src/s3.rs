use async_trait::async_trait;
use aws_sdk_s3::Client;
use speechpath_core::models::patient::PatientRecord;
use speechpath_core::models::plan::TherapyPlan;
use speechpath_core::s3_keys;
use tracing::info;
use uuid::Uuid;

use crate::error::StorageError;
use crate::json::{load_json, save_json};
use crate::objects;
use crate::store::DocumentStore;

/// Plans and patients as JSON objects in one bucket.
#[derive(Clone)]
pub struct S3Store {
    client: Client,
    bucket: String,
}

impl S3Store {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl DocumentStore for S3Store {
    async fn get_patient(&self, patient_id: Uuid) -> Result<PatientRecord, StorageError> {
        load_json(&self.client, &self.bucket, &s3_keys::patient(patient_id)).await
    }

    async fn get_plan(&self, patient_id: Uuid) -> Result<TherapyPlan, StorageError> {
        load_json(&self.client, &self.bucket, &s3_keys::plan(patient_id)).await
    }

    async fn put_plan(&self, plan: &TherapyPlan) -> Result<(), StorageError> {
        let key = s3_keys::plan(plan.patient_id);
        let etag = save_json(&self.client, &self.bucket, &key, plan).await?;
        info!(key = %key, etag = %etag, "stored therapy plan");
        Ok(())
    }

    async fn delete_plan(&self, patient_id: Uuid) -> Result<(), StorageError> {
        let key = s3_keys::plan(patient_id);
        objects::delete_object(&self.client, &self.bucket, &key).await?;
        info!(key = %key, "deleted therapy plan");
        Ok(())
    }
}
