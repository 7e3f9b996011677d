use speechpath_core::models::patient::PatientRecord;
use speechpath_core::models::plan::{PlanDraft, PlanUpdate, ResolvedActivity, TherapyPlan};
use speechpath_storage::error::StorageError;
use speechpath_storage::memory::MemoryStore;
use speechpath_storage::store::DocumentStore;
use uuid::Uuid;

fn patient() -> PatientRecord {
    PatientRecord {
        id: Uuid::new_v4(),
        patient_name: "riya".to_string(),
        age: 9,
        diagnosis: "language".to_string(),
        native_language: "hi".to_string(),
        aphasia_severity: None,
    }
}

fn plan_for(patient: &PatientRecord) -> TherapyPlan {
    TherapyPlan::from_draft(
        patient,
        PlanDraft {
            goals: vec!["Improve multi-step directions".to_string()],
            activities: vec![ResolvedActivity {
                name: "Story sequencing".to_string(),
                videos: vec![],
            }],
            language: "hi".to_string(),
        },
    )
}

#[tokio::test]
async fn missing_patient_is_not_found() {
    let store = MemoryStore::new();
    let id = Uuid::new_v4();
    let err = store.get_patient(id).await.unwrap_err();
    match err {
        StorageError::NotFound { key } => assert_eq!(key, format!("patients/{id}.json")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn plans_round_trip_by_patient_id() {
    let store = MemoryStore::new();
    let patient = patient();
    store.insert_patient(patient.clone()).await;

    let plan = plan_for(&store.get_patient(patient.id).await.unwrap());
    store.put_plan(&plan).await.unwrap();

    let loaded = store.get_plan(patient.id).await.unwrap();
    assert_eq!(loaded.id, plan.id);
    assert_eq!(loaded.goals, plan.goals);
}

#[tokio::test]
async fn put_replaces_the_previous_plan() {
    let store = MemoryStore::new();
    let patient = patient();
    let mut plan = plan_for(&patient);
    store.put_plan(&plan).await.unwrap();

    plan.apply_update(PlanUpdate {
        goals: vec!["Expand complex sentence use".to_string()],
        activities: vec![],
    });
    store.put_plan(&plan).await.unwrap();

    assert_eq!(store.plan_count().await, 1);
    let loaded = store.get_plan(patient.id).await.unwrap();
    assert_eq!(loaded.goals, vec!["Expand complex sentence use"]);
    assert!(loaded.activities.is_empty());
}

#[tokio::test]
async fn delete_is_idempotent() {
    let store = MemoryStore::new();
    let patient = patient();
    store.put_plan(&plan_for(&patient)).await.unwrap();

    store.delete_plan(patient.id).await.unwrap();
    store.delete_plan(patient.id).await.unwrap();

    assert!(matches!(
        store.get_plan(patient.id).await,
        Err(StorageError::NotFound { .. })
    ));
}
