use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::clinical::{self, Severity};
use crate::models::patient::PatientRecord;
use crate::models::video::VideoResult;

/// A template activity with its fetched video recommendations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResolvedActivity {
    pub name: String,
    #[serde(default)]
    pub videos: Vec<VideoResult>,
}

/// Output of plan resolution, before it is attached to a patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PlanDraft {
    pub goals: Vec<String>,
    pub activities: Vec<ResolvedActivity>,
    pub language: String,
}

/// Persisted therapy plan, one per patient.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TherapyPlan {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub patient_name: String,
    pub diagnosis: String,
    pub age: u32,
    pub native_language: String,
    /// Set iff the diagnosis is aphasia.
    pub aphasia_severity: Option<Severity>,
    pub goals: Vec<String>,
    pub activities: Vec<ResolvedActivity>,
    /// All activity video URLs, flattened in activity order.
    pub youtube_links: Vec<String>,
    pub ai_generated: bool,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

/// Full replacement of a plan's editable content.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PlanUpdate {
    pub goals: Vec<String>,
    pub activities: Vec<ResolvedActivity>,
}

impl TherapyPlan {
    /// Attach a template-sourced draft to a patient.
    pub fn from_draft(patient: &PatientRecord, draft: PlanDraft) -> Self {
        let now = jiff::Timestamp::now();
        let diagnosis = clinical::normalize_code(&patient.diagnosis);
        let aphasia_severity = if clinical::is_aphasia(&diagnosis) {
            patient.aphasia_severity
        } else {
            None
        };
        let youtube_links = flatten_links(&draft.activities);

        Self {
            id: Uuid::new_v4(),
            patient_id: patient.id,
            patient_name: patient.patient_name.clone(),
            diagnosis,
            age: patient.age,
            native_language: clinical::normalize_code(&patient.native_language),
            aphasia_severity,
            goals: draft.goals,
            activities: draft.activities,
            youtube_links,
            ai_generated: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace goals and activities wholesale. Identity and creation time are kept.
    pub fn apply_update(&mut self, update: PlanUpdate) {
        self.youtube_links = flatten_links(&update.activities);
        self.goals = update.goals;
        self.activities = update.activities;
        self.updated_at = jiff::Timestamp::now();
    }
}

fn flatten_links(activities: &[ResolvedActivity]) -> Vec<String> {
    activities
        .iter()
        .flat_map(|a| &a.videos)
        .map(|v| v.url.clone())
        .filter(|url| !url.is_empty())
        .collect()
}
