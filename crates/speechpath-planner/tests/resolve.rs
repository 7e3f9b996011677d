use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use speechpath_catalog::Catalog;
use speechpath_core::models::video::VideoResult;
use speechpath_planner::error::PlanError;
use speechpath_planner::request::PlanRequest;
use speechpath_planner::resolver::PlanResolver;
use speechpath_videos::VideoSearch;

const MIRRORS: &str = "speech sound imitation for preschoolers";
const TONGUE: &str = "tongue exercises for speech therapy";

fn video(id: &str) -> VideoResult {
    VideoResult {
        title: format!("Video {id}"),
        url: format!("https://youtube.com/watch?v={id}"),
        thumbnail: None,
    }
}

/// Behavior scripted per search keyword. Unscripted keywords get one video.
#[derive(Clone)]
enum Behavior {
    Videos(Vec<VideoResult>),
    Delay(Duration, Vec<VideoResult>),
    Hang,
    Panic,
}

#[derive(Default)]
struct FakeVideos {
    script: HashMap<String, Behavior>,
    calls: Mutex<Vec<(String, String, u32)>>,
}

impl FakeVideos {
    fn with(mut self, keywords: &str, behavior: Behavior) -> Self {
        self.script.insert(keywords.to_string(), behavior);
        self
    }

    fn calls(&self) -> Vec<(String, String, u32)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl VideoSearch for FakeVideos {
    async fn fetch_videos(
        &self,
        keywords: &str,
        language: &str,
        attempts_remaining: u32,
    ) -> Vec<VideoResult> {
        self.calls.lock().unwrap().push((
            keywords.to_string(),
            language.to_string(),
            attempts_remaining,
        ));
        match self.script.get(keywords).cloned() {
            None => vec![video(&keywords.replace(' ', "-"))],
            Some(Behavior::Videos(videos)) => videos,
            Some(Behavior::Delay(delay, videos)) => {
                tokio::time::sleep(delay).await;
                videos
            }
            Some(Behavior::Hang) => std::future::pending().await,
            Some(Behavior::Panic) => panic!("search backend exploded"),
        }
    }
}

fn resolver(videos: Arc<FakeVideos>) -> PlanResolver {
    PlanResolver::new(Arc::new(Catalog::builtin()), videos)
}

#[tokio::test]
async fn articulation_preschool_scenario() {
    let videos = Arc::new(
        FakeVideos::default()
            .with(MIRRORS, Behavior::Videos(vec![video("m1"), video("m2")]))
            .with(TONGUE, Behavior::Videos(vec![video("t1")])),
    );
    let plan = resolver(videos.clone())
        .resolve(&PlanRequest::new("articulation", 4, "en"))
        .await
        .unwrap();

    assert_eq!(plan.goals.len(), 4);
    assert!(plan.goals[0].starts_with("Improve correct production of target sounds"));
    assert_eq!(plan.goals[1], "Increase awareness of tongue and lip placement");
    assert!(plan.goals[2].starts_with("Reduce phonological errors"));
    assert_eq!(plan.goals[3], "Strengthen oral-motor coordination");

    assert_eq!(plan.activities.len(), 2);
    assert_eq!(plan.activities[0].name, "Sound imitation with mirrors");
    assert_eq!(plan.activities[0].videos, vec![video("m1"), video("m2")]);
    assert_eq!(plan.activities[1].name, "Tongue placement games");
    assert_eq!(plan.activities[1].videos, vec![video("t1")]);
    assert!(plan.activities.iter().all(|a| a.videos.len() <= 2));
    assert_eq!(plan.language, "en");

    let mut calls = videos.calls();
    calls.sort();
    assert_eq!(
        calls,
        vec![
            (MIRRORS.to_string(), "en".to_string(), 1),
            (TONGUE.to_string(), "en".to_string(), 1),
        ]
    );
}

#[tokio::test]
async fn aphasia_mild_scenario() {
    let plan = resolver(Arc::new(FakeVideos::default()))
        .resolve(&PlanRequest::new("aphasia", 40, "en").with_severity("mild"))
        .await
        .unwrap();

    assert_eq!(
        plan.goals,
        [
            "Strengthen word-finding skills",
            "Improve sentence formation",
            "Develop comprehension strategies",
        ]
    );
    assert_eq!(plan.activities.len(), 1);
    assert_eq!(plan.activities[0].name, "Semantic feature analysis");
}

#[tokio::test]
async fn aphasia_selection_does_not_depend_on_age() {
    let resolver = resolver(Arc::new(FakeVideos::default()));
    let mut selected = Vec::new();
    for age in [0, 5, 6, 12, 13, 85] {
        let plan = resolver
            .resolve(&PlanRequest::new("aphasia", age, "en").with_severity("moderate"))
            .await
            .unwrap();
        selected.push((plan.goals, plan.activities[0].name.clone()));
    }
    assert!(selected.windows(2).all(|w| w[0] == w[1]));
}

#[tokio::test]
async fn aphasia_without_severity_is_a_validation_error() {
    let resolver = resolver(Arc::new(FakeVideos::default()));
    for age in [2, 30, 70] {
        let err = resolver
            .resolve(&PlanRequest::new("aphasia", age, "en"))
            .await
            .unwrap_err();
        assert!(matches!(err, PlanError::Validation(_)), "age {age}: {err:?}");
    }

    let err = resolver
        .resolve(&PlanRequest::new("aphasia", 30, "en").with_severity("severe"))
        .await
        .unwrap_err();
    assert!(matches!(err, PlanError::Validation(_)));
}

#[tokio::test]
async fn severity_is_ignored_for_other_diagnoses() {
    let resolver = resolver(Arc::new(FakeVideos::default()));
    let with = resolver
        .resolve(&PlanRequest::new("pragmatic", 9, "en").with_severity("nonsense"))
        .await
        .unwrap();
    let without = resolver
        .resolve(&PlanRequest::new("pragmatic", 9, "en"))
        .await
        .unwrap();
    assert_eq!(with.goals, without.goals);
}

#[tokio::test]
async fn unknown_diagnosis_is_not_found_with_key() {
    let err = resolver(Arc::new(FakeVideos::default()))
        .resolve(&PlanRequest::new("unknown-diagnosis", 10, "en"))
        .await
        .unwrap_err();

    match err {
        PlanError::NotFound { key } => assert!(key.contains("unknown-diagnosis"), "{key}"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_inputs_are_validation_errors() {
    let resolver = resolver(Arc::new(FakeVideos::default()));

    let no_age = PlanRequest {
        diagnosis: "language".to_string(),
        ..PlanRequest::default()
    };
    let negative_age = PlanRequest::new("language", -1, "en");
    let no_diagnosis = PlanRequest::new("   ", 7, "en");

    for request in [no_age, negative_age, no_diagnosis] {
        let err = resolver.resolve(&request).await.unwrap_err();
        assert!(matches!(err, PlanError::Validation(_)), "{request:?}");
    }
}

#[tokio::test]
async fn age_zero_is_accepted() {
    let plan = resolver(Arc::new(FakeVideos::default()))
        .resolve(&PlanRequest::new("language", 0, "en"))
        .await
        .unwrap();
    assert_eq!(plan.activities[0].name, "Picture card naming");
}

#[tokio::test]
async fn repeated_resolution_is_deterministic() {
    let resolver = resolver(Arc::new(FakeVideos::default()));
    let request = PlanRequest::new("stuttering", 14, "en");

    let first = resolver.resolve(&request).await.unwrap();
    let second = resolver.resolve(&request).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn caller_mutation_does_not_touch_catalog() {
    let resolver = resolver(Arc::new(FakeVideos::default()));
    let request = PlanRequest::new("apraxia", 8, "en");

    let mut first = resolver.resolve(&request).await.unwrap();
    first.goals.clear();
    first.goals.push("tampered".to_string());

    let second = resolver.resolve(&request).await.unwrap();
    assert_eq!(second.goals.len(), 3);
    assert_eq!(second.goals[0], "Improve complex word coordination");
}

#[tokio::test]
async fn language_is_normalized_and_forwarded() {
    let videos = Arc::new(FakeVideos::default());
    let plan = resolver(videos.clone())
        .resolve(&PlanRequest::new("Language", 4, " ES "))
        .await
        .unwrap();

    assert_eq!(plan.language, "es");
    assert_eq!(videos.calls()[0].1, "es");
}

#[tokio::test]
async fn failed_enrichment_leaves_siblings_populated() {
    let videos = Arc::new(
        FakeVideos::default()
            .with(MIRRORS, Behavior::Videos(Vec::new()))
            .with(TONGUE, Behavior::Videos(vec![video("t1"), video("t2")])),
    );
    let plan = resolver(videos)
        .resolve(&PlanRequest::new("articulation", 3, "en"))
        .await
        .unwrap();

    assert!(plan.activities[0].videos.is_empty());
    assert_eq!(plan.activities[1].videos.len(), 2);
}

#[tokio::test]
async fn panicking_enrichment_is_isolated() {
    let videos = Arc::new(
        FakeVideos::default()
            .with(MIRRORS, Behavior::Panic)
            .with(TONGUE, Behavior::Videos(vec![video("t1")])),
    );
    let plan = resolver(videos)
        .resolve(&PlanRequest::new("articulation", 5, "en"))
        .await
        .unwrap();

    assert_eq!(plan.activities[0].name, "Sound imitation with mirrors");
    assert!(plan.activities[0].videos.is_empty());
    assert_eq!(plan.activities[1].videos, vec![video("t1")]);
}

#[tokio::test]
async fn hanging_enrichment_does_not_block_siblings() {
    let videos = Arc::new(
        FakeVideos::default()
            .with(MIRRORS, Behavior::Hang)
            .with(
                TONGUE,
                Behavior::Delay(Duration::from_millis(20), vec![video("t1")]),
            ),
    );
    let resolver = resolver(videos).with_activity_deadline(Duration::from_millis(200));

    let started = Instant::now();
    let plan = tokio::time::timeout(
        Duration::from_secs(5),
        resolver.resolve(&PlanRequest::new("articulation", 4, "en")),
    )
    .await
    .expect("resolution must not hang")
    .unwrap();

    assert!(started.elapsed() < Duration::from_secs(1));
    assert!(plan.activities[0].videos.is_empty());
    assert_eq!(plan.activities[1].videos, vec![video("t1")]);
}

#[tokio::test]
async fn enrichment_runs_concurrently_and_keeps_template_order() {
    // The first activity finishes last; results must still come back in
    // template order, and total latency must track the slowest search.
    let videos = Arc::new(
        FakeVideos::default()
            .with(
                MIRRORS,
                Behavior::Delay(Duration::from_millis(300), vec![video("m1")]),
            )
            .with(
                TONGUE,
                Behavior::Delay(Duration::from_millis(250), vec![video("t1")]),
            ),
    );

    let started = Instant::now();
    let plan = resolver(videos)
        .resolve(&PlanRequest::new("articulation", 4, "en"))
        .await
        .unwrap();

    assert!(started.elapsed() < Duration::from_millis(500));
    assert_eq!(plan.activities[0].videos, vec![video("m1")]);
    assert_eq!(plan.activities[1].videos, vec![video("t1")]);
}
