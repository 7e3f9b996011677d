pub mod aphasia;
pub mod apraxia;
pub mod articulation;
pub mod language;
pub mod pragmatic;
pub mod stuttering;
