//! speechpath-planner
//!
//! Turns (diagnosis, age, language, severity) into a therapy plan draft:
//! catalog lookup, then concurrent video enrichment of every activity.

pub mod error;
pub mod request;
pub mod resolver;
