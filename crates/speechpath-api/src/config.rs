//! Runtime configuration, read once from the environment at startup.

use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use speechpath_core::clinical::{self, DEFAULT_LANGUAGE};
use speechpath_core::models::patient::PatientRecord;
use speechpath_videos::config::{DEFAULT_SEARCH_URL, VideoConfig};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Which language plans for stored patients are generated in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguagePolicy {
    /// The patient's native language.
    #[default]
    Patient,
    /// Always English, whatever the patient speaks.
    English,
}

impl LanguagePolicy {
    pub fn language_for(&self, patient: &PatientRecord) -> String {
        match self {
            LanguagePolicy::Patient => clinical::normalize_language(Some(&patient.native_language)),
            LanguagePolicy::English => DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl FromStr for LanguagePolicy {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match clinical::normalize_code(s).as_str() {
            "patient" => Ok(LanguagePolicy::Patient),
            "english" | "en" => Ok(LanguagePolicy::English),
            other => Err(eyre::eyre!(
                "PLAN_LANGUAGE_POLICY must be 'patient' or 'english', got '{other}'"
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    /// S3 bucket for plan documents. `None` selects the in-memory store.
    pub bucket: Option<String>,
    pub language_policy: LanguagePolicy,
    pub video: VideoConfig,
}

impl ApiConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let bind_addr: SocketAddr = var("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .map_err(|e| eyre::eyre!("invalid BIND_ADDR: {e}"))?;

        let language_policy = match var("PLAN_LANGUAGE_POLICY") {
            Some(raw) => raw.parse()?,
            None => LanguagePolicy::default(),
        };

        let defaults = VideoConfig::default();
        let video = VideoConfig {
            api_key: var("YOUTUBE_API_KEY"),
            search_url: var("YOUTUBE_SEARCH_URL").unwrap_or_else(|| DEFAULT_SEARCH_URL.to_string()),
            timeout: match var("VIDEO_SEARCH_TIMEOUT_SECS") {
                Some(raw) => Duration::from_secs(parse_number("VIDEO_SEARCH_TIMEOUT_SECS", &raw)?),
                None => defaults.timeout,
            },
            max_concurrent: match var("VIDEO_SEARCH_MAX_CONCURRENT") {
                Some(raw) => parse_number("VIDEO_SEARCH_MAX_CONCURRENT", &raw)?,
                None => defaults.max_concurrent,
            },
            max_results: match var("VIDEO_MAX_RESULTS") {
                Some(raw) => parse_number("VIDEO_MAX_RESULTS", &raw)?,
                None => defaults.max_results,
            },
        };

        Ok(Self {
            bind_addr,
            bucket: var("SPEECHPATH_BUCKET"),
            language_policy,
            video,
        })
    }
}

fn parse_number<T>(name: &str, raw: &str) -> eyre::Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| eyre::eyre!("invalid {name} '{raw}': {e}"))
}
