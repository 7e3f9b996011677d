use std::fmt;

use serde::{Deserialize, Serialize};
use speechpath_core::clinical::Severity;
use ts_rs::TS;

/// Age partition used to select a non-aphasia template.
///
/// `<= 5` → `3-5`, `<= 12` → `6-12`, otherwise `13+`. Ages below three
/// fall into the youngest band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum AgeBand {
    #[serde(rename = "3-5")]
    Preschool,
    #[serde(rename = "6-12")]
    SchoolAge,
    #[serde(rename = "13+")]
    Adolescent,
}

impl AgeBand {
    pub fn from_age(age: u32) -> Self {
        match age {
            0..=5 => AgeBand::Preschool,
            6..=12 => AgeBand::SchoolAge,
            _ => AgeBand::Adolescent,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AgeBand::Preschool => "3-5",
            AgeBand::SchoolAge => "6-12",
            AgeBand::Adolescent => "13+",
        }
    }
}

/// Second half of a template key: age band for most diagnoses, severity for aphasia.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum Selector {
    AgeBand(AgeBand),
    Severity(Severity),
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::AgeBand(band) => f.write_str(band.as_str()),
            Selector::Severity(severity) => f.write_str(severity.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TemplateKey {
    pub diagnosis: String,
    pub selector: Selector,
}

impl fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "diagnosis '{}' ({})", self.diagnosis, self.selector)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Activity {
    pub name: String,
    /// Query sent to the video search. Same as `name` unless the template overrides it.
    pub search_keywords: String,
}

impl Activity {
    pub fn new(name: &str, search_keywords: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            search_keywords: search_keywords.unwrap_or(name).to_string(),
        }
    }
}

/// Goals and activities for one diagnosis + selector. Order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Template {
    pub goals: Vec<String>,
    pub activities: Vec<Activity>,
}

impl Template {
    /// Build from static data. Each activity is `(name, search keywords)`.
    pub fn new(goals: &[&str], activities: &[(&str, &str)]) -> Self {
        Self {
            goals: goals.iter().map(|g| g.to_string()).collect(),
            activities: activities
                .iter()
                .map(|(name, keywords)| Activity::new(name, Some(keywords)))
                .collect(),
        }
    }
}
