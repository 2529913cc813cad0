use serde::{Deserialize, Deserializer, Serialize};

pub const MIN_STRENGTH: u8 = 1;
pub const MAX_STRENGTH: u8 = 5;

/// The full structured resume for one language.
///
/// Every field carries a serde default so that any creation path
/// (server load, default factory, uploaded file) yields a document
/// with all top-level fields present. Partial JSON therefore merges
/// with defaults instead of failing or dropping sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeDocument {
    #[serde(rename = "baseInfo")]
    pub base_info: BaseInfo,
    pub professional_summary: String,
    pub technical_skills: Vec<Skill>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub certifications: Vec<String>,
    pub projects: Vec<Project>,
    pub languages: Vec<String>,
}

impl ResumeDocument {
    /// Parses a document from JSON text, filling absent fields with
    /// their defaults. Used by the file-upload replace path.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Serializes with 2-space indentation, matching the on-disk format.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseInfo {
    pub name: String,
    pub title: String,
    pub contact: Contact,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub location: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub linkedin: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(deserialize_with = "strength_in_range", default = "min_strength")]
    pub strength: u8,
    #[serde(default)]
    pub description: String,
}

/// Strength is always an integer in [1,5]. Anything else found in a
/// stored or uploaded document collapses to 1 rather than round-trip
/// out of range.
fn strength_in_range<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = i64::deserialize(deserializer)?;
    if (MIN_STRENGTH as i64..=MAX_STRENGTH as i64).contains(&raw) {
        Ok(raw as u8)
    } else {
        Ok(MIN_STRENGTH)
    }
}

fn min_strength() -> u8 {
    MIN_STRENGTH
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub dates: String,
    pub description: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub degree: String,
    pub institution: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub name: String,
    pub description: String,
}
