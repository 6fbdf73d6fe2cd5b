use serde::{Deserialize, Deserializer, Serialize};

use crate::models::lenient;

/// Skill and language level. One enum covers both vocabularies; each subtype
/// only offers its own scale in the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Proficiency {
    Beginner,
    Basic,
    #[default]
    Intermediate,
    Advanced,
    Expert,
    Native,
    Fluent,
}

const TECHNICAL_SCALE: &[Proficiency] = &[
    Proficiency::Beginner,
    Proficiency::Intermediate,
    Proficiency::Advanced,
    Proficiency::Expert,
];

const LANGUAGE_SCALE: &[Proficiency] = &[
    Proficiency::Basic,
    Proficiency::Intermediate,
    Proficiency::Advanced,
    Proficiency::Native,
    Proficiency::Fluent,
];

impl Proficiency {
    /// Levels offered for technical skills and tools.
    pub fn technical_scale() -> &'static [Proficiency] {
        TECHNICAL_SCALE
    }

    /// Levels offered for spoken languages.
    pub fn language_scale() -> &'static [Proficiency] {
        LANGUAGE_SCALE
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Proficiency::Beginner => "beginner",
            Proficiency::Basic => "basic",
            Proficiency::Intermediate => "intermediate",
            Proficiency::Advanced => "advanced",
            Proficiency::Expert => "expert",
            Proficiency::Native => "native",
            Proficiency::Fluent => "fluent",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Proficiency::Beginner => "Beginner",
            Proficiency::Basic => "Basic",
            Proficiency::Intermediate => "Intermediate",
            Proficiency::Advanced => "Advanced",
            Proficiency::Expert => "Expert",
            Proficiency::Native => "Native",
            Proficiency::Fluent => "Fluent",
        }
    }

    /// Strict, case-insensitive parse. Returns `None` for anything outside
    /// the known vocabulary.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "beginner" => Some(Proficiency::Beginner),
            "basic" => Some(Proficiency::Basic),
            "intermediate" => Some(Proficiency::Intermediate),
            "advanced" => Some(Proficiency::Advanced),
            "expert" => Some(Proficiency::Expert),
            "native" => Some(Proficiency::Native),
            "fluent" => Some(Proficiency::Fluent),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for Proficiency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        lenient::vocabulary(deserializer, Proficiency::parse)
    }
}

/// Sub-kind of a technical skill entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TechnicalKind {
    #[default]
    Technical,
    Tool,
}

impl TechnicalKind {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "technical" => Some(TechnicalKind::Technical),
            "tool" => Some(TechnicalKind::Tool),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for TechnicalKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        lenient::vocabulary(deserializer, TechnicalKind::parse)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillEntry {
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    pub level: Proficiency,
    pub category: TechnicalKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageEntry {
    #[serde(deserialize_with = "lenient::string")]
    pub language: String,
    pub proficiency: Proficiency,
}

/// Storage shape of the skills section. Soft skills are bare strings and
/// carry no level.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Skills {
    #[serde(deserialize_with = "lenient::items")]
    pub technical: Vec<SkillEntry>,
    #[serde(deserialize_with = "lenient::strings")]
    pub soft: Vec<String>,
    #[serde(deserialize_with = "lenient::items")]
    pub languages: Vec<LanguageEntry>,
}
