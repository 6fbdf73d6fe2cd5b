use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::lenient;

// ────────────────────────────────────────────────────────────────────────────
// Record traits
// ────────────────────────────────────────────────────────────────────────────

/// A record stored in one of the list-shaped sections.
///
/// `Default` is the section's "new item" factory: every leaf is an empty
/// string, `false`, or an empty vector.
pub trait SectionItem: Clone + Default + PartialEq + Serialize + DeserializeOwned {
    /// Re-establishes the record's own field pairing rules after a wholesale
    /// replacement.
    fn settled(self) -> Self {
        self
    }
}

/// Records with a start/end date pair and a `current` flag.
pub trait DateRange {
    fn start_date(&self) -> &str;
    fn end_date(&self) -> &str;
    fn is_current(&self) -> bool;
}

macro_rules! date_range {
    ($ty:ty) => {
        impl DateRange for $ty {
            fn start_date(&self) -> &str {
                &self.start_date
            }

            fn end_date(&self) -> &str {
                &self.end_date
            }

            fn is_current(&self) -> bool {
                self.current
            }
        }

        impl SectionItem for $ty {
            fn settled(mut self) -> Self {
                if self.current {
                    self.end_date.clear();
                }
                self
            }
        }
    };
}

// ────────────────────────────────────────────────────────────────────────────
// Records
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserInfo {
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(deserialize_with = "lenient::string")]
    pub email: String,
    #[serde(deserialize_with = "lenient::string")]
    pub phone: String,
    #[serde(deserialize_with = "lenient::string")]
    pub location: String,
    #[serde(deserialize_with = "lenient::string")]
    pub bio: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Experience {
    #[serde(deserialize_with = "lenient::string")]
    pub company: String,
    #[serde(deserialize_with = "lenient::string")]
    pub position: String,
    #[serde(deserialize_with = "lenient::string")]
    pub start_date: String,
    #[serde(deserialize_with = "lenient::string")]
    pub end_date: String,
    #[serde(deserialize_with = "lenient::flag")]
    pub current: bool,
    #[serde(deserialize_with = "lenient::string")]
    pub location: String,
    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Education {
    #[serde(deserialize_with = "lenient::string")]
    pub institution: String,
    #[serde(deserialize_with = "lenient::string")]
    pub degree: String,
    #[serde(deserialize_with = "lenient::string")]
    pub field: String,
    #[serde(deserialize_with = "lenient::string")]
    pub start_date: String,
    #[serde(deserialize_with = "lenient::string")]
    pub end_date: String,
    #[serde(deserialize_with = "lenient::flag")]
    pub current: bool,
    #[serde(deserialize_with = "lenient::string")]
    pub gpa: String,
    #[serde(deserialize_with = "lenient::string")]
    pub gpa_scale: String,
    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(deserialize_with = "lenient::strings")]
    pub technologies: Vec<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub link: String,
    #[serde(deserialize_with = "lenient::string")]
    pub start_date: String,
    #[serde(deserialize_with = "lenient::string")]
    pub end_date: String,
    #[serde(deserialize_with = "lenient::flag")]
    pub current: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Certification {
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub issuer: String,
    #[serde(deserialize_with = "lenient::string")]
    pub issue_date: String,
    #[serde(deserialize_with = "lenient::string")]
    pub expiry_date: String,
    #[serde(deserialize_with = "lenient::string")]
    pub credential_id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub link: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    #[default]
    LinkedIn,
    GitHub,
    Twitter,
    Website,
    Portfolio,
    Medium,
    StackOverflow,
    Dribbble,
    Behance,
    YouTube,
    Other,
}

impl SocialPlatform {
    pub const ALL: [SocialPlatform; 11] = [
        SocialPlatform::LinkedIn,
        SocialPlatform::GitHub,
        SocialPlatform::Twitter,
        SocialPlatform::Website,
        SocialPlatform::Portfolio,
        SocialPlatform::Medium,
        SocialPlatform::StackOverflow,
        SocialPlatform::Dribbble,
        SocialPlatform::Behance,
        SocialPlatform::YouTube,
        SocialPlatform::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SocialPlatform::LinkedIn => "linkedin",
            SocialPlatform::GitHub => "github",
            SocialPlatform::Twitter => "twitter",
            SocialPlatform::Website => "website",
            SocialPlatform::Portfolio => "portfolio",
            SocialPlatform::Medium => "medium",
            SocialPlatform::StackOverflow => "stackoverflow",
            SocialPlatform::Dribbble => "dribbble",
            SocialPlatform::Behance => "behance",
            SocialPlatform::YouTube => "youtube",
            SocialPlatform::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SocialPlatform::LinkedIn => "LinkedIn",
            SocialPlatform::GitHub => "GitHub",
            SocialPlatform::Twitter => "Twitter / X",
            SocialPlatform::Website => "Website",
            SocialPlatform::Portfolio => "Portfolio",
            SocialPlatform::Medium => "Medium",
            SocialPlatform::StackOverflow => "Stack Overflow",
            SocialPlatform::Dribbble => "Dribbble",
            SocialPlatform::Behance => "Behance",
            SocialPlatform::YouTube => "YouTube",
            SocialPlatform::Other => "Other",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim().to_ascii_lowercase();
        SocialPlatform::ALL.into_iter().find(|p| p.as_str() == raw)
    }

    fn parse_or_other(raw: &str) -> Option<Self> {
        Some(SocialPlatform::parse(raw).unwrap_or(SocialPlatform::Other))
    }
}

impl<'de> Deserialize<'de> for SocialPlatform {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        lenient::vocabulary(deserializer, SocialPlatform::parse_or_other)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SocialLink {
    pub platform: SocialPlatform,
    /// Only present while `platform` is `other`.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(deserialize_with = "lenient::optional_string")]
    pub custom_platform: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub username: String,
    #[serde(deserialize_with = "lenient::string")]
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Achievement {
    #[serde(deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(deserialize_with = "lenient::string")]
    pub issuer: String,
    #[serde(deserialize_with = "lenient::string")]
    pub date: String,
    #[serde(deserialize_with = "lenient::string")]
    pub description: String,
}

date_range!(Experience);
date_range!(Education);
date_range!(Project);

impl SectionItem for Certification {}

impl SectionItem for Achievement {}

impl SectionItem for SocialLink {
    fn settled(mut self) -> Self {
        if self.platform == SocialPlatform::Other {
            self.custom_platform.get_or_insert_with(String::new);
        } else {
            self.custom_platform = None;
        }
        self
    }
}
