use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::models::lenient;
use crate::models::sections::{
    Achievement, Certification, Education, Experience, Project, SectionItem, SocialLink, UserInfo,
};
use crate::models::skills::Skills;

/// Identifier of one independently editable part of a portfolio document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionId {
    UserInfo,
    WorkExperience,
    Education,
    Skills,
    Projects,
    Certifications,
    SocialLinks,
    Achievements,
}

impl SectionId {
    pub const ALL: [SectionId; 8] = [
        SectionId::UserInfo,
        SectionId::WorkExperience,
        SectionId::Education,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Certifications,
        SectionId::SocialLinks,
        SectionId::Achievements,
    ];

    /// Key under which the section is stored in the owning document.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::UserInfo => "userInfo",
            SectionId::WorkExperience => "workExperience",
            SectionId::Education => "education",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Certifications => "certifications",
            SectionId::SocialLinks => "socialLinks",
            SectionId::Achievements => "achievements",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SectionId::UserInfo => "Personal Info",
            SectionId::WorkExperience => "Work Experience",
            SectionId::Education => "Education",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Certifications => "Certifications",
            SectionId::SocialLinks => "Social Links",
            SectionId::Achievements => "Achievements",
        }
    }

    /// Exact match on the stored key. Anything else is an unrecognized section.
    pub fn parse(raw: &str) -> Option<Self> {
        SectionId::ALL.into_iter().find(|id| id.as_str() == raw)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The value of one section, shaped by its identifier.
#[derive(Debug, Clone, PartialEq)]
pub enum PortfolioSection {
    UserInfo(UserInfo),
    WorkExperience(Vec<Experience>),
    Education(Vec<Education>),
    Skills(Skills),
    Projects(Vec<Project>),
    Certifications(Vec<Certification>),
    SocialLinks(Vec<SocialLink>),
    Achievements(Vec<Achievement>),
}

impl PortfolioSection {
    pub fn id(&self) -> SectionId {
        match self {
            PortfolioSection::UserInfo(_) => SectionId::UserInfo,
            PortfolioSection::WorkExperience(_) => SectionId::WorkExperience,
            PortfolioSection::Education(_) => SectionId::Education,
            PortfolioSection::Skills(_) => SectionId::Skills,
            PortfolioSection::Projects(_) => SectionId::Projects,
            PortfolioSection::Certifications(_) => SectionId::Certifications,
            PortfolioSection::SocialLinks(_) => SectionId::SocialLinks,
            PortfolioSection::Achievements(_) => SectionId::Achievements,
        }
    }

    /// Decodes a stored section value. Absent values yield the empty section
    /// and partial records are default-filled. Mistyped fields fall back to
    /// their defaults one by one; an unreadable list element becomes a default
    /// item in place. Only a value of the wrong overall shape is replaced by
    /// the empty section.
    pub fn decode(id: SectionId, value: Option<&Value>) -> Self {
        match id {
            SectionId::UserInfo => PortfolioSection::UserInfo(decode_record(id, value)),
            SectionId::WorkExperience => PortfolioSection::WorkExperience(decode_list(id, value)),
            SectionId::Education => PortfolioSection::Education(decode_list(id, value)),
            SectionId::Skills => PortfolioSection::Skills(decode_record(id, value)),
            SectionId::Projects => PortfolioSection::Projects(decode_list(id, value)),
            SectionId::Certifications => PortfolioSection::Certifications(decode_list(id, value)),
            SectionId::SocialLinks => PortfolioSection::SocialLinks(decode_list(id, value)),
            SectionId::Achievements => PortfolioSection::Achievements(decode_list(id, value)),
        }
    }

    pub fn to_value(&self) -> serde_json::Result<Value> {
        match self {
            PortfolioSection::UserInfo(info) => serde_json::to_value(info),
            PortfolioSection::WorkExperience(list) => serde_json::to_value(list),
            PortfolioSection::Education(list) => serde_json::to_value(list),
            PortfolioSection::Skills(skills) => serde_json::to_value(skills),
            PortfolioSection::Projects(list) => serde_json::to_value(list),
            PortfolioSection::Certifications(list) => serde_json::to_value(list),
            PortfolioSection::SocialLinks(list) => serde_json::to_value(list),
            PortfolioSection::Achievements(list) => serde_json::to_value(list),
        }
    }
}

fn decode_record<T: DeserializeOwned + Default>(id: SectionId, value: Option<&Value>) -> T {
    match value {
        None | Some(Value::Null) => T::default(),
        Some(value) => T::deserialize(value).unwrap_or_else(|e| {
            warn!("Section '{id}' has an unexpected shape, using empty value: {e}");
            T::default()
        }),
    }
}

fn decode_list<T: SectionItem>(id: SectionId, value: Option<&Value>) -> Vec<T> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(elements)) => lenient::list(elements, id.as_str()),
        Some(_) => {
            warn!("Section '{id}' is not a list, using empty value");
            Vec::new()
        }
    }
}

/// Typed view of a whole portfolio document, as held by the owner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PortfolioDocument {
    pub user_info: UserInfo,
    pub work_experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Skills,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub social_links: Vec<SocialLink>,
    pub achievements: Vec<Achievement>,
}

impl PortfolioDocument {
    /// Builds the typed view section by section, so one malformed section
    /// does not discard the others.
    pub fn decode(value: &Value) -> Self {
        let empty = Map::new();
        let root = value.as_object().unwrap_or(&empty);
        let mut document = PortfolioDocument::default();
        for id in SectionId::ALL {
            document.store(PortfolioSection::decode(id, root.get(id.as_str())));
        }
        document
    }

    pub fn section(&self, id: SectionId) -> PortfolioSection {
        match id {
            SectionId::UserInfo => PortfolioSection::UserInfo(self.user_info.clone()),
            SectionId::WorkExperience => {
                PortfolioSection::WorkExperience(self.work_experience.clone())
            }
            SectionId::Education => PortfolioSection::Education(self.education.clone()),
            SectionId::Skills => PortfolioSection::Skills(self.skills.clone()),
            SectionId::Projects => PortfolioSection::Projects(self.projects.clone()),
            SectionId::Certifications => {
                PortfolioSection::Certifications(self.certifications.clone())
            }
            SectionId::SocialLinks => PortfolioSection::SocialLinks(self.social_links.clone()),
            SectionId::Achievements => PortfolioSection::Achievements(self.achievements.clone()),
        }
    }

    pub fn store(&mut self, section: PortfolioSection) {
        match section {
            PortfolioSection::UserInfo(info) => self.user_info = info,
            PortfolioSection::WorkExperience(list) => self.work_experience = list,
            PortfolioSection::Education(list) => self.education = list,
            PortfolioSection::Skills(skills) => self.skills = skills,
            PortfolioSection::Projects(list) => self.projects = list,
            PortfolioSection::Certifications(list) => self.certifications = list,
            PortfolioSection::SocialLinks(list) => self.social_links = list,
            PortfolioSection::Achievements(list) => self.achievements = list,
        }
    }
}
