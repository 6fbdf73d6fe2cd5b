//! Field-level edits for each record type.
//!
//! Every field enum serializes externally tagged by its stored camelCase key,
//! e.g. `{"startDate": "2022-01"}` or `{"current": true}`.

use serde::{Deserialize, Serialize};

use crate::models::{
    Achievement, Certification, Education, Experience, Project, SocialLink, SocialPlatform,
    UserInfo,
};

/// A single-field change applied to a record, producing a new record.
pub trait FieldEdit {
    type Target: Clone;

    fn apply_to(self, target: &Self::Target) -> Self::Target;
}

/// Splits the comma-separated technologies input into trimmed, non-empty names.
pub fn parse_technologies(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Inverse of [`parse_technologies`] for the controlled input.
pub fn technologies_input(technologies: &[String]) -> String {
    technologies.join(", ")
}

// ────────────────────────────────────────────────────────────────────────────
// Field enums
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UserInfoField {
    Name(String),
    Title(String),
    Email(String),
    Phone(String),
    Location(String),
    Bio(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExperienceField {
    Company(String),
    Position(String),
    StartDate(String),
    EndDate(String),
    Current(bool),
    Location(String),
    Description(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EducationField {
    Institution(String),
    Degree(String),
    Field(String),
    StartDate(String),
    EndDate(String),
    Current(bool),
    Gpa(String),
    GpaScale(String),
    Description(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProjectField {
    Name(String),
    Description(String),
    /// Raw comma-separated input.
    Technologies(String),
    Link(String),
    StartDate(String),
    EndDate(String),
    Current(bool),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CertificationField {
    Name(String),
    Issuer(String),
    IssueDate(String),
    ExpiryDate(String),
    CredentialId(String),
    Link(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SocialLinkField {
    Platform(SocialPlatform),
    CustomPlatform(String),
    Username(String),
    Url(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AchievementField {
    Title(String),
    Issuer(String),
    Date(String),
    Description(String),
}

// ────────────────────────────────────────────────────────────────────────────
// Application
// ────────────────────────────────────────────────────────────────────────────

/// `current = true` clears `end_date` in the same update; an `end_date` edit
/// while `current` is set is dropped.
fn set_current(current: &mut bool, end_date: &mut String, value: bool) {
    *current = value;
    if value {
        end_date.clear();
    }
}

fn set_end_date(current: bool, end_date: &mut String, value: String) {
    if !current {
        *end_date = value;
    }
}

impl FieldEdit for UserInfoField {
    type Target = UserInfo;

    fn apply_to(self, target: &UserInfo) -> UserInfo {
        let mut next = target.clone();
        match self {
            UserInfoField::Name(v) => next.name = v,
            UserInfoField::Title(v) => next.title = v,
            UserInfoField::Email(v) => next.email = v,
            UserInfoField::Phone(v) => next.phone = v,
            UserInfoField::Location(v) => next.location = v,
            UserInfoField::Bio(v) => next.bio = v,
        }
        next
    }
}

impl FieldEdit for ExperienceField {
    type Target = Experience;

    fn apply_to(self, target: &Experience) -> Experience {
        let mut next = target.clone();
        match self {
            ExperienceField::Company(v) => next.company = v,
            ExperienceField::Position(v) => next.position = v,
            ExperienceField::StartDate(v) => next.start_date = v,
            ExperienceField::EndDate(v) => set_end_date(next.current, &mut next.end_date, v),
            ExperienceField::Current(v) => set_current(&mut next.current, &mut next.end_date, v),
            ExperienceField::Location(v) => next.location = v,
            ExperienceField::Description(v) => next.description = v,
        }
        next
    }
}

impl FieldEdit for EducationField {
    type Target = Education;

    fn apply_to(self, target: &Education) -> Education {
        let mut next = target.clone();
        match self {
            EducationField::Institution(v) => next.institution = v,
            EducationField::Degree(v) => next.degree = v,
            EducationField::Field(v) => next.field = v,
            EducationField::StartDate(v) => next.start_date = v,
            EducationField::EndDate(v) => set_end_date(next.current, &mut next.end_date, v),
            EducationField::Current(v) => set_current(&mut next.current, &mut next.end_date, v),
            EducationField::Gpa(v) => next.gpa = v,
            EducationField::GpaScale(v) => next.gpa_scale = v,
            EducationField::Description(v) => next.description = v,
        }
        next
    }
}

impl FieldEdit for ProjectField {
    type Target = Project;

    fn apply_to(self, target: &Project) -> Project {
        let mut next = target.clone();
        match self {
            ProjectField::Name(v) => next.name = v,
            ProjectField::Description(v) => next.description = v,
            ProjectField::Technologies(v) => next.technologies = parse_technologies(&v),
            ProjectField::Link(v) => next.link = v,
            ProjectField::StartDate(v) => next.start_date = v,
            ProjectField::EndDate(v) => set_end_date(next.current, &mut next.end_date, v),
            ProjectField::Current(v) => set_current(&mut next.current, &mut next.end_date, v),
        }
        next
    }
}

impl FieldEdit for CertificationField {
    type Target = Certification;

    fn apply_to(self, target: &Certification) -> Certification {
        let mut next = target.clone();
        match self {
            CertificationField::Name(v) => next.name = v,
            CertificationField::Issuer(v) => next.issuer = v,
            CertificationField::IssueDate(v) => next.issue_date = v,
            CertificationField::ExpiryDate(v) => next.expiry_date = v,
            CertificationField::CredentialId(v) => next.credential_id = v,
            CertificationField::Link(v) => next.link = v,
        }
        next
    }
}

impl FieldEdit for SocialLinkField {
    type Target = SocialLink;

    fn apply_to(self, target: &SocialLink) -> SocialLink {
        let mut next = target.clone();
        match self {
            SocialLinkField::Platform(platform) => {
                next.platform = platform;
                if platform == SocialPlatform::Other {
                    next.custom_platform.get_or_insert_with(String::new);
                } else {
                    next.custom_platform = None;
                }
            }
            SocialLinkField::CustomPlatform(v) => {
                if next.platform == SocialPlatform::Other {
                    next.custom_platform = Some(v);
                }
            }
            SocialLinkField::Username(v) => next.username = v,
            SocialLinkField::Url(v) => next.url = v,
        }
        next
    }
}

impl FieldEdit for AchievementField {
    type Target = Achievement;

    fn apply_to(self, target: &Achievement) -> Achievement {
        let mut next = target.clone();
        match self {
            AchievementField::Title(v) => next.title = v,
            AchievementField::Issuer(v) => next.issuer = v,
            AchievementField::Date(v) => next.date = v,
            AchievementField::Description(v) => next.description = v,
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn make_experience(end_date: &str, current: bool) -> Experience {
        Experience {
            company: "Acme".to_string(),
            position: "Engineer".to_string(),
            start_date: "2020-01".to_string(),
            end_date: end_date.to_string(),
            current,
            ..Default::default()
        }
    }

    #[test]
    fn test_current_on_clears_end_date() {
        let next = ExperienceField::Current(true).apply_to(&make_experience("2022-12", false));
        assert!(next.current);
        assert_eq!(next.end_date, "");
    }

    #[test]
    fn test_current_off_leaves_end_date_alone() {
        let exp = make_experience("", true);
        let next = ExperienceField::Current(false).apply_to(&exp);
        assert!(!next.current);
        assert_eq!(next.end_date, "");

        let next = ExperienceField::EndDate("2023-05".to_string()).apply_to(&next);
        assert_eq!(next.end_date, "2023-05");
    }

    #[test]
    fn test_end_date_ignored_while_current() {
        let next = ExperienceField::EndDate("2023-05".to_string())
            .apply_to(&make_experience("", true));
        assert!(next.current);
        assert_eq!(next.end_date, "");
    }

    #[test]
    fn test_education_and_project_share_current_rule() {
        let edu = Education {
            end_date: "2019-06".to_string(),
            ..Default::default()
        };
        assert_eq!(EducationField::Current(true).apply_to(&edu).end_date, "");

        let project = Project {
            end_date: "2019-06".to_string(),
            ..Default::default()
        };
        assert_eq!(ProjectField::Current(true).apply_to(&project).end_date, "");
    }

    #[test]
    fn test_field_edit_does_not_touch_input() {
        let exp = make_experience("2022-12", false);
        let _ = ExperienceField::Company("Globex".to_string()).apply_to(&exp);
        assert_eq!(exp.company, "Acme");
    }

    #[test]
    fn test_parse_technologies_trims_and_drops_empty() {
        assert_eq!(
            parse_technologies(" Rust, Tokio ,, axum ,"),
            vec!["Rust".to_string(), "Tokio".to_string(), "axum".to_string()]
        );
        assert!(parse_technologies("").is_empty());
        assert!(parse_technologies(" , ").is_empty());
    }

    #[test]
    fn test_technologies_input_round_trip() {
        let techs = parse_technologies("Rust,Postgres");
        assert_eq!(technologies_input(&techs), "Rust, Postgres");
        assert_eq!(parse_technologies(&technologies_input(&techs)), techs);
    }

    #[test]
    fn test_project_technologies_field_parses_input() {
        let next = ProjectField::Technologies("Rust, WASM".to_string()).apply_to(&Project::default());
        assert_eq!(next.technologies, vec!["Rust".to_string(), "WASM".to_string()]);
    }

    #[test]
    fn test_platform_other_seeds_custom_platform() {
        let next = SocialLinkField::Platform(SocialPlatform::Other).apply_to(&SocialLink::default());
        assert_eq!(next.custom_platform, Some(String::new()));

        let next = SocialLinkField::CustomPlatform("Mastodon".to_string()).apply_to(&next);
        assert_eq!(next.custom_platform.as_deref(), Some("Mastodon"));

        let next = SocialLinkField::Platform(SocialPlatform::GitHub).apply_to(&next);
        assert_eq!(next.custom_platform, None);
    }

    #[test]
    fn test_custom_platform_ignored_for_named_platform() {
        let next = SocialLinkField::CustomPlatform("Mastodon".to_string())
            .apply_to(&SocialLink::default());
        assert_eq!(next.custom_platform, None);
    }

    #[test]
    fn test_field_enums_use_stored_keys() {
        let field: ExperienceField = serde_json::from_value(json!({"startDate": "2021-02"})).unwrap();
        assert_eq!(field, ExperienceField::StartDate("2021-02".to_string()));

        let field: EducationField = serde_json::from_value(json!({"gpaScale": "4.0"})).unwrap();
        assert_eq!(field, EducationField::GpaScale("4.0".to_string()));

        let field: SocialLinkField = serde_json::from_value(json!({"platform": "github"})).unwrap();
        assert_eq!(field, SocialLinkField::Platform(SocialPlatform::GitHub));
    }

    #[test]
    fn test_user_info_and_achievement_fields() {
        let info = UserInfoField::Bio("Builder".to_string()).apply_to(&UserInfo::default());
        assert_eq!(info.bio, "Builder");

        let cert = CertificationField::CredentialId("ABC-123".to_string())
            .apply_to(&Certification::default());
        assert_eq!(cert.credential_id, "ABC-123");

        let achievement = AchievementField::Date("2024-03".to_string())
            .apply_to(&Achievement::default());
        assert_eq!(achievement.date, "2024-03");
    }
}
