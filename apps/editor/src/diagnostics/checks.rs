use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::editor::skills::SkillsNormalizer;
use crate::models::{DateRange, PortfolioDocument, SectionId, SocialPlatform};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    EndBeforeStart,
    UnparseableDate,
    ExpiryBeforeIssue,
    DuplicateSkill,
    MissingCustomPlatform,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningSeverity {
    Advisory,
    Warning,
}

/// Non-blocking finding about a document. The editor never produces these;
/// owners run the checks when they choose to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentWarning {
    pub kind: WarningKind,
    pub section: SectionId,
    pub index: Option<usize>,
    pub description: String,
    pub severity: WarningSeverity,
}

/// Parses `YYYY-MM-DD` or month precision `YYYY-MM` (pinned to the 1st).
/// Empty input yields `None`.
pub fn parse_month(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d"))
        .ok()
}

pub fn check_document(document: &PortfolioDocument) -> Vec<DocumentWarning> {
    let mut warnings = Vec::new();

    check_ranges(SectionId::WorkExperience, &document.work_experience, &mut warnings);
    check_ranges(SectionId::Education, &document.education, &mut warnings);
    check_ranges(SectionId::Projects, &document.projects, &mut warnings);

    for (index, cert) in document.certifications.iter().enumerate() {
        let issued = checked_date(SectionId::Certifications, index, &cert.issue_date, &mut warnings);
        let expires =
            checked_date(SectionId::Certifications, index, &cert.expiry_date, &mut warnings);
        if let (Some(issued), Some(expires)) = (issued, expires) {
            if expires < issued {
                warnings.push(DocumentWarning {
                    kind: WarningKind::ExpiryBeforeIssue,
                    section: SectionId::Certifications,
                    index: Some(index),
                    description: format!(
                        "'{}' expires ({expires}) before it was issued ({issued})",
                        cert.name
                    ),
                    severity: WarningSeverity::Warning,
                });
            }
        }
    }

    for (index, achievement) in document.achievements.iter().enumerate() {
        checked_date(SectionId::Achievements, index, &achievement.date, &mut warnings);
    }

    check_duplicate_skills(document, &mut warnings);

    for (index, link) in document.social_links.iter().enumerate() {
        let custom = link.custom_platform.as_deref().unwrap_or("").trim();
        if link.platform == SocialPlatform::Other && custom.is_empty() {
            warnings.push(DocumentWarning {
                kind: WarningKind::MissingCustomPlatform,
                section: SectionId::SocialLinks,
                index: Some(index),
                description: "Platform is 'other' but no platform name is given".to_string(),
                severity: WarningSeverity::Advisory,
            });
        }
    }

    warnings
}

fn check_ranges<T: DateRange>(section: SectionId, items: &[T], warnings: &mut Vec<DocumentWarning>) {
    for (index, item) in items.iter().enumerate() {
        let start = checked_date(section, index, item.start_date(), warnings);
        let end = checked_date(section, index, item.end_date(), warnings);
        if item.is_current() {
            continue;
        }
        if let (Some(start), Some(end)) = (start, end) {
            if end < start {
                warnings.push(DocumentWarning {
                    kind: WarningKind::EndBeforeStart,
                    section,
                    index: Some(index),
                    description: format!("End date {end} precedes start date {start}"),
                    severity: WarningSeverity::Warning,
                });
            }
        }
    }
}

/// Parses a date, recording an advisory when a non-empty value is unreadable.
fn checked_date(
    section: SectionId,
    index: usize,
    raw: &str,
    warnings: &mut Vec<DocumentWarning>,
) -> Option<NaiveDate> {
    let parsed = parse_month(raw);
    if parsed.is_none() && !raw.trim().is_empty() {
        warnings.push(DocumentWarning {
            kind: WarningKind::UnparseableDate,
            section,
            index: Some(index),
            description: format!("'{raw}' is not a YYYY-MM or YYYY-MM-DD date"),
            severity: WarningSeverity::Advisory,
        });
    }
    parsed
}

/// Case-insensitive duplicate names across all skill categories. Indices refer
/// to the flattened skill list.
fn check_duplicate_skills(document: &PortfolioDocument, warnings: &mut Vec<DocumentWarning>) {
    let views = SkillsNormalizer::default().flatten(&document.skills);
    let mut first_seen: HashMap<String, usize> = HashMap::new();
    for (index, view) in views.iter().enumerate() {
        let key = view.name.trim().to_lowercase();
        if key.is_empty() {
            continue;
        }
        match first_seen.get(&key) {
            Some(&first) => warnings.push(DocumentWarning {
                kind: WarningKind::DuplicateSkill,
                section: SectionId::Skills,
                index: Some(index),
                description: format!(
                    "'{}' is listed more than once (first at position {})",
                    view.name.trim(),
                    first + 1
                ),
                severity: WarningSeverity::Advisory,
            }),
            None => {
                first_seen.insert(key, index);
            }
        }
    }
}
