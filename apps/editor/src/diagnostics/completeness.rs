use serde::{Deserialize, Serialize};

use crate::models::{
    Achievement, Certification, Education, Experience, PortfolioDocument, Project, SectionId,
    SocialLink, UserInfo,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum SectionStatus {
    Strong,
    Moderate,
    Weak,
    Missing,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionHealth {
    pub section: SectionId,
    pub score: f64,
    pub entry_count: usize,
    pub incomplete_entries: usize,
    pub status: SectionStatus,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletenessReport {
    pub overall_score: f64,
    pub sections: Vec<SectionHealth>,
    pub total_entries: usize,
    pub missing_sections: Vec<SectionId>,
}

/// (section, weight, entries expected before the section counts as full)
const SECTION_WEIGHTS: &[(SectionId, f64, usize)] = &[
    (SectionId::UserInfo, 0.20, 1),
    (SectionId::WorkExperience, 0.30, 2),
    (SectionId::Education, 0.15, 1),
    (SectionId::Skills, 0.15, 6),
    (SectionId::Projects, 0.10, 2),
    (SectionId::Certifications, 0.04, 1),
    (SectionId::SocialLinks, 0.03, 2),
    (SectionId::Achievements, 0.03, 1),
];

/// Share of an entry's key fields that carry a value.
trait Filled {
    fn fill_ratio(&self) -> f64;
}

fn ratio(checks: &[bool]) -> f64 {
    if checks.is_empty() {
        return 0.0;
    }
    checks.iter().filter(|c| **c).count() as f64 / checks.len() as f64
}

fn present(value: &str) -> bool {
    !value.trim().is_empty()
}

impl Filled for UserInfo {
    fn fill_ratio(&self) -> f64 {
        ratio(&[
            present(&self.name),
            present(&self.title),
            present(&self.email),
            present(&self.phone),
            present(&self.location),
            present(&self.bio),
        ])
    }
}

impl Filled for Experience {
    fn fill_ratio(&self) -> f64 {
        ratio(&[
            present(&self.company),
            present(&self.position),
            present(&self.start_date),
            self.current || present(&self.end_date),
            present(&self.description),
        ])
    }
}

impl Filled for Education {
    fn fill_ratio(&self) -> f64 {
        ratio(&[
            present(&self.institution),
            present(&self.degree),
            present(&self.field),
            present(&self.start_date),
            self.current || present(&self.end_date),
        ])
    }
}

impl Filled for Project {
    fn fill_ratio(&self) -> f64 {
        ratio(&[
            present(&self.name),
            present(&self.description),
            !self.technologies.is_empty(),
        ])
    }
}

impl Filled for Certification {
    fn fill_ratio(&self) -> f64 {
        ratio(&[present(&self.name), present(&self.issuer), present(&self.issue_date)])
    }
}

impl Filled for SocialLink {
    fn fill_ratio(&self) -> f64 {
        ratio(&[present(&self.url), present(&self.username)])
    }
}

impl Filled for Achievement {
    fn fill_ratio(&self) -> f64 {
        ratio(&[present(&self.title), present(&self.description), present(&self.date)])
    }
}

/// Per-entry fill ratios for one section.
fn section_fills(document: &PortfolioDocument, section: SectionId) -> Vec<f64> {
    fn fills<T: Filled>(items: &[T]) -> Vec<f64> {
        items.iter().map(Filled::fill_ratio).collect()
    }

    match section {
        SectionId::UserInfo => {
            let fill = document.user_info.fill_ratio();
            if fill > 0.0 {
                vec![fill]
            } else {
                Vec::new()
            }
        }
        SectionId::WorkExperience => fills(&document.work_experience),
        SectionId::Education => fills(&document.education),
        SectionId::Skills => {
            let skills = &document.skills;
            let names = skills
                .technical
                .iter()
                .map(|s| s.name.as_str())
                .chain(skills.soft.iter().map(String::as_str))
                .chain(skills.languages.iter().map(|l| l.language.as_str()));
            names.map(|name| if present(name) { 1.0 } else { 0.0 }).collect()
        }
        SectionId::Projects => fills(&document.projects),
        SectionId::Certifications => fills(&document.certifications),
        SectionId::SocialLinks => fills(&document.social_links),
        SectionId::Achievements => fills(&document.achievements),
    }
}

pub fn compute_completeness(document: &PortfolioDocument) -> CompletenessReport {
    let mut sections = Vec::new();
    let mut missing_sections = Vec::new();
    let mut weighted_score_sum = 0.0;
    let mut total_entries = 0;

    for &(section, weight, expected) in SECTION_WEIGHTS {
        let fills = section_fills(document, section);
        let entry_count = fills.len();
        total_entries += entry_count;

        if entry_count == 0 {
            missing_sections.push(section);
            sections.push(SectionHealth {
                section,
                score: 0.0,
                entry_count: 0,
                incomplete_entries: 0,
                status: SectionStatus::Missing,
                recommendations: vec![format!(
                    "Add at least one {} entry",
                    section.label().to_lowercase()
                )],
            });
            continue;
        }

        let incomplete_entries = fills.iter().filter(|f| **f < 1.0).count();
        let mean_fill = fills.iter().sum::<f64>() / entry_count as f64;
        let coverage = (entry_count as f64 / expected as f64).min(1.0);
        let score = (mean_fill * coverage).clamp(0.0, 1.0);

        let status = match score {
            s if s >= 0.8 => SectionStatus::Strong,
            s if s >= 0.5 => SectionStatus::Moderate,
            s if s >= 0.2 => SectionStatus::Weak,
            _ => SectionStatus::Missing,
        };

        let mut recommendations = Vec::new();
        if incomplete_entries > 0 {
            recommendations.push(format!(
                "{} {} entries have empty key fields",
                incomplete_entries,
                section.label()
            ));
        }
        if entry_count < expected {
            recommendations.push(format!(
                "Add {} more {} entries for a complete picture",
                expected - entry_count,
                section.label().to_lowercase()
            ));
        }

        weighted_score_sum += score * weight;
        sections.push(SectionHealth {
            section,
            score,
            entry_count,
            incomplete_entries,
            status,
            recommendations,
        });
    }

    let total_weight: f64 = SECTION_WEIGHTS.iter().map(|(_, w, _)| w).sum();
    let overall_score = if total_weight > 0.0 {
        (weighted_score_sum / total_weight).clamp(0.0, 1.0)
    } else {
        0.0
    };

    CompletenessReport {
        overall_score,
        sections,
        total_entries,
        missing_sections,
    }
}
