//! Headless section forms: the controls each section exposes, with every
//! value defined. Hosts decide how to draw them.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::editor::fields::{parse_technologies, technologies_input};
use crate::editor::skills::{SkillCategory, SkillsNormalizer};
use crate::models::{
    Achievement, Certification, Education, Experience, PortfolioSection, Proficiency, Project,
    SectionId, Skills, SocialLink, SocialPlatform, UserInfo,
};

// ────────────────────────────────────────────────────────────────────────────
// Form model
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// One bound input. `key` is the stored field name the matching field edit
/// writes to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Control {
    Text {
        key: &'static str,
        label: &'static str,
        value: String,
    },
    TextArea {
        key: &'static str,
        label: &'static str,
        value: String,
    },
    Date {
        key: &'static str,
        label: &'static str,
        value: String,
        disabled: bool,
    },
    Checkbox {
        key: &'static str,
        label: &'static str,
        checked: bool,
    },
    Select {
        key: &'static str,
        label: &'static str,
        value: String,
        options: Vec<SelectOption>,
    },
}

impl Control {
    pub fn key(&self) -> &'static str {
        match self {
            Control::Text { key, .. }
            | Control::TextArea { key, .. }
            | Control::Date { key, .. }
            | Control::Checkbox { key, .. }
            | Control::Select { key, .. } => *key,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemForm {
    pub index: usize,
    pub heading: String,
    pub controls: Vec<Control>,
    pub can_move_up: bool,
    pub can_move_down: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRow {
    pub index: usize,
    pub name: String,
    pub level: Proficiency,
    pub category: SkillCategory,
    pub level_options: Vec<SelectOption>,
    pub can_move_up: bool,
    pub can_move_down: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "form", rename_all = "camelCase")]
pub enum SectionForm {
    UserInfo {
        controls: Vec<Control>,
    },
    #[serde(rename_all = "camelCase")]
    List {
        section: SectionId,
        items: Vec<ItemForm>,
        add_label: &'static str,
    },
    Skills {
        rows: Vec<SkillRow>,
        categories: Vec<SelectOption>,
    },
    /// Rendered for an unrecognized section identifier.
    Placeholder {
        section: String,
    },
}

// ────────────────────────────────────────────────────────────────────────────
// Per-record controls
// ────────────────────────────────────────────────────────────────────────────

/// A list record that knows how to lay itself out as form controls.
pub trait ItemControls {
    fn heading(&self, index: usize) -> String;
    fn controls(&self) -> Vec<Control>;
}

fn text(key: &'static str, label: &'static str, value: &str) -> Control {
    Control::Text {
        key,
        label,
        value: value.to_string(),
    }
}

fn text_area(key: &'static str, label: &'static str, value: &str) -> Control {
    Control::TextArea {
        key,
        label,
        value: value.to_string(),
    }
}

fn date(key: &'static str, label: &'static str, value: &str, disabled: bool) -> Control {
    Control::Date {
        key,
        label,
        value: value.to_string(),
        disabled,
    }
}

fn checkbox(key: &'static str, label: &'static str, checked: bool) -> Control {
    Control::Checkbox {
        key,
        label,
        checked,
    }
}

fn heading_or(primary: &str, fallback: &str, index: usize) -> String {
    if primary.trim().is_empty() {
        format!("{fallback} {}", index + 1)
    } else {
        primary.trim().to_string()
    }
}

fn level_options(levels: &[Proficiency]) -> Vec<SelectOption> {
    levels
        .iter()
        .map(|level| SelectOption {
            value: level.as_str().to_string(),
            label: level.label().to_string(),
        })
        .collect()
}

fn user_info_controls(info: &UserInfo) -> Vec<Control> {
    vec![
        text("name", "Full Name", &info.name),
        text("title", "Professional Title", &info.title),
        text("email", "Email", &info.email),
        text("phone", "Phone", &info.phone),
        text("location", "Location", &info.location),
        text_area("bio", "Bio", &info.bio),
    ]
}

impl ItemControls for Experience {
    fn heading(&self, index: usize) -> String {
        heading_or(&self.position, "Experience", index)
    }

    fn controls(&self) -> Vec<Control> {
        vec![
            text("company", "Company", &self.company),
            text("position", "Position", &self.position),
            date("startDate", "Start Date", &self.start_date, false),
            date("endDate", "End Date", &self.end_date, self.current),
            checkbox("current", "I currently work here", self.current),
            text("location", "Location", &self.location),
            text_area("description", "Description", &self.description),
        ]
    }
}

impl ItemControls for Education {
    fn heading(&self, index: usize) -> String {
        heading_or(&self.institution, "Education", index)
    }

    fn controls(&self) -> Vec<Control> {
        vec![
            text("institution", "Institution", &self.institution),
            text("degree", "Degree", &self.degree),
            text("field", "Field of Study", &self.field),
            date("startDate", "Start Date", &self.start_date, false),
            date("endDate", "End Date", &self.end_date, self.current),
            checkbox("current", "I currently study here", self.current),
            text("gpa", "GPA", &self.gpa),
            text("gpaScale", "GPA Scale", &self.gpa_scale),
            text_area("description", "Description", &self.description),
        ]
    }
}

impl ItemControls for Project {
    fn heading(&self, index: usize) -> String {
        heading_or(&self.name, "Project", index)
    }

    fn controls(&self) -> Vec<Control> {
        vec![
            text("name", "Project Name", &self.name),
            text_area("description", "Description", &self.description),
            text(
                "technologies",
                "Technologies (comma-separated)",
                &technologies_input(&self.technologies),
            ),
            text("link", "Link", &self.link),
            date("startDate", "Start Date", &self.start_date, false),
            date("endDate", "End Date", &self.end_date, self.current),
            checkbox("current", "Ongoing project", self.current),
        ]
    }
}

impl ItemControls for Certification {
    fn heading(&self, index: usize) -> String {
        heading_or(&self.name, "Certification", index)
    }

    fn controls(&self) -> Vec<Control> {
        vec![
            text("name", "Certification Name", &self.name),
            text("issuer", "Issuing Organization", &self.issuer),
            date("issueDate", "Issue Date", &self.issue_date, false),
            date("expiryDate", "Expiry Date", &self.expiry_date, false),
            text("credentialId", "Credential ID", &self.credential_id),
            text("link", "Credential URL", &self.link),
        ]
    }
}

impl ItemControls for SocialLink {
    fn heading(&self, _index: usize) -> String {
        match (&self.platform, self.custom_platform.as_deref()) {
            (SocialPlatform::Other, Some(custom)) if !custom.trim().is_empty() => {
                custom.trim().to_string()
            }
            (platform, _) => platform.label().to_string(),
        }
    }

    fn controls(&self) -> Vec<Control> {
        let mut controls = vec![Control::Select {
            key: "platform",
            label: "Platform",
            value: self.platform.as_str().to_string(),
            options: SocialPlatform::ALL
                .iter()
                .map(|p| SelectOption {
                    value: p.as_str().to_string(),
                    label: p.label().to_string(),
                })
                .collect(),
        }];
        if self.platform == SocialPlatform::Other {
            controls.push(text(
                "customPlatform",
                "Platform Name",
                self.custom_platform.as_deref().unwrap_or_default(),
            ));
        }
        controls.push(text("username", "Username", &self.username));
        controls.push(text("url", "URL", &self.url));
        controls
    }
}

impl ItemControls for Achievement {
    fn heading(&self, index: usize) -> String {
        heading_or(&self.title, "Achievement", index)
    }

    fn controls(&self) -> Vec<Control> {
        vec![
            text("title", "Title", &self.title),
            text("issuer", "Issuer", &self.issuer),
            date("date", "Date", &self.date, false),
            text_area("description", "Description", &self.description),
        ]
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Rendering
// ────────────────────────────────────────────────────────────────────────────

fn list_form<T: ItemControls>(
    section: SectionId,
    items: &[T],
    add_label: &'static str,
) -> SectionForm {
    let len = items.len();
    SectionForm::List {
        section,
        items: items
            .iter()
            .enumerate()
            .map(|(index, item)| ItemForm {
                index,
                heading: item.heading(index),
                controls: item.controls(),
                can_move_up: index > 0,
                can_move_down: index + 1 < len,
            })
            .collect(),
        add_label,
    }
}

fn skills_form(skills: &Skills, normalizer: &SkillsNormalizer) -> SectionForm {
    let views = normalizer.flatten(skills);
    let len = views.len();
    let rows = views
        .into_iter()
        .enumerate()
        .map(|(index, view)| SkillRow {
            index,
            level_options: level_options(view.category.level_options()),
            name: view.name,
            level: view.level,
            category: view.category,
            can_move_up: index > 0,
            can_move_down: index + 1 < len,
        })
        .collect();
    let categories = SkillCategory::ALL
        .iter()
        .map(|c| SelectOption {
            value: c.as_str().to_string(),
            label: c.label().to_string(),
        })
        .collect();
    SectionForm::Skills { rows, categories }
}

/// Raw technologies input per project index, exactly as last typed.
pub type TechnologyDrafts = BTreeMap<usize, String>;

/// Shows a project's typed technologies text instead of the joined list while
/// the two still agree, so an in-progress separator stays in the input.
fn overlay_technology_drafts(
    form: &mut SectionForm,
    projects: &[Project],
    drafts: &TechnologyDrafts,
) {
    let SectionForm::List { items, .. } = form else {
        return;
    };
    for item in items.iter_mut() {
        let (Some(draft), Some(project)) = (drafts.get(&item.index), projects.get(item.index))
        else {
            continue;
        };
        if parse_technologies(draft) != project.technologies {
            continue;
        }
        for control in item.controls.iter_mut() {
            if let Control::Text {
                key: "technologies",
                value,
                ..
            } = control
            {
                value.clone_from(draft);
            }
        }
    }
}

/// Dispatches to the section's form layout.
pub fn render(
    section: &PortfolioSection,
    normalizer: &SkillsNormalizer,
    technology_drafts: &TechnologyDrafts,
) -> SectionForm {
    let id = section.id();
    match section {
        PortfolioSection::UserInfo(info) => SectionForm::UserInfo {
            controls: user_info_controls(info),
        },
        PortfolioSection::WorkExperience(list) => list_form(id, list, "Add Experience"),
        PortfolioSection::Education(list) => list_form(id, list, "Add Education"),
        PortfolioSection::Skills(skills) => skills_form(skills, normalizer),
        PortfolioSection::Projects(list) => {
            let mut form = list_form(id, list, "Add Project");
            overlay_technology_drafts(&mut form, list, technology_drafts);
            form
        }
        PortfolioSection::Certifications(list) => list_form(id, list, "Add Certification"),
        PortfolioSection::SocialLinks(list) => list_form(id, list, "Add Social Link"),
        PortfolioSection::Achievements(list) => list_form(id, list, "Add Achievement"),
    }
}
