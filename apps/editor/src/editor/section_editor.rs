//! Dispatches discrete edits to the mounted section and
//! pushes every new value to its owner.
//!
//! The editor holds a local snapshot seeded from the owner's value. Each edit
//! computes a new value from the snapshot, replaces the snapshot, and calls the
//! owner's sink synchronously, exactly once.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::editor::fields::{
    AchievementField, CertificationField, EducationField, ExperienceField, FieldEdit,
    ProjectField, SocialLinkField, UserInfoField,
};
use crate::editor::forms::{self, SectionForm, TechnologyDrafts};
use crate::editor::list_mutator::{self, Direction};
use crate::editor::skills::{SkillCategory, SkillPatch, SkillsNormalizer};
use crate::models::{PortfolioSection, SectionId, SectionItem};

/// Receives every value the editor produces. The owner behind it is the only
/// source of truth for persistence.
pub trait SectionSink {
    fn on_update(&mut self, next: PortfolioSection);
}

impl<F> SectionSink for F
where
    F: FnMut(PortfolioSection),
{
    fn on_update(&mut self, next: PortfolioSection) {
        self(next)
    }
}

/// One discrete user edit: a keystroke, a toggle, or an add/remove/move click.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum SectionEdit {
    EditUserInfo { field: UserInfoField },
    EditExperience { index: usize, field: ExperienceField },
    EditEducation { index: usize, field: EducationField },
    EditProject { index: usize, field: ProjectField },
    EditCertification { index: usize, field: CertificationField },
    EditSocialLink { index: usize, field: SocialLinkField },
    EditAchievement { index: usize, field: AchievementField },
    /// Appends the section's default item.
    AddItem,
    RemoveItem { index: usize },
    MoveItem { index: usize, direction: Direction },
    /// Replaces an item wholesale. `item` is decoded as the mounted section's
    /// record type; missing fields take their defaults.
    ReplaceItem { index: usize, item: Value },
    UpdateSkill { index: usize, patch: SkillPatch },
    AddSkill { category: SkillCategory },
    RemoveSkill { index: usize },
    MoveSkill { index: usize, direction: Direction },
}

impl SectionEdit {
    pub fn op_name(&self) -> &'static str {
        match self {
            SectionEdit::EditUserInfo { .. } => "editUserInfo",
            SectionEdit::EditExperience { .. } => "editExperience",
            SectionEdit::EditEducation { .. } => "editEducation",
            SectionEdit::EditProject { .. } => "editProject",
            SectionEdit::EditCertification { .. } => "editCertification",
            SectionEdit::EditSocialLink { .. } => "editSocialLink",
            SectionEdit::EditAchievement { .. } => "editAchievement",
            SectionEdit::AddItem => "addItem",
            SectionEdit::RemoveItem { .. } => "removeItem",
            SectionEdit::MoveItem { .. } => "moveItem",
            SectionEdit::ReplaceItem { .. } => "replaceItem",
            SectionEdit::UpdateSkill { .. } => "updateSkill",
            SectionEdit::AddSkill { .. } => "addSkill",
            SectionEdit::RemoveSkill { .. } => "removeSkill",
            SectionEdit::MoveSkill { .. } => "moveSkill",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum IgnoreReason {
    /// The editor was mounted with an unrecognized section identifier.
    UnsupportedSection { section: String },
    /// The edit addresses a different section shape than the mounted one.
    SectionMismatch { section: SectionId, op: String },
    /// A wholesale replacement item could not be read as the section's record.
    MalformedItem { section: SectionId, detail: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum EditOutcome {
    /// The snapshot was replaced and the sink received the new value.
    Emitted,
    /// Nothing changed and the sink was not called.
    Ignored(IgnoreReason),
}

#[derive(Debug, Clone, PartialEq)]
enum Mounted {
    Section(PortfolioSection),
    Unsupported(String),
}

pub struct SectionEditor<S> {
    mounted: Mounted,
    normalizer: SkillsNormalizer,
    /// Technologies text as typed, keyed by project index. Only the parsed
    /// list is emitted; this keeps the input stable between keystrokes.
    technology_drafts: TechnologyDrafts,
    sink: S,
}

impl<S: SectionSink> SectionEditor<S> {
    /// Mounts the editor for `section` with the owner's current `value`.
    /// An unrecognized `section` mounts a placeholder that ignores all edits.
    pub fn mount(section: &str, value: Option<&Value>, sink: S) -> Self {
        Self {
            mounted: seed(section, value),
            normalizer: SkillsNormalizer::default(),
            technology_drafts: TechnologyDrafts::new(),
            sink,
        }
    }

    /// Mounts the editor on an already-typed section value.
    pub fn mount_typed(section: PortfolioSection, sink: S) -> Self {
        Self {
            mounted: Mounted::Section(section),
            normalizer: SkillsNormalizer::default(),
            technology_drafts: TechnologyDrafts::new(),
            sink,
        }
    }

    pub fn with_normalizer(mut self, normalizer: SkillsNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Re-seeds the snapshot from a new owner value. Does not emit.
    pub fn sync(&mut self, section: &str, value: Option<&Value>) {
        self.mounted = seed(section, value);
        self.technology_drafts.clear();
    }

    pub fn section(&self) -> Option<SectionId> {
        match &self.mounted {
            Mounted::Section(section) => Some(section.id()),
            Mounted::Unsupported(_) => None,
        }
    }

    pub fn snapshot(&self) -> Option<&PortfolioSection> {
        match &self.mounted {
            Mounted::Section(section) => Some(section),
            Mounted::Unsupported(_) => None,
        }
    }

    pub fn apply(&mut self, edit: SectionEdit) -> EditOutcome {
        let current = match &self.mounted {
            Mounted::Section(section) => section,
            Mounted::Unsupported(key) => {
                debug!("Ignoring '{}' on unsupported section '{key}'", edit.op_name());
                return EditOutcome::Ignored(IgnoreReason::UnsupportedSection {
                    section: key.clone(),
                });
            }
        };

        let op = edit.op_name();
        let draft = match &edit {
            SectionEdit::EditProject {
                index,
                field: ProjectField::Technologies(raw),
            } => Some((*index, raw.clone())),
            _ => None,
        };
        let keeps_drafts = matches!(edit, SectionEdit::EditProject { .. });
        match next_value(current, edit, &self.normalizer) {
            Ok(next) => {
                debug!("Section '{}' emitting after '{op}'", next.id());
                // Any other edit may shift project indices.
                if !keeps_drafts {
                    self.technology_drafts.clear();
                }
                if let Some((index, raw)) = draft {
                    self.technology_drafts.insert(index, raw);
                }
                self.mounted = Mounted::Section(next.clone());
                self.sink.on_update(next);
                EditOutcome::Emitted
            }
            Err(reason) => {
                warn!("Ignoring '{op}' on section '{}': {reason:?}", current.id());
                EditOutcome::Ignored(reason)
            }
        }
    }

    /// Headless form for the current snapshot, or a placeholder for an
    /// unrecognized section.
    pub fn form(&self) -> SectionForm {
        match &self.mounted {
            Mounted::Section(section) => {
                forms::render(section, &self.normalizer, &self.technology_drafts)
            }
            Mounted::Unsupported(key) => SectionForm::Placeholder {
                section: key.clone(),
            },
        }
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

fn seed(section: &str, value: Option<&Value>) -> Mounted {
    match SectionId::parse(section) {
        Some(id) => Mounted::Section(PortfolioSection::decode(id, value)),
        None => {
            debug!("Mounting placeholder for unrecognized section '{section}'");
            Mounted::Unsupported(section.to_string())
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Dispatch
// ────────────────────────────────────────────────────────────────────────────

fn next_value(
    current: &PortfolioSection,
    edit: SectionEdit,
    normalizer: &SkillsNormalizer,
) -> Result<PortfolioSection, IgnoreReason> {
    use PortfolioSection as P;
    use SectionEdit as E;

    let op = edit.op_name();
    let next = match (current, edit) {
        (P::UserInfo(info), E::EditUserInfo { field }) => P::UserInfo(field.apply_to(info)),
        (P::WorkExperience(list), E::EditExperience { index, field }) => {
            P::WorkExperience(edit_item(list, index, field))
        }
        (P::Education(list), E::EditEducation { index, field }) => {
            P::Education(edit_item(list, index, field))
        }
        (P::Projects(list), E::EditProject { index, field }) => {
            P::Projects(edit_item(list, index, field))
        }
        (P::Certifications(list), E::EditCertification { index, field }) => {
            P::Certifications(edit_item(list, index, field))
        }
        (P::SocialLinks(list), E::EditSocialLink { index, field }) => {
            P::SocialLinks(edit_item(list, index, field))
        }
        (P::Achievements(list), E::EditAchievement { index, field }) => {
            P::Achievements(edit_item(list, index, field))
        }

        (section, E::AddItem) => apply_list_op(section, ListOp::Append, op)?,
        (section, E::RemoveItem { index }) => apply_list_op(section, ListOp::Remove(index), op)?,
        (section, E::MoveItem { index, direction }) => {
            apply_list_op(section, ListOp::Move(index, direction), op)?
        }
        (section, E::ReplaceItem { index, item }) => {
            apply_list_op(section, ListOp::Replace(index, item), op)?
        }

        (P::Skills(skills), E::UpdateSkill { index, patch }) => {
            P::Skills(normalizer.update_skill(skills, index, &patch))
        }
        (P::Skills(skills), E::AddSkill { category }) => {
            P::Skills(normalizer.add_skill(skills, category))
        }
        (P::Skills(skills), E::RemoveSkill { index }) => {
            P::Skills(normalizer.remove_skill(skills, index))
        }
        (P::Skills(skills), E::MoveSkill { index, direction }) => {
            P::Skills(normalizer.move_skill(skills, index, direction))
        }

        (section, _) => return Err(mismatch(section.id(), op)),
    };
    Ok(next)
}

fn edit_item<F: FieldEdit>(list: &[F::Target], index: usize, field: F) -> Vec<F::Target> {
    list_mutator::update_with(list, index, |item| field.apply_to(item))
}

fn mismatch(section: SectionId, op: &str) -> IgnoreReason {
    IgnoreReason::SectionMismatch {
        section,
        op: op.to_string(),
    }
}

enum ListOp {
    Append,
    Remove(usize),
    Move(usize, Direction),
    Replace(usize, Value),
}

impl ListOp {
    fn run<T: SectionItem>(&self, section: SectionId, list: &[T]) -> Result<Vec<T>, IgnoreReason> {
        match self {
            ListOp::Append => Ok(list_mutator::append(list, T::default())),
            ListOp::Remove(index) => Ok(list_mutator::remove_at(list, *index)),
            ListOp::Move(index, direction) => {
                Ok(list_mutator::move_adjacent(list, *index, *direction))
            }
            ListOp::Replace(index, value) => {
                let item = T::deserialize(value).map_err(|e| IgnoreReason::MalformedItem {
                    section,
                    detail: e.to_string(),
                })?;
                Ok(list_mutator::update_at(list, *index, item.settled()))
            }
        }
    }
}

fn apply_list_op(
    section: &PortfolioSection,
    op: ListOp,
    op_name: &str,
) -> Result<PortfolioSection, IgnoreReason> {
    use PortfolioSection as P;

    let id = section.id();
    Ok(match section {
        P::WorkExperience(list) => P::WorkExperience(op.run(id, list)?),
        P::Education(list) => P::Education(op.run(id, list)?),
        P::Projects(list) => P::Projects(op.run(id, list)?),
        P::Certifications(list) => P::Certifications(op.run(id, list)?),
        P::SocialLinks(list) => P::SocialLinks(op.run(id, list)?),
        P::Achievements(list) => P::Achievements(op.run(id, list)?),
        P::UserInfo(_) | P::Skills(_) => return Err(mismatch(id, op_name)),
    })
}
