//! Presents the three stored skill arrays as one ordered,
//! uniformly shaped list for editing, and rebuilds storage from it.
//!
//! # Ordering
//! Flatten emits all technical entries, then soft skills, then languages.
//! Rebuild routes each view entry to its category's bucket in encounter order,
//! so storage is always grouped by category. Reordering two entries of the same
//! category changes their stored order; swapping across a category boundary
//! leaves storage unchanged.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::editor::list_mutator::{self, Direction};
use crate::models::{LanguageEntry, Proficiency, SkillEntry, Skills, TechnicalKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    #[default]
    Technical,
    Soft,
    Language,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 3] = [
        SkillCategory::Technical,
        SkillCategory::Soft,
        SkillCategory::Language,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Technical => "technical",
            SkillCategory::Soft => "soft",
            SkillCategory::Language => "language",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Technical => "Technical",
            SkillCategory::Soft => "Soft Skill",
            SkillCategory::Language => "Language",
        }
    }

    /// Levels selectable for an entry of this category. Soft skills have no
    /// stored level and offer none.
    pub fn level_options(&self) -> &'static [Proficiency] {
        match self {
            SkillCategory::Technical => Proficiency::technical_scale(),
            SkillCategory::Soft => &[],
            SkillCategory::Language => Proficiency::language_scale(),
        }
    }
}

/// Editing-only view of one skill entry. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillView {
    pub name: String,
    pub level: Proficiency,
    pub category: SkillCategory,
    /// Stored sub-kind of a technical entry, `None` for the other categories.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<TechnicalKind>,
}

/// Partial update merged over a [`SkillView`]. Changing `category` moves the
/// entry to that category's storage array on rebuild.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillPatch {
    pub name: Option<String>,
    pub level: Option<Proficiency>,
    pub category: Option<SkillCategory>,
}

impl SkillView {
    /// Merges `patch` over this view. Moving the entry to another category
    /// drops its technical sub-kind.
    pub fn patched(&self, patch: &SkillPatch) -> SkillView {
        let category = patch.category.unwrap_or(self.category);
        SkillView {
            name: patch.name.clone().unwrap_or_else(|| self.name.clone()),
            level: patch.level.unwrap_or(self.level),
            category,
            kind: if category == self.category { self.kind } else { None },
        }
    }
}

/// Bidirectional mapping between [`Skills`] storage and the flattened
/// [`SkillView`] list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillsNormalizer {
    soft_level: Proficiency,
}

impl Default for SkillsNormalizer {
    fn default() -> Self {
        Self {
            soft_level: Proficiency::Intermediate,
        }
    }
}

impl SkillsNormalizer {
    /// `soft_level` is the level shown for soft skills, which store none.
    pub fn new(soft_level: Proficiency) -> Self {
        Self { soft_level }
    }

    pub fn flatten(&self, skills: &Skills) -> Vec<SkillView> {
        let technical = skills.technical.iter().map(|s| SkillView {
            name: s.name.clone(),
            level: s.level,
            category: SkillCategory::Technical,
            kind: Some(s.category),
        });
        let soft = skills.soft.iter().map(|name| SkillView {
            name: name.clone(),
            level: self.soft_level,
            category: SkillCategory::Soft,
            kind: None,
        });
        let languages = skills.languages.iter().map(|l| SkillView {
            name: l.language.clone(),
            level: l.proficiency,
            category: SkillCategory::Language,
            kind: None,
        });
        technical.chain(soft).chain(languages).collect()
    }

    /// Single pass over `views`, routing each entry to its category bucket.
    pub fn rebuild(views: &[SkillView]) -> Skills {
        let mut skills = Skills::default();
        for view in views {
            match view.category {
                SkillCategory::Technical => skills.technical.push(SkillEntry {
                    name: view.name.clone(),
                    level: view.level,
                    category: view.kind.unwrap_or_default(),
                }),
                SkillCategory::Soft => skills.soft.push(view.name.clone()),
                SkillCategory::Language => skills.languages.push(LanguageEntry {
                    language: view.name.clone(),
                    proficiency: view.level,
                }),
            }
        }
        skills
    }

    pub fn update_skill(&self, skills: &Skills, index: usize, patch: &SkillPatch) -> Skills {
        let views = self.flatten(skills);
        if index >= views.len() {
            return skills.clone();
        }
        let views = list_mutator::update_with(&views, index, |view| view.patched(patch));
        SkillsNormalizer::rebuild(&views)
    }

    /// Appends a default entry to the targeted storage array. It shows up at
    /// the tail of its category block on the next flatten.
    pub fn add_skill(&self, skills: &Skills, category: SkillCategory) -> Skills {
        debug!("Adding {:?} skill", category);
        let mut next = skills.clone();
        match category {
            SkillCategory::Technical => {
                next.technical = list_mutator::append(&skills.technical, SkillEntry::default())
            }
            SkillCategory::Soft => next.soft = list_mutator::append(&skills.soft, String::new()),
            SkillCategory::Language => {
                next.languages = list_mutator::append(&skills.languages, LanguageEntry::default())
            }
        }
        next
    }

    pub fn remove_skill(&self, skills: &Skills, index: usize) -> Skills {
        let views = self.flatten(skills);
        if index >= views.len() {
            return skills.clone();
        }
        SkillsNormalizer::rebuild(&list_mutator::remove_at(&views, index))
    }

    pub fn move_skill(&self, skills: &Skills, index: usize, direction: Direction) -> Skills {
        let views = self.flatten(skills);
        if direction.neighbor(index, views.len()).is_none() {
            return skills.clone();
        }
        SkillsNormalizer::rebuild(&list_mutator::move_adjacent(&views, index, direction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_technical(name: &str, level: Proficiency) -> SkillEntry {
        SkillEntry {
            name: name.to_string(),
            level,
            category: TechnicalKind::Technical,
        }
    }

    fn make_language(language: &str, proficiency: Proficiency) -> LanguageEntry {
        LanguageEntry {
            language: language.to_string(),
            proficiency,
        }
    }

    fn make_skills() -> Skills {
        Skills {
            technical: vec![make_technical("Go", Proficiency::Expert)],
            soft: vec!["Leadership".to_string()],
            languages: vec![make_language("English", Proficiency::Native)],
        }
    }

    fn make_rich_skills() -> Skills {
        Skills {
            technical: vec![
                make_technical("Rust", Proficiency::Advanced),
                make_technical("SQL", Proficiency::Intermediate),
                make_technical("Go", Proficiency::Expert),
            ],
            soft: vec!["Mentoring".to_string(), "Writing".to_string()],
            languages: vec![
                make_language("English", Proficiency::Fluent),
                make_language("Yoruba", Proficiency::Native),
            ],
        }
    }

    fn names(views: &[SkillView]) -> Vec<&str> {
        views.iter().map(|v| v.name.as_str()).collect()
    }

    #[test]
    fn test_flatten_orders_technical_soft_language() {
        let views = SkillsNormalizer::default().flatten(&make_skills());
        assert_eq!(names(&views), vec!["Go", "Leadership", "English"]);
        assert_eq!(views[0].category, SkillCategory::Technical);
        assert_eq!(views[0].level, Proficiency::Expert);
        assert_eq!(views[1].category, SkillCategory::Soft);
        assert_eq!(views[1].level, Proficiency::Intermediate);
        assert_eq!(views[2].category, SkillCategory::Language);
        assert_eq!(views[2].level, Proficiency::Native);
    }

    #[test]
    fn test_remove_soft_skill_leaves_other_arrays() {
        let skills = make_skills();
        let next = SkillsNormalizer::default().remove_skill(&skills, 1);
        assert!(next.soft.is_empty());
        assert_eq!(next.technical, skills.technical);
        assert_eq!(next.languages, skills.languages);
    }

    #[test]
    fn test_flatten_rebuild_flatten_is_idempotent() {
        let normalizer = SkillsNormalizer::default();
        for skills in [make_skills(), make_rich_skills(), Skills::default()] {
            let once = normalizer.flatten(&skills);
            let again = normalizer.flatten(&SkillsNormalizer::rebuild(&once));
            assert_eq!(once, again);
        }
    }

    #[test]
    fn test_tool_kind_survives_unrelated_edits() {
        let skills = Skills {
            technical: vec![
                SkillEntry {
                    name: "Docker".to_string(),
                    level: Proficiency::Advanced,
                    category: TechnicalKind::Tool,
                },
                make_technical("Rust", Proficiency::Expert),
            ],
            soft: vec![],
            languages: vec![make_language("French", Proficiency::Basic)],
        };
        let normalizer = SkillsNormalizer::default();
        let patch = SkillPatch {
            level: Some(Proficiency::Fluent),
            ..Default::default()
        };
        let next = normalizer.update_skill(&skills, 2, &patch);
        assert_eq!(next.technical, skills.technical);
        assert_eq!(next.languages[0].proficiency, Proficiency::Fluent);

        let next = normalizer.move_skill(&skills, 0, Direction::Down);
        let kinds: Vec<_> = next.technical.iter().map(|s| (s.name.as_str(), s.category)).collect();
        assert_eq!(
            kinds,
            vec![("Rust", TechnicalKind::Technical), ("Docker", TechnicalKind::Tool)]
        );
    }

    #[test]
    fn test_category_change_resets_technical_kind() {
        let skills = Skills {
            languages: vec![make_language("Esperanto", Proficiency::Basic)],
            ..Default::default()
        };
        let normalizer = SkillsNormalizer::default();
        let to_technical = SkillPatch {
            category: Some(SkillCategory::Technical),
            ..Default::default()
        };
        let next = normalizer.update_skill(&skills, 0, &to_technical);
        assert_eq!(next.technical[0].category, TechnicalKind::Technical);
        assert_eq!(normalizer.flatten(&next)[0].kind, Some(TechnicalKind::Technical));
    }

    #[test]
    fn test_tool_entries_flatten_as_technical() {
        let skills = Skills {
            technical: vec![SkillEntry {
                name: "Docker".to_string(),
                level: Proficiency::Advanced,
                category: TechnicalKind::Tool,
            }],
            ..Default::default()
        };
        let normalizer = SkillsNormalizer::default();
        let views = normalizer.flatten(&skills);
        assert_eq!(views[0].category, SkillCategory::Technical);
        assert_eq!(
            normalizer.flatten(&SkillsNormalizer::rebuild(&views)),
            views
        );
    }

    #[test]
    fn test_within_category_move_reorders_storage() {
        let normalizer = SkillsNormalizer::default();
        let skills = make_rich_skills();
        // Rust, SQL, Go -> SQL, Rust, Go -> SQL, Go, Rust
        let next = normalizer.move_skill(&skills, 0, Direction::Down);
        let next = normalizer.move_skill(&next, 1, Direction::Down);
        let technical: Vec<_> = next.technical.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(technical, vec!["SQL", "Go", "Rust"]);
        assert_eq!(next.soft, skills.soft);
        assert_eq!(next.languages, skills.languages);
    }

    #[test]
    fn test_within_category_order_matches_flattened_order() {
        let normalizer = SkillsNormalizer::default();
        let skills = make_rich_skills();
        // Languages occupy flattened indices 5 and 6.
        let next = normalizer.move_skill(&skills, 6, Direction::Up);
        let flattened = normalizer.flatten(&next);
        assert_eq!(
            names(&flattened),
            vec!["Rust", "SQL", "Go", "Mentoring", "Writing", "Yoruba", "English"]
        );
        assert_eq!(next.languages[0].language, "Yoruba");
        assert_eq!(next.technical, skills.technical);
    }

    #[test]
    fn test_cross_category_move_leaves_storage_unchanged() {
        let normalizer = SkillsNormalizer::default();
        let skills = make_rich_skills();
        // Go (last technical) swaps with Mentoring (first soft).
        let next = normalizer.move_skill(&skills, 2, Direction::Down);
        assert_eq!(next, skills);
    }

    #[test]
    fn test_move_at_boundary_returns_input() {
        let normalizer = SkillsNormalizer::default();
        let skills = make_skills();
        assert_eq!(normalizer.move_skill(&skills, 0, Direction::Up), skills);
        assert_eq!(normalizer.move_skill(&skills, 2, Direction::Down), skills);
    }

    #[test]
    fn test_update_skill_merges_patch() {
        let normalizer = SkillsNormalizer::default();
        let patch = SkillPatch {
            level: Some(Proficiency::Advanced),
            ..Default::default()
        };
        let next = normalizer.update_skill(&make_skills(), 0, &patch);
        assert_eq!(next.technical[0].name, "Go");
        assert_eq!(next.technical[0].level, Proficiency::Advanced);
    }

    #[test]
    fn test_update_language_name_maps_to_language_field() {
        let normalizer = SkillsNormalizer::default();
        let patch = SkillPatch {
            name: Some("British English".to_string()),
            ..Default::default()
        };
        let next = normalizer.update_skill(&make_skills(), 2, &patch);
        assert_eq!(next.languages[0].language, "British English");
        assert_eq!(next.languages[0].proficiency, Proficiency::Native);
    }

    #[test]
    fn test_update_category_moves_entry_between_arrays() {
        let normalizer = SkillsNormalizer::default();
        let patch = SkillPatch {
            category: Some(SkillCategory::Soft),
            ..Default::default()
        };
        let next = normalizer.update_skill(&make_skills(), 0, &patch);
        assert!(next.technical.is_empty());
        assert_eq!(next.soft, vec!["Go".to_string(), "Leadership".to_string()]);
    }

    #[test]
    fn test_update_out_of_range_returns_input() {
        let skills = make_skills();
        let next = SkillsNormalizer::default().update_skill(&skills, 3, &SkillPatch::default());
        assert_eq!(next, skills);
    }

    #[test]
    fn test_add_skill_lands_at_tail_of_its_block() {
        let normalizer = SkillsNormalizer::default();
        let next = normalizer.add_skill(&make_rich_skills(), SkillCategory::Technical);
        assert_eq!(next.technical.len(), 4);
        let views = normalizer.flatten(&next);
        assert_eq!(views[3].name, "");
        assert_eq!(views[3].category, SkillCategory::Technical);
        assert_eq!(views[4].name, "Mentoring");
    }

    #[test]
    fn test_add_soft_and_language_defaults() {
        let normalizer = SkillsNormalizer::default();
        let next = normalizer.add_skill(&Skills::default(), SkillCategory::Soft);
        assert_eq!(next.soft, vec![String::new()]);
        let next = normalizer.add_skill(&next, SkillCategory::Language);
        assert_eq!(next.languages, vec![LanguageEntry::default()]);
    }

    #[test]
    fn test_remove_out_of_range_returns_input() {
        let skills = make_skills();
        assert_eq!(SkillsNormalizer::default().remove_skill(&skills, 10), skills);
    }

    #[test]
    fn test_soft_level_is_configurable() {
        let views = SkillsNormalizer::new(Proficiency::Advanced).flatten(&make_skills());
        assert_eq!(views[1].level, Proficiency::Advanced);
    }
}
