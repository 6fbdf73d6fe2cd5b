// Structured section editing: generic list primitives, the skills
// flatten/rebuild adapter, per-record field edits, headless forms, and the
// dispatcher that ties them to an owner callback.

pub mod fields;
pub mod forms;
pub mod list_mutator;
pub mod section_editor;
pub mod skills;

pub use fields::FieldEdit;
pub use forms::SectionForm;
pub use list_mutator::Direction;
pub use section_editor::{EditOutcome, IgnoreReason, SectionEdit, SectionEditor, SectionSink};
pub use skills::{SkillCategory, SkillPatch, SkillView, SkillsNormalizer};
