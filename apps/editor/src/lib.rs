pub mod config;
pub mod diagnostics;
pub mod editor;
pub mod errors;
pub mod models;
pub mod replay;

pub use editor::{EditOutcome, SectionEdit, SectionEditor, SectionSink, SkillsNormalizer};
pub use errors::EditorError;
pub use models::{PortfolioDocument, PortfolioSection, SectionId};
