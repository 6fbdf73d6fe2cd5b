//! Owner-side replay of scripted section edits against a JSON document.
//!
//! Each step mounts a fresh [`SectionEditor`] on the document's current value
//! for the named section, applies one edit, and writes any emitted value back
//! under the section key. Keys the editor does not know about are untouched.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::editor::{EditOutcome, IgnoreReason, SectionEdit, SectionEditor, SkillsNormalizer};
use crate::errors::EditorError;
use crate::models::PortfolioSection;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptedEdit {
    /// Section identifier as stored in the document, e.g. `workExperience`.
    pub section: String,
    pub edit: SectionEdit,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReplaySummary {
    pub emitted: usize,
    /// Step index and reason for every edit the editor declined.
    pub ignored: Vec<(usize, IgnoreReason)>,
}

fn capture(slot: &mut Option<PortfolioSection>) -> impl FnMut(PortfolioSection) + '_ {
    move |next| *slot = Some(next)
}

pub fn replay(
    document: &mut Value,
    script: &[ScriptedEdit],
    normalizer: &SkillsNormalizer,
) -> Result<ReplaySummary, EditorError> {
    if document.is_null() {
        *document = Value::Object(Map::new());
    }
    let root = document.as_object_mut().ok_or_else(|| {
        EditorError::InvalidDocument("document root must be a JSON object".to_string())
    })?;

    let mut summary = ReplaySummary::default();
    for (step, scripted) in script.iter().enumerate() {
        let mut emitted = None;
        let outcome = {
            let current = root.get(&scripted.section);
            let mut editor = SectionEditor::mount(&scripted.section, current, capture(&mut emitted))
                .with_normalizer(*normalizer);
            editor.apply(scripted.edit.clone())
        };

        match emitted {
            Some(next) => {
                root.insert(next.id().as_str().to_string(), next.to_value()?);
                summary.emitted += 1;
            }
            None => {
                if let EditOutcome::Ignored(reason) = outcome {
                    debug!("Step {step} ignored: {reason:?}");
                    summary.ignored.push((step, reason));
                }
            }
        }
    }

    info!(
        "Replayed {} edits: {} emitted, {} ignored",
        script.len(),
        summary.emitted,
        summary.ignored.len()
    );
    Ok(summary)
}

pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, EditorError> {
    let raw = fs::read_to_string(path).map_err(|e| EditorError::io(path, e))?;
    Ok(serde_json::from_str(&raw)?)
}

/// Writes the document as pretty JSON to `path`, or to stdout when `None`.
pub fn write_document(path: Option<&Path>, document: &Value) -> Result<(), EditorError> {
    let rendered = serde_json::to_string_pretty(document)?;
    match path {
        Some(path) => fs::write(path, rendered).map_err(|e| EditorError::io(path, e)),
        None => {
            println!("{rendered}");
            Ok(())
        }
    }
}
