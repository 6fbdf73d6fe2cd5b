use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use portfolio_editor::config::Config;
use portfolio_editor::diagnostics::{check_document, compute_completeness};
use portfolio_editor::replay::{self, ScriptedEdit};
use portfolio_editor::{PortfolioDocument, SkillsNormalizer};

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Structured logging to stderr so stdout stays clean for the document
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting portfolio editor v{}", env!("CARGO_PKG_VERSION"));

    let mut document: Value = replay::load_json(&config.document_path)
        .with_context(|| format!("Failed to load document {}", config.document_path.display()))?;
    let script: Vec<ScriptedEdit> = replay::load_json(&config.edits_path)
        .with_context(|| format!("Failed to load edits {}", config.edits_path.display()))?;
    info!("Loaded {} scripted edits", script.len());

    let normalizer = SkillsNormalizer::new(config.soft_skill_level);
    let summary = replay::replay(&mut document, &script, &normalizer)?;
    for (step, reason) in &summary.ignored {
        warn!("Edit #{step} was ignored: {reason:?}");
    }

    let typed = PortfolioDocument::decode(&document);
    for warning in check_document(&typed) {
        warn!(
            "{} [{}]: {}",
            warning.section,
            warning.index.map_or_else(|| "-".to_string(), |i| i.to_string()),
            warning.description
        );
    }
    let report = compute_completeness(&typed);
    info!(
        "Completeness {:.0}% across {} entries; missing: {:?}",
        report.overall_score * 100.0,
        report.total_entries,
        report.missing_sections
    );

    replay::write_document(config.output_path.as_deref(), &document)?;
    Ok(())
}
