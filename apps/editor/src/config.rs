use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::models::Proficiency;

/// Replay configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub document_path: PathBuf,
    pub edits_path: PathBuf,
    /// Output file for the edited document; stdout when unset.
    pub output_path: Option<PathBuf>,
    pub soft_skill_level: Proficiency,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            document_path: require_env("PORTFOLIO_DOCUMENT")?.into(),
            edits_path: require_env("PORTFOLIO_EDITS")?.into(),
            output_path: std::env::var("PORTFOLIO_OUTPUT")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            soft_skill_level: parse_level(
                &std::env::var("SOFT_SKILL_LEVEL").unwrap_or_else(|_| "intermediate".to_string()),
            )?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_level(raw: &str) -> Result<Proficiency> {
    Proficiency::parse(raw).with_context(|| {
        format!("SOFT_SKILL_LEVEL must be a proficiency level, got '{raw}'")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("Advanced").unwrap(), Proficiency::Advanced);
        assert_eq!(parse_level(" native ").unwrap(), Proficiency::Native);
        assert!(parse_level("guru").is_err());
    }
}
