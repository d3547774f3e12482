// src/file/fixtures.rs
use super::FileHandler;
use crate::data::CaseStudyData;
use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};
use std::path::Path;
use std::fs;
use anyhow::{Result, Context};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FixtureFile {
    pub version: String,
    pub exported_at: DateTime<Utc>,
    pub case_study: CaseStudyData,
}

impl FixtureFile {
    pub fn new(case_study: CaseStudyData) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            exported_at: Utc::now(),
            case_study,
        }
    }
}

#[derive(Debug, Default)]
pub struct FixtureFileHandler;

impl FixtureFileHandler {
    pub fn new() -> Self {
        Self
    }
}

impl FileHandler<FixtureFile> for FixtureFileHandler {
    fn load(&self, path: &Path) -> Result<FixtureFile> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read fixture file {}", path.display()))?;
        ron::from_str(&content)
            .with_context(|| format!("Failed to parse fixture file {}", path.display()))
    }

    fn save(&self, data: &FixtureFile, path: &Path) -> Result<()> {
        let content = ron::ser::to_string_pretty(
            data,
            ron::ser::PrettyConfig::new()
                .new_line("\n".to_string())
                .depth_limit(5)
                .separate_tuple_members(true)
        )?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write fixture file {}", path.display()))?;
        Ok(())
    }
}
