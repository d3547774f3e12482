// src/file/mod.rs
use anyhow::Result;
use std::path::Path;
use tracing::info;

use crate::data::CaseStudyData;

pub mod fixtures;

pub use fixtures::{FixtureFile, FixtureFileHandler};

// Core trait for file operations
pub trait FileHandler<T> {
    fn load(&self, path: &Path) -> Result<T>;
    fn save(&self, data: &T, path: &Path) -> Result<()>;
}

/// Loads case study figures from a RON fixture file, or the built-in case
/// study when no path is given.
pub fn load_case_study(path: Option<&Path>) -> Result<CaseStudyData> {
    match path {
        Some(path) => {
            let file = FixtureFileHandler::new().load(path)?;
            info!(path = %path.display(), version = %file.version, "loaded fixtures");
            Ok(file.case_study)
        }
        None => Ok(CaseStudyData::default()),
    }
}

pub fn export_case_study(data: &CaseStudyData, path: &Path) -> Result<()> {
    FixtureFileHandler::new().save(&FixtureFile::new(data.clone()), path)?;
    info!(path = %path.display(), "exported fixtures");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn no_path_yields_the_built_in_case_study() {
        let data = load_case_study(None).unwrap();
        assert_eq!(data, CaseStudyData::default());
    }

    #[test]
    fn exported_fixtures_load_back_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("case_study.ron");

        let mut data = CaseStudyData::default();
        data.traffic_light.confidence = 77;
        data.application.borrower.name = "Test Borrower".to_string();

        export_case_study(&data, &path).unwrap();
        let loaded = load_case_study(Some(&path)).unwrap();
        assert_eq!(loaded, data);
    }

    #[test]
    fn malformed_file_reports_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.ron");
        fs::write(&path, "(version: \"1\", case_study: ").unwrap();

        let err = load_case_study(Some(&path)).unwrap_err();
        assert!(format!("{err}").contains("broken.ron"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_case_study(Some(&dir.path().join("absent.ron"))).is_err());
    }
}
