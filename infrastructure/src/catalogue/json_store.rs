//! JSON-backed reference example store.
//!
//! File format: `{"scenarios": [{"scenario": "...", "answer": "..."}]}`.
//! A default catalogue is compiled into the binary.

use std::path::{Path, PathBuf};
use thiserror::Error;
use triage_domain::{DomainError, ExampleCatalogue};
use tracing::{debug, info};

/// Catalogue shipped with the binary
pub const BUNDLED_SCENARIOS: &str = include_str!("../../data/esi_scenarios.json");

#[derive(Error, Debug)]
pub enum CatalogueError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid catalogue {}: {source}", path.display())]
    Invalid { path: PathBuf, source: DomainError },
}

/// Loads reference examples from a JSON file or the bundled default
pub struct JsonExampleStore;

impl JsonExampleStore {
    /// The compiled-in catalogue
    pub fn bundled() -> ExampleCatalogue {
        // Covered by test_bundled_catalogue_covers_every_level
        ExampleCatalogue::from_json(BUNDLED_SCENARIOS).unwrap_or_default()
    }

    pub fn load(path: &Path) -> Result<ExampleCatalogue, CatalogueError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogueError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let catalogue =
            ExampleCatalogue::from_json(&json).map_err(|source| CatalogueError::Invalid {
                path: path.to_path_buf(),
                source,
            })?;
        info!("Loaded {} reference examples from {}", catalogue.len(), path.display());
        Ok(catalogue)
    }

    /// The catalogue at `path` if given, else the bundled one
    pub fn load_or_bundled(path: Option<&Path>) -> Result<ExampleCatalogue, CatalogueError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                debug!("Using bundled reference examples");
                Ok(Self::bundled())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use triage_domain::EsiLevel;

    #[test]
    fn test_bundled_catalogue_covers_every_level() {
        let catalogue = ExampleCatalogue::from_json(BUNDLED_SCENARIOS).unwrap();
        for level in EsiLevel::ALL {
            assert!(!catalogue.level(level).is_empty(), "no example for level {}", level);
        }
        assert_eq!(JsonExampleStore::bundled().len(), catalogue.len());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scenarios.json");
        std::fs::write(
            &path,
            r#"{"scenarios":[{"scenario":"Cardiac arrest","answer":"ESI level 1: start CPR."}]}"#,
        )
        .unwrap();

        let catalogue = JsonExampleStore::load_or_bundled(Some(&path)).unwrap();
        assert_eq!(catalogue.len(), 1);
        assert_eq!(catalogue.level(EsiLevel::One).len(), 1);
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(
            JsonExampleStore::load(&missing),
            Err(CatalogueError::Read { .. })
        ));

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "not json").unwrap();
        assert!(matches!(
            JsonExampleStore::load(&bad),
            Err(CatalogueError::Invalid { .. })
        ));
    }
}
