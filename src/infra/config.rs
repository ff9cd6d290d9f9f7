//! Optional JSON overrides for the cost and resource tables.
//!
//! Lookup order: the file named by `BARRIER_CALCULATOR_TABLES`, then
//! `tables.json` in the platform config directory. Missing files mean the
//! built-in tables are used.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use serde_json::Error as SerdeError;

use crate::domain::Tables;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "BarrierCalculator";
const APP_NAME: &str = "BarrierCalculator";
const TABLES_FILENAME: &str = "tables.json";

pub const TABLES_PATH_ENV: &str = "BARRIER_CALCULATOR_TABLES";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: SerdeError,
    },
    #[error("{path} contains a negative or non-finite rate")]
    InvalidRate { path: PathBuf },
}

pub fn tables_path() -> Option<PathBuf> {
    if let Some(explicit) = std::env::var_os(TABLES_PATH_ENV) {
        return Some(PathBuf::from(explicit));
    }
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(TABLES_FILENAME))
}

/// Reads tables from `path`. `Ok(None)` when the file does not exist.
pub fn read_tables(path: &Path) -> Result<Option<Tables>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let tables: Tables = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if !rates_are_valid(&tables) {
        return Err(ConfigError::InvalidRate {
            path: path.to_path_buf(),
        });
    }

    Ok(Some(tables))
}

/// Tables for this session. Falls back to the built-in tables on any failure.
pub fn load_tables() -> Tables {
    let Some(path) = tables_path() else {
        tracing::info!("no config directory available, using built-in tables");
        return Tables::default();
    };

    match read_tables(&path) {
        Ok(Some(tables)) => {
            tracing::info!(path = %path.display(), "loaded table overrides");
            tables
        }
        Ok(None) => {
            tracing::debug!(path = %path.display(), "no table overrides found");
            Tables::default()
        }
        Err(err) => {
            tracing::warn!(%err, "ignoring table overrides");
            Tables::default()
        }
    }
}

fn rates_are_valid(tables: &Tables) -> bool {
    let costs = &tables.costs;
    let resources = &tables.resources;
    [
        costs.screen_unit,
        costs.textile_unit,
        costs.disposable_unit,
        costs.textile_cleaning,
        costs.screen_cleaning,
        costs.disposable_replacement,
        costs.screen_lifespan_years,
        resources.textile_energy_kwh,
        resources.textile_water_liters,
        resources.disposable_plastic_kg,
        resources.screen_disinfectant_liters,
        resources.screen_wipes.per_cleaning(),
    ]
    .iter()
    .all(|value| value.is_finite() && *value >= 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ResourceTable, WipeRate};

    fn scratch_file(name: &str, content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "barrier_calculator_config_{}_{name}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(TABLES_FILENAME);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let path = std::env::temp_dir().join("barrier_calculator_does_not_exist.json");
        assert!(read_tables(&path).unwrap().is_none());
    }

    #[test]
    fn partial_override_merges_with_defaults() {
        let path = scratch_file(
            "partial",
            r#"{ "resources": { "screen_wipes": { "unit": "kilograms", "per_cleaning": 0.015 } } }"#,
        );
        let tables = read_tables(&path).unwrap().unwrap();

        assert_eq!(tables.resources, ResourceTable::wipe_mass());
        assert_eq!(tables.costs.screen_unit, 1310.0);
        assert_eq!(tables.resources.screen_wipes, WipeRate::Kilograms(0.015));
    }

    #[test]
    fn malformed_file_reports_parse_error() {
        let path = scratch_file("malformed", "{ not json");
        assert!(matches!(read_tables(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn negative_rates_are_rejected() {
        let path = scratch_file("negative", r#"{ "costs": { "screen_cleaning": -1 } }"#);
        assert!(matches!(
            read_tables(&path),
            Err(ConfigError::InvalidRate { .. })
        ));
    }
}
