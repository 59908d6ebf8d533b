// Configuration loading and parsing (config/draft.toml).

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::draft::roster::RosterSort;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },
}

/// The assembled draft configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub data: DataPaths,
    pub sim: SimConfig,
}

/// Raw deserialization target for draft.toml.
#[derive(Debug, Deserialize)]
struct ConfigFile {
    data: DataPaths,
    #[serde(default)]
    sim: SimSection,
}

/// Paths to the externally supplied data files, relative to the
/// config base directory.
#[derive(Debug, Clone, Deserialize)]
pub struct DataPaths {
    pub teams: String,
    pub players: String,
}

#[derive(Debug, Default, Deserialize)]
struct SimSection {
    seed: Option<u64>,
    followed_team: Option<String>,
    roster_sort: Option<String>,
}

/// Simulation settings. All optional: a missing `[sim]` section means a
/// random seed, no followed team, and draft-order display.
#[derive(Debug, Clone)]
pub struct SimConfig {
    pub seed: Option<u64>,
    pub followed_team: Option<String>,
    pub roster_sort: RosterSort,
}

/// Load configuration from `config/draft.toml` relative to the given
/// base directory.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join("draft.toml");
    if !path.exists() {
        return Err(ConfigError::FileNotFound { path });
    }
    let text = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        source: e,
    })?;
    parse_config(&text, &path)
}

/// Load configuration relative to the current working directory.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|e| ConfigError::ReadError {
        path: PathBuf::from("."),
        source: e,
    })?;
    load_config_from(&cwd)
}

fn parse_config(text: &str, path: &Path) -> Result<Config, ConfigError> {
    let file: ConfigFile = toml::from_str(text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let roster_sort = match file.sim.roster_sort.as_deref() {
        None => RosterSort::DraftOrder,
        Some(key) => RosterSort::from_str_key(key).ok_or_else(|| ConfigError::ValidationError {
            field: "sim.roster_sort".into(),
            message: format!(
                "`{}` is not one of draft_order, position, rating",
                key
            ),
        })?,
    };

    Ok(Config {
        data: file.data,
        sim: SimConfig {
            seed: file.sim.seed,
            followed_team: file.sim.followed_team,
            roster_sort,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<Config, ConfigError> {
        parse_config(text, Path::new("config/draft.toml"))
    }

    #[test]
    fn full_config_parses() {
        let config = parse(
            r#"
            [data]
            teams = "assets/data/teams.json"
            players = "assets/data/players.json"

            [sim]
            seed = 42
            followed_team = "Arsenal"
            roster_sort = "rating"
            "#,
        )
        .unwrap();
        assert_eq!(config.data.teams, "assets/data/teams.json");
        assert_eq!(config.sim.seed, Some(42));
        assert_eq!(config.sim.followed_team.as_deref(), Some("Arsenal"));
        assert_eq!(config.sim.roster_sort, RosterSort::Rating);
    }

    #[test]
    fn sim_section_is_optional() {
        let config = parse(
            r#"
            [data]
            teams = "teams.json"
            players = "players.json"
            "#,
        )
        .unwrap();
        assert_eq!(config.sim.seed, None);
        assert_eq!(config.sim.followed_team, None);
        assert_eq!(config.sim.roster_sort, RosterSort::DraftOrder);
    }

    #[test]
    fn unknown_roster_sort_is_a_validation_error() {
        let err = parse(
            r#"
            [data]
            teams = "teams.json"
            players = "players.json"

            [sim]
            roster_sort = "salary"
            "#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ValidationError { field, .. } if field == "sim.roster_sort"
        ));
    }

    #[test]
    fn missing_data_section_is_a_parse_error() {
        let err = parse("[sim]\nseed = 1\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn load_config_from_missing_dir() {
        let err = load_config_from(Path::new("does/not/exist")).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound { .. }));
    }
}
