// Loading and validation of the externally supplied team and player data.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::draft::player::{Player, Team};
use crate::draft::position::Position;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("data file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to read data file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse data file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("no teams defined in {path}")]
    NoTeams { path: PathBuf },

    #[error("duplicate team name: {name}")]
    DuplicateTeam { name: String },

    #[error("duplicate player name: {name}")]
    DuplicatePlayer { name: String },

    #[error("unknown position `{position}` for player {name}")]
    UnknownPosition { name: String, position: String },
}

/// Wrapper for the top-level `teams` key in teams.json.
#[derive(Debug, Deserialize)]
struct TeamsFile {
    teams: Vec<Team>,
}

/// Raw player record as it appears in players.json. The position label
/// is parsed and validated separately so a bad label names the player
/// instead of surfacing as a generic parse failure.
#[derive(Debug, Deserialize)]
struct RawPlayer {
    name: String,
    position: String,
    rating: i32,
}

/// Load the team list from a `{ "teams": [...] }` JSON file.
///
/// Validation: the list must be non-empty and team names unique. Beyond
/// this boundary the core assumes validated input and does not revalidate.
pub fn load_teams(path: &Path) -> Result<Vec<Team>, DataError> {
    let text = read_file(path)?;
    let file: TeamsFile = serde_json::from_str(&text).map_err(|e| DataError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let teams = parse_teams(file.teams)?;
    if teams.is_empty() {
        return Err(DataError::NoTeams {
            path: path.to_path_buf(),
        });
    }
    info!(count = teams.len(), path = %path.display(), "teams loaded");
    Ok(teams)
}

/// Load the player pool from a JSON array of `{name, position, rating}`
/// records. Player names must be unique and every position label must be
/// one of the ten known labels; a player with an unrecognised label would
/// never be eligible for any pick, so it is rejected here.
pub fn load_players(path: &Path) -> Result<Vec<Player>, DataError> {
    let text = read_file(path)?;
    let raw: Vec<RawPlayer> = serde_json::from_str(&text).map_err(|e| DataError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let players = parse_players(raw)?;
    info!(count = players.len(), path = %path.display(), "players loaded");
    Ok(players)
}

fn read_file(path: &Path) -> Result<String, DataError> {
    if !path.exists() {
        return Err(DataError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    std::fs::read_to_string(path).map_err(|e| DataError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })
}

fn parse_teams(teams: Vec<Team>) -> Result<Vec<Team>, DataError> {
    let mut seen = HashSet::new();
    for team in &teams {
        if !seen.insert(team.name.as_str()) {
            return Err(DataError::DuplicateTeam {
                name: team.name.clone(),
            });
        }
    }
    Ok(teams)
}

fn parse_players(raw: Vec<RawPlayer>) -> Result<Vec<Player>, DataError> {
    let mut seen = HashSet::new();
    let mut players = Vec::with_capacity(raw.len());
    for record in raw {
        if !seen.insert(record.name.clone()) {
            return Err(DataError::DuplicatePlayer { name: record.name });
        }
        let position =
            Position::from_str_pos(&record.position).ok_or_else(|| DataError::UnknownPosition {
                name: record.name.clone(),
                position: record.position.clone(),
            })?;
        players.push(Player {
            name: record.name,
            position,
            rating: record.rating,
        });
    }
    Ok(players)
}
