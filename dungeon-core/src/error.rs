//! Error types.
//!
//! Store mutators never fail; these cover wiring the stores together,
//! catalog lookups that a caller needs answered, and configuration.

use crate::world::DungeonId;
use thiserror::Error;

/// Errors from assembling or driving the game store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("{0} store was not provided to the game store")]
    MissingStore(&'static str),

    #[error("Unknown dungeon: {0}")]
    UnknownDungeon(DungeonId),
}

/// Errors from loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
