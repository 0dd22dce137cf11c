//! Error types for tollfee

use chrono::NaiveTime;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// Fee schedule construction errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Band {start}-{end} ends before it starts")]
    InvalidBand { start: NaiveTime, end: NaiveTime },

    #[error("Band {first_start}-{first_end} overlaps band {second_start}-{second_end}")]
    OverlappingBands {
        first_start: NaiveTime,
        first_end: NaiveTime,
        second_start: NaiveTime,
        second_end: NaiveTime,
    },

    #[error("Invalid time of day '{0}', expected HH:MM")]
    InvalidTime(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Schedule error: {0}")]
    Schedule(#[from] ScheduleError),

    #[error("Unknown vehicle category: {0}")]
    UnknownVehicleCategory(String),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
