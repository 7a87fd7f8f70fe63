use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid seed data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate profile id in seed: {0}")]
    DuplicateProfileId(String),

    #[error("Duplicate group id in seed: {0}")]
    DuplicateGroupId(String),
}

pub type SeedResult<T> = Result<T, SeedError>;
