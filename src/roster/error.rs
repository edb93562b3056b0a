use std::num::ParseFloatError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    /// The records file has never been created.
    #[error("records file not found: {}", .0.display())]
    Absent(PathBuf),

    #[error("error parsing salary for employee with ID {id}: {source}")]
    MalformedSalary { id: i64, source: ParseFloatError },

    #[error("employee with ID {0} not found")]
    NotFound(i64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),
}

impl RosterError {
    pub fn is_absent(&self) -> bool {
        matches!(self, RosterError::Absent(_))
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
