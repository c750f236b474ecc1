use tbc_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("roster parse error: {0}")]
    Parse(String),

    #[error("invalid timestamp: {0}")]
    Time(#[from] CoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RosterResult<T> = Result<T, RosterError>;
