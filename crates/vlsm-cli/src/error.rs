//! Error types for the CLI

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Planner(#[from] vlsm_planner::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Prompt error: {0}")]
    Prompt(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Serialization(err.to_string())
    }
}

impl From<csv::Error> for CliError {
    fn from(err: csv::Error) -> Self {
        CliError::Serialization(err.to_string())
    }
}

impl From<dialoguer::Error> for CliError {
    fn from(err: dialoguer::Error) -> Self {
        CliError::Prompt(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CliError::Config("missing default_format".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing default_format");
    }

    #[test]
    fn test_error_from_planner() {
        let err: CliError = vlsm_planner::Error::InvalidHostCount(-2).into();
        assert!(matches!(err, CliError::Planner(_)));
        assert_eq!(err.to_string(), "Invalid host count -2, must not be negative");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let cli_err: CliError = io_err.into();
        assert!(matches!(cli_err, CliError::Io(_)));
    }

    #[test]
    fn test_error_from_anyhow() {
        let err: CliError = anyhow::anyhow!("cannot write report to plan.csv").into();
        assert!(matches!(err, CliError::Other(_)));
        assert_eq!(err.to_string(), "cannot write report to plan.csv");
    }
}
