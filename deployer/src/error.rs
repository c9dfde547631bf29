use std::path::PathBuf;

/// Errors raised while deploying contracts or syncing the frontend.
#[derive(Debug, thiserror::Error)]
pub enum DeployError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Unknown network: {0}")]
    UnknownNetwork(String),

    #[error("Unknown contract: {0}")]
    UnknownContract(String),

    #[error("Contract {name} is not deployed on {network}")]
    NotDeployed { name: String, network: String },

    #[error("Failed to run {command}: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    #[error("{command} exited with {status}: {stderr}")]
    ClientFailed {
        command: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("Unexpected output from {command}: missing {expected}")]
    UnexpectedOutput {
        command: String,
        expected: &'static str,
    },

    #[error("Verification request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Verification rejected: {0}")]
    Verification(String),
}

pub type Result<T> = std::result::Result<T, DeployError>;
