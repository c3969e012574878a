//! Error types and error handling

use std::path::PathBuf;
use thiserror::Error;

/// Scaffolding error type
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Template file missing or unreadable
    #[error("Failed to read template {}: {source}", path.display())]
    TemplateRead {
        /// Template path that was read
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },

    /// Generated content could not be written back
    #[error("Failed to write file {}: {source}", path.display())]
    Write {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },

    /// Module descriptor file missing or unreadable
    #[error("Failed to read module descriptors {}: {source}", path.display())]
    ModuleRead {
        /// Descriptor file path
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },

    /// Module descriptor file is not a JSON array of descriptors
    #[error("Invalid module descriptors in {}: {source}", path.display())]
    ModuleParse {
        /// Descriptor file path
        path: PathBuf,
        /// Underlying JSON failure
        source: serde_json::Error,
    },

    /// More than one module declares a complete auth descriptor
    #[error("Only one module may declare auth identifier and password, found: {}", names.join(", "))]
    MultipleAuthModules {
        /// Singular names of every qualifying module
        names: Vec<String>,
    },

    /// Token alternation could not be compiled
    #[error("Invalid placeholder pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<figment::Error> for ScaffoldError {
    fn from(err: figment::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result alias used across the crate
pub type Result<T, E = ScaffoldError> = std::result::Result<T, E>;
