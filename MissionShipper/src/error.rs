//! Error types for the mission shipper

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// The error type for mission shipper operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory traversal error.
    #[error("directory walk error: {0}")]
    WalkDirError(String),

    /// Invalid file path.
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// A tree copy was asked to write into a directory that already exists.
    #[error("destination already exists: {path}")]
    DestinationExists {
        /// The pre-existing destination.
        path: PathBuf,
    },

    // ==================== Mission Errors ====================
    /// A mission folder has no `mission.sqm`.
    #[error("mission description not found: {path}")]
    MissionDescriptionNotFound {
        /// The expected path of the description file.
        path: PathBuf,
    },

    // ==================== Template Errors ====================
    /// A `.j2` file has no context provider registered for it.
    #[error("no render context registered for template '{template}'")]
    UnregisteredTemplate {
        /// Template path relative to the template root.
        template: String,
    },

    /// Tera failed to render a template.
    #[error("failed to render template '{template}': {source}")]
    TemplateRender {
        /// Template path relative to the template root.
        template: String,
        /// The underlying Tera error.
        #[source]
        source: tera::Error,
    },

    /// A context value could not be converted into a Tera context.
    #[error("failed to build template context: {0}")]
    ContextSerialization(#[source] tera::Error),

    // ==================== Archiver Errors ====================
    /// The archiver executable could not be started.
    #[error("failed to run archiver '{program}': {source}")]
    ArchiverSpawn {
        /// The program that was launched.
        program: PathBuf,
        /// The spawn error.
        #[source]
        source: std::io::Error,
    },

    /// The archiver exited with a non-zero status.
    #[error("archiver command `{command}` failed with {status}: {stderr}")]
    ArchiverFailed {
        /// The full command line.
        command: String,
        /// The exit status reported by the OS.
        status: ExitStatus,
        /// Captured standard error, trimmed.
        stderr: String,
    },
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::WalkDirError(err.to_string())
    }
}

/// A specialized Result type for mission shipper operations.
pub type Result<T> = std::result::Result<T, Error>;
