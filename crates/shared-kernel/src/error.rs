// crates/shared-kernel/src/error.rs
use std::{fmt, path::PathBuf};

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum LsLongError {
    /// Adds human context and keeps the underlying error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<LsLongError>,
    },

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error(transparent)]
    Application(#[from] ApplicationError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, LsLongError>;

impl LsLongError {
    /// Process exit status for this failure.
    ///
    /// `255` and `254` are the unsigned renderings of the historical `-1` and
    /// `-2` codes for an inaccessible path and an unopenable directory.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Context { source, .. } => source.exit_code(),
            Self::Application(ApplicationError::PathInaccessible { .. }) => 255,
            Self::Application(ApplicationError::DirectoryUnreadable { .. }) => 254,
            Self::Application(ApplicationError::IdentityUnresolved { .. }) => 0,
            _ => 1,
        }
    }
}

/// Which identity database a lookup went to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityKind {
    User,
    Group,
}

impl fmt::Display for IdentityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => f.write_str("user"),
            Self::Group => f.write_str("group"),
        }
    }
}

/// Application-layer errors. Their messages are the user-facing diagnostics.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Error: {} not exist or inaccessible!", path.display())]
    PathInaccessible { path: PathBuf },

    #[error("Could not open directory {}", path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: Box<LsLongError>,
    },

    #[error("Couldn't get {kind} name")]
    IdentityUnresolved { kind: IdentityKind, id: u32 },
}

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to open directory '{path}': {source}")]
    DirectoryOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read metadata of '{path}': {source}")]
    MetadataProbe {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Failed to write listing: {0}")]
    Write(#[source] std::io::Error),
}

pub type PresentationResult<T> = std::result::Result<T, PresentationError>;

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<LsLongError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| LsLongError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }
}
