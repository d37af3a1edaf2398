//! Error taxonomy for the organize pipeline.
//!
//! # Responsibility
//! - Carry every filesystem failure together with the operation and path.
//! - Keep the taxonomy shallow: every variant aborts the whole run.
//!
//! # Invariants
//! - Malformed titles, unknown directory names and empty sections are never
//!   reported through this type.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::PathBuf;

pub type OrganizeResult<T> = Result<T, OrganizeError>;

/// Fatal error raised while scanning, relocating, reading or writing.
#[derive(Debug)]
pub enum OrganizeError {
    /// Scan root does not exist or is not a directory.
    InvalidRoot(PathBuf),
    /// Filesystem operation failed.
    Io {
        op: &'static str,
        path: PathBuf,
        source: io::Error,
    },
    /// Relocation target is already occupied by another file.
    DestinationExists(PathBuf),
}

impl OrganizeError {
    pub(crate) fn io(op: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            op,
            path: path.into(),
            source,
        }
    }

    /// Short stable code used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidRoot(_) => "invalid_root",
            Self::Io { .. } => "io_failed",
            Self::DestinationExists(_) => "destination_exists",
        }
    }
}

impl Display for OrganizeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRoot(path) => {
                write!(f, "scan root `{}` is not a directory", path.display())
            }
            Self::Io { op, path, source } => {
                write!(f, "{op} failed for `{}`: {source}", path.display())
            }
            Self::DestinationExists(path) => write!(
                f,
                "refusing to overwrite existing document `{}`",
                path.display()
            ),
        }
    }
}

impl Error for OrganizeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::InvalidRoot(_) => None,
            Self::DestinationExists(_) => None,
        }
    }
}
