//! Error and warning types for maze generation and export

use std::fmt;
use std::path::PathBuf;

use crate::spatial::Position;

/// Main error type for all fallible maze operations
#[derive(Debug)]
pub enum MazeError {
    /// Configuration parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A carved grid failed the spanning tree check
    InvalidMaze {
        /// Which property was violated
        reason: String,
    },

    /// Failed to save a rendered maze to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidMaze { reason } => {
                write!(f, "Generated maze is not perfect: {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for maze results
pub type Result<T> = std::result::Result<T, MazeError>;

impl From<image::ImageError> for MazeError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for MazeError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MazeError {
    MazeError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Non-fatal condition recovered during carving
///
/// Warnings never stop generation; they are collected in the carve report so
/// the caller decides whether and how to surface them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarveWarning {
    /// Requested start lies outside the grid and was replaced by the origin
    StartOutOfBounds {
        /// Start position as requested
        requested: Position,
        /// Grid width at the time of the request
        width: usize,
        /// Grid height at the time of the request
        height: usize,
    },
}

impl fmt::Display for CarveWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartOutOfBounds {
                requested,
                width,
                height,
            } => write!(
                f,
                "Start position {requested} is out of bounds for a {width}x{height} maze, using (0, 0)"
            ),
        }
    }
}
