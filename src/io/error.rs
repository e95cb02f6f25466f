//! Error types for pattern construction, task assembly and dataset output

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation operations
#[derive(Debug)]
pub enum GenerationError {
    /// Grid size cannot be split into two mirrored halves
    ///
    /// Symmetry needs an exact left/right split with no center column,
    /// so only positive even sizes are accepted.
    InvalidGridSize {
        /// The rejected grid size
        grid_size: usize,
    },

    /// A built pattern failed the post-construction mirror check
    SymmetryViolation {
        /// Row of the mismatched pair
        row: usize,
        /// Left-half column of the mismatched pair
        col: usize,
        /// Right-half column that should mirror `col`
        mirror_col: usize,
    },

    /// Configuration parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save a rendered frame or animation to disk
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

    /// Task metadata could not be serialized
    Serialization {
        /// Task whose metadata was being written
        task_id: String,
        /// Underlying serializer error
        source: serde_json::Error,
    },
}

impl GenerationError {
    /// Whether this error must abort the whole run instead of skipping one task
    ///
    /// A symmetry mismatch means the builder itself is broken, so every later
    /// pattern is suspect too.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::SymmetryViolation { .. })
    }
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGridSize { grid_size } => {
                write!(
                    f,
                    "Grid size must be a positive even number for symmetry, got {grid_size}"
                )
            }
            Self::SymmetryViolation {
                row,
                col,
                mirror_col,
            } => {
                write!(
                    f,
                    "Symmetry violation at ({row}, {col}) vs ({row}, {mirror_col})"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
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
            Self::Serialization { task_id, source } => {
                write!(f, "Failed to serialize metadata for task '{task_id}': {source}")
            }
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::Serialization { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, GenerationError>;

impl From<image::ImageError> for GenerationError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for GenerationError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<serde_json::Error> for GenerationError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            task_id: String::from("<unknown>"),
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GenerationError {
    GenerationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error bound to the path it concerns
pub fn file_system(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> GenerationError {
    GenerationError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
