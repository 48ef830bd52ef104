//! Error types and path context for pack generation

use std::fmt;
use std::path::{Path, PathBuf};

/// Broad failure classes reported to the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Listing, opening, decoding, encoding or syncing failed
    Io,
    /// A precondition of the pipeline does not hold
    InvalidState,
    /// The operator declined to continue
    UserAbort,
}

/// Main error type for all pack generation operations
#[derive(Debug)]
pub enum PackError {
    /// Failed to decode an image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Failed to encode an image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
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

    /// Reading from or writing to the operator console failed
    Prompt {
        /// Description of the interaction that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Compositing was requested against a palette with no entries
    EmptyPalette {
        /// Palette store the entries were expected in
        location: PathBuf,
    },

    /// An image does not have the dimensions the pipeline requires
    DimensionMismatch {
        /// Name of the offending image
        name: String,
        /// Required (width, height)
        expected: (u32, u32),
        /// Actual (width, height)
        found: (u32, u32),
    },

    /// A random index provider returned an index outside the palette
    PaletteIndexOutOfRange {
        /// The invalid index
        index: usize,
        /// Number of palette entries
        len: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// The operator gave no answer to a rename confirmation
    DestinationUnconfirmed {
        /// Name that was proposed
        proposed: String,
    },

    /// Every proposed destination name was already taken
    RenameAttemptsExhausted {
        /// Number of names tried
        attempts: usize,
    },

    /// The operator explicitly declined a rename confirmation
    UserAborted {
        /// Name that was proposed
        proposed: String,
        /// Answer given by the operator
        answer: String,
    },
}

impl PackError {
    /// Classify this error into its operator-facing failure class
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::ImageLoad { .. }
            | Self::ImageExport { .. }
            | Self::FileSystem { .. }
            | Self::Prompt { .. } => ErrorKind::Io,
            Self::EmptyPalette { .. }
            | Self::DimensionMismatch { .. }
            | Self::PaletteIndexOutOfRange { .. }
            | Self::InvalidParameter { .. }
            | Self::DestinationUnconfirmed { .. }
            | Self::RenameAttemptsExhausted { .. } => ErrorKind::InvalidState,
            Self::UserAborted { .. } => ErrorKind::UserAbort,
        }
    }
}

impl fmt::Display for PackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
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
            Self::Prompt { operation, source } => {
                write!(f, "Console error during {operation}: {source}")
            }
            Self::EmptyPalette { location } => {
                write!(
                    f,
                    "Palette at '{}' has no entries to composite with",
                    location.display()
                )
            }
            Self::DimensionMismatch {
                name,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Image '{name}' is {}x{} but {}x{} is required",
                    found.0, found.1, expected.0, expected.1
                )
            }
            Self::PaletteIndexOutOfRange { index, len } => {
                write!(
                    f,
                    "Palette index {index} is out of bounds (palette has {len} entries)"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::DestinationUnconfirmed { proposed } => {
                write!(f, "No confirmation given for renamed pack '{proposed}'")
            }
            Self::RenameAttemptsExhausted { attempts } => {
                write!(f, "No free pack name found after {attempts} attempts")
            }
            Self::UserAborted { proposed, answer } => {
                write!(
                    f,
                    "Renaming pack to '{proposed}' was declined (answered '{answer}')"
                )
            }
        }
    }
}

impl std::error::Error for PackError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } | Self::Prompt { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for pack generation results
pub type Result<T> = std::result::Result<T, PackError>;

/// Attaches the path and operation to a bare I/O result
pub trait WithPath<T> {
    /// Convert an I/O failure into a [`PackError::FileSystem`] naming `path`
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::io::Result<T> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| PackError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

impl From<image::ImageError> for PackError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for PackError {
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
) -> PackError {
    PackError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
