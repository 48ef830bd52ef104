//! Themed texture pack generation from a folder of arbitrary pictures
//!
//! Raw pictures are normalized into a small, muted palette. Each template
//! texture is then resized, and its opaque silhouette is filled with a randomly
//! chosen palette entry, producing a new pack with the template's layout.

#![forbid(unsafe_code)]

/// Alpha-masked compositing of palette entries onto template textures
pub mod compositing;
/// Input/output operations, configuration and error handling
pub mod io;
/// Colour-space conversion and resampling
pub mod math;
/// Palette normalization, storage and selection
pub mod palette;

pub use io::error::{ErrorKind, PackError, Result};
