//! Immutable in-memory palette loaded from the normalized palette store

use crate::io::error::{PackError, Result, invalid_parameter};
use crate::io::image::{display_name, list_directory, load_rgba};
use image::RgbaImage;
use std::path::Path;

/// A single normalized palette image and the file name it was stored under
#[derive(Clone, Debug)]
pub struct PaletteEntry {
    name: String,
    image: RgbaImage,
}

impl PaletteEntry {
    /// File name of the entry in the palette store
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Normalized pixel data
    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }
}

/// Ordered set of normalized images sharing one square resolution
///
/// Built once and only read afterwards; every entry is guaranteed to be
/// `resolution x resolution`.
#[derive(Clone, Debug)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
    resolution: u32,
}

impl Palette {
    /// Build a palette from named images, validating their dimensions
    ///
    /// # Errors
    ///
    /// Returns an error if `resolution` is zero or any image is not
    /// `resolution x resolution`
    pub fn from_images<I>(resolution: u32, images: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, RgbaImage)>,
    {
        if resolution == 0 {
            return Err(invalid_parameter(
                "resolution",
                &resolution,
                &"must be at least 1 pixel",
            ));
        }

        let entries = images
            .into_iter()
            .map(|(name, image)| {
                if image.dimensions() == (resolution, resolution) {
                    Ok(PaletteEntry { name, image })
                } else {
                    Err(PackError::DimensionMismatch {
                        name,
                        expected: (resolution, resolution),
                        found: image.dimensions(),
                    })
                }
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            entries,
            resolution,
        })
    }

    /// Decode every file of a palette store directory, in file-name order
    ///
    /// Subdirectories are skipped. Any file that fails to decode aborts the load.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be listed, a file cannot be
    /// decoded, or an entry has the wrong dimensions
    pub fn load_dir(dir: &Path, resolution: u32) -> Result<Self> {
        let mut images = Vec::new();
        for path in list_directory(dir)? {
            if path.is_dir() {
                continue;
            }
            images.push((display_name(&path), load_rgba(&path)?));
        }
        log::debug!("Loaded {} palette entries from {}", images.len(), dir.display());
        Self::from_images(resolution, images)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the palette has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Edge length shared by every entry
    pub const fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Entry at `index`, if in range
    pub fn get(&self, index: usize) -> Option<&PaletteEntry> {
        self.entries.get(index)
    }

    /// Iterate entries in store order
    pub fn iter(&self) -> impl Iterator<Item = &PaletteEntry> {
        self.entries.iter()
    }
}
