//! Palette normalization: arbitrary images to small, muted squares

use crate::io::configuration::{PACK_RESOLUTION, SATURATION_ADJUSTMENT};
use crate::io::error::{Result, WithPath};
use crate::io::image::{display_name, list_directory, load_rgba, save_rgba};
use crate::math::color::adjust_saturation;
use crate::math::resample::resize_square;
use image::RgbaImage;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Step of a directory normalization pass
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NormalizeEvent<'a> {
    /// Number of sources found, reported once before any is processed
    Listed(usize),
    /// A source is about to be normalized
    Started(&'a Path),
    /// A source has been written to the store
    Finished(&'a Path),
}

/// Resizes and desaturates raw images into palette entries
#[derive(Clone, Copy, Debug)]
pub struct PaletteNormalizer {
    resolution: u32,
    saturation_adjustment: f64,
}

impl Default for PaletteNormalizer {
    fn default() -> Self {
        Self::new(PACK_RESOLUTION, SATURATION_ADJUSTMENT)
    }
}

impl PaletteNormalizer {
    /// Create a normalizer producing `resolution` squares with the given saturation change
    pub const fn new(resolution: u32, saturation_adjustment: f64) -> Self {
        Self {
            resolution,
            saturation_adjustment,
        }
    }

    /// Edge length of normalized images
    pub const fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Resize then desaturate, in that order
    pub fn normalize_image(&self, image: &RgbaImage) -> RgbaImage {
        let resized = resize_square(image, self.resolution);
        adjust_saturation(&resized, self.saturation_adjustment)
    }

    /// Normalize one raw image into `destination` under the same file name
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be decoded or the result cannot be written
    pub fn normalize_file(&self, source: &Path, destination: &Path) -> Result<PathBuf> {
        let image = load_rgba(source)?;
        let output_path = destination.join(display_name(source));
        save_rgba(&self.normalize_image(&image), &output_path)?;
        log::debug!("Normalized {} -> {}", source.display(), output_path.display());
        Ok(output_path)
    }

    /// Normalize every entry of `source` into `destination`
    ///
    /// Stops at the first failure; files written before it are left in place.
    ///
    /// # Errors
    ///
    /// Returns an error if either directory is unusable or any entry fails to normalize
    pub fn normalize_directory(&self, source: &Path, destination: &Path) -> Result<Vec<PathBuf>> {
        self.normalize_directory_with(source, destination, |_| {})
    }

    /// [`Self::normalize_directory`], reporting each step to `on_event`
    ///
    /// # Errors
    ///
    /// Returns an error if either directory is unusable or any entry fails to normalize
    pub fn normalize_directory_with<F>(
        &self,
        source: &Path,
        destination: &Path,
        mut on_event: F,
    ) -> Result<Vec<PathBuf>>
    where
        F: FnMut(NormalizeEvent<'_>),
    {
        std::fs::create_dir_all(destination).with_path(destination, "create directory")?;
        let sources = list_directory(source)?;
        on_event(NormalizeEvent::Listed(sources.len()));

        let mut written = Vec::with_capacity(sources.len());
        for path in &sources {
            on_event(NormalizeEvent::Started(path));
            written.push(self.normalize_file(path, destination)?);
            on_event(NormalizeEvent::Finished(path));
        }
        Ok(written)
    }
}

/// Delete palette store files whose raw source no longer exists
///
/// Returns the removed paths. Subdirectories are left alone.
///
/// # Errors
///
/// Returns an error if either directory cannot be listed or a file cannot be removed
pub fn prune_stale(source: &Path, store: &Path) -> Result<Vec<PathBuf>> {
    let current: HashSet<String> = list_directory(source)?
        .iter()
        .map(|path| display_name(path))
        .collect();

    let mut removed = Vec::new();
    for path in list_directory(store)? {
        if path.is_dir() || current.contains(&display_name(&path)) {
            continue;
        }
        std::fs::remove_file(&path).with_path(&path, "remove stale palette entry")?;
        log::info!("Removed stale palette entry {}", path.display());
        removed.push(path);
    }
    Ok(removed)
}
