//! Image decoding, encoding and directory listing helpers

use crate::io::configuration::TEXTURE_EXTENSION;
use crate::io::error::{PackError, Result, WithPath};
use image::{DynamicImage, ImageFormat, RgbaImage};
use std::path::{Path, PathBuf};

/// Decode an image file of any supported container into RGBA8
///
/// # Errors
///
/// Returns [`PackError::ImageLoad`] if the file cannot be opened or decoded
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path).map_err(|source| PackError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(img.to_rgba8())
}

/// Encode an RGBA8 image, choosing the container from the file extension
///
/// Containers without an alpha channel receive an RGB8 conversion first.
///
/// # Errors
///
/// Returns [`PackError::ImageExport`] if the extension is not a known format
/// or the file cannot be written
pub fn save_rgba(image: &RgbaImage, path: &Path) -> Result<()> {
    let export_error = |source| PackError::ImageExport {
        path: path.to_path_buf(),
        source,
    };

    let format = ImageFormat::from_path(path).map_err(export_error)?;
    if matches!(format, ImageFormat::Jpeg) {
        DynamicImage::ImageRgba8(image.clone())
            .to_rgb8()
            .save_with_format(path, format)
            .map_err(export_error)
    } else {
        image.save_with_format(path, format).map_err(export_error)
    }
}

/// Check whether a path names a template texture by its extension
pub fn is_texture_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(TEXTURE_EXTENSION))
}

/// List a directory's entries sorted by file name
///
/// # Errors
///
/// Returns [`PackError::FileSystem`] if the directory cannot be read
pub fn list_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = Vec::new();
    for entry in std::fs::read_dir(dir).with_path(dir, "list directory")? {
        entries.push(entry.with_path(dir, "read directory entry")?.path());
    }
    entries.sort();
    Ok(entries)
}

/// Final path component as an owned string, for naming images in errors and logs
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}
