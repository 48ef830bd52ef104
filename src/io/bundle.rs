//! Template bundle layout, verbatim file copies and output tree creation

use crate::io::configuration::{ICON_FILE_NAME, METADATA_FILE_NAME, TEXTURE_SUBPATH};
use crate::io::error::{Result, WithPath};
use crate::io::image::{is_texture_file, list_directory};
use std::fs::File;
use std::path::{Path, PathBuf};

/// Locations inside a template bundle
#[derive(Clone, Debug)]
pub struct TemplateLayout {
    root: PathBuf,
}

impl TemplateLayout {
    /// Describe the template bundle rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Bundle root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Metadata file at the bundle root
    pub fn metadata_path(&self) -> PathBuf {
        self.root.join(METADATA_FILE_NAME)
    }

    /// Icon image at the bundle root
    pub fn icon_path(&self) -> PathBuf {
        self.root.join(ICON_FILE_NAME)
    }

    /// Folder holding the template textures
    pub fn texture_dir(&self) -> PathBuf {
        texture_dir_under(&self.root)
    }

    /// Texture files of the template, sorted by name
    ///
    /// Subdirectories and files without the texture extension are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the texture folder cannot be listed
    pub fn list_textures(&self) -> Result<Vec<PathBuf>> {
        Ok(list_directory(&self.texture_dir())?
            .into_iter()
            .filter(|path| !path.is_dir() && is_texture_file(path))
            .collect())
    }
}

/// Texture folder path beneath a bundle root
pub fn texture_dir_under(root: &Path) -> PathBuf {
    TEXTURE_SUBPATH
        .iter()
        .fold(root.to_path_buf(), |path, segment| path.join(segment))
}

/// Copy `src` to `dst` byte for byte and flush it to disk
///
/// Returns the number of bytes copied.
///
/// # Errors
///
/// Returns an error if the source cannot be opened, the destination cannot
/// be created, or the copy or sync fails
pub fn copy_file(src: &Path, dst: &Path) -> Result<u64> {
    let mut source = File::open(src).with_path(src, "open")?;
    let mut destination = File::create(dst).with_path(dst, "create")?;
    let copied = std::io::copy(&mut source, &mut destination).with_path(dst, "copy")?;
    destination.sync_all().with_path(dst, "sync")?;
    Ok(copied)
}

/// Create the nested texture folder inside a freshly created bundle root
///
/// Each level is created individually and must not exist yet.
///
/// # Errors
///
/// Returns an error if any level already exists or cannot be created
pub fn create_texture_tree(bundle_root: &Path) -> Result<PathBuf> {
    let mut path = bundle_root.to_path_buf();
    for segment in TEXTURE_SUBPATH {
        path.push(segment);
        std::fs::create_dir(&path).with_path(&path, "create directory")?;
    }
    Ok(path)
}
