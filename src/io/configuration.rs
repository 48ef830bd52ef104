//! Pipeline constants and runtime configuration defaults

// Image pipeline constants
/// Edge length in pixels of every palette entry and generated texture
pub const PACK_RESOLUTION: u32 = 64;

/// Saturation change applied to palette entries, in percent (-100 is full grayscale)
pub const SATURATION_ADJUSTMENT: f64 = -50.0;

// Compared against alpha expanded to 16 bits (a8 * 257), so only fully
// transparent template pixels fall below it
/// Alpha below this value leaves the stencil canvas transparent
pub const MASK_ALPHA_THRESHOLD: u16 = 50;

/// Opacity of the stencil when blended back over the template
pub const OVERLAY_OPACITY: f32 = 1.0;

// Bundle layout
/// Extension identifying template texture files
pub const TEXTURE_EXTENSION: &str = "png";
/// Nested path from the bundle root to the texture folder
pub const TEXTURE_SUBPATH: [&str; 4] = ["assets", "minecraft", "textures", "block"];
/// Metadata file copied verbatim into every bundle
pub const METADATA_FILE_NAME: &str = "pack.mcmeta";
/// Icon file copied verbatim into every bundle
pub const ICON_FILE_NAME: &str = "pack.png";

// Default locations, relative to the working directory
/// Template bundle read for metadata, icon and textures
pub const DEFAULT_TEMPLATE_DIR: &str = "1.21.9-Template";
/// Raw images the palette is built from
pub const DEFAULT_PICTURES_DIR: &str = "pictures";
/// Normalized palette store, regenerated on every run
pub const DEFAULT_PALETTE_DIR: &str = "targetPictures";
/// Directory the new bundle is created in
pub const DEFAULT_OUTPUT_ROOT: &str = ".";

// Destination naming
/// Upper bound on rename proposals before giving up
pub const MAX_RENAME_ATTEMPTS: usize = 8;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Logging
/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";
