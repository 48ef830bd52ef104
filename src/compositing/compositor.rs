//! Masked compositing of template textures with palette entries

use crate::compositing::mask::OpacityMask;
use crate::compositing::overlay::overlay_center;
use crate::io::configuration::{MASK_ALPHA_THRESHOLD, OVERLAY_OPACITY, PACK_RESOLUTION};
use crate::io::error::{PackError, Result, invalid_parameter};
use crate::math::resample::resize_square;
use crate::palette::{IndexSource, Palette};
use image::RgbaImage;
use std::path::PathBuf;

/// Parameters controlling the masking and blending steps
#[derive(Clone, Copy, Debug)]
pub struct CompositorConfig {
    /// Edge length of generated textures
    pub resolution: u32,
    /// Minimum 16-bit expanded template alpha that receives palette content
    pub alpha_threshold: u16,
    /// Opacity of the stencil when blended back over the template
    pub opacity: f32,
}

impl Default for CompositorConfig {
    fn default() -> Self {
        Self {
            resolution: PACK_RESOLUTION,
            alpha_threshold: MASK_ALPHA_THRESHOLD,
            opacity: OVERLAY_OPACITY,
        }
    }
}

/// Result of compositing one template texture
#[derive(Clone, Debug)]
pub struct Composite {
    /// Generated texture, always `resolution x resolution`
    pub image: RgbaImage,
    /// Index of the palette entry whose pixels fill the template silhouette
    pub palette_index: usize,
}

/// Paints palette entries into the opaque silhouette of template textures
#[derive(Clone, Copy, Debug, Default)]
pub struct MaskCompositor {
    config: CompositorConfig,
}

impl MaskCompositor {
    /// Create a compositor with the given configuration
    pub const fn new(config: CompositorConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub const fn config(&self) -> &CompositorConfig {
        &self.config
    }

    /// Produce one output texture from `template` and a randomly chosen palette entry
    ///
    /// The template is resized, its alpha becomes the mask, the chosen entry is
    /// stencilled through the mask onto a transparent canvas, and the canvas is
    /// blended over the resized template. Each call draws exactly one index
    /// from `selector`, so entries are reused freely across calls.
    ///
    /// The blend is source-over. Opaque palette pixels replace the template
    /// pixel beneath them exactly. Translucent palette pixels are mixed with it,
    /// and fully transparent ones leave it unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The palette is empty
    /// - The palette resolution differs from the compositor resolution
    /// - `selector` returns an index outside the palette
    pub fn composite<S>(
        &self,
        template: &RgbaImage,
        palette: &Palette,
        selector: &mut S,
    ) -> Result<Composite>
    where
        S: IndexSource + ?Sized,
    {
        if palette.is_empty() {
            return Err(PackError::EmptyPalette {
                location: PathBuf::from("<in-memory>"),
            });
        }
        if palette.resolution() != self.config.resolution {
            return Err(invalid_parameter(
                "palette resolution",
                &palette.resolution(),
                &format!("compositor expects {}", self.config.resolution),
            ));
        }

        let resized = resize_square(template, self.config.resolution);

        let palette_index = selector.next_index(palette.len());
        let entry = palette
            .get(palette_index)
            .ok_or_else(|| PackError::PaletteIndexOutOfRange {
                index: palette_index,
                len: palette.len(),
            })?;

        let mask = OpacityMask::from_alpha(&resized, self.config.alpha_threshold);
        let canvas = mask.stencil(entry.image())?;
        let image = overlay_center(&resized, &canvas, self.config.opacity);

        Ok(Composite {
            image,
            palette_index,
        })
    }
}
