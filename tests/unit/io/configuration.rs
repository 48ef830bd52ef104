//! Tests for pipeline constants

#[cfg(test)]
mod tests {
    use palettepack::compositing::mask::expand_channel;
    use palettepack::io::configuration::{
        DEFAULT_PALETTE_DIR, DEFAULT_PICTURES_DIR, ICON_FILE_NAME, MASK_ALPHA_THRESHOLD,
        MAX_RENAME_ATTEMPTS, METADATA_FILE_NAME, OVERLAY_OPACITY, PACK_RESOLUTION,
        SATURATION_ADJUSTMENT, TEXTURE_EXTENSION, TEXTURE_SUBPATH,
    };

    // Tests the fixed resolution value
    #[test]
    fn test_pack_resolution() {
        assert_eq!(PACK_RESOLUTION, 64);
    }

    // Tests the desaturation halves saturation
    #[test]
    fn test_saturation_adjustment() {
        assert!((SATURATION_ADJUSTMENT + 50.0).abs() < f64::EPSILON);
    }

    // Tests the threshold sits between alpha 0 and alpha 1 on the 16-bit scale
    #[test]
    fn test_mask_threshold_scale() {
        assert_eq!(MASK_ALPHA_THRESHOLD, 50);
        assert!(expand_channel(0) < MASK_ALPHA_THRESHOLD);
        assert!(expand_channel(1) >= MASK_ALPHA_THRESHOLD);
    }

    // Tests the stencil is blended at full opacity
    #[test]
    fn test_overlay_opacity() {
        assert!((OVERLAY_OPACITY - 1.0).abs() < f32::EPSILON);
    }

    // Tests bundle layout names
    #[test]
    fn test_layout_names() {
        assert_eq!(TEXTURE_EXTENSION, "png");
        assert_eq!(TEXTURE_SUBPATH, ["assets", "minecraft", "textures", "block"]);
        assert_eq!(METADATA_FILE_NAME, "pack.mcmeta");
        assert_eq!(ICON_FILE_NAME, "pack.png");
        assert_ne!(DEFAULT_PICTURES_DIR, DEFAULT_PALETTE_DIR);
    }

    // Tests the rename loop is bounded
    #[test]
    fn test_max_rename_attempts() {
        assert!(MAX_RENAME_ATTEMPTS > 1);
    }
}
