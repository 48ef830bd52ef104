//! Tests for opacity mask construction and stencilling

#[cfg(test)]
mod tests {
    use crate::{half_silhouette, solid};
    use image::{Rgba, RgbaImage};
    use palettepack::PackError;
    use palettepack::compositing::mask::{OpacityMask, expand_channel};
    use palettepack::io::configuration::MASK_ALPHA_THRESHOLD;

    // Tests 8-bit channels expand by bit replication
    #[test]
    fn test_expand_channel() {
        assert_eq!(expand_channel(0), 0);
        assert_eq!(expand_channel(1), 257);
        assert_eq!(expand_channel(0xAB), 0xABAB);
        assert_eq!(expand_channel(255), u16::MAX);
    }

    // Tests only fully transparent pixels fall below the default threshold
    #[test]
    fn test_default_threshold_boundary() {
        let image = RgbaImage::from_fn(3, 1, |x, _| Rgba([0, 0, 0, [0, 1, 255][x as usize]]));
        let mask = OpacityMask::from_alpha(&image, MASK_ALPHA_THRESHOLD);

        assert!(!mask.is_masked(0, 0));
        assert!(mask.is_masked(1, 0));
        assert!(mask.is_masked(2, 0));
    }

    // Tests custom thresholds compare against the expanded scale
    #[test]
    fn test_custom_threshold() {
        let image = RgbaImage::from_fn(2, 1, |x, _| Rgba([0, 0, 0, [127, 128][x as usize]]));
        let mask = OpacityMask::from_alpha(&image, expand_channel(128));

        assert!(!mask.is_masked(0, 0));
        assert!(mask.is_masked(1, 0));
    }

    // Tests mask geometry follows the silhouette
    #[test]
    fn test_mask_matches_silhouette() {
        let mask = OpacityMask::from_alpha(&half_silhouette(8, [1, 2, 3]), MASK_ALPHA_THRESHOLD);

        assert_eq!(mask.dimensions(), (8, 8));
        assert_eq!(mask.masked_count(), 32);
        assert!(mask.is_masked(3, 7));
        assert!(!mask.is_masked(4, 0));
        assert!(!mask.is_masked(100, 100));
    }

    // Tests the stencil copies masked pixels and leaves the rest transparent
    #[test]
    fn test_stencil_cuts_out_silhouette() {
        let mask = OpacityMask::from_alpha(&half_silhouette(8, [1, 2, 3]), MASK_ALPHA_THRESHOLD);
        let source = RgbaImage::from_fn(8, 8, |x, y| Rgba([x as u8, y as u8, 99, 255]));

        let canvas = mask.stencil(&source).unwrap();

        for (x, y, pixel) in canvas.enumerate_pixels() {
            if x < 4 {
                assert_eq!(pixel, source.get_pixel(x, y));
            } else {
                assert_eq!(pixel.0, [0, 0, 0, 0]);
            }
        }
    }

    // Tests the source's own alpha is copied as-is
    #[test]
    fn test_stencil_keeps_source_alpha() {
        let mask = OpacityMask::from_alpha(&solid(2, [0, 0, 0, 255]), MASK_ALPHA_THRESHOLD);
        let canvas = mask.stencil(&solid(2, [10, 20, 30, 40])).unwrap();
        assert_eq!(canvas.get_pixel(1, 1).0, [10, 20, 30, 40]);
    }

    // Tests mismatched stencil sources are rejected
    #[test]
    fn test_stencil_dimension_mismatch() {
        let mask = OpacityMask::from_alpha(&solid(4, [0, 0, 0, 255]), MASK_ALPHA_THRESHOLD);
        assert!(matches!(
            mask.stencil(&solid(5, [0, 0, 0, 255])),
            Err(PackError::DimensionMismatch { .. })
        ));
    }
}
