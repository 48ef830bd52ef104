//! Tests for palette normalization and stale entry pruning

#[cfg(test)]
mod tests {
    use crate::solid;
    use image::{Rgba, RgbaImage};
    use palettepack::io::configuration::PACK_RESOLUTION;
    use palettepack::math::color::chroma;
    use palettepack::math::resample::resize_square;
    use palettepack::palette::{NormalizeEvent, PaletteNormalizer};
    use palettepack::palette::normalizer::prune_stale;
    use std::fs;
    use tempfile::TempDir;

    fn gradient(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            Rgba([(x % 256) as u8, (y % 256) as u8, 180, 255])
        })
    }

    // Tests normalized images are square at the pack resolution
    #[test]
    fn test_normalize_image_dimensions() {
        let normalizer = PaletteNormalizer::default();
        let out = normalizer.normalize_image(&gradient(200, 90));
        assert_eq!(out.dimensions(), (PACK_RESOLUTION, PACK_RESOLUTION));
        assert_eq!(normalizer.resolution(), PACK_RESOLUTION);
    }

    // Tests normalization never raises chroma relative to the resized input
    #[test]
    fn test_normalize_image_desaturates() {
        let normalizer = PaletteNormalizer::new(32, -50.0);
        let source = gradient(100, 100);
        let resized = resize_square(&source, 32);
        let out = normalizer.normalize_image(&source);

        for (before, after) in resized.pixels().zip(out.pixels()) {
            assert!(chroma(*after) <= chroma(*before));
        }
    }

    // Tests directory normalization writes one same-named file per source
    #[test]
    fn test_normalize_directory_writes_same_names() {
        let raw = TempDir::new().unwrap();
        let store = TempDir::new().unwrap();
        gradient(120, 40).save(raw.path().join("a.png")).unwrap();
        solid(10, [255, 0, 0, 255]).save(raw.path().join("b.png")).unwrap();

        let written = PaletteNormalizer::new(16, -50.0)
            .normalize_directory(raw.path(), store.path())
            .unwrap();

        assert_eq!(
            written,
            vec![store.path().join("a.png"), store.path().join("b.png")]
        );
        for path in &written {
            let img = image::open(path).unwrap();
            assert_eq!((img.width(), img.height()), (16, 16));
        }
    }

    // Tests existing entries with the same name are overwritten
    #[test]
    fn test_normalize_directory_overwrites() {
        let raw = TempDir::new().unwrap();
        let store = TempDir::new().unwrap();
        solid(8, [0, 0, 255, 255]).save(raw.path().join("a.png")).unwrap();
        solid(3, [9, 9, 9, 255]).save(store.path().join("a.png")).unwrap();

        PaletteNormalizer::new(16, -50.0)
            .normalize_directory(raw.path(), store.path())
            .unwrap();

        let img = image::open(store.path().join("a.png")).unwrap();
        assert_eq!(img.width(), 16);
    }

    // Tests a single undecodable file aborts the whole pass
    #[test]
    fn test_normalize_directory_fails_fast() {
        let raw = TempDir::new().unwrap();
        let store = TempDir::new().unwrap();
        fs::write(raw.path().join("a_broken.png"), "not an image").unwrap();
        solid(8, [0, 0, 255, 255]).save(raw.path().join("b.png")).unwrap();

        let result = PaletteNormalizer::default().normalize_directory(raw.path(), store.path());

        assert!(result.is_err());
        assert!(!store.path().join("b.png").exists());
    }

    // Tests each source is reported as started then finished, in listing order
    #[test]
    fn test_normalize_directory_with_events() {
        let raw = TempDir::new().unwrap();
        let store = TempDir::new().unwrap();
        solid(8, [0, 0, 255, 255]).save(raw.path().join("b.png")).unwrap();
        solid(8, [255, 0, 0, 255]).save(raw.path().join("a.png")).unwrap();

        let mut events = Vec::new();
        let written = PaletteNormalizer::new(16, -50.0)
            .normalize_directory_with(raw.path(), store.path(), |event| {
                events.push(match event {
                    NormalizeEvent::Listed(count) => format!("listed {count}"),
                    NormalizeEvent::Started(path) => format!("start {}", path.display()),
                    NormalizeEvent::Finished(path) => format!("done {}", path.display()),
                });
            })
            .unwrap();

        let a = raw.path().join("a.png");
        let b = raw.path().join("b.png");
        assert_eq!(
            events,
            vec![
                "listed 2".to_string(),
                format!("start {}", a.display()),
                format!("done {}", a.display()),
                format!("start {}", b.display()),
                format!("done {}", b.display()),
            ]
        );
        assert_eq!(written.len(), 2);
    }

    // Tests a failing source is started but never reported as finished
    #[test]
    fn test_normalize_directory_with_stops_on_failure() {
        let raw = TempDir::new().unwrap();
        let store = TempDir::new().unwrap();
        fs::write(raw.path().join("a_broken.png"), "not an image").unwrap();
        solid(8, [0, 0, 255, 255]).save(raw.path().join("b.png")).unwrap();

        let mut finished = 0;
        let mut started = 0;
        let result = PaletteNormalizer::default().normalize_directory_with(
            raw.path(),
            store.path(),
            |event| match event {
                NormalizeEvent::Listed(_) => {}
                NormalizeEvent::Started(_) => started += 1,
                NormalizeEvent::Finished(_) => finished += 1,
            },
        );

        assert!(result.is_err());
        assert_eq!((started, finished), (1, 0));
    }

    // Tests a missing source directory is reported
    #[test]
    fn test_normalize_directory_missing_source() {
        let store = TempDir::new().unwrap();
        let missing = store.path().join("nope");
        assert!(
            PaletteNormalizer::default()
                .normalize_directory(&missing, store.path())
                .is_err()
        );
    }

    // Tests pruning removes only entries without a raw source
    #[test]
    fn test_prune_stale_removes_orphans() {
        let raw = TempDir::new().unwrap();
        let store = TempDir::new().unwrap();
        fs::write(raw.path().join("keep.png"), "x").unwrap();
        fs::write(store.path().join("keep.png"), "x").unwrap();
        fs::write(store.path().join("stale.png"), "x").unwrap();
        fs::create_dir(store.path().join("nested")).unwrap();

        let removed = prune_stale(raw.path(), store.path()).unwrap();

        assert_eq!(removed, vec![store.path().join("stale.png")]);
        assert!(store.path().join("keep.png").exists());
        assert!(store.path().join("nested").exists());
    }
}
