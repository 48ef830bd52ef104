use image::RgbaImage;
use image::imageops::{self, FilterType};

/// Resample to a `resolution` square with a Lanczos3 (windowed sinc) filter
///
/// Images already at the target size are copied unchanged so that repeated
/// passes never soften them.
pub fn resize_square(image: &RgbaImage, resolution: u32) -> RgbaImage {
    if image.dimensions() == (resolution, resolution) {
        return image.clone();
    }
    imageops::resize(image, resolution, resolution, FilterType::Lanczos3)
}
