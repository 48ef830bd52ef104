use image::{Rgba, RgbaImage};

/// Blend `foreground` over `background` with its top-left corner at `(x, y)`
///
/// Foreground pixels falling outside the background are clipped. `opacity`
/// is clamped to `[0, 1]` and scales the foreground alpha.
pub fn overlay(
    background: &RgbaImage,
    foreground: &RgbaImage,
    x: i64,
    y: i64,
    opacity: f32,
) -> RgbaImage {
    let mut output = background.clone();
    let opacity = f64::from(opacity.clamp(0.0, 1.0));
    let (bg_width, bg_height) = background.dimensions();

    for (fx, fy, src) in foreground.enumerate_pixels() {
        let dx = x + i64::from(fx);
        let dy = y + i64::from(fy);
        if dx < 0 || dy < 0 || dx >= i64::from(bg_width) || dy >= i64::from(bg_height) {
            continue;
        }
        let dst = output.get_pixel_mut(dx as u32, dy as u32);
        *dst = blend_pixel(*dst, *src, opacity);
    }
    output
}

/// Blend `foreground` over the centre of `background`
pub fn overlay_center(background: &RgbaImage, foreground: &RgbaImage, opacity: f32) -> RgbaImage {
    let (bg_width, bg_height) = background.dimensions();
    let (fg_width, fg_height) = foreground.dimensions();
    let x = (i64::from(bg_width) - i64::from(fg_width)) / 2;
    let y = (i64::from(bg_height) - i64::from(fg_height)) / 2;
    overlay(background, foreground, x, y, opacity)
}

/// Non-premultiplied "source over" for one pixel
///
/// A fully opaque source at full opacity replaces the destination exactly; a
/// fully transparent source leaves it untouched.
pub fn blend_pixel(dst: Rgba<u8>, src: Rgba<u8>, opacity: f64) -> Rgba<u8> {
    let a1 = f64::from(dst.0[3]);
    let a2 = f64::from(src.0[3]);

    let src_weight = opacity * a2 / 255.0;
    let dst_weight = (1.0 - src_weight) * a1 / 255.0;
    let total = src_weight + dst_weight;
    if total <= 0.0 {
        return dst;
    }

    let src_weight = src_weight / total;
    let dst_weight = dst_weight / total;
    let mix = |c1: u8, c2: u8| {
        f64::from(c1)
            .mul_add(dst_weight, f64::from(c2) * src_weight)
            .round()
            .clamp(0.0, 255.0) as u8
    };

    Rgba([
        mix(dst.0[0], src.0[0]),
        mix(dst.0[1], src.0[1]),
        mix(dst.0[2], src.0[2]),
        (a1 + a2 * opacity * (255.0 - a1) / 255.0).round().min(255.0) as u8,
    ])
}
