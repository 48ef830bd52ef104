use image::{Rgba, RgbaImage};

/// Convert an 8-bit RGB triple to hue, saturation and lightness in `[0, 1]`
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    let rr = f64::from(r) / 255.0;
    let gg = f64::from(g) / 255.0;
    let bb = f64::from(b) / 255.0;

    let max = rr.max(gg).max(bb);
    let min = rr.min(gg).min(bb);
    let l = f64::midpoint(max, min);

    // Achromatic: hue and saturation are undefined, report zero
    if (max - min).abs() < f64::EPSILON {
        return (0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if (max - rr).abs() < f64::EPSILON {
        let h = (gg - bb) / d;
        if g < b { h + 6.0 } else { h }
    } else if (max - gg).abs() < f64::EPSILON {
        (bb - rr) / d + 2.0
    } else {
        (rr - gg) / d + 4.0
    };

    (h / 6.0, s, l)
}

/// Convert hue, saturation and lightness in `[0, 1]` back to an 8-bit RGB triple
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    if s <= 0.0 {
        let v = to_channel(l);
        return (v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0f64.mul_add(l, -q);

    (
        to_channel(hue_to_rgb(p, q, h + 1.0 / 3.0)),
        to_channel(hue_to_rgb(p, q, h)),
        to_channel(hue_to_rgb(p, q, h - 1.0 / 3.0)),
    )
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        ((q - p) * 6.0).mul_add(t, p)
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        ((q - p) * (2.0 / 3.0 - t)).mul_add(6.0, p)
    } else {
        p
    }
}

fn to_channel(value: f64) -> u8 {
    (value * 255.0 + 0.5).clamp(0.0, 255.0) as u8
}

/// Scale a single pixel's HSL saturation by `multiplier`, keeping hue, lightness and alpha
pub fn scale_saturation(pixel: Rgba<u8>, multiplier: f64) -> Rgba<u8> {
    let [r, g, b, a] = pixel.0;
    let (h, s, l) = rgb_to_hsl(r, g, b);
    let (r, g, b) = hsl_to_rgb(h, (s * multiplier).min(1.0), l);
    Rgba([r, g, b, a])
}

/// Adjust saturation of every pixel by `percentage`
///
/// The percentage is clamped to `[-100, 100]`; -100 yields grayscale and 0
/// returns an unchanged copy.
pub fn adjust_saturation(image: &RgbaImage, percentage: f64) -> RgbaImage {
    let percentage = percentage.clamp(-100.0, 100.0);
    if percentage.abs() < f64::EPSILON {
        return image.clone();
    }

    let multiplier = 1.0 + percentage / 100.0;
    let mut output = image.clone();
    for pixel in output.pixels_mut() {
        *pixel = scale_saturation(*pixel, multiplier);
    }
    output
}

/// Spread between the largest and smallest colour channel of a pixel
pub fn chroma(pixel: Rgba<u8>) -> u8 {
    let [r, g, b, _] = pixel.0;
    r.max(g).max(b) - r.min(g).min(b)
}
