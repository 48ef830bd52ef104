//! Colour-space and resampling utilities shared by the palette and compositor

/// HSL conversions and saturation adjustment
pub mod color;
/// Square resampling with a windowed sinc filter
pub mod resample;
