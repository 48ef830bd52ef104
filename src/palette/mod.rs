//! Palette construction, storage and random selection

/// Resizing and desaturation of raw images into the palette store
pub mod normalizer;
/// Random palette index providers
pub mod selection;
/// Validated in-memory palette
pub mod store;

pub use normalizer::{NormalizeEvent, PaletteNormalizer};
pub use selection::{IndexSource, PaletteSelector};
pub use store::{Palette, PaletteEntry};
