//! Alpha-masked compositing of palette entries onto template textures

/// Orchestrates resize, selection, masking and blending for one template
pub mod compositor;
/// Bit-packed opacity masks and stencilling
pub mod mask;
/// Positioned and centred alpha blending
pub mod overlay;

pub use compositor::{Composite, CompositorConfig, MaskCompositor};
