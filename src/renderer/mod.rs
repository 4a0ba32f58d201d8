//! 2D canvas rendering module
//!
//! Browser only; the native runner draws nothing.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
