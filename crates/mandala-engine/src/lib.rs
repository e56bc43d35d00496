//! Mandala engine crate.
//!
//! Owns the platform + GPU runtime pieces consumed by the pattern layer:
//! windowing, device/surface management, frame timing, the recorded draw
//! stream (`scene::Canvas`), and the wgpu renderers that consume it.

pub mod core;
pub mod device;
pub mod time;
pub mod window;

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
