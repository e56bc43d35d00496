//! Paint model shared between the canvas and renderers.
//!
//! Scope is deliberately small: solid strokes only. Geometry types remain in
//! `coords`.

mod color;

pub use color::Color;
