//! Recursive pattern generation.
//!
//! The three generators (`circles`, `tree`, `sierpinski`) each take a shape
//! descriptor plus a depth bound and either stroke onto the canvas or recurse.
//! Traversal is pre-order (draw self, then children in fixed index order),
//! so the recorded command sequence is reproducible for identical inputs.
//!
//! `composer` assembles the per-frame picture from time-varying generator
//! invocations; the clock is explicit state threaded into the generators,
//! never a global.

pub mod circles;
pub mod composer;
pub mod geom;
pub mod palette;
pub mod sierpinski;
pub mod tree;

pub use composer::{Composer, Layers};
