//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands in insertion order
//! - provide the stateful `Canvas` recording surface (stroke style, line
//!   width, scoped global alpha)
//! - keep shape-specific payloads isolated per shape file under `scene::shapes`

mod canvas;
mod cmd;
mod list;

pub mod shapes;

pub use canvas::Canvas;
pub use cmd::DrawCmd;
pub use list::DrawList;
pub use shapes::Stroke;
