//! Time subsystem.
//!
//! Stable, testable frame timing without coupling to the runtime. Intended
//! usage: one `FrameClock` per window, `tick()` once per presented frame.
//!
//! Note the animation layer does not consume `dt`: the composition advances
//! its own clock a fixed step per frame, so animation speed follows the
//! display refresh rate. `FrameTime.dt` exists for callers that want
//! elapsed-time stepping instead.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
