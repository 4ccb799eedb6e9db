//! Drag/easing core for the floating gallery.
//!
//! These types intentionally avoid referencing platform-specific APIs and
//! run on both native and web targets. The web frontend feeds them
//! surface-relative pointer positions and reads figure positions back out
//! each animation tick.

pub mod constants;
pub mod drag;
pub mod figure;
pub mod surface;

pub use constants::*;
pub use drag::{clamp_to_surface, DragAnimator, DragSession};
pub use figure::{Figure, PointerKind};
pub use surface::Surface;
