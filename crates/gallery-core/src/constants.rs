// Drag and easing tuning constants shared with the web frontend.

// Easing
pub const DEFAULT_EASE_FACTOR: f32 = 0.35; // fraction of remaining distance covered per tick
pub const SETTLE_EPSILON_PX: f32 = 0.5; // below this remaining distance a figure reads as settled

// Clamping of drag targets, relative to the surface
pub const DRAG_OVERSHOOT_PX: f32 = 200.0; // how far a figure may leave the surface on the top/left
pub const DRAG_MIN_VISIBLE_PX: f32 = 50.0; // how much must stay inside the right/bottom edge

// z-order
pub const Z_ORDER_BASE: u32 = 10; // idle figures sit at or below this; raises count up from here
