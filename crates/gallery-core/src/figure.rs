use glam::Vec2;

/// Which platform event family a drag gesture originated from.
///
/// Mouse and touch are not interchangeable at the DOM level (they use
/// distinct move/end event pairs), so the session remembers its origin and
/// the frontend registers the matching listener pair only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
}

/// A draggable captioned element of the gallery.
///
/// Positions are in pixels, relative to the top-left of the owning
/// [`Surface`](crate::Surface). `displayed` is what the render layer draws
/// each frame; `target` is where the pointer wants the figure to be. The
/// displayed position always lags the target and converges geometrically,
/// one easing tick at a time.
#[derive(Clone, Debug)]
pub struct Figure {
    pub displayed: Vec2,
    pub target: Vec2,
    pub size: Vec2,
    pub z: u32,
    pub caption: String,
}

impl Figure {
    pub fn new(position: Vec2, size: Vec2, caption: impl Into<String>) -> Self {
        Self {
            displayed: position,
            target: position,
            size,
            z: crate::constants::Z_ORDER_BASE,
            caption: caption.into(),
        }
    }

    /// Whether `point` (surface-relative) falls inside the figure's
    /// displayed rectangle.
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.displayed.x
            && point.y >= self.displayed.y
            && point.x <= self.displayed.x + self.size.x
            && point.y <= self.displayed.y + self.size.y
    }

    /// Remaining distance to the target, per axis.
    #[inline]
    pub fn remaining(&self) -> Vec2 {
        self.target - self.displayed
    }

    /// Convergence never completes exactly (the easing is asymptotic); a
    /// figure reads as settled once the remaining distance is subpixel.
    #[inline]
    pub fn settled(&self) -> bool {
        self.remaining().length() < crate::constants::SETTLE_EPSILON_PX
    }
}
