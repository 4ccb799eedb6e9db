use crate::constants::{DRAG_MIN_VISIBLE_PX, DRAG_OVERSHOOT_PX};
use crate::figure::PointerKind;
use crate::surface::Surface;
use glam::Vec2;
use instant::Instant;

/// Ephemeral state for one in-progress drag gesture.
///
/// At most one exists at a time; multi-touch multi-drag is not supported.
#[derive(Clone, Debug)]
pub struct DragSession {
    pub figure: usize,
    pub grab_offset: Vec2,
    pub kind: PointerKind,
    pub started: Instant,
}

/// Converts raw pointer input into smoothed, bounded figure movement.
///
/// Owns the [`Surface`] and the active [`DragSession`], and advances the
/// easing loop one [`tick`](DragAnimator::tick) per display refresh while a
/// drag is active. All coordinates are surface-relative pixels; the frontend
/// converts client coordinates before calling in.
pub struct DragAnimator {
    pub surface: Surface,
    session: Option<DragSession>,
    ease: f32,
}

impl DragAnimator {
    pub fn new(surface: Surface, ease: f32) -> Self {
        Self {
            surface,
            session: None,
            ease,
        }
    }

    #[inline]
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Start a drag at `point`. Picks the topmost figure under the pointer;
    /// a miss is a silent no-op. Raises the hit figure above all others and
    /// rebases both displayed and target position on its current geometry.
    ///
    /// Pointer semantics guarantee at most one primary pointer per gesture,
    /// so a second begin while a session is active can only mean the end
    /// event was lost; it is ignored rather than hijacking the session.
    pub fn begin_drag(&mut self, point: Vec2, kind: PointerKind) -> Option<usize> {
        if self.session.is_some() {
            return None;
        }
        let index = self.surface.topmost_at(point)?;
        let figure = &mut self.surface.figures[index];
        figure.target = figure.displayed;
        let grab_offset = point - figure.displayed;
        self.surface.raise_to_top(index);
        self.session = Some(DragSession {
            figure: index,
            grab_offset,
            kind,
            started: Instant::now(),
        });
        log::info!(
            "[drag] begin on figure {} \"{}\" ({:?}) at ({:.0},{:.0})",
            index,
            self.surface.figures[index].caption,
            kind,
            point.x,
            point.y
        );
        Some(index)
    }

    /// Retarget the dragged figure to `point` minus the grab offset, clamped
    /// to the surface's extent plus the allowed overshoot. Moves arriving
    /// with no active session (e.g. after the end event raced ahead of
    /// listener removal) are ignored.
    pub fn pointer_moved(&mut self, point: Vec2) {
        let Some(session) = &self.session else {
            return;
        };
        let raw = point - session.grab_offset;
        let target = clamp_to_surface(raw, self.surface.bounds());
        if let Some(f) = self.surface.figures.get_mut(session.figure) {
            f.target = target;
        }
    }

    /// End the active drag, if any. Returns the released figure's index so
    /// the frontend can restore its idle cursor. Idempotent.
    pub fn end_drag(&mut self) -> Option<usize> {
        let session = self.session.take()?;
        log::info!(
            "[drag] end on figure {} after {:.2}s",
            session.figure,
            session.started.elapsed().as_secs_f32()
        );
        Some(session.figure)
    }

    /// One easing step: the displayed position covers a fixed fraction of
    /// the remaining distance to the target, per axis. Returns whether a
    /// session is still active; the frame loop must stop rescheduling the
    /// moment this reports `false`.
    pub fn tick(&mut self) -> bool {
        let Some(session) = &self.session else {
            return false;
        };
        if let Some(f) = self.surface.figures.get_mut(session.figure) {
            f.displayed += (f.target - f.displayed) * self.ease;
        }
        true
    }
}

/// Surface-relative clamp: a figure may overshoot the top/left edges by a
/// fixed margin, and must keep a sliver inside the bottom/right edges, but
/// can never be dragged arbitrarily far off-screen.
#[inline]
pub fn clamp_to_surface(target: Vec2, bounds: Vec2) -> Vec2 {
    // A degenerate surface (smaller than the visibility margin) collapses the
    // whole axis range to the low bound instead of inverting it.
    let axis_hi = |extent: f32| {
        if extent < DRAG_MIN_VISIBLE_PX {
            -DRAG_OVERSHOOT_PX
        } else {
            extent - DRAG_MIN_VISIBLE_PX
        }
    };
    Vec2::new(
        target.x.clamp(-DRAG_OVERSHOOT_PX, axis_hi(bounds.x)),
        target.y.clamp(-DRAG_OVERSHOOT_PX, axis_hi(bounds.y)),
    )
}
