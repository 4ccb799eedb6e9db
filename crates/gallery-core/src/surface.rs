use crate::constants::Z_ORDER_BASE;
use crate::figure::Figure;
use glam::Vec2;
use smallvec::SmallVec;

/// The bounding container whose top-left is the origin of all figure
/// positions, and whose extent drives target clamping.
///
/// Owns the figure list and the shared z-order counter. One `Surface` per
/// gallery instance; nothing here is global, so independent galleries on the
/// same page cannot cross-talk.
#[derive(Clone, Debug)]
pub struct Surface {
    pub figures: SmallVec<[Figure; 4]>,
    bounds: Vec2,
    z_top: u32,
}

impl Surface {
    pub fn new(figures: impl IntoIterator<Item = Figure>, bounds: Vec2) -> Self {
        Self {
            figures: figures.into_iter().collect(),
            bounds,
            z_top: Z_ORDER_BASE,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    /// The surface itself may move or resize (scroll, viewport changes), so
    /// the frontend re-reads its rect and pushes the extent in before every
    /// hit-test and move.
    pub fn set_bounds(&mut self, bounds: Vec2) {
        self.bounds = bounds;
    }

    /// Push a figure's current on-screen geometry in from the render layer.
    /// Resets the target so a freshly synced figure is at rest.
    pub fn sync_layout(&mut self, index: usize, position: Vec2, size: Vec2) {
        if let Some(f) = self.figures.get_mut(index) {
            f.displayed = position;
            f.target = position;
            f.size = size;
        }
    }

    /// Explicit spatial query: the topmost figure whose displayed rectangle
    /// contains `point`. Highest z wins among overlapping figures; on equal
    /// z the later figure wins, matching document paint order.
    pub fn topmost_at(&self, point: Vec2) -> Option<usize> {
        let mut best: Option<(usize, u32)> = None;
        for (i, f) in self.figures.iter().enumerate() {
            if !f.contains(point) {
                continue;
            }
            match best {
                Some((_, bz)) if f.z < bz => {}
                _ => best = Some((i, f.z)),
            }
        }
        best.map(|(i, _)| i)
    }

    /// Raise a figure above every other figure's last-known z value. The
    /// counter is monotone, so later raises always land on top.
    pub fn raise_to_top(&mut self, index: usize) -> u32 {
        self.z_top += 1;
        let z = self.z_top;
        if let Some(f) = self.figures.get_mut(index) {
            f.z = z;
        }
        z
    }
}
