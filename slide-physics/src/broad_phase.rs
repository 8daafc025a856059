use crate::aabb::Rect;
use glam::Vec2;

/// Conservative box around everything a hitbox touches while moving by
/// `displacement`. Obstacles outside it cannot be hit this step.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BroadPhase {
    bounds: Rect,
}

impl BroadPhase {
    pub fn new(hitbox: &Rect, displacement: Vec2) -> Self {
        BroadPhase {
            bounds: swept_bounds(hitbox, displacement),
        }
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    #[inline]
    pub fn admits(&self, obstacle: &Rect) -> bool {
        self.bounds.overlaps(obstacle)
    }

    /// Indices of `obstacles` that survive the broad phase, in input order.
    pub fn candidates<'a>(&'a self, obstacles: &'a [Rect]) -> impl Iterator<Item = usize> + 'a {
        obstacles
            .iter()
            .enumerate()
            .filter(move |(_, obstacle)| self.admits(obstacle))
            .map(|(index, _)| index)
    }
}

/// The hitbox at its start position unioned with the hitbox at its end
/// position.
pub fn swept_bounds(hitbox: &Rect, displacement: Vec2) -> Rect {
    hitbox.union(&hitbox.translate(displacement))
}
