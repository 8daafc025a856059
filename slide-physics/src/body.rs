use crate::aabb::Rect;
use crate::error::GeometryError;
use crate::settings::SlideSettings;
use crate::simulation::SlideScratch;
use glam::Vec2;

#[derive(Debug, Clone, PartialEq)]
pub struct Mover {
    /// center of the hitbox.
    pub position: Vec2,
    pub velocity: Vec2,
    pub extent: Vec2,
    /// Set by the last slide when something below stopped the mover.
    /// Screen coordinates: +y points down.
    pub is_grounded: bool,
}

impl Mover {
    pub fn new(position: Vec2, extent: Vec2) -> Self {
        Mover {
            position,
            velocity: Vec2::ZERO,
            extent,
            is_grounded: false,
        }
    }

    pub fn try_new(position: Vec2, extent: Vec2) -> Result<Self, GeometryError> {
        if !position.is_finite() {
            return Err(GeometryError::NonFinite {
                what: "mover position",
            });
        }
        if !extent.is_finite() {
            return Err(GeometryError::NonFinite {
                what: "mover extent",
            });
        }
        if extent.x < 0.0 || extent.y < 0.0 {
            return Err(GeometryError::NegativeExtent {
                width: extent.x,
                height: extent.y,
            });
        }
        Ok(Mover::new(position, extent))
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// World-space hitbox at the current position.
    pub fn hitbox(&self) -> Rect {
        Rect::from_center_size(self.position, self.extent)
    }

    /// World-space hitbox if the mover were at `position`.
    pub fn hitbox_at(&self, position: Vec2) -> Rect {
        Rect::from_center_size(position, self.extent)
    }

    /// Moves by `velocity * delta`, sliding along `obstacles`.
    pub fn slide(&mut self, obstacles: &[Rect], delta: f32) {
        let mut scratch = SlideScratch::new();
        self.slide_with(&SlideSettings::default(), &mut scratch, obstacles, delta);
    }

    pub fn slide_with(
        &mut self,
        settings: &SlideSettings,
        scratch: &mut SlideScratch,
        obstacles: &[Rect],
        delta: f32,
    ) {
        let mut grounded = false;
        settings.resolve(
            scratch,
            obstacles,
            self.extent,
            &mut self.velocity,
            &mut self.position,
            delta,
            |_, contact| grounded |= contact.normal.y < 0.0,
        );
        self.is_grounded = grounded;
    }
}
