use crate::aabb::Rect;
use crate::ray::{Contact, Ray};
use crate::settings::SlideSettings;
use glam::Vec2;

impl SlideSettings {
    /// Swept moving `mover` vs static `target` collision test.
    ///
    /// `target` is grown by the mover's extent so the mover reduces to a ray
    /// from its center along `velocity * delta`. The contact point is where
    /// the mover's center is at the moment of contact. Contacts whose time
    /// falls outside `self.window` are dropped, as is any sweep with zero
    /// velocity.
    pub fn swept_rect_vs_rect(
        &self,
        mover: &Rect,
        target: &Rect,
        velocity: Vec2,
        delta: f32,
    ) -> Option<Contact> {
        if velocity == Vec2::ZERO {
            return None;
        }

        let expanded = target.minkowski_expand(mover.extent());
        let ray = Ray::new(mover.center(), velocity * delta);

        self.ray_vs_rect(&ray, &expanded)
            .filter(|contact| self.window.contains(contact.time))
    }
}

/// [`SlideSettings::swept_rect_vs_rect`] with default settings.
pub fn swept_rect_vs_rect(
    mover: &Rect,
    target: &Rect,
    velocity: Vec2,
    delta: f32,
) -> Option<Contact> {
    SlideSettings::default().swept_rect_vs_rect(mover, target, velocity, delta)
}
