use crate::aabb::Rect;
use crate::settings::{CornerTieBreak, SlideSettings};
use glam::Vec2;

/// A ray whose direction is the full displacement of one step. It is not
/// normalized: `t = 1` is the end of the step.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec2,
    pub direction: Vec2,
}

impl Ray {
    pub fn new(origin: Vec2, direction: Vec2) -> Self {
        Ray { origin, direction }
    }

    #[inline]
    pub fn at(&self, time: f32) -> Vec2 {
        self.origin + self.direction * time
    }
}

/// First contact of a sweep.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Contact {
    /// Point on the ray at `time`. For rect sweeps this is the mover's center.
    pub point: Vec2,
    /// Always one of the four axis unit vectors.
    pub normal: Vec2,
    /// Time of impact as a fraction of the ray's direction.
    pub time: f32,
}

impl SlideSettings {
    /// Slab test of `ray` against `target`.
    ///
    /// Zero direction components divide to infinities on purpose; the
    /// comparisons below are written to consume them. Returns `None` when
    /// the slabs never overlap in time, when the rect lies entirely behind
    /// the origin, or when an infinite step meets a target edge exactly
    /// (0 * inf). A contact time in the past (negative) is still reported.
    pub fn ray_vs_rect(&self, ray: &Ray, target: &Rect) -> Option<Contact> {
        let inv_dir = Vec2::ONE / ray.direction;

        let t_entry = (target.origin() - ray.origin) * inv_dir;
        let t_exit = (target.end() - ray.origin) * inv_dir;
        if t_entry.is_nan() || t_exit.is_nan() {
            return None;
        }

        let t_near = t_entry.min(t_exit);
        let t_far = t_entry.max(t_exit);

        if t_near.x > t_far.y || t_near.y > t_far.x {
            return None;
        }

        let t_hit_near = t_near.x.max(t_near.y);
        let t_hit_far = t_far.x.min(t_far.y);

        if t_hit_far < 0.0 {
            return None;
        }
        // Only reachable with a zero-length direction.
        if !t_hit_near.is_finite() {
            return None;
        }

        let horizontal = if t_near.x == t_near.y {
            self.corner == CornerTieBreak::PreferHorizontal
        } else {
            t_near.x > t_near.y
        };

        let normal = if horizontal {
            Vec2::new(if ray.direction.x < 0.0 { 1.0 } else { -1.0 }, 0.0)
        } else {
            Vec2::new(0.0, if ray.direction.y < 0.0 { 1.0 } else { -1.0 })
        };

        Some(Contact {
            point: ray.at(t_hit_near),
            normal,
            time: t_hit_near,
        })
    }
}

/// [`SlideSettings::ray_vs_rect`] with default settings.
pub fn ray_vs_rect(ray: &Ray, target: &Rect) -> Option<Contact> {
    SlideSettings::default().ray_vs_rect(ray, target)
}
