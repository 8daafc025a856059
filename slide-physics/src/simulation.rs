use crate::aabb::Rect;
use crate::body::Mover;
use crate::broad_phase::BroadPhase;
use crate::ordering::SweepBuffer;
use crate::ray::Contact;
use crate::settings::SlideSettings;
use glam::{BVec2, Vec2};
use rayon::prelude::*;
use smallvec::SmallVec;

/// Work buffer for one resolver call. Reuse it across frames to keep the
/// ordering pass off the heap once it has grown.
#[derive(Debug, Clone, Default)]
pub struct SlideScratch {
    order: SweepBuffer,
}

impl SlideScratch {
    pub fn new() -> Self {
        Self::default()
    }
}

/// A contact that was applied during a step.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AppliedContact {
    /// Index into the obstacle slice.
    pub obstacle: usize,
    pub contact: Contact,
}

/// Result of [`slide_step`].
#[derive(Debug, Clone, PartialEq)]
pub struct SlideOutcome {
    pub position: Vec2,
    pub velocity: Vec2,
    /// In the order they were applied.
    pub contacts: SmallVec<[AppliedContact; 4]>,
}

impl SlideOutcome {
    pub fn collided(&self) -> bool {
        !self.contacts.is_empty()
    }
}

impl SlideSettings {
    /// Moves a hitbox of size `extent`, centered at `position`, by
    /// `velocity * delta` through the static `obstacles`.
    ///
    /// Contacts are resolved earliest first. Each one snaps `position` to
    /// the contact point and zeroes the velocity along the contact normal;
    /// later obstacles are tested from there with what is left of the
    /// velocity. Axes that were never blocked end at
    /// `start + velocity * delta`.
    pub fn move_and_slide_with(
        &self,
        scratch: &mut SlideScratch,
        obstacles: &[Rect],
        extent: Vec2,
        velocity: &mut Vec2,
        position: &mut Vec2,
        delta: f32,
    ) {
        self.resolve(
            scratch,
            obstacles,
            extent,
            velocity,
            position,
            delta,
            |_, _| {},
        );
    }

    /// [`SlideSettings::move_and_slide_with`] with a throwaway scratch buffer.
    pub fn move_and_slide(
        &self,
        obstacles: &[Rect],
        extent: Vec2,
        velocity: &mut Vec2,
        position: &mut Vec2,
        delta: f32,
    ) {
        let mut scratch = SlideScratch::new();
        self.move_and_slide_with(&mut scratch, obstacles, extent, velocity, position, delta);
    }

    /// Non-mutating form of the resolver.
    pub fn slide_step(
        &self,
        obstacles: &[Rect],
        extent: Vec2,
        position: Vec2,
        velocity: Vec2,
        delta: f32,
    ) -> SlideOutcome {
        let mut outcome = SlideOutcome {
            position,
            velocity,
            contacts: SmallVec::new(),
        };
        let mut scratch = SlideScratch::new();
        self.resolve(
            &mut scratch,
            obstacles,
            extent,
            &mut outcome.velocity,
            &mut outcome.position,
            delta,
            |obstacle, contact| outcome.contacts.push(AppliedContact { obstacle, contact }),
        );
        outcome
    }

    /// Slides every mover against the same obstacles, in parallel.
    pub fn step_movers(&self, movers: &mut [Mover], obstacles: &[Rect], delta: f32) {
        movers
            .par_iter_mut()
            .for_each_init(SlideScratch::new, |scratch, mover| {
                mover.slide_with(self, scratch, obstacles, delta);
            });
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn resolve<F: FnMut(usize, Contact)>(
        &self,
        scratch: &mut SlideScratch,
        obstacles: &[Rect],
        extent: Vec2,
        velocity: &mut Vec2,
        position: &mut Vec2,
        delta: f32,
        mut on_contact: F,
    ) {
        if !position.is_finite() || !velocity.is_finite() || !delta.is_finite() {
            log::warn!(
                "Sliding with non-finite state: position {:?}, velocity {:?}, delta {}",
                position,
                velocity,
                delta
            );
        }

        let start = *position;
        let mut hitbox = Rect::from_center_size(start, extent);
        let broad = BroadPhase::new(&hitbox, *velocity * delta);

        self.order_contacts(&hitbox, *velocity, delta, obstacles, &mut scratch.order);

        let mut blocked = BVec2::FALSE;
        for entry in &scratch.order {
            let obstacle = &obstacles[entry.index];
            if !broad.admits(obstacle) {
                log::trace!(
                    "Obstacle {} {:?} outside swept bounds {:?}",
                    entry.index,
                    obstacle,
                    broad.bounds()
                );
                continue;
            }

            let Some(contact) = self.swept_rect_vs_rect(&hitbox, obstacle, *velocity, delta)
            else {
                continue;
            };

            log::trace!(
                "Contact with obstacle {} at t={} normal {:?} point {:?}",
                entry.index,
                contact.time,
                contact.normal,
                contact.point
            );

            *position = contact.point;
            hitbox = Rect::from_center_size(*position, extent);

            if contact.normal.x.abs() > 0.0 {
                velocity.x = 0.0;
                blocked.x = true;
            }
            if contact.normal.y.abs() > 0.0 {
                velocity.y = 0.0;
                blocked.y = true;
            }

            on_contact(entry.index, contact);
        }

        if !blocked.x {
            position.x = start.x + velocity.x * delta;
        }
        if !blocked.y {
            position.y = start.y + velocity.y * delta;
        }
    }
}

/// Moves and slides with default settings. See
/// [`SlideSettings::move_and_slide_with`].
pub fn move_and_slide(
    obstacles: &[Rect],
    extent: Vec2,
    velocity: &mut Vec2,
    position: &mut Vec2,
    delta: f32,
) {
    SlideSettings::default().move_and_slide(obstacles, extent, velocity, position, delta);
}

/// [`SlideSettings::slide_step`] with default settings.
pub fn slide_step(
    obstacles: &[Rect],
    extent: Vec2,
    position: Vec2,
    velocity: Vec2,
    delta: f32,
) -> SlideOutcome {
    SlideSettings::default().slide_step(obstacles, extent, position, velocity, delta)
}

/// [`SlideSettings::step_movers`] with default settings.
pub fn step_movers(movers: &mut [Mover], obstacles: &[Rect], delta: f32) {
    SlideSettings::default().step_movers(movers, obstacles, delta);
}
