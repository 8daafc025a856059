use crate::aabb::Rect;
use crate::settings::SlideSettings;
use glam::Vec2;
use smallvec::SmallVec;

/// Obstacle counts up to this size are ordered without touching the heap.
pub const INLINE_OBSTACLES: usize = 16;

pub type SweepBuffer = SmallVec<[SweepEntry; INLINE_OBSTACLES]>;

/// One obstacle's sort key for a single step.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SweepEntry {
    pub index: usize,
    /// Time of impact, or `f32::INFINITY` when the sweep misses.
    pub time: f32,
}

/// Stable insertion sort by ascending time. Entries with equal times keep
/// their relative order.
pub fn sort_by_time(entries: &mut [SweepEntry]) {
    for i in 1..entries.len() {
        let mut j = i;
        while j > 0 && entries[j - 1].time > entries[j].time {
            entries.swap(j - 1, j);
            j -= 1;
        }
    }
}

impl SlideSettings {
    /// Sweeps `hitbox` against every obstacle once and fills `out` with the
    /// obstacle indices ordered by time of impact. Misses sort last.
    pub fn order_contacts(
        &self,
        hitbox: &Rect,
        velocity: Vec2,
        delta: f32,
        obstacles: &[Rect],
        out: &mut SweepBuffer,
    ) {
        out.clear();
        out.extend(obstacles.iter().enumerate().map(|(index, obstacle)| {
            let time = self
                .swept_rect_vs_rect(hitbox, obstacle, velocity, delta)
                .map_or(f32::INFINITY, |contact| contact.time);
            SweepEntry { index, time }
        }));
        sort_by_time(out);
    }
}
