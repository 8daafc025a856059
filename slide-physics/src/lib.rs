mod aabb;
mod body;
mod broad_phase;
mod collision;
mod error;
mod ordering;
mod ray;
mod settings;
mod simulation;

pub use aabb::{Rect, overlaps};
pub use body::Mover;
pub use broad_phase::{BroadPhase, swept_bounds};
pub use collision::swept_rect_vs_rect;
pub use error::GeometryError;
pub use ordering::{INLINE_OBSTACLES, SweepBuffer, SweepEntry, sort_by_time};
pub use ray::{Contact, Ray, ray_vs_rect};
pub use settings::{ContactWindow, CornerTieBreak, SlideSettings};
pub use simulation::{
    AppliedContact, SlideOutcome, SlideScratch, move_and_slide, slide_step, step_movers,
};
