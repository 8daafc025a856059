use crate::error::GeometryError;
use glam::Vec2;

/// An axis-aligned rectangle. `(x, y)` is the minimum (top-left) corner.
///
/// Extents are expected to be non-negative; `Rect::new` does not check.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// Like `new`, but rejects non-finite values and negative extents.
    pub fn try_new(x: f32, y: f32, width: f32, height: f32) -> Result<Self, GeometryError> {
        if !(x.is_finite() && y.is_finite()) {
            return Err(GeometryError::NonFinite { what: "rect origin" });
        }
        if !(width.is_finite() && height.is_finite()) {
            return Err(GeometryError::NonFinite { what: "rect extent" });
        }
        if width < 0.0 || height < 0.0 {
            return Err(GeometryError::NegativeExtent { width, height });
        }
        Ok(Rect::new(x, y, width, height))
    }

    pub fn from_origin_extent(origin: Vec2, extent: Vec2) -> Self {
        Rect::new(origin.x, origin.y, extent.x, extent.y)
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        Rect::from_origin_extent(center - size * 0.5, size)
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn extent(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// The maximum corner.
    #[inline]
    pub fn end(&self) -> Vec2 {
        self.origin() + self.extent()
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.origin() + self.extent() * 0.5
    }

    #[inline]
    pub fn translate(&self, translation: Vec2) -> Self {
        Rect::from_origin_extent(self.origin() + translation, self.extent())
    }

    /// Strict overlap on both axes. Rectangles that only share an edge do not
    /// overlap.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }

    /// Smallest rect containing both.
    #[inline]
    pub fn union(&self, other: &Rect) -> Self {
        let min = self.origin().min(other.origin());
        let max = self.end().max(other.end());
        Rect::from_origin_extent(min, max - min)
    }

    /// Grows the rect by half of `extent` on every side, so that a box of
    /// size `extent` touching this rect has its center on the grown border.
    pub fn minkowski_expand(&self, extent: Vec2) -> Self {
        Rect::from_origin_extent(self.origin() - extent * 0.5, self.extent() + extent)
    }
}

/// Free-function form of [`Rect::overlaps`].
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.overlaps(b)
}
