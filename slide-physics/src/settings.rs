use crate::error::GeometryError;

/// Range of time-of-impact values, as fractions of the step's displacement,
/// that count as a contact during the current step.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ContactWindow {
    min: f32,
    max: f32,
}

impl ContactWindow {
    /// `[-1, 1]`. Also accepts contacts a mover already sits on or slightly
    /// inside of at the start of the step.
    pub const LENIENT: ContactWindow = ContactWindow {
        min: -1.0,
        max: 1.0,
    };

    /// `[0, 1]`. Only contacts ahead of the mover within this step.
    pub const FORWARD: ContactWindow = ContactWindow { min: 0.0, max: 1.0 };

    pub fn new(min: f32, max: f32) -> Result<Self, GeometryError> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(GeometryError::InvalidWindow { min, max });
        }
        Ok(ContactWindow { min, max })
    }

    #[inline]
    pub fn min(&self) -> f32 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> f32 {
        self.max
    }

    /// Inclusive on both ends. NaN is never contained.
    #[inline]
    pub fn contains(&self, time: f32) -> bool {
        time >= self.min && time <= self.max
    }
}

impl Default for ContactWindow {
    fn default() -> Self {
        ContactWindow::LENIENT
    }
}

/// Which normal to report when a ray enters a rectangle exactly through a
/// corner, i.e. both slabs are entered at the same time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum CornerTieBreak {
    #[default]
    PreferHorizontal,
    PreferVertical,
}

/// Policy for the sweep tests and the move-and-slide resolver.
///
/// The free functions of this crate use `SlideSettings::default()`.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct SlideSettings {
    pub window: ContactWindow,
    pub corner: CornerTieBreak,
}

impl SlideSettings {
    pub fn with_window(mut self, window: ContactWindow) -> Self {
        self.window = window;
        self
    }

    pub fn with_corner(mut self, corner: CornerTieBreak) -> Self {
        self.corner = corner;
        self
    }
}
