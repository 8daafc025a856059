use thiserror::Error;

/// Rejections from the checked constructors. The sweep and slide routines
/// themselves never fail.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    #[error("{what} contains a non-finite component")]
    NonFinite { what: &'static str },

    #[error("negative extent: width {width}, height {height}")]
    NegativeExtent { width: f32, height: f32 },

    #[error("invalid contact window [{min}, {max}]")]
    InvalidWindow { min: f32, max: f32 },
}
