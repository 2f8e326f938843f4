use std::collections::TryReserveError;

use thiserror::Error;

use crate::frame::PixelFormat;

/// Failures surfaced by [`rotate`](crate::rotate). Every variant is detected
/// before or during construction of the output frame; the input frame is never
/// touched on any of them.
#[derive(Debug, Error)]
pub enum RotationError {
    /// The rotation constant is not one of the four supported values.
    #[error("rotation constant `{0}` is outside the supported set (0-3)")]
    InvalidArgument(u8),

    /// The input frame is malformed.
    #[error("invalid input frame: {0}")]
    InvalidInput(&'static str),

    /// The pixel format has no defined plane-rotation rule.
    #[error("pixel format {0:?} has no plane rotation rule")]
    UnsupportedFormat(PixelFormat),

    /// Allocating backing storage for the output frame failed.
    #[error("failed to allocate output frame storage")]
    ResourceExhausted(#[from] TryReserveError),
}
