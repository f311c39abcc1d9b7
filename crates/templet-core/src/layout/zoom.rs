//! Normalization transform: uniform rescale of position and size.

use super::{LayoutError, LayoutResult};
use crate::geometry::Geometry;
use crate::objects::CanvasObject;

/// A validated, positive zoom factor.
///
/// Kept as a ratio so that a factor and its inverse divide where the other
/// multiplies, which keeps save/load round trips exact for whole values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomFactor {
    numerator: f64,
    denominator: f64,
}

impl ZoomFactor {
    /// Editor geometry is a third of persisted geometry.
    pub const PERSISTED: ZoomFactor = ZoomFactor::whole(3.0);
    /// Entering preview doubles the surface.
    pub const PREVIEW: ZoomFactor = ZoomFactor::whole(2.0);
    pub const IDENTITY: ZoomFactor = ZoomFactor::whole(1.0);

    const fn whole(value: f64) -> Self {
        Self {
            numerator: value,
            denominator: 1.0,
        }
    }

    pub fn new(factor: f64) -> LayoutResult<Self> {
        if factor.is_finite() && factor > 0.0 {
            Ok(Self::whole(factor))
        } else {
            Err(LayoutError::InvalidZoomFactor(factor))
        }
    }

    /// The factor `numerator / denominator`, kept unreduced so its inverse
    /// multiplies and divides by the same two numbers.
    pub fn ratio(numerator: f64, denominator: f64) -> LayoutResult<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if valid(numerator) && valid(denominator) {
            Ok(Self {
                numerator,
                denominator,
            })
        } else {
            Err(LayoutError::InvalidZoomFactor(numerator / denominator))
        }
    }

    /// The factor undoing this one.
    pub fn inverse(self) -> Self {
        Self {
            numerator: self.denominator,
            denominator: self.numerator,
        }
    }

    pub fn value(self) -> f64 {
        self.numerator / self.denominator
    }

    /// Scale a single coordinate or length.
    pub fn apply(self, value: f64) -> f64 {
        value * self.numerator / self.denominator
    }
}

/// Geometry with `left`, `top`, `width` and `height` scaled by `factor`.
///
/// Scale factors and angle are dimensionless and stay as they are.
pub fn zoom_geometry(geometry: &Geometry, factor: ZoomFactor) -> Geometry {
    Geometry {
        left: factor.apply(geometry.left),
        top: factor.apply(geometry.top),
        width: factor.apply(geometry.width),
        height: factor.apply(geometry.height),
        ..*geometry
    }
}

/// Zoom every object in the collection.
pub fn zoom_in_place(objects: &mut [CanvasObject], factor: ZoomFactor) {
    for object in objects.iter_mut() {
        object.geometry = zoom_geometry(&object.geometry, factor);
    }
    log::debug!("Zoomed {} objects by {}", objects.len(), factor.value());
}

/// Zoomed copy of the whole collection.
pub fn zoom_all(objects: &[CanvasObject], factor: ZoomFactor) -> Vec<CanvasObject> {
    let mut zoomed = objects.to_vec();
    zoom_in_place(&mut zoomed, factor);
    zoomed
}
