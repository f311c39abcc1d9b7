//! Arrangement and scaling layout engine.
//!
//! Given an object, the zone its arrangement designates and a scaling style,
//! compute the object's new geometry against the current surface. All entry
//! points are pure: they read a geometry and return a new one.

mod arrangement;
mod scaling;
mod zone;
mod zoom;

pub use arrangement::{apply_arrangement, arrange_geometry};
pub use scaling::{ScalingStyle, apply_scaling_style, scale_geometry};
pub use zone::{Alignment, Arrangement, HorizontalAlign, VerticalAlign, resolve_zone};
pub use zoom::{ZoomFactor, zoom_all, zoom_geometry, zoom_in_place};

use crate::geometry::Geometry;
use crate::objects::{CanvasObject, ObjectId};
use crate::surface::CanvasSurface;
use thiserror::Error;

/// Caller errors rejected before the engine runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("Invalid intrinsic size {width}x{height}: both sides must be positive and finite")]
    InvalidIntrinsicSize { width: f64, height: f64 },
    #[error("Invalid scale factors {scale_x}x{scale_y}: both must be positive and finite")]
    InvalidScale { scale_x: f64, scale_y: f64 },
    #[error("Invalid zoom factor {0}: must be positive and finite")]
    InvalidZoomFactor(f64),
    #[error("Object not found: {0}")]
    ObjectNotFound(ObjectId),
}

/// Result type for layout operations.
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Place an object whose intrinsic size has just become known.
///
/// This is the synchronous half of the load-then-place protocol: the
/// arrangement is applied first, then the scaling style (if any) is derived
/// from that arrangement.
pub fn place(
    object: &CanvasObject,
    arrangement: Arrangement,
    style: Option<ScalingStyle>,
    surface: &CanvasSurface,
) -> Geometry {
    let arranged = arrange_geometry(&object.geometry, arrangement, surface);
    match style {
        Some(style) => scale_geometry(&arranged, Some(arrangement), style, surface),
        None => arranged,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::IntrinsicSize;
    use crate::objects::ObjectKind;

    #[test]
    fn test_place_combines_arrangement_and_style() {
        let surface = CanvasSurface::default();
        let object = CanvasObject::new(
            ObjectKind::image("a.png"),
            IntrinsicSize::new(100.0, 50.0).unwrap(),
        );

        let geometry = place(&object, Arrangement::CenterTop, Some(ScalingStyle::Fit), &surface);
        let bounds = geometry.bounds();
        assert!((bounds.x0 - 140.0).abs() < 1e-9);
        assert!(bounds.y0.abs() < 1e-9);
        assert!((bounds.width() - 360.0).abs() < 1e-9);
        assert!((bounds.height() - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_place_without_style_is_arrangement() {
        let surface = CanvasSurface::default();
        let object = CanvasObject::new(
            ObjectKind::image("a.png"),
            IntrinsicSize::new(800.0, 400.0).unwrap(),
        );

        let placed = place(&object, Arrangement::MiddleRight, None, &surface);
        let arranged = arrange_geometry(&object.geometry, Arrangement::MiddleRight, &surface);
        assert_eq!(placed, arranged);
    }

    #[test]
    fn test_error_messages() {
        let err = LayoutError::InvalidZoomFactor(0.0);
        assert_eq!(err.to_string(), "Invalid zoom factor 0: must be positive and finite");
    }
}
