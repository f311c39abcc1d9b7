//! Applying an arrangement: size the object to cover its zone, then align it.

use super::zone::Arrangement;
use crate::geometry::{Geometry, fill_within, stretch_to};
use crate::objects::CanvasObject;
use crate::surface::CanvasSurface;
use kurbo::Size;

/// Geometry `object` takes when moved to `arrangement`.
pub fn apply_arrangement(
    object: &CanvasObject,
    arrangement: Arrangement,
    surface: &CanvasSurface,
) -> Geometry {
    arrange_geometry(&object.geometry, arrangement, surface)
}

/// Arrangement policy over bare geometry.
///
/// Rotation is cleared. Half and full zones are covered uniformly; full
/// screen is stretched. Only the intrinsic size and origins of `geometry`
/// are read, so the result never depends on earlier placement.
pub fn arrange_geometry(
    geometry: &Geometry,
    arrangement: Arrangement,
    surface: &CanvasSurface,
) -> Geometry {
    let mut next = *geometry;
    next.angle = 0.0;
    match arrangement {
        Arrangement::FullScreen => stretch_over_surface(&mut next, surface),
        other => place_uniform(&mut next, other, surface, fill_within),
    }
    log::debug!(
        "Arranged {}: scale {:.4}x{:.4} at ({:.2}, {:.2})",
        arrangement,
        next.scale_x,
        next.scale_y,
        next.left,
        next.top
    );
    next
}

/// Scale uniformly with `scale_for` against the arrangement's zone, then
/// align inside it.
pub(super) fn place_uniform(
    geometry: &mut Geometry,
    arrangement: Arrangement,
    surface: &CanvasSurface,
    scale_for: fn(Size, Size) -> f64,
) {
    let zone = arrangement.zone(surface);
    geometry.set_uniform_scale(scale_for(geometry.intrinsic_size(), zone.size()));
    arrangement.alignment().apply(geometry, zone);
}

/// Stretch non-uniformly so the bounds equal the surface, then center.
pub(super) fn stretch_over_surface(geometry: &mut Geometry, surface: &CanvasSurface) {
    let (scale_x, scale_y) = stretch_to(geometry.intrinsic_size(), surface.size());
    geometry.scale_x = scale_x;
    geometry.scale_y = scale_y;
    Arrangement::FullScreen
        .alignment()
        .apply(geometry, Arrangement::FullScreen.zone(surface));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{IntrinsicSize, OriginX, OriginY};
    use crate::objects::ObjectKind;

    const EPS: f64 = 1e-9;

    fn image(width: f64, height: f64) -> CanvasObject {
        CanvasObject::new(
            ObjectKind::image("https://cdn.example/pic.png"),
            IntrinsicSize::new(width, height).unwrap(),
        )
    }

    #[test]
    fn test_middle_left_covers_and_pins_left() {
        let surface = CanvasSurface::new(640.0, 360.0);
        let geometry = apply_arrangement(&image(800.0, 400.0), Arrangement::MiddleLeft, &surface);

        assert!((geometry.scale_x - 0.9).abs() < EPS);
        assert!((geometry.scale_y - 0.9).abs() < EPS);
        let bounds = geometry.bounds();
        assert!(bounds.x0.abs() < EPS);
        assert!((bounds.width() - 720.0).abs() < EPS);
        assert!(bounds.y0.abs() < EPS);
        assert!((bounds.height() - 360.0).abs() < EPS);
    }

    #[test]
    fn test_center_bottom_pins_bottom_edge() {
        let surface = CanvasSurface::new(640.0, 360.0);
        let geometry = apply_arrangement(&image(100.0, 100.0), Arrangement::CenterBottom, &surface);

        // 640x180 zone, cover => 6.4
        assert!((geometry.scale_x - 6.4).abs() < EPS);
        let bounds = geometry.bounds();
        assert!((bounds.y1 - 360.0).abs() < EPS);
        assert!((bounds.center().x - 320.0).abs() < EPS);
    }

    #[test]
    fn test_middle_right_pins_right_edge() {
        let surface = CanvasSurface::new(640.0, 360.0);
        let geometry = apply_arrangement(&image(200.0, 100.0), Arrangement::MiddleRight, &surface);

        let bounds = geometry.bounds();
        assert!((bounds.x1 - 640.0).abs() < EPS);
        assert!((bounds.center().y - 180.0).abs() < EPS);
        assert!(bounds.height() >= 360.0 - EPS);
        assert!(bounds.width() >= 320.0 - EPS);
    }

    #[test]
    fn test_full_screen_stretches() {
        let surface = CanvasSurface::new(640.0, 360.0);
        let geometry = apply_arrangement(&image(300.0, 300.0), Arrangement::FullScreen, &surface);

        assert!((geometry.scale_x - 640.0 / 300.0).abs() < EPS);
        assert!((geometry.scale_y - 1.2).abs() < EPS);
        let bounds = geometry.bounds();
        assert!(bounds.x0.abs() < EPS && bounds.y0.abs() < EPS);
        assert!((bounds.x1 - 640.0).abs() < EPS && (bounds.y1 - 360.0).abs() < EPS);
    }

    #[test]
    fn test_arrangement_clears_rotation() {
        let surface = CanvasSurface::default();
        let mut object = image(50.0, 50.0);
        object.geometry.angle = 45.0;

        let geometry = apply_arrangement(&object, Arrangement::CenterMiddle, &surface);
        assert!(geometry.angle.abs() < f64::EPSILON);
    }

    #[test]
    fn test_ignores_prior_placement() {
        let surface = CanvasSurface::default();
        let object = image(160.0, 90.0);
        let mut dragged = object.clone();
        dragged.geometry.left = 999.0;
        dragged.geometry.top = -42.0;
        dragged.geometry.scale_x = 0.1;
        dragged.geometry.scale_y = 7.0;

        assert_eq!(
            apply_arrangement(&object, Arrangement::CenterTop, &surface),
            apply_arrangement(&dragged, Arrangement::CenterTop, &surface)
        );
    }

    #[test]
    fn test_center_origin_is_honoured() {
        let surface = CanvasSurface::new(640.0, 360.0);
        let mut object = image(100.0, 50.0);
        object.geometry.origin_x = OriginX::Center;
        object.geometry.origin_y = OriginY::Center;

        let geometry = apply_arrangement(&object, Arrangement::CenterMiddle, &surface);
        assert!((geometry.left - 320.0).abs() < EPS);
        assert!((geometry.top - 180.0).abs() < EPS);
    }
}
