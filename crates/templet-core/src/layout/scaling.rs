//! Scaling styles and how they turn a zone into scale factors.

use super::arrangement::{place_uniform, stretch_over_surface};
use super::zone::Arrangement;
use crate::geometry::{Geometry, fill_within, fit_within};
use crate::objects::CanvasObject;
use crate::surface::CanvasSurface;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Policy for deriving an object's scale factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScalingStyle {
    /// Intrinsic size, scale 1.
    #[default]
    Reset,
    /// Contain: whole object visible inside the zone.
    Fit,
    /// Cover: zone fully covered, one axis may overflow.
    Fill,
}

impl ScalingStyle {
    pub const ALL: [ScalingStyle; 3] = [ScalingStyle::Reset, ScalingStyle::Fit, ScalingStyle::Fill];

    pub fn as_str(self) -> &'static str {
        match self {
            ScalingStyle::Reset => "RESET",
            ScalingStyle::Fit => "FIT",
            ScalingStyle::Fill => "FILL",
        }
    }
}

impl fmt::Display for ScalingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScalingStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        // "FULL" is the older name of FILL.
        if normalized == "FULL" {
            return Ok(ScalingStyle::Fill);
        }
        ScalingStyle::ALL
            .into_iter()
            .find(|style| style.as_str() == normalized)
            .ok_or_else(|| format!("unknown scaling style: {s}"))
    }
}

/// Geometry `object` takes under `style` within its current arrangement.
pub fn apply_scaling_style(
    object: &CanvasObject,
    style: ScalingStyle,
    surface: &CanvasSurface,
) -> Geometry {
    scale_geometry(&object.geometry, object.arrangement, style, surface)
}

/// Scaling policy over bare geometry.
///
/// Full screen always stretches, whatever the style. Otherwise Reset only
/// touches the scale factors, and Fit/Fill need a zone: without an
/// arrangement the geometry comes back unchanged.
pub fn scale_geometry(
    geometry: &Geometry,
    arrangement: Option<Arrangement>,
    style: ScalingStyle,
    surface: &CanvasSurface,
) -> Geometry {
    let mut next = *geometry;
    match (style, arrangement) {
        (_, Some(Arrangement::FullScreen)) => stretch_over_surface(&mut next, surface),
        (ScalingStyle::Reset, _) => next.set_uniform_scale(1.0),
        (_, None) => {
            log::debug!("No arrangement for {style} scaling; geometry left unchanged");
        }
        (ScalingStyle::Fit, Some(arrangement)) => {
            place_uniform(&mut next, arrangement, surface, fit_within);
        }
        (ScalingStyle::Fill, Some(arrangement)) => {
            place_uniform(&mut next, arrangement, surface, fill_within);
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::IntrinsicSize;
    use crate::objects::ObjectKind;

    const EPS: f64 = 1e-9;

    fn video(width: f64, height: f64, arrangement: Option<Arrangement>) -> CanvasObject {
        let mut object = CanvasObject::new(
            ObjectKind::video("https://cdn.example/clip.mp4"),
            IntrinsicSize::new(width, height).unwrap(),
        );
        object.arrangement = arrangement;
        object
    }

    #[test]
    fn test_fit_center_top() {
        let surface = CanvasSurface::new(640.0, 360.0);
        let object = video(100.0, 50.0, Some(Arrangement::CenterTop));
        let geometry = apply_scaling_style(&object, ScalingStyle::Fit, &surface);

        assert!((geometry.scale_x - 3.6).abs() < EPS);
        assert!((geometry.scale_y - 3.6).abs() < EPS);
        assert!((geometry.left - 140.0).abs() < EPS);
        assert!(geometry.top.abs() < EPS);
    }

    #[test]
    fn test_fill_middle_left() {
        let surface = CanvasSurface::new(640.0, 360.0);
        let object = video(800.0, 400.0, Some(Arrangement::MiddleLeft));
        let geometry = apply_scaling_style(&object, ScalingStyle::Fill, &surface);

        let bounds = geometry.bounds();
        assert!((bounds.width() - 720.0).abs() < EPS);
        assert!((bounds.height() - 360.0).abs() < EPS);
        assert!(bounds.x0.abs() < EPS);
        assert!((bounds.center().y - 180.0).abs() < EPS);
    }

    #[test]
    fn test_fill_center_middle_covers_full_canvas() {
        let surface = CanvasSurface::new(640.0, 360.0);
        let object = video(400.0, 400.0, Some(Arrangement::CenterMiddle));
        let geometry = apply_scaling_style(&object, ScalingStyle::Fill, &surface);

        assert!((geometry.scale_x - 1.6).abs() < EPS);
        let bounds = geometry.bounds();
        assert!((bounds.width() - 640.0).abs() < EPS);
        assert!((bounds.height() - 640.0).abs() < EPS);
        assert!((bounds.center().x - 320.0).abs() < EPS);
        assert!((bounds.center().y - 180.0).abs() < EPS);
    }

    #[test]
    fn test_reset_keeps_position() {
        let surface = CanvasSurface::default();
        let mut object = video(100.0, 50.0, Some(Arrangement::CenterTop));
        object.geometry.left = 12.0;
        object.geometry.top = 34.0;
        object.geometry.scale_x = 3.0;
        object.geometry.scale_y = 0.5;

        let geometry = apply_scaling_style(&object, ScalingStyle::Reset, &surface);
        assert!((geometry.scale_x - 1.0).abs() < f64::EPSILON);
        assert!((geometry.scale_y - 1.0).abs() < f64::EPSILON);
        assert!((geometry.left - 12.0).abs() < f64::EPSILON);
        assert!((geometry.top - 34.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_full_screen_overrides_style() {
        let surface = CanvasSurface::new(640.0, 360.0);
        let object = video(100.0, 50.0, Some(Arrangement::FullScreen));
        for style in ScalingStyle::ALL {
            let bounds = apply_scaling_style(&object, style, &surface).bounds();
            assert!(bounds.x0.abs() < EPS && bounds.y0.abs() < EPS, "{style}");
            assert!((bounds.width() - 640.0).abs() < EPS, "{style}");
            assert!((bounds.height() - 360.0).abs() < EPS, "{style}");
        }
    }

    #[test]
    fn test_no_arrangement_is_noop_for_fit_and_fill() {
        let surface = CanvasSurface::default();
        let object = video(100.0, 50.0, None);
        assert_eq!(apply_scaling_style(&object, ScalingStyle::Fit, &surface), object.geometry);
        assert_eq!(apply_scaling_style(&object, ScalingStyle::Fill, &surface), object.geometry);
    }

    #[test]
    fn test_parse_style() {
        assert_eq!("fit".parse::<ScalingStyle>(), Ok(ScalingStyle::Fit));
        assert_eq!("FULL".parse::<ScalingStyle>(), Ok(ScalingStyle::Fill));
        assert!("stretch".parse::<ScalingStyle>().is_err());
    }
}
