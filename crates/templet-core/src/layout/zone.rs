//! Arrangements and the zones they resolve to.

use crate::geometry::{
    Geometry, align_bottom, align_center, align_left, align_middle, align_right, align_top,
};
use crate::surface::CanvasSurface;
use kurbo::Rect;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named placement zone for an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Arrangement {
    /// Top half, horizontally centered.
    CenterTop,
    /// Bottom half, horizontally centered.
    CenterBottom,
    /// Left half, vertically centered.
    MiddleLeft,
    /// Right half, vertically centered.
    MiddleRight,
    /// Whole canvas, centered on both axes.
    CenterMiddle,
    /// Whole canvas, stretched to cover it exactly.
    FullScreen,
}

impl Arrangement {
    pub const ALL: [Arrangement; 6] = [
        Arrangement::CenterTop,
        Arrangement::CenterBottom,
        Arrangement::MiddleLeft,
        Arrangement::MiddleRight,
        Arrangement::CenterMiddle,
        Arrangement::FullScreen,
    ];

    /// The sub-rectangle of `surface` this arrangement designates.
    pub fn zone(self, surface: &CanvasSurface) -> Rect {
        let (w, h) = (surface.width, surface.height);
        match self {
            Arrangement::CenterTop => Rect::new(0.0, 0.0, w, h / 2.0),
            Arrangement::CenterBottom => Rect::new(0.0, h / 2.0, w, h),
            Arrangement::MiddleLeft => Rect::new(0.0, 0.0, w / 2.0, h),
            Arrangement::MiddleRight => Rect::new(w / 2.0, 0.0, w, h),
            Arrangement::CenterMiddle | Arrangement::FullScreen => Rect::new(0.0, 0.0, w, h),
        }
    }

    /// How an object sits inside the zone: pinned to the outer edge the name
    /// points at, centered on the cross axis.
    pub fn alignment(self) -> Alignment {
        let (horizontal, vertical) = match self {
            Arrangement::CenterTop => (HorizontalAlign::Center, VerticalAlign::Top),
            Arrangement::CenterBottom => (HorizontalAlign::Center, VerticalAlign::Bottom),
            Arrangement::MiddleLeft => (HorizontalAlign::Left, VerticalAlign::Middle),
            Arrangement::MiddleRight => (HorizontalAlign::Right, VerticalAlign::Middle),
            Arrangement::CenterMiddle | Arrangement::FullScreen => {
                (HorizontalAlign::Center, VerticalAlign::Middle)
            }
        };
        Alignment { horizontal, vertical }
    }

    /// Wire name, as stored in persisted templates.
    pub fn as_str(self) -> &'static str {
        match self {
            Arrangement::CenterTop => "CENTER_TOP",
            Arrangement::CenterBottom => "CENTER_BOTTOM",
            Arrangement::MiddleLeft => "MIDDLE_LEFT",
            Arrangement::MiddleRight => "MIDDLE_RIGHT",
            Arrangement::CenterMiddle => "CENTER_MIDDLE",
            Arrangement::FullScreen => "FULL_SCREEN",
        }
    }
}

impl fmt::Display for Arrangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Arrangement {
    type Err = String;

    /// Accepts the wire name in any case, with `-` or `_` separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        Arrangement::ALL
            .into_iter()
            .find(|a| a.as_str() == normalized)
            .ok_or_else(|| format!("unknown arrangement: {s}"))
    }
}

/// Map an arrangement to its zone on the current surface.
pub fn resolve_zone(arrangement: Arrangement, surface: &CanvasSurface) -> Rect {
    arrangement.zone(surface)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAlign {
    Top,
    Middle,
    Bottom,
}

/// Alignment rule of an arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alignment {
    pub horizontal: HorizontalAlign,
    pub vertical: VerticalAlign,
}

impl Alignment {
    /// Position `geometry` inside `zone` according to this rule.
    pub fn apply(self, geometry: &mut Geometry, zone: Rect) {
        match self.horizontal {
            HorizontalAlign::Left => align_left(geometry, zone),
            HorizontalAlign::Center => align_center(geometry, zone),
            HorizontalAlign::Right => align_right(geometry, zone),
        }
        match self.vertical {
            VerticalAlign::Top => align_top(geometry, zone),
            VerticalAlign::Middle => align_middle(geometry, zone),
            VerticalAlign::Bottom => align_bottom(geometry, zone),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rect(actual: Rect, expected: (f64, f64, f64, f64)) {
        let (x, y, w, h) = expected;
        assert!((actual.x0 - x).abs() < f64::EPSILON, "x0 {} != {}", actual.x0, x);
        assert!((actual.y0 - y).abs() < f64::EPSILON, "y0 {} != {}", actual.y0, y);
        assert!((actual.width() - w).abs() < f64::EPSILON, "w {} != {}", actual.width(), w);
        assert!((actual.height() - h).abs() < f64::EPSILON, "h {} != {}", actual.height(), h);
    }

    #[test]
    fn test_zone_table_landscape() {
        let surface = CanvasSurface::new(640.0, 360.0);
        assert_rect(resolve_zone(Arrangement::CenterTop, &surface), (0.0, 0.0, 640.0, 180.0));
        assert_rect(resolve_zone(Arrangement::CenterBottom, &surface), (0.0, 180.0, 640.0, 180.0));
        assert_rect(resolve_zone(Arrangement::MiddleLeft, &surface), (0.0, 0.0, 320.0, 360.0));
        assert_rect(resolve_zone(Arrangement::MiddleRight, &surface), (320.0, 0.0, 320.0, 360.0));
        assert_rect(resolve_zone(Arrangement::CenterMiddle, &surface), (0.0, 0.0, 640.0, 360.0));
        assert_rect(resolve_zone(Arrangement::FullScreen, &surface), (0.0, 0.0, 640.0, 360.0));
    }

    #[test]
    fn test_zone_follows_surface() {
        let surface = CanvasSurface::new(360.0, 640.0);
        assert_rect(resolve_zone(Arrangement::CenterBottom, &surface), (0.0, 320.0, 360.0, 320.0));
        assert_rect(resolve_zone(Arrangement::MiddleRight, &surface), (180.0, 0.0, 180.0, 640.0));
    }

    #[test]
    fn test_alignment_rules() {
        let top = Arrangement::CenterTop.alignment();
        assert_eq!(top.horizontal, HorizontalAlign::Center);
        assert_eq!(top.vertical, VerticalAlign::Top);

        let right = Arrangement::MiddleRight.alignment();
        assert_eq!(right.horizontal, HorizontalAlign::Right);
        assert_eq!(right.vertical, VerticalAlign::Middle);
    }

    #[test]
    fn test_parse_and_display() {
        for arrangement in Arrangement::ALL {
            assert_eq!(arrangement.to_string().parse::<Arrangement>(), Ok(arrangement));
        }
        assert_eq!("center-top".parse::<Arrangement>(), Ok(Arrangement::CenterTop));
        assert!("diagonal".parse::<Arrangement>().is_err());
    }

    #[test]
    fn test_serde_wire_names() {
        let json = serde_json::to_string(&Arrangement::FullScreen).unwrap();
        assert_eq!(json, "\"FULL_SCREEN\"");
        let parsed: Arrangement = serde_json::from_str("\"MIDDLE_LEFT\"").unwrap();
        assert_eq!(parsed, Arrangement::MiddleLeft);
    }
}
