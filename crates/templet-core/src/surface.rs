//! The editing surface objects are laid out on.

use crate::layout::{LayoutResult, ZoomFactor};
use kurbo::{Rect, Size};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Landscape editing surface size. Portrait is the same size transposed.
pub const LANDSCAPE_SIZE: Size = Size::new(640.0, 360.0);

/// Surface orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Orientation {
    #[default]
    Landscape,
    Portrait,
}

impl Orientation {
    /// Surface size for this orientation, given the landscape size.
    pub fn size(self, landscape: Size) -> Size {
        match self {
            Orientation::Landscape => landscape,
            Orientation::Portrait => Size::new(landscape.height, landscape.width),
        }
    }

    /// The other orientation.
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Landscape => Orientation::Portrait,
            Orientation::Portrait => Orientation::Landscape,
        }
    }
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "landscape" => Ok(Orientation::Landscape),
            "portrait" => Ok(Orientation::Portrait),
            _ => Err(format!("unknown orientation: {s}")),
        }
    }
}

/// Current canvas dimensions in pixels.
///
/// Resized by orientation changes and preview zoom, never destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSurface {
    pub width: f64,
    pub height: f64,
}

impl Default for CanvasSurface {
    fn default() -> Self {
        Self::from_size(LANDSCAPE_SIZE)
    }
}

impl CanvasSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn from_size(size: Size) -> Self {
        Self::new(size.width, size.height)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// The whole surface as a rectangle anchored at the origin.
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Surface with both dimensions multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }

    /// Uniform zoom that keeps content of this surface inside `target`.
    pub fn fit_zoom_to(&self, target: Size) -> LayoutResult<ZoomFactor> {
        let by_width = ZoomFactor::ratio(target.width, self.width)?;
        let by_height = ZoomFactor::ratio(target.height, self.height)?;
        Ok(if by_width.value() <= by_height.value() {
            by_width
        } else {
            by_height
        })
    }

    /// Whether a rendered extent spills past the surface on either axis.
    pub fn exceeded_by(&self, extent: Size) -> bool {
        extent.width > self.width || extent.height > self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_orientation() {
        assert_eq!("Portrait".parse::<Orientation>(), Ok(Orientation::Portrait));
        assert_eq!(" landscape ".parse::<Orientation>(), Ok(Orientation::Landscape));
        assert!("sideways".parse::<Orientation>().is_err());
    }

    #[test]
    fn test_default_surface_is_landscape() {
        let surface = CanvasSurface::default();
        assert!((surface.width - 640.0).abs() < f64::EPSILON);
        assert!((surface.height - 360.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_portrait_transposes() {
        let size = Orientation::Portrait.size(LANDSCAPE_SIZE);
        assert!((size.width - 360.0).abs() < f64::EPSILON);
        assert!((size.height - 640.0).abs() < f64::EPSILON);
        assert_eq!(Orientation::Portrait.toggled(), Orientation::Landscape);
    }

    #[test]
    fn test_scaled_and_back() {
        let surface = CanvasSurface::default().scaled(2.0).scaled(0.5);
        assert_eq!(surface, CanvasSurface::default());
    }

    #[test]
    fn test_fit_factor_between_orientations() {
        let surface = CanvasSurface::default();
        let factor = surface.fit_zoom_to(Orientation::Portrait.size(LANDSCAPE_SIZE)).unwrap();
        assert!((factor.value() - 0.5625).abs() < 1e-12);
        assert!(CanvasSurface::new(0.0, 360.0).fit_zoom_to(LANDSCAPE_SIZE).is_err());
    }

    #[test]
    fn test_exceeded_by() {
        let surface = CanvasSurface::default();
        assert!(!surface.exceeded_by(Size::new(640.0, 360.0)));
        assert!(surface.exceeded_by(Size::new(641.0, 10.0)));
        assert!(surface.exceeded_by(Size::new(10.0, 361.0)));
    }
}
