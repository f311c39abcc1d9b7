//! Object geometry and the rectangle math the layout engine is built on.
//!
//! Everything here is pure. Sizes handed to the fit/fill/stretch helpers are
//! expected to be positive; callers validate before they get here.

use crate::layout::{LayoutError, LayoutResult};
use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// An object's natural, unscaled size. Always positive and finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntrinsicSize(Size);

impl IntrinsicSize {
    pub fn new(width: f64, height: f64) -> LayoutResult<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if valid(width) && valid(height) {
            Ok(Self(Size::new(width, height)))
        } else {
            Err(LayoutError::InvalidIntrinsicSize { width, height })
        }
    }

    pub fn size(self) -> Size {
        self.0
    }

    pub fn width(self) -> f64 {
        self.0.width
    }

    pub fn height(self) -> f64 {
        self.0.height
    }
}

impl TryFrom<Size> for IntrinsicSize {
    type Error = LayoutError;

    fn try_from(size: Size) -> LayoutResult<Self> {
        Self::new(size.width, size.height)
    }
}

/// Horizontal anchor of an object's `left` coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OriginX {
    #[default]
    Left,
    Center,
    Right,
}

impl OriginX {
    /// Fraction of the scaled width that lies left of the anchor.
    pub fn fraction(self) -> f64 {
        match self {
            OriginX::Left => 0.0,
            OriginX::Center => 0.5,
            OriginX::Right => 1.0,
        }
    }
}

/// Vertical anchor of an object's `top` coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OriginY {
    #[default]
    Top,
    Center,
    Bottom,
}

impl OriginY {
    /// Fraction of the scaled height that lies above the anchor.
    pub fn fraction(self) -> f64 {
        match self {
            OriginY::Top => 0.0,
            OriginY::Center => 0.5,
            OriginY::Bottom => 1.0,
        }
    }
}

/// Position, intrinsic size and scale of a canvas object.
///
/// `width`/`height` are the unscaled intrinsic size; the rendered extent is
/// `width * scale_x` by `height * scale_y`, anchored at (`left`, `top`)
/// according to the origins. `angle` is in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Geometry {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default = "unit_scale")]
    pub scale_x: f64,
    #[serde(default = "unit_scale")]
    pub scale_y: f64,
    #[serde(default)]
    pub angle: f64,
    #[serde(default)]
    pub origin_x: OriginX,
    #[serde(default)]
    pub origin_y: OriginY,
}

fn unit_scale() -> f64 {
    1.0
}

impl Geometry {
    /// Unscaled geometry of the given size with its top-left corner at the origin.
    pub fn with_size(size: Size) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width: size.width,
            height: size.height,
            scale_x: 1.0,
            scale_y: 1.0,
            angle: 0.0,
            origin_x: OriginX::default(),
            origin_y: OriginY::default(),
        }
    }

    /// Intrinsic (unscaled) size.
    pub fn intrinsic_size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Reject geometry the engine cannot lay out.
    pub fn validate(&self) -> LayoutResult<()> {
        IntrinsicSize::new(self.width, self.height)?;
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if valid(self.scale_x) && valid(self.scale_y) {
            Ok(())
        } else {
            Err(LayoutError::InvalidScale {
                scale_x: self.scale_x,
                scale_y: self.scale_y,
            })
        }
    }

    /// Rendered size after scale factors are applied.
    pub fn scaled_size(&self) -> Size {
        Size::new(self.width * self.scale_x, self.height * self.scale_y)
    }

    /// Axis-aligned bounding box of the rendered object, ignoring rotation.
    pub fn bounds(&self) -> Rect {
        let size = self.scaled_size();
        let x0 = self.left - self.origin_x.fraction() * size.width;
        let y0 = self.top - self.origin_y.fraction() * size.height;
        Rect::from_origin_size(Point::new(x0, y0), size)
    }

    /// Set both scale factors to the same value.
    pub fn set_uniform_scale(&mut self, scale: f64) {
        self.scale_x = scale;
        self.scale_y = scale;
    }

    /// Move the object so the left edge of its bounds sits at `x`.
    pub fn set_bounds_x(&mut self, x: f64) {
        self.left = x + self.origin_x.fraction() * self.scaled_size().width;
    }

    /// Move the object so the top edge of its bounds sits at `y`.
    pub fn set_bounds_y(&mut self, y: f64) {
        self.top = y + self.origin_y.fraction() * self.scaled_size().height;
    }
}

/// Uniform scale that makes `object` fit entirely inside `zone`.
pub fn fit_within(object: Size, zone: Size) -> f64 {
    debug_assert!(object.width > 0.0 && object.height > 0.0);
    (zone.width / object.width).min(zone.height / object.height)
}

/// Uniform scale that makes `object` cover `zone` completely.
///
/// The larger of the two axis ratios wins, so one axis matches the zone
/// exactly and the other may overflow it.
pub fn fill_within(object: Size, zone: Size) -> f64 {
    debug_assert!(object.width > 0.0 && object.height > 0.0);
    let by_width = zone.width / object.width;
    let by_height = zone.height / object.height;
    if by_width > by_height { by_width } else { by_height }
}

/// Independent per-axis scales that make `object` exactly `zone`.
pub fn stretch_to(object: Size, zone: Size) -> (f64, f64) {
    debug_assert!(object.width > 0.0 && object.height > 0.0);
    (zone.width / object.width, zone.height / object.height)
}

/// Touch the top edge of `bound`.
pub fn align_top(geometry: &mut Geometry, bound: Rect) {
    geometry.set_bounds_y(bound.y0);
}

/// Touch the bottom edge of `bound`.
pub fn align_bottom(geometry: &mut Geometry, bound: Rect) {
    let height = geometry.scaled_size().height;
    geometry.set_bounds_y(bound.y1 - height);
}

/// Touch the left edge of `bound`.
pub fn align_left(geometry: &mut Geometry, bound: Rect) {
    geometry.set_bounds_x(bound.x0);
}

/// Touch the right edge of `bound`.
pub fn align_right(geometry: &mut Geometry, bound: Rect) {
    let width = geometry.scaled_size().width;
    geometry.set_bounds_x(bound.x1 - width);
}

/// Put the vertical centerline on the centerline of `bound`.
pub fn align_center(geometry: &mut Geometry, bound: Rect) {
    let width = geometry.scaled_size().width;
    geometry.set_bounds_x(bound.center().x - width / 2.0);
}

/// Put the horizontal centerline on the centerline of `bound`.
pub fn align_middle(geometry: &mut Geometry, bound: Rect) {
    let height = geometry.scaled_size().height;
    geometry.set_bounds_y(bound.center().y - height / 2.0);
}
