//! Canvas objects: the unit the layout engine works on.

mod text;

pub use text::{FontStyle, FontWeight, TextProps, TextUpdate};

use crate::geometry::{Geometry, IntrinsicSize};
use crate::layout::{Arrangement, LayoutResult, ScalingStyle};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for canvas objects.
pub type ObjectId = Uuid;

/// What an object displays, with the fields specific to that kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ObjectKind {
    Image {
        src: String,
    },
    Video {
        src: String,
    },
    /// A website shown through a thumbnail image.
    Website {
        url: String,
        /// Thumbnail image source.
        src: String,
    },
    Text(TextProps),
}

impl ObjectKind {
    pub fn image(src: impl Into<String>) -> Self {
        ObjectKind::Image { src: src.into() }
    }

    pub fn video(src: impl Into<String>) -> Self {
        ObjectKind::Video { src: src.into() }
    }

    pub fn website(url: impl Into<String>, thumbnail: impl Into<String>) -> Self {
        ObjectKind::Website {
            url: url.into(),
            src: thumbnail.into(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        ObjectKind::Text(TextProps::new(text))
    }

    /// Short lowercase name, as used in persisted records.
    pub fn name(&self) -> &'static str {
        match self {
            ObjectKind::Image { .. } => "image",
            ObjectKind::Video { .. } => "video",
            ObjectKind::Website { .. } => "website",
            ObjectKind::Text(_) => "text",
        }
    }

    /// Media source whose intrinsic size must be probed before placement.
    pub fn media_source(&self) -> Option<&str> {
        match self {
            ObjectKind::Image { src } | ObjectKind::Video { src } | ObjectKind::Website { src, .. } => {
                Some(src.as_str())
            }
            ObjectKind::Text(_) => None,
        }
    }

    /// Text scaling is locked; only media responds to scaling styles.
    pub fn supports_scaling_style(&self) -> bool {
        !matches!(self, ObjectKind::Text(_))
    }

    /// Scaling style a freshly inserted object of this kind starts with.
    pub fn default_scaling_style(&self) -> Option<ScalingStyle> {
        match self {
            ObjectKind::Image { .. } | ObjectKind::Website { .. } => Some(ScalingStyle::Reset),
            ObjectKind::Video { .. } | ObjectKind::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextProps> {
        match self {
            ObjectKind::Text(props) => Some(props),
            _ => None,
        }
    }

    pub fn as_text_mut(&mut self) -> Option<&mut TextProps> {
        match self {
            ObjectKind::Text(props) => Some(props),
            _ => None,
        }
    }
}

/// An object on the template canvas.
///
/// Its stacking order is its position in the owning collection.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasObject {
    pub(crate) id: ObjectId,
    pub kind: ObjectKind,
    pub geometry: Geometry,
    /// Zone the object is placed in; `None` means no placement policy.
    pub arrangement: Option<Arrangement>,
    /// `None` behaves like Reset when a style is needed.
    pub scaling_style: Option<ScalingStyle>,
    /// Cleared while previewing.
    pub selectable: bool,
}

impl CanvasObject {
    /// New unscaled object at the origin.
    pub fn new(kind: ObjectKind, size: IntrinsicSize) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            geometry: Geometry::with_size(size.size()),
            arrangement: None,
            scaling_style: None,
            selectable: true,
        }
    }

    /// Object with externally supplied geometry, e.g. from a persisted template.
    pub fn with_geometry(kind: ObjectKind, geometry: Geometry) -> LayoutResult<Self> {
        geometry.validate()?;
        Ok(Self {
            id: Uuid::new_v4(),
            kind,
            geometry,
            arrangement: None,
            scaling_style: None,
            selectable: true,
        })
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn with_arrangement(mut self, arrangement: Option<Arrangement>) -> Self {
        self.arrangement = arrangement;
        self
    }

    pub fn with_scaling_style(mut self, style: Option<ScalingStyle>) -> Self {
        self.scaling_style = style;
        self
    }
}
