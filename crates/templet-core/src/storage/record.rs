//! On-disk shape of a template.

use crate::geometry::Geometry;
use crate::layout::{Arrangement, LayoutResult, ScalingStyle};
use crate::objects::{CanvasObject, ObjectKind};
use crate::surface::Orientation;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// One object of a persisted template, in stacking order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateRecord {
    #[serde(flatten)]
    pub kind: ObjectKind,
    #[serde(flatten)]
    pub geometry: Geometry,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub scaling_style: Option<ScalingStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub arrangement: Option<Arrangement>,
}

/// Unknown enum names decode as absent so the object simply has no policy.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|name| match name.parse() {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Ignoring {}", e);
            None
        }
    }))
}

impl TemplateRecord {
    pub fn from_object(object: &CanvasObject) -> Self {
        Self {
            kind: object.kind.clone(),
            geometry: object.geometry,
            scaling_style: object.scaling_style,
            arrangement: object.arrangement,
        }
    }

    /// Rebuild the canvas object; rejects degenerate geometry.
    pub fn into_object(self) -> LayoutResult<CanvasObject> {
        Ok(CanvasObject::with_geometry(self.kind, self.geometry)?
            .with_arrangement(self.arrangement)
            .with_scaling_style(self.scaling_style))
    }
}

/// A saved template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedTemplate {
    pub name: String,
    #[serde(default)]
    pub orientation: Orientation,
    pub objects: Vec<TemplateRecord>,
    /// Base64-encoded PNG preview of the canvas.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

impl PersistedTemplate {
    pub fn new(name: impl Into<String>, orientation: Orientation) -> Self {
        Self {
            name: name.into(),
            orientation,
            objects: Vec::new(),
            thumbnail: None,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Attach an encoded PNG thumbnail.
    pub fn set_thumbnail_png(&mut self, png: &[u8]) {
        use base64::{Engine, engine::general_purpose::STANDARD};
        self.thumbnail = Some(STANDARD.encode(png));
    }

    /// Decoded thumbnail bytes, if present and well-formed.
    pub fn thumbnail_png(&self) -> Option<Vec<u8>> {
        use base64::{Engine, engine::general_purpose::STANDARD};
        self.thumbnail.as_ref().and_then(|t| STANDARD.decode(t).ok())
    }
}
