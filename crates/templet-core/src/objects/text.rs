//! Text object properties.

use crate::geometry::IntrinsicSize;
use crate::layout::LayoutResult;
use serde::{Deserialize, Serialize};

/// Font weight options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Font style options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

/// Content and typography of a text object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextProps {
    pub text: String,
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    #[serde(default)]
    pub font_weight: FontWeight,
    #[serde(default = "default_font_family")]
    pub font_family: String,
    #[serde(default)]
    pub font_style: FontStyle,
    /// CSS color of the glyphs.
    #[serde(default = "default_fill")]
    pub fill: String,
    /// Named entrance animation played by the player, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<String>,
}

fn default_font_size() -> f64 {
    TextProps::DEFAULT_FONT_SIZE
}

fn default_font_family() -> String {
    "Times New Roman".to_string()
}

fn default_fill() -> String {
    "#000000".to_string()
}

impl TextProps {
    pub const DEFAULT_FONT_SIZE: f64 = 40.0;
    pub const PLACEHOLDER: &'static str = "Click me to edit";
    /// Line height as a multiple of the font size.
    const LINE_HEIGHT: f64 = 1.16;
    const MIN_WIDTH: f64 = 20.0;

    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font_size: Self::DEFAULT_FONT_SIZE,
            font_weight: FontWeight::default(),
            font_family: default_font_family(),
            font_style: FontStyle::default(),
            fill: default_fill(),
            animation: None,
        }
    }

    /// Approximate unscaled extent of the text block.
    ///
    /// The renderer owns real glyph metrics; this is only good enough to
    /// give freshly inserted text a sensible box.
    pub fn measure(&self) -> LayoutResult<IntrinsicSize> {
        let widest_line = self
            .text
            .lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        let line_count = self.text.lines().count().max(1);

        let char_width_factor = match self.font_weight {
            FontWeight::Normal => 0.55,
            FontWeight::Bold => 0.60,
        };
        let width = (widest_line as f64 * self.font_size * char_width_factor).max(Self::MIN_WIDTH);
        let height = line_count as f64 * self.font_size * Self::LINE_HEIGHT;
        IntrinsicSize::new(width, height)
    }
}

impl Default for TextProps {
    fn default() -> Self {
        Self::new(Self::PLACEHOLDER)
    }
}

/// A single text property change coming from the properties panel.
#[derive(Debug, Clone, PartialEq)]
pub enum TextUpdate {
    Text(String),
    FontSize(f64),
    FontWeight(FontWeight),
    FontFamily(String),
    FontStyle(FontStyle),
    Fill(String),
    Animation(Option<String>),
}

impl TextProps {
    pub fn apply(&mut self, update: TextUpdate) {
        match update {
            TextUpdate::Text(text) => self.text = text,
            TextUpdate::FontSize(size) => self.font_size = size,
            TextUpdate::FontWeight(weight) => self.font_weight = weight,
            TextUpdate::FontFamily(family) => self.font_family = family,
            TextUpdate::FontStyle(style) => self.font_style = style,
            TextUpdate::Fill(fill) => self.fill = fill,
            TextUpdate::Animation(animation) => self.animation = animation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_single_line() {
        let props = TextProps::new("Hello");
        let size = props.measure().unwrap();
        assert!((size.width() - 5.0 * 40.0 * 0.55).abs() < 1e-9);
        assert!((size.height() - 40.0 * 1.16).abs() < 1e-9);
    }

    #[test]
    fn test_measure_multiline_uses_widest_line() {
        let mut props = TextProps::new("ab\nabcd\nabc");
        props.font_weight = FontWeight::Bold;
        let size = props.measure().unwrap();
        assert!((size.width() - 4.0 * 40.0 * 0.60).abs() < 1e-9);
        assert!((size.height() - 3.0 * 40.0 * 1.16).abs() < 1e-9);
    }

    #[test]
    fn test_measure_empty_text_has_minimum_box() {
        let size = TextProps::new("").measure().unwrap();
        assert!((size.width() - 20.0).abs() < f64::EPSILON);
        assert!(size.height() > 0.0);
    }

    #[test]
    fn test_zero_font_size_is_rejected() {
        let mut props = TextProps::default();
        props.apply(TextUpdate::FontSize(0.0));
        assert!(props.measure().is_err());
    }

    #[test]
    fn test_apply_updates() {
        let mut props = TextProps::default();
        props.apply(TextUpdate::Text("Sale".into()));
        props.apply(TextUpdate::Fill("#ff0000".into()));
        props.apply(TextUpdate::FontStyle(FontStyle::Italic));
        assert_eq!(props.text, "Sale");
        assert_eq!(props.fill, "#ff0000");
        assert_eq!(props.font_style, FontStyle::Italic);
    }
}
