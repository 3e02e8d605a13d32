//! Font styling for GUI labels.
//!
//! Styling is a plain value transformation: each helper takes a [`Label`] and returns the
//! restyled label, so helpers compose by chaining (`title(label)` is
//! `bold(with_font_size(label, 21))`).

use crate::foundation::error::{PetsError, PetsResult};

/// Point size used by [`title`].
pub const TITLE_POINT_SIZE: u32 = 21;

/// Point size of a freshly created label.
pub const DEFAULT_POINT_SIZE: u32 = 13;

/// Font attributes of a label.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Font {
    /// Family name; `None` uses the toolkit default.
    #[serde(default)]
    pub family: Option<String>,
    /// Size in points.
    pub point_size: u32,
    /// Bold weight.
    #[serde(default)]
    pub bold: bool,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            family: None,
            point_size: DEFAULT_POINT_SIZE,
            bold: false,
        }
    }
}

/// A text label and its font.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Label {
    /// Displayed text.
    pub text: String,
    /// Font used to draw `text`.
    #[serde(default)]
    pub font: Font,
}

impl Label {
    /// Label with the default font.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font: Font::default(),
        }
    }

    /// Chaining form of [`with_font_size`].
    pub fn with_font_size(self, point_size: u32) -> Self {
        with_font_size(self, point_size)
    }

    /// Chaining form of [`bold`].
    pub fn bold(self) -> Self {
        bold(self)
    }

    /// Chaining form of [`title`].
    pub fn title(self) -> Self {
        title(self)
    }
}

/// Set the point size of `label`'s font.
pub fn with_font_size(mut label: Label, point_size: u32) -> Label {
    label.font.point_size = point_size;
    label
}

/// Like [`with_font_size`], rejecting a zero point size.
pub fn try_with_font_size(label: Label, point_size: u32) -> PetsResult<Label> {
    if point_size == 0 {
        return Err(PetsError::validation("font point size must be > 0"));
    }
    Ok(with_font_size(label, point_size))
}

/// Make `label`'s font bold.
pub fn bold(mut label: Label) -> Label {
    label.font.bold = true;
    label
}

/// Style `label` as a section title.
pub fn title(label: Label) -> Label {
    bold(with_font_size(label, TITLE_POINT_SIZE))
}

#[cfg(test)]
#[path = "../../tests/unit/ui/typography.rs"]
mod tests;
