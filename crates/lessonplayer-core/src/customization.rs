//! Interaction customization arguments.
//!
//! Customization arguments arrive as an opaque string-keyed map. Widgets read
//! them through the typed accessors below; a missing or mistyped value falls
//! back to the caller's default instead of failing construction.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::snapshot::SubtitledHtml;

/// Axis-aligned rectangle in normalized image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRect {
    /// Top-left corner as `[x, y]`.
    pub upper_left: [f64; 2],
    /// Bottom-right corner as `[x, y]`.
    pub lower_right: [f64; 2],
}

impl NormalizedRect {
    /// Whether the point lies inside the rectangle, edges included.
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.upper_left[0]
            && x <= self.lower_right[0]
            && y >= self.upper_left[1]
            && y <= self.lower_right[1]
    }
}

/// A named clickable region of an image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledRegion {
    /// Region label reported in the answer.
    pub label: String,
    /// Region bounds.
    pub region: NormalizedRect,
}

/// An image together with its clickable regions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ImageWithRegions {
    /// Path of the image, resolved by the host.
    #[serde(default)]
    pub image_path: String,
    /// Clickable regions, in priority order.
    #[serde(default)]
    pub labeled_regions: Vec<LabeledRegion>,
}

/// String-keyed customization arguments with typed accessors.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomizationArgs(BTreeMap<String, Value>);

impl CustomizationArgs {
    /// Creates an empty argument map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the map with `key` set to `value`.
    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_owned(), value.into());
        self
    }

    /// Whether `key` is present, regardless of its type.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Reads `key` as `T`. Returns `None` when absent; logs and returns
    /// `None` when present with the wrong shape.
    #[must_use]
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.0.get(key)?;
        match serde_json::from_value(value.clone()) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                tracing::warn!(key, error = %e, "malformed customization argument, using default");
                None
            }
        }
    }

    /// Reads a boolean argument.
    #[must_use]
    pub fn bool_or(&self, key: &str, default: bool) -> bool {
        self.get(key).unwrap_or(default)
    }

    /// Reads an integer argument.
    #[must_use]
    pub fn int(&self, key: &str) -> Option<i64> {
        self.get(key)
    }

    /// Reads a string argument.
    #[must_use]
    pub fn string(&self, key: &str) -> Option<String> {
        self.get(key)
    }

    /// Reads a list of rich-content choices.
    #[must_use]
    pub fn subtitled_html_list(&self, key: &str) -> Vec<SubtitledHtml> {
        self.get(key).unwrap_or_default()
    }

    /// Reads a list of strings.
    #[must_use]
    pub fn string_list(&self, key: &str) -> Vec<String> {
        self.get(key).unwrap_or_default()
    }

    /// Reads an image with its labeled regions.
    #[must_use]
    pub fn image_with_regions(&self, key: &str) -> ImageWithRegions {
        self.get(key).unwrap_or_default()
    }
}
