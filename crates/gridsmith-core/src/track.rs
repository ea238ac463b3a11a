use std::fmt;

use serde::{Deserialize, Serialize};

/// Sizing rule for one grid track (a row or a column).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TrackSize {
    Fr { value: f64 },
    Px { value: f64 },
    Percent { value: f64 },
    Auto,
    Minmax { min: String, max: String },
    /// Any tag this build does not recognise. Rendered as `1fr`.
    #[serde(other)]
    Unknown,
}

impl TrackSize {
    pub fn fr(value: f64) -> Self {
        TrackSize::Fr { value }
    }

    pub fn px(value: f64) -> Self {
        TrackSize::Px { value }
    }

    pub fn percent(value: f64) -> Self {
        TrackSize::Percent { value }
    }

    pub fn minmax(min: &str, max: &str) -> Self {
        TrackSize::Minmax {
            min: min.to_string(),
            max: max.to_string(),
        }
    }
}

impl Default for TrackSize {
    fn default() -> Self {
        TrackSize::fr(1.0)
    }
}

/// Container-level `place-items` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceItems {
    Start,
    End,
    Center,
    #[default]
    Stretch,
    Normal,
}

impl PlaceItems {
    pub fn as_css(&self) -> &'static str {
        match self {
            PlaceItems::Start => "start",
            PlaceItems::End => "end",
            PlaceItems::Center => "center",
            PlaceItems::Stretch => "stretch",
            PlaceItems::Normal => "normal",
        }
    }
}

impl fmt::Display for PlaceItems {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

/// Per-child `justify-self` / `align-self` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelfAlignment {
    Start,
    End,
    Center,
    Stretch,
}

impl SelfAlignment {
    pub fn as_css(&self) -> &'static str {
        match self {
            SelfAlignment::Start => "start",
            SelfAlignment::End => "end",
            SelfAlignment::Center => "center",
            SelfAlignment::Stretch => "stretch",
        }
    }
}

impl fmt::Display for SelfAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}
