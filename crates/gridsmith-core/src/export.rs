//! Versioned JSON envelope for exporting and importing a whole layout.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::config::EngineConfig;
use crate::layout::{Breakpoint, LayoutState};

/// The only envelope version this build reads or writes.
pub const EXPORT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutExport {
    pub version: u32,
    pub layout: LayoutState,
    /// RFC 3339 timestamp, UTC, millisecond precision.
    #[serde(default)]
    pub exported_at: String,
}

impl LayoutExport {
    pub fn new(layout: LayoutState) -> Self {
        Self {
            version: EXPORT_VERSION,
            layout,
            exported_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse and validate an exported layout.
    ///
    /// Structural checks run on the raw JSON first so that a wrong version or
    /// an unknown breakpoint is reported as such rather than as a generic
    /// decoding failure.
    pub fn from_json(json: &str) -> Result<Self, ImportError> {
        let mut value: Value = serde_json::from_str(json)?;

        let version = value.get("version");
        if version.and_then(Value::as_f64) != Some(f64::from(EXPORT_VERSION)) {
            let found = version.map_or_else(|| "none".to_string(), Value::to_string);
            return Err(ImportError::UnsupportedVersion(found));
        }

        let layout = value.get("layout").ok_or(ImportError::MissingLayout)?;
        if !layout.get("breakpoints").is_some_and(Value::is_object) {
            return Err(ImportError::MissingBreakpoints);
        }

        let active = layout
            .get("activeBreakpoint")
            .and_then(Value::as_str)
            .unwrap_or_default();
        if Breakpoint::from_id(active).is_none() {
            return Err(ImportError::UnknownBreakpoint(active.to_string()));
        }

        // `1.0` passes the check above but would not decode as an integer.
        value["version"] = Value::from(EXPORT_VERSION);

        Ok(serde_json::from_value(value)?)
    }

    /// Reject grids whose row or column count falls outside the engine's
    /// track bounds.
    pub fn check_track_counts(&self, config: &EngineConfig) -> Result<(), ImportError> {
        let (min, max) = config.track_bounds();
        for breakpoint in Breakpoint::ALL {
            let grid = &self.layout.config(breakpoint).grid;
            for (axis, count) in [("rows", grid.row_count), ("columns", grid.column_count)] {
                if !(min..=max).contains(&count) {
                    return Err(ImportError::TrackCountOutOfRange {
                        breakpoint,
                        axis,
                        count,
                        min,
                        max,
                    });
                }
            }
        }
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Malformed layout file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unsupported layout version: {0}")]
    UnsupportedVersion(String),

    #[error("Layout file has no layout section")]
    MissingLayout,

    #[error("Layout file has no breakpoints")]
    MissingBreakpoints,

    #[error("Unknown active breakpoint '{0}'")]
    UnknownBreakpoint(String),

    #[error("{breakpoint} grid has {count} {axis}, expected {min}..={max}")]
    TrackCountOutOfRange {
        breakpoint: Breakpoint,
        axis: &'static str,
        count: u32,
        min: u32,
        max: u32,
    },
}
