use serde::{Deserialize, Serialize};

/// Tunables for [`crate::LayoutEngine`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Maximum number of undo snapshots kept; the oldest is evicted first.
    pub history_limit: usize,
    pub min_tracks: u32,
    pub max_tracks: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history_limit: 50,
            min_tracks: 1,
            max_tracks: 20,
        }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Effective `(min, max)` track bounds. A grid always keeps one track.
    pub fn track_bounds(&self) -> (u32, u32) {
        let min = self.min_tracks.max(1);
        (min, self.max_tracks.max(min))
    }

    /// Clamp a requested track count into `[min_tracks, max_tracks]`.
    pub fn clamp_tracks(&self, requested: i64) -> u32 {
        let (min, max) = self.track_bounds();
        requested.clamp(min as i64, max as i64) as u32
    }
}
