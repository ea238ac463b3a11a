use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geometry::{CellRect, GridCell};
use crate::track::SelfAlignment;

/// Unique child identifier.
pub type ChildId = Uuid;

/// Prefix of generated child names (`child1`, `child2`, ...).
pub const DEFAULT_NAME_PREFIX: &str = "child";

/// A named rectangular region of the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridChild {
    pub id: ChildId,
    /// Human label; doubles as the class name and the default area name.
    pub name: String,
    pub cells: Vec<GridCell>,
    #[serde(default)]
    pub locked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justify_self: Option<SelfAlignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align_self: Option<SelfAlignment>,
}

impl GridChild {
    pub fn new(name: &str, cells: Vec<GridCell>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            cells,
            locked: false,
            area_name: None,
            justify_self: None,
            align_self: None,
        }
    }

    pub fn with_area_name(mut self, area_name: &str) -> Self {
        self.area_name = Some(area_name.to_string());
        self
    }

    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }

    pub fn bounds(&self) -> Option<CellRect> {
        CellRect::from_cells(&self.cells)
    }

    /// Area name to use for named-area placement: the explicit `area_name`
    /// unless it is blank, otherwise the child's `name`.
    pub fn effective_area_name(&self) -> &str {
        match self.area_name.as_deref() {
            Some(area) if !area.trim().is_empty() => area,
            _ => &self.name,
        }
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }
}

/// Lowest unused `childN` name (N starting at 1) among `children`.
pub fn next_child_name(children: &[GridChild]) -> String {
    let mut index = 1usize;
    loop {
        let candidate = format!("{}{}", DEFAULT_NAME_PREFIX, index);
        if !children.iter().any(|c| c.name == candidate) {
            return candidate;
        }
        index += 1;
    }
}
