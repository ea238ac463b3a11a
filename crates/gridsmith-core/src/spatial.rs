use rstar::{RTree, RTreeObject, AABB};

use crate::child::{ChildId, GridChild};
use crate::geometry::{split_into_rectangles, CellRect};

/// One rectangle of a locked child in the R-tree.
#[derive(Debug, Clone)]
pub struct LockedRegion {
    pub child_id: ChildId,
    pub rect: CellRect,
}

fn envelope_of(rect: &CellRect) -> AABB<[i64; 2]> {
    AABB::from_corners(
        [rect.row_start as i64, rect.column_start as i64],
        [rect.row_end as i64, rect.column_end as i64],
    )
}

impl RTreeObject for LockedRegion {
    type Envelope = AABB<[i64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        envelope_of(&self.rect)
    }
}

/// Spatial index over the cells owned by locked children.
///
/// Cell bounds are inclusive integers, so envelope intersection is exact:
/// rectangles that merely touch along a track line do not overlap.
pub struct LockIndex {
    tree: RTree<LockedRegion>,
}

impl LockIndex {
    pub fn new() -> Self {
        Self { tree: RTree::new() }
    }

    /// Index every locked child. Non-rectangular cell sets are split first.
    pub fn build<'a>(children: impl IntoIterator<Item = &'a GridChild>) -> Self {
        let entries: Vec<LockedRegion> = children
            .into_iter()
            .filter(|c| c.locked)
            .flat_map(|c| {
                split_into_rectangles(&c.cells)
                    .into_iter()
                    .map(move |rect| LockedRegion {
                        child_id: c.id,
                        rect,
                    })
            })
            .collect();
        Self {
            tree: RTree::bulk_load(entries),
        }
    }

    /// First locked child whose cells intersect `rect`, if any.
    pub fn first_conflict(&self, rect: &CellRect) -> Option<ChildId> {
        self.tree
            .locate_in_envelope_intersecting(&envelope_of(rect))
            .next()
            .map(|region| region.child_id)
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}

impl Default for LockIndex {
    fn default() -> Self {
        Self::new()
    }
}
