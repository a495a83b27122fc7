//! Insertion index inference from pointer position

use tracing::trace;

use crate::geometry::{BoundingBox, GeometryProvider};
use crate::model::{NodeId, NodeRef};

/// Index at which a drop at `pointer_x` lands among `boxes`
///
/// Returns the index of the first box whose right edge lies past the
/// pointer, or `boxes.len()` when there is none.
pub fn resolve_insert_index(pointer_x: f64, boxes: &[BoundingBox]) -> usize {
    boxes
        .iter()
        .position(|bounds| pointer_x < bounds.right())
        .unwrap_or(boxes.len())
}

/// Query `geometry` for the current boxes of `siblings` and resolve the drop index
///
/// Missing or stale geometry (a box count that does not match the sibling
/// count) appends at the end.
pub fn resolve_drop_index(
    geometry: &dyn GeometryProvider,
    parent: Option<&NodeId>,
    siblings: &[NodeRef],
    pointer_x: f64,
) -> usize {
    if siblings.is_empty() {
        return 0;
    }

    let ids: Vec<NodeId> = siblings.iter().map(|node| node.id.clone()).collect();
    match geometry.sibling_boxes(parent, &ids) {
        Some(boxes) if boxes.len() == siblings.len() => resolve_insert_index(pointer_x, &boxes),
        Some(boxes) => {
            trace!(
                expected = siblings.len(),
                got = boxes.len(),
                "stale sibling geometry, appending"
            );
            siblings.len()
        }
        None => {
            trace!("sibling geometry unavailable, appending");
            siblings.len()
        }
    }
}
