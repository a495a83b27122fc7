//! On-screen geometry supplied by the rendering layer at drop time

use std::collections::HashMap;

use crate::model::NodeId;

/// A bounding box representing the on-screen extent of a rendered node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a zero-sized bounding box at the origin
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::zero()
    }
}

/// Source of live layout geometry
///
/// Queried once per drop and never cached. Returning None means the layout
/// is unavailable, and the drop falls back to appending.
pub trait GeometryProvider {
    /// Bounding boxes of `siblings` in layout order
    fn sibling_boxes(&self, parent: Option<&NodeId>, siblings: &[NodeId])
        -> Option<Vec<BoundingBox>>;
}

/// Geometry that is never available
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGeometry;

impl GeometryProvider for NoGeometry {
    fn sibling_boxes(&self, _: Option<&NodeId>, _: &[NodeId]) -> Option<Vec<BoundingBox>> {
        None
    }
}

/// Fixed boxes keyed by node id
///
/// A query fails as a whole if any requested sibling has no box.
#[derive(Debug, Clone, Default)]
pub struct StaticGeometry {
    boxes: HashMap<NodeId, BoundingBox>,
}

impl StaticGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the box of `id`
    pub fn with_box(mut self, id: NodeId, bounds: BoundingBox) -> Self {
        self.boxes.insert(id, bounds);
        self
    }

    /// Lay out `ids` left to right, each `width` wide, starting at x = 0
    pub fn row(ids: &[NodeId], width: f64) -> Self {
        ids.iter()
            .enumerate()
            .fold(Self::new(), |geometry, (i, id)| {
                geometry.with_box(id.clone(), BoundingBox::new(i as f64 * width, 0.0, width, 50.0))
            })
    }

    pub fn insert(&mut self, id: NodeId, bounds: BoundingBox) {
        self.boxes.insert(id, bounds);
    }
}

impl GeometryProvider for StaticGeometry {
    fn sibling_boxes(&self, _: Option<&NodeId>, siblings: &[NodeId]) -> Option<Vec<BoundingBox>> {
        siblings.iter().map(|id| self.boxes.get(id).copied()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let b = BoundingBox::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(b.right(), 40.0);
        assert_eq!(b.bottom(), 60.0);
        assert_eq!(BoundingBox::default(), BoundingBox::zero());
    }

    #[test]
    fn test_static_geometry_row() {
        let ids = vec![NodeId::from("a"), NodeId::from("b")];
        let geometry = StaticGeometry::row(&ids, 100.0);
        let boxes = geometry.sibling_boxes(None, &ids).unwrap();
        assert_eq!(boxes[0].right(), 100.0);
        assert_eq!(boxes[1].x, 100.0);
    }

    #[test]
    fn test_static_geometry_missing_box() {
        let geometry = StaticGeometry::new().with_box(NodeId::from("a"), BoundingBox::zero());
        let ids = vec![NodeId::from("a"), NodeId::from("b")];
        assert!(geometry.sibling_boxes(None, &ids).is_none());
    }

    #[test]
    fn test_no_geometry() {
        assert!(NoGeometry.sibling_boxes(None, &[]).is_none());
    }
}
