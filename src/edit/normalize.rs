//! Even redistribution of column spans across a row of siblings

use std::sync::Arc;

use crate::model::{ColumnSpan, NodeRef, GRID_COLUMNS};

/// Span each of `count` siblings gets: `floor(12 / count)`
///
/// Rows of more than twelve children still get a span of 1, so such a row
/// overflows the grid.
pub fn even_span(count: usize) -> ColumnSpan {
    if count == 0 {
        return ColumnSpan::FULL;
    }
    ColumnSpan::clamped(GRID_COLUMNS as usize / count)
}

/// Give every child the same span, [`even_span`] of the row length
///
/// Children that already carry the target span are shared, not copied.
pub fn normalize(children: &[NodeRef]) -> Vec<NodeRef> {
    let span = even_span(children.len());
    children
        .iter()
        .map(|child| {
            if child.config.cols == span {
                Arc::clone(child)
            } else {
                Arc::new(child.replace_cols(span))
            }
        })
        .collect()
}
