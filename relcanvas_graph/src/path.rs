// Copyright 2025 the Relcanvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edge paths and the half-ownership rule for opposite edges.
//!
//! A directed edge is drawn as a polyline from its source centre through its
//! route points to its target centre. When the opposite edge also exists, both
//! directions are drawn on one shared line and the line's segments are split
//! between them: each direction owns the segments nearest its own target,
//! where its arrowhead sits.

use core::ops::Range;

use kurbo::Point;
use smallvec::SmallVec;

use crate::topology::{Topology, resolve_inverse};
use crate::types::{EdgeId, NodeId};

/// Ordered polyline `[from_center, via_1, …, via_n, to_center]` of an edge.
///
/// A path with `n` route points has `n + 1` segments. Paths are rebuilt from
/// the topology for every hit test and never stored.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgePath {
    points: SmallVec<[Point; 8]>,
}

impl EdgePath {
    /// Builds the path `from → via… → to`.
    #[must_use]
    pub fn new(from: Point, via: impl IntoIterator<Item = Point>, to: Point) -> Self {
        let mut points = SmallVec::new();
        points.push(from);
        points.extend(via);
        points.push(to);
        Self { points }
    }

    /// All points, endpoints included.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of segments; always at least one.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.points.len() - 1
    }

    /// Returns segment `index` as `(start, end)`.
    #[must_use]
    pub fn segment(&self, index: usize) -> Option<(Point, Point)> {
        Some((*self.points.get(index)?, *self.points.get(index + 1)?))
    }

    /// Iterates all segments in path order.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }
}

/// Returns the segments a directed edge `from → to` owns on its own path.
///
/// The range is expressed in the edge's own orientation (segment `0` starts at
/// `from`). Without an opposite edge the whole path is owned. With one, the
/// path is shared: `half = count / 2`; each direction owns the `half` segments
/// nearest its `to` end, and for an odd count the middle segment goes to the
/// direction whose `to` compares greater than its `from`.
///
/// The rule depends only on the two identifiers, so both directions compute
/// complementary ranges without consulting each other.
///
/// The ranges partition segments, not the plane. Sensor bands are inclusive
/// and have square ends, so where the two halves meet at a bend the bands of
/// the adjoining segments overlap: a right-angle corner leaves a
/// `margin × margin` square inside the bend that is over both directions.
///
/// ```
/// use relcanvas_graph::{NodeId, owned_segments};
///
/// // Five shared segments between nodes 3 and 7.
/// assert_eq!(owned_segments(5, NodeId(3), NodeId(7), true), 2..5);
/// // The reverse direction owns its last two, i.e. forward segments 0 and 1.
/// assert_eq!(owned_segments(5, NodeId(7), NodeId(3), true), 3..5);
/// ```
#[must_use]
pub fn owned_segments(count: usize, from: NodeId, to: NodeId, shared: bool) -> Range<usize> {
    if !shared {
        return 0..count;
    }
    let half = count / 2;
    let start = if count % 2 == 1 && to > from {
        half
    } else {
        count - half
    };
    start..count
}

/// The concrete geometry an edge's sensor is built from.
#[derive(Clone, Debug, PartialEq)]
pub enum EdgeGeometry {
    /// `from == to`; carries the node centre.
    SelfLoop {
        /// Centre of the node the loop is attached to.
        center: Point,
    },
    /// A single segment with no opposite edge.
    Straight {
        /// Source centre.
        from: Point,
        /// Target centre.
        to: Point,
    },
    /// A single segment shared with the opposite edge; this direction owns
    /// the half from the midpoint to `to`.
    SharedStraight {
        /// Source centre.
        from: Point,
        /// Target centre.
        to: Point,
        /// Whether the exact midpoint belongs to this direction.
        owns_midpoint: bool,
    },
    /// A multi-segment route; `owned` indexes the segments of `path` this
    /// direction answers for.
    Routed {
        /// Full polyline in this edge's orientation.
        path: EdgePath,
        /// Owned segment range.
        owned: Range<usize>,
    },
}

/// Builds the geometry of `edge` from the current layout.
///
/// Returns `None` when the edge or one of its end nodes cannot be resolved;
/// such an edge is never hit.
///
/// The route used for a shared pair is this edge's own route points, or, if it
/// has none, the opposite edge's route reversed. An opposite edge that does not
/// resolve to a live edge running the other way is ignored.
pub fn edge_geometry<T: Topology>(topology: &T, edge: EdgeId) -> Option<EdgeGeometry> {
    let (from, to) = topology.edge_endpoints(edge)?;
    let from_center = topology.node_center(from);
    let to_center = topology.node_center(to);
    let (Some(from_center), Some(to_center)) = (from_center, to_center) else {
        #[cfg(feature = "tracing")]
        tracing::trace!(edge = edge.0, "edge endpoint does not resolve; edge is not hittable");
        return None;
    };

    if from == to {
        return Some(EdgeGeometry::SelfLoop {
            center: from_center,
        });
    }

    let inverse = resolve_inverse(topology, edge);
    let own_via = topology.edge_via_points(edge);
    let path = match inverse {
        Some(inverse) if own_via.is_empty() => {
            let inverse_via = topology.edge_via_points(inverse);
            EdgePath::new(from_center, inverse_via.iter().rev().copied(), to_center)
        }
        _ => EdgePath::new(from_center, own_via.iter().copied(), to_center),
    };

    let shared = inverse.is_some();
    Some(match (path.segment_count(), shared) {
        (1, false) => EdgeGeometry::Straight {
            from: from_center,
            to: to_center,
        },
        (1, true) => EdgeGeometry::SharedStraight {
            from: from_center,
            to: to_center,
            owns_midpoint: to > from,
        },
        (count, _) => EdgeGeometry::Routed {
            owned: owned_segments(count, from, to, shared),
            path,
        },
    })
}
