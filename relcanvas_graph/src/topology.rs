// Copyright 2025 the Relcanvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The read-only view of graph layout consumed by the sensors.

use kurbo::Point;

use crate::types::{EdgeId, NodeFlags, NodeId};

/// Read-only access to node/edge existence and layout.
///
/// The sensors never mutate the topology and never hold on to anything they
/// read from it; every hit test re-reads the current layout. Lookups for
/// handles that are no longer live return `None` (or an empty value), which
/// the sensors treat as "not over".
pub trait Topology {
    /// Centre of `node` in canvas coordinates.
    fn node_center(&self, node: NodeId) -> Option<Point>;

    /// Flags of `node`. Unknown nodes report no flags.
    fn node_flags(&self, node: NodeId) -> NodeFlags;

    /// `(from, to)` of `edge`.
    fn edge_endpoints(&self, edge: EdgeId) -> Option<(NodeId, NodeId)>;

    /// Intermediate route points of `edge`, ordered from `from` to `to`.
    ///
    /// Straight edges report an empty slice.
    fn edge_via_points(&self, edge: EdgeId) -> &[Point];

    /// Live node handles in enumeration order.
    fn nodes(&self) -> impl Iterator<Item = NodeId> + '_;

    /// Live edge handles in enumeration order.
    fn edges(&self) -> impl Iterator<Item = EdgeId> + '_;

    /// The edge going the opposite way, if any.
    ///
    /// The default scans [`Topology::edges`]; implementations with an index
    /// should override it. Callers still validate the answer, see
    /// [`resolve_inverse`].
    fn inverse_edge(&self, edge: EdgeId) -> Option<EdgeId> {
        let (from, to) = self.edge_endpoints(edge)?;
        self.edges()
            .find(|&other| other != edge && self.edge_endpoints(other) == Some((to, from)))
    }
}

/// Returns the inverse of `edge` only if it really is a live, distinct edge
/// running `to → from`.
///
/// Anything else (no inverse, a dangling handle, an edge with the wrong
/// endpoints, a self-loop) yields `None`, and the caller treats the edge as
/// unidirectional.
pub fn resolve_inverse<T: Topology>(topology: &T, edge: EdgeId) -> Option<EdgeId> {
    let (from, to) = topology.edge_endpoints(edge)?;
    if from == to {
        return None;
    }
    let inverse = topology.inverse_edge(edge)?;
    if inverse != edge && topology.edge_endpoints(inverse) == Some((to, from)) {
        Some(inverse)
    } else {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            edge = edge.0,
            claimed = inverse.0,
            "inverse edge does not resolve; treating edge as unidirectional"
        );
        None
    }
}
