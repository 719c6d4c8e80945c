// Copyright 2025 the Relcanvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An in-memory [`Topology`] for embedders without a graph model of their own.

use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;
use kurbo::Point;
use smallvec::SmallVec;

use crate::topology::Topology;
use crate::types::{EdgeId, GraphObject, NodeFlags, NodeId};

/// Error returned by fallible [`LayoutGraph`] mutations.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// The node handle does not refer to a live node.
    UnknownNode(NodeId),
    /// The edge handle does not refer to a live edge.
    UnknownEdge(EdgeId),
    /// An edge with the same direction already connects the two nodes.
    DuplicateEdge {
        /// Source node.
        from: NodeId,
        /// Target node.
        to: NodeId,
    },
}

impl fmt::Debug for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownNode(node) => write!(f, "LayoutError::UnknownNode({})", node.0),
            Self::UnknownEdge(edge) => write!(f, "LayoutError::UnknownEdge({})", edge.0),
            Self::DuplicateEdge { from, to } => write!(
                f,
                "LayoutError::DuplicateEdge {{ from: {}, to: {} }}",
                from.0, to.0
            ),
        }
    }
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownNode(node) => write!(f, "node {} does not exist", node.0),
            Self::UnknownEdge(edge) => write!(f, "edge {} does not exist", edge.0),
            Self::DuplicateEdge { from, to } => {
                write!(f, "an edge {} -> {} already exists", from.0, to.0)
            }
        }
    }
}

impl core::error::Error for LayoutError {}

#[derive(Clone, Debug)]
struct NodeSlot {
    center: Point,
    flags: NodeFlags,
}

#[derive(Clone, Debug)]
struct EdgeSlot {
    from: NodeId,
    to: NodeId,
    via: SmallVec<[Point; 4]>,
}

/// A small graph layout: node centres, flags, directed edges and their routes.
///
/// At most one edge exists per ordered `(from, to)` pair, which is what a
/// binary relation needs. Handles are allocated from increasing counters and
/// never reused. Enumeration follows insertion order.
///
/// This type owns the objects the selection manager refers to. Every removal
/// returns the handles that died so the caller can pass each one to the
/// manager's `unref` before drawing again.
///
/// ```
/// use kurbo::Point;
/// use relcanvas_graph::{GraphObject, LayoutGraph, Topology};
///
/// let mut graph = LayoutGraph::new();
/// let a = graph.add_node(Point::new(0.0, 0.0));
/// let b = graph.add_node(Point::new(100.0, 0.0));
/// let ab = graph.add_edge(a, b).unwrap();
/// let ba = graph.add_edge(b, a).unwrap();
/// assert_eq!(graph.inverse_edge(ab), Some(ba));
///
/// let removed = graph.remove_node(b).unwrap();
/// assert_eq!(
///     removed,
///     vec![GraphObject::Edge(ab), GraphObject::Edge(ba), GraphObject::Node(b)]
/// );
/// assert_eq!(graph.edges().count(), 0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct LayoutGraph {
    nodes: HashMap<NodeId, NodeSlot>,
    node_order: Vec<NodeId>,
    edges: HashMap<EdgeId, EdgeSlot>,
    edge_order: Vec<EdgeId>,
    by_endpoints: HashMap<(NodeId, NodeId), EdgeId>,
    next_node: u32,
    next_edge: u32,
}

impl LayoutGraph {
    /// Creates an empty layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a regular node at `center`.
    pub fn add_node(&mut self, center: Point) -> NodeId {
        self.add_node_with_flags(center, NodeFlags::empty())
    }

    /// Adds a node at `center` with `flags`.
    pub fn add_node_with_flags(&mut self, center: Point, flags: NodeFlags) -> NodeId {
        let id = NodeId(self.next_node);
        self.next_node += 1;
        self.nodes.insert(id, NodeSlot { center, flags });
        self.node_order.push(id);
        id
    }

    /// Adds a straight edge `from → to`.
    ///
    /// `from == to` adds a self-loop.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) -> Result<EdgeId, LayoutError> {
        self.add_routed_edge(from, to, [])
    }

    /// Adds an edge `from → to` routed through `via`.
    pub fn add_routed_edge(
        &mut self,
        from: NodeId,
        to: NodeId,
        via: impl IntoIterator<Item = Point>,
    ) -> Result<EdgeId, LayoutError> {
        for node in [from, to] {
            if !self.nodes.contains_key(&node) {
                return Err(LayoutError::UnknownNode(node));
            }
        }
        if self.by_endpoints.contains_key(&(from, to)) {
            return Err(LayoutError::DuplicateEdge { from, to });
        }
        let id = EdgeId(self.next_edge);
        self.next_edge += 1;
        self.edges.insert(
            id,
            EdgeSlot {
                from,
                to,
                via: via.into_iter().collect(),
            },
        );
        self.edge_order.push(id);
        self.by_endpoints.insert((from, to), id);
        Ok(id)
    }

    /// Replaces the route of `edge`.
    pub fn set_via_points(
        &mut self,
        edge: EdgeId,
        via: impl IntoIterator<Item = Point>,
    ) -> Result<(), LayoutError> {
        let slot = self
            .edges
            .get_mut(&edge)
            .ok_or(LayoutError::UnknownEdge(edge))?;
        slot.via = via.into_iter().collect();
        Ok(())
    }

    /// Moves `node` to `center`.
    pub fn move_node(&mut self, node: NodeId, center: Point) -> Result<(), LayoutError> {
        let slot = self
            .nodes
            .get_mut(&node)
            .ok_or(LayoutError::UnknownNode(node))?;
        slot.center = center;
        Ok(())
    }

    /// Replaces the flags of `node`.
    pub fn set_node_flags(&mut self, node: NodeId, flags: NodeFlags) -> Result<(), LayoutError> {
        let slot = self
            .nodes
            .get_mut(&node)
            .ok_or(LayoutError::UnknownNode(node))?;
        slot.flags = flags;
        Ok(())
    }

    /// Looks up the edge `from → to`.
    #[must_use]
    pub fn edge_between(&self, from: NodeId, to: NodeId) -> Option<EdgeId> {
        self.by_endpoints.get(&(from, to)).copied()
    }

    /// Removes `edge` and returns its handle as a [`GraphObject`].
    pub fn remove_edge(&mut self, edge: EdgeId) -> Result<GraphObject, LayoutError> {
        let slot = self
            .edges
            .remove(&edge)
            .ok_or(LayoutError::UnknownEdge(edge))?;
        self.by_endpoints.remove(&(slot.from, slot.to));
        self.edge_order.retain(|&e| e != edge);
        Ok(GraphObject::Edge(edge))
    }

    /// Removes `node` and every incident edge.
    ///
    /// Returns the removed handles: incident edges in enumeration order, then
    /// the node itself.
    pub fn remove_node(&mut self, node: NodeId) -> Result<Vec<GraphObject>, LayoutError> {
        if !self.nodes.contains_key(&node) {
            return Err(LayoutError::UnknownNode(node));
        }
        let incident: Vec<EdgeId> = self
            .edge_order
            .iter()
            .copied()
            .filter(|e| {
                self.edges
                    .get(e)
                    .is_some_and(|slot| slot.from == node || slot.to == node)
            })
            .collect();
        let mut removed = Vec::with_capacity(incident.len() + 1);
        for edge in incident {
            removed.push(self.remove_edge(edge)?);
        }
        self.nodes.remove(&node);
        self.node_order.retain(|&n| n != node);
        removed.push(GraphObject::Node(node));
        Ok(removed)
    }

    /// Number of live nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_order.len()
    }

    /// Number of live edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_order.len()
    }
}

impl Topology for LayoutGraph {
    fn node_center(&self, node: NodeId) -> Option<Point> {
        self.nodes.get(&node).map(|slot| slot.center)
    }

    fn node_flags(&self, node: NodeId) -> NodeFlags {
        self.nodes
            .get(&node)
            .map_or(NodeFlags::empty(), |slot| slot.flags)
    }

    fn edge_endpoints(&self, edge: EdgeId) -> Option<(NodeId, NodeId)> {
        self.edges.get(&edge).map(|slot| (slot.from, slot.to))
    }

    fn edge_via_points(&self, edge: EdgeId) -> &[Point] {
        self.edges
            .get(&edge)
            .map(|slot| slot.via.as_slice())
            .unwrap_or_default()
    }

    fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.node_order.iter().copied()
    }

    fn edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edge_order.iter().copied()
    }

    fn inverse_edge(&self, edge: EdgeId) -> Option<EdgeId> {
        let slot = self.edges.get(&edge)?;
        self.edge_between(slot.to, slot.from)
    }
}
