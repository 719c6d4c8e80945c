// Copyright 2025 the Relcanvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types: node and edge handles, node flags, and the selectable object handle.

/// Identifier for a node.
///
/// Identifiers are totally ordered. That order is part of the edge model:
/// when two opposite edges share an odd number of segments, the middle one
/// belongs to the direction whose `to` node compares greater than its `from`
/// node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub u32);

/// Identifier for a directed edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub u32);

bitflags::bitflags! {
    /// Node flags controlling picking.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// Auxiliary node used internally by the layout. Never hit-testable,
        /// never highlighted or selected.
        const HELPER = 0b0000_0001;
    }
}

/// A handle to exactly one node or edge.
///
/// This is the object type the selection manager tracks for graph canvases.
/// It is compared by identity only; the topology owner must tell the manager
/// before a handle becomes invalid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GraphObject {
    /// A node.
    Node(NodeId),
    /// A directed edge.
    Edge(EdgeId),
}

impl GraphObject {
    /// Returns the node handle, if this is a node.
    #[must_use]
    pub fn node(self) -> Option<NodeId> {
        match self {
            Self::Node(id) => Some(id),
            Self::Edge(_) => None,
        }
    }

    /// Returns the edge handle, if this is an edge.
    #[must_use]
    pub fn edge(self) -> Option<EdgeId> {
        match self {
            Self::Edge(id) => Some(id),
            Self::Node(_) => None,
        }
    }
}

impl From<NodeId> for GraphObject {
    fn from(id: NodeId) -> Self {
        Self::Node(id)
    }
}

impl From<EdgeId> for GraphObject {
    fn from(id: EdgeId) -> Self {
        Self::Edge(id)
    }
}
