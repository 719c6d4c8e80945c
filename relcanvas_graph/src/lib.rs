// Copyright 2025 the Relcanvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Relcanvas Graph: edge paths and node/edge sensors for relation graph canvases.
//!
//! This crate turns abstract graph layout (node centres, directed edges, route
//! points) into the concrete 2D regions in which a pointer counts as being
//! "over" a node or an edge. It does not own a graph model: layout is read
//! through the [`Topology`] trait on every query. [`LayoutGraph`] is a small
//! in-memory implementation for tests and simple embedders.
//!
//! ## Sensors
//!
//! - **Nodes**: an octagon-approximated disc of [`SensorParams::node_radius`]
//!   around the centre. Nodes flagged [`NodeFlags::HELPER`] are never hit.
//! - **Self-loops**: a ring of half-width [`SensorParams::edge_margin`] around
//!   a loop circle sitting above the node.
//! - **Straight edges**: a band of half-width `edge_margin` around the segment.
//! - **Opposite straight edges** (`u → v` and `v → u`, one shared line): each
//!   direction only answers for the half nearest its own target.
//! - **Routed edges**: the polyline through the route points; with an opposite
//!   edge the segments are split per [`owned_segments`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use relcanvas_graph::{LayoutGraph, Sensors};
//!
//! let mut graph = LayoutGraph::new();
//! let a = graph.add_node(Point::new(0.0, 0.0));
//! let b = graph.add_node(Point::new(100.0, 0.0));
//! let ab = graph.add_edge(a, b).unwrap();
//! let ba = graph.add_edge(b, a).unwrap();
//!
//! let sensors = Sensors::default();
//! // Near `b`: only `a → b` (arrowhead at `b`) answers.
//! let near_b = Point::new(80.0, 1.0);
//! assert!(sensors.edge_is_over(&graph, ab, near_b));
//! assert!(!sensors.edge_is_over(&graph, ba, near_b));
//! ```
//!
//! ## Inconsistent topology
//!
//! Hit tests never fail. An edge whose end node cannot be resolved is never
//! over; an edge whose claimed opposite does not resolve to a live edge running
//! the other way is treated as unidirectional. With the `tracing` feature these
//! degradations are reported as `trace` events.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod layout;
mod path;
mod sensors;
mod topology;
mod types;

pub use layout::{LayoutError, LayoutGraph};
pub use path::{EdgeGeometry, EdgePath, edge_geometry, owned_segments};
pub use sensors::{SensorParams, Sensors};
pub use topology::{Topology, resolve_inverse};
pub use types::{EdgeId, GraphObject, NodeFlags, NodeId};
