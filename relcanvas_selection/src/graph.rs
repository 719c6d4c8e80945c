// Copyright 2025 the Relcanvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node and edge selection classes for canvases built on `relcanvas_graph`.
//!
//! A canvas implements [`GraphCanvas`] (layout access plus two visual
//! callbacks) and registers [`NodeClass`] and [`EdgeClass`]; the classes do the
//! enumeration and hit testing.
//!
//! ```rust
//! use kurbo::Point;
//! use relcanvas_graph::{GraphObject, LayoutGraph, Sensors};
//! use relcanvas_selection::graph::{GraphCanvas, GraphSelection, GraphTag, register_graph_classes};
//!
//! #[derive(Default)]
//! struct Canvas {
//!     graph: LayoutGraph,
//!     sensors: Sensors,
//!     repaints: u32,
//! }
//!
//! impl GraphCanvas for Canvas {
//!     type Topology = LayoutGraph;
//!     fn topology(&self) -> &LayoutGraph { &self.graph }
//!     fn sensors(&self) -> &Sensors { &self.sensors }
//!     fn set_highlighted(&mut self, _: GraphObject, _: bool) { self.repaints += 1; }
//!     fn set_selected(&mut self, _: GraphObject, _: bool) { self.repaints += 1; }
//! }
//!
//! let mut canvas = Canvas::default();
//! let a = canvas.graph.add_node(Point::new(0.0, 0.0));
//! let b = canvas.graph.add_node(Point::new(100.0, 0.0));
//! canvas.graph.add_edge(a, b).unwrap();
//!
//! let mut selection = GraphSelection::new(canvas);
//! register_graph_classes(&mut selection).unwrap();
//!
//! assert!(selection.pointer_moved(Point::new(2.0, 2.0)));
//! assert_eq!(selection.highlighted(), Some(GraphObject::Node(a)));
//! assert!(selection.pointer_pressed(Point::new(2.0, 2.0), false));
//! assert_eq!(selection.selection_class(), Some(&GraphTag::Nodes));
//! assert_eq!(selection.data().repaints, 2);
//! ```

use alloc::boxed::Box;

use kurbo::Point;
use relcanvas_graph::{GraphObject, NodeFlags, Sensors, Topology};

use crate::class::{ClassId, ClassSpec, RegisterError, SelectionClass};
use crate::manager::SelectionManager;

/// What a canvas exposes to the graph selection classes.
pub trait GraphCanvas {
    /// The layout the canvas draws.
    type Topology: Topology;

    /// Current layout.
    fn topology(&self) -> &Self::Topology;

    /// Sensor geometry used for hit testing.
    fn sensors(&self) -> &Sensors;

    /// Turn highlight emphasis of `object` on or off and schedule a repaint.
    fn set_highlighted(&mut self, object: GraphObject, on: bool);

    /// Turn selection emphasis of `object` on or off and schedule a repaint.
    fn set_selected(&mut self, object: GraphObject, on: bool);
}

/// Tags of the two graph classes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GraphTag {
    /// The node class.
    Nodes,
    /// The edge class.
    Edges,
}

/// A selection manager over graph objects.
pub type GraphSelection<D> = SelectionManager<GraphObject, GraphTag, D>;

/// Nodes are probed before edges and allow multiple selection.
pub const NODE_SPEC: ClassSpec<GraphTag> = ClassSpec::new(2, true, GraphTag::Nodes);

/// Edges are probed after nodes and allow multiple selection.
pub const EDGE_SPEC: ClassSpec<GraphTag> = ClassSpec::new(1, true, GraphTag::Edges);

/// Selection class for nodes. Helper nodes are neither enumerated nor hit.
#[derive(Copy, Clone, Debug, Default)]
pub struct NodeClass;

impl<D: GraphCanvas> SelectionClass<GraphObject, D> for NodeClass {
    fn is_over(&self, data: &D, object: GraphObject, pt: Point) -> bool {
        object
            .node()
            .is_some_and(|node| data.sensors().node_is_over(data.topology(), node, pt))
    }

    fn live_objects<'a>(&'a self, data: &'a D) -> Box<dyn Iterator<Item = GraphObject> + 'a> {
        let topology = data.topology();
        Box::new(
            topology
                .nodes()
                .filter(move |&node| !topology.node_flags(node).contains(NodeFlags::HELPER))
                .map(GraphObject::Node),
        )
    }

    fn highlight(&self, data: &mut D, object: GraphObject) {
        data.set_highlighted(object, true);
    }

    fn unhighlight(&self, data: &mut D, object: GraphObject) {
        data.set_highlighted(object, false);
    }

    fn select(&self, data: &mut D, object: GraphObject) {
        data.set_selected(object, true);
    }

    fn unselect(&self, data: &mut D, object: GraphObject) {
        data.set_selected(object, false);
    }
}

/// Selection class for directed edges.
#[derive(Copy, Clone, Debug, Default)]
pub struct EdgeClass;

impl<D: GraphCanvas> SelectionClass<GraphObject, D> for EdgeClass {
    fn is_over(&self, data: &D, object: GraphObject, pt: Point) -> bool {
        object
            .edge()
            .is_some_and(|edge| data.sensors().edge_is_over(data.topology(), edge, pt))
    }

    fn live_objects<'a>(&'a self, data: &'a D) -> Box<dyn Iterator<Item = GraphObject> + 'a> {
        Box::new(data.topology().edges().map(GraphObject::Edge))
    }

    fn highlight(&self, data: &mut D, object: GraphObject) {
        data.set_highlighted(object, true);
    }

    fn unhighlight(&self, data: &mut D, object: GraphObject) {
        data.set_highlighted(object, false);
    }

    fn select(&self, data: &mut D, object: GraphObject) {
        data.set_selected(object, true);
    }

    fn unselect(&self, data: &mut D, object: GraphObject) {
        data.set_selected(object, false);
    }
}

/// Registers [`NodeClass`] with [`NODE_SPEC`] and [`EdgeClass`] with [`EDGE_SPEC`].
///
/// # Errors
///
/// Fails if either tag is already registered.
pub fn register_graph_classes<D>(
    manager: &mut GraphSelection<D>,
) -> Result<(ClassId, ClassId), RegisterError>
where
    D: GraphCanvas,
{
    let nodes = manager.register_class(NODE_SPEC, NodeClass)?;
    let edges = manager.register_class(EDGE_SPEC, EdgeClass)?;
    Ok((nodes, edges))
}
