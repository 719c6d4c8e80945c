// Copyright 2025 the Relcanvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node and edge sensors: "is this point over that node/edge?".

use kurbo::{Point, Vec2};
use relcanvas_precise_hit::{
    AnnulusSensor, DiscSensor, HitParams, Octagon, OctagonCache, PreciseHitTest, SegmentSensor,
};

use crate::path::{EdgeGeometry, edge_geometry};
use crate::topology::Topology;
use crate::types::{EdgeId, NodeFlags, NodeId};

/// Sizes of the sensor regions, in canvas units.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SensorParams {
    /// Radius of the disc drawn for every node.
    pub node_radius: f64,
    /// Half-width of the band around edge strokes and loop rings.
    pub edge_margin: f64,
    /// Radius of the circle drawn for a self-loop.
    pub loop_radius: f64,
    /// Extra slack added to every sensor.
    pub tolerance: f64,
}

impl Default for SensorParams {
    fn default() -> Self {
        Self {
            node_radius: 10.0,
            edge_margin: 4.0,
            loop_radius: 12.0,
            tolerance: 0.0,
        }
    }
}

/// Prebuilt sensor geometry for one canvas.
///
/// Octagons for the node disc and the loop ring are built once here and then
/// shared read-only by every hit test.
///
/// ```
/// use kurbo::Point;
/// use relcanvas_graph::{LayoutGraph, SensorParams, Sensors};
///
/// let mut graph = LayoutGraph::new();
/// let a = graph.add_node(Point::new(0.0, 0.0));
/// let b = graph.add_node(Point::new(100.0, 0.0));
/// let ab = graph.add_edge(a, b).unwrap();
///
/// let sensors = Sensors::new(SensorParams::default());
/// assert!(sensors.node_is_over(&graph, a, Point::new(3.0, 3.0)));
/// assert!(sensors.edge_is_over(&graph, ab, Point::new(50.0, 2.0)));
/// assert!(!sensors.edge_is_over(&graph, ab, Point::new(50.0, 6.0)));
/// ```
#[derive(Clone, Debug)]
pub struct Sensors {
    params: SensorParams,
    hit: HitParams,
    node: Octagon,
    loop_inner: Octagon,
    loop_outer: Octagon,
}

impl Default for Sensors {
    fn default() -> Self {
        Self::new(SensorParams::default())
    }
}

impl Sensors {
    /// Builds the sensor geometry for `params`.
    #[must_use]
    pub fn new(params: SensorParams) -> Self {
        let mut cache = OctagonCache::new();
        let node = *cache.octagon(params.node_radius);
        let loop_inner = *cache.octagon((params.loop_radius - params.edge_margin).max(0.0));
        let loop_outer = *cache.octagon(params.loop_radius + params.edge_margin);
        Self {
            params,
            hit: HitParams {
                tolerance: params.tolerance,
            },
            node,
            loop_inner,
            loop_outer,
        }
    }

    /// The parameters these sensors were built from.
    #[must_use]
    pub fn params(&self) -> &SensorParams {
        &self.params
    }

    /// Centre of the loop ring drawn for a self-loop on a node at `node_center`.
    ///
    /// The ring sits above the node (canvas "up" is −y), offset by half the
    /// loop radius.
    #[must_use]
    pub fn loop_center(&self, node_center: Point) -> Point {
        node_center - Vec2::new(0.0, 0.5 * self.params.loop_radius)
    }

    /// Returns `true` if `pt` is over `node`.
    ///
    /// Helper nodes and unknown nodes are never over.
    #[must_use]
    pub fn node_is_over<T: Topology>(&self, topology: &T, node: NodeId, pt: Point) -> bool {
        if topology.node_flags(node).contains(NodeFlags::HELPER) {
            return false;
        }
        let Some(center) = topology.node_center(node) else {
            return false;
        };
        DiscSensor {
            center,
            octagon: self.node,
        }
        .contains_point(pt, &self.hit)
    }

    /// Returns `true` if `pt` is over the directed edge `edge`.
    ///
    /// See [`EdgeGeometry`] for the cases. For a straight edge shared with its
    /// opposite, only the half nearest this edge's target is tested. The split
    /// is measured along the line from its lower-id end for both directions,
    /// so every point of the band belongs to exactly one of them; the exact
    /// midpoint goes to the direction whose `to` id is greater than its `from`.
    #[must_use]
    pub fn edge_is_over<T: Topology>(&self, topology: &T, edge: EdgeId, pt: Point) -> bool {
        edge_geometry(topology, edge).is_some_and(|geometry| self.geometry_is_over(&geometry, pt))
    }

    /// Returns `true` if `pt` is over an edge with the given geometry.
    #[must_use]
    pub fn geometry_is_over(&self, geometry: &EdgeGeometry, pt: Point) -> bool {
        let margin = self.params.edge_margin;
        match geometry {
            EdgeGeometry::SelfLoop { center } => AnnulusSensor {
                center: self.loop_center(*center),
                inner: self.loop_inner,
                outer: self.loop_outer,
            }
            .contains_point(pt, &self.hit),
            EdgeGeometry::Straight { from, to } => {
                SegmentSensor::new(*from, *to, margin).contains_point(pt, &self.hit)
            }
            EdgeGeometry::SharedStraight {
                from,
                to,
                owns_midpoint,
            } => {
                // Both directions measure along the same line, from the
                // lower-id end, so they split it at one exact parameter.
                let (low, high) = if *owns_midpoint {
                    (*from, *to)
                } else {
                    (*to, *from)
                };
                let line = SegmentSensor::new(low, high, margin);
                if !line.contains_point(pt, &self.hit) {
                    return false;
                }
                let t = line.project(pt);
                if *owns_midpoint { t >= 0.5 } else { t < 0.5 }
            }
            EdgeGeometry::Routed { path, owned } => owned.clone().any(|index| {
                path.segment(index).is_some_and(|(a, b)| {
                    SegmentSensor::new(a, b, margin).contains_point(pt, &self.hit)
                })
            }),
        }
    }
}
