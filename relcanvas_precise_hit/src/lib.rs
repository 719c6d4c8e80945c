// Copyright 2025 the Relcanvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Relcanvas Precise Hit: geometry-level sensor primitives for graph canvases.
//!
//! This crate answers one question: "does this point lie inside this sensor
//! region?". It knows nothing about nodes, edges or selection; higher layers
//! (`relcanvas_graph`) compose these primitives into per-object sensors.
//!
//! Three primitives are provided:
//!
//! - [`segment_hit_test`]: a rectangle of half-width `margin` centred on a
//!   segment and oriented with it. Used for edge strokes.
//! - [`Octagon::circle_hit_test`]: a disc approximated by a regular octagon
//!   inscribed in the circle. Used for node bodies.
//! - [`annulus_hit_test`]: an outer octagon minus an inner octagon. Used for
//!   self-loop rings.
//!
//! Octagons are built once per distinct radius; [`OctagonCache`] keeps them
//! around so repeated queries with the same radius do not rebuild the polygon.
//! Built octagons are plain `Copy` values and never change afterwards.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use relcanvas_precise_hit::{OctagonCache, segment_hit_test};
//!
//! // A horizontal segment with a 2 unit margin on each side.
//! let a = Point::new(0.0, 0.0);
//! let b = Point::new(10.0, 0.0);
//! assert!(segment_hit_test(a, b, Point::new(5.0, 1.5), 2.0));
//! assert!(!segment_hit_test(a, b, Point::new(5.0, 2.5), 2.0));
//! // No round caps: points past the end are outside.
//! assert!(!segment_hit_test(a, b, Point::new(11.0, 0.0), 2.0));
//!
//! let mut cache = OctagonCache::new();
//! let center = Point::new(50.0, 50.0);
//! assert!(cache.circle_hit_test(center, 10.0, Point::new(55.0, 52.0)));
//! assert!(!cache.circle_hit_test(center, 10.0, Point::new(59.0, 59.0)));
//! assert!(cache.annulus_hit_test(center, 8.0, 12.0, Point::new(60.0, 50.0)));
//! assert!(!cache.annulus_hit_test(center, 8.0, 12.0, center));
//! ```
//!
//! ## Scoring
//!
//! Every sensor also implements [`PreciseHitTest`], which reports a
//! [`HitScore`] for hits so callers that want "nearest wins" behavior can
//! rank candidates. The boolean free functions are what the selection engine
//! uses; the scored form is additive.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod octagon;
mod segment;

pub use octagon::{AnnulusSensor, DiscSensor, Octagon, OctagonCache, annulus_hit_test};
pub use segment::{SegmentSensor, segment_hit_test};

use kurbo::Point;

/// Kind of geometry that produced a hit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HitKind {
    /// The point lies inside a filled region (a node disc).
    Fill,
    /// The point lies on a stroked region (an edge segment or loop ring).
    Stroke,
}

/// Result of a successful precise hit test.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HitScore {
    /// Distance from the query point to the sensor's reference geometry.
    ///
    /// For discs this is the distance to the center; for segments it is the
    /// perpendicular distance to the centerline; for rings it is the distance
    /// to the ring's mid radius. Smaller is closer.
    pub distance: f64,
    /// Which kind of geometry was hit.
    pub kind: HitKind,
}

/// Parameters shared by precise hit tests.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HitParams {
    /// Extra slack added to every sensor, in local units.
    ///
    /// Segments widen their margin by this amount and octagons grow their
    /// radius by it. Zero reproduces the bare sensor regions.
    pub tolerance: f64,
}

impl Default for HitParams {
    fn default() -> Self {
        Self { tolerance: 0.0 }
    }
}

/// A sensor that can decide whether a point lies inside it.
pub trait PreciseHitTest {
    /// Tests `pt` (in the sensor's coordinate space) and returns a score on hit.
    fn hit_test_local(&self, pt: Point, params: &HitParams) -> Option<HitScore>;

    /// Convenience wrapper returning only whether `pt` hits.
    fn contains_point(&self, pt: Point, params: &HitParams) -> bool {
        self.hit_test_local(pt, params).is_some()
    }
}
