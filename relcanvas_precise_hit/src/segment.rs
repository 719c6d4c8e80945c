// Copyright 2025 the Relcanvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Oriented segment sensors.

use core::f64::consts::FRAC_PI_2;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Affine, Point, Vec2};

use crate::{HitKind, HitParams, HitScore, PreciseHitTest};

/// Segments shorter than this are treated as points.
const DEGENERATE_LENGTH: f64 = 1e-9;

/// Relative slack on the rectangle boundary, well above rotation rounding error.
const END_SLACK: f64 = 1e-12;

/// Returns `true` if `pt` lies within the margin rectangle around `a–b`.
///
/// The rectangle has half-width `margin`, is centred on the segment and is
/// oriented with it. It has square ends exactly at `a` and `b` (no caps), and
/// its boundary is inclusive.
///
/// A zero-length segment degenerates to a disc of radius `margin` around `a`.
#[must_use]
pub fn segment_hit_test(a: Point, b: Point, pt: Point, margin: f64) -> bool {
    match local_offsets(a, b, pt) {
        Some((across, along, len)) => {
            // Points exactly on the boundary must survive the rotation.
            let slack = len * END_SLACK;
            across.abs() <= margin + slack && (-slack..=len + slack).contains(&along)
        }
        None => (pt - a).hypot() <= margin,
    }
}

/// Maps `pt` into the frame of segment `a–b`.
///
/// Returns `(across, along, length)`: the perpendicular offset, the offset
/// along the segment measured from its canonical start, and the segment
/// length. Returns `None` for degenerate segments.
///
/// The endpoints are canonicalised so that the left-most one is the origin;
/// the frame is then rotated so that the segment points down the +y axis.
fn local_offsets(a: Point, b: Point, pt: Point) -> Option<(f64, f64, f64)> {
    let (a, b) = if a.x > b.x { (b, a) } else { (a, b) };
    let dir: Vec2 = b - a;
    let len = dir.hypot();
    if len <= DEGENERATE_LENGTH {
        return None;
    }
    let local = Affine::rotate(FRAC_PI_2 - dir.atan2()) * (pt - a).to_point();
    Some((local.x, local.y, len))
}

/// A segment sensor with a fixed margin.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SegmentSensor {
    /// First endpoint.
    pub a: Point,
    /// Second endpoint.
    pub b: Point,
    /// Half-width of the sensor rectangle.
    pub margin: f64,
}

impl SegmentSensor {
    /// Creates a sensor for `a–b` with the given half-width.
    #[must_use]
    pub const fn new(a: Point, b: Point, margin: f64) -> Self {
        Self { a, b, margin }
    }

    /// Returns the segment midpoint.
    #[must_use]
    pub fn midpoint(&self) -> Point {
        self.a.midpoint(self.b)
    }

    /// Returns the projection parameter of `pt` onto `a → b`.
    ///
    /// `0.0` is `a`, `1.0` is `b`. Unlike the hit test, this is measured from
    /// `a` regardless of the endpoints' horizontal order. Degenerate segments
    /// report `0.0`.
    #[must_use]
    pub fn project(&self, pt: Point) -> f64 {
        let dir = self.b - self.a;
        let len_sq = dir.hypot2();
        if len_sq <= DEGENERATE_LENGTH * DEGENERATE_LENGTH {
            return 0.0;
        }
        (pt - self.a).dot(dir) / len_sq
    }
}

impl PreciseHitTest for SegmentSensor {
    fn hit_test_local(&self, pt: Point, params: &HitParams) -> Option<HitScore> {
        let margin = self.margin + params.tolerance;
        if !segment_hit_test(self.a, self.b, pt, margin) {
            return None;
        }
        let distance = match local_offsets(self.a, self.b, pt) {
            Some((across, _, _)) => across.abs(),
            None => (pt - self.a).hypot(),
        };
        Some(HitScore {
            distance,
            kind: HitKind::Stroke,
        })
    }
}
