// Copyright 2025 the Relcanvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Octagon approximations of discs and rings.

use core::f64::consts::FRAC_1_SQRT_2;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Vec2};

use hashbrown::HashMap;

use crate::{HitKind, HitParams, HitScore, PreciseHitTest};

/// A regular octagon inscribed in a circle of a given radius, centred at the origin.
///
/// Vertices sit on the circle at multiples of 45°, starting on the +x axis and
/// winding with increasing angle. The polygon is immutable once built.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Octagon {
    radius: f64,
    vertices: [Vec2; 8],
}

impl Octagon {
    /// Builds the octagon for `radius`.
    ///
    /// Negative radii are treated as their absolute value.
    #[must_use]
    pub fn new(radius: f64) -> Self {
        let r = radius.abs();
        let d = r * FRAC_1_SQRT_2;
        Self {
            radius: r,
            vertices: [
                Vec2::new(r, 0.0),
                Vec2::new(d, d),
                Vec2::new(0.0, r),
                Vec2::new(-d, d),
                Vec2::new(-r, 0.0),
                Vec2::new(-d, -d),
                Vec2::new(0.0, -r),
                Vec2::new(d, -d),
            ],
        }
    }

    /// Returns the circumscribed radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the vertices relative to the centre.
    #[must_use]
    pub fn vertices(&self) -> &[Vec2; 8] {
        &self.vertices
    }

    /// Returns `true` if `offset` (relative to the centre) lies inside or on the octagon.
    #[must_use]
    pub fn contains(&self, offset: Vec2) -> bool {
        // A zero-radius octagon has no edges to test against.
        if self.radius == 0.0 {
            return offset == Vec2::ZERO;
        }
        self.edge_sides(offset).all(|side| side >= 0.0)
    }

    /// Returns `true` if `offset` lies strictly inside the octagon.
    #[must_use]
    pub fn contains_strict(&self, offset: Vec2) -> bool {
        self.radius > 0.0 && self.edge_sides(offset).all(|side| side > 0.0)
    }

    /// Bounding box prefilter followed by the exact polygon test.
    ///
    /// This is the disc sensor used for node bodies.
    #[must_use]
    pub fn circle_hit_test(&self, center: Point, pt: Point) -> bool {
        let offset = pt - center;
        self.bounds_contain(offset) && self.contains(offset)
    }

    fn bounds_contain(&self, offset: Vec2) -> bool {
        offset.x.abs() <= self.radius && offset.y.abs() <= self.radius
    }

    /// Signed side of `offset` relative to every edge; non-negative is inside.
    fn edge_sides(&self, offset: Vec2) -> impl Iterator<Item = f64> + '_ {
        (0..8).map(move |i| {
            let from = self.vertices[i];
            let to = self.vertices[(i + 1) % 8];
            (to - from).cross(offset - from)
        })
    }
}

/// Returns `true` if `pt` lies inside `outer` but not strictly inside `inner`.
///
/// Both octagons are centred on `center`. The inner boundary counts as part
/// of the ring, so the ring has no gap between the two outlines.
#[must_use]
pub fn annulus_hit_test(inner: &Octagon, outer: &Octagon, center: Point, pt: Point) -> bool {
    let offset = pt - center;
    outer.bounds_contain(offset) && outer.contains(offset) && !inner.contains_strict(offset)
}

/// Cache of octagons keyed by radius.
///
/// Each distinct radius is built once on first use. The stored polygons are
/// never modified afterwards, so references handed out by [`OctagonCache::get`]
/// stay valid for as long as the cache is borrowed.
#[derive(Clone, Debug, Default)]
pub struct OctagonCache {
    octagons: HashMap<u64, Octagon>,
}

impl OctagonCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cache prefilled with octagons for `radii`.
    #[must_use]
    pub fn with_radii(radii: impl IntoIterator<Item = f64>) -> Self {
        let mut cache = Self::new();
        for r in radii {
            cache.octagon(r);
        }
        cache
    }

    /// Returns the octagon for `radius`, building it on first use.
    pub fn octagon(&mut self, radius: f64) -> &Octagon {
        let radius = radius.abs();
        self.octagons
            .entry(radius.to_bits())
            .or_insert_with(|| Octagon::new(radius))
    }

    /// Returns the already-built octagon for `radius`, if any.
    #[must_use]
    pub fn get(&self, radius: f64) -> Option<&Octagon> {
        self.octagons.get(&radius.abs().to_bits())
    }

    /// Number of distinct radii built so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.octagons.len()
    }

    /// Returns `true` if nothing has been built yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.octagons.is_empty()
    }

    /// Disc test against the cached octagon for `radius`.
    pub fn circle_hit_test(&mut self, center: Point, radius: f64, pt: Point) -> bool {
        self.octagon(radius).circle_hit_test(center, pt)
    }

    /// Ring test against the cached octagons for `inner` and `outer`.
    pub fn annulus_hit_test(&mut self, center: Point, inner: f64, outer: f64, pt: Point) -> bool {
        let inner = *self.octagon(inner);
        let outer = *self.octagon(outer);
        annulus_hit_test(&inner, &outer, center, pt)
    }
}

/// A disc sensor: a centred octagon.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DiscSensor {
    /// Centre of the disc.
    pub center: Point,
    /// Prebuilt outline.
    pub octagon: Octagon,
}

impl PreciseHitTest for DiscSensor {
    fn hit_test_local(&self, pt: Point, params: &HitParams) -> Option<HitScore> {
        let offset = pt - self.center;
        let hit = if params.tolerance > 0.0 {
            scaled_contains(&self.octagon, offset, params.tolerance)
        } else {
            self.octagon.circle_hit_test(self.center, pt)
        };
        hit.then(|| HitScore {
            distance: offset.hypot(),
            kind: HitKind::Fill,
        })
    }
}

/// A ring sensor: an outer octagon minus an inner octagon sharing a centre.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AnnulusSensor {
    /// Centre of the ring.
    pub center: Point,
    /// Inner outline (excluded).
    pub inner: Octagon,
    /// Outer outline (included).
    pub outer: Octagon,
}

impl PreciseHitTest for AnnulusSensor {
    fn hit_test_local(&self, pt: Point, params: &HitParams) -> Option<HitScore> {
        let offset = pt - self.center;
        let hit = if params.tolerance > 0.0 {
            scaled_contains(&self.outer, offset, params.tolerance)
                && !scaled_contains_strict(&self.inner, offset, -params.tolerance)
        } else {
            annulus_hit_test(&self.inner, &self.outer, self.center, pt)
        };
        hit.then(|| {
            let mid = 0.5 * (self.inner.radius() + self.outer.radius());
            HitScore {
                distance: (offset.hypot() - mid).abs(),
                kind: HitKind::Stroke,
            }
        })
    }
}

/// Tests `offset` against `octagon` grown by `grow` without rebuilding it.
///
/// A regular octagon of radius `r + grow` contains `v` exactly when the
/// octagon of radius `r` contains `v * r / (r + grow)`.
fn scaled_contains(octagon: &Octagon, offset: Vec2, grow: f64) -> bool {
    let r = octagon.radius();
    let grown = r + grow;
    if grown <= 0.0 {
        return false;
    }
    if r == 0.0 {
        return offset.hypot() <= grown;
    }
    octagon.contains(offset * (r / grown))
}

/// Strict counterpart of [`scaled_contains`]; `grow` may be negative.
///
/// An octagon shrunk to nothing has no interior.
fn scaled_contains_strict(octagon: &Octagon, offset: Vec2, grow: f64) -> bool {
    let r = octagon.radius();
    let grown = r + grow;
    if grown <= 0.0 {
        return false;
    }
    if r == 0.0 {
        return offset.hypot() < grown;
    }
    octagon.contains_strict(offset * (r / grown))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn octagon_vertices_lie_on_circle() {
        let oct = Octagon::new(4.0);
        for v in oct.vertices() {
            assert!((v.hypot() - 4.0).abs() < 1e-12);
        }
        for v in oct.vertices() {
            assert!(oct.contains(*v), "vertex {v:?} should be on the boundary");
            assert!(!oct.contains_strict(*v));
        }
    }

    #[test]
    fn zero_radius_octagon_is_a_point() {
        let oct = Octagon::new(0.0);
        assert!(oct.contains(Vec2::ZERO));
        assert!(!oct.contains(Vec2::new(50.0, 50.0)));
        assert!(!oct.contains(Vec2::new(-1e-9, 0.0)));
        assert!(!oct.contains_strict(Vec2::ZERO));
    }

    #[test]
    fn shrunk_hole_matches_a_smaller_octagon() {
        let sensor = AnnulusSensor {
            center: Point::new(20.0, -10.0),
            inner: Octagon::new(8.0),
            outer: Octagon::new(16.0),
        };
        let params = HitParams { tolerance: 1.5 };
        let hole = Octagon::new(6.5);
        let rim = Octagon::new(17.5);
        for xi in -40_i32..=40 {
            for yi in -40_i32..=40 {
                let offset = Vec2::new(f64::from(xi) * 0.5, f64::from(yi) * 0.5);
                let near = |r: f64| {
                    Octagon::new(r - 1e-6).contains(offset)
                        != Octagon::new(r + 1e-6).contains(offset)
                };
                if near(6.5) || near(17.5) {
                    continue;
                }
                let expected = rim.contains(offset) && !hole.contains_strict(offset);
                assert_eq!(
                    sensor.contains_point(sensor.center + offset, &params),
                    expected,
                    "offset {offset:?}"
                );
            }
        }
    }

    #[test]
    fn tolerance_can_close_the_hole() {
        let sensor = AnnulusSensor {
            center: Point::ZERO,
            inner: Octagon::new(2.0),
            outer: Octagon::new(4.0),
        };
        assert!(!sensor.contains_point(Point::ZERO, &HitParams::default()));
        assert!(sensor.contains_point(Point::ZERO, &HitParams { tolerance: 3.0 }));
    }

    #[test]
    fn disc_is_clipped_at_diagonals() {
        let oct = Octagon::new(10.0);
        let c = Point::new(100.0, 100.0);
        // Inside the bounding box but past the diagonal edge.
        assert!(!oct.circle_hit_test(c, Point::new(109.0, 108.0)));
        // Inside the apothem (~9.24) on the diagonal.
        assert!(oct.circle_hit_test(c, Point::new(106.0, 106.0)));
        // Axis extremes are vertices.
        assert!(oct.circle_hit_test(c, Point::new(110.0, 100.0)));
        assert!(!oct.circle_hit_test(c, Point::new(110.1, 100.0)));
        assert!(!oct.circle_hit_test(c, Point::new(100.0, 89.0)));
    }

    #[test]
    fn annulus_excludes_hole_and_outside() {
        let inner = Octagon::new(5.0);
        let outer = Octagon::new(8.0);
        let c = Point::ZERO;
        assert!(!annulus_hit_test(&inner, &outer, c, Point::new(0.0, 0.0)));
        assert!(!annulus_hit_test(&inner, &outer, c, Point::new(3.0, 0.0)));
        assert!(annulus_hit_test(&inner, &outer, c, Point::new(5.0, 0.0)));
        assert!(annulus_hit_test(&inner, &outer, c, Point::new(0.0, -7.0)));
        assert!(!annulus_hit_test(&inner, &outer, c, Point::new(0.0, 8.5)));
    }

    #[test]
    fn cache_builds_each_radius_once() {
        let mut cache = OctagonCache::new();
        assert!(cache.is_empty());
        let _ = cache.circle_hit_test(Point::ZERO, 3.0, Point::ZERO);
        let _ = cache.circle_hit_test(Point::ZERO, 3.0, Point::new(1.0, 1.0));
        assert_eq!(cache.len(), 1);
        let _ = cache.annulus_hit_test(Point::ZERO, 3.0, 6.0, Point::new(4.0, 0.0));
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(6.0).map(Octagon::radius), Some(6.0));
        assert!(cache.get(7.0).is_none());
    }

    #[test]
    fn prefilled_cache_matches_direct_octagon() {
        let cache = OctagonCache::with_radii([2.0, 4.0]);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(4.0), Some(&Octagon::new(4.0)));
    }

    #[test]
    fn disc_sensor_tolerance_grows_radius() {
        let sensor = DiscSensor {
            center: Point::ZERO,
            octagon: Octagon::new(10.0),
        };
        let pt = Point::new(11.0, 0.0);
        assert!(sensor.hit_test_local(pt, &HitParams::default()).is_none());
        let score = sensor
            .hit_test_local(pt, &HitParams { tolerance: 2.0 })
            .unwrap();
        assert_eq!(score.kind, HitKind::Fill);
        assert!((score.distance - 11.0).abs() < 1e-12);
    }

    #[test]
    fn annulus_sensor_scores_distance_to_mid_radius() {
        let sensor = AnnulusSensor {
            center: Point::ZERO,
            inner: Octagon::new(4.0),
            outer: Octagon::new(8.0),
        };
        let score = sensor
            .hit_test_local(Point::new(7.0, 0.0), &HitParams::default())
            .unwrap();
        assert!((score.distance - 1.0).abs() < 1e-12);
        assert!(!sensor.contains_point(Point::new(3.5, 0.0), &HitParams::default()));
        assert!(sensor.contains_point(Point::new(3.5, 0.0), &HitParams { tolerance: 1.0 }));
    }
}
