// Copyright 2025 the Relcanvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests mixing the public sensors behind `PreciseHitTest`.

use kurbo::Point;
use relcanvas_precise_hit::{
    AnnulusSensor, DiscSensor, HitKind, HitParams, Octagon, OctagonCache, PreciseHitTest,
    SegmentSensor, segment_hit_test,
};

#[test]
fn diagonal_segment_ignores_endpoint_order() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(10.0, 10.0);
    for (from, to) in [(a, b), (b, a)] {
        assert!(segment_hit_test(from, to, Point::new(5.0, 5.5), 1.0));
        assert!(!segment_hit_test(from, to, Point::new(5.0, 7.0), 1.0));
        assert!(!segment_hit_test(from, to, Point::new(11.0, 11.0), 1.0));
        assert!(segment_hit_test(from, to, b, 1.0));
    }
}

#[test]
fn annulus_boundaries_are_inclusive() {
    let mut cache = OctagonCache::with_radii([8.0, 16.0]);
    let center = Point::new(0.0, 0.0);
    assert!(cache.annulus_hit_test(center, 8.0, 16.0, Point::new(8.0, 0.0)));
    assert!(cache.annulus_hit_test(center, 8.0, 16.0, Point::new(16.0, 0.0)));
    assert!(cache.annulus_hit_test(center, 8.0, 16.0, Point::new(0.0, -12.0)));
    assert!(!cache.annulus_hit_test(center, 8.0, 16.0, Point::new(4.0, 0.0)));
    assert!(!cache.annulus_hit_test(center, 8.0, 16.0, Point::new(17.0, 0.0)));
    assert_eq!(cache.len(), 2);
}

#[test]
fn closest_sensor_wins_by_score() {
    let mut cache = OctagonCache::new();
    let disc = DiscSensor {
        center: Point::new(0.0, 0.0),
        octagon: *cache.octagon(10.0),
    };
    let ring = AnnulusSensor {
        center: Point::new(20.0, 0.0),
        inner: *cache.octagon(8.0),
        outer: *cache.octagon(16.0),
    };
    let stroke = SegmentSensor::new(Point::new(0.0, 8.0), Point::new(40.0, 8.0), 4.0);
    let sensors: [&dyn PreciseHitTest; 3] = [&disc, &ring, &stroke];

    let pt = Point::new(6.0, 6.0);
    let params = HitParams::default();
    let best = sensors
        .iter()
        .filter_map(|sensor| sensor.hit_test_local(pt, &params))
        .min_by(|x, y| x.distance.total_cmp(&y.distance))
        .unwrap();
    assert_eq!(best.kind, HitKind::Stroke);
    assert!((best.distance - 2.0).abs() < 1e-9);
}

#[test]
fn tolerance_grows_every_sensor() {
    let disc = DiscSensor {
        center: Point::new(0.0, 0.0),
        octagon: Octagon::new(10.0),
    };
    let stroke = SegmentSensor::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0), 1.0);
    let loose = HitParams { tolerance: 1.0 };

    let near_disc = Point::new(10.5, 0.0);
    assert!(!disc.contains_point(near_disc, &HitParams::default()));
    assert!(disc.contains_point(near_disc, &loose));

    let near_stroke = Point::new(5.0, 1.5);
    assert!(!stroke.contains_point(near_stroke, &HitParams::default()));
    assert!(stroke.contains_point(near_stroke, &loose));
}
