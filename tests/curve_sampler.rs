use bezier_spin::lowlevel::{bezier_point, sample_count};
use bezier_spin::{BinomialTable, CurveConfig, CurveSampler, Point, SpinError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::{FRAC_PI_2, PI};
use std::sync::Arc;

fn sampler() -> CurveSampler {
    let table = Arc::new(BinomialTable::new(19).unwrap());
    CurveSampler::new(table, CurveConfig::default())
}

fn pts(coords: &[(i32, i32)]) -> Vec<Point> {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

#[test]
fn quadratic_scenario_hits_both_endpoints() {
    let table = BinomialTable::new(19).unwrap();
    assert_eq!(table.row(2).unwrap(), &[1, 2, 1]);

    let controls = pts(&[(0, 0), (10, 0), (10, 10)]);
    let row = table.row(2).unwrap();
    assert_eq!(bezier_point(row, &controls, 0.0), Point::new(0, 0));
    assert_eq!(bezier_point(row, &controls, 1.0), Point::new(10, 10));
    assert_eq!(bezier_point(row, &controls, 0.5), Point::new(8, 3));

    let mut curve = sampler();
    curve.set_control_points(controls).unwrap();
    // Span 10 -> 5 steps -> 6 samples.
    assert_eq!(curve.len(), 6);
    assert_eq!(curve.points().first(), Some(&Point::new(0, 0)));
    assert_eq!(curve.points().last(), Some(&Point::new(10, 10)));
    assert_eq!(curve.first(), Some(Point::new(0, 0)));
    assert_eq!(curve.last(), Some(Point::new(10, 10)));
}

#[test]
fn random_curves_start_and_end_on_their_control_points() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut curve = sampler();
    for _ in 0..25 {
        let count = rng.random_range(3..=20);
        curve.generate_with(&mut rng, count).unwrap();
        assert_eq!(curve.control_points().len(), count);
        assert!(curve
            .control_points()
            .iter()
            .all(|p| (0..800).contains(&p.x) && (0..800).contains(&p.y)));
        assert_eq!(curve.points().first().copied(), curve.first());
        assert_eq!(curve.points().last().copied(), curve.last());
        assert_eq!(curve.len(), sample_count(curve.control_points()) + 1);
        assert!(curve.cursor() < curve.len());
    }
}

#[test]
fn sample_count_follows_half_the_larger_span() {
    assert_eq!(sample_count(&pts(&[(0, 0), (100, 10), (40, 60)])), 50);
    assert_eq!(sample_count(&pts(&[(5, 0), (5, 31), (5, 2)])), 15);
    // Degenerate spans still produce one step.
    assert_eq!(sample_count(&pts(&[(7, 7), (7, 7), (7, 7)])), 1);
    assert_eq!(sample_count(&pts(&[(0, 0), (1, 1), (0, 1)])), 1);
}

#[test]
fn degenerate_curve_has_two_identical_samples() {
    let mut curve = sampler();
    curve
        .set_control_points(pts(&[(7, 7), (7, 7), (7, 7)]))
        .unwrap();
    assert_eq!(curve.points(), &[Point::new(7, 7), Point::new(7, 7)]);
    assert_eq!(curve.current_angle(), None);
}

#[test]
fn cursor_ping_pongs_within_bounds() {
    let mut curve = sampler();
    curve
        .set_control_points(pts(&[(0, 0), (40, 80), (80, 0)]))
        .unwrap();
    let len = curve.len();
    let last = len - 1;
    assert_eq!(curve.cursor(), 0);

    let mut prev = curve.cursor();
    let mut reversals = Vec::new();
    for _ in 0..(len * 5) {
        let dir_before = curve.direction();
        curve.next().unwrap();
        let idx = curve.cursor();
        assert!(idx <= last);
        assert_eq!(idx.abs_diff(prev), 1);
        if curve.direction() != dir_before {
            reversals.push(prev);
        }
        prev = idx;
    }
    assert!(!reversals.is_empty());
    assert!(reversals.iter().all(|&at| at == 0 || at == last));
    assert_eq!(reversals[0], last);
}

#[test]
fn minimal_curve_bounces_between_two_samples() {
    let table = Arc::new(BinomialTable::new(3).unwrap());
    let mut curve = CurveSampler::new(table, CurveConfig::default());
    assert_eq!(curve.current(), None);
    assert_eq!(curve.next(), None);

    curve
        .set_control_points(pts(&[(1, 1), (1, 1), (2, 2)]))
        .unwrap();
    // One step still yields both endpoints.
    assert_eq!(curve.len(), 2);
    for _ in 0..5 {
        curve.next();
        assert!(curve.cursor() < 2);
    }
}

#[test]
fn tangent_angle_follows_curve_direction() {
    let mut curve = sampler();
    curve
        .set_control_points(pts(&[(0, 0), (100, 0), (100, 100)]))
        .unwrap();
    // t = 0: derivative points along +x.
    assert!(curve.current_angle().unwrap().abs() < 1e-5);

    // Walk to the far end: t approaches 1 where the tangent is +y.
    while curve.cursor() < curve.len() - 1 {
        curve.next();
    }
    let angle = curve.current_angle().unwrap();
    assert!((angle - FRAC_PI_2).abs() < 0.05, "angle {angle}");

    let mut down = sampler();
    down.set_control_points(pts(&[(50, 50), (0, 50), (-50, 50)]))
        .unwrap();
    assert!((down.current_angle().unwrap() - PI).abs() < 1e-5);

    let mut up = sampler();
    up.set_control_points(pts(&[(0, 50), (0, 0), (0, -50)]))
        .unwrap();
    assert!((up.current_angle().unwrap() - 3.0 * FRAC_PI_2).abs() < 1e-5);
}

#[test]
fn select_prefers_lowest_index_and_drag_resamples() {
    let mut curve = sampler();
    curve
        .set_control_points(pts(&[(100, 100), (105, 104), (300, 300), (500, 100)]))
        .unwrap();
    assert_eq!(curve.select(103, 102), Some(0));
    assert_eq!(curve.select(300, 310), Some(2));
    assert_eq!(curve.select(320, 300), None);

    assert_eq!(curve.select(500, 100), Some(3));
    curve.drag(700, 700).unwrap();
    assert_eq!(curve.last(), Some(Point::new(700, 700)));
    assert_eq!(curve.points().last(), Some(&Point::new(700, 700)));
    assert_eq!(curve.len(), sample_count(curve.control_points()) + 1);

    assert_eq!(curve.select(0, 0), None);
    let before = curve.control_points().to_vec();
    curve.drag(1, 1).unwrap();
    assert_eq!(curve.control_points(), before.as_slice());
}

#[test]
fn cursor_is_clamped_when_the_curve_shrinks() {
    let mut curve = sampler();
    curve
        .set_control_points(pts(&[(0, 0), (400, 400), (800, 0)]))
        .unwrap();
    for _ in 0..300 {
        curve.next();
    }
    assert_eq!(curve.cursor(), 300);
    curve
        .set_control_points(pts(&[(0, 0), (10, 10), (20, 0)]))
        .unwrap();
    assert_eq!(curve.cursor(), curve.len() - 1);
}

#[test]
fn counts_outside_the_table_fail() {
    let table = Arc::new(BinomialTable::new(4).unwrap());
    let mut curve = CurveSampler::new(table, CurveConfig::default());
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(
        curve.generate_with(&mut rng, 2).err(),
        Some(SpinError::InvalidPointCount {
            count: 2,
            min: 3,
            max: 5
        })
    );
    assert_eq!(
        curve.generate_with(&mut rng, 6).err(),
        Some(SpinError::RowOutOfRange { n: 5, max: 4 })
    );
    assert!(curve.is_empty());
    curve.generate_with(&mut rng, 5).unwrap();
    assert_eq!(curve.control_points().len(), 5);
}
