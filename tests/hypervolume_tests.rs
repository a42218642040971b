//! Integration tests for the hypervolume indicator.

#[path = "../benches/fronts.rs"]
mod fronts;

use fronts::{brute_force_hypervolume, spherical_front, sweep_area, uniform_cloud};
use hypervolume::normalization::MinMaxNormalizer;
use hypervolume::pareto::{dedupe, non_dominated_subset};
use hypervolume::wfg::Wfg;
use hypervolume::{
    Direction, HypervolumeIndicator, IndicatorConfig, NonDominatedPolicy, Traversal,
};

const TOL: f64 = 1e-10;

fn indicator_with_reference(reference: Vec<f64>) -> HypervolumeIndicator {
    let config = IndicatorConfig::builder(reference.len())
        .reference_point(reference)
        .build()
        .unwrap();
    HypervolumeIndicator::new(config)
}

// ---------------------------------------------------------------------------
// Worked examples, reference point (5, 5)
// ---------------------------------------------------------------------------

#[test]
fn test_scenario_left_pair() {
    let reference = [5.0, 5.0];
    let wfg = Wfg::new(&reference);
    let points = vec![vec![0.0, 4.0], vec![2.0, 2.0]];

    let limit = wfg.limit_set(&points, 0).unwrap();
    assert_eq!(limit, vec![vec![2.0, 4.0]]);
    assert!((wfg.inclusive_volume(&limit[0]) - 3.0).abs() < TOL);
    assert!((wfg.inclusive_volume(&points[0]) - 5.0).abs() < TOL);
    assert!((wfg.exclusive_contribution(&points, 0) - 2.0).abs() < TOL);
}

#[test]
fn test_scenario_right_pair() {
    let reference = [5.0, 5.0];
    let wfg = Wfg::new(&reference);
    let points = vec![vec![3.0, 0.0], vec![2.0, 2.0]];

    let limit = wfg.limit_set(&points, 0).unwrap();
    assert_eq!(limit, vec![vec![3.0, 2.0]]);
    assert!((wfg.inclusive_volume(&limit[0]) - 6.0).abs() < TOL);
    assert!((wfg.inclusive_volume(&points[0]) - 10.0).abs() < TOL);
    assert!((wfg.exclusive_contribution(&points, 0) - 4.0).abs() < TOL);
}

#[test]
fn test_scenario_three_points() {
    let reference = [5.0, 5.0];
    let wfg = Wfg::new(&reference);
    let points = vec![vec![0.0, 4.0], vec![2.0, 2.0], vec![3.0, 0.0]];

    let contributions = wfg.exclusive_contributions(&points);
    for (got, want) in contributions.iter().zip([2.0, 3.0, 10.0]) {
        assert!((got - want).abs() < TOL, "got {got}, want {want}");
    }
    assert!((wfg.hypervolume(&points) - 15.0).abs() < TOL);

    let indicator = indicator_with_reference(reference.to_vec());
    assert!((indicator.evaluate(&points).unwrap() - 15.0).abs() < TOL);
}

// ---------------------------------------------------------------------------
// Indicator scenarios, all-ones reference point
// ---------------------------------------------------------------------------

#[test]
fn test_single_point_quarter() {
    let indicator = HypervolumeIndicator::with_defaults(2).unwrap();
    let hv = indicator.evaluate(&[vec![0.5, 0.5]]).unwrap();
    assert!((hv - 0.25).abs() < TOL);
}

#[test]
fn test_single_point_across_dimensions() {
    for m in 2..=4 {
        let indicator = HypervolumeIndicator::with_defaults(m).unwrap();
        let hv = indicator.evaluate(&[vec![0.5; m]]).unwrap();
        let expected = 0.5_f64.powi(i32::try_from(m).unwrap());
        assert!((hv - expected).abs() < TOL, "m = {m}: {hv} != {expected}");
    }
}

#[test]
fn test_point_beyond_reference_ignored() {
    let indicator = HypervolumeIndicator::with_defaults(2).unwrap();
    let hv = indicator.evaluate(&[vec![2.0, 2.0]]).unwrap();
    assert!(hv.abs() < f64::EPSILON);
}

#[test]
fn test_point_beyond_reference_without_policy() {
    let config = IndicatorConfig::builder(2)
        .policy(NonDominatedPolicy::NoPolicy)
        .build()
        .unwrap();
    let indicator = HypervolumeIndicator::new(config);
    let hv = indicator.evaluate(&[vec![2.0, 2.0]]).unwrap();
    // |1 - 2| * |1 - 2|, not clamped to the reference box
    assert!((hv - 1.0).abs() < TOL);
}

#[test]
fn test_ignore_policy_drops_only_offending_points() {
    let indicator = HypervolumeIndicator::with_defaults(2).unwrap();
    let hv = indicator
        .evaluate(&[vec![0.5, 0.5], vec![0.2, 1.5], vec![1.2, 0.1]])
        .unwrap();
    assert!((hv - 0.25).abs() < TOL);
}

#[test]
fn test_single_objective_always_zero() {
    let indicator = HypervolumeIndicator::with_defaults(1).unwrap();
    let hv = indicator.evaluate(&[vec![0.0], vec![0.3]]).unwrap();
    assert!(hv.abs() < f64::EPSILON);
}

#[test]
fn test_normalized_objectives() {
    let config = IndicatorConfig::builder(2)
        .normalizer(0, MinMaxNormalizer::new(0.0, 100.0).unwrap())
        .normalizer(1, MinMaxNormalizer::maximizing(0.0, 1.0).unwrap())
        .build()
        .unwrap();
    let indicator = HypervolumeIndicator::new(config);

    // cost 50 -> 0.5, accuracy 0.75 -> 0.25
    let hv = indicator.evaluate(&[vec![50.0, 0.75]]).unwrap();
    assert!((hv - 0.5 * 0.75).abs() < TOL);
}

// ---------------------------------------------------------------------------
// Properties over seeded random fronts
// ---------------------------------------------------------------------------

#[test]
fn test_matches_brute_force() {
    let mut rng = fastrand::Rng::with_seed(7);
    let reference = [1.0, 1.0, 1.0, 1.0];
    for m in 2..=4 {
        let wfg = Wfg::new(&reference[..m]);
        for n in 1..=9 {
            let front = spherical_front(&mut rng, n, m);
            let expected = brute_force_hypervolume(&front, &reference[..m]);
            let got = wfg.hypervolume(&front);
            assert!(
                (got - expected).abs() < 1e-9,
                "m = {m}, n = {n}: {got} != {expected}"
            );
        }
    }
}

#[test]
fn test_matches_brute_force_with_dominated_members() {
    let mut rng = fastrand::Rng::with_seed(11);
    let reference = [1.0, 1.0, 1.0];
    let wfg = Wfg::new(&reference);
    for _ in 0..20 {
        let cloud = uniform_cloud(&mut rng, 8, 3);
        let expected = brute_force_hypervolume(&cloud, &reference);
        assert!((wfg.hypervolume(&cloud) - expected).abs() < 1e-9);
    }
}

#[test]
fn test_matches_two_dimensional_sweep() {
    let mut rng = fastrand::Rng::with_seed(3);
    let indicator = HypervolumeIndicator::with_defaults(2).unwrap();
    for n in [1, 5, 40, 150] {
        let cloud = uniform_cloud(&mut rng, n, 2);
        let expected = sweep_area(&cloud, &[1.0, 1.0]);
        let got = indicator.evaluate(&cloud).unwrap();
        assert!((got - expected).abs() < 1e-9, "n = {n}: {got} != {expected}");
    }
}

#[test]
fn test_non_negative_inside_reference_box() {
    let mut rng = fastrand::Rng::with_seed(19);
    let indicator = HypervolumeIndicator::with_defaults(3).unwrap();
    for _ in 0..20 {
        let front = spherical_front(&mut rng, 15, 3);
        assert!(indicator.evaluate(&front).unwrap() >= 0.0);
    }
}

#[test]
fn test_order_independent() {
    let mut rng = fastrand::Rng::with_seed(23);
    let reference = [1.0, 1.0, 1.0];
    let wfg = Wfg::new(&reference);
    let mut front = spherical_front(&mut rng, 25, 3);
    let baseline = wfg.hypervolume(&front);
    for _ in 0..5 {
        rng.shuffle(&mut front);
        assert!((wfg.hypervolume(&front) - baseline).abs() < 1e-12);
    }
}

#[test]
fn test_contributions_sum_to_hypervolume() {
    let mut rng = fastrand::Rng::with_seed(29);
    let reference = [1.0, 1.0, 1.0];
    let wfg = Wfg::new(&reference);
    let front = spherical_front(&mut rng, 20, 3);
    let sum: f64 = wfg.exclusive_contributions(&front).iter().sum();
    assert!((sum - wfg.hypervolume(&front)).abs() < 1e-12);
}

#[test]
fn test_presort_does_not_change_result() {
    let mut rng = fastrand::Rng::with_seed(31);
    let front = spherical_front(&mut rng, 20, 4);
    let sorted = HypervolumeIndicator::with_defaults(4).unwrap();
    let unsorted =
        HypervolumeIndicator::new(IndicatorConfig::builder(4).presort(false).build().unwrap());
    let a = sorted.evaluate(&front).unwrap();
    let b = unsorted.evaluate(&front).unwrap();
    assert!((a - b).abs() < 1e-12, "{a} != {b}");
}

#[test]
fn test_dominated_point_does_not_change_result() {
    let mut rng = fastrand::Rng::with_seed(37);
    let front = spherical_front(&mut rng, 12, 3);
    let mut extended = front.clone();
    extended.push(front[0].iter().map(|v| (v + 0.05).min(1.0)).collect());

    for reduce in [true, false] {
        let indicator = HypervolumeIndicator::new(
            IndicatorConfig::builder(3)
                .reduce_to_non_dominated_first(reduce)
                .build()
                .unwrap(),
        );
        let a = indicator.evaluate(&front).unwrap();
        let b = indicator.evaluate(&extended).unwrap();
        assert!((a - b).abs() < 1e-12, "reduce = {reduce}: {a} != {b}");
    }
}

#[test]
fn test_duplicates_do_not_change_result() {
    let mut rng = fastrand::Rng::with_seed(41);
    let front = spherical_front(&mut rng, 10, 3);
    let mut doubled = front.clone();
    doubled.extend(front.iter().cloned());

    let indicator = HypervolumeIndicator::with_defaults(3).unwrap();
    let a = indicator.evaluate(&front).unwrap();
    let b = indicator.evaluate(&doubled).unwrap();
    assert!((a - b).abs() < 1e-12);
}

#[test]
fn test_filters_are_idempotent() {
    let mut rng = fastrand::Rng::with_seed(43);
    let dirs = [Direction::Minimize; 3];
    let cloud = uniform_cloud(&mut rng, 60, 3);

    let unique = dedupe(cloud, 1e-9);
    assert_eq!(dedupe(unique.clone(), 1e-9), unique);

    let front = non_dominated_subset(unique, &dirs);
    assert_eq!(non_dominated_subset(front.clone(), &dirs), front);
}

#[test]
fn test_worklist_bit_identical_to_recursion() {
    let mut rng = fastrand::Rng::with_seed(47);
    let recursive = HypervolumeIndicator::with_defaults(4).unwrap();
    let worklist = HypervolumeIndicator::new(
        IndicatorConfig::builder(4)
            .traversal(Traversal::Worklist)
            .build()
            .unwrap(),
    );
    for n in [1, 2, 10, 25] {
        let front = spherical_front(&mut rng, n, 4);
        assert_eq!(
            recursive.evaluate(&front).unwrap().to_bits(),
            worklist.evaluate(&front).unwrap().to_bits(),
            "n = {n}"
        );
    }
}
