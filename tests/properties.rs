use std::collections::BTreeSet;

use proptest::prelude::*;

use heron_curves::reduce::covers;
use heron_curves::util::Rational;
use heron_curves::{reduce, search, solve, Curve, CurvePoint, Triangle};

fn q(n: i64, d: i64) -> Rational {
    Rational::new(n.into(), d.into())
}

// a = n(m^2 + k^2), b = m(n^2 + k^2), c = (m + n)(mn - k^2) has area mnk(m + n)(mn - k^2)
fn heronian() -> impl Strategy<Value = Triangle> {
    (1i64..10, 1i64..10, 1i64..8, 1i64..5)
        .prop_filter("mn > k^2", |&(m, n, k, _)| m * n > k * k)
        .prop_filter_map("not a triangle", |(m, n, k, d)| {
            let a = n * (m * m + k * k);
            let b = m * (n * n + k * k);
            let c = (m + n) * (m * n - k * k);
            Triangle::new(q(a, d), q(b, d), q(c, d)).ok()
        })
}

fn on_curve(curve: &Curve, points: &BTreeSet<CurvePoint>) -> bool {
    points.iter().all(|p| curve.contains(p) && p.coords().iter().all(|x| x > &q(0, 1)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn round_trip(t in heronian()) {
        let (curve, p) = Curve::from_triangle(&t).unwrap();
        prop_assert!(curve.contains(&p));
        prop_assert_eq!(curve.triangle(&p), t);
    }

    #[test]
    fn searched_points_on_curve(t in heronian(), depth in 0usize..8) {
        let (curve, _) = Curve::from_triangle(&t).unwrap();
        prop_assert!(on_curve(&curve, &search(&curve, depth)));
    }

    #[test]
    fn solved_points_on_curve(t in heronian(), depth in 0usize..5) {
        let (curve, p) = Curve::from_triangle(&t).unwrap();
        let found = solve(&curve, &[p.generator()], depth);
        prop_assert!(found.contains(&p));
        prop_assert!(on_curve(&curve, &found));
    }

    #[test]
    fn closure_monotone(t in heronian(), depth in 0usize..4) {
        let (curve, p) = Curve::from_triangle(&t).unwrap();
        let basis = [p.generator()];
        let small = solve(&curve, &basis, depth);
        let large = solve(&curve, &basis, depth + 1);
        prop_assert!(small.is_subset(&large));
    }

    #[test]
    fn solve_deterministic(t in heronian(), depth in 0usize..4) {
        let (curve, p) = Curve::from_triangle(&t).unwrap();
        let mut targets = search(&curve, 5);
        targets.insert(p);
        let basis: Vec<_> = targets.iter().map(CurvePoint::generator).collect();
        prop_assert_eq!(solve(&curve, &basis, depth), solve(&curve, &basis, depth));
    }

    #[test]
    fn reducer_sound(t in heronian(), depth in 0usize..3) {
        let (curve, p) = Curve::from_triangle(&t).unwrap();
        let mut targets = search(&curve, 6);
        targets.insert(p);
        let basis = reduce(&curve, &targets, depth);
        prop_assert!(basis.len() <= targets.len());
        prop_assert!(covers(&curve, &basis, &targets, depth));
    }
}
