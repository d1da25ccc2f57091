use std::collections::BTreeSet;

use itertools::Itertools;
use tracing::debug;

use crate::curve::{Curve, CurvePoint};
use crate::solve::solve;

// true if solving from `basis` at `depth` reproduces every target
pub fn covers(curve: &Curve, basis: &[CurvePoint], targets: &BTreeSet<CurvePoint>, depth: usize) -> bool {
    let generators: Vec<_> = basis.iter().map(CurvePoint::generator).collect();
    let closure = solve(curve, &generators, depth);
    targets.is_subset(&closure)
}

// greedy: the shortest height-ordered prefix that covers the targets, then drop single
// elements (last first) while the rest still covers, rescanning after every removal.
// the result is a local minimum, not necessarily the smallest basis
pub fn reduce(curve: &Curve, targets: &BTreeSet<CurvePoint>, depth: usize) -> Vec<CurvePoint> {
    let sorted = targets.iter().cloned().sorted_by_cached_key(CurvePoint::height).collect_vec();

    let mut basis = (1..sorted.len())
        .map(|i| &sorted[..i])
        .find(|prefix| covers(curve, prefix, targets, depth))
        .unwrap_or(&sorted[..])
        .to_vec();
    debug!(targets = targets.len(), prefix = basis.len(), "reduce grew basis");

    'scan: loop {
        for i in (0..basis.len()).rev() {
            let mut candidate = basis.clone();
            candidate.remove(i);
            if covers(curve, &candidate, targets, depth) {
                basis = candidate;
                continue 'scan;
            }
        }
        break;
    }

    debug!(basis = basis.len(), "reduce pruned basis");
    basis
}

#[cfg(test)]
fn q(n: i64, d: i64) -> crate::util::Rational {
    crate::util::Rational::new(n.into(), d.into())
}
#[cfg(test)]
fn setup(v: &str) -> (Curve, CurvePoint) {
    Curve::from_triangle(&crate::triangle::Triangle::parse(v).unwrap()).unwrap()
}

#[test]
fn test_reduce_single() {
    let (c, p) = setup("5,5,6");
    let targets: BTreeSet<_> = [p.clone()].into_iter().collect();
    assert_eq!(reduce(&c, &targets, 8), vec![p]);
}

#[test]
fn test_reduce_drops_derived_points() {
    let (c, p) = setup("13,14,15");
    let targets = solve(&c, &[p.generator()], 3);
    assert_gt!(targets.len(), 1);
    let basis = reduce(&c, &targets, 3);
    assert_eq!(basis, vec![p]);
}

#[test]
fn test_reduce_sound() {
    let (c, p) = setup("3,4,5");
    let mut targets = solve(&c, &[p.generator()], 2);
    targets.insert(CurvePoint::new(q(25, 21), q(54, 35), q(49, 15)));
    let basis = reduce(&c, &targets, 4);
    assert_le!(basis.len(), targets.len());
    assert!(covers(&c, &basis, &targets, 4));
    // (25/21, 54/35, 49/15) is already reachable from (1, 2, 3)
    assert_eq!(basis, vec![p]);
}

#[test]
fn test_reduce_empty() {
    let (c, _) = setup("3,4,5");
    assert!(reduce(&c, &BTreeSet::new(), 4).is_empty());
}
