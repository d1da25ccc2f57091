use std::collections::BTreeSet;

use tracing::debug;

use crate::curve::{Curve, CurvePoint, Point};

// one pending branch: generators from `index` on are still available, `budget` steps remain
struct Frame {
    index: usize,
    budget: usize,
    running: Option<Point>,
}

// every point reachable by spending at most depth + 1 steps over the basis, in basis order:
// placing the first generator costs one step, each chord step with the next generator costs one.
// a generator may be consumed several times in a row or skipped entirely
pub fn solve(curve: &Curve, basis: &[Point], depth: usize) -> BTreeSet<CurvePoint> {
    let mut points = BTreeSet::new();
    let mut stack = vec![Frame { index: 0, budget: depth + 1, running: None }];
    let mut branches = 0usize;

    while let Some(Frame { index, budget, running }) = stack.pop() {
        branches += 1;
        if index == basis.len() || budget == 0 {
            if let Some(p) = running.and_then(|p| curve.complete(&p)) {
                points.insert(p);
            }
            continue;
        }

        let g = &basis[index];
        let mut children = Vec::with_capacity(budget + 1);
        children.push(Frame { index: index + 1, budget, running: running.clone() });

        let mut current = running;
        for used in 1..=budget {
            current = match current {
                None => Some(g.clone()),
                Some(p) => match curve.chord_step(&p, g) {
                    Some(next) => Some(next),
                    None => break, // no line, so nothing further along this generator
                },
            };
            children.push(Frame { index: index + 1, budget: budget - used, running: current.clone() });
        }

        // reversed so the skip branch is explored first
        stack.extend(children.into_iter().rev());
    }

    debug!(basis = basis.len(), depth, branches, found = points.len(), "solve finished");
    points
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
fn test_solve_empty() {
    let (c, _) = setup("13,14,15");
    assert!(solve(&c, &[], 8).is_empty());
}

#[test]
fn test_solve_depth_zero_yields_basis() {
    let (c, p) = setup("3,4,5");
    let other = CurvePoint::new(q(25, 21), q(54, 35), q(49, 15));
    let basis = [p.generator(), other.generator()];
    let found = solve(&c, &basis, 0);
    assert_eq!(found, [p, other].into_iter().collect());
}

#[test]
fn test_solve_single_generator() {
    let (c, p) = setup("13,14,15");
    let found = solve(&c, &[p.generator()], 8);
    let sides: Vec<_> = found.iter().map(|x| c.triangle(x)).collect();
    assert_eq!(found.len(), 5);
    assert!(found.contains(&p));
    assert!(sides.iter().any(|t| t.to_string() == "194/15, 777/55, 493/33"));
    assert!(sides.iter().any(|t| t.to_string() == "324591/24817, 750715/54119, 226082/15023"));
}

#[test]
fn test_solve_on_curve() {
    let (c, p) = setup("3,4,5");
    for x in solve(&c, &[p.generator()], 6) {
        assert!(c.contains(&x));
    }
}

#[test]
fn test_solve_monotone_and_deterministic() {
    let (c, p) = setup("3,4,5");
    let basis = [p.generator(), CurvePoint::new(q(25, 21), q(54, 35), q(49, 15)).generator()];
    let mut last = BTreeSet::new();
    for depth in 0..5 {
        let found = solve(&c, &basis, depth);
        assert!(last.is_subset(&found));
        assert_eq!(found, solve(&c, &basis, depth));
        last = found;
    }
}

#[test]
fn test_solve_skips_degenerate_steps() {
    // a generator and its own reflection: the chord between them has slope -1
    let (c, p) = setup("13,14,15");
    let g = p.generator();
    let found = solve(&c, &[g.clone(), g.swapped()], 1);
    assert!(found.contains(&p));
    for x in &found {
        assert!(c.contains(x));
    }
}
