use std::collections::BTreeSet;

use num::traits::{One, Zero};
use tracing::{debug, trace};

use crate::curve::{Curve, CurvePoint, Point};
use crate::pairs::Pairs;
use crate::util::{self, Rational, Root};

impl Curve {
    // xy(s - x - y) = rs is quadratic in y: y = (sx - x^2 -/+ sqrt(x(x(s - x)^2 - 4rs))) / 2x
    // the smaller root is returned, the larger one is the matching z
    pub fn rational_y(&self, x: &Rational) -> Root {
        let (s, r) = (self.s(), self.r());
        let four = Rational::from_integer(4.into());
        let two_x = x * Rational::from_integer(2.into());
        let sx = s * x - x * x;
        let rem = s - x;
        let d = x * (x * &rem * &rem - four * r * s);
        match util::exact_sqrt(&d) {
            Root::Exact(root) => Root::Exact((sx - root) / two_x),
            other => other,
        }
    }
}

// probes x = (m / n)s over the pairs of depth `depth`, narrowing the window whenever
// a probe has no real y: above `split` the upper bound drops, otherwise the lower bound rises
pub fn search_with_split(curve: &Curve, depth: usize, split: &Rational) -> BTreeSet<CurvePoint> {
    let mut solutions = BTreeSet::new();
    let mut lower = Rational::zero();
    let mut upper = Rational::one();

    for (m, n) in Pairs::new(depth) {
        let frac = Rational::new(m.into(), n.into());
        if frac < lower || frac > upper {
            continue;
        }

        let x = &frac * curve.s();
        let y = match curve.rational_y(&x) {
            Root::Exact(y) => y,
            Root::Negative => {
                if &frac > split {
                    upper = frac;
                }
                else {
                    lower = frac;
                }
                trace!("narrowed search window to [{}, {}]", lower, upper);
                continue;
            }
            Root::Irrational => continue,
        };

        if let Some(p) = curve.complete(&Point::new(x, y)) {
            trace!("found {}", p);
            solutions.insert(p);
        }
    }

    debug!(depth, found = solutions.len(), "search finished");
    solutions
}

pub fn search(curve: &Curve, depth: usize) -> BTreeSet<CurvePoint> {
    search_with_split(curve, depth, &Rational::new(1.into(), 3.into()))
}

#[cfg(test)]
fn q(n: i64, d: i64) -> Rational {
    Rational::new(n.into(), d.into())
}
#[cfg(test)]
fn curve_of(v: &str) -> Curve {
    Curve::from_triangle(&crate::triangle::Triangle::parse(v).unwrap()).unwrap().0
}

#[test]
fn test_rational_y() {
    let c = curve_of("3,4,5"); // s = 6, r = 1
    assert_eq!(c.rational_y(&q(6, 1)), Root::Negative);
    assert_eq!(c.rational_y(&q(3, 1)), Root::Exact(q(1, 1)));
    assert_eq!(c.rational_y(&q(2, 1)), Root::Exact(q(1, 1)));
    assert_eq!(c.rational_y(&q(1, 1)), Root::Exact(q(2, 1)));
    assert_eq!(c.rational_y(&q(4, 1)), Root::Negative);
    assert_eq!(c.rational_y(&q(3, 2)), Root::Irrational); // d = 153/16
    assert_eq!(c.rational_y(&q(49, 15)), Root::Exact(q(25, 21)));
}

#[test]
fn test_rational_y_double_root() {
    // s = 8, r = 9/4: x(s - x)^2 = 4rs at x = 2
    let c = curve_of("5,5,6");
    assert_eq!(c.rational_y(&q(2, 1)), Root::Exact(q(3, 1)));
    let p = c.complete(&Point::new(q(2, 1), q(3, 1))).unwrap();
    assert_eq!(p.coords(), &[q(2, 1), q(3, 1), q(3, 1)]);
}

#[test]
fn test_search_finds_known_points() {
    let c = curve_of("3,4,5");
    let found = search(&c, 12);
    let known = [
        CurvePoint::new(q(1, 1), q(2, 1), q(3, 1)),
        CurvePoint::new(q(25, 21), q(54, 35), q(49, 15)),
    ];
    assert_eq!(found, known.into_iter().collect());

    let c = curve_of("13,14,15");
    let found = search(&c, 12);
    assert!(found.contains(&CurvePoint::new(q(6, 1), q(7, 1), q(8, 1))));
}

#[test]
fn test_search_points_on_curve() {
    for v in ["5,5,6", "13,14,15", "3,4,5", "5,5,8", "9,10,17"] {
        let c = curve_of(v);
        for p in search(&c, 10) {
            assert!(c.contains(&p), "{} not on curve of {}", p, v);
            for x in p.coords() {
                assert_gt!(x, &Rational::zero());
            }
            assert!(util::is_sorted(p.coords()));
        }
    }
}

#[test]
fn test_search_depth_zero() {
    // only (1, 1) is probed, and x = s never has a real y
    assert!(search(&curve_of("13,14,15"), 0).is_empty());
}
