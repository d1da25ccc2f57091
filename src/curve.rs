use std::fmt;

use itertools::Itertools;
use num::traits::{One, Signed, Zero};

use crate::util::{self, Rational};

// the cubic shared by every triangle with semiperimeter s and squared inradius r:
// x + y + z = s and xyz = rs, where x, y, z are s - a, s - b, s - c
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Curve {
    pub(crate) s: Rational,
    pub(crate) r: Rational,
    pub(crate) area: Rational,
}

// a solution (x, y, z) with coordinates sorted ascending
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CurvePoint([Rational; 3]);

// a point in the (x, y) projection, used as a generator and as the running point of chord steps
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub x: Rational,
    pub y: Rational,
}

// y = slope * x + intercept
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub slope: Rational,
    pub intercept: Rational,
}

impl CurvePoint {
    pub fn new(x: Rational, y: Rational, z: Rational) -> Self {
        let mut v = [x, y, z];
        v.sort();
        Self(v)
    }
    pub fn coords(&self) -> &[Rational; 3] {
        &self.0
    }
    // smallest and largest coordinate; the middle one is recovered by Curve::complete
    pub fn generator(&self) -> Point {
        Point { x: self.0[0].clone(), y: self.0[2].clone() }
    }
    pub fn height(&self) -> (Rational, Rational) {
        util::height(&self.0)
    }
}
impl fmt::Display for CurvePoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({})", self.0.iter().join(", "))
    }
}

impl Point {
    pub fn new(x: Rational, y: Rational) -> Self {
        Self { x, y }
    }
    pub fn swapped(&self) -> Self {
        Self { x: self.y.clone(), y: self.x.clone() }
    }
}

impl Curve {
    pub fn s(&self) -> &Rational {
        &self.s
    }
    pub fn r(&self) -> &Rational {
        &self.r
    }
    pub fn area(&self) -> &Rational {
        &self.area
    }

    pub fn contains(&self, p: &CurvePoint) -> bool {
        let [x, y, z] = p.coords();
        &(x + y + z) == self.s() && x * y * z == self.r() * self.s()
    }

    // derives z from (x, y); None unless all three coordinates are positive
    pub fn complete(&self, p: &Point) -> Option<CurvePoint> {
        if !p.x.is_positive() || !p.y.is_positive() {
            return None;
        }
        let denom = &p.x * &p.y / self.r() - Rational::one();
        if denom.is_zero() {
            return None;
        }
        let z = (&p.x + &p.y) / denom;
        if !z.is_positive() {
            return None;
        }
        Some(CurvePoint::new(p.x.clone(), p.y.clone(), z))
    }

    // implicit differentiation gives dy/dx = -(y(y(x^2 - r) - 2rx)) / (x(x(y^2 - r) - 2ry))
    pub fn tangent(&self, p: &Point) -> Option<Line> {
        let (x, y, r) = (&p.x, &p.y, self.r());
        let two = Rational::from_integer(2.into());
        let m = y * (y * (x * x - r) - &two * r * x);
        let n = x * (x * (y * y - r) - &two * r * y);
        if n.is_zero() {
            return None;
        }
        Line::through(-m / n, p)
    }

    // when p == q this is the tangent at p
    pub fn secant(&self, p: &Point, q: &Point) -> Option<Line> {
        if p == q {
            return self.tangent(p);
        }
        let n = &q.x - &p.x;
        if n.is_zero() {
            return None;
        }
        Line::through((&q.y - &p.y) / n, p)
    }

    // substituting y = ax + b into xy(s - x - y) = rs gives
    // a(a + 1)x^3 + (2ab - as + b)x^2 + (b^2 - bs)x + rs = 0,
    // so with known roots p and q the third is x = -rs / (pq a(a + 1))
    // the result is reflected across x = y, which is the group law step on this curve
    pub fn third_point(&self, line: &Line, p: &Rational, q: &Rational) -> Option<Point> {
        let denom = p * q * (&line.slope + Rational::one());
        if denom.is_zero() {
            return None;
        }
        let t = -(self.s() * self.r()) / denom;
        let x = &t / &line.slope;
        let y = t + &line.intercept;
        Some(Point { x: y, y: x })
    }

    pub fn chord_step(&self, p: &Point, q: &Point) -> Option<Point> {
        let line = self.secant(p, q)?;
        self.third_point(&line, &p.x, &q.x)
    }
}

impl Line {
    // slopes 0 and -1 (and vertical lines) meet the cubic in fewer than three finite points
    fn through(slope: Rational, p: &Point) -> Option<Self> {
        if slope.is_zero() || slope == -Rational::one() {
            return None;
        }
        let intercept = &p.y - &slope * &p.x;
        Some(Self { slope, intercept })
    }
}

#[cfg(test)]
fn q(n: i64, d: i64) -> Rational {
    Rational::new(n.into(), d.into())
}
#[cfg(test)]
fn curve_of(a: i64, b: i64, c: i64) -> Curve {
    let t = crate::triangle::Triangle::new(q(a, 1), q(b, 1), q(c, 1)).unwrap();
    Curve::from_triangle(&t).unwrap().0
}

#[test]
fn test_complete() {
    let c = curve_of(13, 14, 15);
    let p = c.complete(&Point::new(q(6, 1), q(8, 1))).unwrap();
    assert_eq!(p.coords(), &[q(6, 1), q(7, 1), q(8, 1)]);
    assert!(c.contains(&p));
    assert_eq!(p.generator(), Point::new(q(6, 1), q(8, 1)));

    assert!(c.complete(&Point::new(q(4, 1), q(4, 1))).is_none()); // xy = r
    assert!(c.complete(&Point::new(q(-4, 1), q(-3, 1))).is_none());
    assert!(c.complete(&Point::new(q(0, 1), q(3, 1))).is_none());
}

#[test]
fn test_tangent() {
    let c = curve_of(13, 14, 15);
    let line = c.tangent(&Point::new(q(6, 1), q(8, 1))).unwrap();
    assert_eq!(line, Line { slope: q(4, 3), intercept: q(0, 1) });
    assert_eq!(c.secant(&Point::new(q(6, 1), q(8, 1)), &Point::new(q(6, 1), q(8, 1))), Some(line));
}

#[test]
fn test_third_point_on_curve() {
    let c = curve_of(13, 14, 15);
    let g = Point::new(q(6, 1), q(8, 1));
    let p = c.chord_step(&g, &g).unwrap();
    assert_eq!(p, Point::new(q(-4, 1), q(-3, 1)));
    // off the positive octant, but still a rational point of the cubic
    let z = c.s() - &p.x - &p.y;
    assert!(c.contains(&CurvePoint::new(p.x.clone(), p.y.clone(), z)));
    assert!(c.complete(&p).is_none());
}

#[test]
fn test_degenerate_lines() {
    let c = curve_of(13, 14, 15);
    let g = Point::new(q(6, 1), q(8, 1));
    // reflection across x = y has slope -1
    assert!(c.secant(&g, &g.swapped()).is_none());
    assert!(c.chord_step(&g, &g.swapped()).is_none());
    // (6, 7) and (8, 7) share a y coordinate
    assert!(c.secant(&Point::new(q(6, 1), q(7, 1)), &Point::new(q(8, 1), q(7, 1))).is_none());
    // vertical
    assert!(c.secant(&Point::new(q(7, 1), q(6, 1)), &Point::new(q(7, 1), q(8, 1))).is_none());
}

#[test]
fn test_chord_step_stays_on_curve() {
    let c = curve_of(3, 4, 5);
    let a = Point::new(q(1, 1), q(3, 1));
    let b = Point::new(q(25, 21), q(49, 15));
    for (u, v) in [(&a, &b), (&b, &a), (&a, &a), (&b, &b)] {
        if let Some(p) = c.chord_step(u, v) {
            let z = c.s() - &p.x - &p.y;
            assert!(c.contains(&CurvePoint::new(p.x, p.y, z)));
        }
    }
}
