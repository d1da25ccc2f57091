use std::fmt;

use itertools::Itertools;
use num::traits::Signed;

use crate::curve::{Curve, CurvePoint};
use crate::error::{Error, Result};
use crate::util::{self, Rational, Root};

// side lengths sorted ascending
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Triangle([Rational; 3]);
impl Triangle {
    pub fn new(a: Rational, b: Rational, c: Rational) -> Result<Self> {
        let mut sides = [a, b, c];
        sides.sort();
        let [a, b, c] = &sides;
        // sorted, so a + b > c implies the other two inequalities
        if !a.is_positive() || a + b <= *c {
            return Err(Error::InvalidTriangle(sides.iter().join(",")));
        }
        Ok(Self(sides))
    }

    // "a,b,c" with each side an integer, fraction or exact decimal
    pub fn parse(v: &str) -> Result<Self> {
        let sides = v.split(',').map(util::parse_rational).collect::<Result<Vec<_>>>()?;
        let [a, b, c]: [Rational; 3] = sides.try_into().map_err(|_| Error::InvalidTriangle(v.to_owned()))?;
        Self::new(a, b, c).map_err(|_| Error::InvalidTriangle(v.to_owned()))
    }

    pub fn sides(&self) -> &[Rational; 3] {
        &self.0
    }
    pub fn height(&self) -> (Rational, Rational) {
        util::height(&self.0)
    }
}
impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.iter().join(", "))
    }
}

impl Curve {
    // x, y, z = s - a, s - b, s - c and r = (area / s)^2
    pub fn from_triangle(t: &Triangle) -> Result<(Curve, CurvePoint)> {
        let [a, b, c] = t.sides();
        let s = (a + b + c) / Rational::from_integer(2.into());
        let (x, y, z) = (&s - a, &s - b, &s - c);
        let area_sq = &s * &x * &y * &z;
        let area = match util::exact_sqrt(&area_sq) {
            Root::Exact(v) => v,
            Root::Negative | Root::Irrational => return Err(Error::NonHeronian(t.sides().iter().join(","))),
        };
        let r = area_sq / (&s * &s);
        Ok((Curve { s, r, area }, CurvePoint::new(x, y, z)))
    }

    // sides are the pairwise sums of the coordinates
    pub fn triangle(&self, p: &CurvePoint) -> Triangle {
        let [x, y, z] = p.coords();
        debug_assert_eq!(&(x + y + z), self.s());
        debug_assert_gt!(x, &Rational::default());
        Triangle([x + y, x + z, y + z])
    }
}

#[cfg(test)]
fn q(n: i64, d: i64) -> Rational {
    Rational::new(n.into(), d.into())
}

#[test]
fn test_triangle_new() {
    let t = Triangle::new(q(6, 1), q(5, 1), q(5, 1)).unwrap();
    assert_eq!(t.sides(), &[q(5, 1), q(5, 1), q(6, 1)]);
    assert!(util::is_sorted(t.sides()));

    assert_eq!(Triangle::new(q(1, 1), q(1, 1), q(3, 1)), Err(Error::InvalidTriangle("1,1,3".into())));
    assert!(Triangle::new(q(1, 1), q(1, 1), q(2, 1)).is_err()); // degenerate
    assert!(Triangle::new(q(0, 1), q(1, 1), q(1, 1)).is_err());
    assert!(Triangle::new(q(-3, 1), q(4, 1), q(5, 1)).is_err());
}

#[test]
fn test_triangle_parse() {
    assert_eq!(Triangle::parse("3/2,3/2,2").unwrap().sides(), &[q(3, 2), q(3, 2), q(2, 1)]);
    assert_eq!(Triangle::parse("2.5,2.5,3").unwrap().sides(), &[q(5, 2), q(5, 2), q(3, 1)]);
    assert_eq!(Triangle::parse("1,1,3"), Err(Error::InvalidTriangle("1,1,3".into())));
    assert_eq!(Triangle::parse("3,4"), Err(Error::InvalidTriangle("3,4".into())));
    assert_eq!(Triangle::parse("3,4,5,6"), Err(Error::InvalidTriangle("3,4,5,6".into())));
    assert_eq!(Triangle::parse("3,x,5"), Err(Error::Parse("x".into())));
}

#[test]
fn test_from_triangle() {
    let t = Triangle::parse("5,5,6").unwrap();
    let (curve, p) = Curve::from_triangle(&t).unwrap();
    assert_eq!(curve.s(), &q(8, 1));
    assert_eq!(curve.area(), &q(12, 1));
    assert_eq!(curve.r(), &q(9, 4));
    assert_eq!(p.coords(), &[q(2, 1), q(3, 1), q(3, 1)]);
    assert!(curve.contains(&p));
    assert_eq!(curve.triangle(&p), t);

    let t = Triangle::parse("5/2,5/2,3").unwrap();
    let (curve, p) = Curve::from_triangle(&t).unwrap();
    assert_eq!(curve.area(), &q(3, 1));
    assert_eq!(curve.triangle(&p), t);
}

#[test]
fn test_non_heronian() {
    let t = Triangle::parse("2,3,4").unwrap();
    assert_eq!(Curve::from_triangle(&t), Err(Error::NonHeronian("2,3,4".into())));
    // a valid triangle whose area is sqrt(5)/2
    let t = Triangle::parse("3/2,3/2,2").unwrap();
    assert!(matches!(Curve::from_triangle(&t), Err(Error::NonHeronian(_))));
}

#[test]
fn test_shared_curve() {
    // 5,5,6 and 5,5,8 share neither semiperimeter nor area
    let (a, _) = Curve::from_triangle(&Triangle::parse("5,5,6").unwrap()).unwrap();
    let (b, _) = Curve::from_triangle(&Triangle::parse("5,5,8").unwrap()).unwrap();
    assert_ne!(a, b);
    // scaling a triangle leaves nothing in common either
    let (c, _) = Curve::from_triangle(&Triangle::parse("10,10,12").unwrap()).unwrap();
    assert_ne!(a, c);
    // but every point found from a curve maps back onto it
    let (d, p) = Curve::from_triangle(&Triangle::parse("41/15,156/35,101/21").unwrap()).unwrap();
    let (e, _) = Curve::from_triangle(&Triangle::parse("3,4,5").unwrap()).unwrap();
    assert_eq!(d, e);
    assert!(e.contains(&p));
}
