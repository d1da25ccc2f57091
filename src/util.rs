use num::integer::Roots;
use num::traits::{One, Signed, Zero};
use num::{BigInt, BigRational, Integer};

use crate::error::Error;

pub type Rational = BigRational;

/// Outcome of taking an exact square root of a rational.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Root {
    Exact(Rational),
    Negative,
    Irrational,
}

pub fn exact_sqrt(q: &Rational) -> Root {
    if q.is_negative() {
        return Root::Negative;
    }
    // canonical form means numer and denom are coprime, so both must be squares
    let m = Roots::sqrt(q.numer());
    let n = Roots::sqrt(q.denom());
    if &(&m * &m) != q.numer() || &(&n * &n) != q.denom() {
        return Root::Irrational;
    }
    Root::Exact(Rational::new(m, n))
}
#[test]
fn test_exact_sqrt() {
    let q = |n: i64, d: i64| Rational::new(n.into(), d.into());
    assert_eq!(exact_sqrt(&q(0, 1)), Root::Exact(q(0, 1)));
    assert_eq!(exact_sqrt(&q(144, 1)), Root::Exact(q(12, 1)));
    assert_eq!(exact_sqrt(&q(9, 4)), Root::Exact(q(3, 2)));
    assert_eq!(exact_sqrt(&q(18, 8)), Root::Exact(q(3, 2))); // reduces to 9/4 first
    assert_eq!(exact_sqrt(&q(135, 16)), Root::Irrational);
    assert_eq!(exact_sqrt(&q(9, 2)), Root::Irrational);
    assert_eq!(exact_sqrt(&q(-4, 1)), Root::Negative);
}

// accepts "n", "n/d" and exact decimals like "2.5"
pub fn parse_rational(v: &str) -> Result<Rational, Error> {
    let v = v.trim();
    if let Ok(q) = v.parse::<Rational>() {
        return Ok(q);
    }
    let fail = || Error::Parse(v.to_owned());
    let (int, frac) = v.split_once('.').ok_or_else(fail)?;
    if frac.is_empty() || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return Err(fail());
    }
    let negative = int.starts_with('-');
    let int: BigInt = match int.trim_start_matches(['-', '+']) {
        "" => BigInt::zero(),
        x if x.bytes().all(|b| b.is_ascii_digit()) => x.parse().map_err(|_| fail())?,
        _ => return Err(fail()),
    };
    let scale = num::pow(BigInt::from(10), frac.len());
    let frac: BigInt = frac.parse().map_err(|_| fail())?;
    let q = Rational::new(int * &scale + frac, scale);
    Ok(if negative { -q } else { q })
}
#[test]
fn test_parse_rational() {
    let q = |n: i64, d: i64| Rational::new(n.into(), d.into());
    assert_eq!(parse_rational("5").unwrap(), q(5, 1));
    assert_eq!(parse_rational(" 3/2 ").unwrap(), q(3, 2));
    assert_eq!(parse_rational("6/4").unwrap(), q(3, 2));
    assert_eq!(parse_rational("2.5").unwrap(), q(5, 2));
    assert_eq!(parse_rational("0.125").unwrap(), q(1, 8));
    assert_eq!(parse_rational(".5").unwrap(), q(1, 2));
    assert_eq!(parse_rational("-1.5").unwrap(), q(-3, 2));
    assert!(parse_rational("1/0").is_err());
    assert!(parse_rational("abc").is_err());
    assert!(parse_rational("1.").is_err());
    assert!(parse_rational("1.2.3").is_err());
    assert!(parse_rational("").is_err());
}

// (lcm of denominators / gcd of numerators, first component)
pub fn height(v: &[Rational; 3]) -> (Rational, Rational) {
    let lcm = v.iter().fold(BigInt::one(), |acc, x| acc.lcm(x.denom()));
    let gcd = v.iter().fold(BigInt::zero(), |acc, x| acc.gcd(x.numer()));
    let scale = if gcd.is_zero() { Rational::zero() } else { Rational::new(lcm, gcd) };
    (scale, v[0].clone())
}
#[test]
fn test_height() {
    let q = |n: i64, d: i64| Rational::new(n.into(), d.into());
    assert_eq!(height(&[q(5, 1), q(5, 1), q(6, 1)]), (q(1, 1), q(5, 1)));
    assert_eq!(height(&[q(10, 1), q(10, 1), q(12, 1)]), (q(1, 2), q(10, 1)));
    assert_eq!(height(&[q(3, 2), q(3, 2), q(2, 1)]), (q(2, 1), q(3, 2)));
    assert_eq!(height(&[q(41, 15), q(156, 35), q(101, 21)]), (q(105, 1), q(41, 15)));
    assert!(height(&[q(3, 1), q(4, 1), q(5, 1)]) < height(&[q(41, 15), q(156, 35), q(101, 21)]));
}

// Vec::is_sorted is nightly-only, so use this workaround
#[cfg(test)]
pub fn is_sorted<T: PartialOrd>(arr: &[T]) -> bool {
    for w in arr.windows(2) {
        if w[0] > w[1] {
            return false;
        }
    }
    true
}
#[test]
fn test_is_sorted() {
    assert!(is_sorted(&[1, 2, 3]));
    assert!(is_sorted(&[1, 3, 3]));
    assert!(!is_sorted(&[1, 4, 3]));
}
