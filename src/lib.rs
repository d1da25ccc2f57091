//! Enumerates Heronian triangles that share a semiperimeter and an inradius.
//!
//! Every such triangle with sides a, b, c is a positive rational point (s - a, s - b, s - c)
//! on the cubic x + y + z = s, xyz = r s. New points come from known ones by the chord and
//! tangent construction; the pipeline is
//!
//! 1. [`search()`]: probe rational x values for rational y,
//! 2. [`reduce()`]: shrink the found points to a small generating basis,
//! 3. [`solve()`]: expand the basis again up to a bounded number of chord steps.

#[macro_use]
extern crate more_asserts;

pub mod curve;
pub mod driver;
pub mod error;
pub mod pairs;
pub mod reduce;
pub mod search;
pub mod solve;
pub mod triangle;
pub mod util;

pub use curve::{Curve, CurvePoint, Line, Point};
pub use driver::{Config, Inputs};
pub use error::Error;
pub use reduce::reduce;
pub use search::search;
pub use solve::solve;
pub use triangle::Triangle;
