use std::collections::BTreeSet;
use std::io::{self, Write};
use std::time::Instant;

use itertools::Itertools;
use tracing::info;

use crate::curve::{Curve, CurvePoint, Point};
use crate::error::{Error, Result};
use crate::reduce::reduce;
use crate::search::search;
use crate::solve::solve;
use crate::triangle::Triangle;

// intermediate dumps longer than this get no replay line
pub const REPLAY_MAX: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub searcher_depth: usize,
    pub reducer_depth: usize,
    pub solver_depth: usize,
    pub verbose: bool,
}
impl Default for Config {
    fn default() -> Self {
        Self { searcher_depth: 12, reducer_depth: 8, solver_depth: 8, verbose: false }
    }
}

// triangles accepted so far; all of them must lie on the same curve
#[derive(Debug, Default)]
pub struct Inputs {
    curve: Option<Curve>,
    points: BTreeSet<CurvePoint>,
}
impl Inputs {
    pub fn add(&mut self, arg: &str) -> Result<()> {
        let t = Triangle::parse(arg)?;
        let (curve, p) = Curve::from_triangle(&t).map_err(|_| Error::NonHeronian(arg.to_owned()))?;
        if *self.curve.get_or_insert_with(|| curve.clone()) != curve {
            return Err(Error::MismatchedInvariants(arg.to_owned()));
        }
        self.points.insert(p);
        Ok(())
    }
    pub fn curve(&self) -> Option<&Curve> {
        self.curve.as_ref()
    }
    pub fn finish(self) -> Option<(Curve, BTreeSet<CurvePoint>)> {
        Some((self.curve?, self.points))
    }
}

// prints the points as triangles in height order, then the count and, if there are at most
// `replay_max` of them, a command line that feeds them back in
pub fn print_solutions<'a, I>(out: &mut dyn Write, curve: &Curve, points: I, replay_max: Option<usize>) -> io::Result<usize>
where I: IntoIterator<Item = &'a CurvePoint>
{
    let triangles = points.into_iter().map(|p| curve.triangle(p)).sorted_by_cached_key(Triangle::height).collect_vec();
    for t in &triangles {
        writeln!(out, "{}", t)?;
    }
    writeln!(out, "count: {}", triangles.len())?;
    match replay_max {
        Some(max) if triangles.len() <= max => {
            writeln!(out, "heron {}", triangles.iter().map(|t| t.sides().iter().join(",")).join(" "))?;
        }
        _ => (),
    }
    Ok(triangles.len())
}

fn lap(previous: &mut Instant) -> u128 {
    let now = Instant::now();
    let ms = now.duration_since(*previous).as_millis();
    *previous = now;
    ms
}

// search -> reduce -> solve, printing the final triangles; returns how many were printed
pub fn run(curve: &Curve, inputs: BTreeSet<CurvePoint>, config: &Config, out: &mut dyn Write) -> io::Result<usize> {
    let start = Instant::now();
    let mut previous = start;

    let mut points = inputs;
    points.extend(search(curve, config.searcher_depth));
    info!(points = points.len(), "searcher done");
    if config.verbose {
        print_solutions(out, curve, &points, Some(REPLAY_MAX))?;
        writeln!(out, "searcher finished in {} ms\n", lap(&mut previous))?;
    }

    let generators = reduce(curve, &points, config.reducer_depth);
    info!(basis = generators.len(), "reducer done");
    if config.verbose {
        print_solutions(out, curve, &generators, Some(REPLAY_MAX))?;
        writeln!(out, "reducer finished in {} ms\n", lap(&mut previous))?;
    }

    let basis: Vec<Point> = generators.iter().map(CurvePoint::generator).collect();
    let solutions = solve(curve, &basis, config.solver_depth);
    let count = print_solutions(out, curve, &solutions, None)?;
    if config.verbose {
        writeln!(out, "solver finished in {} ms", lap(&mut previous))?;
        writeln!(out, "total finished in {} ms", start.elapsed().as_millis())?;
    }
    Ok(count)
}

#[cfg(test)]
fn run_to_string(args: &[&str], config: &Config) -> String {
    let mut inputs = Inputs::default();
    for a in args {
        inputs.add(a).unwrap();
    }
    let (curve, points) = inputs.finish().unwrap();
    let mut out = Vec::new();
    run(&curve, points, config, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_run_isosceles() {
    assert_eq!(run_to_string(&["5,5,6"], &Config::default()), "5, 5, 6\ncount: 1\n");
}

#[test]
fn test_run_13_14_15() {
    let expected = [
        "13, 14, 15",
        "194/15, 777/55, 493/33",
        "324591/24817, 750715/54119, 226082/15023",
        "8630869983/670077457, 21385757659/1500560903, 6020391170/404929511",
        "4025852486299586/305677289654055, 14977985374399593/1089818203562983, 10127400092581117/671303740994865",
        "count: 5",
    ];
    let out = run_to_string(&["13,14,15"], &Config::default());
    assert_eq!(out.lines().collect_vec(), expected);
}

#[test]
fn test_run_verbose() {
    let config = Config { verbose: true, ..Config::default() };
    let out = run_to_string(&["3,4,5"], &config);
    let lines = out.lines().collect_vec();
    // searcher dump
    assert_eq!(lines[..4], ["3, 4, 5", "41/15, 156/35, 101/21", "count: 2", "heron 3,4,5 41/15,156/35,101/21"]);
    assert!(lines[4].starts_with("searcher finished in "));
    // reducer dump
    assert_eq!(lines[6..9], ["3, 4, 5", "count: 1", "heron 3,4,5"]);
    assert!(lines[9].starts_with("reducer finished in "));
    assert!(lines.contains(&"count: 5"));
    assert!(lines.last().unwrap().starts_with("total finished in "));
}

#[test]
fn test_inputs_validation() {
    let mut inputs = Inputs::default();
    assert!(inputs.curve().is_none());
    assert_eq!(inputs.add("1,1,3"), Err(Error::InvalidTriangle("1,1,3".into())));
    assert_eq!(inputs.add("2,3,4"), Err(Error::NonHeronian("2,3,4".into())));
    assert!(inputs.curve().is_none());

    inputs.add("3,4,5").unwrap();
    inputs.add("41/15,156/35,101/21").unwrap();
    inputs.add("5,4,3").unwrap(); // same point again
    assert_eq!(inputs.add("5,5,6"), Err(Error::MismatchedInvariants("5,5,6".into())));

    // earlier triangles stay accepted
    let (_, points) = inputs.finish().unwrap();
    assert_eq!(points.len(), 2);
}

#[test]
fn test_inputs_empty() {
    assert!(Inputs::default().finish().is_none());
}

#[test]
fn test_print_solutions_replay() {
    let mut inputs = Inputs::default();
    inputs.add("5,5,6").unwrap();
    let (curve, points) = inputs.finish().unwrap();

    let mut out = Vec::new();
    assert_eq!(print_solutions(&mut out, &curve, &points, Some(1)).unwrap(), 1);
    assert_eq!(String::from_utf8(out).unwrap(), "5, 5, 6\ncount: 1\nheron 5,5,6\n");

    let mut out = Vec::new();
    print_solutions(&mut out, &curve, &points, Some(0)).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "5, 5, 6\ncount: 1\n");
}
