use itertools::Itertools;

use heron_curves::driver::{self, Config, Inputs};
use heron_curves::Error;

fn run(args: &[&str], config: &Config) -> Vec<String> {
    let mut inputs = Inputs::default();
    for a in args {
        inputs.add(a).unwrap();
    }
    let (curve, points) = inputs.finish().unwrap();
    let mut out = Vec::new();
    let count = driver::run(&curve, points, config, &mut out).unwrap();
    let lines = String::from_utf8(out).unwrap().lines().map(str::to_owned).collect_vec();
    assert_eq!(lines.last().unwrap(), &format!("count: {}", count));
    lines
}

fn depths(searcher_depth: usize, reducer_depth: usize, solver_depth: usize) -> Config {
    Config { searcher_depth, reducer_depth, solver_depth, verbose: false }
}

#[test]
fn isosceles_finds_itself() {
    let lines = run(&["5,5,6"], &Config::default());
    assert!(lines.contains(&"5, 5, 6".to_owned()));
    assert_eq!(lines, ["5, 5, 6", "count: 1"]);
}

#[test]
fn fractional_sides() {
    assert_eq!(run(&["5/2,5/2,3"], &Config::default()), ["5/2, 5/2, 3", "count: 1"]);
    assert_eq!(run(&["2.5,2.5,3"], &Config::default()), ["5/2, 5/2, 3", "count: 1"]);
}

#[test]
fn several_inputs_on_one_curve() {
    let lines = run(&["3,4,5", "41/15,156/35,101/21"], &depths(6, 4, 4));
    assert_eq!(lines, [
        "3, 4, 5",
        "41/15, 156/35, 101/21",
        "27689/8023, 35380/10153, 81831/16159",
        "count: 3",
    ]);
}

#[test]
fn shallow_solver() {
    // at solver depth 3 the chord steps from 6,25,29 stop after one new triangle
    let lines = run(&["6,25,29"], &depths(12, 8, 3));
    assert_eq!(lines, ["6, 25, 29", "4557629/371913, 38649390/2109149, 34238669/1163757", "count: 2"]);
}

#[test]
fn longer_chain() {
    let lines = run(&["9,10,17"], &Config::default());
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "9, 10, 17");
    assert_eq!(lines[1], "205649/25593, 316529/28785, 3847482/226745");
    assert_eq!(lines[5], "count: 5");
}

#[test]
fn rejects_bad_input_before_search() {
    let mut inputs = Inputs::default();
    assert_eq!(inputs.add("1,1,3"), Err(Error::InvalidTriangle("1,1,3".into())));
    assert_eq!(inputs.add("2,3,4"), Err(Error::NonHeronian("2,3,4".into())));
    assert_eq!(inputs.add("1/0,1,1"), Err(Error::Parse("1/0".into())));
    assert!(inputs.finish().is_none());
}

#[test]
fn rejects_mismatched_curves() {
    let mut inputs = Inputs::default();
    inputs.add("13,14,15").unwrap();
    assert_eq!(inputs.add("3,4,5"), Err(Error::MismatchedInvariants("3,4,5".into())));
    assert!(inputs.curve().is_some());
}
