use std::io::{self, Write};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use heron_curves::driver::{self, Config, Inputs};

macro_rules! crash {
    ($val:expr) => {
        std::process::exit($val)
    };
    ($val:expr, $($msg:expr),+) => {{
        eprintln!($($msg),+);
        std::process::exit($val);
    }};
}

const USAGE: &str = "usage: heron <a,b,c> [d,e,f ...] [searcher depth = 12] [reducer depth = 8] [solver depth = 8] [-v]";

#[derive(Parser)]
#[command(name = "heron", about = "Find Heronian triangles with the same semiperimeter and inradius as the given ones")]
struct Args {
    /// triangles `a,b,c` (integers, fractions or decimals), then optional searcher, reducer and solver depths
    values: Vec<String>,

    /// print intermediate point sets and stage timings
    #[arg(short, long)]
    verbose: bool,
}

fn parse_depth(v: &str) -> usize {
    match v.parse::<usize>() {
        Ok(v) => v,
        Err(_) => crash!(2, "failed to parse '{}' as depth", v),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    // triangles first, strictly left to right; a bad one stops everything
    let mut inputs = Inputs::default();
    let mut values = args.values.iter().peekable();
    while let Some(v) = values.next_if(|v| v.contains(',')) {
        if let Err(e) = inputs.add(v) {
            crash!(2, "{}, exiting", e);
        }
    }

    let mut config = Config { verbose: args.verbose, ..Config::default() };
    let depths = [&mut config.searcher_depth, &mut config.reducer_depth, &mut config.solver_depth];
    for (slot, v) in depths.into_iter().zip(values) {
        *slot = parse_depth(v);
    }

    let (curve, points) = match inputs.finish() {
        Some(x) => x,
        None => crash!(1, "{}", USAGE),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let res = driver::run(&curve, points, &config, &mut out).and_then(|_| out.flush());
    if let Err(e) = res {
        crash!(3, "failed to write output: {}", e);
    }
}
