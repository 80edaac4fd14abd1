use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::info;
use par_quicksort::{SerialSort, SortConfig, Sorter, TUNED_PARAMS};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Sorts random integers with the fork-join quicksort and with the standard
/// serial sort, printing both timings.
#[derive(Parser, Debug)]
#[command(name = "forkjoin", version)]
struct Args {
    /// Number of random integers to sort.
    #[arg(long, default_value_t = 10_000_000)]
    size: usize,

    /// Ranges at or below this length are sorted serially.
    #[arg(long, default_value_t = TUNED_PARAMS.parallel_cutoff)]
    cutoff: usize,

    /// Worker threads (defaults to the available hardware parallelism).
    #[arg(long)]
    threads: Option<usize>,

    /// Seed for the input data (random when omitted).
    #[arg(long)]
    seed: Option<u64>,

    /// Serial fallback: introsort or std_unstable.
    #[arg(long, default_value = "introsort", value_parser = parse_serial)]
    serial: SerialSort,
}

fn parse_serial(name: &str) -> Result<SerialSort, String> {
    SerialSort::from_name(name).ok_or_else(|| format!("unknown serial sort '{name}'"))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut config = SortConfig::default()
        .with_cutoff(args.cutoff)
        .with_serial(args.serial);
    if let Some(threads) = args.threads {
        config = config.with_threads(threads);
    }
    let sorter = Sorter::new(config).context("invalid sorter configuration")?;

    let seed = args.seed.unwrap_or_else(rand::random);
    info!("seed={seed}");

    println!("fork-join pattern for parallel quicksort");
    println!("---------------------------------------------");
    println!("sorting {}x array", args.size);

    let mut rng = StdRng::seed_from_u64(seed);
    let mut parallel = (0..args.size)
        .map(|_| rng.random::<i32>())
        .collect::<Vec<_>>();
    let mut serial = parallel.clone();

    let start = Instant::now();
    sorter.sort(&mut parallel);
    println!("parallel sorted in {}ms", start.elapsed().as_millis());

    let start = Instant::now();
    serial.sort_unstable();
    println!("serial sorted in {}ms", start.elapsed().as_millis());

    if let Some(index) = parallel.iter().zip(&serial).position(|(p, s)| p != s) {
        bail!(
            "parallel result differs from serial result at index {index}: {} != {}",
            parallel[index],
            serial[index],
        );
    }

    Ok(())
}
