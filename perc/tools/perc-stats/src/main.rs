#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use log::{info, LevelFilter};
use perc::{estimate_probability, fill, PercolationStats};
use rand::{rngs::StdRng, Rng, SeedableRng};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

////////////////////////////////////////////////////////////////////////////////

#[derive(Parser)]
#[command(about = "Estimates the percolation threshold of n-by-n grids")]
struct Args {
    #[arg(long, default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Runs independent trials and prints threshold statistics.
    Stats {
        n: usize,
        trials: usize,
        #[arg(long)]
        seed: Option<u64>,
        /// Spread trials over all cores.
        #[arg(long)]
        parallel: bool,
    },
    /// Opens random sites of a single grid until it percolates.
    Single {
        n: usize,
        #[arg(long)]
        seed: Option<u64>,
        /// Print the grid once it percolates.
        #[arg(long)]
        show: bool,
    },
    /// Estimates the probability that a grid with blocked-site probability
    /// `vacancy` percolates.
    Probability {
        n: usize,
        vacancy: f64,
        #[arg(long, default_value_t = 10000)]
        trials: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn make_rng(seed: Option<u64>) -> StdRng {
    let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!("using seed {seed}");
    StdRng::seed_from_u64(seed)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    TermLogger::init(
        args.log_level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    match args.command {
        Command::Stats {
            n,
            trials,
            seed,
            parallel,
        } => {
            let mut rng = make_rng(seed);
            let stats = if parallel {
                PercolationStats::run_parallel(n, trials, &mut rng)?
            } else {
                PercolationStats::run(n, trials, &mut rng)?
            };
            println!("mean                    = {}", stats.mean());
            println!("stddev                  = {}", stats.stddev());
            println!(
                "95% confidence interval = [{}, {}]",
                stats.confidence_low(),
                stats.confidence_high()
            );
        }
        Command::Single { n, seed, show } => {
            let grid = fill(n, &mut make_rng(seed))?;
            if show {
                print!("{grid}");
            }
            println!("{}", grid.open_count());
            println!("{}", grid.n());
            println!("{}", grid.open_fraction());
        }
        Command::Probability {
            n,
            vacancy,
            trials,
            seed,
        } => {
            let p = estimate_probability(n, vacancy, trials, &mut make_rng(seed))?;
            println!("{p}");
        }
    }

    Ok(())
}
