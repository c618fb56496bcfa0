use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tauchen discretization of AR(1) shocks.
#[derive(Parser)]
#[command(
    name = "tauchen",
    version,
    about = "Discretize an AR(1) shock process into a finite-state Markov chain"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Compute the state grid and transition matrix.
    Discretize(DiscretizeArgs),
    /// Simulate a path of the discretized chain.
    Simulate(SimulateArgs),
}

/// Arguments for the `discretize` subcommand.
#[derive(clap::Args)]
pub struct DiscretizeArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "tauchen.toml")]
    pub config: PathBuf,

    /// Override output JSON path from config (stdout if neither is set).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the number of states from config.
    #[arg(long)]
    pub nz: Option<usize>,

    /// Compute the transition matrix in parallel.
    #[arg(long)]
    pub parallel: bool,
}

/// Arguments for the `simulate` subcommand.
#[derive(clap::Args)]
pub struct SimulateArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "tauchen.toml")]
    pub config: PathBuf,

    /// Number of periods to simulate.
    #[arg(short = 'n', long, default_value_t = 1000)]
    pub periods: usize,

    /// Override global RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Initial state index (defaults to the middle state).
    #[arg(long)]
    pub initial: Option<usize>,

    /// Path for the simulated path JSON (stdout if omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_discretize() {
        let cli = Cli::parse_from([
            "tauchen",
            "-vv",
            "discretize",
            "--config",
            "m.toml",
            "--nz",
            "9",
            "--parallel",
        ]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Discretize(args) => {
                assert_eq!(args.config, PathBuf::from("m.toml"));
                assert_eq!(args.nz, Some(9));
                assert!(args.parallel);
                assert!(args.output.is_none());
            }
            Command::Simulate(_) => panic!("expected discretize"),
        }
    }

    #[test]
    fn parses_simulate_defaults() {
        let cli = Cli::parse_from(["tauchen", "simulate"]);
        match cli.command {
            Command::Simulate(args) => {
                assert_eq!(args.config, PathBuf::from("tauchen.toml"));
                assert_eq!(args.periods, 1000);
                assert!(args.seed.is_none());
                assert!(args.initial.is_none());
            }
            Command::Discretize(_) => panic!("expected simulate"),
        }
    }
}
