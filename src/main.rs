//! Outbreak driver: play a batch of games with one policy and report the tally.

use anyhow::{Context, Result};
use clap::Parser;

use outbreak::policy::PolicyKind;
use outbreak::search::SearchConfig;
use outbreak::simulation::{run_session, SessionConfig};

#[derive(Parser)]
#[command(name = "outbreak")]
#[command(version, about = "Play the outbreak containment game with a chosen policy", long_about = None)]
struct Cli {
    /// Number of games to play
    #[arg(short, long, default_value_t = 100)]
    games: u32,

    /// Move-selection policy
    #[arg(short, long, value_enum, default_value_t = PolicyKind::Tree)]
    policy: PolicyKind,

    /// Lookahead depth for the tree policy
    #[arg(short, long, default_value_t = 3)]
    depth: u32,

    /// Session seed
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Print the session report as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = SessionConfig::new()
        .with_games(cli.games)
        .with_seed(cli.seed)
        .with_policy(cli.policy)
        .with_search(SearchConfig::default().with_max_depth(cli.depth));

    let report = run_session(&config).context("session failed")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }

    Ok(())
}
