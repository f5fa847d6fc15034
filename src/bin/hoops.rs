use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::warn;

use hoops_core::{breakdown_text, catalog, summary_line, DataPaths, DatasetTables, Location, MatchupPredictor};

/// College basketball matchup predictor
#[derive(Parser, Debug)]
#[command(name = "hoops", version, about)]
struct Cli {
    /// Directory holding the three CSV tables
    #[arg(long, env = "HOOPS_DATA_DIR", default_value = ".")]
    data_dir: PathBuf,

    /// Game results table (overrides the file under --data-dir)
    #[arg(long, env = "HOOPS_RESULTS_PATH")]
    results: Option<PathBuf>,

    /// Pairwise ratings table (overrides the file under --data-dir)
    #[arg(long, env = "HOOPS_RATINGS_PATH")]
    ratings: Option<PathBuf>,

    /// Advanced stats table (overrides the file under --data-dir)
    #[arg(long, env = "HOOPS_ADVANCED_PATH")]
    advanced: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Predict a single game
    Predict {
        team: String,
        opponent: String,

        /// H (team at home), V (team visiting) or N (neutral site)
        #[arg(short, long, default_value = "N")]
        location: String,

        /// Print only the headline, without the numeric breakdown
        #[arg(long)]
        brief: bool,
    },

    /// List known teams, optionally filtered by a search string
    Teams {
        #[arg(short, long)]
        search: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let paths = DataPaths::in_dir(&cli.data_dir).with_overrides(cli.results, cli.ratings, cli.advanced);
    let tables = DatasetTables::load(&paths).context("could not load the prediction datasets")?;

    match cli.command {
        Command::Predict {
            team,
            opponent,
            location,
            brief,
        } => {
            if team == opponent {
                bail!("pick two different schools");
            }
            let location = Location::from_code(&location);
            let engine = MatchupPredictor::new(&tables);

            for name in [&team, &opponent] {
                if !engine.features().contains(name) {
                    warn!(team = %name, "unknown team, predicting with an average profile");
                }
            }

            let result = engine.predict_matchup(&team, &opponent, location);
            println!("Predicted winner: {}", result.favorite());
            println!("{}", summary_line(&result));
            if !brief {
                println!();
                println!("{}", breakdown_text(&result));
            }
        }
        Command::Teams { search } => {
            let names = catalog::team_names(&tables.advanced);
            let query = search.unwrap_or_default();
            for name in catalog::search(&names, &query) {
                println!("{name}");
            }
        }
    }

    Ok(())
}
