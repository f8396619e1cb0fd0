//! Ladder simulator CLI - drive the scoring engine over a demo season.
//!
//! Builds or loads an in-memory season, runs the engine end to end and
//! prints the resulting ladders, audit trail and data-quality warnings.
//! A developer tool for iterating on scoring-rule behavior, not the
//! league's administrator UI.

mod output;
mod season;

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use time::macros::format_description;
use time::Date;
use tracing::info;

use ladder::{Division, EngineConfig, FixtureStore, LadderEngine};
use output::{DivisionLadder, Report};

#[derive(Parser)]
#[command(name = "ladder-sim")]
#[command(about = "Drive the ladder scoring engine over a generated or loaded season")]
struct Args {
    /// Season JSON file to load (generates a demo season when omitted)
    #[arg(long)]
    season: Option<PathBuf>,

    /// Teams per division when generating
    #[arg(long, default_value = "6")]
    teams: usize,

    /// Weekly rounds when generating
    #[arg(long, default_value = "5")]
    rounds: u32,

    /// RNG seed for deterministic generation
    #[arg(long, default_value = "1")]
    seed: u64,

    /// Standings cutoff date (YYYY-MM-DD); defaults to the last fixture
    #[arg(long)]
    as_of: Option<String>,

    /// Restrict ladder output to one division token (e.g. MENS_A)
    #[arg(long)]
    division: Option<String>,

    /// Also print the per-team-per-game audit trail
    #[arg(long)]
    audit: bool,

    /// Emit one JSON report instead of text
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let store = match &args.season {
        Some(path) => {
            info!(path = %path.display(), "loading season file");
            season::SeasonFile::load(path)?.into_store()?
        }
        None => {
            info!(
                teams = args.teams,
                rounds = args.rounds,
                seed = args.seed,
                "generating demo season"
            );
            season::generate(args.teams, args.rounds, args.seed).into_store()?
        }
    };

    let date_format = format_description!("[year]-[month]-[day]");
    let as_of = match &args.as_of {
        Some(raw) => Date::parse(raw, date_format)?,
        None => store
            .latest_fixture_date()?
            .ok_or("season contains no fixtures; provide --as-of")?,
    };

    let divisions: Vec<Division> = match &args.division {
        Some(token) => vec![Division::from_str(token)?],
        None => Division::ALL.to_vec(),
    };

    let engine = LadderEngine::with_memory_store(store, EngineConfig::from_env()?);
    let window = engine.standings_window(as_of)?;

    let mut ladders = Vec::new();
    for division in divisions {
        let rows = engine.compute_standings(division, as_of)?;
        ladders.push(DivisionLadder {
            division,
            rows: rows.as_ref().clone(),
        });
    }
    let audit = args
        .audit
        .then(|| engine.compute_audit(&window))
        .transpose()?;
    let warnings = engine.validate(&window)?;

    if args.json {
        let report = Report {
            ladders,
            audit,
            warnings,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Season window {} to {}", window.start(), window.end());
    for ladder in &ladders {
        output::print_ladder(ladder.division, &ladder.rows);
    }
    if let Some(audit_rows) = &audit {
        output::print_audit(audit_rows);
    }
    output::print_warnings(&warnings);
    Ok(())
}
