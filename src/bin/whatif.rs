use std::path::PathBuf;
use std::process;

use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cricket_whatif::{
    codec, parse_scoreboard, render, CricinfoClient, FileStore, Match, MatchToggle, MemoryStore,
    ProviderConfig, Scenario, ScenarioSession, ScenarioState, ScenarioStore, Standings,
};

/// Explore what-if standings for a round-robin cricket tournament.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Scoreboard series id.
    #[arg(long, default_value_t = 8039)]
    series: u32,
    /// Tournament season.
    #[arg(long, default_value_t = 2019)]
    season: u16,
    /// Read a saved scoreboard JSON instead of fetching it.
    #[arg(long)]
    feed: Option<PathBuf>,
    /// File holding the scenario signature; loaded on start and rewritten after every toggle.
    #[arg(long)]
    scenario: Option<PathBuf>,
    /// Starting signature, one of 1, 2, O, X per match. Takes precedence over the scenario file.
    #[arg(long)]
    signature: Option<String>,
    /// Toggle a match result, as INDEX:SIDE with SIDE one of 1, 2, x. Repeatable.
    #[arg(long = "toggle", value_name = "INDEX:SIDE")]
    toggles: Vec<MatchToggle>,
    /// Base URL used to print a shareable link.
    #[arg(long)]
    share_base: Option<String>,
    /// Print JSON instead of text tables.
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    state: ScenarioState,
    signature: String,
    standings: Standings,
    matches: &'a [Match],
}

#[tokio::main]
async fn main() {
    setup_tracing();
    if let Err(err) = run(Args::parse()).await {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("cricket_whatif=info,whatif=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(args: Args) -> cricket_whatif::Result<()> {
    let matches = match &args.feed {
        Some(path) => {
            info!(path = %path.display(), "reading saved scoreboard");
            parse_scoreboard(&std::fs::read_to_string(path)?)?
        }
        None => {
            let config = ProviderConfig {
                series_id: args.series,
                season: args.season,
                ..ProviderConfig::default()
            };
            CricinfoClient::with_config(config).get_matches().await?
        }
    };

    let scenario = match &args.scenario {
        Some(path) => edit(FileStore::new(path), matches, &args)?,
        None => edit(MemoryStore::new(), matches, &args)?,
    };

    if args.json {
        let report = Report {
            state: scenario.state(),
            signature: scenario.signature(),
            standings: scenario.standings(),
            matches: scenario.matches(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", render::standings_table(&scenario.standings()));
    println!("{}", render::match_cards(scenario.matches()));
    println!("Signature: {}", scenario.signature());
    if let Some(base) = &args.share_base {
        println!("Share: {}", scenario.share_url(base));
    }
    Ok(())
}

fn edit<S: ScenarioStore>(
    mut store: S,
    matches: Vec<Match>,
    args: &Args,
) -> cricket_whatif::Result<Scenario> {
    if let Some(signature) = &args.signature {
        if codec::decode(signature, matches.len()).is_some() {
            store.save(signature)?;
        }
    }

    let mut session = ScenarioSession::open(store, matches)?;
    for MatchToggle { index, toggle } in &args.toggles {
        session.toggle(*index, *toggle)?;
    }
    Ok(session.into_scenario())
}
