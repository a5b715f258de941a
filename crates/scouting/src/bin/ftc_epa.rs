use std::io;
use std::str::FromStr;

use clap::Parser;
use epa::{RatingStore, predict};
use scouting::{
    config::{Config, DEFAULT_TOP_TEAMS},
    ftc::FtcClient,
    internal_clients::{DotEnv, InternalClients},
    prompt::read_matchup,
    report::{PredictionReport, final_scores, top_teams},
    season::{FtcSource, run_season},
};
use tracing::info;

/// Rate FTC teams by Expected Points Added across a list of events
#[derive(Parser)]
#[command(name = "ftc-epa", version)]
struct Args {
    /// Event codes to process, in order. Overrides FTC_EVENTS
    events: Vec<String>,

    /// Season year. Overrides FTC_SEASON
    #[arg(long)]
    season: Option<u16>,

    /// FTC Events API base URL. Overrides FTC_ENDPOINT
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Number of teams in the top list
    #[arg(long, default_value_t = DEFAULT_TOP_TEAMS)]
    top: usize,

    /// Skip the interactive match prediction
    #[arg(long)]
    no_predict: bool,

    /// Log level (trace, debug, info, warn, error). Overrides LOG_LEVEL
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let dotenv = DotEnv::load();

    let log_level = args
        .log_level
        .clone()
        .or_else(|| std::env::var("LOG_LEVEL").ok())
        .and_then(to_log_level)
        .unwrap_or(tracing::Level::INFO);
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize logging: {err}"))?;
    dotenv.log();
    let clients = InternalClients::try_new()?;

    let mut config = Config::from_env()?;
    if !args.events.is_empty() {
        config.events = args.events;
    }
    if let Some(season) = args.season {
        config.season = season;
    }
    if let Some(endpoint) = args.endpoint {
        config.endpoint = endpoint;
    }
    info!(
        "rating season {} from {}: {}",
        config.season,
        config.endpoint,
        config.events.join(", ")
    );

    let client = FtcClient::from_config(&config);
    let source = FtcSource {
        client: &client,
        http_client: clients.http_client(),
    };
    let mut store = RatingStore::new();
    let season = run_season(&source, &config.events, &mut store).await;

    println!("\n{}", final_scores(&store));
    println!("\n{}", top_teams(&store, args.top));

    if args.no_predict {
        return Ok(());
    }

    let matchup = read_matchup(&mut io::stdin().lock(), &mut io::stdout())?;
    let prediction = predict(&store, season.default_rating, matchup.red, matchup.blue);
    println!("\n{}", PredictionReport(&prediction));

    Ok(())
}

fn to_log_level(env: String) -> Option<tracing::Level> {
    tracing::Level::from_str(&env.to_uppercase()).ok()
}
