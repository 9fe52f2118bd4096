use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use nhl_standings::config::{DEFAULT_STANDINGS_URL, DEFAULT_TIMEOUT_SECS};
use nhl_standings::{
    parse_standings_page, StandingsClient, StandingsConfig, StandingsQuery, StandingsReport, View,
};
use tracing::debug;

#[derive(Parser)]
#[command(name = "nhl-standings")]
#[command(about = "Scrape NHL standings into JSON keyed by team name")]
struct Cli {
    /// Season to fetch, by the year it ends in (defaults to the current season)
    #[arg(short, long)]
    season: Option<i32>,

    /// Group teams by division or conference
    #[arg(long, value_enum, default_value_t = View::Div)]
    view: View,

    /// Standings date parameter ("0" for latest)
    #[arg(long, default_value = "0")]
    date: String,

    /// Standings month parameter ("xxx" for latest)
    #[arg(long, default_value = "xxx")]
    month: String,

    /// Standings page URL, without query string
    #[arg(long, default_value = DEFAULT_STANDINGS_URL)]
    url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Parse a saved standings page instead of fetching one
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file for the JSON standings (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write single-line JSON
    #[arg(long)]
    compact: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }

    fn query(&self) -> StandingsQuery {
        let season = self
            .season
            .unwrap_or_else(|| nhl_standings::config::season_for(chrono::Local::now().date_naive()));

        StandingsQuery {
            season,
            view: self.view,
            date: self.date.clone(),
            month: self.month.clone(),
        }
    }

    fn config(&self) -> StandingsConfig {
        StandingsConfig {
            base_url: self.url.clone(),
            timeout: Duration::from_secs(self.timeout),
            ..StandingsConfig::default()
        }
    }
}

fn setup_logging(cli: &Cli) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("nhl_standings={}", cli.log_level())));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

async fn load(cli: &Cli) -> anyhow::Result<StandingsReport> {
    let config = cli.config();

    if let Some(path) = &cli.input {
        let html = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        return Ok(parse_standings_page(&html, &config)?);
    }

    let query = cli.query();
    if !cli.quiet {
        eprintln!(
            "🏒 Fetching {} standings for season {}-{}",
            query.view,
            query.season - 1,
            query.season
        );
    }
    let client = StandingsClient::new(config)?;
    Ok(client.fetch_standings(&query).await?)
}

fn print_summary(report: &StandingsReport) {
    eprintln!("\n📊 Standings Summary:");
    eprintln!("   Teams: {}", report.standings.len());
    if !report.failures.is_empty() {
        eprintln!("   ⚠️  Rows skipped: {}", report.failures.len());
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(&cli);

    let report = load(&cli).await?;

    let json = if cli.compact {
        serde_json::to_string(&report.standings)?
    } else {
        serde_json::to_string_pretty(&report.standings)?
    };

    match &cli.output {
        Some(path) => {
            fs::write(path, &json).with_context(|| format!("failed to write {}", path.display()))?;
            if !cli.quiet {
                eprintln!("✅ Standings saved to: {}", path.display());
            }
        }
        None => println!("{}", json),
    }

    if !cli.quiet {
        print_summary(&report);
    }
    for (rank, (name, stats)) in report.standings.ranked().into_iter().enumerate() {
        debug!("{:>2}. {} - {} pts ({})", rank + 1, name, stats.points, stats.record);
    }

    Ok(())
}
