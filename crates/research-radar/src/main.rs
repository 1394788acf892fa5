//! research-radar entry point.
//!
//! Fetches arXiv papers and top GitHub repositories, once or on a fixed
//! polling interval, and writes timestamped JSON snapshots.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use research_radar::agent::{Agent, CycleOptions};
use research_radar::config::{Config, defaults};

#[derive(Parser, Debug)]
#[command(name = "research-radar")]
#[command(about = "Snapshot agent for arXiv papers and trending GitHub repositories")]
#[command(version)]
struct Cli {
    /// Run one fetch cycle and exit
    #[arg(long)]
    once: bool,

    /// Polling interval in seconds (0 means no loop)
    #[arg(long, default_value_t = 0)]
    interval: u64,

    /// Snapshot output directory
    #[arg(long, default_value = defaults::DATA_DIR)]
    data_dir: PathBuf,

    /// Max number of arXiv results
    #[arg(long, default_value_t = defaults::MAX_RESULTS)]
    arxiv_max: usize,

    /// Keywords for the arXiv search
    #[arg(long, default_value = "")]
    arxiv_keywords: String,

    /// arXiv category filter
    #[arg(long, default_value = defaults::ARXIV_CATEGORY)]
    arxiv_category: String,

    /// Specific arXiv id to fetch (e.g. 2301.01234)
    #[arg(long)]
    arxiv_id: Option<String>,

    /// Max number of GitHub repos to fetch
    #[arg(long, default_value_t = defaults::MAX_RESULTS)]
    github_max: usize,

    /// Keywords for the GitHub search
    #[arg(long, default_value = "")]
    github_keywords: String,

    /// Filter GitHub by language
    #[arg(long, default_value = "")]
    github_language: String,

    /// GitHub token (optional, raises the search rate limit)
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    github_token: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env before parsing so clap's env-backed args see it
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        data_dir = %cli.data_dir.display(),
        "starting research-radar"
    );

    let config = Config::new(cli.github_token.clone()).with_data_dir(cli.data_dir.clone());
    let agent = Agent::new(&config)?;

    if let Some(ref arxiv_id) = cli.arxiv_id {
        let path = agent.run_single(arxiv_id).await?;
        tracing::info!(path = %path.display(), "single-paper fetch complete");
        return Ok(());
    }

    let opts = CycleOptions {
        arxiv_max: cli.arxiv_max,
        arxiv_keywords: cli.arxiv_keywords.clone(),
        arxiv_category: cli.arxiv_category.clone(),
        github_max: cli.github_max,
        github_keywords: cli.github_keywords.clone(),
        github_language: cli.github_language.clone(),
    };

    if cli.once || cli.interval == 0 {
        let report = agent.run_cycle(&opts).await?;
        tracing::info!(
            arxiv = report.arxiv_count,
            github = report.github_count,
            "cycle complete"
        );
        return Ok(());
    }

    tracing::info!(interval_secs = cli.interval, "starting polling loop");
    loop {
        match agent.run_cycle(&opts).await {
            Ok(report) => tracing::info!(
                arxiv = report.arxiv_count,
                github = report.github_count,
                "cycle complete"
            ),
            // the loop owns the schedule; a failed cycle waits for the next tick
            Err(error) => tracing::error!(%error, "cycle failed"),
        }
        tokio::time::sleep(Duration::from_secs(cli.interval)).await;
    }
}
