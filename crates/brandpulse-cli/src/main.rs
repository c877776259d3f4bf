use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use brandpulse_cluster::{run_analyze, EmbeddingClient};
use brandpulse_core::{load_app_config, SignalStore};
use brandpulse_monitor::{run_monitor, RedditReader, SentimentClassifier};

#[derive(Debug, Parser)]
#[command(name = "brandpulse")]
#[command(about = "Brand crisis-signal monitoring and topic clustering")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch the feed, classify sentiment, and append new crisis signals.
    Monitor,
    /// Cluster accumulated signals into labeled topics.
    Analyze,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // load_app_config owns `.env` loading.
    let config = load_app_config()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .init();

    let cli = Cli::parse();
    let store = SignalStore::new(&config.store_path);

    match cli.command {
        Commands::Monitor => {
            let reader = RedditReader::new(&config.user_agent)?;
            let classifier = SentimentClassifier::new(&config.inference_url);
            let outcome = run_monitor(&config, &store, &reader, &classifier).await?;

            if let Some(cause) = &outcome.feed_failure {
                println!("feed unavailable ({cause}); no new signals this run");
            } else if outcome.stored == 0 {
                println!(
                    "no negative posts found in this batch ({} analyzed)",
                    outcome.fetched
                );
            } else {
                println!(
                    "saved {} negative posts to {} ({} fetched, {} skipped)",
                    outcome.stored,
                    store.path().display(),
                    outcome.fetched,
                    outcome.skipped
                );
            }
        }
        Commands::Analyze => {
            let embedder = EmbeddingClient::new(&config.embed_url);
            let outcome = run_analyze(&config, &store, &embedder).await?;

            println!("--- results ---");
            for cluster in &outcome.clusters {
                println!(
                    "cluster {}: {} posts -> topic: [{}]",
                    cluster.id,
                    cluster.size,
                    cluster.keywords.join(", ")
                );
            }
            println!(
                "saved {} clustered signals to {}",
                outcome.total_signals,
                config.clustered_path.display()
            );
        }
    }

    Ok(())
}
