use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use topicscope::config::Config;
use topicscope::mlflow::client::MlflowClient;
use topicscope::output::terminal;
use topicscope::sentiment::blender::SentimentBlender;
use topicscope::sentiment::report::build_sentiment_report;
use topicscope::snapshot::source::{FileSnapshotSource, SnapshotSource};
use topicscope::snapshot::Snapshot;
use topicscope::wordcloud::{build_word_cloud_limited, MAX_WORDS};

/// topicscope: word clouds and sentiment for topic-model snapshots.
///
/// Reads the topic table logged by the newest run of an MLflow experiment
/// and serves it, a word cloud, and per-topic sentiment as JSON.
#[derive(Parser)]
#[command(name = "topicscope", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve {
        /// Port to listen on
        #[arg(long, default_value = "8000")]
        port: u16,

        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        bind: String,

        /// Serve a local CSV instead of the latest MLflow run
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Print the raw topic table as JSON
    TopicInfo {
        /// Read a local CSV instead of the latest MLflow run
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Show the most frequent content words
    Wordcloud {
        /// Read a local CSV instead of the latest MLflow run
        #[arg(long)]
        file: Option<PathBuf>,

        /// Number of words to show (max 200)
        #[arg(long, default_value = "50")]
        limit: usize,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show per-topic sentiment
    Sentiment {
        /// Read a local CSV instead of the latest MLflow run
        #[arg(long)]
        file: Option<PathBuf>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("topicscope=info,tower_http=info")
            }),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, bind, file } => {
            let source = open_source(file)?;
            topicscope::web::run_server(source, port, &bind).await?;
        }

        Commands::TopicInfo { file } => {
            let snapshot = load_snapshot(file).await?;
            println!("{}", serde_json::to_string_pretty(&snapshot.records)?);
        }

        Commands::Wordcloud { file, limit, json } => {
            let snapshot = load_snapshot(file).await?;
            let cloud = build_word_cloud_limited(snapshot.documents(), limit.min(MAX_WORDS));
            if json {
                println!("{}", serde_json::to_string_pretty(&cloud)?);
            } else {
                terminal::display_word_cloud(&cloud);
            }
        }

        Commands::Sentiment { file, json } => {
            let snapshot = load_snapshot(file).await?;
            let report = build_sentiment_report(&snapshot, &SentimentBlender::default());
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                terminal::display_sentiment_report(&report);
            }
        }
    }

    Ok(())
}

/// Pick the snapshot source: a local file when given, otherwise MLflow.
fn open_source(file: Option<PathBuf>) -> Result<Arc<dyn SnapshotSource>> {
    match file {
        Some(path) => {
            info!(path = %path.display(), "Using local snapshot file");
            Ok(Arc::new(FileSnapshotSource::new(path)))
        }
        None => {
            let config = Config::load()?;
            config.require_tracking_uri()?;
            info!(
                tracking_uri = %config.tracking_uri,
                experiment = %config.experiment_name,
                "Using latest MLflow run"
            );
            Ok(Arc::new(MlflowClient::from_config(&config)?))
        }
    }
}

async fn load_snapshot(file: Option<PathBuf>) -> Result<Snapshot> {
    let source = open_source(file)?;
    let csv = source.fetch_csv().await?;
    Snapshot::parse(&csv)
}
