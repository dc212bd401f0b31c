//! spam-guard: SMS spam classification service
//!
//! # Usage
//!
//! ```bash
//! # Serve predictions over HTTP
//! spam-guard --config spam-guard.toml serve
//!
//! # Classify a single message
//! spam-guard classify "WINNER!! Claim your prize now"
//!
//! # Show the canonical token string for a message
//! spam-guard normalize "Hey, are we still meeting for lunch tomorrow?"
//!
//! # Score the artifacts against a labelled collection
//! spam-guard evaluate SMSSpamCollection
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use sms_preprocess::{Normalizer, RawDataset};
use spam_classifier::{SpamClassifier, SpamClassifierService};
use spam_guard::{evaluate, router, GuardConfig};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "spam-guard")]
#[command(about = "Classify SMS messages as spam or ham", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the vectorizer artifact path
    #[arg(long)]
    vectorizer: Option<PathBuf>,

    /// Override the classifier artifact path
    #[arg(long)]
    classifier: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve predictions over HTTP
    Serve {
        /// Override the listen address
        #[arg(short, long)]
        listen: Option<String>,
    },
    /// Classify a single message
    Classify {
        /// Raw message text
        message: String,
    },
    /// Print the normalized token string for a message
    Normalize {
        /// Raw message text
        message: String,
    },
    /// Score the artifacts against a tab-separated labelled collection
    Evaluate {
        /// Path to the collection (`ham|spam<TAB>text` per line)
        dataset: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = GuardConfig::load(cli.config.as_deref())?;
    if let Some(path) = cli.vectorizer {
        config.artifacts.vectorizer = path;
    }
    if let Some(path) = cli.classifier {
        config.artifacts.classifier = path;
    }

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Serve { listen } => {
            if let Some(addr) = listen {
                config.server.listen_addr = addr;
            }
            serve(config).await
        }
        Commands::Classify { message } => {
            let service = load(&config)?;
            let prediction = service.predict(&message)?;
            println!("{}", prediction.label);
            Ok(())
        }
        Commands::Normalize { message } => {
            let normalizer = Normalizer::english()?;
            println!("{}", normalizer.normalize(&message));
            Ok(())
        }
        Commands::Evaluate { dataset } => {
            let service = load(&config)?;
            let dataset = RawDataset::from_file(&dataset)
                .with_context(|| format!("Failed to read dataset {}", dataset.display()))?;
            let evaluation = evaluate(&service, &dataset);

            println!("messages:    {}", dataset.len());
            println!("scored:      {}", evaluation.scored());
            println!("failed:      {}", evaluation.failed);
            println!(
                "spam:        {} caught, {} missed",
                evaluation.true_spam, evaluation.false_ham
            );
            println!(
                "ham:         {} passed, {} flagged",
                evaluation.true_ham, evaluation.false_spam
            );
            match evaluation.accuracy {
                Some(accuracy) => println!("accuracy:    {:.4}", accuracy),
                None => println!("accuracy:    n/a"),
            }
            Ok(())
        }
    }
}

fn load(config: &GuardConfig) -> anyhow::Result<SpamClassifier> {
    SpamClassifier::load(&config.artifacts.vectorizer, &config.artifacts.classifier)
        .context("Failed to load model artifacts")
}

async fn serve(config: GuardConfig) -> anyhow::Result<()> {
    info!("Starting spam-guard v{}", env!("CARGO_PKG_VERSION"));
    config.validate()?;

    let service = match load(&config) {
        Ok(service) => Arc::new(service),
        Err(e) => {
            error!("Refusing to start without a model: {:#}", e);
            return Err(e);
        }
    };

    let app = router(service);
    let listener = tokio::net::TcpListener::bind(&config.server.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.server.listen_addr))?;
    info!("Listening on {}", config.server.listen_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
