use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod classify;
mod collect;
mod load;
mod transcribe;

#[derive(Debug, Parser)]
#[command(name = "scamwatch")]
#[command(about = "Scam-post collection, classification, and loading pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Scrape posts matching a search query into a JSON file.
    Collect {
        /// Search query submitted to the site's native search.
        #[arg(long, default_value = "#ad #crypto")]
        query: String,
        /// Maximum number of posts to collect.
        #[arg(long, default_value_t = 5)]
        max: usize,
        /// Output file for the collected posts.
        #[arg(long, default_value = "tweets.json")]
        out: PathBuf,
    },
    /// Classify a text, or every post in a collected file, as a likely scam.
    Classify {
        /// A single text to classify.
        #[arg(long, conflicts_with = "file")]
        text: Option<String>,
        /// A collected posts file; every post body is classified.
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Transcribe a video's audio track to text.
    Transcribe {
        /// Path to the video file.
        #[arg(long)]
        video: PathBuf,
    },
    /// Load post records from a JSON file into the hosted table.
    Load {
        /// File of post records to upload.
        #[arg(long)]
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = scamwatch_core::config::load_app_config()?;
    let cli = Cli::parse();

    match cli.command {
        Commands::Collect { query, max, out } => collect::run(&config, &query, max, &out).await,
        Commands::Classify { text, file } => classify::run(&config, text, file).await,
        Commands::Transcribe { video } => transcribe::run(&config, &video).await,
        Commands::Load { file } => load::run(&config, &file).await,
    }
}
