use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use hunza_config::Config;
use hunza_types::SourceLanguage;
use serde::Serialize;
use tokio::signal;

pub mod commands;
pub mod logging;
pub mod request;
pub mod state;

#[cfg(test)]
mod tests;

use self::state::AppState;

#[derive(Parser)]
#[command(name = "hunza", version, about = "Burushaski/English dictionary translator")]
struct Cli {
    /// JSON config file; environment variables are used when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Extra lexicon JSON files merged over the seed lexicon
    #[arg(long = "lexicon", global = true)]
    lexicons: Vec<String>,

    /// Skip the embedded seed lexicon
    #[arg(long, global = true)]
    no_embedded: bool,

    #[arg(long, global = true)]
    max_ngram: Option<usize>,

    #[arg(long, global = true)]
    suggestion_limit: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Translate a single text
    Translate {
        text: String,
        /// auto, burushaski or english
        #[arg(long, short, default_value = "auto")]
        source: SourceLanguage,
    },
    /// Translate several texts, reporting per-text results and totals
    Batch {
        texts: Vec<String>,
        /// Read texts from a file, one per line
        #[arg(long, short)]
        file: Option<PathBuf>,
        #[arg(long, short, default_value = "auto")]
        source: SourceLanguage,
    },
    /// Autocomplete over Burushaski and English word forms
    Suggest {
        query: String,
        #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..=50))]
        limit: u64,
    },
    /// Example phrases, optionally containing a word
    Examples {
        word: Option<String>,
        #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..=50))]
        limit: u64,
    },
    /// Lexicon statistics
    Stats,
    /// Translate lines from stdin until EOF or Ctrl+C
    Repl {
        #[arg(long, short, default_value = "auto")]
        source: SourceLanguage,
    },
}

impl Cli {
    fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::new(),
        };

        if !self.lexicons.is_empty() {
            config
                .dictionary
                .additional_paths
                .extend(self.lexicons.iter().cloned());
        }
        if self.no_embedded {
            config.dictionary.use_embedded = false;
        }
        if let Some(max_ngram) = self.max_ngram {
            config.translator.max_ngram = max_ngram;
        }
        if let Some(limit) = self.suggestion_limit {
            config.translator.suggestion_limit = limit;
        }

        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.load_config()?;
    logging::init(&config.log);

    let state = Arc::new(AppState::load(config));

    let result = dispatch(state, cli.command).await;
    if let Err(e) = &result {
        tracing::error!("{e:#}");
    }
    result
}

async fn dispatch(state: Arc<AppState>, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Translate { text, source } => {
            print_json(&commands::translate::run(&state, &text, source)?)
        }
        Command::Batch {
            mut texts,
            file,
            source,
        } => {
            if let Some(path) = file {
                let content = tokio::fs::read_to_string(&path).await?;
                texts.extend(
                    content
                        .lines()
                        .filter(|l| !l.trim().is_empty())
                        .map(String::from),
                );
            }
            print_json(&commands::batch::run(&state, &texts, source)?)
        }
        Command::Suggest { query, limit } => {
            print_json(&commands::suggest::run(&state, &query, limit as usize)?)
        }
        Command::Examples { word, limit } => print_json(&commands::examples::run(
            &state,
            word.as_deref(),
            limit as usize,
        )?),
        Command::Stats => print_json(&commands::stats::run(&state)?),
        Command::Repl { source } => {
            // Shutdown future (Ctrl+C)
            let shutdown = async {
                if let Err(e) = signal::ctrl_c().await {
                    tracing::error!("failed to listen for ctrl+c: {e}");
                    std::future::pending::<()>().await;
                }
            };

            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let translated =
                commands::repl::run(state, source, stdin, tokio::io::stdout(), shutdown).await?;
            tracing::info!("Translated {translated} lines");
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
