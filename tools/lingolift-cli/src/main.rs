mod output;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use lingolift_client::{BackendClient, ClientConfig};
use lingolift_parser::{map_sentence, RawWord};
use lingolift_protocol::Sentence;
use log::info;

#[derive(Parser)]
#[command(author, version, about = "Maps NLP annotations to structured tokens")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Map annotated sentences read from a JSON file
    Map {
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Ask the backend for the syntactical analysis of a sentence
    Analyze {
        sentence: String,

        #[arg(long, env = "LINGOLIFT_HOST")]
        host: String,

        /// ISO-639-1 code; detected by the backend when omitted
        #[arg(long)]
        language: Option<String>,
    },
    /// Ask the backend for every inflection of a word
    Inflect {
        word: String,

        #[arg(long, env = "LINGOLIFT_HOST")]
        host: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.command {
        Command::Map { input, format } => map_file(&input, format),
        Command::Analyze {
            sentence,
            host,
            language,
        } => {
            let client = BackendClient::new(ClientConfig::new(host))?;
            let analysis = client
                .fetch_syntactical_analysis(&sentence, language.as_deref())
                .await
                .context("syntactical analysis failed")?;
            for line in output::sentence_lines(&analysis) {
                println!("{line}");
            }
            Ok(())
        }
        Command::Inflect { word, host } => {
            let client = BackendClient::new(ClientConfig::new(host))?;
            let inflections = client
                .fetch_inflections(&word)
                .await
                .with_context(|| format!("could not fetch inflections of '{word}'"))?;
            for line in output::inflection_lines(&inflections) {
                println!("{line}");
            }
            Ok(())
        }
    }
}

fn map_file(input: &Path, format: Format) -> anyhow::Result<()> {
    info!("reading annotations from {}", input.display());
    let data = fs::read_to_string(input)
        .with_context(|| format!("could not read {}", input.display()))?;
    let raw: Vec<Vec<RawWord>> =
        serde_json::from_str(&data).context("input must be a JSON array of sentences")?;

    let sentences = raw
        .iter()
        .enumerate()
        .map(|(index, words)| {
            map_sentence(words).with_context(|| format!("sentence {index} could not be mapped"))
        })
        .collect::<anyhow::Result<Vec<Sentence>>>()?;
    info!("mapped {} sentences", sentences.len());

    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&sentences)?),
        Format::Text => {
            for (index, sentence) in sentences.iter().enumerate() {
                if index > 0 {
                    println!();
                }
                for line in output::sentence_lines(sentence) {
                    println!("{line}");
                }
            }
        }
    }
    Ok(())
}
