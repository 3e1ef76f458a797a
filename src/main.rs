use anyhow::Context;
use clap::Parser;
use glosa::{
    bank::WordBank,
    config::{Config, ConfigStore, FileConfigStore, Overrides},
    console::{Console, LineReader, TerminalSink},
    game::Quiz,
};
use rand::{rngs::StdRng, SeedableRng};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "glosa=warn";

/// terminal vocabulary quiz with translation and synonym games
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "An interactive vocabulary quiz. Pick a game, answer multiple-choice questions, and get a table of what you got right and wrong. Everything is asked interactively; the flags below are optional."
)]
pub struct Cli {
    /// seed the random generator for a reproducible game
    #[clap(long)]
    seed: Option<u64>,

    /// print plain text without colours
    #[clap(long)]
    no_color: bool,

    /// load word lists from a JSON file instead of the built-in ones
    #[clap(long, value_name = "FILE")]
    word_bank: Option<PathBuf>,

    /// read settings from this file instead of the default location
    #[clap(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

impl From<&Cli> for Overrides {
    fn from(cli: &Cli) -> Self {
        Self {
            no_color: cli.no_color,
            word_bank: cli.word_bank.clone(),
            seed: cli.seed,
        }
    }
}

impl Cli {
    fn config_store(&self) -> FileConfigStore {
        match &self.config {
            Some(path) => FileConfigStore::with_path(path),
            None => FileConfigStore::new(),
        }
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_bank(config: &Config) -> anyhow::Result<WordBank> {
    match &config.word_bank {
        Some(path) => WordBank::from_file(path)
            .with_context(|| format!("loading word bank from {}", path.display())),
        None => WordBank::builtin().context("loading built-in word bank"),
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let store = cli.config_store();
    let config = store
        .load()
        .with_context(|| format!("reading {}", store.path().display()))?
        .with_overrides(&Overrides::from(&cli));
    tracing::debug!(?config, "resolved settings");

    let bank = load_bank(&config)?;
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let console = Console::new(LineReader::stdin(), TerminalSink::stdout(config.color));

    Quiz::new(&bank, rng, console).run()?;
    Ok(())
}
