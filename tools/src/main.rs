mod batch;
mod logging;
mod setup;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use yiddish_core::ResourceLoader;

use batch::IoArgs;
use setup::GlobalArgs;

/// Yiddish orthography tools: romanization, loanword respelling and
/// Hasidic spelling.
#[derive(Debug, Parser)]
#[command(name = "yidtool", version)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch every resource and write the snapshot
    Fetch,

    /// YIVO romanization
    Transliterate {
        /// Romanize loanwords by pronunciation
        #[arg(long)]
        loanwords_dict: bool,
        #[command(flatten)]
        io: IoArgs,
    },

    /// YIVO romanization back to Yiddish script
    Detransliterate {
        /// Restore the etymological spelling of loanwords
        #[arg(long)]
        loanwords_dict: bool,
        #[command(flatten)]
        io: IoArgs,
    },

    /// Respell loshn-koydesh words phonetically
    Respell {
        #[command(flatten)]
        io: IoArgs,
    },

    /// Convert to Hasidic orthography
    Hasidify {
        #[command(flatten)]
        io: IoArgs,
    },

    /// German-style romanization for forced alignment
    Romanize {
        #[command(flatten)]
        io: IoArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.global.verbose);
    let config = setup::config(&cli.global)?;

    match &cli.command {
        Commands::Fetch => {
            let path = config
                .base()
                .snapshot
                .clone()
                .context("fetch needs a snapshot path (--snapshot or `snapshot` in the config)")?;
            let resources = ResourceLoader::from_config(config.base())?
                .load()
                .context("failed to load resources")?;
            resources
                .save_snapshot(&path)
                .with_context(|| format!("failed to write snapshot {}", path.display()))?;
            info!(path = %path.display(), "snapshot written");
        }
        Commands::Transliterate { loanwords_dict, io } => {
            if *loanwords_dict {
                let engine = yivo_engine(&config)?;
                batch::run(io, |text| engine.transliterate(text, true))?;
            } else {
                batch::run(io, |text| libyivo::transliterate(text, None))?;
            }
        }
        Commands::Detransliterate { loanwords_dict, io } => {
            if *loanwords_dict {
                let engine = yivo_engine(&config)?;
                batch::run(io, |text| engine.detransliterate(text, true))?;
            } else {
                batch::run(io, |text| libyivo::detransliterate(text, None))?;
            }
        }
        Commands::Respell { io } => {
            let engine = yivo_engine(&config)?;
            batch::run(io, |text| engine.respell_loanwords(text))?;
        }
        Commands::Hasidify { io } => {
            let engine = libhasidic::Engine::from_config(config.base())
                .context("failed to load the Hasidic tables")?;
            batch::run(io, |text| engine.hasidify(text))?;
        }
        Commands::Romanize { io } => {
            batch::run(io, libyivo::romanize_for_alignment)?;
        }
    }
    Ok(())
}

fn yivo_engine(config: &libyivo::YivoConfig) -> Result<libyivo::Engine> {
    libyivo::Engine::from_config(config).context("failed to load the loanword lexicon")
}
