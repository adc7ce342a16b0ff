use anyhow::{Context, Result};
use bee_words::{
    fetch::fetch_missing, InputFile, PipelineConfig, SourceConfig, SourceId, DEFAULT_DATA_DIR, DEFAULT_OUTPUT,
};
use clap::Parser;
use std::path::PathBuf;
use strum::IntoEnumIterator;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Build the puzzle word list from WordNet and, optionally, SCOWL and the
/// Moby thesaurus.
#[derive(Parser, Debug)]
#[command(name = "bee-words", version, long_about = None)]
struct Cli {
    /// Root directory holding the corpora
    #[arg(long, env = "BEE_WORDS_DATA_DIR", default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// Where to write the sorted word list
    #[arg(short, long, env = "BEE_WORDS_OUTPUT", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Leave WordNet out (it is on by default)
    #[arg(long)]
    no_wordnet: bool,

    /// Include the SCOWL word lists
    #[arg(long)]
    scowl: bool,

    /// Include the Moby thesaurus
    #[arg(long)]
    moby: bool,

    /// Extra word list as FORMAT:PATH (plain, frequency or synonyms); repeatable
    #[arg(long = "extra-list", value_name = "FORMAT:PATH")]
    extra_lists: Vec<InputFile>,

    /// Base URL to fetch missing corpus files from
    #[arg(long, env = "BEE_WORDS_MIRROR")]
    mirror: Option<String>,

    /// Set log level
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

impl Cli {
    fn enabled(&self, id: SourceId) -> bool {
        match id {
            SourceId::Wordnet => !self.no_wordnet,
            SourceId::Scowl => self.scowl,
            SourceId::Moby => self.moby,
            SourceId::Extra => !self.extra_lists.is_empty(),
        }
    }

    fn pipeline_config(&self) -> bee_words::Result<PipelineConfig> {
        let mut config = SourceId::iter()
            .filter(|id| self.enabled(*id))
            .fold(PipelineConfig::new(&self.output), |config, id| config.enable(id, &self.data_dir));
        if self.enabled(SourceId::Extra) {
            let extra = SourceConfig::new(SourceId::Extra, None, self.extra_lists.clone())?;
            config = config.with_source(extra);
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("bee_words={}", cli.log_level.to_lowercase())));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    debug!("bee-words v{} starting", env!("CARGO_PKG_VERSION"));
    let config = cli.pipeline_config().context("Invalid source configuration")?;

    if let Some(mirror) = &cli.mirror {
        fetch_missing(&config, mirror).await.context("Failed to fetch missing sources")?;
    }

    let summary = tokio::task::spawn_blocking(move || bee_words::run(&config))
        .await
        .context("Word list build panicked")?
        .context("Failed to build word list")?;

    for (source, words) in &summary.source_counts {
        info!(%source, words, "Source contribution");
    }
    info!(
        proper_nouns = summary.proper_nouns,
        words = summary.final_words,
        output = %summary.output.display(),
        "Done"
    );
    Ok(())
}
