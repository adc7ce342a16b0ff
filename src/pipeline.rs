use crate::{
    build_utils::{parse_list_inputs, wordnet},
    config::{PipelineConfig, SourceConfig, SourceId},
    error::{MinerError, Result},
    merge::{merge, FinalWordSet, SourceWordSet, WordnetHarvest},
    output::write_words,
};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub source_counts: Vec<(SourceId, usize)>,
    pub proper_nouns: usize,
    pub final_words: usize,
    pub output: PathBuf,
}

pub fn run(config: &PipelineConfig) -> Result<RunSummary> {
    check_sources(config)?;
    let (words, mut summary) = build(config)?;
    write_words(&words, &config.output)?;
    summary.output.clone_from(&config.output);
    Ok(summary)
}

// Runs before any file is read.
pub fn check_sources(config: &PipelineConfig) -> Result<()> {
    if config.sources.is_empty() {
        return Err(MinerError::NoSourcesEnabled);
    }
    for source in &config.sources {
        if let Some(path) = source.missing_path() {
            return Err(MinerError::SourceUnavailable {
                id: source.id,
                path: path.to_path_buf(),
            });
        }
    }
    Ok(())
}

pub fn build(config: &PipelineConfig) -> Result<(FinalWordSet, RunSummary)> {
    let mut source_counts = Vec::new();

    let harvest = match config.source(SourceId::Wordnet) {
        Some(source) => {
            let harvest = wordnet::parse(source.inputs())?;
            info!(
                words = harvest.words.len(),
                proper_nouns = harvest.proper_nouns.len(),
                "Parsed wordnet"
            );
            source_counts.push((SourceId::Wordnet, harvest.words.len()));
            harvest
        }
        None => WordnetHarvest::default(),
    };

    let mut others = Vec::new();
    for source in config.sources.iter().filter(|s| s.id != SourceId::Wordnet) {
        let words = parse_source(source)?;
        info!(source = %source.id, words = words.len(), "Parsed source");
        source_counts.push((source.id, words.len()));
        others.push(words);
    }

    let proper_nouns = harvest.proper_nouns.len();
    let words = merge(harvest, others);
    info!(words = words.len(), "Merged sources");

    let summary = RunSummary {
        source_counts,
        proper_nouns,
        final_words: words.len(),
        output: PathBuf::new(),
    };
    Ok((words, summary))
}

fn parse_source(source: &SourceConfig) -> Result<SourceWordSet> {
    let mut words = SourceWordSet::default();
    parse_list_inputs(source.id, source.inputs(), &mut words)?;
    Ok(words)
}
