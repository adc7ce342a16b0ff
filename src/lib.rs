//! Builds the letter-puzzle word list from public lexical corpora.

pub mod build_utils;
pub mod config;
pub mod error;
pub mod fetch;
pub mod merge;
pub mod output;
pub mod pipeline;
pub mod words;

pub use config::{InputFile, ListFormat, PipelineConfig, SourceConfig, SourceId};
pub use error::{MinerError, Result};
pub use merge::{FinalWordSet, ProperNounCache, SourceWordSet, WordnetHarvest};
pub use pipeline::{run, RunSummary};
pub use words::{normalize, Candidate, NormalizedWord};

pub const MIN_WORD_LENGTH: usize = 4;

// WordNet lexicographer file numbers for noun.location and noun.person
pub const PROPER_NOUN_CATEGORIES: [u8; 2] = [15, 18];
// Pointer symbols for instance hypernym / instance hyponym
pub const INSTANCE_MARKERS: [&str; 2] = ["@i", "~i"];

pub const WORDNET_FILES: [&str; 4] = ["data.noun", "data.verb", "data.adj", "data.adv"];
pub const SCOWL_FILES: [&str; 10] = [
    "english-words.10",
    "english-words.20",
    "english-words.35",
    "english-words.40",
    "english-words.50",
    "american-words.10",
    "american-words.20",
    "american-words.35",
    "american-words.40",
    "american-words.50",
];
pub const MOBY_FILE: &str = "mthesaur.txt";

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_OUTPUT: &str = "data/words.txt";
