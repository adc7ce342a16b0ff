use crate::{
    build_utils::for_each_line,
    config::{InputFile, ListFormat, SourceId},
    error::{MinerError, Result},
    merge::{ProperNounCache, SourceWordSet, WordnetHarvest},
    words::normalize,
    INSTANCE_MARKERS, PROPER_NOUN_CATEGORIES,
};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

// offset, lexicographer file number, pos, word count, first word, lex id, rest
static SYNSET_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{8})\s+(\d{2})\s+([nvasr])\s+([0-9a-fA-F]{2})\s+(\S+)\s+([0-9a-fA-F])(?:\s+(.*))?$").unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynsetRecord<'a> {
    pub offset: u32,
    pub category: u8,
    pub pos: char,
    pub word_count: u8,
    pub headword: &'a str,
    pub sense_id: u8,
    pub remainder: &'a str,
}

impl SynsetRecord<'_> {
    // person/location category, or an instance relation anywhere in the rest of the line
    pub fn is_proper_noun(&self) -> bool {
        PROPER_NOUN_CATEGORIES.contains(&self.category)
            || INSTANCE_MARKERS.iter().any(|marker| self.remainder.contains(marker))
    }
}

/// Parse one data file line. License header lines and anything else off
/// the record grammar give `None`.
pub fn classify(line: &str) -> Option<SynsetRecord<'_>> {
    if line.starts_with("  ") {
        return None;
    }
    let caps = SYNSET_LINE.captures(line)?;
    Some(SynsetRecord {
        offset: caps[1].parse().ok()?,
        category: caps[2].parse().ok()?,
        pos: caps[3].chars().next()?,
        word_count: u8::from_str_radix(&caps[4], 16).ok()?,
        headword: caps.get(5)?.as_str(),
        sense_id: u8::from_str_radix(&caps[6], 16).ok()?,
        remainder: caps.get(7).map_or("", |m| m.as_str()),
    })
}

// Phase one: headwords split between the common word set and the proper-noun cache.
pub fn parse(inputs: &[InputFile]) -> Result<WordnetHarvest> {
    let mut words = SourceWordSet::default();
    let mut proper_nouns = ProperNounCache::default();

    for input in inputs {
        if input.format != ListFormat::Synset {
            return Err(MinerError::FormatMismatch {
                id: SourceId::Wordnet,
                format: input.format,
                path: input.path.clone(),
            });
        }
        if !parse_wordnet_file(input, &mut words, &mut proper_nouns)? {
            warn!(file = %input.path.display(), "WordNet data file missing, skipping");
        }
    }

    Ok(WordnetHarvest { words, proper_nouns })
}

fn parse_wordnet_file(input: &InputFile, words: &mut SourceWordSet, proper_nouns: &mut ProperNounCache) -> Result<bool> {
    let mut records = 0usize;
    let found = for_each_line(&input.path, |line| {
        let Some(record) = classify(line) else {
            return;
        };
        records += 1;
        let Some(word) = normalize(record.headword) else {
            return;
        };
        if record.is_proper_noun() {
            proper_nouns.insert(word);
        } else {
            words.insert_word(word);
        }
    })?;
    if found {
        debug!(file = %input.path.display(), records, "Parsed WordNet data file");
    }
    Ok(found)
}
