use crate::words::{Candidate, NormalizedWord};
use std::collections::{hash_map::Entry, BTreeSet, HashMap, HashSet};
use tracing::debug;

// word -> every sighting so far was title-case
#[derive(Debug, Default, Clone)]
pub struct SourceWordSet {
    words: HashMap<NormalizedWord, bool>,
}

impl SourceWordSet {
    pub fn insert(&mut self, candidate: Candidate) {
        match self.words.entry(candidate.word) {
            Entry::Occupied(mut entry) => *entry.get_mut() &= candidate.title_case,
            Entry::Vacant(entry) => {
                entry.insert(candidate.title_case);
            }
        }
    }

    pub fn insert_word(&mut self, word: NormalizedWord) {
        self.insert(Candidate { word, title_case: false });
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    pub fn only_title_case(&self, word: &str) -> bool {
        self.words.get(word).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NormalizedWord, bool)> {
        self.words.iter().map(|(word, title_case)| (word, *title_case))
    }
}

#[derive(Debug, Default, Clone)]
pub struct ProperNounCache {
    words: HashSet<NormalizedWord>,
}

impl ProperNounCache {
    pub fn insert(&mut self, word: NormalizedWord) {
        self.words.insert(word);
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct WordnetHarvest {
    pub words: SourceWordSet,
    pub proper_nouns: ProperNounCache,
}

pub fn is_suppressed(word: &str, only_title_case: bool, cache: &ProperNounCache) -> bool {
    cache.contains(word) || only_title_case
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FinalWordSet {
    words: BTreeSet<NormalizedWord>,
}

impl FinalWordSet {
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    // ascending byte order
    pub fn iter(&self) -> impl Iterator<Item = &NormalizedWord> {
        self.words.iter()
    }
}

/// WordNet's own words go in as they are; every other source is filtered
/// through the proper-noun guard first.
pub fn merge(harvest: WordnetHarvest, others: Vec<SourceWordSet>) -> FinalWordSet {
    let WordnetHarvest { words, proper_nouns } = harvest;
    let mut merged: BTreeSet<NormalizedWord> = words.words.into_keys().collect();

    for source in others {
        let mut suppressed = 0usize;
        for (word, only_title_case) in source.words {
            if is_suppressed(&word, only_title_case, &proper_nouns) {
                suppressed += 1;
            } else {
                merged.insert(word);
            }
        }
        debug!(suppressed, "Applied proper noun guard");
    }

    FinalWordSet { words: merged }
}
