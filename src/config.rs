use crate::{
    error::{MinerError, Result},
    MOBY_FILE, SCOWL_FILES, WORDNET_FILES,
};
use anyhow::{anyhow, Context};
use std::{
    path::{Path, PathBuf},
    str::FromStr,
};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum SourceId {
    Wordnet,
    Scowl,
    Moby,
    Extra,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum ListFormat {
    Synset,
    Frequency,
    Plain,
    Synonyms,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputFile {
    pub path: PathBuf,
    pub format: ListFormat,
}

impl InputFile {
    pub fn new(path: impl Into<PathBuf>, format: ListFormat) -> Self {
        Self { path: path.into(), format }
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map_or_else(String::new, |name| name.to_string_lossy().into_owned())
    }
}

// `--extra-list` value, written as `FORMAT:PATH`
impl FromStr for InputFile {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let (format, path) = s.split_once(':').ok_or_else(|| anyhow!("Expected FORMAT:PATH, got {s}"))?;
        let format = ListFormat::from_str(format).with_context(|| format!("Unknown list format {format}"))?;
        if format == ListFormat::Synset {
            return Err(anyhow!("Synset records are only read from the wordnet source"));
        }
        Ok(Self::new(path, format))
    }
}

// One corpus. `location` is the installed directory or file that has to exist;
// user-named lists have none and every listed file has to exist instead.
#[derive(Clone, Debug)]
pub struct SourceConfig {
    pub id: SourceId,
    location: Option<PathBuf>,
    inputs: Vec<InputFile>,
}

impl SourceConfig {
    pub fn new(id: SourceId, location: Option<PathBuf>, inputs: Vec<InputFile>) -> Result<Self> {
        let mut source = Self {
            id,
            location,
            inputs: Vec::with_capacity(inputs.len()),
        };
        for input in inputs {
            source.push_input(input)?;
        }
        Ok(source)
    }

    pub fn with_defaults(id: SourceId, data_dir: &Path) -> Self {
        let (location, inputs) = match id {
            SourceId::Wordnet => {
                let location = data_dir.join("wordnet");
                let inputs = WORDNET_FILES
                    .iter()
                    .map(|name| InputFile::new(location.join(name), ListFormat::Synset))
                    .collect();
                (Some(location), inputs)
            }
            SourceId::Scowl => {
                let location = data_dir.join("scowl").join("final");
                let inputs = SCOWL_FILES
                    .iter()
                    .map(|name| InputFile::new(location.join(name), ListFormat::Plain))
                    .collect();
                (Some(location), inputs)
            }
            SourceId::Moby => {
                let location = data_dir.join("moby").join(MOBY_FILE);
                let inputs = vec![InputFile::new(location.clone(), ListFormat::Synonyms)];
                (Some(location), inputs)
            }
            SourceId::Extra => (None, Vec::new()),
        };
        Self { id, location, inputs }
    }

    // Synset records only come from WordNet, and WordNet only has synset records.
    pub fn accepts(&self, format: ListFormat) -> bool {
        (self.id == SourceId::Wordnet) == (format == ListFormat::Synset)
    }

    pub fn push_input(&mut self, input: InputFile) -> Result<()> {
        if !self.accepts(input.format) {
            return Err(MinerError::FormatMismatch {
                id: self.id,
                format: input.format,
                path: input.path,
            });
        }
        self.inputs.push(input);
        Ok(())
    }

    pub fn inputs(&self) -> &[InputFile] {
        &self.inputs
    }

    pub fn location(&self) -> Option<&Path> {
        self.location.as_deref()
    }

    pub fn missing_path(&self) -> Option<&Path> {
        match self.location() {
            Some(location) => (!location.exists()).then_some(location),
            None => self.inputs.iter().map(|i| i.path.as_path()).find(|path| !path.exists()),
        }
    }

    // Where mirror downloads land; user-named lists are never fetched.
    pub fn download_dir(&self) -> Option<&Path> {
        let location = self.location()?;
        if self.id == SourceId::Moby {
            location.parent()
        } else {
            Some(location)
        }
    }
}

#[derive(Clone, Debug)]
pub struct PipelineConfig {
    pub sources: Vec<SourceConfig>,
    pub output: PathBuf,
}

impl PipelineConfig {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            sources: Vec::new(),
            output: output.into(),
        }
    }

    // no-op when already enabled
    pub fn enable(mut self, id: SourceId, data_dir: &Path) -> Self {
        if self.source(id).is_none() {
            self.sources.push(SourceConfig::with_defaults(id, data_dir));
        }
        self
    }

    pub fn with_source(mut self, source: SourceConfig) -> Self {
        self.sources.retain(|s| s.id != source.id);
        self.sources.push(source);
        self
    }

    pub fn source(&self, id: SourceId) -> Option<&SourceConfig> {
        self.sources.iter().find(|s| s.id == id)
    }

    pub fn source_mut(&mut self, id: SourceId) -> Option<&mut SourceConfig> {
        self.sources.iter_mut().find(|s| s.id == id)
    }
}
