use crate::{
    config::{InputFile, ListFormat, SourceId},
    error::{MinerError, Result},
    merge::SourceWordSet,
    words::Candidate,
};
use std::{
    fs::File,
    io::{BufRead, BufReader, ErrorKind},
    path::Path,
};
use tracing::{debug, warn};

pub mod moby;
pub mod scowl;
pub mod wordnet;

// Ok(false) when the file does not exist
pub fn for_each_line(path: &Path, mut f: impl FnMut(&str)) -> Result<bool> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(false),
        Err(err) => return Err(MinerError::io(path, err)),
    };
    read_lines(BufReader::new(file), &mut f).map_err(|err| MinerError::io(path, err))?;
    Ok(true)
}

// Lossy decode: stray bytes reject a token, not the file
pub fn read_lines<R: BufRead>(mut reader: R, f: &mut impl FnMut(&str)) -> std::io::Result<()> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(());
        }
        let line = String::from_utf8_lossy(&buf);
        f(line.trim_end_matches(['\n', '\r']));
    }
}

pub fn list_tokens(line: &str, format: ListFormat) -> Vec<&str> {
    match format {
        ListFormat::Frequency => scowl::frequency_token(line).into_iter().collect(),
        ListFormat::Plain => scowl::plain_token(line).into_iter().collect(),
        ListFormat::Synonyms => moby::synonym_tokens(line),
        // synset lines go through wordnet::parse, never a list source
        ListFormat::Synset => Vec::new(),
    }
}

pub fn parse_list_inputs(id: SourceId, inputs: &[InputFile], words: &mut SourceWordSet) -> Result<()> {
    for input in inputs {
        if input.format == ListFormat::Synset {
            return Err(MinerError::FormatMismatch {
                id,
                format: input.format,
                path: input.path.clone(),
            });
        }
        let before = words.len();
        let found = for_each_line(&input.path, |line| {
            for token in list_tokens(line, input.format) {
                if let Some(candidate) = Candidate::from_token(token) {
                    words.insert(candidate);
                }
            }
        })?;
        if found {
            debug!(file = %input.path.display(), format = %input.format, added = words.len() - before, "Parsed list");
        } else {
            warn!(file = %input.path.display(), "Input file missing, skipping");
        }
    }
    Ok(())
}
