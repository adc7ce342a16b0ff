use crate::{
    error::{MinerError, Result},
    merge::FinalWordSet,
};
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};
use tracing::info;

// Sorted, one per line, written beside `path` as `.tmp` and renamed into place.
pub fn write_words(words: &FinalWordSet, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|err| MinerError::io(parent, err))?;
    }

    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp_path = Path::new(&tmp_name);

    let written = write_lines(words, tmp_path)
        .and_then(|()| fs::rename(tmp_path, path).map_err(|err| MinerError::io(path, err)));
    if written.is_err() {
        let _ = fs::remove_file(tmp_path);
    }
    written?;
    info!(path = %path.display(), words = words.len(), "Wrote word list");
    Ok(())
}

fn write_lines(words: &FinalWordSet, tmp_path: &Path) -> Result<()> {
    let file = File::create(tmp_path).map_err(|err| MinerError::io(tmp_path, err))?;
    let mut writer = BufWriter::new(file);
    for word in words.iter() {
        writeln!(writer, "{word}").map_err(|err| MinerError::io(tmp_path, err))?;
    }
    writer
        .into_inner()
        .map_err(|err| MinerError::io(tmp_path, err.into_error()))?
        .sync_all()
        .map_err(|err| MinerError::io(tmp_path, err))
}
