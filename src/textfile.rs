use crate::cipher::keys::KeySequence;
use crate::error::{OtpError, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Read a text file, dropping one trailing line terminator
pub fn read_text(path: &Path) -> Result<String> {
    tracing::info!(path = %path.display(), "reading text file");
    let bytes = fs::read(path)?;
    let text = String::from_utf8(bytes).map_err(|_| {
        OtpError::InvalidFormat(format!("{} is not valid UTF-8", path.display()))
    })?;
    Ok(strip_line_terminator(text))
}

/// Output written to a temporary file beside its destination
/// The destination is untouched until `commit`; dropping discards the file
#[derive(Debug)]
pub struct StagedFile {
    temp: NamedTempFile,
    path: PathBuf,
}

impl StagedFile {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rename the staged contents onto the destination
    pub fn commit(self) -> Result<()> {
        tracing::info!(path = %self.path.display(), "committing file");
        self.temp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

/// Stage `text` followed by a newline for `path`
pub fn stage_text(path: &Path, text: &str) -> Result<StagedFile> {
    tracing::info!(path = %path.display(), bytes = text.len() + 1, "staging text file");
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(text.as_bytes())?;
    temp.write_all(b"\n")?;
    temp.flush()?;
    Ok(StagedFile {
        temp,
        path: path.to_path_buf(),
    })
}

/// Stage a key file in the single-space format
pub fn stage_keys(path: &Path, keys: &KeySequence) -> Result<StagedFile> {
    stage_text(path, &keys.format())
}

/// Write `text` followed by a newline, replacing any existing file
pub fn write_text(path: &Path, text: &str) -> Result<()> {
    stage_text(path, text)?.commit()
}

/// Read a key file of whitespace-separated decimals
pub fn read_keys(path: &Path) -> Result<KeySequence> {
    let text = read_text(path)?;
    KeySequence::parse(&text)
}

/// Write a key file in the single-space format
pub fn write_keys(path: &Path, keys: &KeySequence) -> Result<()> {
    stage_keys(path, keys)?.commit()
}

fn strip_line_terminator(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}
