use crate::cipher::alphabet::is_supported;
use crate::cipher::keys::KeySequence;
use crate::error::{OtpError, Result};
use crate::textfile::read_text;
use serde::Serialize;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// First symbol in a text that falls outside the alphabet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolIssue {
    pub index: usize,
    pub symbol: char,
}

/// Key file findings relative to the checked text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyReport {
    pub path: PathBuf,
    /// Number of keys parsed, or `None` if the file is malformed
    pub count: Option<usize>,
    pub length_matches: bool,
    /// Description of the first bad key, if any
    pub problem: Option<String>,
}

/// Validation report for a text file and, optionally, its key file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub path: PathBuf,
    pub symbols: usize,
    pub unsupported: Option<SymbolIssue>,
    /// Set when the text file could not be decoded
    pub problem: Option<String>,
    pub keys: Option<KeyReport>,
}

impl CheckReport {
    pub fn is_valid(&self) -> bool {
        let keys_ok = self
            .keys
            .as_ref()
            .map_or(true, |k| k.length_matches && k.problem.is_none());
        self.problem.is_none() && self.symbols > 0 && self.unsupported.is_none() && keys_ok
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Human-readable rendering
    pub fn render(&self) -> String {
        let mut output = String::new();

        let _ = writeln!(output, "Text file: {}", self.path.display());
        let _ = writeln!(output, "  Symbols: {}", self.symbols);
        if let Some(problem) = &self.problem {
            let _ = writeln!(output, "  Problem: {}", problem);
        } else if self.symbols == 0 {
            let _ = writeln!(output, "  Problem: file is empty");
        }
        if let Some(issue) = &self.unsupported {
            let _ = writeln!(
                output,
                "  Problem: unsupported symbol {:?} at index {}",
                issue.symbol, issue.index
            );
        }

        if let Some(keys) = &self.keys {
            let _ = writeln!(output, "Key file: {}", keys.path.display());
            match keys.count {
                Some(count) => {
                    let _ = writeln!(output, "  Keys: {}", count);
                }
                None => {
                    let _ = writeln!(output, "  Keys: unreadable");
                }
            }
            if keys.count.is_some() && !keys.length_matches {
                let _ = writeln!(output, "  Problem: key count does not match symbol count");
            }
            if let Some(problem) = &keys.problem {
                let _ = writeln!(output, "  Problem: {}", problem);
            }
        }

        let _ = writeln!(output);
        let _ = writeln!(
            output,
            "Status: {}",
            if self.is_valid() { "OK" } else { "INVALID" }
        );
        output
    }
}

/// Validate a text file against the alphabet and an optional key file against the text
/// Content problems are reported, not returned as errors; only IO failures propagate
pub fn check_files(text_path: &Path, keys_path: Option<&Path>) -> Result<CheckReport> {
    let (text, problem) = match read_text(text_path) {
        Ok(text) => (text, None),
        Err(OtpError::InvalidFormat(msg)) => (String::new(), Some(msg)),
        Err(e) => return Err(e),
    };

    let mut symbols = 0;
    let mut unsupported = None;
    for (index, symbol) in text.chars().enumerate() {
        symbols += 1;
        if unsupported.is_none() && !is_supported(symbol) {
            unsupported = Some(SymbolIssue { index, symbol });
        }
    }

    let keys = match keys_path {
        Some(path) => Some(check_keys(path, symbols)?),
        None => None,
    };

    let report = CheckReport {
        path: text_path.to_path_buf(),
        symbols,
        unsupported,
        problem,
        keys,
    };
    if !report.is_valid() {
        tracing::warn!(path = %text_path.display(), "check found problems");
    }
    Ok(report)
}

fn check_keys(path: &Path, symbols: usize) -> Result<KeyReport> {
    let parsed = match read_text(path) {
        Ok(raw) => KeySequence::parse(&raw),
        Err(e @ OtpError::InvalidFormat(_)) => Err(e),
        Err(e) => return Err(e),
    };
    let report = match parsed {
        Ok(keys) => KeyReport {
            path: path.to_path_buf(),
            count: Some(keys.len()),
            length_matches: keys.len() == symbols,
            problem: keys
                .first_invalid()
                .map(|(index, value)| OtpError::InvalidKeyValue { index, value }.to_string()),
        },
        Err(e) => KeyReport {
            path: path.to_path_buf(),
            count: None,
            length_matches: false,
            problem: Some(e.to_string()),
        },
    };
    Ok(report)
}
