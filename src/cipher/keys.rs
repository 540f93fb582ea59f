use crate::cipher::alphabet::ALPHABET_SIZE;
use crate::error::{OtpError, Result};
use std::fmt;

/// Ordered key values, positionally aligned with a text
///
/// Sequences produced by encryption always hold values in `1..=53`.
/// Parsed sequences are only syntactically checked; range is enforced
/// when they are consumed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeySequence(Vec<u32>);

impl KeySequence {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    pub fn push(&mut self, key: u32) {
        self.0.push(key);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    /// Parse whitespace-separated ASCII decimal keys
    pub fn parse(text: &str) -> Result<Self> {
        text.split_ascii_whitespace()
            .enumerate()
            .map(|(index, token)| {
                token.parse::<u32>().map_err(|_| OtpError::MalformedKey {
                    index,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }

    /// Render as ASCII decimals joined by single spaces
    pub fn format(&self) -> String {
        self.to_string()
    }

    /// First key outside `1..=53`, as `(index, value)`
    pub fn first_invalid(&self) -> Option<(usize, u32)> {
        self.0
            .iter()
            .copied()
            .enumerate()
            .find(|&(_, key)| !is_valid_key(key))
    }
}

impl From<Vec<u32>> for KeySequence {
    fn from(keys: Vec<u32>) -> Self {
        Self(keys)
    }
}

impl fmt::Display for KeySequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", key)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for KeySequence {
    type Err = OtpError;
    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Check that a key value lies in `1..=53`
pub fn is_valid_key(key: u32) -> bool {
    (1..=ALPHABET_SIZE).contains(&key)
}
