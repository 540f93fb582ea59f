use crate::cipher::alphabet::{position_of, symbol_at, ALPHABET_SIZE};
use crate::cipher::keys::{is_valid_key, KeySequence};
use crate::error::{OtpError, Result};
use crate::random::KeySource;

/// Result of encrypting a text: ciphertext plus the keys that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encrypted {
    pub ciphertext: String,
    pub keys: KeySequence,
}

/// Shift a position forward by `key`, wrapping past 53 back to 1
/// Both arguments must lie in `1..=53`
pub(crate) fn shift_forward(position: u32, key: u32) -> u32 {
    let shifted = position + key;
    if shifted > ALPHABET_SIZE {
        shifted - ALPHABET_SIZE
    } else {
        shifted
    }
}

/// Shift a position back by `key`, wrapping below 1 up to 53
/// Both arguments must lie in `1..=53`
pub(crate) fn shift_backward(position: u32, key: u32) -> u32 {
    if position <= key {
        position + ALPHABET_SIZE - key
    } else {
        position - key
    }
}

/// Encrypt `plaintext`, drawing one key per symbol from `source`
///
/// Fails on empty input, on the first symbol outside the alphabet, or if
/// the source yields a key outside `1..=53`. Nothing is returned unless
/// every symbol was transformed.
pub fn encrypt(plaintext: &str, source: &mut dyn KeySource) -> Result<Encrypted> {
    if plaintext.is_empty() {
        return Err(OtpError::EmptyInput);
    }

    let mut ciphertext = String::with_capacity(plaintext.len());
    let mut keys = KeySequence::with_capacity(plaintext.len());

    for (index, symbol) in plaintext.chars().enumerate() {
        let position = resolve(symbol, index)?;
        let key = source.next_key();
        if !is_valid_key(key) {
            return Err(OtpError::InvalidKeyValue { index, value: key });
        }

        ciphertext.push(emit(shift_forward(position, key))?);
        keys.push(key);
    }

    tracing::debug!(symbols = keys.len(), "encrypted text");
    Ok(Encrypted { ciphertext, keys })
}

/// Decrypt `ciphertext` with one key per symbol
///
/// The key count must equal the symbol count and every key must lie in `1..=53`.
pub fn decrypt(ciphertext: &str, keys: &[u32]) -> Result<String> {
    if ciphertext.is_empty() {
        return Err(OtpError::EmptyInput);
    }

    let symbols = ciphertext.chars().count();
    if symbols != keys.len() {
        return Err(OtpError::KeyLengthMismatch {
            text: symbols,
            keys: keys.len(),
        });
    }

    let mut plaintext = String::with_capacity(ciphertext.len());
    for (index, (symbol, &key)) in ciphertext.chars().zip(keys).enumerate() {
        let position = resolve(symbol, index)?;
        if !is_valid_key(key) {
            return Err(OtpError::InvalidKeyValue { index, value: key });
        }
        plaintext.push(emit(shift_backward(position, key))?);
    }

    tracing::debug!(symbols, "decrypted text");
    Ok(plaintext)
}

fn resolve(symbol: char, index: usize) -> Result<u32> {
    position_of(symbol).ok_or(OtpError::UnsupportedSymbol { symbol, index })
}

fn emit(position: u32) -> Result<char> {
    symbol_at(position).ok_or_else(|| {
        OtpError::InvalidFormat(format!("shifted position {} outside alphabet", position))
    })
}
