use crate::cipher::substitute::encrypt;
use crate::error::Result;
use crate::random::KeySourceKind;
use crate::textfile::{read_text, stage_keys, stage_text};
use std::path::{Path, PathBuf};

/// Options for the encrypt command
#[derive(Debug, Clone, Default)]
pub struct EncryptOptions {
    pub key_source: KeySourceKind,
    /// Seed for `KeySourceKind::Seeded`
    pub seed: Option<u64>,
}

/// Outcome of a file transform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformSummary {
    /// Number of symbols transformed
    pub symbols: usize,
    pub output: PathBuf,
    pub keys: PathBuf,
}

/// Encrypt a text file, writing the ciphertext and the generated keys
/// Both outputs are staged first; the key file is committed before the
/// ciphertext, so a failed commit never leaves ciphertext without its keys
pub fn encrypt_file(
    input_path: &Path,
    output_path: &Path,
    keys_path: &Path,
    options: &EncryptOptions,
) -> Result<TransformSummary> {
    let plaintext = read_text(input_path)?;
    let mut source = options.key_source.build(options.seed)?;

    let encrypted = encrypt(&plaintext, source.as_mut())?;

    let staged_output = stage_text(output_path, &encrypted.ciphertext)?;
    let staged_keys = stage_keys(keys_path, &encrypted.keys)?;
    staged_keys.commit()?;
    staged_output.commit()?;

    tracing::info!(
        symbols = encrypted.keys.len(),
        source = ?options.key_source,
        "encryption complete"
    );

    Ok(TransformSummary {
        symbols: encrypted.keys.len(),
        output: output_path.to_path_buf(),
        keys: keys_path.to_path_buf(),
    })
}
