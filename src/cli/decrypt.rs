use crate::cli::encrypt::TransformSummary;
use crate::cipher::substitute::decrypt;
use crate::error::Result;
use crate::textfile::{read_keys, read_text, write_text};
use std::path::Path;

/// Decrypt a ciphertext file using the keys stored at `keys_path`
/// The output file is written only after every symbol decrypted
pub fn decrypt_file(
    input_path: &Path,
    output_path: &Path,
    keys_path: &Path,
) -> Result<TransformSummary> {
    let ciphertext = read_text(input_path)?;
    let keys = read_keys(keys_path)?;

    let plaintext = decrypt(&ciphertext, keys.as_slice())?;
    write_text(output_path, &plaintext)?;

    tracing::info!(symbols = keys.len(), "decryption complete");

    Ok(TransformSummary {
        symbols: keys.len(),
        output: output_path.to_path_buf(),
        keys: keys_path.to_path_buf(),
    })
}
