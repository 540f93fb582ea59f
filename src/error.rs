use thiserror::Error;

#[derive(Error, Debug)]
pub enum OtpError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Empty input: nothing to transform")]
    EmptyInput,

    #[error("Unsupported symbol {symbol:?} at index {index}")]
    UnsupportedSymbol { symbol: char, index: usize },

    #[error("Key length mismatch: text has {text} symbols but {keys} keys were supplied")]
    KeyLengthMismatch { text: usize, keys: usize },

    #[error("Invalid key value {value} at index {index}. Must be between 1 and 53")]
    InvalidKeyValue { index: usize, value: u32 },

    #[error("Malformed key {token:?} at index {index}")]
    MalformedKey { index: usize, token: String },

    #[error("Invalid file format: {0}")]
    InvalidFormat(String),

    #[error("Unsupported key source: {0}")]
    UnsupportedKeySource(String),

    #[error("Seed required for the seeded key source")]
    SeedRequired,
}

pub type Result<T> = std::result::Result<T, OtpError>;
