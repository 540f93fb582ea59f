//! OTP - keyed substitution cipher over a 53-symbol alphabet
//!
//! Every symbol of a text (`a-z`, `A-Z` or space) is shifted along the
//! alphabet by its own key value in `1..=53`, wrapping modulo 53. Encryption
//! draws one fresh key per symbol and returns the keys with the ciphertext;
//! decryption consumes them positionally.
//!
//! ```text
//! position:  a=1 .. z=26, A=27 .. Z=52, ' '=53
//! encrypt:   p + k        (minus 53 if above 53)
//! decrypt:   p - k        (plus 53 if below 1)
//! ```
//!
//! The key material comes from a pluggable [`random::KeySource`]. With the
//! default OS generator it is unpredictable, but the scheme is still a
//! substitution cipher and makes no secrecy guarantees beyond that.
//!
//! ## Example
//!
//! ```
//! use otp::cipher::{decrypt, encrypt};
//! use rand::rngs::OsRng;
//!
//! let encrypted = encrypt("Hello World", &mut OsRng).unwrap();
//! let recovered = decrypt(&encrypted.ciphertext, encrypted.keys.as_slice()).unwrap();
//! assert_eq!(recovered, "Hello World");
//! ```

pub mod cipher;
pub mod cli;
pub mod error;
pub mod random;
pub mod textfile;

pub use cipher::{decrypt, encrypt, Encrypted, KeySequence};
pub use error::{OtpError, Result};
pub use random::{KeySource, KeySourceKind};
