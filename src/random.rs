//! Key material sources.
//!
//! Any `rand::RngCore` can drive encryption. `KeySourceKind` names the
//! generators the command line can select.

use crate::cipher::alphabet::ALPHABET_SIZE;
use crate::error::{OtpError, Result};
use rand::rngs::{OsRng, StdRng};
use rand::{Rng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

/// Produces one key value per transformed symbol
pub trait KeySource {
    /// Next key, uniform in `1..=53`
    fn next_key(&mut self) -> u32;
}

impl<R: RngCore> KeySource for R {
    fn next_key(&mut self) -> u32 {
        self.gen_range(1..=ALPHABET_SIZE)
    }
}

/// Selectable key generators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeySourceKind {
    /// Operating system CSPRNG
    #[default]
    Os,
    /// Thread-local generator, reseeded from the OS
    Thread,
    /// Deterministic generator from a caller seed
    Seeded,
}

impl std::str::FromStr for KeySourceKind {
    type Err = OtpError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "os" => Ok(Self::Os),
            "thread" => Ok(Self::Thread),
            "seeded" => Ok(Self::Seeded),
            _ => Err(OtpError::UnsupportedKeySource(s.to_string())),
        }
    }
}

impl KeySourceKind {
    /// Instantiate a fresh source; `Seeded` requires `seed`
    pub fn build(self, seed: Option<u64>) -> Result<Box<dyn KeySource>> {
        match self {
            Self::Os => Ok(Box::new(OsRng)),
            Self::Thread => Ok(Box::new(rand::thread_rng())),
            Self::Seeded => {
                let seed = seed.ok_or(OtpError::SeedRequired)?;
                Ok(Box::new(StdRng::seed_from_u64(seed)))
            }
        }
    }
}
