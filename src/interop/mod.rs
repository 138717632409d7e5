mod error;
mod key;
mod legacy;
mod mode;
mod modern;
mod random;
mod verifier;

pub use error::{Error, Result};
pub use key::{BLOCK_SIZE, Iv, Key, KeySize};
pub use legacy::{LegacyEngine, Rijndael128};
pub use mode::{LegacyMode, MODE_TABLE, ModeMapping, ModernMode};
pub use modern::{AesToolkit, DecryptOptions, ModernEngine, Padding};
pub use random::{RandomSource, SecureRandom};
pub use verifier::{
    Comparison, MAX_PLAINTEXT_LEN, MIN_PLAINTEXT_LEN, RUNS, TrialReport, Verifier, run_fresh_trials,
    run_trials, strip_trailing_nuls,
};
