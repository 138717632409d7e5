//! Checks that ciphertext produced by mcrypt's `rijndael-128` decrypts correctly with
//! standard AES modes, and pins down which toolkit mode each mcrypt mode corresponds to.
//!
//! | mcrypt | toolkit      |
//! |--------|--------------|
//! | cbc    | aes-128-cbc  |
//! | cfb    | aes-128-cfb8 |
//! | ctr    | aes-128-ctr  |
//! | ecb    | aes-128-ecb  |
//! | ncfb   | aes-128-cfb  |
//! | nofb   | aes-128-ofb  |
//!
//! mcrypt's 8-bit `ofb` has no toolkit equivalent and is not checked.

mod interop;

pub use interop::{
    AesToolkit, BLOCK_SIZE, Comparison, DecryptOptions, Error, Iv, Key, KeySize, LegacyEngine,
    LegacyMode, MAX_PLAINTEXT_LEN, MIN_PLAINTEXT_LEN, MODE_TABLE, ModeMapping, ModernEngine,
    ModernMode, Padding, RUNS, RandomSource, Result, Rijndael128, SecureRandom, TrialReport,
    Verifier, run_fresh_trials, run_trials, strip_trailing_nuls,
};
