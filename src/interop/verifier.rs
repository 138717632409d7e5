use log::{debug, error, trace};

use crate::interop::error::{Error, Result};
use crate::interop::key::{Iv, Key, KeySize};
use crate::interop::legacy::{LegacyEngine, Rijndael128};
use crate::interop::mode::{LegacyMode, MODE_TABLE, ModeMapping};
use crate::interop::modern::{AesToolkit, DecryptOptions, ModernEngine};
use crate::interop::random::{RandomSource, SecureRandom};

/// Number of trials run by the CLI when `--runs` is not given.
pub const RUNS: usize = 1000;

/// Smallest and largest raw plaintext drawn per trial, before hex encoding.
pub const MIN_PLAINTEXT_LEN: usize = 1;
pub const MAX_PLAINTEXT_LEN: usize = 32;

/// Outcome of a single mode check.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Comparison {
    Match,
    /// Decrypted output, trailing NULs stripped, that differed from the hex plaintext.
    Mismatch { mode: LegacyMode, actual: Vec<u8> },
}

impl Comparison {
    pub fn is_match(&self) -> bool {
        matches!(self, Comparison::Match)
    }

    /// Turns a mismatch into [Error::Mismatch].
    pub fn into_result(self) -> Result<()> {
        match self {
            Comparison::Match => Ok(()),
            Comparison::Mismatch { mode, actual } => Err(Error::Mismatch {
                mode,
                actual: String::from_utf8_lossy(&actual).into_owned(),
            }),
        }
    }
}

/// Work completed by [run_trials].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct TrialReport {
    pub trials: usize,
    pub checks: usize,
}

/// Encrypts random hex plaintext with the legacy engine, decrypts it with the modern engine,
/// and compares the two. Bound to one key and IV for its whole lifetime.
///
/// ## Examples
/// ```
/// # fn main() -> mcrypt_interop::Result<()> {
/// use mcrypt_interop::Verifier;
///
/// let mut verifier = Verifier::new()?;
/// for _ in 0..10 {
///     verifier.run()?;
/// }
/// # Ok(())
/// # }
/// ```
pub struct Verifier<R = SecureRandom, L = Rijndael128, M = AesToolkit> {
    key: Key,
    iv: Iv,
    rng: R,
    legacy: L,
    modern: M,
}

impl Verifier {
    /// OS-seeded random source, 128-bit key, default engines.
    pub fn new() -> Result<Self> {
        Self::with_parts(SecureRandom::from_os()?, KeySize::Bits128, Rijndael128, AesToolkit)
    }
}

impl<R: RandomSource, L: LegacyEngine, M: ModernEngine> Verifier<R, L, M> {
    /// Draws a fresh key of `key_size` and a fresh IV from `rng`.
    pub fn with_parts(mut rng: R, key_size: KeySize, legacy: L, modern: M) -> Result<Self> {
        let key = Key::random(key_size, &mut rng)?;
        let iv = Iv::random(&mut rng)?;
        Ok(Self::with_key(key, iv, rng, legacy, modern))
    }

    /// Binds an explicit key and IV. `rng` is only used for trial plaintext.
    pub fn with_key(key: Key, iv: Iv, rng: R, legacy: L, modern: M) -> Self {
        Self {
            key,
            iv,
            rng,
            legacy,
            modern,
        }
    }

    pub fn key(&self) -> &Key {
        &self.key
    }

    pub fn iv(&self) -> &Iv {
        &self.iv
    }

    /// Draws 1 to 32 random bytes and returns them hex encoded.
    pub fn random_plaintext(&mut self) -> Result<String> {
        let n = self.rng.len_in(MIN_PLAINTEXT_LEN..=MAX_PLAINTEXT_LEN)?;
        let mut bytes = vec![0u8; n];
        self.rng.fill_bytes(&mut bytes)?;
        Ok(hex::encode(bytes))
    }

    /// One trial: fresh plaintext checked against every entry of [MODE_TABLE]. Returns the
    /// first mismatch as an error.
    pub fn run(&mut self) -> Result<()> {
        let data = self.random_plaintext()?;
        debug!("trial plaintext ({} hex chars): {}", data.len(), data);
        self.run_with(&data)
    }

    /// Checks `data` against every entry of [MODE_TABLE], in order.
    pub fn run_with(&self, data: &str) -> Result<()> {
        for mapping in &MODE_TABLE {
            let outcome = self.check(mapping, data)?;
            if let Comparison::Mismatch { mode, actual } = &outcome {
                error!(
                    "{} -> {}: expected {}, got {}",
                    mode,
                    mapping.modern.cipher_name(self.key.size()),
                    data,
                    actual.escape_ascii()
                );
            }
            outcome.into_result()?;
        }
        Ok(())
    }

    /// Round trips `data` through one mapping. Engine failures are errors; a wrong result
    /// is a [Comparison::Mismatch]. Any mapping may be checked, including ones not in
    /// [MODE_TABLE].
    pub fn check(&self, mapping: &ModeMapping, data: &str) -> Result<Comparison> {
        let iv = mapping.uses_iv.then_some(&self.iv);

        let ciphertext = self
            .legacy
            .encrypt(&self.key, data.as_bytes(), mapping.legacy, iv)?;
        let decrypted = self.modern.decrypt(
            &ciphertext,
            mapping.modern,
            &self.key,
            DecryptOptions::raw_no_padding(),
            iv,
        )?;

        let actual = strip_trailing_nuls(&decrypted);
        trace!(
            "{} -> {}: {} bytes",
            mapping.legacy,
            mapping.modern.name(),
            actual.len()
        );

        if actual == data.as_bytes() {
            Ok(Comparison::Match)
        } else {
            Ok(Comparison::Mismatch {
                mode: mapping.legacy,
                actual: actual.to_vec(),
            })
        }
    }
}

/// Drops the NUL bytes the legacy engine appends to reach a block boundary. Safe because
/// trial plaintext is hex, which never contains a NUL byte.
pub fn strip_trailing_nuls(bytes: &[u8]) -> &[u8] {
    let end = bytes.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    &bytes[..end]
}

/// Runs `runs` trials on the same verifier, stopping at the first failure.
pub fn run_trials<R, L, M>(verifier: &mut Verifier<R, L, M>, runs: usize) -> Result<TrialReport>
where
    R: RandomSource,
    L: LegacyEngine,
    M: ModernEngine,
{
    let mut report = TrialReport::default();
    for i in 0..runs {
        verifier.run().inspect_err(|e| error!("trial {} of {} failed: {e}", i + 1, runs))?;
        report.trials += 1;
        report.checks += MODE_TABLE.len();
    }
    Ok(report)
}

/// Runs `runs` trials, each on a freshly keyed verifier with the default engines.
pub fn run_fresh_trials(key_size: KeySize, runs: usize) -> Result<TrialReport> {
    let mut rng = SecureRandom::from_os()?;
    let mut report = TrialReport::default();
    for i in 0..runs {
        let mut verifier = Verifier::with_parts(&mut rng, key_size, Rijndael128, AesToolkit)?;
        verifier.run().inspect_err(|e| error!("trial {} of {} failed: {e}", i + 1, runs))?;
        report.trials += 1;
        report.checks += MODE_TABLE.len();
    }
    Ok(report)
}
