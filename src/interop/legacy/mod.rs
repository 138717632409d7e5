//! The legacy engine: mcrypt's `rijndael-128` cipher and its mode semantics, built on the
//! AES block function.
//!
//! Differences from a standard toolkit that the verifier exists to catch:
//! - block modes (`cbc`, `ecb`) silently zero pad plaintext to the block size;
//! - plain `cfb` and `ofb` use an 8-bit feedback segment;
//! - the full-block variants are spelled `ncfb` and `nofb`.

mod cbc;
mod cfb;
mod ctr;
mod ecb;
mod ofb;
mod rijndael;
mod util;

use log::trace;

use crate::interop::error::{Error, Result};
use crate::interop::key::{Iv, Key};
use crate::interop::mode::LegacyMode;

use self::cbc::cbc_encrypt;
use self::cfb::{cfb8_encrypt, ncfb_encrypt};
use self::ctr::ctr_encrypt;
use self::ecb::ecb_encrypt;
use self::ofb::{nofb_encrypt, ofb8_encrypt};
use self::rijndael::Rijndael;
use self::util::zero_pad;

/// Encrypt-side contract of the legacy engine.
pub trait LegacyEngine {
    /// Encrypts `plaintext` under `key` in `mode`. `iv` is required by every mode except
    /// ECB, which ignores it.
    fn encrypt(&self, key: &Key, plaintext: &[u8], mode: LegacyMode, iv: Option<&Iv>)
    -> Result<Vec<u8>>;
}

/// mcrypt `rijndael-128`. Only the 128-bit block size is provided: `rijndael-192` and
/// `rijndael-256` are not AES and have no toolkit counterpart.
#[derive(Copy, Clone, Debug, Default)]
pub struct Rijndael128;

impl Rijndael128 {
    pub const CIPHER: &'static str = "rijndael-128";
}

impl LegacyEngine for Rijndael128 {
    fn encrypt(
        &self,
        key: &Key,
        plaintext: &[u8],
        mode: LegacyMode,
        iv: Option<&Iv>,
    ) -> Result<Vec<u8>> {
        let cipher = Rijndael::new(key);
        let require_iv = || {
            iv.map(Iv::as_bytes)
                .ok_or(Error::MissingIv { mode: mode.name() })
        };

        let ciphertext = match mode {
            LegacyMode::Ecb => ecb_encrypt(&zero_pad(plaintext), &cipher),
            LegacyMode::Cbc => cbc_encrypt(&zero_pad(plaintext), &cipher, require_iv()?),
            LegacyMode::Cfb => cfb8_encrypt(plaintext, &cipher, require_iv()?),
            LegacyMode::Ncfb => ncfb_encrypt(plaintext, &cipher, require_iv()?),
            LegacyMode::Ofb => ofb8_encrypt(plaintext, &cipher, require_iv()?),
            LegacyMode::Nofb => nofb_encrypt(plaintext, &cipher, require_iv()?),
            LegacyMode::Ctr => ctr_encrypt(plaintext, &cipher, require_iv()?),
        };

        trace!(
            "{}-{}: {} -> {} bytes",
            Self::CIPHER,
            mode,
            plaintext.len(),
            ciphertext.len()
        );
        Ok(ciphertext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zero_key() -> Key {
        Key::try_from_slice(&[0u8; 16]).expect("16-byte key")
    }

    #[test]
    fn block_modes_pad_stream_modes_do_not() -> Result<()> {
        let key = zero_key();
        let iv = Iv::new([0u8; 16]);

        for mode in [
            LegacyMode::Cbc,
            LegacyMode::Cfb,
            LegacyMode::Ctr,
            LegacyMode::Ecb,
            LegacyMode::Ncfb,
            LegacyMode::Nofb,
            LegacyMode::Ofb,
        ] {
            let ct = Rijndael128.encrypt(&key, b"0041", mode, Some(&iv))?;
            let expected = if mode.is_block_mode() { 16 } else { 4 };
            assert_eq!(ct.len(), expected, "{mode}");
        }
        Ok(())
    }

    #[test]
    fn ecb_ignores_iv() -> Result<()> {
        let key = zero_key();
        let a = Rijndael128.encrypt(&key, b"deadbeef", LegacyMode::Ecb, None)?;
        let b = Rijndael128.encrypt(&key, b"deadbeef", LegacyMode::Ecb, Some(&Iv::new([9u8; 16])))?;
        assert_eq!(a, b);
        Ok(())
    }

    #[test]
    fn iv_modes_require_iv() {
        let key = zero_key();
        for mode in [LegacyMode::Cbc, LegacyMode::Cfb, LegacyMode::Ncfb, LegacyMode::Nofb] {
            let res = Rijndael128.encrypt(&key, b"41", mode, None);
            assert!(matches!(res, Err(Error::MissingIv { .. })), "{mode}");
        }
    }

    #[test]
    fn padded_block_matches_explicit_nuls() -> Result<()> {
        let key = zero_key();
        let iv = Iv::new([0u8; 16]);

        let implicit = Rijndael128.encrypt(&key, b"41", LegacyMode::Cbc, Some(&iv))?;
        let mut explicit = b"41".to_vec();
        explicit.resize(16, 0);
        let explicit = Rijndael128.encrypt(&key, &explicit, LegacyMode::Cbc, Some(&iv))?;

        assert_eq!(implicit, explicit);
        Ok(())
    }
}
