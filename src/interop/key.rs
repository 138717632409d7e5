//! Defines [`Key`], which holds a valid AES key of 128, 192, or 256 bits, and [`Iv`], which
//! holds a single 16-byte initialisation vector. Both are immutable once built.

use crate::interop::error::{Error, Result};
use crate::interop::random::RandomSource;

/// AES block size in bytes. Rijndael is only exercised with 128-bit blocks.
pub const BLOCK_SIZE: usize = 16;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum KeyBytes {
    K128([u8; 16]),
    K192([u8; 24]),
    K256([u8; 32]),
}

/// Supported AES key sizes.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum KeySize {
    #[default]
    Bits128,
    Bits192,
    Bits256,
}

impl KeySize {
    /// Key length in bytes.
    pub fn byte_len(self) -> usize {
        match self {
            KeySize::Bits128 => 16,
            KeySize::Bits192 => 24,
            KeySize::Bits256 => 32,
        }
    }

    /// Key length in bits, as used in toolkit cipher names (`aes-128-cbc`).
    pub fn bits(self) -> usize {
        self.byte_len() * 8
    }
}

/// Contains a valid AES key. Can be drawn from a [`RandomSource`], or built from a slice
/// of bytes that is 16, 24, or 32 bytes long.
///
/// ## Examples
/// ```
/// # fn main() -> mcrypt_interop::Result<()> {
/// use mcrypt_interop::{Key, KeySize};
///
/// let key = Key::try_from_slice(&[0u8; 16])?;
/// assert_eq!(key.size(), KeySize::Bits128);
/// assert_eq!(key.as_bytes(), &[0u8; 16]);
///
/// // anything other than 16, 24, or 32 bytes is rejected
/// assert!(Key::try_from_slice(&[0u8; 20]).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Key {
    bytes: KeyBytes,
}

impl Key {
    /// Draws a random key of the given size from `rng`.
    pub fn random<R: RandomSource + ?Sized>(size: KeySize, rng: &mut R) -> Result<Self> {
        let bytes = match size {
            KeySize::Bits128 => {
                let mut k = [0u8; 16];
                rng.fill_bytes(&mut k)?;
                KeyBytes::K128(k)
            }
            KeySize::Bits192 => {
                let mut k = [0u8; 24];
                rng.fill_bytes(&mut k)?;
                KeyBytes::K192(k)
            }
            KeySize::Bits256 => {
                let mut k = [0u8; 32];
                rng.fill_bytes(&mut k)?;
                KeyBytes::K256(k)
            }
        };
        Ok(Self { bytes })
    }

    /// Attempts to build a key from a slice of bytes. Will return an InvalidKeyLength error
    /// if the input slice is anything other than 16, 24, or 32 bytes long.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self> {
        let invalid = || Error::InvalidKeyLength { len: bytes.len() };
        Ok(match bytes.len() {
            16 => Self {
                bytes: KeyBytes::K128(bytes.try_into().map_err(|_| invalid())?),
            },
            24 => Self {
                bytes: KeyBytes::K192(bytes.try_into().map_err(|_| invalid())?),
            },
            32 => Self {
                bytes: KeyBytes::K256(bytes.try_into().map_err(|_| invalid())?),
            },
            _ => return Err(invalid()),
        })
    }

    pub fn size(&self) -> KeySize {
        match self.bytes {
            KeyBytes::K128(_) => KeySize::Bits128,
            KeyBytes::K192(_) => KeySize::Bits192,
            KeyBytes::K256(_) => KeySize::Bits256,
        }
    }

    /// Returns a reference to the internal key as an array of bytes.
    pub fn as_bytes(&self) -> &[u8] {
        match &self.bytes {
            KeyBytes::K128(k) => k,
            KeyBytes::K192(k) => k,
            KeyBytes::K256(k) => k,
        }
    }
}

/// A 16-byte initialisation vector, one AES block wide.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Iv([u8; BLOCK_SIZE]);

impl Iv {
    pub fn new(bytes: [u8; BLOCK_SIZE]) -> Self {
        Self(bytes)
    }

    /// Draws a random IV from `rng`.
    pub fn random<R: RandomSource + ?Sized>(rng: &mut R) -> Result<Self> {
        let mut iv = [0u8; BLOCK_SIZE];
        rng.fill_bytes(&mut iv)?;
        Ok(Self(iv))
    }

    /// Returns InvalidIvLength unless `bytes` is exactly 16 bytes long.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self> {
        let iv: [u8; BLOCK_SIZE] = bytes
            .try_into()
            .map_err(|_| Error::InvalidIvLength { len: bytes.len() })?;
        Ok(Self(iv))
    }

    pub fn as_bytes(&self) -> &[u8; BLOCK_SIZE] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interop::random::SecureRandom;

    #[test]
    fn key_sizes_from_slice() -> Result<()> {
        let bytes = [0xA5u8; 32];

        assert_eq!(Key::try_from_slice(&bytes[..16])?.size(), KeySize::Bits128);
        assert_eq!(Key::try_from_slice(&bytes[..24])?.size(), KeySize::Bits192);
        assert_eq!(Key::try_from_slice(&bytes[..32])?.size(), KeySize::Bits256);
        assert_eq!(Key::try_from_slice(&bytes[..24])?.as_bytes(), &bytes[..24]);

        Ok(())
    }

    #[test]
    fn key_rejects_bad_length() {
        assert!(matches!(
            Key::try_from_slice(&[0u8; 15]),
            Err(Error::InvalidKeyLength { len: 15 })
        ));
        assert!(matches!(
            Key::try_from_slice(&[]),
            Err(Error::InvalidKeyLength { len: 0 })
        ));
    }

    #[test]
    fn random_key_matches_requested_size() -> Result<()> {
        let mut rng = SecureRandom::seeded(7);
        for size in [KeySize::Bits128, KeySize::Bits192, KeySize::Bits256] {
            let key = Key::random(size, &mut rng)?;
            assert_eq!(key.size(), size);
            assert_eq!(key.as_bytes().len(), size.byte_len());
        }
        Ok(())
    }

    #[test]
    fn iv_must_be_one_block() -> Result<()> {
        let iv = Iv::try_from_slice(&[1u8; 16])?;
        assert_eq!(iv.as_bytes(), &[1u8; 16]);

        assert!(matches!(
            Iv::try_from_slice(&[0u8; 12]),
            Err(Error::InvalidIvLength { len: 12 })
        ));
        Ok(())
    }

    #[test]
    fn fresh_ivs_differ() -> Result<()> {
        let mut rng = SecureRandom::from_os()?;
        let a = Iv::random(&mut rng)?;
        let b = Iv::random(&mut rng)?;
        assert_ne!(a, b);
        Ok(())
    }
}
