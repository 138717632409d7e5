//! The modern engine: toolkit-style AES (`aes-<bits>-<mode>`) over the RustCrypto block
//! mode crates.

use aes::{Aes128, Aes192, Aes256};
use cipher::generic_array::GenericArray;
use cipher::{AsyncStreamCipher, BlockDecryptMut, KeyInit, KeyIvInit, StreamCipher};
use log::trace;

use crate::interop::error::{Error, Result};
use crate::interop::key::{BLOCK_SIZE, Iv, Key, KeySize};
use crate::interop::mode::ModernMode;

/// Padding scheme removed after decryption. Only applies to the block modes.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Padding {
    /// Leave the decrypted blocks untouched (toolkit "zero padding" flag).
    None,
    /// Validate and strip PKCS#7 padding, the toolkit default.
    #[default]
    Pkcs7,
}

/// Decryption flags. Output is always raw bytes.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct DecryptOptions {
    pub padding: Padding,
}

impl DecryptOptions {
    /// Raw output with padding disabled, so ciphertext need not be PKCS#7 formatted.
    pub const fn raw_no_padding() -> Self {
        Self {
            padding: Padding::None,
        }
    }
}

/// Decrypt-side contract of the modern engine.
pub trait ModernEngine {
    fn decrypt(
        &self,
        ciphertext: &[u8],
        mode: ModernMode,
        key: &Key,
        options: DecryptOptions,
        iv: Option<&Iv>,
    ) -> Result<Vec<u8>>;
}

/// Standard AES from the RustCrypto `aes` crate, with the cipher picked from the key size.
#[derive(Copy, Clone, Debug, Default)]
pub struct AesToolkit;

// one arm per toolkit mode, instantiated once per AES key size
macro_rules! decrypt_in_place {
    ($cipher:ty, $mode:expr, $key:expr, $iv:expr, $buf:expr) => {{
        let key: &[u8] = $key;
        let iv: &[u8] = $iv;
        let buf: &mut [u8] = $buf;
        let bad_iv = |_: cipher::InvalidLength| Error::InvalidIvLength { len: iv.len() };

        match $mode {
            ModernMode::Ecb => {
                let mut dec = ecb::Decryptor::<$cipher>::new_from_slice(key)
                    .map_err(|_| Error::InvalidKeyLength { len: key.len() })?;
                for block in buf.chunks_exact_mut(BLOCK_SIZE) {
                    dec.decrypt_block_mut(GenericArray::from_mut_slice(block));
                }
            }
            ModernMode::Cbc => {
                let mut dec = cbc::Decryptor::<$cipher>::new_from_slices(key, iv).map_err(bad_iv)?;
                for block in buf.chunks_exact_mut(BLOCK_SIZE) {
                    dec.decrypt_block_mut(GenericArray::from_mut_slice(block));
                }
            }
            ModernMode::Cfb8 => {
                cfb8::Decryptor::<$cipher>::new_from_slices(key, iv)
                    .map_err(bad_iv)?
                    .decrypt(buf);
            }
            ModernMode::Cfb128 => {
                cfb_mode::Decryptor::<$cipher>::new_from_slices(key, iv)
                    .map_err(bad_iv)?
                    .decrypt(buf);
            }
            ModernMode::Ofb => {
                ofb::Ofb::<$cipher>::new_from_slices(key, iv)
                    .map_err(bad_iv)?
                    .apply_keystream(buf);
            }
            ModernMode::Ctr => {
                ctr::Ctr128BE::<$cipher>::new_from_slices(key, iv)
                    .map_err(bad_iv)?
                    .apply_keystream(buf);
            }
        }
    }};
}

impl ModernEngine for AesToolkit {
    fn decrypt(
        &self,
        ciphertext: &[u8],
        mode: ModernMode,
        key: &Key,
        options: DecryptOptions,
        iv: Option<&Iv>,
    ) -> Result<Vec<u8>> {
        if mode.is_block_mode() && ciphertext.len() % BLOCK_SIZE != 0 {
            return Err(Error::InvalidCiphertext {
                len: ciphertext.len(),
                context: "block mode ciphertext not a multiple of 16 bytes",
            });
        }

        let iv: &[u8] = if mode.uses_iv() {
            match iv {
                Some(iv) => iv.as_bytes(),
                None => return Err(Error::MissingIv { mode: mode.name() }),
            }
        } else {
            &[]
        };

        let mut plaintext = ciphertext.to_vec();
        match key.size() {
            KeySize::Bits128 => decrypt_in_place!(Aes128, mode, key.as_bytes(), iv, &mut plaintext),
            KeySize::Bits192 => decrypt_in_place!(Aes192, mode, key.as_bytes(), iv, &mut plaintext),
            KeySize::Bits256 => decrypt_in_place!(Aes256, mode, key.as_bytes(), iv, &mut plaintext),
        }

        if mode.is_block_mode() && options.padding == Padding::Pkcs7 {
            unpad(&mut plaintext)?;
        }

        trace!(
            "{}: {} -> {} bytes",
            mode.cipher_name(key.size()),
            ciphertext.len(),
            plaintext.len()
        );
        Ok(plaintext)
    }
}

/// Remove and validate PKCS#7 padding
fn unpad(input: &mut Vec<u8>) -> Result<()> {
    let Some(&pad) = input.last() else {
        return Err(Error::InvalidCiphertext {
            len: 0,
            context: "Unpad: attempted to unpad empty input",
        });
    };

    let pad = pad as usize;
    if pad == 0 || pad > BLOCK_SIZE || pad > input.len() {
        return Err(Error::InvalidCiphertext {
            len: input.len(),
            context: "Unpad: invalid padding length specified by last byte",
        });
    }

    let start = input.len() - pad;
    if !input[start..].iter().all(|&b| b as usize == pad) {
        return Err(Error::InvalidCiphertext {
            len: input.len(),
            context: "Unpad: invalid PKCS#7 padding format",
        });
    }

    input.truncate(start);
    Ok(())
}
