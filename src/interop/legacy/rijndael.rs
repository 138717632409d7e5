use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockEncrypt, KeyInit};
use aes::{Aes128, Aes192, Aes256};

use crate::interop::key::{BLOCK_SIZE, Key, KeySize};

/// Forward Rijndael-128 block function keyed for a single encryption call. Every mcrypt
/// mode used here (including CBC and ECB encryption) only needs the forward direction.
pub(crate) enum Rijndael {
    K128(Aes128),
    K192(Aes192),
    K256(Aes256),
}

impl Rijndael {
    pub(crate) fn new(key: &Key) -> Self {
        let k = key.as_bytes();
        match key.size() {
            KeySize::Bits128 => Self::K128(Aes128::new(GenericArray::from_slice(k))),
            KeySize::Bits192 => Self::K192(Aes192::new(GenericArray::from_slice(k))),
            KeySize::Bits256 => Self::K256(Aes256::new(GenericArray::from_slice(k))),
        }
    }

    #[inline(always)]
    pub(crate) fn encrypt_block(&self, input: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
        let mut block = GenericArray::clone_from_slice(input);
        match self {
            Self::K128(c) => c.encrypt_block(&mut block),
            Self::K192(c) => c.encrypt_block(&mut block),
            Self::K256(c) => c.encrypt_block(&mut block),
        }

        let mut out = [0u8; BLOCK_SIZE];
        out.copy_from_slice(&block);
        out
    }
}
