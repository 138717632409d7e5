use crate::interop::key::BLOCK_SIZE;
use crate::interop::legacy::rijndael::Rijndael;
use crate::interop::legacy::util::{shift_in, xor_chunks};

/// mcrypt `ofb`: 8-bit output feedback. The keystream byte, not the ciphertext, is shifted
/// back into the register.
pub(crate) fn ofb8_encrypt(plaintext: &[u8], cipher: &Rijndael, iv: &[u8; BLOCK_SIZE]) -> Vec<u8> {
    let mut register = *iv;
    let mut ciphertext = Vec::with_capacity(plaintext.len());

    for &p in plaintext {
        let k = cipher.encrypt_block(&register)[0];
        shift_in(&mut register, k);
        ciphertext.push(p ^ k);
    }

    ciphertext
}

/// mcrypt `nofb`: full-block output feedback; trailing partial block truncated.
pub(crate) fn nofb_encrypt(plaintext: &[u8], cipher: &Rijndael, iv: &[u8; BLOCK_SIZE]) -> Vec<u8> {
    let mut register = *iv;
    let mut ciphertext = Vec::with_capacity(plaintext.len());

    for chunk in plaintext.chunks(BLOCK_SIZE) {
        register = cipher.encrypt_block(&register);
        let ct = xor_chunks(&register, chunk);
        ciphertext.extend_from_slice(&ct[..chunk.len()]);
    }

    ciphertext
}
