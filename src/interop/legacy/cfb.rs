use crate::interop::key::BLOCK_SIZE;
use crate::interop::legacy::rijndael::Rijndael;
use crate::interop::legacy::util::{shift_in, xor_chunks};

/// mcrypt `cfb`: 8-bit feedback. One block encryption per byte; the first keystream byte
/// is XOR'd with the plaintext byte and the resulting ciphertext byte is shifted into the
/// register.
pub(crate) fn cfb8_encrypt(plaintext: &[u8], cipher: &Rijndael, iv: &[u8; BLOCK_SIZE]) -> Vec<u8> {
    let mut register = *iv;
    let mut ciphertext = Vec::with_capacity(plaintext.len());

    for &p in plaintext {
        let c = p ^ cipher.encrypt_block(&register)[0];
        shift_in(&mut register, c);
        ciphertext.push(c);
    }

    ciphertext
}

/// mcrypt `ncfb`: full-block feedback. A trailing partial block is XOR'd with a truncated
/// keystream block.
pub(crate) fn ncfb_encrypt(plaintext: &[u8], cipher: &Rijndael, iv: &[u8; BLOCK_SIZE]) -> Vec<u8> {
    let mut register = *iv;
    let mut ciphertext = Vec::with_capacity(plaintext.len());

    for chunk in plaintext.chunks(BLOCK_SIZE) {
        let keystream = cipher.encrypt_block(&register);
        register = xor_chunks(&keystream, chunk);
        ciphertext.extend_from_slice(&register[..chunk.len()]);
    }

    ciphertext
}
