use crate::interop::key::BLOCK_SIZE;
use crate::interop::legacy::rijndael::Rijndael;
use crate::interop::legacy::util::xor_chunks;

/// CBC encryption. Each plaintext block is XOR'd with the previous ciphertext block (the IV
/// for the first) before encryption. Input must already be zero padded.
pub(crate) fn cbc_encrypt(plaintext: &[u8], cipher: &Rijndael, iv: &[u8; BLOCK_SIZE]) -> Vec<u8> {
    debug_assert!(plaintext.len() % BLOCK_SIZE == 0);
    let mut ciphertext = Vec::with_capacity(plaintext.len());
    let mut chain = *iv;

    for pt in plaintext.chunks_exact(BLOCK_SIZE) {
        chain = cipher.encrypt_block(&xor_chunks(&chain, pt));
        ciphertext.extend_from_slice(&chain);
    }

    ciphertext
}
