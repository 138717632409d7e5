use crate::interop::key::BLOCK_SIZE;
use crate::interop::legacy::rijndael::Rijndael;

/// ECB encryption. Encrypts each 16-byte block independently; input must already be
/// zero padded to a whole number of blocks.
pub(crate) fn ecb_encrypt(plaintext: &[u8], cipher: &Rijndael) -> Vec<u8> {
    debug_assert!(plaintext.len() % BLOCK_SIZE == 0);
    let mut ciphertext = Vec::with_capacity(plaintext.len());

    for pt in plaintext.chunks_exact(BLOCK_SIZE) {
        let mut block = [0u8; BLOCK_SIZE];
        block.copy_from_slice(pt);
        ciphertext.extend_from_slice(&cipher.encrypt_block(&block));
    }

    ciphertext
}
