use crate::interop::key::BLOCK_SIZE;
use crate::interop::legacy::rijndael::Rijndael;
use crate::interop::legacy::util::xor_chunks;

/// mcrypt `ctr`: the IV is a 128-bit big-endian counter, incremented (wrapping) once per
/// block. Encryption and decryption are the same operation.
pub(crate) fn ctr_encrypt(input: &[u8], cipher: &Rijndael, iv: &[u8; BLOCK_SIZE]) -> Vec<u8> {
    let mut output = Vec::with_capacity(input.len());
    let mut ctr = u128::from_be_bytes(*iv);

    for chunk in input.chunks(BLOCK_SIZE) {
        let keystream = cipher.encrypt_block(&ctr.to_be_bytes());
        let ct = xor_chunks(&keystream, chunk);
        output.extend_from_slice(&ct[..chunk.len()]);
        ctr = ctr.wrapping_add(1);
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interop::error::Result;
    use crate::interop::key::Key;
    use crate::interop::legacy::util::test_util::{CTR_IV, KEY_128, KEY_192, PLAINTEXT, hex_to_bytes};

    #[test]
    fn aes_ctr_128_encrypt() -> Result<()> {
        let expected = hex_to_bytes(
            "
        874d6191b620e3261bef6864990db6ce\
        9806f66b7970fdff8617187bb9fffdff\
        5ae4df3edbd5d35e5b4f09020db03eab\
        1e031dda2fbe03d1792170a0f3009cee",
        );

        let cipher = Rijndael::new(&Key::try_from_slice(&KEY_128)?);
        let encrypted = ctr_encrypt(&PLAINTEXT, &cipher, &CTR_IV);

        assert_eq!(expected, encrypted, "encrypted result does not match expected");
        Ok(())
    }

    #[test]
    fn aes_ctr_192_decrypt() -> Result<()> {
        let ciphertext = hex_to_bytes(
            "
        1abc932417521ca24f2b0459fe7e6e0b\
        090339ec0aa6faefd5ccc2c6f4ce8e94\
        1e36b26bd1ebc670d1bd1d665620abf7\
        4f78a7f6d29809585a97daec58c6b050",
        );

        let cipher = Rijndael::new(&Key::try_from_slice(&KEY_192)?);
        let decrypted = ctr_encrypt(&ciphertext, &cipher, &CTR_IV);

        assert_eq!(PLAINTEXT.to_vec(), decrypted, "decrypted result does not match expected");
        Ok(())
    }

    #[test]
    fn counter_wraps_at_128_bits() -> Result<()> {
        let cipher = Rijndael::new(&Key::try_from_slice(&KEY_128)?);
        let out = ctr_encrypt(&[0u8; 32], &cipher, &[0xff; 16]);

        assert_eq!(out[..16], cipher.encrypt_block(&[0xff; 16]));
        assert_eq!(out[16..], cipher.encrypt_block(&[0u8; 16]));
        Ok(())
    }
}
