//! Triple DES ECB backend.

use ::des::cipher::generic_array::GenericArray;
use ::des::cipher::{BlockDecrypt, BlockEncrypt, InvalidLength, KeyInit};
use ::des::{TdesEde2, TdesEde3};
use tracing::trace;

use super::Cipher;
use crate::core::constants::{BLOCK_SIZE, KEY_LEN_THREE, KEY_LEN_TWO};
use crate::core::key::Key;
use crate::core::padding::{pad, unpad};
use crate::error::{CipherError, Result};

/// Two-key (16-byte) or three-key (24-byte) triple DES.
enum Tdes {
    Two(TdesEde2),
    Three(TdesEde3),
}

/// Triple DES in electronic codebook mode.
pub struct TripleDesEcb {
    inner: Tdes,
}

impl TripleDesEcb {
    /// Build the cipher for a normalized key.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::InvalidKeyLength` if the key is not 16 or 24 bytes.
    pub fn new(key: &Key) -> Result<Self> {
        let bytes = key.as_bytes();
        let invalid = |_: InvalidLength| CipherError::InvalidKeyLength(bytes.len());
        let inner = match bytes.len() {
            KEY_LEN_TWO => Tdes::Two(TdesEde2::new_from_slice(bytes).map_err(invalid)?),
            KEY_LEN_THREE => Tdes::Three(TdesEde3::new_from_slice(bytes).map_err(invalid)?),
            n => return Err(CipherError::InvalidKeyLength(n).into()),
        };
        Ok(Self { inner })
    }

    fn encrypt_blocks(&self, buf: &mut [u8]) {
        for chunk in buf.chunks_exact_mut(BLOCK_SIZE) {
            let block = GenericArray::from_mut_slice(chunk);
            match &self.inner {
                Tdes::Two(c) => c.encrypt_block(block),
                Tdes::Three(c) => c.encrypt_block(block),
            }
        }
    }

    fn decrypt_blocks(&self, buf: &mut [u8]) {
        for chunk in buf.chunks_exact_mut(BLOCK_SIZE) {
            let block = GenericArray::from_mut_slice(chunk);
            match &self.inner {
                Tdes::Two(c) => c.decrypt_block(block),
                Tdes::Three(c) => c.decrypt_block(block),
            }
        }
    }
}

impl Cipher for TripleDesEcb {
    fn name(&self) -> &'static str {
        match self.inner {
            Tdes::Two(_) => "3des-ede2-ecb",
            Tdes::Three(_) => "3des-ede3-ecb",
        }
    }

    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let text = std::str::from_utf8(plaintext).map_err(|_| CipherError::InvalidPlaintext)?;
        let mut buf = pad(text, BLOCK_SIZE).into_bytes();

        trace!(
            plaintext_len = plaintext.len(),
            padded_len = buf.len(),
            cipher = self.name(),
            "encrypting"
        );

        self.encrypt_blocks(&mut buf);
        Ok(buf)
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        if ciphertext.is_empty() || ciphertext.len() % BLOCK_SIZE != 0 {
            return Err(CipherError::InvalidCiphertextLength(ciphertext.len()).into());
        }

        trace!(
            ciphertext_len = ciphertext.len(),
            cipher = self.name(),
            "decrypting"
        );

        let mut buf = ciphertext.to_vec();
        self.decrypt_blocks(&mut buf);

        let text = String::from_utf8(buf).map_err(|_| CipherError::BadKeyOrData)?;
        Ok(unpad(&text).as_bytes().to_vec())
    }
}
