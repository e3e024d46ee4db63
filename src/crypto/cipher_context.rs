use crate::crypto::cipher_traits::BlockCipher;
use crate::crypto::cipher_types::CipherError;
use crate::crypto::utils::{BLOCK_SIZE, block_from_bytes};
use rayon::prelude::*;
use std::sync::Arc;

const CHUNK_SIZE: usize = 1024 * 1024;
const PARALLELISM_THRESHOLD: usize = 4 * 1024 * 1024;

/// Drives a block cipher over byte buffers of arbitrary length. Blocks are
/// processed independently (ECB-style), so identical plaintext blocks under
/// one key produce identical ciphertext blocks.
#[derive(Clone)]
pub struct CipherContext {
    algorithm: Arc<dyn BlockCipher + Send + Sync>,
}

impl CipherContext {
    pub fn new(algorithm: Box<dyn BlockCipher + Send + Sync>) -> Self {
        Self {
            algorithm: Arc::from(algorithm),
        }
    }

    /// Transforms a buffer of any length. A final chunk shorter than 8 bytes
    /// is zero-extended; callers that need reversible length handling apply
    /// [`apply_padding`](crate::crypto::utils::apply_padding) first.
    pub fn encrypt(&self, plaintext: &[u8]) -> Vec<u8> {
        self.transform_blocks(plaintext, false)
    }

    /// Inverse of [`CipherContext::encrypt`]; the input length must be a
    /// multiple of 8 bytes.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, CipherError> {
        if ciphertext.len() % BLOCK_SIZE != 0 {
            return Err(CipherError::InvalidBlockLength(ciphertext.len()));
        }
        Ok(self.transform_blocks(ciphertext, true))
    }

    // Blocks are independent, so large buffers fan out across the rayon
    // pool. Chunk boundaries stay on block boundaries, keeping the output
    // byte-identical to the sequential path.
    fn transform_blocks(&self, data: &[u8], decrypt: bool) -> Vec<u8> {
        if data.len() < PARALLELISM_THRESHOLD {
            return self.transform_chunk(data, decrypt);
        }

        let chunk_size = (data.len() / rayon::current_num_threads())
            .max(BLOCK_SIZE)
            .min(CHUNK_SIZE)
            / BLOCK_SIZE
            * BLOCK_SIZE;

        data.par_chunks(chunk_size)
            .flat_map(|chunk| self.transform_chunk(chunk, decrypt))
            .collect()
    }

    fn transform_chunk(&self, chunk: &[u8], decrypt: bool) -> Vec<u8> {
        let mut output = Vec::with_capacity(chunk.len() + BLOCK_SIZE);
        for block in chunk.chunks(BLOCK_SIZE) {
            let word = block_from_bytes(block);
            let processed = if decrypt {
                self.algorithm.decrypt_block(word)
            } else {
                self.algorithm.encrypt_block(word)
            };
            output.extend_from_slice(&processed.to_be_bytes());
        }
        output
    }
}
