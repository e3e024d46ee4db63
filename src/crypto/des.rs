use crate::crypto::cipher_traits::BlockCipher;
use crate::crypto::cipher_types::CipherError;
use crate::crypto::des_key_expansion::DesKeyExpansion;
use crate::crypto::des_tables::{FP, IP};
use crate::crypto::des_transformation::DesTransformation;
use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::feistel_network::FeistelNetwork;
use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::utils::{BLOCK_SIZE, block_from_bytes, permute};
use std::sync::Arc;

const NUM_ROUNDS: usize = 16;

/// Initial permutation IP, a fixed 64-bit shuffle applied before the rounds.
pub fn initial_permutation(block: u64) -> u64 {
    permute(block, 64, &IP)
}

/// Final permutation FP, the exact inverse of [`initial_permutation`].
pub fn final_permutation(block: u64) -> u64 {
    permute(block, 64, &FP)
}

pub struct Des {
    feistel_network: FeistelNetwork,
    subkeys: Vec<u64>,
}

impl Des {
    /// Builds a cipher instance from an 8-byte key. The 16 round subkeys are
    /// derived once here; the instance holds no other state and can be
    /// shared freely between threads.
    pub fn new(key: &[u8]) -> Result<Self, CipherError> {
        Des::with_components(key, Arc::new(DesKeyExpansion), Arc::new(DesTransformation))
    }

    /// Same as [`Des::new`] with caller-supplied key expansion and round
    /// transformation.
    pub fn with_components(
        key: &[u8],
        key_expansion: Arc<dyn KeyExpansion + Send + Sync>,
        transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
    ) -> Result<Self, CipherError> {
        if key.len() != BLOCK_SIZE {
            return Err(CipherError::InvalidKeyLength(key.len()));
        }

        let subkeys = key_expansion.generate_subkeys(block_from_bytes(key));
        Ok(Des {
            feistel_network: FeistelNetwork::new(NUM_ROUNDS, transformation),
            subkeys,
        })
    }

    pub fn encrypt(&self, block: u64) -> u64 {
        self.process(block, false)
    }

    pub fn decrypt(&self, block: u64) -> u64 {
        self.process(block, true)
    }

    fn process(&self, block: u64, decrypt: bool) -> u64 {
        let permuted = initial_permutation(block);
        let preoutput = self.feistel_network.process(permuted, &self.subkeys, decrypt);
        final_permutation(preoutput)
    }
}

impl std::fmt::Debug for Des {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Des")
            .field("subkeys", &self.subkeys)
            .finish_non_exhaustive()
    }
}

impl BlockCipher for Des {
    fn encrypt_block(&self, block: u64) -> u64 {
        Des::encrypt(self, block)
    }

    fn decrypt_block(&self, block: u64) -> u64 {
        Des::decrypt(self, block)
    }

    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }
}
