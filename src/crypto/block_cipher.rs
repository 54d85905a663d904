use crate::crypto::bit_vector::BitVector;
use crate::crypto::cipher_engine::CipherEngine;
use crate::crypto::cipher_errors::CipherError;
use crate::crypto::cipher_traits::{CipherAlgorithm, SymmetricCipher};
use crate::crypto::key_schedule::{KeySchedule, RoundKey};
use crate::crypto::table_set::TableSet;
use std::sync::Arc;

/// A table set bound to one key: derives the subkeys once on `set_key`
/// and reuses them for every block encrypted under that key.
///
/// Decryption runs the same forward transform with the cached subkeys
/// reversed. Encrypting before a key is set fails with the engine's
/// round-key count check.
pub struct BlockCipher {
    tables: Arc<TableSet>,
    round_keys: Vec<RoundKey>,
}

impl BlockCipher {
    pub fn new(tables: Arc<TableSet>) -> Self {
        Self {
            tables,
            round_keys: Vec::new(),
        }
    }

    pub fn tables(&self) -> &TableSet {
        &self.tables
    }
}

impl CipherAlgorithm for BlockCipher {
    fn encrypt(&self, block: &BitVector) -> Result<BitVector, CipherError> {
        CipherEngine::transform(block, &self.round_keys, &self.tables)
    }

    fn decrypt(&self, block: &BitVector) -> Result<BitVector, CipherError> {
        let reversed: Vec<RoundKey> = self.round_keys.iter().rev().cloned().collect();
        CipherEngine::transform(block, &reversed, &self.tables)
    }
}

impl SymmetricCipher for BlockCipher {
    fn set_key(&mut self, key: &BitVector) -> Result<(), CipherError> {
        self.round_keys = KeySchedule::derive_round_keys(key, &self.tables)?;
        log::debug!(
            "cached {} round keys of {} bits",
            self.round_keys.len(),
            self.tables.round_key_bits()
        );
        Ok(())
    }
}
