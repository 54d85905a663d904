pub mod crypto;

// Re-export the main entry points for convenience
pub use crypto::bit_vector::BitVector;
pub use crypto::block_cipher::BlockCipher;
pub use crypto::cipher_engine::CipherEngine;
pub use crypto::cipher_errors::CipherError;
pub use crypto::cipher_traits::{CipherAlgorithm, SymmetricCipher};
pub use crypto::key_schedule::{KeySchedule, RoundKey};
pub use crypto::round_function::RoundFunction;
pub use crypto::table_set::{TableSet, TableSetParams};
