use crate::crypto::bit_vector::BitVector;
use crate::crypto::cipher_errors::CipherError;

pub trait CipherAlgorithm {
    fn encrypt(&self, block: &BitVector) -> Result<BitVector, CipherError>;
    fn decrypt(&self, block: &BitVector) -> Result<BitVector, CipherError>;
}

pub trait SymmetricCipher: CipherAlgorithm {
    fn set_key(&mut self, key: &BitVector) -> Result<(), CipherError>;
}
