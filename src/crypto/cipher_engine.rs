use crate::crypto::bit_vector::BitVector;
use crate::crypto::cipher_errors::CipherError;
use crate::crypto::key_schedule::RoundKey;
use crate::crypto::round_function::RoundFunction;
use crate::crypto::table_set::TableSet;

/// Runs one block through the full permutation network.
pub struct CipherEngine;

impl CipherEngine {
    /// Initial permutation, the round loop, the final un-swap, final
    /// permutation. The rounds consume `round_keys` in the order given;
    /// passing the same keys reversed inverts the transform, so there is
    /// no separate decryption routine.
    pub fn transform(
        block: &BitVector,
        round_keys: &[RoundKey],
        tables: &TableSet,
    ) -> Result<BitVector, CipherError> {
        if block.len() != tables.block_bits() {
            return Err(CipherError::InvalidBlockLength {
                expected: tables.block_bits(),
                actual: block.len(),
            });
        }
        if round_keys.len() != tables.round_count() {
            return Err(CipherError::LengthMismatch {
                left: round_keys.len(),
                right: tables.round_count(),
            });
        }

        let permuted = block.permute(tables.initial_permutation())?;
        let (mut left, mut right) = permuted.split_at(tables.half_bits())?;

        for round_key in round_keys {
            let f = RoundFunction::apply(&right, round_key, tables)?;
            let new_right = left.xor(&f)?;
            left = right;
            right = new_right;
        }

        // The last round's halves are concatenated right-first; this
        // un-swap is what makes the construction self-inverting under
        // reversed subkey order.
        let preoutput = right.concat(&left);
        preoutput.permute(tables.final_permutation())
    }
}
