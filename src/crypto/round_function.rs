use crate::crypto::bit_vector::BitVector;
use crate::crypto::cipher_errors::CipherError;
use crate::crypto::key_schedule::RoundKey;
use crate::crypto::table_set::TableSet;

/// The keyed transformation applied to one half-block each round.
pub struct RoundFunction;

impl RoundFunction {
    /// Expansion, key mixing, substitution, permutation. The expansion
    /// table widens the half by repeating source positions, the round key
    /// is XORed in, each chunk addresses its box by outer-bit pair (row)
    /// and middle bits (column), and the concatenated box outputs are
    /// reordered back down to `half_bits`.
    pub fn apply(
        half: &BitVector,
        round_key: &RoundKey,
        tables: &TableSet,
    ) -> Result<BitVector, CipherError> {
        let expanded = half.permute(tables.expansion_table())?;
        let mixed = expanded.xor(round_key)?;

        let boxes = tables.substitution_boxes();
        if mixed.len() % boxes.len() != 0 {
            return Err(CipherError::BlockSizeMismatch {
                width: mixed.len(),
                boxes: boxes.len(),
            });
        }
        let chunk_bits = mixed.len() / boxes.len();
        let out_bits = tables.box_output_bits();

        let mut substituted = Vec::with_capacity(boxes.len() * out_bits);
        for (i, sbox) in boxes.iter().enumerate() {
            let start = i * chunk_bits;
            let row = ((mixed.bit(start) as usize) << 1) | mixed.bit(start + chunk_bits - 1) as usize;
            let mut column = 0usize;
            for j in 1..chunk_bits - 1 {
                column = (column << 1) | mixed.bit(start + j) as usize;
            }
            let value = sbox[row][column];
            for j in (0..out_bits).rev() {
                substituted.push((value >> j) & 1 != 0);
            }
        }

        let output = BitVector::from_bits(substituted).permute(tables.output_permutation())?;
        if output.len() != tables.half_bits() {
            // Only reachable with a table set that bypassed validation.
            return Err(CipherError::OutputWidthMismatch {
                expected: tables.half_bits(),
                actual: output.len(),
            });
        }
        Ok(output)
    }
}
