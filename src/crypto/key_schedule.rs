use crate::crypto::bit_vector::BitVector;
use crate::crypto::cipher_errors::CipherError;
use crate::crypto::table_set::TableSet;

/// One per-round subkey, `round_key_bits` wide.
pub type RoundKey = BitVector;

/// Derives the ordered per-round subkeys from one master key.
pub struct KeySchedule;

impl KeySchedule {
    /// Pure function of `(master_key, tables)`: the first choice
    /// permutation drops the unused key bits and splits the rest into the
    /// `(C, D)` halves, then each round rotates the halves it inherited
    /// from the previous round and compresses them through the second
    /// choice permutation.
    pub fn derive_round_keys(
        master_key: &BitVector,
        tables: &TableSet,
    ) -> Result<Vec<RoundKey>, CipherError> {
        if master_key.len() != tables.key_bits() {
            return Err(CipherError::InvalidKeyLength {
                expected: tables.key_bits(),
                actual: master_key.len(),
            });
        }

        let permuted = master_key.permute(tables.key_permutation1())?;
        let (mut c, mut d) = permuted.split_at(tables.left_half_bits())?;

        let mut round_keys = Vec::with_capacity(tables.round_count());
        for &shift in tables.shift_schedule() {
            c = c.rotate_left(shift);
            d = d.rotate_left(shift);
            let cd = c.concat(&d);
            round_keys.push(cd.permute(tables.key_permutation2())?);
        }
        Ok(round_keys)
    }
}
