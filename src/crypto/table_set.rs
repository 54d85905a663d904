use crate::crypto::cipher_errors::CipherError;
use crate::crypto::{des_tables, toy_tables};

/// Raw structural parameters for one cipher instantiation, as authored.
///
/// All index tables use the classical 1-based notation. `TableSet::new`
/// consumes this, validates every constraint once, and freezes the result.
#[derive(Clone, Debug)]
pub struct TableSetParams {
    pub block_bits: usize,
    pub key_bits: usize,
    pub round_count: usize,
    pub left_half_bits: usize,
    pub right_half_bits: usize,
    pub box_output_bits: usize,
    pub initial_permutation: Vec<usize>,
    pub final_permutation: Vec<usize>,
    pub key_permutation1: Vec<usize>,
    pub key_permutation2: Vec<usize>,
    pub shift_schedule: Vec<usize>,
    pub expansion_table: Vec<usize>,
    pub output_permutation: Vec<usize>,
    pub substitution_boxes: Vec<Vec<Vec<u8>>>,
}

/// Validated, immutable bundle of the structural parameters for one
/// variant. Construct once and share; every transform borrows it
/// read-only, so one instance serves any number of concurrent callers.
#[derive(Clone, Debug)]
pub struct TableSet {
    block_bits: usize,
    key_bits: usize,
    half_bits: usize,
    expanded_bits: usize,
    round_key_bits: usize,
    round_count: usize,
    left_half_bits: usize,
    right_half_bits: usize,
    box_output_bits: usize,
    initial_permutation: Vec<usize>,
    final_permutation: Vec<usize>,
    key_permutation1: Vec<usize>,
    key_permutation2: Vec<usize>,
    shift_schedule: Vec<usize>,
    expansion_table: Vec<usize>,
    output_permutation: Vec<usize>,
    substitution_boxes: Vec<Vec<Vec<u8>>>,
}

// A transcription slip in any literal table would silently corrupt every
// transform, so each table is checked here, never per call.
fn check_bijection(name: &str, table: &[usize], domain: usize) -> Result<(), CipherError> {
    if table.len() != domain {
        return Err(CipherError::MalformedTableSet(format!(
            "{} has {} entries, expected {}",
            name,
            table.len(),
            domain
        )));
    }
    check_selection(name, table, domain)
}

fn check_selection(name: &str, table: &[usize], domain: usize) -> Result<(), CipherError> {
    let mut seen = vec![false; domain];
    for &pos in table {
        if pos == 0 || pos > domain {
            return Err(CipherError::MalformedTableSet(format!(
                "{} entry {} outside 1..={}",
                name, pos, domain
            )));
        }
        if seen[pos - 1] {
            return Err(CipherError::MalformedTableSet(format!(
                "{} repeats entry {}",
                name, pos
            )));
        }
        seen[pos - 1] = true;
    }
    Ok(())
}

impl TableSet {
    pub fn new(params: TableSetParams) -> Result<Self, CipherError> {
        let TableSetParams {
            block_bits,
            key_bits,
            round_count,
            left_half_bits,
            right_half_bits,
            box_output_bits,
            initial_permutation,
            final_permutation,
            key_permutation1,
            key_permutation2,
            shift_schedule,
            expansion_table,
            output_permutation,
            substitution_boxes,
        } = params;

        if block_bits == 0 || block_bits % 2 != 0 {
            return Err(CipherError::MalformedTableSet(format!(
                "block width {} is not a positive even number",
                block_bits
            )));
        }
        let half_bits = block_bits / 2;

        check_bijection("initial permutation", &initial_permutation, block_bits)?;
        check_bijection("final permutation", &final_permutation, block_bits)?;

        if key_permutation1.len() != left_half_bits + right_half_bits {
            return Err(CipherError::MalformedTableSet(format!(
                "key permutation 1 has {} entries, expected {} + {}",
                key_permutation1.len(),
                left_half_bits,
                right_half_bits
            )));
        }
        check_selection("key permutation 1", &key_permutation1, key_bits)?;
        check_selection(
            "key permutation 2",
            &key_permutation2,
            left_half_bits + right_half_bits,
        )?;
        let round_key_bits = key_permutation2.len();

        if round_count == 0 {
            return Err(CipherError::MalformedTableSet(
                "round count is zero".into(),
            ));
        }
        if shift_schedule.len() != round_count {
            return Err(CipherError::MalformedTableSet(format!(
                "shift schedule has {} entries for {} rounds",
                shift_schedule.len(),
                round_count
            )));
        }

        // Expansion may repeat source positions; only range is constrained.
        for &pos in &expansion_table {
            if pos == 0 || pos > half_bits {
                return Err(CipherError::MalformedTableSet(format!(
                    "expansion table entry {} outside 1..={}",
                    pos, half_bits
                )));
            }
        }
        let expanded_bits = expansion_table.len();
        if expanded_bits != round_key_bits {
            return Err(CipherError::MalformedTableSet(format!(
                "expansion width {} does not match round-key width {}",
                expanded_bits, round_key_bits
            )));
        }

        let box_count = substitution_boxes.len();
        if box_count == 0 {
            return Err(CipherError::MalformedTableSet(
                "no substitution boxes".into(),
            ));
        }
        if expanded_bits % box_count != 0 {
            return Err(CipherError::MalformedTableSet(format!(
                "expanded width {} does not divide into {} boxes",
                expanded_bits, box_count
            )));
        }
        let chunk_bits = expanded_bits / box_count;
        if chunk_bits < 3 {
            return Err(CipherError::MalformedTableSet(format!(
                "{}-bit chunks leave no middle bits for box columns",
                chunk_bits
            )));
        }
        // Rows are addressed by the outer-bit pair, columns by the middle
        // bits, so the address domain exactly matches the chunk width and
        // out-of-range lookups cannot occur at transform time.
        let columns = 1usize << (chunk_bits - 2);
        for (i, sbox) in substitution_boxes.iter().enumerate() {
            if sbox.len() != 4 {
                return Err(CipherError::MalformedTableSet(format!(
                    "box {} has {} rows, expected 4",
                    i + 1,
                    sbox.len()
                )));
            }
            for (r, row) in sbox.iter().enumerate() {
                if row.len() != columns {
                    return Err(CipherError::MalformedTableSet(format!(
                        "box {} row {} has {} columns, expected {}",
                        i + 1,
                        r,
                        row.len(),
                        columns
                    )));
                }
                for &entry in row {
                    if (entry as usize) >= (1usize << box_output_bits) {
                        return Err(CipherError::MalformedTableSet(format!(
                            "box {} entry {} does not fit in {} bits",
                            i + 1,
                            entry,
                            box_output_bits
                        )));
                    }
                }
            }
        }

        if output_permutation.len() != half_bits {
            return Err(CipherError::MalformedTableSet(format!(
                "output permutation has {} entries, expected {}",
                output_permutation.len(),
                half_bits
            )));
        }
        check_selection(
            "output permutation",
            &output_permutation,
            box_count * box_output_bits,
        )?;

        log::debug!(
            "validated table set: {}-bit blocks, {}-bit keys, {} rounds, {} boxes",
            block_bits,
            key_bits,
            round_count,
            box_count
        );

        Ok(Self {
            block_bits,
            key_bits,
            half_bits,
            expanded_bits,
            round_key_bits,
            round_count,
            left_half_bits,
            right_half_bits,
            box_output_bits,
            initial_permutation,
            final_permutation,
            key_permutation1,
            key_permutation2,
            shift_schedule,
            expansion_table,
            output_permutation,
            substitution_boxes,
        })
    }

    /// The classical 64-bit, 16-round configuration.
    pub fn full64() -> Self {
        let params = TableSetParams {
            block_bits: 64,
            key_bits: 64,
            round_count: 16,
            left_half_bits: 28,
            right_half_bits: 28,
            box_output_bits: 4,
            initial_permutation: des_tables::IP.to_vec(),
            final_permutation: des_tables::FP.to_vec(),
            key_permutation1: des_tables::PC1.to_vec(),
            key_permutation2: des_tables::PC2.to_vec(),
            shift_schedule: des_tables::SHIFT_SCHEDULE.to_vec(),
            expansion_table: des_tables::E.to_vec(),
            output_permutation: des_tables::P.to_vec(),
            substitution_boxes: des_tables::S_BOXES
                .iter()
                .map(|sbox| sbox.iter().map(|row| row.to_vec()).collect())
                .collect(),
        };
        Self::new(params).expect("the classical tables are well formed")
    }

    /// The single-round 8-bit illustrative configuration.
    pub fn reduced8() -> Self {
        let params = TableSetParams {
            block_bits: 8,
            key_bits: 8,
            round_count: 1,
            left_half_bits: 4,
            right_half_bits: 4,
            box_output_bits: 2,
            initial_permutation: toy_tables::IP.to_vec(),
            final_permutation: toy_tables::FP.to_vec(),
            key_permutation1: toy_tables::PC1.to_vec(),
            key_permutation2: toy_tables::PC2.to_vec(),
            shift_schedule: toy_tables::SHIFT_SCHEDULE.to_vec(),
            expansion_table: toy_tables::E.to_vec(),
            output_permutation: toy_tables::P4.to_vec(),
            substitution_boxes: toy_tables::S_BOXES
                .iter()
                .map(|sbox| sbox.iter().map(|row| row.to_vec()).collect())
                .collect(),
        };
        Self::new(params).expect("the toy tables are well formed")
    }

    pub fn block_bits(&self) -> usize {
        self.block_bits
    }

    pub fn key_bits(&self) -> usize {
        self.key_bits
    }

    pub fn half_bits(&self) -> usize {
        self.half_bits
    }

    pub fn expanded_bits(&self) -> usize {
        self.expanded_bits
    }

    pub fn round_key_bits(&self) -> usize {
        self.round_key_bits
    }

    pub fn round_count(&self) -> usize {
        self.round_count
    }

    pub fn left_half_bits(&self) -> usize {
        self.left_half_bits
    }

    pub fn right_half_bits(&self) -> usize {
        self.right_half_bits
    }

    pub fn box_output_bits(&self) -> usize {
        self.box_output_bits
    }

    pub fn initial_permutation(&self) -> &[usize] {
        &self.initial_permutation
    }

    pub fn final_permutation(&self) -> &[usize] {
        &self.final_permutation
    }

    pub fn key_permutation1(&self) -> &[usize] {
        &self.key_permutation1
    }

    pub fn key_permutation2(&self) -> &[usize] {
        &self.key_permutation2
    }

    pub fn shift_schedule(&self) -> &[usize] {
        &self.shift_schedule
    }

    pub fn expansion_table(&self) -> &[usize] {
        &self.expansion_table
    }

    pub fn output_permutation(&self) -> &[usize] {
        &self.output_permutation
    }

    pub fn substitution_boxes(&self) -> &[Vec<Vec<u8>>] {
        &self.substitution_boxes
    }
}
