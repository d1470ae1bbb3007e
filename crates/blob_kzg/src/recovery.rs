use std::collections::HashSet;

use erasure_codes::{BlockErasures, ReedSolomon};
use kzg_multi_open::recover_evaluations_in_domain_order;
use polynomial::poly_coeff::PolyCoeff;
use serialization::deserialize_cells;

use crate::{
    constants::{CELLS_PER_EXT_BLOB, EXPANSION_FACTOR, FIELD_ELEMENTS_PER_EXT_BLOB},
    errors::{Error, RecoveryError},
    CellIndex, CellRef,
};

/// Recovers the blob polynomial, in coefficient form, from a subset of its cells.
pub(crate) fn recover_polynomial_coeff(
    rs: &ReedSolomon,
    cell_indices: &[CellIndex],
    cells: &[CellRef],
) -> Result<PolyCoeff, Error> {
    validate_recovery_inputs(cell_indices, cells)?;

    let coset_evaluations = deserialize_cells(cells)?;
    let cell_indices: Vec<usize> = cell_indices.iter().map(|&index| index as usize).collect();

    // Lay the cells out over the extended domain in natural order. The
    // returned residues say which positions, modulo CELLS_PER_EXT_BLOB, each
    // cell filled in.
    let (present_residues, codeword) = recover_evaluations_in_domain_order(
        FIELD_ELEMENTS_PER_EXT_BLOB,
        &cell_indices,
        &coset_evaluations,
    )
    // Validation guarantees a non-empty list of in-range indices and
    // deserialization guarantees equally sized cells.
    .expect("infallible: could not recover evaluations in domain order");

    let missing_residues = find_missing_residues(&present_residues);

    let polynomial = rs.recover_polynomial_coefficient(codeword, BlockErasures(missing_residues))?;

    Ok(polynomial)
}

fn find_missing_residues(present_residues: &[usize]) -> Vec<usize> {
    let present: HashSet<_> = present_residues.iter().copied().collect();

    (0..CELLS_PER_EXT_BLOB)
        .filter(|residue| !present.contains(residue))
        .collect()
}

/// Checks that the cells can be used for recovery:
/// - there is one index per cell,
/// - every index is below `CELLS_PER_EXT_BLOB` and appears once,
/// - there are between `CELLS_PER_EXT_BLOB / EXPANSION_FACTOR` and
///   `CELLS_PER_EXT_BLOB` cells.
pub(crate) fn validate_recovery_inputs(
    cell_indices: &[CellIndex],
    cells: &[CellRef],
) -> Result<(), RecoveryError> {
    if cell_indices.len() != cells.len() {
        return Err(RecoveryError::NumCellIndicesNotEqualToNumCells {
            num_cell_indices: cell_indices.len(),
            num_cells: cells.len(),
        });
    }

    let mut seen = HashSet::with_capacity(cell_indices.len());
    for &cell_index in cell_indices {
        if cell_index >= CELLS_PER_EXT_BLOB as u64 {
            return Err(RecoveryError::CellIndexOutOfRange {
                cell_index,
                max_number_of_cells: CELLS_PER_EXT_BLOB as u64,
            });
        }
        if !seen.insert(cell_index) {
            return Err(RecoveryError::DuplicateCellIndex { cell_index });
        }
    }

    if cell_indices.len() < CELLS_PER_EXT_BLOB / EXPANSION_FACTOR {
        return Err(RecoveryError::NotEnoughCellsToReconstruct {
            num_cells_received: cell_indices.len(),
            min_cells_needed: CELLS_PER_EXT_BLOB / EXPANSION_FACTOR,
        });
    }

    // Unreachable once indices are unique and in range.
    if cell_indices.len() > CELLS_PER_EXT_BLOB {
        return Err(RecoveryError::TooManyCellsReceived {
            num_cells_received: cell_indices.len(),
            max_cells_needed: CELLS_PER_EXT_BLOB,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::BYTES_PER_CELL;

    static ZERO_CELL: [u8; BYTES_PER_CELL] = [0u8; BYTES_PER_CELL];

    fn inputs(indices: impl IntoIterator<Item = u64>) -> (Vec<CellIndex>, Vec<CellRef<'static>>) {
        let indices: Vec<CellIndex> = indices.into_iter().collect();
        let cells = vec![&ZERO_CELL; indices.len()];
        (indices, cells)
    }

    #[test]
    fn half_of_the_cells_in_any_order_is_enough() {
        let (indices, cells) = inputs((0..CELLS_PER_EXT_BLOB as u64 / 2).rev());
        assert!(validate_recovery_inputs(&indices, &cells).is_ok());

        let (indices, cells) = inputs(0..CELLS_PER_EXT_BLOB as u64);
        assert!(validate_recovery_inputs(&indices, &cells).is_ok());
    }

    #[test]
    fn mismatched_lengths() {
        let (mut indices, cells) = inputs(0..64);
        indices.pop();
        let err = validate_recovery_inputs(&indices, &cells).unwrap_err();
        assert!(matches!(
            err,
            RecoveryError::NumCellIndicesNotEqualToNumCells {
                num_cell_indices: 63,
                num_cells: 64,
            }
        ));
    }

    #[test]
    fn out_of_range_index() {
        let (mut indices, cells) = inputs(0..64);
        indices[10] = CELLS_PER_EXT_BLOB as u64;
        let err = validate_recovery_inputs(&indices, &cells).unwrap_err();
        assert!(matches!(
            err,
            RecoveryError::CellIndexOutOfRange { cell_index: 128, .. }
        ));
    }

    #[test]
    fn duplicate_index() {
        let (mut indices, cells) = inputs(0..65);
        indices[64] = 3;
        let err = validate_recovery_inputs(&indices, &cells).unwrap_err();
        assert!(matches!(
            err,
            RecoveryError::DuplicateCellIndex { cell_index: 3 }
        ));
    }

    #[test]
    fn not_enough_cells() {
        for indices in [0..0, 0..63] {
            let (indices, cells) = inputs(indices);
            let err = validate_recovery_inputs(&indices, &cells).unwrap_err();
            assert!(matches!(
                err,
                RecoveryError::NotEnoughCellsToReconstruct {
                    min_cells_needed: 64,
                    ..
                }
            ));
        }
    }

    #[test]
    fn missing_residues_complement_the_present_ones() {
        let present = [0, 5, 127];
        let missing = find_missing_residues(&present);
        assert_eq!(missing.len(), CELLS_PER_EXT_BLOB - present.len());
        assert!(present.iter().all(|residue| !missing.contains(residue)));
    }
}
