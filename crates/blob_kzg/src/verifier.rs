use std::collections::HashMap;

use kzg_multi_open::{Verifier, VerifierError as MultiOpenVerifierError};
use maybe_rayon::prelude::*;
use serialization::{deserialize_cell_to_scalars, deserialize_compressed_g1};

use crate::{
    constants::{CELLS_PER_EXT_BLOB, FIELD_ELEMENTS_PER_EXT_BLOB},
    errors::{Error, VerifierError},
    trusted_setup::verification_key_from_setup,
    Bytes48Ref, CellIndex, CellRef, Context, RowIndex, TrustedSetup,
};

/// State used to verify cell proofs.
#[derive(Debug)]
pub(crate) struct VerifierContext {
    kzg_multipoint_verifier: Verifier,
}

impl VerifierContext {
    pub(crate) fn new(trusted_setup: &TrustedSetup) -> Self {
        Self {
            kzg_multipoint_verifier: Verifier::new(
                verification_key_from_setup(trusted_setup),
                FIELD_ELEMENTS_PER_EXT_BLOB,
                CELLS_PER_EXT_BLOB,
            ),
        }
    }
}

/// Deduplicates `input`, returning the distinct items in order of first
/// appearance and, for every original item, the position of its copy.
fn deduplicate_with_indices<T: Eq + std::hash::Hash + Clone>(input: &[T]) -> (Vec<T>, Vec<u64>) {
    let mut unique = Vec::new();
    let mut positions = HashMap::new();

    let indices = input
        .iter()
        .map(|item| {
            *positions.entry(item.clone()).or_insert_with(|| {
                unique.push(item.clone());
                unique.len() - 1
            }) as u64
        })
        .collect();

    (unique, indices)
}

impl Context {
    /// Checks the proof for a single cell.
    pub fn verify_cell_kzg_proof(
        &self,
        commitment: Bytes48Ref,
        cell_index: CellIndex,
        cell: CellRef,
        proof: Bytes48Ref,
    ) -> Result<bool, Error> {
        self.verify_cell_kzg_proof_batch(&[commitment], &[0], &[cell_index], &[cell], &[proof])
    }

    /// Checks that every `cells[i]` is cell `cell_indices[i]` of the blob committed
    /// to in `commitments[row_indices[i]]`, with one pairing check for the batch.
    ///
    /// An empty batch is valid.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip_all, fields(batch_size = cells.len()))
    )]
    pub fn verify_cell_kzg_proof_batch(
        &self,
        commitments: &[Bytes48Ref],
        row_indices: &[RowIndex],
        cell_indices: &[CellIndex],
        cells: &[CellRef],
        proofs: &[Bytes48Ref],
    ) -> Result<bool, Error> {
        validation::verify_cell_kzg_proof_batch(
            commitments,
            row_indices,
            cell_indices,
            cells,
            proofs,
        )?;

        if cells.is_empty() {
            return Ok(true);
        }

        let commitments_g1 = commitments
            .iter()
            .map(|commitment| deserialize_compressed_g1(*commitment))
            .collect::<Result<Vec<_>, _>>()?;
        let proofs_g1 = proofs
            .iter()
            .map(|proof| deserialize_compressed_g1(*proof))
            .collect::<Result<Vec<_>, _>>()?;
        let coset_evals = cells
            .maybe_into_par_iter()
            .map(|cell| deserialize_cell_to_scalars(cell.as_slice()))
            .collect::<Result<Vec<_>, _>>()?;

        let verifier = &self.verifier_ctx.kzg_multipoint_verifier;
        let result = verifier.verify_multi_opening(
            &commitments_g1,
            row_indices,
            cell_indices,
            &coset_evals,
            &proofs_g1,
        );

        match result {
            Ok(()) => Ok(true),
            Err(MultiOpenVerifierError::InvalidProof) => Ok(false),
            Err(err) => Err(VerifierError::from(err).into()),
        }
    }

    /// Batch verification where every cell comes with its own commitment.
    ///
    /// Cells of the same blob repeat the same commitment; the commitments are
    /// deduplicated into rows before verifying.
    pub fn verify_cell_kzg_proof_batch_deduplicated(
        &self,
        commitments_per_cell: &[Bytes48Ref],
        cell_indices: &[CellIndex],
        cells: &[CellRef],
        proofs: &[Bytes48Ref],
    ) -> Result<bool, Error> {
        let (commitments, row_indices) = deduplicate_with_indices(commitments_per_cell);

        self.verify_cell_kzg_proof_batch(&commitments, &row_indices, cell_indices, cells, proofs)
    }
}

mod validation {
    use crate::{
        constants::CELLS_PER_EXT_BLOB, errors::VerifierError, Bytes48Ref, CellIndex, CellRef,
        RowIndex,
    };

    /// Validation logic for `verify_cell_kzg_proof_batch`
    pub(super) fn verify_cell_kzg_proof_batch(
        commitments: &[Bytes48Ref],
        row_indices: &[RowIndex],
        cell_indices: &[CellIndex],
        cells: &[CellRef],
        proofs: &[Bytes48Ref],
    ) -> Result<(), VerifierError> {
        let same_length = (row_indices.len() == cell_indices.len())
            & (row_indices.len() == cells.len())
            & (row_indices.len() == proofs.len());
        if !same_length {
            return Err(VerifierError::BatchVerificationInputsMustHaveSameLength {
                commitment_indices_len: row_indices.len(),
                cell_indices_len: cell_indices.len(),
                cells_len: cells.len(),
                proofs_len: proofs.len(),
            });
        }

        for &row_index in row_indices {
            if row_index >= commitments.len() as u64 {
                return Err(VerifierError::InvalidCommitmentIndex {
                    commitment_index: row_index,
                    max_number_of_commitments: commitments.len() as u64,
                });
            }
        }

        for &cell_index in cell_indices {
            if cell_index >= CELLS_PER_EXT_BLOB as u64 {
                return Err(VerifierError::CellIndexOutOfRange {
                    cell_index,
                    max_number_of_cells: CELLS_PER_EXT_BLOB as u64,
                });
            }
        }

        Ok(())
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::constants::BYTES_PER_CELL;

        static CELL: [u8; BYTES_PER_CELL] = [0u8; BYTES_PER_CELL];
        static POINT: [u8; 48] = [0u8; 48];

        fn validate(
            num_commitments: usize,
            row_indices: &[RowIndex],
            cell_indices: &[CellIndex],
            num_cells: usize,
        ) -> Result<(), VerifierError> {
            let commitments = vec![&POINT; num_commitments];
            let cells = vec![&CELL; num_cells];
            let proofs = vec![&POINT; num_cells];
            verify_cell_kzg_proof_batch(&commitments, row_indices, cell_indices, &cells, &proofs)
        }

        #[test]
        fn accepts_consistent_inputs() {
            assert!(validate(1, &[0, 0], &[0, 127], 2).is_ok());
            assert!(validate(0, &[], &[], 0).is_ok());
        }

        #[test]
        fn rejects_inconsistent_inputs() {
            let err = validate(1, &[0], &[0, 1], 2).unwrap_err();
            assert!(matches!(
                err,
                VerifierError::BatchVerificationInputsMustHaveSameLength { .. }
            ));

            let err = validate(1, &[1], &[0], 1).unwrap_err();
            assert!(matches!(
                err,
                VerifierError::InvalidCommitmentIndex {
                    commitment_index: 1,
                    max_number_of_commitments: 1,
                }
            ));

            let err = validate(1, &[0], &[128], 1).unwrap_err();
            assert!(matches!(
                err,
                VerifierError::CellIndexOutOfRange {
                    cell_index: 128,
                    ..
                }
            ));
        }
    }
}
