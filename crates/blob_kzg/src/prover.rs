use bls12_381::{fixed_base_msm::UsePrecomp, traits::*, Scalar};
use erasure_codes::ReedSolomon;
use kzg_multi_open::{Input, Prover};
use polynomial::{domain::Domain, reverse_bit_order};
use serialization::{
    deserialize_blob_to_scalars, deserialize_cells, serialize_cells, serialize_cells_and_proofs,
    serialize_scalars_to_blob,
};

use crate::{
    constants::{
        CELLS_PER_EXT_BLOB, EXPANSION_FACTOR, FIELD_ELEMENTS_PER_BLOB, FIELD_ELEMENTS_PER_CELL,
        FIELD_ELEMENTS_PER_EXT_BLOB,
    },
    errors::{Error, ProverError},
    recovery::recover_polynomial_coeff,
    trusted_setup::commit_key_from_setup,
    Blob, BlobRef, Cell, CellIndex, CellRef, Context, KZGProof, TrustedSetup,
};

/// State used to compute cells, their proofs, and to recover them.
#[derive(Debug)]
pub(crate) struct ProverContext {
    kzg_multipoint_prover: Prover,
    rs: ReedSolomon,
    blob_domain: Domain,
    extended_blob_domain: Domain,
}

impl ProverContext {
    pub(crate) fn new(trusted_setup: &TrustedSetup, use_precomp: UsePrecomp) -> Self {
        let kzg_multipoint_prover = Prover::new(
            commit_key_from_setup(trusted_setup),
            FIELD_ELEMENTS_PER_BLOB,
            FIELD_ELEMENTS_PER_CELL,
            FIELD_ELEMENTS_PER_EXT_BLOB,
            use_precomp,
        );

        // Every cell is one block: cell k erases the codeword positions
        // congruent to reverse_bits(k) modulo CELLS_PER_EXT_BLOB.
        let rs = ReedSolomon::new(
            FIELD_ELEMENTS_PER_BLOB,
            EXPANSION_FACTOR,
            CELLS_PER_EXT_BLOB,
        );

        Self {
            kzg_multipoint_prover,
            rs,
            blob_domain: Domain::new(FIELD_ELEMENTS_PER_BLOB),
            extended_blob_domain: Domain::new(FIELD_ELEMENTS_PER_EXT_BLOB),
        }
    }
}

impl Context {
    /// Extends the blob into `CELLS_PER_EXT_BLOB` cells and computes a proof for each.
    ///
    /// The first half of the cells, concatenated, is the blob itself.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn compute_cells_and_kzg_proofs(
        &self,
        blob: BlobRef,
    ) -> Result<([Cell; CELLS_PER_EXT_BLOB], [KZGProof; CELLS_PER_EXT_BLOB]), Error> {
        let scalars = deserialize_blob_to_scalars(blob)?;

        let (proofs, cells) = self
            .prover_ctx
            .kzg_multipoint_prover
            .compute_multi_opening_proofs(Input::Data(scalars));

        Ok(serialize_cells_and_proofs(&cells, &proofs))
    }

    /// Extends the blob into `CELLS_PER_EXT_BLOB` cells, without proofs.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn compute_cells(&self, blob: BlobRef) -> Result<[Cell; CELLS_PER_EXT_BLOB], Error> {
        let scalars = deserialize_blob_to_scalars(blob)?;

        let cells = self
            .prover_ctx
            .kzg_multipoint_prover
            .compute_coset_evaluations(Input::Data(scalars));

        Ok(serialize_cells(&cells))
    }

    /// Reassembles the blob from all of its cells, given in order.
    ///
    /// Fails if the cells are not the extension of a blob.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn cells_to_blob(&self, cells: &[CellRef]) -> Result<Blob, Error> {
        if cells.len() != CELLS_PER_EXT_BLOB {
            return Err(ProverError::NumCellsNotEqualToCellsPerExtBlob {
                num_cells: cells.len(),
                expected: CELLS_PER_EXT_BLOB,
            }
            .into());
        }

        let coset_evaluations = deserialize_cells(cells)?;

        let mut extended_blob: Vec<Scalar> = Vec::new();
        extended_blob
            .try_reserve_exact(FIELD_ELEMENTS_PER_EXT_BLOB)
            .map_err(|_| ProverError::AllocationFailure {
                num_scalars: FIELD_ELEMENTS_PER_EXT_BLOB,
            })?;
        for evaluations in coset_evaluations {
            extended_blob.extend(evaluations);
        }
        reverse_bit_order(&mut extended_blob);

        let ctx = &self.prover_ctx;
        let mut polynomial = ctx.extended_blob_domain.ifft_scalars(extended_blob);
        if let Some(highest) = polynomial.iter().rposition(|coeff| !bool::from(coeff.is_zero())) {
            if highest >= FIELD_ELEMENTS_PER_BLOB {
                return Err(ProverError::CellsDoNotEncodeABlob {
                    num_coefficients: highest + 1,
                    max_num_coefficients: FIELD_ELEMENTS_PER_BLOB,
                }
                .into());
            }
        }
        polynomial.truncate(FIELD_ELEMENTS_PER_BLOB);

        let mut blob = ctx.blob_domain.fft_scalars(polynomial);
        reverse_bit_order(&mut blob);

        Ok(serialize_scalars_to_blob(&blob))
    }

    /// Recovers every cell from at least half of them.
    ///
    /// Cells may be given in any order but must not repeat.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn recover_cells(
        &self,
        cell_indices: &[CellIndex],
        cells: &[CellRef],
    ) -> Result<[Cell; CELLS_PER_EXT_BLOB], Error> {
        let polynomial = recover_polynomial_coeff(&self.prover_ctx.rs, cell_indices, cells)?;

        let cells = self
            .prover_ctx
            .kzg_multipoint_prover
            .compute_coset_evaluations(Input::PolyCoeff(polynomial));

        Ok(serialize_cells(&cells))
    }

    /// Recovers every cell from at least half of them and computes all cell proofs.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn recover_cells_and_kzg_proofs(
        &self,
        cell_indices: &[CellIndex],
        cells: &[CellRef],
    ) -> Result<([Cell; CELLS_PER_EXT_BLOB], [KZGProof; CELLS_PER_EXT_BLOB]), Error> {
        let polynomial = recover_polynomial_coeff(&self.prover_ctx.rs, cell_indices, cells)?;

        let (proofs, cells) = self
            .prover_ctx
            .kzg_multipoint_prover
            .compute_multi_opening_proofs(Input::PolyCoeff(polynomial));

        Ok(serialize_cells_and_proofs(&cells, &proofs))
    }
}
