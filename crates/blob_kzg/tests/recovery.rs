mod common;

use blob_kzg::{
    constants::{BYTES_PER_FIELD_ELEMENT, CELLS_PER_EXT_BLOB},
    CellIndex, CellRef, Error, ErrorKind, RecoveryError,
};
use bls12_381::{traits::*, Scalar};
use common::{context, random_blob};
use erasure_codes::RSError;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

fn shuffled_half(seed: u64) -> Vec<CellIndex> {
    let mut indices: Vec<CellIndex> = (0..CELLS_PER_EXT_BLOB as u64).collect();
    indices.shuffle(&mut StdRng::seed_from_u64(seed));
    indices.truncate(CELLS_PER_EXT_BLOB / 2);
    indices
}

#[test]
fn any_half_of_the_cells_recovers_everything() {
    let ctx = context();
    let blob = random_blob(1);
    let (cells, proofs) = ctx.compute_cells_and_kzg_proofs(&blob).unwrap();

    for seed in 0..3 {
        let indices = shuffled_half(seed);
        let subset: Vec<CellRef> = indices.iter().map(|&i| &*cells[i as usize]).collect();

        let (recovered_cells, recovered_proofs) =
            ctx.recover_cells_and_kzg_proofs(&indices, &subset).unwrap();
        assert_eq!(recovered_cells, cells);
        assert_eq!(recovered_proofs, proofs);

        assert_eq!(ctx.recover_cells(&indices, &subset).unwrap(), cells);
    }
}

#[test]
fn recovering_only_the_extension_gives_back_the_blob() {
    let ctx = context();
    let blob = random_blob(2);
    let cells = ctx.compute_cells(&blob).unwrap();

    let half = CELLS_PER_EXT_BLOB as u64 / 2;
    let indices: Vec<CellIndex> = (half..CELLS_PER_EXT_BLOB as u64).collect();
    let subset: Vec<CellRef> = indices.iter().map(|&i| &*cells[i as usize]).collect();

    let recovered = ctx.recover_cells(&indices, &subset).unwrap();
    let recovered_refs: Vec<CellRef> = recovered.iter().map(|cell| &**cell).collect();
    assert_eq!(ctx.cells_to_blob(&recovered_refs).unwrap(), blob);
}

#[test]
fn all_cells_are_returned_unchanged() {
    let ctx = context();
    let cells = ctx.compute_cells(&random_blob(3)).unwrap();

    let indices: Vec<CellIndex> = (0..CELLS_PER_EXT_BLOB as u64).rev().collect();
    let subset: Vec<CellRef> = indices.iter().map(|&i| &*cells[i as usize]).collect();

    assert_eq!(ctx.recover_cells(&indices, &subset).unwrap(), cells);
}

#[test]
fn too_few_cells_cannot_be_recovered() {
    let ctx = context();
    let cells = ctx.compute_cells(&random_blob(4)).unwrap();

    let mut indices = shuffled_half(7);
    indices.pop();
    let subset: Vec<CellRef> = indices.iter().map(|&i| &*cells[i as usize]).collect();

    let err = ctx.recover_cells_and_kzg_proofs(&indices, &subset).unwrap_err();
    assert!(matches!(
        err,
        Error::Recovery(RecoveryError::NotEnoughCellsToReconstruct { .. })
    ));
    assert_eq!(err.kind(), ErrorKind::BadArguments);
}

#[test]
fn duplicate_and_out_of_range_indices_are_rejected() {
    let ctx = context();
    let cells = ctx.compute_cells(&random_blob(5)).unwrap();

    let mut indices = shuffled_half(8);
    indices[1] = indices[0];
    let subset: Vec<CellRef> = indices.iter().map(|&i| &*cells[i as usize]).collect();
    let err = ctx.recover_cells(&indices, &subset).unwrap_err();
    assert!(matches!(
        err,
        Error::Recovery(RecoveryError::DuplicateCellIndex { .. })
    ));

    let mut indices = shuffled_half(9);
    let subset: Vec<CellRef> = indices.iter().map(|&i| &*cells[i as usize]).collect();
    indices[0] = CELLS_PER_EXT_BLOB as u64;
    let err = ctx.recover_cells(&indices, &subset).unwrap_err();
    assert!(matches!(
        err,
        Error::Recovery(RecoveryError::CellIndexOutOfRange { .. })
    ));
}

#[test]
fn inconsistent_cells_are_an_internal_error() {
    let ctx = context();
    let mut cells = ctx.compute_cells(&random_blob(6)).unwrap();

    // Shift the first field element of cell 3 by one.
    let corrupted = &mut cells[3];
    let mut bytes = [0u8; BYTES_PER_FIELD_ELEMENT];
    bytes.copy_from_slice(&corrupted[..BYTES_PER_FIELD_ELEMENT]);
    let shifted = Scalar::from_bytes_be(&bytes).unwrap() + Scalar::ONE;
    corrupted[..BYTES_PER_FIELD_ELEMENT].copy_from_slice(&shifted.to_bytes_be());

    // One cell more than needed, so the corruption cannot hide in an erasure.
    let indices: Vec<CellIndex> = (0..CELLS_PER_EXT_BLOB as u64 / 2 + 1).collect();
    let subset: Vec<CellRef> = indices.iter().map(|&i| &*cells[i as usize]).collect();

    let err = ctx.recover_cells(&indices, &subset).unwrap_err();
    assert!(matches!(
        err,
        Error::Recovery(RecoveryError::ReedSolomon(
            RSError::PolynomialHasInvalidLength { .. }
        ))
    ));
    assert_eq!(err.kind(), ErrorKind::InternalError);
}
