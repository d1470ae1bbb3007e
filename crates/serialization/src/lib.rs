//! Conversions between the fixed-size byte encodings used at the API boundary
//! and the scalar and group types used internally.
//!
//! Decoding is strict: scalars must be canonical and points must be valid,
//! in-subgroup, compressed encodings.

pub mod constants;
mod errors;
pub mod types;

use bls12_381::{G1Point, G2Point, Scalar};
use constants::{
    BYTES_PER_BLOB, BYTES_PER_CELL, BYTES_PER_FIELD_ELEMENT, BYTES_PER_G1_POINT,
    BYTES_PER_G2_POINT, CELLS_PER_EXT_BLOB, FIELD_ELEMENTS_PER_BLOB, FIELD_ELEMENTS_PER_CELL,
};
pub use errors::SerializationError;
use types::{Blob, Cell, CellRef, KZGProof};

fn deserialize_bytes_to_scalars(bytes: &[u8]) -> Result<Vec<Scalar>, SerializationError> {
    if bytes.len() % BYTES_PER_FIELD_ELEMENT != 0 {
        return Err(SerializationError::ScalarHasInvalidLength {
            bytes: bytes.to_vec(),
            length: bytes.len(),
        });
    }

    let num_scalars = bytes.len() / BYTES_PER_FIELD_ELEMENT;
    let mut scalars = Vec::new();
    scalars
        .try_reserve_exact(num_scalars)
        .map_err(|_| SerializationError::AllocationFailure { num_scalars })?;

    for chunk in bytes.chunks_exact(BYTES_PER_FIELD_ELEMENT) {
        scalars.push(deserialize_bytes_to_scalar(chunk)?);
    }
    Ok(scalars)
}

/// Decodes a 32-byte big-endian scalar, rejecting values that are not below the modulus.
pub fn deserialize_bytes_to_scalar(bytes: &[u8]) -> Result<Scalar, SerializationError> {
    let Ok(bytes32) = <&[u8; BYTES_PER_FIELD_ELEMENT]>::try_from(bytes) else {
        return Err(SerializationError::ScalarHasInvalidLength {
            bytes: bytes.to_vec(),
            length: bytes.len(),
        });
    };

    let scalar: Option<Scalar> = Scalar::from_bytes_be(bytes32).into();
    scalar.ok_or_else(|| SerializationError::CouldNotDeserializeScalar {
        bytes: bytes.to_vec(),
    })
}

/// Decodes a blob into its 4096 scalars, keeping the blob's order.
pub fn deserialize_blob_to_scalars(blob: &[u8]) -> Result<Vec<Scalar>, SerializationError> {
    if blob.len() != BYTES_PER_BLOB {
        return Err(SerializationError::BlobHasInvalidLength {
            length: blob.len(),
            expected: BYTES_PER_BLOB,
        });
    }
    deserialize_bytes_to_scalars(blob)
}

pub fn deserialize_cell_to_scalars(cell: &[u8]) -> Result<Vec<Scalar>, SerializationError> {
    if cell.len() != BYTES_PER_CELL {
        return Err(SerializationError::CellHasInvalidLength {
            length: cell.len(),
            expected: BYTES_PER_CELL,
        });
    }
    deserialize_bytes_to_scalars(cell)
}

pub fn deserialize_cells(cells: &[CellRef]) -> Result<Vec<Vec<Scalar>>, SerializationError> {
    cells
        .iter()
        .map(|cell| deserialize_cell_to_scalars(cell.as_slice()))
        .collect()
}

/// Decodes a compressed G1 point, checking that it is on the curve and in the subgroup.
pub fn deserialize_compressed_g1(bytes: &[u8]) -> Result<G1Point, SerializationError> {
    let Ok(bytes48) = <&[u8; BYTES_PER_G1_POINT]>::try_from(bytes) else {
        return Err(SerializationError::G1PointHasInvalidLength {
            bytes: bytes.to_vec(),
            length: bytes.len(),
        });
    };

    let point: Option<G1Point> = G1Point::from_compressed(bytes48).into();
    point.ok_or_else(|| SerializationError::CouldNotDeserializeG1Point {
        bytes: bytes.to_vec(),
    })
}

/// Decodes a compressed G1 point without the subgroup check.
///
/// Only for points from a source that is already trusted, such as a setup file
/// that has been checked before.
pub fn deserialize_compressed_g1_unchecked(bytes: &[u8]) -> Result<G1Point, SerializationError> {
    let Ok(bytes48) = <&[u8; BYTES_PER_G1_POINT]>::try_from(bytes) else {
        return Err(SerializationError::G1PointHasInvalidLength {
            bytes: bytes.to_vec(),
            length: bytes.len(),
        });
    };

    let point: Option<G1Point> = G1Point::from_compressed_unchecked(bytes48).into();
    point.ok_or_else(|| SerializationError::CouldNotDeserializeG1Point {
        bytes: bytes.to_vec(),
    })
}

/// Decodes a compressed G2 point, checking that it is on the curve and in the subgroup.
pub fn deserialize_compressed_g2(bytes: &[u8]) -> Result<G2Point, SerializationError> {
    let Ok(bytes96) = <&[u8; BYTES_PER_G2_POINT]>::try_from(bytes) else {
        return Err(SerializationError::G2PointHasInvalidLength {
            bytes: bytes.to_vec(),
            length: bytes.len(),
        });
    };

    let point: Option<G2Point> = G2Point::from_compressed(bytes96).into();
    point.ok_or_else(|| SerializationError::CouldNotDeserializeG2Point {
        bytes: bytes.to_vec(),
    })
}

pub fn deserialize_compressed_g2_unchecked(bytes: &[u8]) -> Result<G2Point, SerializationError> {
    let Ok(bytes96) = <&[u8; BYTES_PER_G2_POINT]>::try_from(bytes) else {
        return Err(SerializationError::G2PointHasInvalidLength {
            bytes: bytes.to_vec(),
            length: bytes.len(),
        });
    };

    let point: Option<G2Point> = G2Point::from_compressed_unchecked(bytes96).into();
    point.ok_or_else(|| SerializationError::CouldNotDeserializeG2Point {
        bytes: bytes.to_vec(),
    })
}

pub fn serialize_g1_compressed(point: &G1Point) -> [u8; BYTES_PER_G1_POINT] {
    point.to_compressed()
}

/// # Panics
///
/// Panics if there are not exactly `FIELD_ELEMENTS_PER_CELL` scalars.
pub fn serialize_scalars_to_cell(scalars: &[Scalar]) -> Cell {
    assert_eq!(
        scalars.len(),
        FIELD_ELEMENTS_PER_CELL,
        "a cell holds exactly {FIELD_ELEMENTS_PER_CELL} scalars"
    );

    let mut cell = Box::new([0u8; BYTES_PER_CELL]);
    for (chunk, scalar) in cell.chunks_exact_mut(BYTES_PER_FIELD_ELEMENT).zip(scalars) {
        chunk.copy_from_slice(&scalar.to_bytes_be());
    }
    cell
}

/// # Panics
///
/// Panics if there are not exactly `FIELD_ELEMENTS_PER_BLOB` scalars.
pub fn serialize_scalars_to_blob(scalars: &[Scalar]) -> Blob {
    assert_eq!(
        scalars.len(),
        FIELD_ELEMENTS_PER_BLOB,
        "a blob holds exactly {FIELD_ELEMENTS_PER_BLOB} scalars"
    );

    let bytes: Vec<u8> = scalars.iter().flat_map(Scalar::to_bytes_be).collect();
    bytes
        .into_boxed_slice()
        .try_into()
        .expect("infallible: blob has exactly BYTES_PER_BLOB bytes")
}

/// # Panics
///
/// Panics if there are not exactly `CELLS_PER_EXT_BLOB` cosets.
pub fn serialize_cells(coset_evaluations: &[Vec<Scalar>]) -> [Cell; CELLS_PER_EXT_BLOB] {
    let cells: Vec<Cell> = coset_evaluations
        .iter()
        .map(|evaluations| serialize_scalars_to_cell(evaluations))
        .collect();

    cells
        .try_into()
        .unwrap_or_else(|_| panic!("expected {CELLS_PER_EXT_BLOB} cells"))
}

/// # Panics
///
/// Panics if there are not exactly `CELLS_PER_EXT_BLOB` cosets and proofs.
pub fn serialize_cells_and_proofs(
    coset_evaluations: &[Vec<Scalar>],
    proofs: &[G1Point],
) -> ([Cell; CELLS_PER_EXT_BLOB], [KZGProof; CELLS_PER_EXT_BLOB]) {
    let cells = serialize_cells(coset_evaluations);

    let proofs: Vec<KZGProof> = proofs.iter().map(serialize_g1_compressed).collect();
    let proofs = proofs
        .try_into()
        .unwrap_or_else(|_| panic!("expected {CELLS_PER_EXT_BLOB} proofs"));

    (cells, proofs)
}

#[cfg(test)]
mod tests {
    use bls12_381::{traits::*, G1Projective};
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    /// The scalar field modulus, big-endian.
    const MODULUS: [u8; 32] = [
        0x73, 0xed, 0xa7, 0x53, 0x29, 0x9d, 0x7d, 0x48, 0x33, 0x39, 0xd8, 0x08, 0x09, 0xa1, 0xd8,
        0x05, 0x53, 0xbd, 0xa4, 0x02, 0xff, 0xfe, 0x5b, 0xfe, 0xff, 0xff, 0xff, 0xff, 0x00, 0x00,
        0x00, 0x01,
    ];

    #[test]
    fn non_canonical_scalars_are_rejected() {
        let mut below = MODULUS;
        below[31] = 0;
        assert_eq!(deserialize_bytes_to_scalar(&below), Ok(-Scalar::ONE));

        assert!(matches!(
            deserialize_bytes_to_scalar(&MODULUS),
            Err(SerializationError::CouldNotDeserializeScalar { .. })
        ));
        assert!(deserialize_bytes_to_scalar(&[0xff; 32]).is_err());
        assert!(matches!(
            deserialize_bytes_to_scalar(&[0u8; 31]),
            Err(SerializationError::ScalarHasInvalidLength { length: 31, .. })
        ));
    }

    #[test]
    fn blob_lengths() {
        assert!(matches!(
            deserialize_blob_to_scalars(&[0u8; BYTES_PER_BLOB - 1]),
            Err(SerializationError::BlobHasInvalidLength { .. })
        ));

        let scalars = deserialize_blob_to_scalars(&vec![0u8; BYTES_PER_BLOB]).unwrap();
        assert_eq!(scalars.len(), FIELD_ELEMENTS_PER_BLOB);
        assert!(scalars.iter().all(|s| bool::from(s.is_zero())));
    }

    #[test]
    fn blob_and_cell_encodings_preserve_order() {
        let mut rng = StdRng::seed_from_u64(0);
        let scalars: Vec<Scalar> = (0..FIELD_ELEMENTS_PER_BLOB)
            .map(|_| Scalar::random(&mut rng))
            .collect();

        let blob = serialize_scalars_to_blob(&scalars);
        assert_eq!(deserialize_blob_to_scalars(blob.as_slice()).unwrap(), scalars);
        assert_eq!(&blob[32..64], &scalars[1].to_bytes_be());

        let cell = serialize_scalars_to_cell(&scalars[..FIELD_ELEMENTS_PER_CELL]);
        assert_eq!(
            deserialize_cells(&[&*cell]).unwrap(),
            vec![scalars[..FIELD_ELEMENTS_PER_CELL].to_vec()]
        );
    }

    #[test]
    fn g1_points() {
        let point = (G1Projective::generator() * Scalar::from(5u64)).to_affine();
        let bytes = serialize_g1_compressed(&point);
        assert_eq!(deserialize_compressed_g1(&bytes), Ok(point));

        let identity = serialize_g1_compressed(&G1Point::identity());
        assert_eq!(identity[0], 0xc0);
        assert!(identity[1..].iter().all(|b| *b == 0));

        assert!(deserialize_compressed_g1(&[0u8; 48]).is_err());
        assert!(matches!(
            deserialize_compressed_g1(&bytes[..47]),
            Err(SerializationError::G1PointHasInvalidLength { length: 47, .. })
        ));
    }

    #[test]
    fn g2_points() {
        let point = G2Point::generator();
        let bytes = point.to_compressed();
        assert_eq!(deserialize_compressed_g2(&bytes), Ok(point));
        assert_eq!(deserialize_compressed_g2_unchecked(&bytes), Ok(point));
        assert!(matches!(
            deserialize_compressed_g2(&bytes[..95]),
            Err(SerializationError::G2PointHasInvalidLength { .. })
        ));
    }

    #[test]
    #[should_panic(expected = "a cell holds exactly")]
    fn short_cell_panics() {
        let _ = serialize_scalars_to_cell(&[Scalar::ONE; 3]);
    }
}
