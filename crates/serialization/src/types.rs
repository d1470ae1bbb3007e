use crate::constants::{
    BYTES_PER_BLOB, BYTES_PER_CELL, BYTES_PER_COMMITMENT, BYTES_PER_FIELD_ELEMENT,
    BYTES_PER_G1_POINT,
};

/// A blob handed in by the caller.
pub type BlobRef<'a> = &'a [u8; BYTES_PER_BLOB];

/// A blob produced by the library, only returned by `cells_to_blob`.
pub type Blob = Box<[u8; BYTES_PER_BLOB]>;

/// 48 untrusted bytes that should hold a compressed G1 point: a commitment or a proof.
pub type Bytes48Ref<'a> = &'a [u8; BYTES_PER_G1_POINT];

/// The evaluations of a blob's polynomial over one coset of the extended domain.
///
/// Cells are large, so they are boxed.
pub type Cell = Box<[u8; BYTES_PER_CELL]>;

pub type CellRef<'a> = &'a [u8; BYTES_PER_CELL];

/// Position of a cell in the extended blob, below `CELLS_PER_EXT_BLOB`.
pub type CellIndex = u64;

/// Position of a commitment in a deduplicated list of commitments.
pub type RowIndex = u64;

pub type KZGCommitment = [u8; BYTES_PER_COMMITMENT];

/// A proof for either a single evaluation or a whole cell.
pub type KZGProof = [u8; BYTES_PER_COMMITMENT];

pub type SerializedScalar = [u8; BYTES_PER_FIELD_ELEMENT];

/// The point `z` a polynomial is opened at.
pub type KZGOpeningPoint = SerializedScalar;

/// The value `y = p(z)` of an opening.
pub type KZGOpeningEvaluation = SerializedScalar;
