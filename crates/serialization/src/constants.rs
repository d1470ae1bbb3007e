/// Number of bytes of a serialized scalar.
pub const BYTES_PER_FIELD_ELEMENT: usize = 32;

/// Number of bytes of a compressed G1 point.
pub const BYTES_PER_G1_POINT: usize = 48;

/// Number of bytes of a compressed G2 point.
pub const BYTES_PER_G2_POINT: usize = 96;

pub const BYTES_PER_COMMITMENT: usize = BYTES_PER_G1_POINT;

pub const FIELD_ELEMENTS_PER_BLOB: usize = 4096;

pub const BYTES_PER_BLOB: usize = FIELD_ELEMENTS_PER_BLOB * BYTES_PER_FIELD_ELEMENT;

/// The extended blob is the blob's polynomial evaluated over twice as many points.
pub const EXPANSION_FACTOR: usize = 2;

pub const FIELD_ELEMENTS_PER_EXT_BLOB: usize = EXPANSION_FACTOR * FIELD_ELEMENTS_PER_BLOB;

pub const FIELD_ELEMENTS_PER_CELL: usize = 64;

pub const BYTES_PER_CELL: usize = FIELD_ELEMENTS_PER_CELL * BYTES_PER_FIELD_ELEMENT;

pub const CELLS_PER_EXT_BLOB: usize = FIELD_ELEMENTS_PER_EXT_BLOB / FIELD_ELEMENTS_PER_CELL;

/// Number of G2 points the setup must provide, `[τ^i]₂` for `i <= FIELD_ELEMENTS_PER_CELL`.
pub const NUM_G2_POINTS: usize = FIELD_ELEMENTS_PER_CELL + 1;
