/// Errors from decoding untrusted bytes into scalars and points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SerializationError {
    /// The 32 bytes are not the canonical encoding of a scalar, i.e. they are
    /// not below the field modulus.
    CouldNotDeserializeScalar { bytes: Vec<u8> },
    /// The bytes are not a valid compressed point of the G1 subgroup.
    CouldNotDeserializeG1Point { bytes: Vec<u8> },
    /// The bytes are not a valid compressed point of the G2 subgroup.
    CouldNotDeserializeG2Point { bytes: Vec<u8> },
    ScalarHasInvalidLength { bytes: Vec<u8>, length: usize },
    BlobHasInvalidLength { length: usize, expected: usize },
    CellHasInvalidLength { length: usize, expected: usize },
    G1PointHasInvalidLength { bytes: Vec<u8>, length: usize },
    G2PointHasInvalidLength { bytes: Vec<u8>, length: usize },
    /// The buffer for the decoded scalars could not be reserved.
    AllocationFailure { num_scalars: usize },
}

impl std::fmt::Display for SerializationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CouldNotDeserializeScalar { bytes } => {
                write!(f, "non-canonical scalar 0x{}", hex::encode(bytes))
            }
            Self::CouldNotDeserializeG1Point { bytes } => {
                write!(f, "invalid G1 point 0x{}", hex::encode(bytes))
            }
            Self::CouldNotDeserializeG2Point { bytes } => {
                write!(f, "invalid G2 point 0x{}", hex::encode(bytes))
            }
            Self::ScalarHasInvalidLength { bytes, length } => write!(
                f,
                "scalar bytes 0x{} have length {length}, expected a multiple of 32",
                hex::encode(bytes)
            ),
            Self::BlobHasInvalidLength { length, expected } => {
                write!(f, "blob has {length} bytes, expected {expected}")
            }
            Self::CellHasInvalidLength { length, expected } => {
                write!(f, "cell has {length} bytes, expected {expected}")
            }
            Self::G1PointHasInvalidLength { bytes, length } => write!(
                f,
                "G1 point 0x{} has {length} bytes, expected 48",
                hex::encode(bytes)
            ),
            Self::G2PointHasInvalidLength { bytes, length } => write!(
                f,
                "G2 point 0x{} has {length} bytes, expected 96",
                hex::encode(bytes)
            ),
            Self::AllocationFailure { num_scalars } => {
                write!(f, "could not allocate room for {num_scalars} scalars")
            }
        }
    }
}

impl std::error::Error for SerializationError {}
