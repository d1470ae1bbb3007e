/// Errors that can occur during Reed-Solomon encoding or erasure recovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RSError {
    /// The polynomial handed to `encode` has more coefficients than the code allows.
    PolynomialHasTooManyCoefficients {
        num_coefficients: usize,
        max_num_coefficients: usize,
    },
    /// The decoded polynomial has non-zero coefficients past the degree bound,
    /// so the received codeword is not a codeword.
    PolynomialHasInvalidLength {
        num_coefficients: usize,
        expected_num_coefficients: usize,
    },
    /// More erasures than the redundancy of the code can correct.
    TooManyBlockErasures {
        num_block_erasures: usize,
        max_num_block_erasures_accepted: usize,
    },
    /// A block offset is not smaller than the block size.
    InvalidBlockIndex {
        block_index: usize,
        block_size: usize,
    },
    /// The same block offset was listed as erased twice.
    DuplicateBlockIndex { block_index: usize },
    /// The codeword does not have `poly_len * expansion_factor` symbols.
    CodewordHasInvalidLength { length: usize, expected: usize },
}

impl std::fmt::Display for RSError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PolynomialHasTooManyCoefficients {
                num_coefficients,
                max_num_coefficients,
            } => write!(
                f,
                "polynomial has {num_coefficients} coefficients, at most {max_num_coefficients} are allowed"
            ),
            Self::PolynomialHasInvalidLength {
                num_coefficients,
                expected_num_coefficients,
            } => write!(
                f,
                "recovered polynomial has {num_coefficients} coefficients, expected at most {expected_num_coefficients}"
            ),
            Self::TooManyBlockErasures {
                num_block_erasures,
                max_num_block_erasures_accepted,
            } => write!(
                f,
                "{num_block_erasures} block erasures given, at most {max_num_block_erasures_accepted} can be corrected"
            ),
            Self::InvalidBlockIndex {
                block_index,
                block_size,
            } => write!(f, "block index {block_index} is not below the block size {block_size}"),
            Self::DuplicateBlockIndex { block_index } => {
                write!(f, "block index {block_index} was erased more than once")
            }
            Self::CodewordHasInvalidLength { length, expected } => {
                write!(f, "codeword has {length} symbols, expected {expected}")
            }
        }
    }
}

impl std::error::Error for RSError {}
