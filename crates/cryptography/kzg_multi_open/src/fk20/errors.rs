/// Errors returned when verifying multi-point openings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifierError {
    /// The pairing check did not hold.
    InvalidProof,
    BatchVerificationInputsMustHaveSameLength {
        commitment_indices_len: usize,
        coset_indices_len: usize,
        coset_evaluations_len: usize,
        proofs_len: usize,
    },
    InvalidCosetIndex {
        coset_index: u64,
        num_cosets: usize,
    },
    InvalidCommitmentIndex {
        commitment_index: u64,
        num_commitments: usize,
    },
    CosetEvaluationsHaveInvalidLength {
        length: usize,
        expected: usize,
    },
}

impl std::fmt::Display for VerifierError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidProof => write!(f, "invalid proof"),
            Self::BatchVerificationInputsMustHaveSameLength {
                commitment_indices_len,
                coset_indices_len,
                coset_evaluations_len,
                proofs_len,
            } => write!(
                f,
                "batch inputs have different lengths: {commitment_indices_len} commitment indices, \
                 {coset_indices_len} coset indices, {coset_evaluations_len} coset evaluations, {proofs_len} proofs"
            ),
            Self::InvalidCosetIndex {
                coset_index,
                num_cosets,
            } => write!(f, "coset index {coset_index} is out of range, there are {num_cosets} cosets"),
            Self::InvalidCommitmentIndex {
                commitment_index,
                num_commitments,
            } => write!(
                f,
                "commitment index {commitment_index} is out of range, there are {num_commitments} commitments"
            ),
            Self::CosetEvaluationsHaveInvalidLength { length, expected } => {
                write!(f, "coset has {length} evaluations, expected {expected}")
            }
        }
    }
}

impl std::error::Error for VerifierError {}
