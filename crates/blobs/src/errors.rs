pub use kzg_single_open::VerifierError;
pub use serialization::SerializationError;

/// Coarse classification of an [`Error`], for callers that only need to know
/// who is at fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed malformed or inconsistent input.
    BadArguments,
    /// An invariant of the library did not hold.
    InternalError,
    /// A working buffer could not be allocated.
    AllocationFailure,
}

/// Errors returned by the blob commitment and proof methods.
#[derive(Debug)]
pub enum Error {
    /// An input could not be decoded into a scalar or a point.
    Serialization(SerializationError),
    /// Error encountered during verification of a blob proof.
    Verifier(VerifierError),
    BatchVerificationInputsMustHaveSameLength {
        blobs_len: usize,
        commitments_len: usize,
        proofs_len: usize,
    },
}

impl Error {
    /// Returns true if the error was raised because a proof did not verify.
    ///
    /// The verification methods report a failed check as `Ok(false)`, so this
    /// only matters for errors coming from the lower-level verifier.
    pub const fn is_proof_invalid(&self) -> bool {
        matches!(self, Self::Verifier(VerifierError::InvalidProof))
    }

    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Serialization(SerializationError::AllocationFailure { .. }) => {
                ErrorKind::AllocationFailure
            }
            Self::Serialization(_)
            | Self::Verifier(_)
            | Self::BatchVerificationInputsMustHaveSameLength { .. } => ErrorKind::BadArguments,
        }
    }
}

impl From<VerifierError> for Error {
    fn from(value: VerifierError) -> Self {
        Self::Verifier(value)
    }
}

impl From<SerializationError> for Error {
    fn from(value: SerializationError) -> Self {
        Self::Serialization(value)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Serialization(error) => write!(f, "{error}"),
            Self::Verifier(error) => write!(f, "{error}"),
            Self::BatchVerificationInputsMustHaveSameLength {
                blobs_len,
                commitments_len,
                proofs_len,
            } => write!(
                f,
                "batch has {blobs_len} blobs, {commitments_len} commitments and {proofs_len} proofs"
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Serialization(error) => Some(error),
            Self::Verifier(error) => Some(error),
            Self::BatchVerificationInputsMustHaveSameLength { .. } => None,
        }
    }
}
