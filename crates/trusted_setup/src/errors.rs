use serialization::SerializationError;

/// The three point vectors that make up a setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Basis {
    G1Monomial,
    G1Lagrange,
    G2Monomial,
}

impl std::fmt::Display for Basis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::G1Monomial => write!(f, "g1_monomial"),
            Self::G1Lagrange => write!(f, "g1_lagrange"),
            Self::G2Monomial => write!(f, "g2_monomial"),
        }
    }
}

/// Errors raised while loading or validating a setup.
#[derive(Debug)]
pub enum SetupError {
    /// The text is not a JSON object with the three hex string arrays.
    InvalidJson(serde_json::Error),
    MissingHexPrefix {
        basis: Basis,
        index: usize,
    },
    InvalidHex {
        basis: Basis,
        index: usize,
        error: hex::FromHexError,
    },
    /// A point failed to decode, or was not in the prime order subgroup.
    InvalidPoint {
        basis: Basis,
        index: usize,
        error: SerializationError,
    },
    WrongNumberOfPoints {
        basis: Basis,
        found: usize,
        expected: usize,
    },
    TooFewPoints {
        basis: Basis,
        found: usize,
        minimum: usize,
    },
    BytesNotMultipleOfPointSize {
        basis: Basis,
        length: usize,
        point_size: usize,
    },
    /// The G1 and G2 powers do not share the same secret, or the Lagrange
    /// basis does not interpolate the monomial one.
    InconsistentSetup,
}

impl From<serde_json::Error> for SetupError {
    fn from(value: serde_json::Error) -> Self {
        Self::InvalidJson(value)
    }
}

impl std::fmt::Display for SetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidJson(error) => write!(f, "could not parse setup json: {error}"),
            Self::MissingHexPrefix { basis, index } => {
                write!(f, "{basis}[{index}] is not prefixed with `0x`")
            }
            Self::InvalidHex {
                basis,
                index,
                error,
            } => write!(f, "{basis}[{index}] is not valid hex: {error}"),
            Self::InvalidPoint {
                basis,
                index,
                error,
            } => write!(f, "{basis}[{index}]: {error}"),
            Self::WrongNumberOfPoints {
                basis,
                found,
                expected,
            } => write!(f, "{basis} has {found} points, expected {expected}"),
            Self::TooFewPoints {
                basis,
                found,
                minimum,
            } => write!(f, "{basis} has {found} points, need at least {minimum}"),
            Self::BytesNotMultipleOfPointSize {
                basis,
                length,
                point_size,
            } => write!(
                f,
                "{basis} has {length} bytes, which is not a multiple of {point_size}"
            ),
            Self::InconsistentSetup => write!(f, "setup points are not consistent"),
        }
    }
}

impl std::error::Error for SetupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidJson(error) => Some(error),
            Self::InvalidHex { error, .. } => Some(error),
            Self::InvalidPoint { error, .. } => Some(error),
            _ => None,
        }
    }
}
