//! Loading of the powers-of-tau setup.
//!
//! A setup is made of 4096 G1 powers of the secret (`g1_monomial`), the same
//! points in Lagrange form over the 4096 roots of unity in natural order
//! (`g1_lagrange`), and at least 65 G2 powers (`g2_monomial`).
//!
//! Nothing is embedded in this crate; the caller supplies the setup either as
//! the JSON document published alongside the ceremony or as raw concatenated
//! compressed points.

mod errors;

use bls12_381::{g1_batch_normalize, multi_pairings, G1Point, G1Projective, G2Point, G2Prepared};
pub use errors::{Basis, SetupError};
use polynomial::domain::Domain;
use serde::Deserialize;
use serialization::{
    constants::{BYTES_PER_G1_POINT, BYTES_PER_G2_POINT, FIELD_ELEMENTS_PER_BLOB, NUM_G2_POINTS},
    deserialize_compressed_g1, deserialize_compressed_g1_unchecked, deserialize_compressed_g2,
    deserialize_compressed_g2_unchecked, SerializationError,
};

/// The setup as it appears in the JSON document: `0x` prefixed hex strings of
/// compressed points.
//
// {
//   "g1_monomial": ["0x97f1d3a7...", ...],
//   "g1_lagrange": ["0xa0413c0d...", ...],
//   "g2_monomial": ["0x93e02b60...", ...]
// }
#[derive(Deserialize, Debug)]
struct SerializedTrustedSetup {
    g1_monomial: Vec<String>,
    g1_lagrange: Vec<String>,
    g2_monomial: Vec<String>,
}

#[derive(Debug, Copy, Clone)]
enum SubgroupCheck {
    Check,
    NoCheck,
}

/// Decoded setup points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustedSetup {
    /// `[τ^i]₁` for `i` in `0..4096`.
    pub g1_monomial: Vec<G1Point>,
    /// `[L_i(τ)]₁` where `L_i` is the i'th Lagrange polynomial over the
    /// 4096 roots of unity, in natural order.
    pub g1_lagrange: Vec<G1Point>,
    /// `[τ^i]₂` for `i` in `0..g2_monomial.len()`, with at least 65 points.
    pub g2_monomial: Vec<G2Point>,
}

impl TrustedSetup {
    /// Parses the JSON setup, checking that every point is in the prime order subgroup.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn from_json(json: &str) -> Result<Self, SetupError> {
        Self::from_json_with_check(json, SubgroupCheck::Check)
    }

    /// Parses the JSON setup without subgroup checks.
    ///
    /// Only use this on a setup that has already been validated, for example one
    /// that is compiled into the binary.
    pub fn from_json_unchecked(json: &str) -> Result<Self, SetupError> {
        Self::from_json_with_check(json, SubgroupCheck::NoCheck)
    }

    fn from_json_with_check(json: &str, check: SubgroupCheck) -> Result<Self, SetupError> {
        let serialized: SerializedTrustedSetup = serde_json::from_str(json)?;

        let g1 = |bytes: &[u8]| decode_g1(bytes, check);
        let g2 = |bytes: &[u8]| decode_g2(bytes, check);

        let g1_monomial = decode_hex_points(&serialized.g1_monomial, Basis::G1Monomial, g1)?;
        let g1_lagrange = decode_hex_points(&serialized.g1_lagrange, Basis::G1Lagrange, g1)?;
        let g2_monomial = decode_hex_points(&serialized.g2_monomial, Basis::G2Monomial, g2)?;

        Self::from_points(g1_monomial, g1_lagrange, g2_monomial)
    }

    /// Builds the setup from concatenated compressed points: the G1 Lagrange
    /// basis in natural order and the G2 monomial basis.
    ///
    /// Every point is subgroup checked. The G1 monomial basis is recovered with
    /// an FFT over the G1 Lagrange points.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn from_bytes(
        g1_lagrange_bytes: &[u8],
        g2_monomial_bytes: &[u8],
    ) -> Result<Self, SetupError> {
        let g1_lagrange = decode_concatenated_points(
            g1_lagrange_bytes,
            BYTES_PER_G1_POINT,
            Basis::G1Lagrange,
            deserialize_compressed_g1,
        )?;
        let g2_monomial = decode_concatenated_points(
            g2_monomial_bytes,
            BYTES_PER_G2_POINT,
            Basis::G2Monomial,
            deserialize_compressed_g2,
        )?;

        if g1_lagrange.len() != FIELD_ELEMENTS_PER_BLOB {
            return Err(SetupError::WrongNumberOfPoints {
                basis: Basis::G1Lagrange,
                found: g1_lagrange.len(),
                expected: FIELD_ELEMENTS_PER_BLOB,
            });
        }

        let domain = Domain::new(FIELD_ELEMENTS_PER_BLOB);
        let lagrange_projective: Vec<_> = g1_lagrange
            .iter()
            .map(|point| G1Projective::from(*point))
            .collect();
        let g1_monomial = g1_batch_normalize(&domain.fft_g1(lagrange_projective));

        Self::from_points(g1_monomial, g1_lagrange, g2_monomial)
    }

    /// Assembles a setup from decoded points, checking only the number of points
    /// in each basis.
    pub fn from_points(
        g1_monomial: Vec<G1Point>,
        g1_lagrange: Vec<G1Point>,
        g2_monomial: Vec<G2Point>,
    ) -> Result<Self, SetupError> {
        for (basis, found) in [
            (Basis::G1Monomial, g1_monomial.len()),
            (Basis::G1Lagrange, g1_lagrange.len()),
        ] {
            if found != FIELD_ELEMENTS_PER_BLOB {
                return Err(SetupError::WrongNumberOfPoints {
                    basis,
                    found,
                    expected: FIELD_ELEMENTS_PER_BLOB,
                });
            }
        }
        if g2_monomial.len() < NUM_G2_POINTS {
            return Err(SetupError::TooFewPoints {
                basis: Basis::G2Monomial,
                found: g2_monomial.len(),
                minimum: NUM_G2_POINTS,
            });
        }

        Ok(Self {
            g1_monomial,
            g1_lagrange,
            g2_monomial,
        })
    }

    /// Checks that the bases were produced from a single secret.
    ///
    /// This tests `e([τ]₁, g₂) == e(g₁, [τ]₂)` and that the Lagrange points sum
    /// to the generator, since the Lagrange polynomials sum to one.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn verify_consistency(&self) -> Result<(), SetupError> {
        let g1_gen = self.g1_monomial[0];
        let tau_g1 = self.g1_monomial[1];
        let neg_g2_gen = G2Prepared::from(-self.g2_monomial[0]);
        let tau_g2 = G2Prepared::from(self.g2_monomial[1]);

        let same_secret = multi_pairings(&[(&tau_g1, &neg_g2_gen), (&g1_gen, &tau_g2)]);

        let lagrange_sum: G1Projective = self
            .g1_lagrange
            .iter()
            .map(|point| G1Projective::from(*point))
            .sum();
        let lagrange_sums_to_one = lagrange_sum == G1Projective::from(g1_gen);

        if same_secret && lagrange_sums_to_one {
            Ok(())
        } else {
            Err(SetupError::InconsistentSetup)
        }
    }
}

fn decode_g1(bytes: &[u8], check: SubgroupCheck) -> Result<G1Point, SerializationError> {
    match check {
        SubgroupCheck::Check => deserialize_compressed_g1(bytes),
        SubgroupCheck::NoCheck => deserialize_compressed_g1_unchecked(bytes),
    }
}

fn decode_g2(bytes: &[u8], check: SubgroupCheck) -> Result<G2Point, SerializationError> {
    match check {
        SubgroupCheck::Check => deserialize_compressed_g2(bytes),
        SubgroupCheck::NoCheck => deserialize_compressed_g2_unchecked(bytes),
    }
}

fn decode_hex_points<P>(
    hex_points: &[String],
    basis: Basis,
    decode: impl Fn(&[u8]) -> Result<P, SerializationError>,
) -> Result<Vec<P>, SetupError> {
    hex_points
        .iter()
        .enumerate()
        .map(|(index, hex_str)| {
            let without_prefix = hex_str
                .strip_prefix("0x")
                .ok_or(SetupError::MissingHexPrefix { basis, index })?;
            let bytes = hex::decode(without_prefix).map_err(|error| SetupError::InvalidHex {
                basis,
                index,
                error,
            })?;
            decode(&bytes).map_err(|error| SetupError::InvalidPoint {
                basis,
                index,
                error,
            })
        })
        .collect()
}

fn decode_concatenated_points<P>(
    bytes: &[u8],
    point_size: usize,
    basis: Basis,
    decode: impl Fn(&[u8]) -> Result<P, SerializationError>,
) -> Result<Vec<P>, SetupError> {
    if bytes.len() % point_size != 0 {
        return Err(SetupError::BytesNotMultipleOfPointSize {
            basis,
            length: bytes.len(),
            point_size,
        });
    }

    bytes
        .chunks_exact(point_size)
        .enumerate()
        .map(|(index, chunk)| {
            decode(chunk).map_err(|error| SetupError::InvalidPoint {
                basis,
                index,
                error,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::sync::OnceLock;

    use bls12_381::{compute_powers, traits::*, G2Projective, Scalar};

    use super::*;

    fn insecure_setup() -> &'static TrustedSetup {
        static SETUP: OnceLock<TrustedSetup> = OnceLock::new();
        SETUP.get_or_init(|| {
            let tau = Scalar::from(1337u64);
            let powers = compute_powers(tau, FIELD_ELEMENTS_PER_BLOB);

            let g1_monomial: Vec<_> = powers
                .iter()
                .map(|power| G1Projective::generator() * power)
                .collect();
            let g1_lagrange = Domain::new(FIELD_ELEMENTS_PER_BLOB).ifft_g1(g1_monomial.clone());
            let g2_monomial = powers[..NUM_G2_POINTS]
                .iter()
                .map(|power| (G2Projective::generator() * power).to_affine())
                .collect();

            TrustedSetup::from_points(
                g1_batch_normalize(&g1_monomial),
                g1_batch_normalize(&g1_lagrange),
                g2_monomial,
            )
            .unwrap()
        })
    }

    fn to_hex(points: impl Iterator<Item = Vec<u8>>) -> Vec<String> {
        points
            .map(|bytes| format!("0x{}", hex::encode(bytes)))
            .collect()
    }

    fn setup_json(setup: &TrustedSetup) -> serde_json::Value {
        serde_json::json!({
            "g1_monomial": to_hex(setup.g1_monomial.iter().map(|p| p.to_compressed().to_vec())),
            "g1_lagrange": to_hex(setup.g1_lagrange.iter().map(|p| p.to_compressed().to_vec())),
            "g2_monomial": to_hex(setup.g2_monomial.iter().map(|p| p.to_compressed().to_vec())),
        })
    }

    #[test]
    fn json_setup_loads() {
        let setup = insecure_setup();
        let json = setup_json(setup).to_string();

        let checked = TrustedSetup::from_json(&json).unwrap();
        let unchecked = TrustedSetup::from_json_unchecked(&json).unwrap();

        assert_eq!(&checked, setup);
        assert_eq!(&unchecked, setup);
        checked.verify_consistency().unwrap();
    }

    #[test]
    fn bytes_setup_recovers_monomial_basis() {
        let setup = insecure_setup();
        let g1_lagrange_bytes: Vec<u8> = setup
            .g1_lagrange
            .iter()
            .flat_map(|p| p.to_compressed())
            .collect();
        let g2_monomial_bytes: Vec<u8> = setup
            .g2_monomial
            .iter()
            .flat_map(|p| p.to_compressed())
            .collect();

        let loaded = TrustedSetup::from_bytes(&g1_lagrange_bytes, &g2_monomial_bytes).unwrap();
        assert_eq!(&loaded, setup);
    }

    #[test]
    fn bytes_of_the_wrong_length_are_rejected() {
        let setup = insecure_setup();
        let g2_monomial_bytes: Vec<u8> = setup
            .g2_monomial
            .iter()
            .flat_map(|p| p.to_compressed())
            .collect();

        let err = TrustedSetup::from_bytes(&[0u8; 47], &g2_monomial_bytes).unwrap_err();
        assert!(matches!(
            err,
            SetupError::BytesNotMultipleOfPointSize {
                basis: Basis::G1Lagrange,
                length: 47,
                point_size: 48,
            }
        ));

        let g1_lagrange_bytes: Vec<u8> = setup.g1_lagrange[..10]
            .iter()
            .flat_map(|p| p.to_compressed())
            .collect();
        let err = TrustedSetup::from_bytes(&g1_lagrange_bytes, &g2_monomial_bytes).unwrap_err();
        assert!(matches!(
            err,
            SetupError::WrongNumberOfPoints {
                basis: Basis::G1Lagrange,
                found: 10,
                ..
            }
        ));
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = TrustedSetup::from_json("{ \"g1_monomial\": [] }").unwrap_err();
        assert!(matches!(err, SetupError::InvalidJson(_)));

        let setup = insecure_setup();

        let mut json = setup_json(setup);
        let without_prefix = json["g2_monomial"][3].as_str().unwrap()[2..].to_string();
        json["g2_monomial"][3] = serde_json::Value::String(without_prefix);
        let err = TrustedSetup::from_json(&json.to_string()).unwrap_err();
        assert!(matches!(
            err,
            SetupError::MissingHexPrefix {
                basis: Basis::G2Monomial,
                index: 3,
            }
        ));

        let mut json = setup_json(setup);
        json["g1_lagrange"][5] = serde_json::Value::String("0xzz".to_string());
        let err = TrustedSetup::from_json(&json.to_string()).unwrap_err();
        assert!(matches!(
            err,
            SetupError::InvalidHex {
                basis: Basis::G1Lagrange,
                index: 5,
                ..
            }
        ));

        let mut json = setup_json(setup);
        json["g1_monomial"][7] = serde_json::Value::String(format!("0x{}", "ff".repeat(48)));
        let err = TrustedSetup::from_json(&json.to_string()).unwrap_err();
        assert!(matches!(
            err,
            SetupError::InvalidPoint {
                basis: Basis::G1Monomial,
                index: 7,
                ..
            }
        ));
    }

    #[test]
    fn too_few_g2_points() {
        let setup = insecure_setup();
        let err = TrustedSetup::from_points(
            setup.g1_monomial.clone(),
            setup.g1_lagrange.clone(),
            setup.g2_monomial[..NUM_G2_POINTS - 1].to_vec(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            SetupError::TooFewPoints {
                basis: Basis::G2Monomial,
                found: 64,
                minimum: 65,
            }
        ));
    }

    #[test]
    fn inconsistent_setups_are_detected() {
        let setup = insecure_setup();

        let mut wrong_g2 = setup.clone();
        wrong_g2.g2_monomial.swap(1, 2);
        assert!(matches!(
            wrong_g2.verify_consistency(),
            Err(SetupError::InconsistentSetup)
        ));

        let mut wrong_lagrange = setup.clone();
        wrong_lagrange.g1_lagrange[0] = setup.g1_monomial[1];
        assert!(matches!(
            wrong_lagrange.verify_consistency(),
            Err(SetupError::InconsistentSetup)
        ));
    }
}
