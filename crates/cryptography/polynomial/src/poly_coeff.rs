use std::ops::{Deref, DerefMut};

use bls12_381::{ff::Field, Scalar};

/// A polynomial in coefficient form, lowest degree first.
#[derive(Clone, Debug, Eq, PartialEq, Default)]
pub struct PolyCoeff(pub Vec<Scalar>);

impl PolyCoeff {
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let (longer, shorter) = if self.len() >= other.len() {
            (self, other)
        } else {
            (other, self)
        };

        let mut result = longer.clone();
        for (r, s) in result.iter_mut().zip(shorter.iter()) {
            *r += s;
        }
        result.truncate_leading_zeros();
        result
    }

    #[must_use]
    pub fn neg(&self) -> Self {
        Self(self.iter().map(|c| -*c).collect())
    }

    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Horner evaluation at `x`.
    #[must_use]
    pub fn eval(&self, x: &Scalar) -> Scalar {
        self.iter()
            .rev()
            .fold(Scalar::ZERO, |acc, coeff| acc * x + coeff)
    }

    /// Schoolbook multiplication.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_empty() || other.is_empty() {
            return Self::default();
        }

        let mut result = vec![Scalar::ZERO; self.len() + other.len() - 1];
        for (i, a) in self.iter().enumerate() {
            for (j, b) in other.iter().enumerate() {
                result[i + j] += a * b;
            }
        }

        let mut result = Self(result);
        result.truncate_leading_zeros();
        result
    }

    fn truncate_leading_zeros(&mut self) {
        while self.last().is_some_and(|c| bool::from(c.is_zero())) {
            self.pop();
        }
    }
}

impl Deref for PolyCoeff {
    type Target = Vec<Scalar>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for PolyCoeff {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Vec<Scalar>> for PolyCoeff {
    fn from(value: Vec<Scalar>) -> Self {
        Self(value)
    }
}

/// Returns the monic polynomial `prod_i (X - roots_i)`.
pub fn vanishing_poly(roots: &[Scalar]) -> PolyCoeff {
    let mut poly = vec![Scalar::ONE];
    for root in roots {
        // poly <- poly * (X - root)
        let mut next = vec![Scalar::ZERO; poly.len() + 1];
        for (i, coeff) in poly.iter().enumerate() {
            next[i] -= *coeff * root;
            next[i + 1] += coeff;
        }
        poly = next;
    }
    PolyCoeff(poly)
}
