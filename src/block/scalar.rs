//! # Scalar blocks
//!
//! A block matrix with scalar blocks is an ordinary symmetric matrix.
use num_traits::Zero;
use relp_num::{Rational32, Rational64, RationalBig};

use crate::block::{Block, Scalar};
use crate::error::BlockError;

/// Multiplicative inverse of a scalar.
///
/// A scalar is its own scale, so for floats this rejects zero, subnormal and non-finite values.
pub(crate) fn invert<F: Scalar>(value: &F) -> Result<F, BlockError> {
    if value.is_negligible(value) {
        Err(BlockError::Singular)
    } else {
        Ok(F::one() / value.clone())
    }
}

pub(crate) fn multiply<F: Scalar>(left: &F, right: &F) -> F {
    left.clone() * right.clone()
}

pub(crate) fn subtract<F: Scalar>(left: &F, right: &F) -> F {
    left.clone() - right.clone()
}

macro_rules! impl_scalar_block {
    ($($t:ty),* $(,)?) => {
        $(
            impl Block for $t {
                fn inverse(&self) -> Result<Self, BlockError> {
                    invert(self)
                }

                fn multiply(&self, rhs: &Self) -> Result<Self, BlockError> {
                    Ok(multiply(self, rhs))
                }

                fn subtract(&self, rhs: &Self) -> Result<Self, BlockError> {
                    Ok(subtract(self, rhs))
                }

                fn transpose(&self) -> Self {
                    Clone::clone(self)
                }
            }
        )*
    };
}
impl_scalar_block!(f32, f64, Rational32, Rational64, RationalBig);

macro_rules! impl_exact_scalar {
    ($($t:ty),* $(,)?) => {
        $(
            impl Scalar for $t {
                fn magnitude(&self) -> Self {
                    if *self < <$t>::zero() {
                        <$t>::zero() - self.clone()
                    } else {
                        self.clone()
                    }
                }

                fn is_negligible(&self, _scale: &Self) -> bool {
                    self.is_zero()
                }
            }
        )*
    };
}
impl_exact_scalar!(Rational32, Rational64, RationalBig);

macro_rules! impl_float_scalar {
    ($($t:ident),* $(,)?) => {
        $(
            impl Scalar for $t {
                fn magnitude(&self) -> Self {
                    self.abs()
                }

                fn is_negligible(&self, scale: &Self) -> bool {
                    !self.is_finite()
                        || self.abs() < $t::MIN_POSITIVE
                        || self.abs() <= $t::EPSILON * scale.abs()
                }
            }
        )*
    };
}
impl_float_scalar!(f32, f64);
