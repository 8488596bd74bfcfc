//! # Blocks
//!
//! Condensation only needs a few operations of the blocks it works on. These are collected in the
//! [`Block`] trait, which is implemented for scalars, for dense matrices of scalars and for a
//! block that can be either of those.
use std::fmt::Debug;
use std::ops::{Div, Sub};

use num_traits::{One, Zero};

use crate::error::BlockError;

pub mod dense;
pub mod mixed;
mod scalar;

/// Algebraic operations that a block of a symmetric block matrix needs to support.
///
/// All operations are fallible: a block can be singular, and blocks of run-time size can have
/// incompatible shapes.
pub trait Block: Clone + Sized {
    /// Multiplicative inverse.
    ///
    /// # Errors
    ///
    /// `BlockError::Singular` if no inverse exists, `BlockError::NotSquare` if the block is a
    /// non-square matrix.
    fn inverse(&self) -> Result<Self, BlockError>;
    /// Product `self * rhs`.
    ///
    /// # Errors
    ///
    /// If the shapes are not compatible.
    fn multiply(&self, rhs: &Self) -> Result<Self, BlockError>;
    /// Difference `self - rhs`.
    ///
    /// # Errors
    ///
    /// If the shapes are not equal.
    fn subtract(&self, rhs: &Self) -> Result<Self, BlockError>;
    /// Transpose.
    ///
    /// Block `(column, row)` of a symmetric block matrix is the transpose of block `(row, column)`.
    /// This is the identity for scalars.
    #[must_use]
    fn transpose(&self) -> Self;
}

/// Elements of dense blocks.
///
/// Implemented for the floats and for the rational numbers of `relp_num`.
pub trait Scalar:
    Zero +
    One +
    Sub<Output=Self> +
    Div<Output=Self> +
    PartialOrd +
    Clone +
    Debug
{
    /// Absolute value, used to choose pivots.
    #[must_use]
    fn magnitude(&self) -> Self;
    /// Whether this value can't be divided by.
    ///
    /// The `scale` is the size of the values this one was computed from. For exact number types
    /// only zero is negligible. Floats are also negligible when they are within rounding error of
    /// zero relative to `scale`, when their reciprocal overflows, or when they are not finite.
    fn is_negligible(&self, scale: &Self) -> bool;
}
