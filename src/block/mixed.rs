//! # Mixed blocks
//!
//! Different positions of a symmetric block matrix may hold different kinds of values. A single
//! degree of freedom is a scalar, a group of them a dense block; the `MixedBlock` type holds
//! either and defines the arithmetic between them.
use std::fmt::{Display, Formatter, Result as FormatResult};

use crate::block::{Block, Scalar, scalar};
use crate::block::dense::DenseBlock;
use crate::error::BlockError;

/// A block that is either a scalar or a dense matrix.
///
/// A scalar multiplies any block. Scalars and dense blocks can only be subtracted from each other
/// when the dense block has shape `1x1`.
#[derive(Eq, PartialEq, Clone, Debug)]
pub enum MixedBlock<F> {
    /// A single value.
    Scalar(F),
    /// A dense matrix of values.
    Dense(DenseBlock<F>),
}

impl<F> MixedBlock<F> {
    /// Shape as (rows, columns), where a scalar counts as `1x1`.
    pub fn shape(&self) -> (usize, usize) {
        match self {
            MixedBlock::Scalar(_) => (1, 1),
            MixedBlock::Dense(block) => block.shape(),
        }
    }
}

impl<F: Scalar> MixedBlock<F> {
    /// The only value of a `1x1` block.
    fn as_scalar(&self) -> Option<F> {
        match self {
            MixedBlock::Scalar(value) => Some(value.clone()),
            MixedBlock::Dense(block) if block.shape() == (1, 1) => block.get(0, 0).cloned(),
            MixedBlock::Dense(_) => None,
        }
    }

    fn shape_mismatch(&self, operation: &'static str, rhs: &Self) -> BlockError {
        BlockError::ShapeMismatch { operation, left: self.shape(), right: rhs.shape() }
    }
}

impl<F: Scalar> Block for MixedBlock<F> {
    fn inverse(&self) -> Result<Self, BlockError> {
        match self {
            MixedBlock::Scalar(value) => scalar::invert(value).map(MixedBlock::Scalar),
            MixedBlock::Dense(block) => block.inverse().map(MixedBlock::Dense),
        }
    }

    fn multiply(&self, rhs: &Self) -> Result<Self, BlockError> {
        match (self, rhs) {
            (MixedBlock::Scalar(left), MixedBlock::Scalar(right)) => {
                Ok(MixedBlock::Scalar(scalar::multiply(left, right)))
            },
            (MixedBlock::Scalar(factor), MixedBlock::Dense(block))
            | (MixedBlock::Dense(block), MixedBlock::Scalar(factor)) => {
                Ok(MixedBlock::Dense(block.scale(factor)))
            },
            (MixedBlock::Dense(left), MixedBlock::Dense(right)) => {
                left.multiply(right).map(MixedBlock::Dense)
            },
        }
    }

    fn subtract(&self, rhs: &Self) -> Result<Self, BlockError> {
        match (self, rhs) {
            (MixedBlock::Dense(left), MixedBlock::Dense(right)) => {
                left.subtract(right).map(MixedBlock::Dense)
            },
            (MixedBlock::Scalar(left), MixedBlock::Scalar(right)) => {
                Ok(MixedBlock::Scalar(scalar::subtract(left, right)))
            },
            _ => match (self.as_scalar(), rhs.as_scalar()) {
                (Some(left), Some(right)) => Ok(MixedBlock::Scalar(scalar::subtract(&left, &right))),
                _ => Err(self.shape_mismatch("subtract", rhs)),
            },
        }
    }

    fn transpose(&self) -> Self {
        match self {
            MixedBlock::Scalar(value) => MixedBlock::Scalar(value.clone()),
            MixedBlock::Dense(block) => MixedBlock::Dense(block.transpose()),
        }
    }
}

impl<F> From<DenseBlock<F>> for MixedBlock<F> {
    fn from(block: DenseBlock<F>) -> Self {
        MixedBlock::Dense(block)
    }
}

impl<F: Display> Display for MixedBlock<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        match self {
            MixedBlock::Scalar(value) => Display::fmt(value, f),
            MixedBlock::Dense(block) => Display::fmt(block, f),
        }
    }
}
