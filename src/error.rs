//! # Errors
//!
//! Two levels of errors exist. A `BlockError` is raised by the arithmetic of a single block, a
//! `MatrixError` describes problems with the block grid as a whole and wraps block errors that
//! occurred while condensing.
use thiserror::Error;

/// Failure of an operation on a single block.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlockError {
    /// The block has no multiplicative inverse.
    #[error("block is singular and can't be inverted")]
    Singular,
    /// Only square blocks can be inverted.
    #[error("block of shape {rows}x{columns} is not square")]
    NotSquare {
        /// Number of rows of the offending block.
        rows: usize,
        /// Number of columns of the offending block.
        columns: usize,
    },
    /// The shapes of the operands are not compatible with the operation.
    #[error("can't {operation} blocks of shapes {left:?} and {right:?}")]
    ShapeMismatch {
        /// Name of the operation, e.g. "multiply".
        operation: &'static str,
        /// Shape (rows, columns) of the left operand.
        left: (usize, usize),
        /// Shape (rows, columns) of the right operand.
        right: (usize, usize),
    },
    /// A dense block was created from a number of values that doesn't match its shape.
    #[error("expected {expected} values for a dense block, got {actual}")]
    DataLength {
        /// Rows times columns.
        expected: usize,
        /// Number of values provided.
        actual: usize,
    },
}

/// Failure of an operation on a symmetric block matrix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// The number of blocks is not `dimension * (dimension + 1) / 2`.
    #[error("a symmetric block matrix of dimension {dimension} has {expected} blocks, got {actual}")]
    BlockCount {
        /// Dimension of the block grid.
        dimension: usize,
        /// Number of blocks in the upper triangle.
        expected: usize,
        /// Number of blocks provided.
        actual: usize,
    },
    /// Only the upper triangle can be accessed directly.
    ///
    /// The symmetric counterpart needs to be requested explicitly.
    #[error("block ({row}, {column}) is in the lower triangle, only the upper triangle is stored")]
    LowerTriangle {
        /// Requested row index.
        row: usize,
        /// Requested column index.
        column: usize,
    },
    /// A row, column or pivot index is not smaller than the dimension.
    #[error("index {index} is out of bounds for dimension {dimension}")]
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Dimension of the block grid.
        dimension: usize,
    },
    /// Block arithmetic failed, for example because the pivot block is singular.
    #[error(transparent)]
    Algebra(#[from] BlockError),
}

/// Result of an operation on a symmetric block matrix.
pub type Result<T> = std::result::Result<T, MatrixError>;

#[cfg(test)]
mod test {
    use crate::error::{BlockError, MatrixError};

    #[test]
    fn display() {
        let error = MatrixError::BlockCount { dimension: 2, expected: 3, actual: 4 };
        assert_eq!(
            error.to_string(),
            "a symmetric block matrix of dimension 2 has 3 blocks, got 4",
        );

        let error = BlockError::ShapeMismatch { operation: "multiply", left: (1, 2), right: (3, 1) };
        assert_eq!(error.to_string(), "can't multiply blocks of shapes (1, 2) and (3, 1)");
    }

    #[test]
    fn algebra_is_transparent() {
        let error: MatrixError = BlockError::Singular.into();
        assert_eq!(error, MatrixError::Algebra(BlockError::Singular));
        assert_eq!(error.to_string(), BlockError::Singular.to_string());
    }
}
