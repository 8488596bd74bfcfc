//! # Symmetric block matrix
//!
//! Only the upper triangle of the block grid is stored. The dimension of the grid is a constant,
//! which allows the number of blocks and constant indices to be checked while compiling.
use std::fmt::{Display, Formatter, Result as FormatResult};

use crate::block::Block;
use crate::error::{MatrixError, Result};
use crate::index;

mod condense;

/// Largest dimension for which matrices can be built, so that every matrix can be condensed.
pub const MAX_DIMENSION: usize = 16;

/// Square grid of `D x D` blocks, where block `(column, row)` is the transpose of block
/// `(row, column)`.
///
/// Holds the `D * (D + 1) / 2` blocks of the upper triangle, row after row. Instances are immutable
/// and can only be created through the validating constructors, so the number of blocks always
/// matches the dimension.
///
/// The dimension is at least one and at most [`MAX_DIMENSION`]. Matrices of dimension two and up
/// can be condensed, with a pivot that is checked while compiling:
///
/// ```
/// use symblock::symmetric_block_matrix;
///
/// let matrix = symmetric_block_matrix![3; 1_f64, 2_f64, 3_f64, 4_f64, 5_f64, 6_f64];
/// assert_eq!(matrix.condense::<2>().map(|condensed| condensed.dimension()), Ok(2));
/// ```
///
/// A pivot outside of the grid doesn't compile:
///
/// ```compile_fail
/// use symblock::symmetric_block_matrix;
///
/// let matrix = symmetric_block_matrix![3; 1_f64, 2_f64, 3_f64, 4_f64, 5_f64, 6_f64];
/// let condensed = matrix.condense::<3>();
/// ```
///
/// and a single block can't be condensed any further:
///
/// ```compile_fail
/// use symblock::symmetric_block_matrix;
///
/// let matrix = symmetric_block_matrix![1; 1_f64];
/// let condensed = matrix.condense::<0>();
/// ```
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct SymmetricBlockMatrix<B, const D: usize> {
    blocks: Vec<B>,
}

impl<B, const D: usize> SymmetricBlockMatrix<B, D> {
    /// Create a matrix from the blocks of its upper triangle, row after row.
    ///
    /// The number of blocks is checked while compiling. A dimension of three needs six blocks:
    ///
    /// ```
    /// use symblock::SymmetricBlockMatrix;
    ///
    /// let matrix = SymmetricBlockMatrix::<_, 3>::new([1_f64, 2_f64, 3_f64, 4_f64, 5_f64, 6_f64]);
    /// assert_eq!(matrix.block_count(), 6);
    /// ```
    ///
    /// and five blocks don't compile:
    ///
    /// ```compile_fail
    /// use symblock::SymmetricBlockMatrix;
    ///
    /// let matrix = SymmetricBlockMatrix::<_, 3>::new([1_f64, 2_f64, 3_f64, 4_f64, 5_f64]);
    /// ```
    ///
    /// An empty grid is not a matrix:
    ///
    /// ```compile_fail
    /// use symblock::SymmetricBlockMatrix;
    ///
    /// let matrix = SymmetricBlockMatrix::<f64, 0>::new([]);
    /// ```
    ///
    /// and neither is a grid larger than [`MAX_DIMENSION`]:
    ///
    /// ```compile_fail
    /// use symblock::SymmetricBlockMatrix;
    ///
    /// let matrix = SymmetricBlockMatrix::<f64, 17>::new([0_f64; 153]);
    /// ```
    #[must_use]
    pub fn new<const N: usize>(blocks: [B; N]) -> Self {
        const {
            assert!(D >= 1, "A symmetric block matrix has at least one block row.");
            assert!(D <= MAX_DIMENSION, "The dimension is too large to be condensed.");
            assert!(N == index::block_count(D), "The number of blocks is not consistent with the dimension.");
        }

        Self { blocks: blocks.into() }
    }

    /// Create a matrix from a number of blocks that is only known at run time.
    ///
    /// # Errors
    ///
    /// `MatrixError::BlockCount` if there are not exactly `D * (D + 1) / 2` blocks.
    ///
    /// The dimension itself is checked while compiling:
    ///
    /// ```compile_fail
    /// use symblock::SymmetricBlockMatrix;
    ///
    /// let matrix = SymmetricBlockMatrix::<f64, 17>::try_from_blocks(vec![0_f64; 153]);
    /// ```
    pub fn try_from_blocks(blocks: Vec<B>) -> Result<Self> {
        const {
            assert!(D >= 1, "A symmetric block matrix has at least one block row.");
            assert!(D <= MAX_DIMENSION, "The dimension is too large to be condensed.");
        }

        if blocks.len() == index::block_count(D) {
            Ok(Self { blocks })
        } else {
            Err(MatrixError::BlockCount {
                dimension: D,
                expected: index::block_count(D),
                actual: blocks.len(),
            })
        }
    }

    /// Number of block rows (and block columns).
    #[must_use]
    pub const fn dimension(&self) -> usize {
        D
    }

    /// Number of blocks stored.
    #[must_use]
    pub const fn block_count(&self) -> usize {
        index::block_count(D)
    }

    /// Block (`R`, `C`) of the upper triangle.
    ///
    /// The indices are checked while compiling. Blocks of the lower triangle are not accessible this
    /// way, the symmetric counterpart should be requested explicitly:
    ///
    /// ```compile_fail
    /// use symblock::symmetric_block_matrix;
    ///
    /// let matrix = symmetric_block_matrix![2; 1_f64, 2_f64, 3_f64];
    /// let block = matrix.get_block::<1, 0>();
    /// ```
    ///
    /// ```compile_fail
    /// use symblock::symmetric_block_matrix;
    ///
    /// let matrix = symmetric_block_matrix![2; 1_f64, 2_f64, 3_f64];
    /// let block = matrix.get_block::<1, 2>();
    /// ```
    #[must_use]
    pub fn get_block<const R: usize, const C: usize>(&self) -> &B {
        let offset = const {
            assert!(R <= C, "Only the upper triangular part of the matrix is described.");
            assert!(R < D, "The row index exceeds the dimension.");
            assert!(C < D, "The column index exceeds the dimension.");

            index::offset(D, R, C)
        };

        &self.blocks[offset]
    }

    /// Block (`row`, `column`) of the upper triangle, for indices known at run time.
    ///
    /// # Errors
    ///
    /// `MatrixError::IndexOutOfBounds` if an index is not smaller than the dimension and
    /// `MatrixError::LowerTriangle` if `row > column`.
    pub fn block(&self, row: usize, column: usize) -> Result<&B> {
        Self::check_bounds(row)?;
        Self::check_bounds(column)?;
        if row > column {
            return Err(MatrixError::LowerTriangle { row, column });
        }

        Ok(&self.blocks[index::offset(D, row, column)])
    }

    /// All stored blocks with their (row, column) coordinates, in storage order.
    pub fn blocks(&self) -> impl Iterator<Item=((usize, usize), &B)> {
        self.blocks.iter().enumerate().filter_map(|(offset, block)| {
            index::coordinates(D, offset).map(|coordinates| (coordinates, block))
        })
    }

    /// The stored blocks, row after row.
    #[must_use]
    pub fn into_blocks(self) -> Vec<B> {
        self.blocks
    }

    fn check_bounds(index: usize) -> Result<()> {
        if index < D {
            Ok(())
        } else {
            Err(MatrixError::IndexOutOfBounds { index, dimension: D })
        }
    }
}

impl<B: Block, const D: usize> SymmetricBlockMatrix<B, D> {
    /// Block (`row`, `column`) anywhere in the grid.
    ///
    /// Blocks in the lower triangle are the transpose of their stored counterpart.
    ///
    /// # Errors
    ///
    /// `MatrixError::IndexOutOfBounds` if an index is not smaller than the dimension.
    pub fn block_transposed(&self, row: usize, column: usize) -> Result<B> {
        if row <= column {
            self.block(row, column).cloned()
        } else {
            self.block(column, row).map(Block::transpose)
        }
    }
}

impl<B, const D: usize> TryFrom<Vec<B>> for SymmetricBlockMatrix<B, D> {
    type Error = MatrixError;

    fn try_from(blocks: Vec<B>) -> Result<Self> {
        Self::try_from_blocks(blocks)
    }
}

impl<B: Display, const D: usize> Display for SymmetricBlockMatrix<B, D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        let width = self.blocks.iter()
            .map(|block| block.to_string().len())
            .max()
            .unwrap_or(0);

        for row in 0..D {
            for column in 0..D {
                if column > 0 {
                    write!(f, " ")?;
                }
                if column < row {
                    write!(f, "{0:>width$}", "", width = width)?;
                } else {
                    let block = &self.blocks[index::offset(D, row, column)];
                    write!(f, "{0:>width$}", block.to_string(), width = width)?;
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Create a symmetric block matrix from its dimension and the blocks of its upper triangle.
///
/// The number of blocks is checked while compiling.
///
/// ```
/// use symblock::symmetric_block_matrix;
///
/// let matrix = symmetric_block_matrix![2;
///     1_f64, 2_f64,
///            3_f64,
/// ];
/// assert_eq!(*matrix.get_block::<1, 1>(), 3_f64);
/// ```
#[macro_export]
macro_rules! symmetric_block_matrix {
    ($dimension:expr; $($block:expr),+ $(,)?) => {
        $crate::SymmetricBlockMatrix::<_, $dimension>::new([$($block),+])
    };
}
