//! # Static condensation
//!
//! Eliminating block row and column `p` from a symmetric system
//!
//! ```text
//! K_ij - K_ip K_pp^-1 K_pj    for all i <= j with i, j != p
//! ```
//!
//! leaves a symmetric system on the remaining blocks, the Schur complement of `K_pp`. Blocks after
//! the pivot move up by one position.
use std::borrow::Cow;

use itertools::Itertools;
use tracing::{debug, trace};

use crate::block::Block;
use crate::error::{MatrixError, Result};
use crate::matrix::SymmetricBlockMatrix;

/// Schur complement of pivot block (`pivot`, `pivot`).
///
/// The caller guarantees that `E + 1 == D`.
fn condense<B: Block, const D: usize, const E: usize>(
    matrix: &SymmetricBlockMatrix<B, D>,
    pivot: usize,
) -> Result<SymmetricBlockMatrix<B, E>> {
    const { assert!(E + 1 == D, "Condensation removes exactly one block row.") };
    if pivot >= D {
        return Err(MatrixError::IndexOutOfBounds { index: pivot, dimension: D });
    }
    debug!(dimension = D, pivot, "condensing symmetric block matrix");

    let pivot_inverse = matrix.block(pivot, pivot)?.inverse()?;

    let remaining = (0..D).filter(|&k| k != pivot).collect_vec();
    // K_pj for every remaining j, transposing stored blocks K_jp when j < p
    let coupling = remaining.iter()
        .map(|&k| if pivot < k {
            matrix.block(pivot, k).map(Cow::Borrowed)
        } else {
            matrix.block(k, pivot).map(|block| Cow::Owned(block.transpose()))
        })
        .collect::<Result<Vec<_>>>()?;
    // K_ip K_pp^-1, with K_ip the transpose of K_pi
    let scaled = coupling.iter()
        .map(|block| block.transpose().multiply(&pivot_inverse))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let mut blocks = Vec::with_capacity(crate::index::block_count(E));
    for (new_row, &row) in remaining.iter().enumerate() {
        for (new_column, &column) in remaining.iter().enumerate().skip(new_row) {
            let update = scaled[new_row].multiply(&coupling[new_column])?;
            blocks.push(matrix.block(row, column)?.subtract(&update)?);
            trace!(row, column, new_row, new_column, "updated block");
        }
    }

    SymmetricBlockMatrix::try_from_blocks(blocks)
}

macro_rules! impl_condense {
    ($($dimension:literal => $condensed:literal),* $(,)?) => {
        $(
            impl<B: Block> SymmetricBlockMatrix<B, $dimension> {
                /// Eliminate block row and column `P`, resulting in a matrix that is one block
                /// smaller.
                ///
                /// The pivot index is checked while compiling.
                ///
                /// # Errors
                ///
                /// If the pivot block can't be inverted or the shapes of the blocks don't allow the
                /// update.
                pub fn condense<const P: usize>(&self) -> Result<SymmetricBlockMatrix<B, $condensed>> {
                    const { assert!(P < $dimension, "The condensation index is larger than the dimension.") };

                    condense(self, P)
                }

                /// Eliminate block row and column `pivot`, for a pivot known at run time.
                ///
                /// # Errors
                ///
                /// `MatrixError::IndexOutOfBounds` if the pivot is not smaller than the dimension,
                /// otherwise as for `condense`.
                pub fn condense_at(&self, pivot: usize) -> Result<SymmetricBlockMatrix<B, $condensed>> {
                    condense(self, pivot)
                }
            }
        )*
    };
}
impl_condense!(
    2 => 1, 3 => 2, 4 => 3, 5 => 4, 6 => 5, 7 => 6, 8 => 7, 9 => 8,
    10 => 9, 11 => 10, 12 => 11, 13 => 12, 14 => 13, 15 => 14, 16 => 15,
);
