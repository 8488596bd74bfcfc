//! # Symmetric block matrices
//!
//! A symmetric matrix partitioned into a grid of blocks is stored using only the blocks of its
//! upper triangle. One block row and column can be eliminated from such a matrix by static
//! condensation: the pivot block is inverted and all other blocks receive a Schur complement
//! update, resulting in a symmetric block matrix that is one block smaller.
//!
//! The blocks can be scalars, dense matrices or any other value implementing [`Block`]. The
//! dimension of the block grid is a constant, such that inconsistent shapes and indices are
//! rejected while compiling.
//!
//! ```
//! use symblock::symmetric_block_matrix;
//!
//! let matrix = symmetric_block_matrix![3;
//!     1_f64, 2_f64, 3_f64,
//!            4_f64, 5_f64,
//!                   6_f64,
//! ];
//! let condensed = matrix.condense::<0>().unwrap();
//! assert_eq!(condensed.dimension(), 2);
//! assert_eq!(*condensed.get_block::<0, 0>(), 0_f64);
//! ```
#![warn(missing_docs)]

pub use block::Block;
pub use block::dense::DenseBlock;
pub use block::mixed::MixedBlock;
pub use error::{BlockError, MatrixError, Result};
pub use matrix::{MAX_DIMENSION, SymmetricBlockMatrix};

pub mod block;
pub mod error;
pub mod index;
pub mod matrix;
