//! # Condensation as a Schur complement
//!
//! Systems are condensed block by block and compared against the Schur complement of the
//! assembled matrix, or against values computed by hand.
use relp_num::{RB, RationalBig};

use symblock::{Block, DenseBlock};

/// # Condensing scalar and dense systems
#[allow(missing_docs)]
mod test;

/// Dense matrix of rationals from integer rows.
fn dense(rows: &[&[i32]]) -> DenseBlock<RationalBig> {
    DenseBlock::from_rows(rows.iter()
        .map(|row| row.iter().map(|&v| RB!(v)).collect())
        .collect()
    ).unwrap()
}

/// The rows and columns of `matrix` with the given indices.
fn select(matrix: &DenseBlock<RationalBig>, rows: &[usize], columns: &[usize]) -> DenseBlock<RationalBig> {
    DenseBlock::from_rows(rows.iter()
        .map(|&i| columns.iter().map(|&j| matrix[(i, j)].clone()).collect())
        .collect()
    ).unwrap()
}

/// Schur complement of the principal sub-matrix `eliminated` of an assembled matrix.
fn schur_complement(matrix: &DenseBlock<RationalBig>, eliminated: &[usize]) -> DenseBlock<RationalBig> {
    let remaining = (0..matrix.nr_rows())
        .filter(|i| !eliminated.contains(i))
        .collect::<Vec<_>>();

    let kept = select(matrix, &remaining, &remaining);
    let coupling = select(matrix, &remaining, eliminated);
    let pivot = select(matrix, eliminated, eliminated);

    let update = coupling
        .multiply(&pivot.inverse().unwrap()).unwrap()
        .multiply(&coupling.transpose()).unwrap();
    kept.subtract(&update).unwrap()
}
