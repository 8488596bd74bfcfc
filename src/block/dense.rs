//! # Dense blocks
//!
//! Blocks that are themselves matrices of scalars. Their size is only known at run time, so the
//! arithmetic checks the shapes of its operands.
use std::cmp::Ordering;
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::ops::Index;

use crate::block::{Block, Scalar};
use crate::error::BlockError;

/// Dense matrix, stored row-major.
///
/// Off-diagonal blocks of a symmetric block matrix don't need to be square: block `(i, j)` has as
/// many rows as the diagonal block `(i, i)` and as many columns as the diagonal block `(j, j)`.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct DenseBlock<F> {
    values: Vec<F>,
    nr_rows: usize,
    nr_columns: usize,
}

impl<F: Scalar> DenseBlock<F> {
    /// Create a block from row-major values.
    ///
    /// # Errors
    ///
    /// If the number of values is not `nr_rows * nr_columns`.
    pub fn new(values: Vec<F>, nr_rows: usize, nr_columns: usize) -> Result<Self, BlockError> {
        let expected = nr_rows * nr_columns;
        if values.len() == expected {
            Ok(Self { values, nr_rows, nr_columns })
        } else {
            Err(BlockError::DataLength { expected, actual: values.len() })
        }
    }

    /// Create a block from a list of rows.
    ///
    /// # Errors
    ///
    /// If the rows are not all of the same length.
    pub fn from_rows(rows: Vec<Vec<F>>) -> Result<Self, BlockError> {
        let nr_rows = rows.len();
        let nr_columns = rows.first().map_or(0, Vec::len);
        if let Some(row) = rows.iter().find(|row| row.len() != nr_columns) {
            return Err(BlockError::DataLength { expected: nr_columns, actual: row.len() });
        }

        Self::new(rows.into_iter().flatten().collect(), nr_rows, nr_columns)
    }

    /// Square block with ones on the diagonal.
    #[must_use]
    pub fn identity(len: usize) -> Self {
        let values = (0..len * len)
            .map(|i| if i / len == i % len { F::one() } else { F::zero() })
            .collect();

        Self { values, nr_rows: len, nr_columns: len }
    }

    /// Block of zeros.
    #[must_use]
    pub fn zeros(nr_rows: usize, nr_columns: usize) -> Self {
        Self { values: vec![F::zero(); nr_rows * nr_columns], nr_rows, nr_columns }
    }

    /// Multiply every value with a scalar.
    #[must_use]
    pub fn scale(&self, factor: &F) -> Self {
        Self {
            values: self.values.iter().map(|value| value.clone() * factor.clone()).collect(),
            nr_rows: self.nr_rows,
            nr_columns: self.nr_columns,
        }
    }
}

impl<F> DenseBlock<F> {
    /// Value at (`row`, `column`), if within bounds.
    pub fn get(&self, row: usize, column: usize) -> Option<&F> {
        if row < self.nr_rows && column < self.nr_columns {
            self.values.get(row * self.nr_columns + column)
        } else {
            None
        }
    }

    /// Iterate over the rows.
    pub fn rows(&self) -> impl Iterator<Item=&[F]> {
        (0..self.nr_rows).map(move |i| &self.values[i * self.nr_columns..(i + 1) * self.nr_columns])
    }

    /// Number of rows.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Number of columns.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    /// Shape as (rows, columns).
    pub fn shape(&self) -> (usize, usize) {
        (self.nr_rows, self.nr_columns)
    }

    /// Whether the number of rows equals the number of columns.
    pub fn is_square(&self) -> bool {
        self.nr_rows == self.nr_columns
    }

    fn swap_rows(values: &mut [F], width: usize, first: usize, second: usize) {
        for k in 0..width {
            values.swap(first * width + k, second * width + k);
        }
    }
}

impl<F> Index<(usize, usize)> for DenseBlock<F> {
    type Output = F;

    fn index(&self, (row, column): (usize, usize)) -> &Self::Output {
        debug_assert!(row < self.nr_rows);
        debug_assert!(column < self.nr_columns);

        &self.values[row * self.nr_columns + column]
    }
}

impl<F: Scalar> Block for DenseBlock<F> {
    /// Gauss-Jordan elimination with partial pivoting.
    ///
    /// The pivot in each column is the remaining value of largest magnitude. The block is singular
    /// when that value is negligible relative to the sum of the magnitudes of all values.
    fn inverse(&self) -> Result<Self, BlockError> {
        if !self.is_square() {
            return Err(BlockError::NotSquare { rows: self.nr_rows, columns: self.nr_columns });
        }

        let n = self.nr_rows;
        let scale = self.values.iter()
            .map(Scalar::magnitude)
            .fold(F::zero(), |total, value| total + value);
        let mut work = self.values.clone();
        let mut inverse = Self::identity(n).values;

        for column in 0..n {
            let pivot_row = (column..n)
                .max_by(|&first, &second| {
                    let first = work[first * n + column].magnitude();
                    let second = work[second * n + column].magnitude();
                    first.partial_cmp(&second).unwrap_or(Ordering::Equal)
                })
                .ok_or(BlockError::Singular)?;
            if work[pivot_row * n + column].is_negligible(&scale) {
                return Err(BlockError::Singular);
            }
            if pivot_row != column {
                Self::swap_rows(&mut work, n, pivot_row, column);
                Self::swap_rows(&mut inverse, n, pivot_row, column);
            }

            let pivot = work[column * n + column].clone();
            for k in 0..n {
                work[column * n + k] = work[column * n + k].clone() / pivot.clone();
                inverse[column * n + k] = inverse[column * n + k].clone() / pivot.clone();
            }

            for row in (0..n).filter(|&row| row != column) {
                let factor = work[row * n + column].clone();
                if factor.is_zero() {
                    continue;
                }

                for k in 0..n {
                    work[row * n + k] = work[row * n + k].clone() - factor.clone() * work[column * n + k].clone();
                    inverse[row * n + k] = inverse[row * n + k].clone() - factor.clone() * inverse[column * n + k].clone();
                }
            }
        }

        Ok(Self { values: inverse, nr_rows: n, nr_columns: n })
    }

    fn multiply(&self, rhs: &Self) -> Result<Self, BlockError> {
        if self.nr_columns != rhs.nr_rows {
            return Err(BlockError::ShapeMismatch {
                operation: "multiply",
                left: self.shape(),
                right: rhs.shape(),
            });
        }

        let mut values = Vec::with_capacity(self.nr_rows * rhs.nr_columns);
        for i in 0..self.nr_rows {
            for j in 0..rhs.nr_columns {
                let inner_product = (0..self.nr_columns)
                    .map(|k| self[(i, k)].clone() * rhs[(k, j)].clone())
                    .fold(F::zero(), |total, term| total + term);
                values.push(inner_product);
            }
        }

        Ok(Self { values, nr_rows: self.nr_rows, nr_columns: rhs.nr_columns })
    }

    fn subtract(&self, rhs: &Self) -> Result<Self, BlockError> {
        if self.shape() != rhs.shape() {
            return Err(BlockError::ShapeMismatch {
                operation: "subtract",
                left: self.shape(),
                right: rhs.shape(),
            });
        }

        Ok(Self {
            values: self.values.iter().zip(&rhs.values)
                .map(|(left, right)| left.clone() - right.clone())
                .collect(),
            nr_rows: self.nr_rows,
            nr_columns: self.nr_columns,
        })
    }

    fn transpose(&self) -> Self {
        let values = (0..self.nr_columns)
            .flat_map(|j| (0..self.nr_rows).map(move |i| self[(i, j)].clone()))
            .collect();

        Self { values, nr_rows: self.nr_columns, nr_columns: self.nr_rows }
    }
}

impl<F: Display> Display for DenseBlock<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        write!(f, "[")?;
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", value)?;
            }
        }
        write!(f, "]")
    }
}
