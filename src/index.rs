//! # Upper triangle indexing
//!
//! The blocks `(row, column)` with `row <= column` of a square grid of dimension `D` are stored
//! row after row. Row `r` holds the `D - r` blocks in columns `r..D`, so it starts after
//! `D + (D - 1) + ... + (D - r + 1)` blocks.
//!
//! All functions are `const`, such that offsets of constant indices are computed (and checked)
//! while compiling.

/// Number of blocks in the upper triangle of a grid of dimension `dimension`.
#[must_use]
pub const fn block_count(dimension: usize) -> usize {
    dimension * (dimension + 1) / 2
}

/// Position of block `(row, column)` in the row-major upper triangle.
///
/// # Panics
///
/// When `row > column` or `column >= dimension`. In a const context, this is a compile error.
///
/// ```compile_fail
/// // Lower triangle
/// const OFFSET: usize = symblock::index::offset(3, 2, 1);
/// assert_eq!(OFFSET, 5);
/// ```
#[must_use]
pub const fn offset(dimension: usize, row: usize, column: usize) -> usize {
    assert!(row <= column, "only the upper triangle is stored");
    assert!(column < dimension, "index exceeds the dimension");

    ((2 * dimension - 1 - row) * row) / 2 + column
}

/// Position of block `(row, column)`, or `None` if that block isn't stored.
#[must_use]
pub const fn checked_offset(dimension: usize, row: usize, column: usize) -> Option<usize> {
    if row <= column && column < dimension {
        Some(offset(dimension, row, column))
    } else {
        None
    }
}

/// The `(row, column)` coordinates of the block stored at position `offset`.
///
/// Inverse of [`offset`]. `None` if the offset is not smaller than [`block_count`].
#[must_use]
pub const fn coordinates(dimension: usize, offset: usize) -> Option<(usize, usize)> {
    if offset >= block_count(dimension) {
        return None;
    }

    let mut row = 0;
    let mut row_start = 0;
    while offset >= row_start + (dimension - row) {
        row_start += dimension - row;
        row += 1;
    }

    Some((row, row + (offset - row_start)))
}
