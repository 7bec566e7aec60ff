//! In-place geometric transforms of a square matrix.
//!
//! All of these run in O(N²) and only ever swap two cells at a time.

use crate::SquareMatrix;

/// Mirror the matrix along its main diagonal.
pub fn transpose<M: SquareMatrix + ?Sized>(matrix: &mut M) {
    let size = matrix.size();
    for row in 0..size {
        for col in row + 1..size {
            matrix.swap((row, col), (col, row));
        }
    }
}

/// Rotate clockwise by a quarter turn.
pub fn rotate_90<M: SquareMatrix + ?Sized>(matrix: &mut M) {
    let size = matrix.size();
    transpose(matrix);
    for row in 0..size {
        for col in 0..size / 2 {
            matrix.swap((row, col), (row, size - 1 - col));
        }
    }
}

/// Rotate counter-clockwise by a quarter turn.
pub fn rotate_neg_90<M: SquareMatrix + ?Sized>(matrix: &mut M) {
    let size = matrix.size();
    transpose(matrix);
    for col in 0..size {
        for row in 0..size / 2 {
            matrix.swap((row, col), (size - 1 - row, col));
        }
    }
}

/// Rotate by a half turn.
pub fn rotate_180<M: SquareMatrix + ?Sized>(matrix: &mut M) {
    let size = matrix.size();
    for row in 0..size / 2 {
        for col in 0..size {
            matrix.swap((row, col), (size - 1 - row, size - 1 - col));
        }
    }
    // With an odd size, the middle row is mirrored onto itself, so only
    // its left half may be swapped.
    if size % 2 == 1 {
        let mid = size / 2;
        for col in 0..size / 2 {
            matrix.swap((mid, col), (mid, size - 1 - col));
        }
    }
}
