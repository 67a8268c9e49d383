//! Square matrix backing for the adjacency store
//!
//! The weight matrix and both metadata matrices share this representation
//! so they can be grown and compacted in lockstep.

use std::ops::{Index, IndexMut};

/// A dense square matrix stored row-major in a flat `Vec`.
///
/// Every resize rebuilds the full backing vector; at the vertex counts this
/// engine targets an O(V²) copy per add/remove is the simplest correct
/// strategy.
#[derive(Debug, Clone)]
pub(crate) struct SquareMatrix<T> {
    dim: usize,
    cells: Vec<T>,
}

impl<T: Clone> SquareMatrix<T> {
    pub fn new() -> Self {
        SquareMatrix {
            dim: 0,
            cells: Vec::new(),
        }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Append one row and one column, filling the new cells with `fill`.
    pub fn grow(&mut self, fill: T) {
        let old = self.dim;
        let new = old + 1;
        let mut cells = Vec::with_capacity(new * new);
        for row in 0..new {
            for col in 0..new {
                if row < old && col < old {
                    cells.push(self.cells[row * old + col].clone());
                } else {
                    cells.push(fill.clone());
                }
            }
        }
        self.dim = new;
        self.cells = cells;
    }

    /// Delete row `index` and column `index`, shifting later rows and
    /// columns down by one.
    pub fn remove(&mut self, index: usize) {
        debug_assert!(index < self.dim);
        let old = self.dim;
        let new = old - 1;
        let mut cells = Vec::with_capacity(new * new);
        for row in 0..old {
            if row == index {
                continue;
            }
            for col in 0..old {
                if col == index {
                    continue;
                }
                cells.push(self.cells[row * old + col].clone());
            }
        }
        self.dim = new;
        self.cells = cells;
    }
}

impl<T> Index<(usize, usize)> for SquareMatrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.cells[row * self.dim + col]
    }
}

impl<T> IndexMut<(usize, usize)> for SquareMatrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.cells[row * self.dim + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grow_preserves_existing_cells() {
        let mut m: SquareMatrix<i64> = SquareMatrix::new();
        m.grow(0);
        m[(0, 0)] = 7;
        m.grow(-1);
        assert_eq!(m.dim(), 2);
        assert_eq!(m[(0, 0)], 7);
        assert_eq!(m[(0, 1)], -1);
        assert_eq!(m[(1, 0)], -1);
        assert_eq!(m[(1, 1)], -1);
    }

    #[test]
    fn remove_shifts_later_rows_and_columns() {
        let mut m: SquareMatrix<u32> = SquareMatrix::new();
        for _ in 0..3 {
            m.grow(0);
        }
        for row in 0..3 {
            for col in 0..3 {
                m[(row, col)] = (row * 10 + col) as u32;
            }
        }
        m.remove(1);
        assert_eq!(m.dim(), 2);
        assert_eq!(m[(0, 0)], 0);
        assert_eq!(m[(0, 1)], 2);
        assert_eq!(m[(1, 0)], 20);
        assert_eq!(m[(1, 1)], 22);
    }

    #[test]
    fn remove_to_empty() {
        let mut m: SquareMatrix<f64> = SquareMatrix::new();
        m.grow(f64::INFINITY);
        m.remove(0);
        assert_eq!(m.dim(), 0);
    }
}
