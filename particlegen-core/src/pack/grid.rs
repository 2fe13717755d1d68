use std::ops::{Index, IndexMut};

/// Square, row-major grid of cells. Indexed by `(row, col)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    dim: u32,
    cells: Vec<T>,
}

impl<T: Copy> Grid<T> {
    pub fn filled(dim: u32, fill: T) -> Self {
        let len = dim as usize * dim as usize;
        Self { dim, cells: vec![fill; len] }
    }

    pub fn dim(&self) -> u32 {
        self.dim
    }

    pub fn get(&self, row: u32, col: u32) -> Option<T> {
        self.offset(row, col).map(|i| self.cells[i])
    }

    /// Cell at linear raster index `i`.
    pub fn at(&self, i: usize) -> Option<T> {
        self.cells.get(i).copied()
    }

    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    fn offset(&self, row: u32, col: u32) -> Option<usize> {
        (row < self.dim && col < self.dim).then(|| row as usize * self.dim as usize + col as usize)
    }
}

impl<T: Copy> Index<(u32, u32)> for Grid<T> {
    type Output = T;

    fn index(&self, (row, col): (u32, u32)) -> &T {
        match self.offset(row, col) {
            Some(i) => &self.cells[i],
            None => panic!("cell ({}, {}) outside {}x{} grid", row, col, self.dim, self.dim),
        }
    }
}

impl<T: Copy> IndexMut<(u32, u32)> for Grid<T> {
    fn index_mut(&mut self, (row, col): (u32, u32)) -> &mut T {
        match self.offset(row, col) {
            Some(i) => &mut self.cells[i],
            None => panic!("cell ({}, {}) outside {}x{} grid", row, col, self.dim, self.dim),
        }
    }
}
