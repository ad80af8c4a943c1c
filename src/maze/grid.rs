use super::cell::Cell;

/// Row-major storage with one value per cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    data: Box<[T]>,
    width: usize,
    height: usize,
}

impl<T: Clone> Grid<T> {
    pub fn new(height: usize, width: usize, value: T) -> Self {
        let data = vec![value; width * height].into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }
}

impl<T> Grid<T> {
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.0 < self.height && cell.1 < self.width
    }

    pub fn ravel_index(&self, cell: Cell) -> usize {
        cell.0 * self.width + cell.1
    }

    pub fn get(&self, cell: Cell) -> Option<&T> {
        self.contains(cell)
            .then(|| &self.data[self.ravel_index(cell)])
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }
}

impl<T> std::ops::Index<Cell> for Grid<T> {
    type Output = T;

    fn index(&self, index: Cell) -> &Self::Output {
        &self.data[self.ravel_index(index)]
    }
}

impl<T> std::ops::IndexMut<Cell> for Grid<T> {
    fn index_mut(&mut self, index: Cell) -> &mut Self::Output {
        let idx = self.ravel_index(index);
        &mut self.data[idx]
    }
}
