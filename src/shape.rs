#[derive(Clone, Copy, Hash, PartialEq, Eq)]
pub struct Shape {
    rows: usize,
    cols: usize,
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} x {}", self.rows, self.cols)
    }
}

impl std::fmt::Debug for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} x {}", self.rows, self.cols)
    }
}

impl Shape {
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0, "Cannot have 0 rows!");
        assert!(cols > 0, "Cannot have 0 columns!");
        Self { rows, cols }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn size(&self) -> usize {
        self.cols * self.rows
    }

    /// Row-major flat index of `(row, col)`.
    pub fn flatten(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Inverse of [`Self::flatten`].
    pub fn unflatten(&self, index: usize) -> (usize, usize) {
        (index / self.cols, index % self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_index_round_trip() {
        let shape = Shape::new(3, 5);

        for index in 0..shape.size() {
            let (row, col) = shape.unflatten(index);
            assert!(row < 3 && col < 5);
            assert_eq!(shape.flatten(row, col), index);
        }
    }
}
