use crate::shape::Shape;

/// A rectangular matrix of `f64`, stored row-major. The reduction engine
/// only ever reads it; mutation after construction is not exposed.
pub struct Matrix {
    buf: Vec<f64>,
    shape: Shape,
}

impl Matrix {
    /// Builds a matrix from nested rows, returning `None` if the input is
    /// empty or ragged.
    pub fn from_rows(rows: &[Vec<f64>]) -> Option<Self> {
        let cols = rows.first()?.len();

        if cols == 0 || rows.iter().any(|row| row.len() != cols) {
            return None;
        }

        let mut buf = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            buf.extend_from_slice(row);
        }

        Some(Self { buf, shape: Shape::new(rows.len(), cols) })
    }

    pub fn from_fn<F: FnMut(usize, usize) -> f64>(shape: Shape, mut f: F) -> Self {
        let mut buf = Vec::with_capacity(shape.size());

        for row in 0..shape.rows() {
            for col in 0..shape.cols() {
                buf.push(f(row, col));
            }
        }

        Self { buf, shape }
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.buf[self.shape.flatten(row, col)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_rejects_ragged_input() {
        assert!(Matrix::from_rows(&[]).is_none());
        assert!(Matrix::from_rows(&[vec![]]).is_none());
        assert!(Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).is_none());
    }

    #[test]
    fn from_rows_stores_row_major() {
        let matrix = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();

        assert_eq!(matrix.shape(), Shape::new(2, 2));
        assert_eq!(matrix.get(0, 1), 2.0);
        assert_eq!(matrix.get(1, 0), 3.0);
    }
}
