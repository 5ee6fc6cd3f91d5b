/// Contains the `SumError` type returned by the reduction driver.
pub mod error;
/// Contains the `Matrix` type, a rectangular row-major array of `f64`.
pub mod matrix;
/// Contains `PartitionRange` and the range layout over flattened indices.
pub mod partition;
/// Contains the worker task and the parallel reduction driver.
pub mod reduce;
/// Contains the `Shape` type describing a matrix extent.
pub mod shape;
