use anyhow::Context;
use matsum::{matrix::Matrix, reduce, shape::Shape};
use rand_distr::{Distribution, Normal};
use structopt::StructOpt;

use std::time::Instant;

#[derive(StructOpt)]
pub struct SumOptions {
    #[structopt(short, long, default_value = "1024")]
    rows: usize,
    #[structopt(short, long, default_value = "1024")]
    cols: usize,
    #[structopt(short, long, default_value = "4")]
    workers: usize,
}

impl SumOptions {
    pub fn run(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.rows > 0 && self.cols > 0, "Matrix must have at least one row and one column.");

        let shape = Shape::new(self.rows, self.cols);
        let normal = Normal::new(0.0, 1.0)?;
        let mut rng = rand::thread_rng();

        let matrix = Matrix::from_fn(shape, |_, _| normal.sample(&mut rng));
        println!("Generated {shape} matrix ({} elements).", shape.size());

        let timer = Instant::now();
        let mut sequential = 0.0;
        for row in 0..shape.rows() {
            for col in 0..shape.cols() {
                sequential += matrix.get(row, col);
            }
        }
        println!("Sequential: {sequential:.6} in {:.3?}", timer.elapsed());

        let timer = Instant::now();
        let parallel =
            reduce::sum(&matrix, self.workers).with_context(|| "Failed to reduce matrix.")?;
        println!("Parallel ({} workers): {parallel:.6} in {:.3?}", self.workers, timer.elapsed());

        Ok(())
    }
}
