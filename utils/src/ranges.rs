use matsum::{partition, shape::Shape};
use structopt::StructOpt;

#[derive(StructOpt)]
pub struct RangesOptions {
    #[structopt(short, long)]
    rows: usize,
    #[structopt(short, long)]
    cols: usize,
    #[structopt(short, long)]
    workers: usize,
}

impl RangesOptions {
    pub fn run(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.rows > 0 && self.cols > 0, "Matrix must have at least one row and one column.");
        anyhow::ensure!(self.workers > 0, "Worker count must be positive.");

        let shape = Shape::new(self.rows, self.cols);
        let ranges = partition::layout(shape.size(), self.workers);

        println!("{} elements ({shape}), {} live workers of {} requested.", shape.size(), ranges.len(), self.workers);

        for (worker, range) in ranges.iter().enumerate() {
            let (from_row, from_col) = shape.unflatten(range.start);
            let (to_row, to_col) = shape.unflatten(range.end() - 1);

            println!(
                "Worker {worker}: indices [{}, {}), from position ({from_row}, {from_col}) to position ({to_row}, {to_col}).",
                range.start,
                range.end(),
            );
        }

        Ok(())
    }
}
