use crate::{
    error::SumError,
    matrix::Matrix,
    partition::{self, PartitionRange},
};

/// One unit of work: a matrix reference bound to the range of flattened
/// indices this worker is responsible for.
pub struct WorkerTask<'a> {
    matrix: &'a Matrix,
    range: PartitionRange,
}

impl<'a> WorkerTask<'a> {
    pub fn new(matrix: &'a Matrix, range: PartitionRange) -> Self {
        Self { matrix, range }
    }

    /// Accumulates the elements in this task's range into a private sum,
    /// starting from `0.0`. Pure computation over read-only data.
    pub fn run(&self) -> f64 {
        let shape = self.matrix.shape();
        let total = shape.size();

        let mut acc = 0.0;
        let mut i = self.range.start;

        while i < total && i < self.range.end() {
            let (row, col) = shape.unflatten(i);
            acc += self.matrix.get(row, col);
            i += 1;
        }

        acc
    }
}

/// Runs one task per range on its own thread and collects the results in
/// launch order. The first panicked worker turns into `WorkerFailure`;
/// results from the rest are discarded.
fn execute<F>(ranges: &[PartitionRange], task: F) -> Result<Vec<f64>, SumError>
where
    F: Fn(PartitionRange) -> f64 + Copy + Send,
{
    std::thread::scope(|scope| {
        let handles = ranges.iter().map(|&range| scope.spawn(move || task(range))).collect::<Vec<_>>();

        let mut partials = Vec::with_capacity(handles.len());
        let mut failure = None;

        for (worker, handle) in handles.into_iter().enumerate() {
            match handle.join() {
                Ok(partial) => partials.push(partial),
                Err(payload) => {
                    if failure.is_none() {
                        failure = Some(SumError::WorkerFailure { worker, cause: panic_message(payload.as_ref()) });
                    }
                }
            }
        }

        match failure {
            Some(err) => Err(err),
            None => Ok(partials),
        }
    })
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

/// Sums every element of `matrix` using up to `workers` parallel workers.
///
/// The element range is partitioned per [`partition::layout`], one scoped
/// thread is launched per range, and the partial sums are folded in launch
/// order (ascending range start). Fixing the fold order makes the result
/// deterministic for a given `(matrix, workers)` pair, though not
/// bit-identical across different worker counts.
///
/// Fails with `InvalidConfiguration` when `workers` is zero (nothing is
/// launched) and with `WorkerFailure` when a worker terminates abnormally.
pub fn sum(matrix: &Matrix, workers: usize) -> Result<f64, SumError> {
    if workers == 0 {
        return Err(SumError::InvalidConfiguration);
    }

    let ranges = partition::layout(matrix.shape().size(), workers);
    let partials = execute(&ranges, |range| WorkerTask::new(matrix, range).run())?;

    Ok(partials.into_iter().sum())
}
