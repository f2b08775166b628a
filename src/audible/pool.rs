use rayon::prelude::*;

use crate::error::{Error, Result};

/// Run `task` for every item on a dedicated pool of exactly `jobs` threads.
///
/// Each task gets the item's index. Results are returned in item order.
pub fn run_bounded<I, T, F>(items: &[I], jobs: usize, task: F) -> Result<Vec<T>>
where
    I: Sync,
    T: Send,
    F: Fn(usize, &I) -> T + Sync,
{
    // rayon reads 0 threads as "one per CPU"
    if jobs == 0 {
        return Err(Error::InvalidConfig("jobs must be >= 1".into()));
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .thread_name(|i| format!("convert-{i}"))
        .build()?;
    Ok(pool.install(|| {
        items
            .par_iter()
            .enumerate()
            .map(|(index, item)| task(index, item))
            .collect()
    }))
}
