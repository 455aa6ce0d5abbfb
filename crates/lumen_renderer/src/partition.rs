//! Row partitioning for parallel rendering.
//!
//! Divides the image into contiguous bands of rows, one band per worker.

use std::ops::Range;

/// Split `height` rows into contiguous, disjoint ranges for `workers` workers.
///
/// Every range gets `height / workers` rows and the last one also takes the
/// remainder, so the ranges cover `0..height` exactly once. The worker count
/// is clamped to `1..=height`; a zero-height image yields no ranges.
pub fn partition_rows(height: u32, workers: usize) -> Vec<Range<u32>> {
    if height == 0 {
        return Vec::new();
    }

    let workers = workers.clamp(1, height as usize) as u32;
    let rows_per_worker = height / workers;

    (0..workers)
        .map(|i| {
            let start = i * rows_per_worker;
            let end = if i == workers - 1 {
                height
            } else {
                start + rows_per_worker
            };
            start..end
        })
        .collect()
}
