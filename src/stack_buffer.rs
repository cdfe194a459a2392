//! Pattern 5: Stack Buffers Behind Async Wrappers
//! A fixed-size scratch buffer that never leaves its call frame.
//!
//! An `async fn` keeps every local that is alive across an `.await` inside its
//! future, so a buffer held over the suspension point would move off the
//! stack and into the task. The modern form ends the buffer's scope before
//! awaiting. The legacy form pushes the synchronous work onto the blocking
//! pool and awaits the join handle.

use crate::error::Result;
use std::time::Duration;

pub const SCRATCH_LEN: usize = 1024;

/// Fills a stack-allocated scratch buffer and returns its checksum.
/// Only the checksum leaves the function.
pub fn process_data() -> u64 {
    let mut buffer = [0u8; SCRATCH_LEN];
    for (i, byte) in buffer.iter_mut().enumerate() {
        *byte = (i % 251) as u8;
    }
    checksum(&buffer)
}

fn checksum(buffer: &[u8; SCRATCH_LEN]) -> u64 {
    buffer.iter().map(|&b| u64::from(b)).sum()
}

/// Does the buffer work inline, then suspends for `delay` without blocking
/// the worker thread.
pub async fn process_data_async(delay: Duration) -> u64 {
    // the buffer lives and dies inside process_data's frame
    let sum = process_data();
    tokio::time::sleep(delay).await;
    sum
}

/// Offloads the buffer work to the blocking pool and waits for it.
pub async fn process_data_async_legacy() -> Result<u64> {
    let sum = tokio::task::spawn_blocking(process_data).await?;
    Ok(sum)
}
