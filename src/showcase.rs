//! Runs every demonstration once, in a fixed order, against one output sink.
//!
//! Each async step is awaited before the next statement starts, so the
//! transcript is the same whichever wrapper variant does the work.

use crate::config::ShowcaseConfig;
use crate::error::Result;
use crate::escapes;
use crate::index_from_end;
use crate::locking::{self, CriticalSection, SharedBuffer};
use crate::params;
use crate::stack_buffer;
use colored::Colorize;
use std::io::Write;

/// What a run produced, besides the text itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    pub lines: usize,
    pub async_checksum: u64,
    pub legacy_checksum: u64,
    pub lock_entries: Option<u64>,
}

fn banner(config: &ShowcaseConfig, title: &str) {
    if config.verbose {
        eprintln!("{}", format!("=== {} ===", title).bold().cyan());
    }
}

pub async fn run<W: Write + ?Sized>(out: &mut W, config: &ShowcaseConfig) -> Result<Transcript> {
    let mut lines = 0;

    banner(config, "Parameter Collections");
    lines += params::print_numbers(out, &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10])?;
    lines += params::print_words(out, &["one", "two", "three", "four", "five"])?;
    lines += params::print_numbers_legacy(out, &[1, 2, 3])?;

    banner(config, "Escape Sequences");
    lines += escapes::print_styled(out)?;

    banner(config, "Index From End");
    index_from_end::implicit_index_access(out)?;
    index_from_end::implicit_index_access_legacy(out)?;
    lines += 2;

    let lock_entries = if config.lock_demo {
        banner(config, "Scoped Locking");
        let section = CriticalSection::new();
        let sink = SharedBuffer::new();
        let entries = locking::run_contended(&section, config.lock_threads, |_| sink.clone())?;
        out.write_all(&sink.contents())?;
        lines += entries as usize;
        Some(entries)
    } else {
        None
    };

    banner(config, "Stack Buffers Behind Async Wrappers");
    let async_checksum = stack_buffer::process_data_async(config.delay()).await;
    let legacy_checksum = stack_buffer::process_data_async_legacy().await?;

    out.flush()?;

    Ok(Transcript {
        lines,
        async_checksum,
        legacy_checksum,
        lock_entries,
    })
}
