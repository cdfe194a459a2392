//! Pattern 4: Scoped Locking
//! Guard-scoped release versus an explicitly paired acquire/release.
//!
//! Both forms go through the same `Mutex`, so only one caller at a time runs
//! the protected print. The guard form releases when the block ends; the
//! manual form releases with an explicit `drop`, placed so that it still runs
//! when the write fails.

use crate::error::Result;
use colored::Colorize;
use std::io::{self, Write};
use std::panic;
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;

pub const CRITICAL_MESSAGE: &str = "Thread-safe code here.";

/// One illustrative critical section with an entry counter.
#[derive(Debug, Default)]
pub struct CriticalSection {
    entries: Mutex<u64>,
}

impl CriticalSection {
    pub fn new() -> Self {
        Self::default()
    }

    // A panic inside the section poisons the mutex; the counter is still valid.
    fn acquire(&self) -> MutexGuard<'_, u64> {
        match self.entries.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                eprintln!(
                    "  {} critical section was poisoned, recovering...",
                    "[WARN]".yellow()
                );
                poisoned.into_inner()
            }
        }
    }

    /// Guard-scoped form. Returns the entry number of this call.
    pub fn enter_scope<W: Write + ?Sized>(&self, out: &mut W) -> Result<u64> {
        let mut entries = self.acquire();
        *entries += 1;
        writeln!(out, "{}", CRITICAL_MESSAGE)?;
        Ok(*entries)
    }

    /// Explicit acquire, explicit release.
    pub fn enter_manual<W: Write + ?Sized>(&self, out: &mut W) -> Result<u64> {
        let mut entries = self.acquire();
        *entries += 1;
        let entry = *entries;
        let written = writeln!(out, "{}", CRITICAL_MESSAGE);
        drop(entries);
        written?;
        Ok(entry)
    }

    pub fn entries(&self) -> u64 {
        *self.acquire()
    }
}

/// Cloneable in-memory sink; each `write` call appends under a short lock.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Vec<u8> {
        match self.inner.lock() {
            Ok(bytes) => bytes.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut bytes = self
            .inner
            .lock()
            .map_err(|_| io::Error::other("shared buffer poisoned"))?;
        bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Enters `section` once from each of `threads` scoped threads. Even-numbered
/// threads use the guard form, odd-numbered ones the manual form.
/// Returns the section's entry count afterwards.
pub fn run_contended<W, F>(section: &CriticalSection, threads: usize, make_writer: F) -> Result<u64>
where
    W: Write,
    F: Fn(usize) -> W + Sync,
{
    let outcomes: Vec<Result<u64>> = thread::scope(|s| {
        let handles: Vec<_> = (0..threads)
            .map(|id| {
                let make_writer = &make_writer;
                s.spawn(move || {
                    let mut out = make_writer(id);
                    if id % 2 == 0 {
                        section.enter_scope(&mut out)
                    } else {
                        section.enter_manual(&mut out)
                    }
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| match handle.join() {
                Ok(outcome) => outcome,
                Err(payload) => panic::resume_unwind(payload),
            })
            .collect()
    });

    for outcome in outcomes {
        outcome?;
    }
    Ok(section.entries())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Pushes one byte per `write` call and yields in between, so any
    /// unsynchronised writers would interleave.
    struct Trickle(SharedBuffer);

    impl Write for Trickle {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            match buf.first() {
                Some(byte) => {
                    self.0.write_all(std::slice::from_ref(byte))?;
                    thread::yield_now();
                    Ok(1)
                }
                None => Ok(0),
            }
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn both_forms_print_the_same_line() {
        let section = CriticalSection::new();
        let mut scoped = Vec::new();
        let mut manual = Vec::new();

        assert_eq!(section.enter_scope(&mut scoped).unwrap(), 1);
        assert_eq!(section.enter_manual(&mut manual).unwrap(), 2);
        assert_eq!(scoped, manual);
        assert_eq!(scoped, b"Thread-safe code here.\n");
    }

    #[test]
    fn lock_is_released_when_the_write_fails() {
        let section = CriticalSection::new();

        assert!(section.enter_scope(&mut Broken).is_err());
        assert!(section.enter_manual(&mut Broken).is_err());

        // would deadlock if either call had kept the lock
        let mut out = Vec::new();
        assert_eq!(section.enter_scope(&mut out).unwrap(), 3);
    }

    #[test]
    fn lock_is_released_after_a_panic() {
        let section = CriticalSection::new();

        let result = panic::catch_unwind(panic::AssertUnwindSafe(|| {
            let _guard = section.acquire();
            panic!("boom");
        }));
        assert!(result.is_err());

        let mut out = Vec::new();
        assert_eq!(section.enter_manual(&mut out).unwrap(), 1);
    }

    #[test]
    fn concurrent_prints_never_interleave() {
        let section = CriticalSection::new();
        let sink = SharedBuffer::new();

        let entries = run_contended(&section, 8, |_| Trickle(sink.clone())).unwrap();
        assert_eq!(entries, 8);

        let text = String::from_utf8(sink.contents()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert!(lines.iter().all(|line| *line == CRITICAL_MESSAGE));
    }

    #[test]
    fn poisoned_shared_buffer_reports_an_io_error() {
        let mut sink = SharedBuffer::new();
        let inner = Arc::clone(&sink.inner);
        let result = panic::catch_unwind(panic::AssertUnwindSafe(|| {
            let _bytes = inner.lock().unwrap();
            panic!("boom");
        }));
        assert!(result.is_err());

        let err = sink.write(b"x").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Other);
        assert_eq!(err.to_string(), "shared buffer poisoned");
    }

    #[test]
    fn contended_errors_are_propagated() {
        let section = CriticalSection::new();
        assert!(run_contended(&section, 2, |_| Broken).is_err());
        assert_eq!(section.entries(), 2);
    }
}
