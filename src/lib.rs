//! Side-by-side demonstrations of modern and legacy forms of five everyday
//! patterns: parameter collections, escape sequences, index-from-end access,
//! scoped locking, and stack buffers behind async wrappers.
//!
//! Every demonstration writes to a caller-supplied `std::io::Write`, so the
//! binary prints to stdout while tests capture into a `Vec<u8>`.

pub mod config;
pub mod error;
pub mod escapes;
pub mod index_from_end;
pub mod locking;
pub mod params;
pub mod showcase;
pub mod stack_buffer;

pub use config::ShowcaseConfig;
pub use error::{Result, ShowcaseError};
pub use showcase::{run, Transcript};
