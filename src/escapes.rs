//! Pattern 2: Escape Sequences
//! The same ANSI SGR codes spelled two ways.
//!
//! `\u{1b}` names the escape character by code point, `\x1b` spells it as a
//! hex byte. Both compile to the identical `0x1B` byte, so the styled lines
//! render the same on an ANSI terminal (and as raw control bytes elsewhere).

use crate::error::Result;
use std::io::Write;

pub const BOLD_SYMBOLIC: &str = "\u{1b}[1m";
pub const RESET_SYMBOLIC: &str = "\u{1b}[0m";

pub const BOLD_HEX: &str = "\x1b[1m";
pub const RESET_HEX: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Symbolic,
    Hex,
}

impl Encoding {
    fn codes(self) -> (&'static str, &'static str) {
        match self {
            Encoding::Symbolic => (BOLD_SYMBOLIC, RESET_SYMBOLIC),
            Encoding::Hex => (BOLD_HEX, RESET_HEX),
        }
    }
}

/// Wraps `text` in bold-on / reset codes.
pub fn styled_line(encoding: Encoding, text: &str) -> String {
    let (bold, reset) = encoding.codes();
    format!("{}{}{}", bold, text, reset)
}

/// Writes the two styled transcript lines.
pub fn print_styled<W: Write + ?Sized>(out: &mut W) -> Result<usize> {
    writeln!(out, "{}", styled_line(Encoding::Symbolic, "This is bold text"))?;
    writeln!(
        out,
        "{}",
        styled_line(Encoding::Hex, "This is bold text (hex escape)")
    )?;
    Ok(2)
}
