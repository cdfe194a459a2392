//! Pattern 3: Index From End
//! Addressing the last element without spelling out `len() - 1`.

use crate::error::Result;
use std::io::Write;

pub const SAMPLE: [i32; 5] = [1, 2, 3, 4, 5];
pub const LAST_VALUE: i32 = 32;

/// Fixed array, last slot addressed from the end.
pub fn implicit_index_access<W: Write + ?Sized>(out: &mut W) -> Result<[i32; 5]> {
    let mut numbers = SAMPLE;
    // irrefutable on a fixed-size array, so there is no missing-element case
    let [.., last] = &mut numbers;
    *last = LAST_VALUE;
    let [.., last] = numbers;
    writeln!(out, "{}", last)?;
    Ok(numbers)
}

// Growable sequence, last index computed by hand.
pub fn implicit_index_access_legacy<W: Write + ?Sized>(out: &mut W) -> Result<Vec<i32>> {
    let mut initializer = SAMPLE.to_vec();
    let last = initializer.len() - 1;
    initializer[last] = LAST_VALUE;
    writeln!(out, "{}", initializer[4])?;
    Ok(initializer)
}
