//! Pattern 1: Parameter Collections
//! Printing a variable number of call-site arguments.
//!
//! The collection form takes any iterable; the legacy form only ever sees a
//! fixed slice. The macros collect loose arguments the way a variadic call
//! site would.

use crate::error::Result;
use std::fmt::Display;
use std::io::Write;

/// Writes each item on its own line, in iteration order. Returns the line count.
pub fn print_each<W, I>(out: &mut W, items: I) -> Result<usize>
where
    W: Write + ?Sized,
    I: IntoIterator,
    I::Item: Display,
{
    let mut lines = 0;
    for item in items {
        writeln!(out, "{}", item)?;
        lines += 1;
    }
    Ok(lines)
}

pub fn print_numbers<W: Write + ?Sized>(out: &mut W, numbers: &[i32]) -> Result<usize> {
    print_each(out, numbers)
}

pub fn print_words<W: Write + ?Sized>(out: &mut W, words: &[&str]) -> Result<usize> {
    print_each(out, words)
}

// Before collection parameters: the caller had to build the array itself.
pub fn print_numbers_legacy<W: Write + ?Sized>(out: &mut W, numbers: &[i32]) -> Result<usize> {
    for number in numbers.iter() {
        writeln!(out, "{}", number)?;
    }
    Ok(numbers.len())
}

/// `print_numbers!(out, 1, 2, 3)` collects the trailing arguments.
#[macro_export]
macro_rules! print_numbers {
    ($out:expr $(,)?) => {
        $crate::params::print_numbers($out, &[])
    };
    ($out:expr, $($n:expr),+ $(,)?) => {
        $crate::params::print_numbers($out, &[$($n),+])
    };
}

/// `print_words!(out, "one", "two")` collects the trailing arguments.
#[macro_export]
macro_rules! print_words {
    ($out:expr $(,)?) => {
        $crate::params::print_words($out, &[])
    };
    ($out:expr, $($w:expr),+ $(,)?) => {
        $crate::params::print_words($out, &[$($w),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn lines(buf: &[u8]) -> Vec<String> {
        String::from_utf8(buf.to_vec())
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn numbers_print_one_per_line() {
        let mut buf = Vec::new();
        let written = print_numbers(&mut buf, &[1, 2, 3]).unwrap();
        assert_eq!(written, 3);
        assert_eq!(buf, b"1\n2\n3\n");
    }

    #[test]
    fn empty_input_prints_nothing() {
        let mut buf = Vec::new();
        assert_eq!(print_words(&mut buf, &[]).unwrap(), 0);
        assert_eq!(print_numbers_legacy(&mut buf, &[]).unwrap(), 0);
        assert!(buf.is_empty());
    }

    #[test]
    fn macros_collect_loose_arguments() {
        let mut buf = Vec::new();
        print_numbers!(&mut buf, 4, 5).unwrap();
        print_words!(&mut buf, "six", "seven",).unwrap();
        assert_eq!(lines(&buf), vec!["4", "5", "six", "seven"]);
    }

    #[test]
    fn print_each_accepts_any_iterator() {
        let mut buf = Vec::new();
        let written = print_each(&mut buf, (1..=3).map(|n| n * 10)).unwrap();
        assert_eq!(written, 3);
        assert_eq!(lines(&buf), vec!["10", "20", "30"]);
    }

    proptest! {
        #[test]
        fn numbers_round_out_as_lines(numbers in prop::collection::vec(any::<i32>(), 0..50)) {
            let mut buf = Vec::new();
            let written = print_numbers(&mut buf, &numbers).unwrap();
            let expected: Vec<String> = numbers.iter().map(|n| n.to_string()).collect();

            prop_assert_eq!(written, numbers.len());
            prop_assert_eq!(lines(&buf), expected);
        }

        #[test]
        fn legacy_form_matches_collection_form(numbers in prop::collection::vec(any::<i32>(), 0..50)) {
            let mut modern = Vec::new();
            let mut legacy = Vec::new();
            print_numbers(&mut modern, &numbers).unwrap();
            print_numbers_legacy(&mut legacy, &numbers).unwrap();
            prop_assert_eq!(modern, legacy);
        }

        #[test]
        fn words_keep_input_order(words in prop::collection::vec("[a-z]{1,8}", 0..20)) {
            let refs: Vec<&str> = words.iter().map(String::as_str).collect();
            let mut buf = Vec::new();
            let written = print_words(&mut buf, &refs).unwrap();

            prop_assert_eq!(written, words.len());
            prop_assert_eq!(lines(&buf), words);
        }
    }
}
