//! String manipulation.
//!
//! All comparisons are exact: no case folding, no whitespace or
//! punctuation normalization. Reversal works on `char`s, so multi-byte
//! characters stay intact.

use super::expect_text;
use crate::error::UtilResult;
use crate::types::Value;

/// Uppercase the first character of a string argument
pub fn capitalize(input: &Value) -> UtilResult<String> {
    expect_text(input).map(capitalize_str)
}

/// Reverse a string argument
pub fn reverse_string(input: &Value) -> UtilResult<String> {
    expect_text(input).map(reverse_str)
}

/// Check whether a string argument reads the same in both directions
pub fn is_palindrome(input: &Value) -> UtilResult<bool> {
    expect_text(input).map(is_palindrome_str)
}

/// Copy of `text` with its first character uppercased and the rest unchanged
pub fn capitalize_str(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn reverse_str(text: &str) -> String {
    text.chars().rev().collect()
}

pub fn is_palindrome_str(text: &str) -> bool {
    text.chars().eq(text.chars().rev())
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn reverse_round_trips(text in any::<String>()) {
            prop_assert_eq!(reverse_str(&reverse_str(&text)), text);
        }

        #[test]
        fn palindrome_matches_reversal(text in "[ab ]{0,8}") {
            prop_assert_eq!(is_palindrome_str(&text), text == reverse_str(&text));
        }
    }
}
