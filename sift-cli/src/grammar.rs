use sift_core::Parser;
use sift_core::prelude::{empty, recursive, sym};

/// Recognizer for the language of all strings with equally many `a`s and
/// `b`s, in any order:
///
/// ```text
/// S = empty | 'a' S 'b' S | 'b' S 'a' S
/// ```
///
/// Every recursive use sits behind at least one consumed symbol, so the
/// grammar makes progress on every cycle.
pub fn balanced_ab() -> Parser<char> {
    recursive(|s| {
        empty()
            | (sym('a') & s.clone() & sym('b') & s.clone())
            | (sym('b') & s.clone() & sym('a') & s)
    })
}
