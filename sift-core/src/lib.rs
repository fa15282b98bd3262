//! # sift: lazy backtracking parser combinators
//!
//! `sift-core` is a recognizer engine: parsers are values, built by applying
//! a small set of combinators to a handful of elementary parsers, and
//! running one answers only *whether and where* a match can end, never what
//! it produced. Every parse attempt is a lazy enumeration of candidate
//! match-end positions, so ambiguous grammars are explored one derivation at
//! a time and alternation and sequencing backtrack for free.
//!
//! ## Usage Example
//!
//! ```
//! use sift_core::prelude::*;
//! use sift_core::valid;
//!
//! // One 'a' or 'b', repeated, ending in a digit.
//! let word = one_or_more(sym('a') | sym('b')) & digit();
//!
//! let input: Vec<char> = "abba7".chars().collect();
//! assert!(valid(&word, &input));
//!
//! let input: Vec<char> = "abba".chars().collect();
//! assert!(!valid(&word, &input));
//! ```
//!
//! Self-referential grammars go through [`prelude::recursive`]:
//!
//! ```
//! use sift_core::prelude::*;
//! use sift_core::valid;
//!
//! // Balanced parentheses: S = empty | '(' S ')' S
//! let balanced = recursive(|s| empty() | (sym('(') & s.clone() & sym(')') & s));
//!
//! let input: Vec<char> = "(()())".chars().collect();
//! assert!(valid(&balanced, &input));
//! ```
//!
//! The engine is single-threaded and pull-based: parsers are immutable and
//! freely shareable, while all per-attempt state lives in the enumerator a
//! parser hands back.

pub mod engine;

pub use engine::prelude;
pub use engine::{Matches, Parse, Parser, valid};
