//! # The parsing engine
//!
//! A small algebra of composable, backtracking, lazily-enumerating parsers
//! over an indexable symbol sequence.
//!
//! ## Core Components
//!
//! * **Parse / Parser**: the parsing contract and the shareable handle over
//!   a combinator value ([`core`])
//! * **Matches**: the result enumerator, a resumable producer of candidate
//!   match-end positions ([`core`])
//! * **Combinators**: elementary parsers, alternation, sequencing,
//!   filtering, recursion support ([`combinators`])
//! * **Prelude**: constructor functions for grammar authors ([`prelude`])
//!
//! ## Evaluation Model
//!
//! Composition happens once, when a grammar expression is built; input is
//! scanned lazily, one candidate at a time, when [`valid`] pulls from the
//! enumerator. A parse attempt that can match several prefixes yields one
//! end position per pull; sequencing backtracks by advancing its first
//! parser's split point whenever its second parser exhausts. Failure to
//! match is enumerator exhaustion, an ordinary outcome rather than an
//! error, so the engine defines no error type.
//!
//! ## Recursion
//!
//! Self-referential grammars are built through
//! [`prelude::recursive`], which resolves the self-reference at call time
//! instead of construction time. The built-in quantifiers use the same
//! mechanism internally.

pub mod combinators;
pub mod core;
pub mod prelude;

pub use self::core::{Matches, Parse, Parser, valid};
