//! # Engine Core
//!
//! This module defines the fundamental parsing contract shared by every
//! combinator in the engine:
//!
//! * [`Parse`] - the parser interface: a pure mapping from a start position
//!   to an enumerator of candidate match-end positions
//! * [`Parser`] - a cheaply cloneable, shareable handle over a combinator value
//! * [`Matches`] - the result enumerator, a resumable producer of candidate
//!   end positions with sticky exhaustion
//! * [`valid`] - the top-level driver answering "does this parser consume the
//!   whole input on at least one derivation"

use std::rc::Rc;

use tracing::debug;

/// Parse defines the core parsing interface.
///
/// A parser is a pure value: given an input slice and a start position it
/// produces a fresh [`Matches`] enumerator for that one attempt. The end of
/// input is always `input.len()`, so the conventional (start, end) pair
/// collapses to the slice itself plus `start`.
///
/// Implementations must uphold the enumerator contract:
///
/// * every yielded position `j` satisfies `start <= j <= input.len()`, and
///   `input[start..j]` is a valid match for this parser at `start`
/// * positions yielded by one branch of the search strictly increase; see
///   [`Either`](super::combinators::Either) for the one place where streams
///   from distinct branches are concatenated without a global re-merge
///
/// Parsers own no per-attempt state. All mutable state lives in the returned
/// enumerator, so one parser value can be shared freely across attempts and
/// across positions within a single attempt.
pub trait Parse<T> {
    /// Starts one parse attempt at `start`, returning its result enumerator.
    fn results<'i>(&self, input: &'i [T], start: usize) -> Matches<'i>;
}

/// A shared, immutable handle to a parser.
///
/// Grammars are graphs: alternation and sequencing reference their children,
/// and recursive grammars reference themselves. `Parser` wraps the combinator
/// value in an [`Rc`] so the same node can sit in several places at once and
/// so enumerators can hold onto the parsers they still need to invoke.
/// Cloning is a reference-count bump.
pub struct Parser<T> {
    inner: Rc<dyn Parse<T>>,
}

impl<T> Clone for Parser<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> Parser<T> {
    /// Wraps a combinator value into a shareable handle.
    pub fn new(parse: impl Parse<T> + 'static) -> Self {
        Self {
            inner: Rc::new(parse),
        }
    }

    /// Starts one parse attempt at `start`. See [`Parse::results`].
    pub fn results<'i>(&self, input: &'i [T], start: usize) -> Matches<'i> {
        self.inner.results(input, start)
    }
}

/// The result enumerator for one parse attempt.
///
/// `Matches` is a stateful object private to one invocation of one parser at
/// one start position. Each `next` call either yields the next candidate
/// match-end position or signals exhaustion with `None`. Exhaustion is
/// sticky: `Matches` latches the first `None` and never consults the wrapped
/// state machine again, so a misbehaving inner iterator cannot resurrect an
/// exhausted attempt.
///
/// Enumerators carry only small captured state (positions, flags, parser
/// handles, at most one live nested enumerator) and need no teardown beyond
/// being dropped.
pub struct Matches<'i> {
    state: Box<dyn Iterator<Item = usize> + 'i>,
    exhausted: bool,
}

impl<'i> Matches<'i> {
    /// Wraps an iterator state machine into an enumerator.
    pub fn new(state: impl Iterator<Item = usize> + 'i) -> Self {
        Self {
            state: Box::new(state),
            exhausted: false,
        }
    }

    /// An enumerator that is exhausted from the start.
    pub fn none() -> Self {
        Self::new(std::iter::empty())
    }

    /// An enumerator yielding exactly one candidate.
    pub fn just(pos: usize) -> Self {
        Self::new(std::iter::once(pos))
    }

    /// An enumerator yielding at most one candidate.
    pub fn at_most_one(pos: Option<usize>) -> Self {
        Self::new(pos.into_iter())
    }
}

impl Iterator for Matches<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.exhausted {
            return None;
        }
        match self.state.next() {
            Some(pos) => Some(pos),
            None => {
                self.exhausted = true;
                None
            }
        }
    }
}

/// Returns true iff `parser` can consume all of `input` on at least one
/// derivation.
///
/// Drains the enumerator built at position 0, returning on the first
/// candidate equal to `input.len()`. Candidates short of the end are skipped,
/// not treated as failure: a derivation that stops early merely hands the
/// search back to the enumerator for the next one.
pub fn valid<T>(parser: &Parser<T>, input: &[T]) -> bool {
    let end = input.len();
    let mut pulls = 0usize;
    for candidate in parser.results(input, 0) {
        pulls += 1;
        if candidate == end {
            debug!(target: "engine::valid", pulls, end, "input accepted");
            return true;
        }
    }
    debug!(target: "engine::valid", pulls, end, "input rejected");
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::prelude::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_matches_exhaustion_is_sticky() {
        // A state machine that tries to resurrect after its first None.
        let mut calls = 0;
        let raw = std::iter::from_fn(move || {
            calls += 1;
            match calls {
                1 => Some(1),
                2 => None,
                _ => Some(9),
            }
        });

        let mut matches = Matches::new(raw);
        assert_eq!(matches.next(), Some(1));
        assert_eq!(matches.next(), None);
        // Would be Some(9) without the latch.
        assert_eq!(matches.next(), None);
        assert_eq!(matches.next(), None);
    }

    #[test]
    fn test_valid_empty_accepts_only_empty_input() {
        let parser = empty::<char>();
        assert!(valid(&parser, &chars("")));
        assert!(!valid(&parser, &chars("a")));
        assert!(!valid(&parser, &chars("ab")));
    }

    #[test]
    fn test_valid_fail_accepts_nothing() {
        let parser = fail::<char>();
        assert!(!valid(&parser, &chars("")));
        assert!(!valid(&parser, &chars("a")));
    }

    #[test]
    fn test_valid_any_symbol_accepts_exactly_one_symbol() {
        let parser = any_symbol::<char>();
        assert!(!valid(&parser, &chars("")));
        assert!(valid(&parser, &chars("a")));
        assert!(valid(&parser, &chars("z")));
        assert!(!valid(&parser, &chars("ab")));
    }

    #[test]
    fn test_valid_skips_short_derivations() {
        // The first derivation ends short of the input; acceptance must come
        // from the later, longer one.
        let parser = text("a") | text("aa");
        assert!(valid(&parser, &chars("aa")));
    }

    #[test]
    fn test_parser_handle_is_shareable() {
        let a = sym('a');
        // The same node used at two positions of the same attempt.
        let parser = a.clone() & a;
        assert!(valid(&parser, &chars("aa")));
        assert!(!valid(&parser, &chars("a")));
    }
}
