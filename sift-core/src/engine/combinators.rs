//! # Parser Combinators
//!
//! The building blocks of the engine, one struct per combinator:
//!
//! * **Elementary parsers**: [`Empty`], [`Fail`], [`AnySymbol`], [`Literal`]
//! * **Filtering**: [`Restrict`]
//! * **Composition**: [`Either`] (alternation, `|`), [`Both`] (sequencing, `&`)
//! * **Recursion support**: [`Defer`], [`Recursive`]
//!
//! Each combinator implements [`Parse`] by building an explicit iterator
//! state machine over the input. Nothing is materialized eagerly: a grammar
//! with unbounded repetition still enumerates one candidate per pull.

use std::cell::RefCell;
use std::ops::{BitAnd, BitOr};
use std::rc::Rc;

use tracing::trace;

use super::core::{Matches, Parse, Parser};

/// Matches the empty sequence: yields exactly the start position, consuming
/// nothing, then exhausts.
pub struct Empty;

impl<T> Parse<T> for Empty {
    fn results<'i>(&self, _input: &'i [T], start: usize) -> Matches<'i> {
        Matches::just(start)
    }
}

/// Matches nothing: exhausted from the start.
pub struct Fail;

impl<T> Parse<T> for Fail {
    fn results<'i>(&self, _input: &'i [T], _start: usize) -> Matches<'i> {
        Matches::none()
    }
}

/// Matches any single symbol, yielding `start + 1`, or exhausts immediately
/// at end of input.
pub struct AnySymbol;

impl<T> Parse<T> for AnySymbol {
    fn results<'i>(&self, input: &'i [T], start: usize) -> Matches<'i> {
        Matches::at_most_one((start < input.len()).then(|| start + 1))
    }
}

/// Matches a fixed symbol sequence as a prefix of the remaining input,
/// yielding exactly `start + len` on a match.
pub struct Literal<T> {
    symbols: Vec<T>,
}

impl<T> Literal<T> {
    pub fn new(symbols: Vec<T>) -> Self {
        Self { symbols }
    }
}

impl<T: PartialEq> Parse<T> for Literal<T> {
    fn results<'i>(&self, input: &'i [T], start: usize) -> Matches<'i> {
        let matched = input
            .get(start..)
            .is_some_and(|rest| rest.starts_with(&self.symbols));
        Matches::at_most_one(matched.then(|| start + self.symbols.len()))
    }
}

/// Restricts a parser to the candidates whose matched slice satisfies a
/// predicate.
///
/// The enumerator pulls from the inner enumerator and re-yields only the
/// candidates `j` for which `pred(&input[start..j])` holds, preserving their
/// relative order and exhausting with the inner enumerator. The predicate
/// sees the full matched slice, so it can inspect any symbol of the match.
pub struct Restrict<T> {
    parser: Parser<T>,
    pred: Rc<dyn Fn(&[T]) -> bool>,
}

impl<T> Restrict<T> {
    pub fn new(parser: Parser<T>, pred: impl Fn(&[T]) -> bool + 'static) -> Self {
        Self {
            parser,
            pred: Rc::new(pred),
        }
    }
}

impl<T> Parse<T> for Restrict<T> {
    fn results<'i>(&self, input: &'i [T], start: usize) -> Matches<'i> {
        Matches::new(RestrictMatches {
            inner: self.parser.results(input, start),
            input,
            start,
            pred: Rc::clone(&self.pred),
        })
    }
}

struct RestrictMatches<'i, T> {
    inner: Matches<'i>,
    input: &'i [T],
    start: usize,
    pred: Rc<dyn Fn(&[T]) -> bool>,
}

impl<T> Iterator for RestrictMatches<'_, T> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while let Some(candidate) = self.inner.next() {
            if (self.pred)(&self.input[self.start..candidate]) {
                return Some(candidate);
            }
        }
        None
    }
}

/// The sum ("or") of two parsers: every candidate of `a` in order, then
/// every candidate of `b` in order.
///
/// `b`'s enumerator is not built until `a`'s is exhausted, so an attempt
/// that succeeds within `a` never touches `b`. The two streams are
/// concatenated, not merged: monotonicity of yielded positions holds within
/// each branch, and acceptance is unaffected, but a candidate from `b` may
/// be smaller than an earlier one from `a` when the branches overlap.
pub struct Either<T> {
    a: Parser<T>,
    b: Parser<T>,
}

impl<T> Either<T> {
    pub fn new(a: Parser<T>, b: Parser<T>) -> Self {
        Self { a, b }
    }
}

impl<T> Parse<T> for Either<T> {
    fn results<'i>(&self, input: &'i [T], start: usize) -> Matches<'i> {
        Matches::new(EitherMatches {
            current: self.a.results(input, start),
            pending: Some(self.b.clone()),
            input,
            start,
        })
    }
}

struct EitherMatches<'i, T> {
    current: Matches<'i>,
    pending: Option<Parser<T>>,
    input: &'i [T],
    start: usize,
}

impl<T> Iterator for EitherMatches<'_, T> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        loop {
            if let Some(pos) = self.current.next() {
                return Some(pos);
            }
            let second = self.pending.take()?;
            trace!(
                target: "engine::either",
                start = self.start,
                "first branch exhausted, switching"
            );
            self.current = second.results(self.input, self.start);
        }
    }
}

/// The product ("and") of two parsers: `a` followed by `b`.
///
/// For each candidate end `mid` of `a`, the enumerator runs `b` from `mid`
/// and yields all of its candidates; when that inner enumerator exhausts,
/// the next `mid` is pulled from `a` and a fresh inner enumerator is built
/// there. At most one inner enumerator is live at a time and none is cached.
/// This is the backtracking core: a failure of `b` at one split point simply
/// advances the search to the next split point `a` can offer.
pub struct Both<T> {
    a: Parser<T>,
    b: Parser<T>,
}

impl<T> Both<T> {
    pub fn new(a: Parser<T>, b: Parser<T>) -> Self {
        Self { a, b }
    }
}

impl<T> Parse<T> for Both<T> {
    fn results<'i>(&self, input: &'i [T], start: usize) -> Matches<'i> {
        Matches::new(BothMatches {
            splits: self.a.results(input, start),
            second: self.b.clone(),
            inner: None,
            input,
        })
    }
}

struct BothMatches<'i, T> {
    splits: Matches<'i>,
    second: Parser<T>,
    inner: Option<Matches<'i>>,
    input: &'i [T],
}

impl<T> Iterator for BothMatches<'_, T> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        loop {
            if let Some(matches) = self.inner.as_mut() {
                if let Some(pos) = matches.next() {
                    return Some(pos);
                }
                self.inner = None;
            }
            let mid = self.splits.next()?;
            trace!(target: "engine::both", mid, "trying next split point");
            self.inner = Some(self.second.results(self.input, mid));
        }
    }
}

/// Defers grammar construction to call time.
///
/// The wrapped closure is evaluated on every attempt and the resulting
/// parser is delegated to immediately. This breaks eager-construction cycles
/// for definitions that would otherwise evaluate themselves while being
/// built; [`recursive`](super::prelude::recursive) is the higher-level
/// surface for the common self-referential case.
pub struct Defer<F> {
    build: F,
}

impl<F> Defer<F> {
    pub fn new(build: F) -> Self {
        Self { build }
    }
}

impl<T, F> Parse<T> for Defer<F>
where
    F: Fn() -> Parser<T>,
{
    fn results<'i>(&self, input: &'i [T], start: usize) -> Matches<'i> {
        (self.build)().results(input, start)
    }
}

/// A placeholder that resolves a self-referential binding at call time.
///
/// Created by [`recursive`](super::prelude::recursive). The slot is empty
/// while the defining expression is being built and filled before the
/// finished parser is handed back, so by the time any attempt can reach the
/// placeholder the binding exists.
///
/// # Panics
///
/// Panics if evaluated while the slot is still empty, which can only happen
/// when the builder closure itself runs the placeholder. That is a
/// construction-time programming error, not an input-dependent condition.
pub struct Recursive<T> {
    slot: Rc<RefCell<Option<Parser<T>>>>,
}

impl<T> Recursive<T> {
    pub(crate) fn new(slot: Rc<RefCell<Option<Parser<T>>>>) -> Self {
        Self { slot }
    }
}

impl<T> Parse<T> for Recursive<T> {
    fn results<'i>(&self, input: &'i [T], start: usize) -> Matches<'i> {
        let parser = self.slot.borrow().clone();
        match parser {
            Some(parser) => parser.results(input, start),
            None => panic!("recursive grammar evaluated before its definition was installed"),
        }
    }
}

impl<T: 'static> BitOr for Parser<T> {
    type Output = Parser<T>;

    /// Operator form of [`Either`]: `a | b`.
    fn bitor(self, rhs: Parser<T>) -> Parser<T> {
        Parser::new(Either::new(self, rhs))
    }
}

impl<T: 'static> BitAnd for Parser<T> {
    type Output = Parser<T>;

    /// Operator form of [`Both`]: `a & b`.
    fn bitand(self, rhs: Parser<T>) -> Parser<T> {
        Parser::new(Both::new(self, rhs))
    }
}
