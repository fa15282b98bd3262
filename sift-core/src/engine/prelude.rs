//! Constructor functions for building grammars.
//!
//! Grammar authors compose parsers from these free functions plus the `|`
//! (alternation) and `&` (sequencing) operators on [`Parser`]. All of them
//! are pure constructors: no input is examined until the resulting parser is
//! run.

use std::cell::RefCell;
use std::rc::Rc;

use super::combinators::{AnySymbol, Both, Defer, Either, Empty, Fail, Literal, Recursive, Restrict};
use super::core::Parser;

/// Matches the empty sequence at any position.
pub fn empty<T: 'static>() -> Parser<T> {
    Parser::new(Empty)
}

/// Matches nothing.
pub fn fail<T: 'static>() -> Parser<T> {
    Parser::new(Fail)
}

/// Matches any single symbol.
pub fn any_symbol<T: 'static>() -> Parser<T> {
    Parser::new(AnySymbol)
}

/// Keeps only the candidates of `parser` whose matched slice satisfies
/// `pred`.
pub fn restrict<T: 'static>(
    parser: Parser<T>,
    pred: impl Fn(&[T]) -> bool + 'static,
) -> Parser<T> {
    Parser::new(Restrict::new(parser, pred))
}

/// Alternation: all candidates of `a`, then all candidates of `b`.
pub fn either<T: 'static>(a: Parser<T>, b: Parser<T>) -> Parser<T> {
    Parser::new(Either::new(a, b))
}

/// Sequencing: `a` followed by `b`, backtracking over `a`'s split points.
pub fn both<T: 'static>(a: Parser<T>, b: Parser<T>) -> Parser<T> {
    Parser::new(Both::new(a, b))
}

/// Alternation over a list, left-biased. The empty list fails.
pub fn any_of<T: 'static>(parsers: Vec<Parser<T>>) -> Parser<T> {
    parsers
        .into_iter()
        .rev()
        .fold(fail(), |acc, parser| either(parser, acc))
}

/// Sequencing over a list, in order. The empty list matches the empty
/// sequence.
pub fn all_of<T: 'static>(parsers: Vec<Parser<T>>) -> Parser<T> {
    parsers
        .into_iter()
        .rev()
        .fold(empty(), |acc, parser| both(parser, acc))
}

/// Matches exactly the given symbol.
pub fn sym<T: PartialEq + 'static>(symbol: T) -> Parser<T> {
    restrict(any_symbol(), move |matched: &[T]| {
        matched.first() == Some(&symbol)
    })
}

/// Matches the given symbol sequence as a prefix of the remaining input.
pub fn seq<T: Clone + PartialEq + 'static>(symbols: &[T]) -> Parser<T> {
    Parser::new(Literal::new(symbols.to_vec()))
}

/// [`seq`] over the characters of a string.
pub fn text(text: &str) -> Parser<char> {
    Parser::new(Literal::new(text.chars().collect()))
}

/// Matches one ASCII letter.
pub fn letter() -> Parser<char> {
    restrict(any_symbol(), |matched: &[char]| {
        matched.first().is_some_and(|c| c.is_ascii_alphabetic())
    })
}

/// Matches one ASCII digit.
pub fn digit() -> Parser<char> {
    restrict(any_symbol(), |matched: &[char]| {
        matched.first().is_some_and(|c| c.is_ascii_digit())
    })
}

/// Defers construction of a parser to call time.
///
/// `build` is evaluated afresh on every attempt. Prefer [`recursive`] for
/// self-referential definitions; `defer` is the low-level escape hatch for
/// delaying construction of an expression that is merely expensive or not
/// yet available.
pub fn defer<T: 'static>(build: impl Fn() -> Parser<T> + 'static) -> Parser<T> {
    Parser::new(Defer::new(build))
}

/// Builds a self-referential grammar.
///
/// `build` receives a placeholder parser standing for the definition being
/// built and returns the defining expression; the placeholder resolves the
/// finished definition at call time, so the cycle never evaluates eagerly:
///
/// ```
/// use sift_core::prelude::*;
/// use sift_core::valid;
///
/// // S = empty | 'a' S
/// let stars = recursive(|stars| empty() | (sym('a') & stars));
/// let input: Vec<char> = "aaa".chars().collect();
/// assert!(valid(&stars, &input));
/// ```
///
/// The engine performs no termination analysis: a definition whose recursive
/// cycle can recur without consuming input (unguarded left recursion, or a
/// repeated body that matches the empty sequence) will not terminate when
/// run. Grammars must make progress on every cycle; that is the caller's
/// responsibility.
///
/// Recursive grammars hold themselves alive through a reference cycle and
/// are not reclaimed when dropped.
pub fn recursive<T: 'static>(build: impl FnOnce(Parser<T>) -> Parser<T>) -> Parser<T> {
    let slot: Rc<RefCell<Option<Parser<T>>>> = Rc::new(RefCell::new(None));
    let placeholder = Parser::new(Recursive::new(Rc::clone(&slot)));
    let parser = build(placeholder);
    *slot.borrow_mut() = Some(parser.clone());
    parser
}

/// `parser` repeated one or more times.
///
/// Defined through [`recursive`], so construction never evaluates the
/// repetition eagerly. Shorter repetitions enumerate first.
pub fn one_or_more<T: 'static>(parser: Parser<T>) -> Parser<T> {
    recursive(move |more| parser.clone() & (empty() | more))
}

/// `parser` repeated zero or more times.
pub fn zero_or_more<T: 'static>(parser: Parser<T>) -> Parser<T> {
    empty() | one_or_more(parser)
}

/// `parser` or the empty sequence.
pub fn zero_or_one<T: 'static>(parser: Parser<T>) -> Parser<T> {
    empty() | parser
}

/// `parser` repeated exactly `count` times.
pub fn repeat<T: 'static>(parser: Parser<T>, count: usize) -> Parser<T> {
    match count {
        0 => empty(),
        1 => parser,
        _ => {
            let rest = repeat(parser.clone(), count - 1);
            parser & rest
        }
    }
}
