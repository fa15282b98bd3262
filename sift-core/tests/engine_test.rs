use pretty_assertions::assert_eq;
use proptest::prelude::*;
use sift_core::prelude::*;
use sift_core::{Parser, valid};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[ctor::ctor]
fn init_tests() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// The language of all strings with equally many 'a's and 'b's:
/// S = empty | 'a' S 'b' S | 'b' S 'a' S
fn balanced_ab() -> Parser<char> {
    recursive(|s| {
        empty()
            | (sym('a') & s.clone() & sym('b') & s.clone())
            | (sym('b') & s.clone() & sym('a') & s)
    })
}

/// A small pool of structurally different parsers for algebraic properties.
fn pool() -> Vec<Parser<char>> {
    vec![
        empty(),
        fail(),
        any_symbol(),
        text("a"),
        text("ab"),
        one_or_more(sym('a')),
        zero_or_more(sym('b')),
        balanced_ab(),
    ]
}

#[test]
fn it_accepts_balanced_ab_strings() {
    let grammar = balanced_ab();
    for accepted in ["", "ab", "ba", "abab", "aabb", "baba", "abba"] {
        assert!(valid(&grammar, &chars(accepted)), "should accept {accepted:?}");
    }
}

#[test]
fn it_rejects_unbalanced_ab_strings() {
    let grammar = balanced_ab();
    for rejected in ["a", "b", "aab", "abb", "aaabbc", "ababa"] {
        assert!(!valid(&grammar, &chars(rejected)), "should reject {rejected:?}");
    }
}

#[test]
fn it_retries_shorter_first_matches() {
    // The second parser only fits after the first falls back from "aa" to
    // "a"; accepting "aaa" requires retrying the earlier split point.
    let first = text("a") | text("aa");
    let second = text("a");
    assert!(valid(&(first.clone() & second.clone()), &chars("aa")));
    assert!(valid(&(first & second), &chars("aaa")));
}

#[test]
fn it_enumerates_balanced_prefixes_in_order() {
    let grammar = balanced_ab();
    let input = chars("abab");
    let candidates: Vec<usize> = grammar.results(&input, 0).collect();
    assert_eq!(candidates, vec![0, 2, 4, 4]);
}

#[test]
fn it_explores_later_derivations_for_acceptance() {
    // Each branch matches a strict prefix of the input on its first
    // derivation; only the last derivation of the last branch spans it all.
    let grammar = text("a") | (text("a") | text("aa")) & zero_or_more(sym('a'));
    assert!(valid(&grammar, &chars("aaaa")));
}

#[test]
fn it_folds_lists_left_biased() {
    let digits = any_of(vec![sym('0'), sym('1'), sym('2')]);
    let pair = all_of(vec![digits.clone(), digits]);
    assert!(valid(&pair, &chars("12")));
    assert!(valid(&pair, &chars("00")));
    assert!(!valid(&pair, &chars("3.")));
    assert!(!valid(&pair, &chars("1")));
}

proptest! {
    #[test]
    fn restrict_with_true_predicate_preserves_acceptance(s in "[ab]{0,8}") {
        let input = chars(&s);
        for parser in pool() {
            let wrapped = restrict(parser.clone(), |_| true);
            prop_assert_eq!(valid(&wrapped, &input), valid(&parser, &input));
        }
    }

    #[test]
    fn alternation_acceptance_is_symmetric(s in "[ab]{0,8}") {
        let input = chars(&s);
        let parsers = pool();
        for a in &parsers {
            for b in &parsers {
                let ab = a.clone() | b.clone();
                let ba = b.clone() | a.clone();
                prop_assert_eq!(valid(&ab, &input), valid(&ba, &input));
            }
        }
    }

    #[test]
    fn sequencing_acceptance_is_associative(s in "[ab]{0,6}") {
        let input = chars(&s);
        // A subset keeps the triple product of attempts affordable.
        let parsers: Vec<_> = pool().into_iter().take(6).collect();
        for a in &parsers {
            for b in &parsers {
                for c in &parsers {
                    let left = (a.clone() & b.clone()) & c.clone();
                    let right = a.clone() & (b.clone() & c.clone());
                    prop_assert_eq!(valid(&left, &input), valid(&right, &input));
                }
            }
        }
    }

    #[test]
    fn empty_accepts_exactly_the_empty_string(s in "[ab]{0,8}") {
        let input = chars(&s);
        prop_assert_eq!(valid(&empty(), &input), s.is_empty());
    }

    #[test]
    fn fail_accepts_nothing(s in "[ab]{0,8}") {
        prop_assert!(!valid(&fail(), &chars(&s)));
    }

    #[test]
    fn any_symbol_accepts_exactly_length_one(s in "[ab]{0,8}") {
        prop_assert_eq!(valid(&any_symbol(), &chars(&s)), s.len() == 1);
    }

    #[test]
    fn restricted_candidates_are_an_ordered_subsequence(s in "a{0,8}") {
        let input = chars(&s);
        let inner: Vec<usize> = zero_or_more(sym('a')).results(&input, 0).collect();
        let kept: Vec<usize> = restrict(zero_or_more(sym('a')), |m: &[char]| m.len() % 2 == 0)
            .results(&input, 0)
            .collect();

        // Every kept candidate appears in the inner stream, in order.
        let mut inner_iter = inner.iter();
        for candidate in &kept {
            prop_assert!(inner_iter.any(|j| j == candidate));
        }
    }
}
