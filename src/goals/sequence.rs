//! Relations over cons sequences.
//!
//! Each relation is a function from argument terms to a [`Goal`]. The
//! goal body is rebuilt on every run, so a relation can mention itself
//! without recursing while the goal tree is being constructed; at run
//! time the recursion is bounded by the concrete sequence arguments.

use crate::core::goal::{same, Goal};
use crate::core::term::Term;
use crate::core::var::Var;
use crate::goals::combinators::{conj2, disj2, ConjGoal};
use crate::goals::special::delay;

/// Relates `ab` to the concatenation of `a` and `b`.
///
/// Every split of `ab` into a prefix and a suffix is a solution, so with
/// only `ab` ground this enumerates all `len(ab) + 1` splits. At least
/// one of `a` and `ab` must be a finite sequence; with both open-ended,
/// wrap the goal in [`delay`] and bound the number of answers taken.
pub fn append(a: impl Into<Term>, b: impl Into<Term>, ab: impl Into<Term>) -> Goal {
    let (a, b, ab) = (a.into(), b.into(), ab.into());
    Goal::from_fn("append", move |s| {
        let first = Var::new("first");
        let a_rest = Var::new("a-rest");
        let ab_rest = Var::new("ab-rest");
        let base = conj2(same(a.clone(), Term::Nil), same(b.clone(), ab.clone()));
        let step: Goal = ConjGoal::of(
            same(Term::pair(first, a_rest), a.clone()),
            vec![
                same(Term::pair(first, ab_rest), ab.clone()),
                append(a_rest, b.clone(), ab_rest),
            ],
        )
        .into();
        disj2(base, step).run(s)
    })
}

/// Relates `sub` to an ordered subsequence of `full`: every item of
/// `sub` appears in `full`, in the same relative order.
///
/// `full` shrinks on every recursion, so the goal terminates whenever
/// `full` is a finite sequence, even with `sub` entirely unbound.
pub fn order(sub: impl Into<Term>, full: impl Into<Term>) -> Goal {
    let (sub, full) = (sub.into(), full.into());
    Goal::from_fn("order", move |s| {
        let head = Var::new("head");
        let sub_tail = Var::new("sub-tail");
        let full_tail = Var::new("full-tail");
        let end = conj2(same(sub.clone(), Term::Nil), same(full.clone(), Term::Nil));
        let select = conj2(
            same(Term::pair(head, sub_tail), sub.clone()),
            order(sub_tail, full_tail),
        );
        let skip = order(sub.clone(), full_tail);
        let step = conj2(
            same(Term::pair(head, full_tail), full.clone()),
            disj2(select, skip),
        );
        disj2(end, step).run(s)
    })
}

/// Relates two sequences that hold the same items in opposite order.
pub fn reverse(a: impl Into<Term>, b: impl Into<Term>) -> Goal {
    reverse_onto(a, b, Term::Nil)
}

/// Accumulator form of [`reverse`]: `b` is the reversal of `a` followed
/// by `b_tail`.
///
/// Each iteration moves one item from `a` onto the accumulator behind a
/// delay, so driving the stream takes one step per item regardless of
/// sequence length.
pub fn reverse_onto(a: impl Into<Term>, b: impl Into<Term>, b_tail: impl Into<Term>) -> Goal {
    let (a, b, b_tail) = (a.into(), b.into(), b_tail.into());
    Goal::from_fn("reverse", move |s| {
        let first = Var::new("first");
        let rest = Var::new("rest");
        let base = conj2(same(a.clone(), Term::Nil), same(b.clone(), b_tail.clone()));
        let step = conj2(
            same(Term::pair(first, rest), a.clone()),
            delay(reverse_onto(rest, b.clone(), Term::pair(first, b_tail.clone()))),
        );
        disj2(base, step).run(s)
    })
}

/// Relates `n` to the length of the sequence `seq`, counting in unary:
/// the count is itself a sequence of `()` markers. Unary counts unify
/// structurally, which keeps arithmetic inside the term domain.
pub fn count(seq: impl Into<Term>, n: impl Into<Term>) -> Goal {
    let (seq, n) = (seq.into(), n.into());
    Goal::from_fn("count", move |s| {
        let first = Var::new("first");
        let rest = Var::new("rest");
        let n_rest = Var::new("n-rest");
        let base = conj2(same(seq.clone(), Term::Nil), same(n.clone(), Term::Nil));
        let step = conj2(
            same(Term::pair(first, rest), seq.clone()),
            conj2(
                same(Term::pair(Term::atom(()), n_rest), n.clone()),
                delay(count(rest, n_rest)),
            ),
        );
        disj2(base, step).run(s)
    })
}

/// Succeeds once for every item of `seq`, binding `item` to it.
pub fn member(item: impl Into<Term>, seq: impl Into<Term>) -> Goal {
    let (item, seq) = (item.into(), seq.into());
    Goal::from_fn("member", move |s| {
        let first = Var::new("first");
        let rest = Var::new("rest");
        let here = conj2(
            same(Term::pair(first, rest), seq.clone()),
            same(item.clone(), first),
        );
        let further = conj2(
            same(Term::pair(first, rest), seq.clone()),
            member(item.clone(), rest),
        );
        disj2(here, further).run(s)
    })
}
