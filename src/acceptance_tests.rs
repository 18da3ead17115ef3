//! End-to-end tests driving goals through the public API, asserting
//! answers, work unit counts and stream exhaustion.

use crate::core::goal::{same, unit, Goal, GoalImpl};
use crate::core::stream::Stream;
use crate::core::subst::Subst;
use crate::core::term::Term;
use crate::core::var::Var;
use crate::goals::combinators::{conj2, disj2};
use crate::goals::sequence::{append, order, reverse};
use crate::goals::special::{delay, repeat, CachedGoal};
use crate::list;
use crate::testing::LogicAsserter;
use std::cell::Cell;
use std::rc::Rc;

#[test]
fn intersperse_repeated() {
    let x = Var::new("x");
    LogicAsserter::new(&disj2(repeat(same(x, 5)), repeat(same(x, 6))))
        .work_units(11)
        .finishes(false)
        .requested(&[x])
        .solution(&[(x, Term::from(5))])
        .solution(&[(x, Term::from(6))])
        .solution(&[(x, Term::from(5))])
        .solution(&[(x, Term::from(6))])
        .solution(&[(x, Term::from(5))])
        .solution(&[(x, Term::from(6))])
        .test();
}

#[test]
fn repeat_interspersed() {
    let x = Var::new("x");
    LogicAsserter::new(&repeat(disj2(same(x, 5), same(x, 6))))
        .work_units(11)
        .finishes(false)
        .requested(&[x])
        .solution(&[(x, Term::from(5))])
        .solution(&[(x, Term::from(6))])
        .solution(&[(x, Term::from(5))])
        .solution(&[(x, Term::from(6))])
        .solution(&[(x, Term::from(5))])
        .solution(&[(x, Term::from(6))])
        .solution(&[(x, Term::from(5))])
        .solution(&[(x, Term::from(6))])
        .test();
}

#[test]
fn unify_two_vars() {
    let x = Var::new("x");
    let y = Var::new("y");
    LogicAsserter::new(&conj2(same(x, y), same(x, 5)))
        .requested(&[x, y])
        .work_units(2)
        .solution(&[(x, Term::from(5)), (y, Term::from(5))])
        .test();
}

#[test]
fn unify_var_with_self() {
    let x = Var::new("x");
    LogicAsserter::new(&same(x, x))
        .requested(&[x])
        .work_units(2)
        .solution(&[])
        .test();
}

#[test]
fn unit_goal() {
    LogicAsserter::new(&unit()).work_units(2).solution(&[]).test();
}

#[test]
fn repeat_unit_goal() {
    LogicAsserter::new(&repeat(unit()))
        .finishes(false)
        .work_units(5)
        .solution(&[])
        .solution(&[])
        .solution(&[])
        .test();
}

#[test]
fn delayed_goals_add_one_work_unit() {
    let direct = order(list![1], Term::Nil);
    LogicAsserter::new(&direct).work_units(1).test();
    LogicAsserter::new(&delay(order(list![1], Term::Nil)))
        .work_units(2)
        .test();
}

#[test]
fn cached_disj_is_not_reevaluated() {
    let x = Var::new("x");
    let y = Var::new("y");
    let cached: Goal = CachedGoal::new(disj2(same(x, 42), same(y, 24))).into();

    // Both occurrences commit to the same branch, so the answers are
    // those of a single evaluation of the disjunction.
    LogicAsserter::new(&conj2(cached.clone(), cached))
        .requested(&[x, y])
        .work_units(3)
        .solution(&[(x, Term::from(42))])
        .solution(&[(y, Term::from(24))])
        .test();
}

#[test]
fn multiple_cached_goals() {
    let x = Var::new("x");
    let y = Var::new("y");
    let g1: Goal = CachedGoal::new(same(x, 44)).into();
    let g2: Goal = CachedGoal::new(same(y, 99)).into();

    LogicAsserter::new(&conj2(g1, g2))
        .requested(&[x, y])
        .work_units(2)
        .solution(&[(x, Term::from(44)), (y, Term::from(99))])
        .test();
}

struct RecordsCall {
    calls: Rc<Cell<usize>>,
}

impl GoalImpl for RecordsCall {
    fn run(&self, s: Subst) -> Stream {
        self.calls.set(self.calls.get() + 1);
        Stream::singleton(s)
    }

    fn label(&self) -> String {
        "records-call".to_string()
    }
}

#[test]
fn cached_delegate_runs_once() {
    let calls = Rc::new(Cell::new(0));
    let recording = Goal::new(RecordsCall {
        calls: calls.clone(),
    });
    let cached: Goal = CachedGoal::new(recording).into();

    LogicAsserter::new(&conj2(cached.clone(), cached))
        .work_units(2)
        .solution(&[])
        .test();
    assert_eq!(calls.get(), 1);
}

#[test]
fn prerequisite_missing_fails() {
    let x = Var::new("x");
    let y = Var::new("y");
    let g1 = CachedGoal::new(same(x, 44));
    let g2 = CachedGoal::with_prerequisite(&g1, same(y, 100)).into_goal();

    LogicAsserter::new(&g2).work_units(1).test();
}

#[test]
fn prerequisite_present_succeeds() {
    let x = Var::new("x");
    let y = Var::new("y");
    let g1 = CachedGoal::new(same(x, 44));
    let g2 = CachedGoal::with_prerequisite(&g1, same(y, 100)).into_goal();

    LogicAsserter::new(&conj2(g1.into_goal(), g2))
        .requested(&[x, y])
        .work_units(2)
        .solution(&[(x, Term::from(44)), (y, Term::from(100))])
        .test();
}

#[test]
fn append_enumerates_every_split() {
    let x = Var::new("x");
    let y = Var::new("y");
    LogicAsserter::new(&append(x, y, list![1, 2, 3, 4]))
        .work_units(6)
        .requested(&[x, y])
        .solution(&[(x, Term::Nil), (y, list![1, 2, 3, 4])])
        .solution(&[(x, list![1]), (y, list![2, 3, 4])])
        .solution(&[(x, list![1, 2]), (y, list![3, 4])])
        .solution(&[(x, list![1, 2, 3]), (y, list![4])])
        .solution(&[(x, list![1, 2, 3, 4]), (y, Term::Nil)])
        .test();
}

#[test]
fn order_with_empty_subsequence() {
    LogicAsserter::new(&order(Term::Nil, list![1]))
        .work_units(2)
        .solution(&[])
        .test();
}

#[test]
fn order_enumerates_pairs_in_ascending_order() {
    let x = Var::new("x");
    let y = Var::new("y");
    LogicAsserter::new(&order(list![x, y], list![1, 2, 3, 4, 5]))
        .work_units(11)
        .requested(&[x, y])
        .solution(&[(x, Term::from(1)), (y, Term::from(2))])
        .solution(&[(x, Term::from(1)), (y, Term::from(3))])
        .solution(&[(x, Term::from(1)), (y, Term::from(4))])
        .solution(&[(x, Term::from(1)), (y, Term::from(5))])
        .solution(&[(x, Term::from(2)), (y, Term::from(3))])
        .solution(&[(x, Term::from(2)), (y, Term::from(4))])
        .solution(&[(x, Term::from(2)), (y, Term::from(5))])
        .solution(&[(x, Term::from(3)), (y, Term::from(4))])
        .solution(&[(x, Term::from(3)), (y, Term::from(5))])
        .solution(&[(x, Term::from(4)), (y, Term::from(5))])
        .test();
}

#[test]
fn reverse_a_ground_sequence() {
    let x = Var::new("x");
    LogicAsserter::new(&reverse(list![4, 5, 6], x))
        .work_units(5)
        .requested(&[x])
        .solution(&[(x, list![6, 5, 4])])
        .test();
}
