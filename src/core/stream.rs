//! Lazy, possibly infinite streams of solutions.
//!
//! The recursive definitions of `mplus` and `bind` determine the
//! enumeration order of answers, not just the answer set. In particular,
//! `mplus` swaps its operands every time it meets a suspension, which
//! round-robins between equally delayed branches. Neither combinator ever
//! forces a suspension; only [`Stream::solve`] advances computation, one
//! layer at a time.

use crate::core::goal::Goal;
use crate::core::subst::Subst;
use std::fmt;

pub enum Stream {
    Empty,
    Solution(Subst, Box<Stream>),
    Suspension(Box<dyn FnOnce() -> Stream>),
}

impl Stream {
    pub fn empty() -> Self {
        Stream::Empty
    }

    pub fn cons(s: Subst, rest: Self) -> Self {
        Stream::Solution(s, Box::new(rest))
    }

    pub fn singleton(s: Subst) -> Self {
        Stream::cons(s, Stream::Empty)
    }

    pub fn suspension(thunk: impl 'static + FnOnce() -> Stream) -> Self {
        Stream::Suspension(Box::new(thunk))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Stream::Empty)
    }

    /// Merge `other` into this stream. Suspensions swap the operands, so
    /// two delayed branches take turns producing answers.
    pub fn mplus(self, other: Stream) -> Stream {
        match self {
            Stream::Empty => other,
            Stream::Solution(s, rest) => Stream::cons(s, rest.mplus(other)),
            Stream::Suspension(thunk) => Stream::suspension(move || other.mplus(thunk())),
        }
    }

    /// Run `goal` on every solution in this stream and merge the
    /// resulting streams.
    pub fn bind(self, goal: &Goal) -> Stream {
        match self {
            Stream::Empty => Stream::Empty,
            Stream::Solution(s, rest) => goal.run(s).mplus(rest.bind(goal)),
            Stream::Suspension(thunk) => {
                let goal = goal.clone();
                Stream::suspension(move || thunk().bind(&goal))
            }
        }
    }

    /// Perform one step: force at most one suspension layer.
    ///
    /// Returns `None` when the stream is exhausted. Otherwise the step
    /// carries the realized substitution, if this position holds one, and
    /// the remainder stream; a step without a substitution means "nothing
    /// at this position, keep pulling".
    pub fn solve(self) -> Option<SolveStep> {
        match self {
            Stream::Empty => None,
            Stream::Solution(s, rest) => Some(SolveStep {
                subst: Some(s),
                rest: *rest,
            }),
            Stream::Suspension(thunk) => Some(SolveStep {
                subst: None,
                rest: thunk(),
            }),
        }
    }
}

/// One step of the driver loop: an optional solution plus the remainder
/// stream.
pub struct SolveStep {
    subst: Option<Subst>,
    rest: Stream,
}

impl SolveStep {
    pub fn subst(&self) -> Option<&Subst> {
        self.subst.as_ref()
    }

    pub fn into_parts(self) -> (Option<Subst>, Stream) {
        (self.subst, self.rest)
    }
}

/// Iterator over the solutions of a stream; the sanctioned consumption
/// pattern: solve, record the substitution if present, continue with the
/// remainder.
pub struct Solutions(Stream);

impl Solutions {
    pub fn new(stream: Stream) -> Self {
        Solutions(stream)
    }
}

impl Iterator for Solutions {
    type Item = Subst;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let stream = std::mem::replace(&mut self.0, Stream::Empty);
            let step = stream.solve()?;
            let (subst, rest) = step.into_parts();
            self.0 = rest;
            if let Some(s) = subst {
                return Some(s);
            }
        }
    }
}

impl PartialEq for Stream {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Stream::Empty, Stream::Empty) => true,
            (Stream::Solution(a, x), Stream::Solution(b, y)) => a == b && x == y,
            _ => false,
        }
    }
}

impl fmt::Debug for Stream {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Stream::Empty => write!(f, "()"),
            Stream::Suspension(_) => write!(f, "(...)"),
            Stream::Solution(s, rest) => {
                write!(f, "({:?}", s)?;
                let mut rest = rest;
                loop {
                    match &**rest {
                        Stream::Empty => break,
                        Stream::Solution(s, next) => {
                            write!(f, " {:?}", s)?;
                            rest = next;
                        }
                        Stream::Suspension(_) => {
                            write!(f, " ...")?;
                            break;
                        }
                    }
                }
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::goal::{fail, same, unit, GoalImpl};
    use crate::core::term::Term;
    use crate::core::var::Var;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Records how often it runs; used to verify laziness guarantees.
    struct CountingGoal {
        calls: Rc<Cell<usize>>,
    }

    impl GoalImpl for CountingGoal {
        fn run(&self, s: Subst) -> Stream {
            self.calls.set(self.calls.get() + 1);
            Stream::singleton(s)
        }

        fn label(&self) -> String {
            "counting".to_string()
        }
    }

    fn counting_goal() -> (Goal, Rc<Cell<usize>>) {
        let calls = Rc::new(Cell::new(0));
        let goal = Goal::new(CountingGoal {
            calls: calls.clone(),
        });
        (goal, calls)
    }

    #[test]
    fn empty_mplus_is_identity() {
        let s = Stream::singleton(Subst::empty());
        assert_eq!(Stream::empty().mplus(s), Stream::singleton(Subst::empty()));
        assert_eq!(
            Stream::singleton(Subst::empty()).mplus(Stream::empty()),
            Stream::singleton(Subst::empty())
        );
    }

    #[test]
    fn empty_bind_never_runs_the_goal() {
        let (goal, calls) = counting_goal();
        assert!(Stream::empty().bind(&goal).is_empty());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn bind_runs_the_goal_per_solution() {
        let (goal, calls) = counting_goal();
        let stream = Stream::cons(Subst::empty(), Stream::singleton(Subst::empty()));
        let solutions: Vec<_> = Solutions::new(stream.bind(&goal)).collect();
        assert_eq!(solutions.len(), 2);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn solve_forces_one_layer_per_call() {
        let stream =
            Stream::suspension(|| Stream::suspension(|| Stream::singleton(Subst::empty())));
        let step = stream.solve().unwrap();
        assert!(step.subst().is_none());
        let (_, rest) = step.into_parts();
        let step = rest.solve().unwrap();
        assert!(step.subst().is_none());
        let (_, rest) = step.into_parts();
        let step = rest.solve().unwrap();
        assert!(step.subst().is_some());
    }

    #[test]
    fn combinators_do_not_force_suspensions() {
        let touched = Rc::new(Cell::new(false));
        let t1 = touched.clone();
        let t2 = touched.clone();
        let (goal, _) = counting_goal();
        let merged = Stream::suspension(move || {
            t1.set(true);
            Stream::Empty
        })
        .mplus(Stream::suspension(move || {
            t2.set(true);
            Stream::Empty
        }));
        let bound = merged.bind(&goal);
        assert!(!touched.get());
        drop(bound);
    }

    #[test]
    fn merging_suspended_branches_loses_nothing() {
        let x = Var::new("x");
        let fives = same(x, 5);
        let sixes = same(x, 6);
        let s = Subst::empty();
        let s2 = s.clone();
        let lhs = Stream::suspension(move || fives.run(s));
        let rhs = Stream::suspension(move || sixes.run(s2));
        let answers: Vec<_> = Solutions::new(lhs.mplus(rhs))
            .map(|s| s.resolve(&Term::Var(x)))
            .collect();
        assert_eq!(answers, vec![Term::from(5), Term::from(6)]);
    }

    #[test]
    fn unit_and_fail_streams() {
        assert_eq!(unit().run(Subst::empty()), Stream::singleton(Subst::empty()));
        assert!(fail().run(Subst::empty()).is_empty());
    }
}
