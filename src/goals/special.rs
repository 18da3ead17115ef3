//! Goals that manipulate evaluation itself: delaying, repetition and
//! identity-keyed memoization.

use crate::core::goal::{Goal, GoalImpl};
use crate::core::stream::Stream;
use crate::core::subst::Subst;
use crate::core::var::next_object_id;
use log::trace;
use std::sync::{Arc, Weak};

/// Defers running the wrapped goal behind one suspension.
///
/// Wrapping the recursive call of a self-recursive goal in a
/// `DelayedGoal` is mandatory: it turns the recursion into one trampoline
/// step per [`Stream::solve`] call, keeping native stack usage bounded
/// regardless of recursion depth or infinite answer sets. A
/// self-recursive goal without it exhausts the stack.
pub struct DelayedGoal {
    inner: Goal,
}

impl DelayedGoal {
    pub fn new(inner: Goal) -> Self {
        DelayedGoal { inner }
    }
}

impl GoalImpl for DelayedGoal {
    fn run(&self, s: Subst) -> Stream {
        let inner = self.inner.clone();
        Stream::suspension(move || inner.run(s))
    }

    fn label(&self) -> String {
        "delay".to_string()
    }

    fn members(&self) -> Vec<Goal> {
        vec![self.inner.clone()]
    }
}

impl From<DelayedGoal> for Goal {
    fn from(g: DelayedGoal) -> Self {
        Goal::new(g)
    }
}

/// Convenience constructor for [`DelayedGoal`].
pub fn delay(inner: Goal) -> Goal {
    DelayedGoal::new(inner).into()
}

/// Repeats a goal forever: equivalent to the infinite disjunction of the
/// wrapped goal with itself, with every repetition delayed by one
/// suspension so the stream interleaves fairly with other branches.
struct RepeatedGoal {
    repeated: Goal,
    this: Weak<RepeatedGoal>,
}

impl GoalImpl for RepeatedGoal {
    fn run(&self, s: Subst) -> Stream {
        // `repeat` only hands this goal out inside the owning Arc, so the
        // weak self-reference is live whenever run is reachable.
        let again = match self.this.upgrade() {
            Some(me) => Goal::from_arc(me),
            None => return self.repeated.run(s),
        };
        let s2 = s.clone();
        self.repeated
            .run(s)
            .mplus(Stream::suspension(move || again.run(s2)))
    }

    fn label(&self) -> String {
        "repeat".to_string()
    }

    fn members(&self) -> Vec<Goal> {
        vec![self.repeated.clone()]
    }
}

/// Creates a goal that produces the answers of `repeated`, over and over,
/// interleaved fairly with any sibling branches. The self-reference is
/// constructed once and reused on every step.
pub fn repeat(repeated: Goal) -> Goal {
    let goal: Arc<RepeatedGoal> = Arc::new_cyclic(|this| RepeatedGoal {
        repeated,
        this: this.clone(),
    });
    Goal::from_arc(goal)
}

/// Identity-keyed memoization, recorded in-band in the substitution.
///
/// The first run extends the substitution with a cache entry keyed by
/// this instance's identity and runs the delegate; later runs that see
/// the entry succeed trivially without re-invoking the delegate. Because
/// the entry lives in the ordinary substitution chain it is
/// backtracking-scoped: it disappears with the branch that recorded it.
///
/// This is not just an optimization. If the delegate is a disjunction and
/// the same `CachedGoal` is referenced at several points of a larger
/// goal, every occurrence resolves to the identical chosen branch.
pub struct CachedGoal {
    id: u64,
    prerequisite: Option<u64>,
    delegate: Goal,
}

impl CachedGoal {
    pub fn new(delegate: Goal) -> Self {
        CachedGoal {
            id: next_object_id(),
            prerequisite: None,
            delegate,
        }
    }

    /// Like [`CachedGoal::new`], but the goal fails outright unless
    /// `prerequisite` has already recorded its cache entry in the
    /// incoming substitution.
    pub fn with_prerequisite(prerequisite: &CachedGoal, delegate: Goal) -> Self {
        CachedGoal {
            id: next_object_id(),
            prerequisite: Some(prerequisite.id),
            delegate,
        }
    }

    pub fn into_goal(self) -> Goal {
        Goal::new(self)
    }
}

impl GoalImpl for CachedGoal {
    fn run(&self, s: Subst) -> Stream {
        if let Some(pre) = self.prerequisite {
            if !s.has_cache(pre) {
                trace!("cached goal {:x}: prerequisite {:x} missing", self.id, pre);
                return Stream::Empty;
            }
        }
        if s.has_cache(self.id) {
            trace!("cached goal {:x}: hit", self.id);
            return Stream::singleton(s);
        }
        trace!("cached goal {:x}: first evaluation", self.id);
        self.delegate.run(s.ext_cache(self.id))
    }

    fn label(&self) -> String {
        format!("cached@{:x}", self.id)
    }

    fn members(&self) -> Vec<Goal> {
        vec![self.delegate.clone()]
    }
}

impl From<CachedGoal> for Goal {
    fn from(g: CachedGoal) -> Self {
        g.into_goal()
    }
}
