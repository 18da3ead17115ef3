//! Goals are pure functions from a substitution to a stream of
//! substitutions satisfying a relational constraint.

use crate::core::stream::{Solutions, Stream};
use crate::core::subst::Subst;
use crate::core::term::Term;
use std::fmt;
use std::sync::Arc;

/// Behavior of a goal plus the structure needed to render a goal tree:
/// a label and an ordered list of sub-goals. The core does not depend on
/// any particular renderer.
pub trait GoalImpl {
    fn run(&self, s: Subst) -> Stream;

    fn label(&self) -> String;

    /// Ordered sub-goals, empty for leaf goals.
    fn members(&self) -> Vec<Goal> {
        Vec::new()
    }
}

/// Cheap-to-clone handle to a goal. Clones share the underlying goal, so
/// a goal constructed once can be referenced from multiple places in a
/// larger goal tree; identity-keyed goals rely on this.
#[derive(Clone)]
pub struct Goal(Arc<dyn GoalImpl>);

impl Goal {
    pub fn new(imp: impl GoalImpl + 'static) -> Self {
        Goal(Arc::new(imp))
    }

    pub(crate) fn from_arc(imp: Arc<dyn GoalImpl>) -> Self {
        Goal(imp)
    }

    /// Wraps a closure as a goal. The closure body runs every time the
    /// goal runs, which is what defers recursive relation construction.
    pub fn from_fn(label: &'static str, f: impl 'static + Fn(Subst) -> Stream) -> Self {
        Goal::new(FnGoal {
            label,
            f: Box::new(f),
        })
    }

    pub fn run(&self, s: Subst) -> Stream {
        self.0.run(s)
    }

    pub fn label(&self) -> String {
        self.0.label()
    }

    pub fn members(&self) -> Vec<Goal> {
        self.0.members()
    }

    /// Run against the empty substitution and iterate the solutions.
    pub fn solutions(&self) -> Solutions {
        Solutions::new(self.run(Subst::empty()))
    }
}

impl fmt::Debug for Goal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())?;
        let members = self.members();
        if !members.is_empty() {
            write!(f, "(")?;
            let mut iter = members.iter();
            if let Some(g) = iter.next() {
                write!(f, "{:?}", g)?;
            }
            for g in iter {
                write!(f, ", {:?}", g)?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}

struct FnGoal {
    label: &'static str,
    f: Box<dyn Fn(Subst) -> Stream>,
}

impl GoalImpl for FnGoal {
    fn run(&self, s: Subst) -> Stream {
        (self.f)(s)
    }

    fn label(&self) -> String {
        self.label.to_string()
    }
}

struct UnitGoal;

impl GoalImpl for UnitGoal {
    fn run(&self, s: Subst) -> Stream {
        Stream::singleton(s)
    }

    fn label(&self) -> String {
        "UNIT".to_string()
    }
}

struct FailGoal;

impl GoalImpl for FailGoal {
    fn run(&self, _s: Subst) -> Stream {
        Stream::Empty
    }

    fn label(&self) -> String {
        "FAIL".to_string()
    }
}

struct SameGoal {
    u: Term,
    v: Term,
}

impl GoalImpl for SameGoal {
    fn run(&self, s: Subst) -> Stream {
        match s.unify(&self.u, &self.v) {
            Some(s) => Stream::singleton(s),
            None => Stream::Empty,
        }
    }

    fn label(&self) -> String {
        format!("{{{:?} == {:?}}}", self.u, self.v)
    }
}

/// A goal that succeeds once without affecting substitutions.
pub fn unit() -> Goal {
    Goal::new(UnitGoal)
}

/// A goal that always fails.
pub fn fail() -> Goal {
    Goal::new(FailGoal)
}

/// A goal that succeeds when `u` and `v` unify.
pub fn same(u: impl Into<Term>, v: impl Into<Term>) -> Goal {
    Goal::new(SameGoal {
        u: u.into(),
        v: v.into(),
    })
}
