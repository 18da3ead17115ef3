//! Compose goals using combinators to build more complex goals.

use crate::core::goal::{Goal, GoalImpl};
use crate::core::stream::Stream;
use crate::core::subst::Subst;
use crate::error::GoalError;

/// Conjunction: succeeds with the substitutions that satisfy every
/// subgoal in order.
///
/// Runs as a left fold with [`Stream::bind`], so once an intermediate
/// stream is empty the remaining subgoals are never invoked.
pub struct ConjGoal {
    goals: Vec<Goal>,
}

impl ConjGoal {
    /// Rejects an empty goal list; a malformed program, not a search
    /// failure.
    pub fn new(goals: Vec<Goal>) -> Result<Self, GoalError> {
        if goals.is_empty() {
            return Err(GoalError::NoSubgoals("conj"));
        }
        Ok(ConjGoal { goals })
    }

    /// Infallible form used where at least one goal is statically known.
    pub fn of(first: Goal, rest: Vec<Goal>) -> Self {
        let mut goals = Vec::with_capacity(1 + rest.len());
        goals.push(first);
        goals.extend(rest);
        ConjGoal { goals }
    }

    /// Returns a new conjunction that alternates this one's subgoals with
    /// `extra`: original[0], extra[0], original[1], extra[1], ...; any
    /// excess tail is appended in order.
    ///
    /// This controls which goals execute, and therefore which
    /// short-circuit opportunities are taken, before a later divergence
    /// or failure is reached. It changes execution order, not the logical
    /// result set.
    pub fn interleave(&self, extra: impl IntoIterator<Item = Goal>) -> ConjGoal {
        let mut ours = self.goals.iter().cloned();
        let mut theirs = extra.into_iter();
        let mut goals = Vec::new();
        if let Some(first) = ours.next() {
            goals.push(first);
        }
        loop {
            match (theirs.next(), ours.next()) {
                (None, None) => break,
                (t, o) => {
                    goals.extend(t);
                    goals.extend(o);
                }
            }
        }
        ConjGoal { goals }
    }
}

impl GoalImpl for ConjGoal {
    fn run(&self, s: Subst) -> Stream {
        let mut result = self.goals[0].run(s);
        for goal in &self.goals[1..] {
            result = result.bind(goal);
        }
        result
    }

    fn label(&self) -> String {
        "conj".to_string()
    }

    fn members(&self) -> Vec<Goal> {
        self.goals.clone()
    }
}

impl From<ConjGoal> for Goal {
    fn from(g: ConjGoal) -> Self {
        Goal::new(g)
    }
}

/// Disjunction: succeeds with the substitutions that satisfy any
/// subgoal.
///
/// Every subgoal runs against the original substitution; the resulting
/// streams merge with [`Stream::mplus`], giving fair interleaving across
/// branches rather than branch-exhaustive enumeration.
pub struct DisjGoal {
    goals: Vec<Goal>,
}

impl DisjGoal {
    pub fn new(goals: Vec<Goal>) -> Result<Self, GoalError> {
        if goals.is_empty() {
            return Err(GoalError::NoSubgoals("disj"));
        }
        Ok(DisjGoal { goals })
    }

    pub fn of(first: Goal, rest: Vec<Goal>) -> Self {
        let mut goals = Vec::with_capacity(1 + rest.len());
        goals.push(first);
        goals.extend(rest);
        DisjGoal { goals }
    }
}

impl GoalImpl for DisjGoal {
    fn run(&self, s: Subst) -> Stream {
        let mut result = self.goals[0].run(s.clone());
        for goal in &self.goals[1..] {
            result = result.mplus(goal.run(s.clone()));
        }
        result
    }

    fn label(&self) -> String {
        "disj".to_string()
    }

    fn members(&self) -> Vec<Goal> {
        self.goals.clone()
    }
}

impl From<DisjGoal> for Goal {
    fn from(g: DisjGoal) -> Self {
        Goal::new(g)
    }
}

/// Creates a goal that succeeds if both of its subgoals succeed.
pub fn conj2(g1: Goal, g2: Goal) -> Goal {
    ConjGoal::of(g1, vec![g2]).into()
}

/// Creates a goal that succeeds if either of its subgoals succeeds.
pub fn disj2(g1: Goal, g2: Goal) -> Goal {
    DisjGoal::of(g1, vec![g2]).into()
}
