pub use crate::{
    core::{
        goal::{fail, same, unit, Goal, GoalImpl},
        stream::{SolveStep, Solutions, Stream},
        subst::Subst,
        term::{Atomic, LogicValue, Pair, Term},
        var::Var,
    },
    error::GoalError,
    goals::{combinators::*, sequence::*, special::*},
};
