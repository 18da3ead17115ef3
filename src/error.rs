//! Construction errors.
//!
//! Search failure is never an error; it is the empty stream. The errors
//! here reject malformed goal construction eagerly, before any search
//! runs.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GoalError {
    /// A variadic combinator was given no subgoals.
    #[error("{0} requires at least one subgoal")]
    NoSubgoals(&'static str),
}
