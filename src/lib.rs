//! A relational programming engine.
//!
//! Programs are [goals](core::goal::Goal): pure functions from a
//! [substitution](core::subst::Subst) to a lazy
//! [stream](core::stream::Stream) of substitutions that satisfy the
//! goal. Goals are built from unification over [terms](core::term::Term)
//! and composed with conjunction, disjunction and the evaluation
//! combinators in [`goals::special`].
//!
//! ```
//! use relog::prelude::*;
//! use relog::list;
//!
//! let x = Var::new("x");
//! let y = Var::new("y");
//! let splits: Vec<_> = append(x, y, list![1, 2, 3])
//!     .solutions()
//!     .map(|s| (s.resolve(&x.into()), s.resolve(&y.into())))
//!     .collect();
//! assert_eq!(splits.len(), 4);
//! ```

#[macro_use]
pub mod macros;
pub mod core;
pub mod error;
pub mod goals;
pub mod prelude;
pub mod testing;

#[cfg(test)]
mod acceptance_tests;
