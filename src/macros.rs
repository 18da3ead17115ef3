//! Macros for writing goals and sequence terms with less ceremony.

/// Creates a goal that succeeds if all of its subgoals succeed.
#[macro_export]
macro_rules! conj {
    ($g:expr $(,)?) => { $g };
    ($g0:expr, $($g:expr),+ $(,)?) => {
        $crate::core::goal::Goal::from(
            $crate::goals::combinators::ConjGoal::of($g0, vec![$($g),+]))
    };
}

/// Creates a goal that succeeds if any of its subgoals succeeds.
/// Subgoals are separated with `;` to mirror the disjunctive reading.
#[macro_export]
macro_rules! disj {
    ($g:expr $(;)?) => { $g };
    ($g0:expr; $($g:expr);+ $(;)?) => {
        $crate::core::goal::Goal::from(
            $crate::goals::combinators::DisjGoal::of($g0, vec![$($g),+]))
    };
}

/// Builds a sequence term. `list![a, b, c]` is a proper sequence ending
/// in nil; `list![a, b; tail]` ends in `tail` instead.
#[macro_export]
macro_rules! list {
    () => { $crate::core::term::Term::Nil };
    ($item:expr) => {
        $crate::core::term::Term::pair($item, $crate::core::term::Term::Nil)
    };
    ($item:expr; $tail:expr) => {
        $crate::core::term::Term::pair($item, $tail)
    };
    ($item:expr, $($rest:expr),+; $tail:expr) => {
        $crate::core::term::Term::pair($item, $crate::list![$($rest),+; $tail])
    };
    ($item:expr, $($rest:expr),+ $(,)?) => {
        $crate::core::term::Term::pair($item, $crate::list![$($rest),+])
    };
}
