//! Assertion helpers for tests of goals and streams.

use crate::core::goal::Goal;
use crate::core::stream::Stream;
use crate::core::subst::Subst;
use crate::core::term::Term;
use crate::core::var::Var;

/// Asserts about the answers of a stream, the number of work units spent
/// obtaining them and whether the stream finishes.
///
/// A work unit is one [`Stream::solve`] call, whether or not it yields
/// an answer. When the stream is expected to finish, the configured work
/// unit count includes the final call that observes exhaustion; when it
/// is not, the driver stops after exactly that many calls.
///
/// ```
/// use relog::prelude::*;
/// use relog::testing::LogicAsserter;
///
/// let x = Var::new("x");
/// LogicAsserter::new(&same(x, 5))
///     .requested(&[x])
///     .work_units(2)
///     .solution(&[(x, Term::from(5))])
///     .test();
/// ```
pub struct LogicAsserter {
    stream: Stream,
    requested: Vec<Var>,
    expected: Vec<Vec<(Var, Term)>>,
    expected_work_units: Option<usize>,
    expect_finishes: bool,
}

impl LogicAsserter {
    /// Asserts on the stream of running `goal` on the empty
    /// substitution.
    pub fn new(goal: &Goal) -> Self {
        Self::with_stream(goal.run(Subst::empty()))
    }

    pub fn with_stream(stream: Stream) -> Self {
        LogicAsserter {
            stream,
            requested: Vec::new(),
            expected: Vec::new(),
            expected_work_units: None,
            expect_finishes: true,
        }
    }

    /// The variables whose resolutions make up each expected answer.
    pub fn requested(mut self, vars: &[Var]) -> Self {
        self.requested.extend_from_slice(vars);
        self
    }

    /// Exact number of work units; without this the count is not
    /// asserted.
    pub fn work_units(mut self, n: usize) -> Self {
        self.expected_work_units = Some(n);
        self
    }

    /// Whether the stream is expected to finish. Defaults to true;
    /// streams with infinite answers must set false and give a work unit
    /// budget.
    pub fn finishes(mut self, expected: bool) -> Self {
        self.expect_finishes = expected;
        self
    }

    /// Appends one expected answer: the bindings of the requested
    /// variables, in the order given. Variables that resolve to an
    /// unbound variable are omitted from the answer view, so they are
    /// left out here as well.
    pub fn solution(mut self, bindings: &[(Var, Term)]) -> Self {
        self.expected.push(bindings.to_vec());
        self
    }

    /// Drives the stream and checks every configured expectation.
    ///
    /// # Panics
    ///
    /// Panics if any expectation does not hold.
    pub fn test(self) {
        let mut stream = self.stream;
        let mut actual: Vec<Vec<(Var, Term)>> = Vec::new();
        let mut finished = false;
        let mut work_units = 0;

        let budget = self.expected_work_units.unwrap_or(0);
        while self.expect_finishes || work_units < budget {
            work_units += 1;
            match stream.solve() {
                None => {
                    finished = true;
                    break;
                }
                Some(step) => {
                    let (subst, rest) = step.into_parts();
                    if let Some(subst) = subst {
                        actual.push(view(&subst, &self.requested));
                    }
                    stream = rest;
                }
            }
        }

        if let Some(expected) = self.expected_work_units {
            assert_eq!(expected, work_units, "work units");
        }
        assert_eq!(self.expect_finishes, finished, "stream finishes");
        assert_eq!(self.expected, actual, "answers");
    }
}

/// The answer view of a substitution: each requested variable paired
/// with its resolution, skipping variables that are still unbound.
fn view(subst: &Subst, requested: &[Var]) -> Vec<(Var, Term)> {
    requested
        .iter()
        .filter_map(|&v| match subst.resolve(&v.into()) {
            Term::Var(_) => None,
            bound => Some((v, bound)),
        })
        .collect()
}
