//! Substitutions map variables to terms.
//!
//! A substitution is immutable: extending one yields a new value that
//! shares structure with its ancestor, so many branches of a search can
//! hold substitutions derived from a common ancestor at the same time.

use crate::core::term::Term;
use crate::core::var::Var;
use std::fmt;
use std::sync::Arc;

/// Map key: either a variable binding or a cache entry recorded by an
/// identity-keyed goal. Both draw their ids from the same counter, so the
/// key is an opaque id rather than a reference.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub(crate) enum Key {
    Var(Var),
    Cache(u64),
}

impl Key {
    fn index(&self) -> u64 {
        match self {
            Key::Var(v) => v.id(),
            Key::Cache(id) => *id,
        }
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Key::Var(v) => write!(f, "{:?}", v),
            Key::Cache(id) => write!(f, "cache@{:x}", id),
        }
    }
}

/// Immutable mapping of variables to bound terms.
///
/// Invariant: single assignment. Once a variable has been extended with a
/// binding it is never rebound within the same lineage; derived
/// substitutions only add new bindings. This keeps the binding graph
/// acyclic and guarantees that [`walk`](Subst::walk) terminates.
#[derive(Clone, PartialEq)]
pub struct Subst {
    map: im::HashMap<Key, Term>,
}

impl Default for Subst {
    fn default() -> Self {
        Self::empty()
    }
}

impl Subst {
    /// The empty substitution, the starting point of every query.
    pub fn empty() -> Self {
        Subst {
            map: im::HashMap::new(),
        }
    }

    /// Number of entries, cache entries included.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// The binding of `x` in this substitution, if any. Shallow; see
    /// [`walk`](Subst::walk) for dereferencing chains.
    pub fn get(&self, x: Var) -> Option<&Term> {
        self.map.get(&Key::Var(x))
    }

    /// Dereference `t`: while it is a variable bound in this
    /// substitution, replace it with its binding. Stops at the first
    /// unbound variable or non-variable term and does not recurse into
    /// composite fields.
    pub fn walk(&self, t: &Term) -> Term {
        let mut t = t.clone();
        while let Term::Var(v) = t {
            match self.map.get(&Key::Var(v)) {
                Some(next) => t = next.clone(),
                None => return Term::Var(v),
            }
        }
        t
    }

    /// Returns a new substitution with the added binding `x -> v`.
    ///
    /// Callers must ensure `x` is currently unbound.
    pub fn ext(&self, x: Var, v: impl Into<Term>) -> Subst {
        Subst {
            map: self.map.update(Key::Var(x), v.into()),
        }
    }

    /// Attempt to unify `u` and `v` under this substitution.
    ///
    /// Returns the (possibly extended) substitution on success and `None`
    /// on mismatch; unification failure is an expected outcome, never an
    /// error.
    pub fn unify(&self, u: &Term, v: &Term) -> Option<Subst> {
        let u = self.walk(u);
        let v = self.walk(v);
        match (&u, &v) {
            (Term::Var(a), Term::Var(b)) if a == b => Some(self.clone()),
            (Term::Var(a), _) => Some(self.ext(*a, v)),
            (_, Term::Var(b)) => Some(self.ext(*b, u)),
            (Term::Nil, Term::Nil) => Some(self.clone()),
            (Term::Nil, _) | (_, Term::Nil) => None,
            (Term::Value(a), Term::Value(b)) => {
                if Arc::ptr_eq(a, b) {
                    Some(self.clone())
                } else if a.kind() == b.kind() {
                    a.unify(self.clone(), b.as_ref())
                } else {
                    None
                }
            }
            (Term::Atom(a), Term::Atom(b)) => {
                if a.eqv(b.as_ref()) {
                    Some(self.clone())
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Deep dereference: walk `t`, then rebuild composite values with
    /// every field resolved. Materializes an answer term.
    pub fn resolve(&self, t: &Term) -> Term {
        match self.walk(t) {
            Term::Value(v) => v.replace(&mut |field| self.resolve(field)),
            other => other,
        }
    }

    pub(crate) fn ext_cache(&self, id: u64) -> Subst {
        Subst {
            map: self.map.update(Key::Cache(id), Term::from(true)),
        }
    }

    pub(crate) fn has_cache(&self, id: u64) -> bool {
        self.map.contains_key(&Key::Cache(id))
    }
}

impl fmt::Debug for Subst {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut entries: Vec<_> = self.map.iter().collect();
        entries.sort_by_key(|(k, _)| k.index());
        write!(f, "{{")?;
        let mut iter = entries.into_iter();
        if let Some((key, val)) = iter.next() {
            write!(f, "{:?}: {:?}", key, val)?;
        }
        for (key, val) in iter {
            write!(f, ", {:?}: {:?}", key, val)?;
        }
        write!(f, "}}")
    }
}
