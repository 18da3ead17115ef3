//! The term domain: variables, atomic leaves and composite logic values.

use crate::core::subst::Subst;
use crate::core::var::Var;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Marker trait for atomic leaf values.
///
/// Atoms unify by value equality and contain no logic variables.
pub trait Atomic: Any + fmt::Debug {}

impl Atomic for () {}

impl Atomic for bool {}

impl Atomic for u8 {}

impl Atomic for u16 {}

impl Atomic for u32 {}

impl Atomic for u64 {}

impl Atomic for i8 {}

impl Atomic for i16 {}

impl Atomic for i32 {}

impl Atomic for i64 {}

impl Atomic for char {}

impl Atomic for f32 {}

impl Atomic for f64 {}

impl Atomic for String {}

impl Atomic for &'static str {}

/// Object-safe view of an atom. Blanket-implemented for every
/// [`Atomic`] type with value equality.
pub trait AtomObject: fmt::Debug {
    fn as_any(&self) -> &dyn Any;
    fn eqv(&self, other: &dyn AtomObject) -> bool;
}

impl<T: Atomic + PartialEq> AtomObject for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eqv(&self, other: &dyn AtomObject) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .map(|o| o == self)
            .unwrap_or(false)
    }
}

/// Contract for composite term kinds.
///
/// A `LogicValue` has a fixed, kind-specific set of fields, each holding
/// another [`Term`]. Two logic values unify only when they are the same
/// kind; the field order is fixed per kind and shared between [`unify`]
/// and [`replace`].
///
/// [`unify`]: LogicValue::unify
/// [`replace`]: LogicValue::replace
pub trait LogicValue: fmt::Debug {
    /// Explicit kind tag, compared before field-wise unification.
    fn kind(&self) -> &'static str;

    /// This value's fields as an ordered name/term list. Introspection
    /// only; unification goes through [`LogicValue::unify`].
    fn fields(&self) -> Vec<(&'static str, Term)>;

    fn as_any(&self) -> &dyn Any;

    /// Extends `subst` in such a way that `self` equals `other`, unifying
    /// fields pairwise in fixed order and short-circuiting on the first
    /// failure. Callers guarantee that `other` is the same kind.
    fn unify(&self, subst: Subst, other: &dyn LogicValue) -> Option<Subst> {
        let mut subst = subst;
        for ((_, u), (_, v)) in self.fields().into_iter().zip(other.fields()) {
            subst = subst.unify(&u, &v)?;
        }
        Some(subst)
    }

    /// Returns a new value of the same kind with every field passed
    /// through `f`.
    fn replace(&self, f: &mut dyn FnMut(&Term) -> Term) -> Term;
}

/// A term: the absent marker, a variable, an atomic leaf, or a composite
/// logic value.
#[derive(Clone)]
pub enum Term {
    /// The absent marker, doubling as the end of a sequence.
    Nil,
    Var(Var),
    Atom(Arc<dyn AtomObject>),
    Value(Arc<dyn LogicValue>),
}

impl Term {
    pub fn atom(a: impl Atomic + PartialEq) -> Self {
        Term::Atom(Arc::new(a))
    }

    pub fn value(v: impl LogicValue + 'static) -> Self {
        Term::Value(Arc::new(v))
    }

    /// Builds a cons cell.
    pub fn pair(car: impl Into<Term>, cdr: impl Into<Term>) -> Self {
        Term::value(Pair::new(car, cdr))
    }

    /// Builds a proper sequence ending in [`Term::Nil`].
    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Term>,
        I::IntoIter: DoubleEndedIterator,
    {
        let mut seq = Term::Nil;
        for item in items.into_iter().rev() {
            seq = Term::pair(item, seq);
        }
        seq
    }

    pub fn is_var(&self) -> bool {
        matches!(self, Term::Var(_))
    }

    pub fn as_value(&self) -> Option<&dyn LogicValue> {
        match self {
            Term::Value(v) => Some(v.as_ref()),
            _ => None,
        }
    }

    pub fn downcast_value<T: 'static>(&self) -> Option<&T> {
        self.as_value().and_then(|v| v.as_any().downcast_ref())
    }
}

impl From<Var> for Term {
    fn from(v: Var) -> Self {
        Term::Var(v)
    }
}

impl<T: Atomic + PartialEq> From<T> for Term {
    fn from(a: T) -> Self {
        Term::atom(a)
    }
}

impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Term::Nil, Term::Nil) => true,
            (Term::Var(a), Term::Var(b)) => a == b,
            (Term::Atom(a), Term::Atom(b)) => a.eqv(b.as_ref()),
            (Term::Value(a), Term::Value(b)) => {
                Arc::ptr_eq(a, b) || (a.kind() == b.kind() && a.fields() == b.fields())
            }
            _ => false,
        }
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Term::Nil => write!(f, "()"),
            Term::Var(v) => write!(f, "{:?}", v),
            Term::Atom(a) => write!(f, "{:?}", a),
            Term::Value(v) => write!(f, "{:?}", v),
        }
    }
}

/// The built-in cons cell kind; sequences are chains of pairs ending in
/// [`Term::Nil`].
pub struct Pair {
    car: Term,
    cdr: Term,
}

impl Pair {
    pub fn new(car: impl Into<Term>, cdr: impl Into<Term>) -> Self {
        Pair {
            car: car.into(),
            cdr: cdr.into(),
        }
    }

    pub fn car(&self) -> &Term {
        &self.car
    }

    pub fn cdr(&self) -> &Term {
        &self.cdr
    }
}

impl LogicValue for Pair {
    fn kind(&self) -> &'static str {
        "pair"
    }

    fn fields(&self) -> Vec<(&'static str, Term)> {
        vec![("car", self.car.clone()), ("cdr", self.cdr.clone())]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn replace(&self, f: &mut dyn FnMut(&Term) -> Term) -> Term {
        Term::value(Pair::new(f(&self.car), f(&self.cdr)))
    }
}

impl From<Pair> for Term {
    fn from(p: Pair) -> Self {
        Term::value(p)
    }
}

impl fmt::Debug for Pair {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{:?}", self.car)?;
        let mut rest = &self.cdr;
        loop {
            match rest {
                Term::Nil => break,
                Term::Value(v) => match v.as_any().downcast_ref::<Pair>() {
                    Some(p) => {
                        write!(f, ", {:?}", p.car)?;
                        rest = &p.cdr;
                    }
                    None => {
                        write!(f, " | {:?}", rest)?;
                        break;
                    }
                },
                other => {
                    write!(f, " | {:?}", other)?;
                    break;
                }
            }
        }
        write!(f, "]")
    }
}
