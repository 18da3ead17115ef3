use std::sync::atomic::{AtomicU64, Ordering};

/// Source of unique ids for every identity-keyed object in the engine.
///
/// Logic variables and cached goals share this id space so that a
/// substitution can key entries for either kind of object without relying
/// on pointer identity.
static OBJECT_COUNTER: AtomicU64 = AtomicU64::new(0);

pub(crate) fn next_object_id() -> u64 {
    OBJECT_COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// Named logic variable.
///
/// The variable name is purely descriptive to help understanding.
/// Any newly created variable is different from all previously
/// created variables, even if they have the same name.
/// However, variables can be copied, which preserves identity.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Var {
    name: &'static str,
    id: u64,
}

impl Var {
    /// Create a new unique logic variable.
    pub fn new(name: &'static str) -> Self {
        Var {
            name,
            id: next_object_id(),
        }
    }

    /// Return the variable's name.
    pub fn name(&self) -> &str {
        self.name
    }

    pub(crate) fn id(&self) -> u64 {
        self.id
    }
}

impl From<&'static str> for Var {
    fn from(name: &'static str) -> Self {
        Var::new(name)
    }
}

/// Ordered by creation index. This is only used for stable display
/// ordering, never for search semantics.
impl PartialOrd for Var {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Var {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.id.cmp(&other.id)
    }
}

impl std::fmt::Debug for Var {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
