//! Collection keys: non-negative integers or strings.

use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};

use ordermap::Equivalent;

/// A key in a [`Collection`](crate::Collection).
///
/// Keys are either sequential-style integer indexes or string names, matching
/// the two key shapes an ordered mapping supports. `Key` hashes as its payload
/// alone, so `str` and `u64` queries can be used for lookups directly (via
/// [`Equivalent`]) without constructing a `Key` first:
///
/// ```rust
/// use fluent_collection::Collection;
///
/// let mut c = Collection::new();
/// c.insert("name", "Alice");
/// c.add(42);
///
/// assert!(c.contains_key("name"));
/// assert!(c.contains_key(&0u64));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Key {
    /// A non-negative integer index.
    Index(u64),
    /// A string name.
    Name(String),
}

// Payload-only hashing keeps `Key::Index(n)` hash-compatible with `u64` and
// `Key::Name(s)` hash-compatible with `str`, which the `Equivalent` impls
// below rely on. Cross-variant collisions are resolved by `Eq`.
impl Hash for Key {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Key::Index(i) => i.hash(state),
            Key::Name(s) => s.hash(state),
        }
    }
}

impl Equivalent<Key> for str {
    fn equivalent(&self, key: &Key) -> bool {
        matches!(key, Key::Name(name) if name == self)
    }
}

impl Equivalent<Key> for u64 {
    fn equivalent(&self, key: &Key) -> bool {
        matches!(key, Key::Index(i) if i == self)
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(i) => write!(f, "{i}"),
            Key::Name(s) => f.write_str(s),
        }
    }
}

impl From<u64> for Key {
    fn from(index: u64) -> Self {
        Key::Index(index)
    }
}

impl From<u32> for Key {
    fn from(index: u32) -> Self {
        Key::Index(u64::from(index))
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Key::Index(index as u64)
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Name(name.to_owned())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Name(name)
    }
}
