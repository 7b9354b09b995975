//! The [`Collection`] container and its operation surface.

use std::cmp::Ordering;
use std::fmt::{self, Debug, Display};
use std::hash::Hash;
use std::iter::FromIterator;
use std::ops::Index;

use ordermap::{Equivalent, OrderMap};

use crate::error::Error;
use crate::key::Key;
use crate::value::Value;

/// An insertion-ordered key-value container with chainable, functional-style
/// operations.
///
/// A `Collection` wraps an [`OrderMap`] from [`Key`] (string or non-negative
/// integer) to [`Value`] (heterogeneous). Keys are unique; iteration order is
/// insertion order unless an operation explicitly reorders ([`sorted`],
/// [`reverse`], [`flip`]).
///
/// Two classes of methods operate on the owned storage:
/// - **Mutating**: [`add`], [`insert`], [`remove`] modify the receiver in
///   place.
/// - **Transforming**: everything else builds a new `Collection` (or returns
///   a scalar/element result), leaving the receiver untouched. Transformed
///   collections never alias the receiver's storage.
///
/// Callbacks run synchronously on the caller's thread. Because transforming
/// methods borrow the receiver shared, a callback cannot mutate the
/// collection it is being invoked from.
///
/// [`sorted`]: Collection::sorted
/// [`reverse`]: Collection::reverse
/// [`flip`]: Collection::flip
/// [`add`]: Collection::add
/// [`insert`]: Collection::insert
/// [`remove`]: Collection::remove
#[derive(Clone, Default, PartialEq)]
pub struct Collection {
    items: OrderMap<Key, Value>,
}

impl Collection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self {
            items: OrderMap::new(),
        }
    }

    /// Creates an empty collection with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: OrderMap::with_capacity(capacity),
        }
    }

    /// Snapshot view of all entries as the backing ordered map.
    pub fn all(&self) -> &OrderMap<Key, Value> {
        &self.items
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the collection has no entries.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` if the keys are exactly `0..len` in order.
    ///
    /// Sequential collections serialize as JSON arrays, everything else as
    /// JSON objects. The empty collection is sequential.
    pub fn is_sequential(&self) -> bool {
        self.items
            .keys()
            .enumerate()
            .all(|(i, k)| matches!(k, Key::Index(n) if *n == i as u64))
    }

    /// Appends `item` at the next integer key (one past the largest integer
    /// key in use, or `0`). Mutates the receiver; returns it for chaining.
    pub fn add(&mut self, item: impl Into<Value>) -> &mut Self {
        let next = self.next_index();
        self.items.insert(Key::Index(next), item.into());
        self
    }

    fn next_index(&self) -> u64 {
        self.items
            .keys()
            .filter_map(|k| match k {
                Key::Index(i) => Some(*i),
                Key::Name(_) => None,
            })
            .max()
            .map_or(0, |max| max + 1)
    }

    /// Sets `key` to `value` in place, returning the previous value if the
    /// key was present. An existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        self.items.insert(key.into(), value.into())
    }

    /// Removes the entry for `key`, returning its value if present. The
    /// order of the remaining entries is preserved.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<Value>
    where
        Q: ?Sized + Hash + Equivalent<Key>,
    {
        self.items.remove(key)
    }

    /// Returns `true` if `key` is present and bound to a non-null value.
    ///
    /// A [`Value::Null`] binding reads as absent here; use
    /// [`contains_key`](Collection::contains_key) to test raw key presence.
    pub fn has<Q>(&self, key: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<Key>,
    {
        matches!(self.items.get(key), Some(v) if !v.is_null())
    }

    /// Returns `true` if `key` is present, regardless of its value.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<Key>,
    {
        self.items.contains_key(key)
    }

    /// Returns `true` if any value is loosely equal to `value`. Scans values
    /// only, never keys.
    pub fn contains(&self, value: impl Into<Value>) -> bool {
        let value = value.into();
        self.items.values().any(|v| v.loose_eq(&value))
    }

    /// Returns the value bound to `key`, or `None` when the key is absent
    /// **or** bound to [`Value::Null`]. Callers supply defaults with
    /// `unwrap_or`.
    pub fn get<Q>(&self, key: &Q) -> Option<&Value>
    where
        Q: ?Sized + Hash + Equivalent<Key>,
    {
        self.items.get(key).filter(|v| !v.is_null())
    }

    /// Direct indexed read: the value bound to `key`, or
    /// [`Error::KeyNotFound`] when absent.
    pub fn try_get<Q>(&self, key: &Q) -> Result<&Value, Error>
    where
        Q: ?Sized + Hash + Equivalent<Key> + Display,
    {
        self.items
            .get(key)
            .ok_or_else(|| Error::KeyNotFound(key.to_string()))
    }

    /// First value in iteration order, or `None` on an empty collection.
    pub fn first(&self) -> Option<&Value> {
        self.items.values().next()
    }

    /// First value satisfying `pred`, scanning from the front.
    pub fn first_where<P>(&self, mut pred: P) -> Option<&Value>
    where
        P: FnMut(&Value) -> bool,
    {
        self.items.values().find(|&v| pred(v))
    }

    /// Last value in iteration order, or `None` on an empty collection.
    pub fn last(&self) -> Option<&Value> {
        self.items.values().next_back()
    }

    /// First value satisfying `pred` when scanning from the back.
    pub fn last_where<P>(&self, mut pred: P) -> Option<&Value>
    where
        P: FnMut(&Value) -> bool,
    {
        self.items.values().rev().find(|&v| pred(v))
    }

    /// New collection of this collection's keys, as values at sequential
    /// integer keys, in the original order.
    pub fn keys(&self) -> Collection {
        self.items
            .keys()
            .map(|k| match k {
                Key::Index(i) => Value::Int(*i as i64),
                Key::Name(s) => Value::Str(s.clone()),
            })
            .collect()
    }

    /// Applies `f` to every value, producing a new collection with the same
    /// keys in the same order.
    pub fn map<F>(&self, mut f: F) -> Collection
    where
        F: FnMut(&Value) -> Value,
    {
        Self {
            items: self.items.iter().map(|(k, v)| (k.clone(), f(v))).collect(),
        }
    }

    /// New collection of the entries whose value satisfies `pred`. Kept
    /// entries retain their keys and relative order.
    pub fn filter<P>(&self, mut pred: P) -> Collection
    where
        P: FnMut(&Value) -> bool,
    {
        Self {
            items: self
                .items
                .iter()
                .filter(|&(_, v)| pred(v))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        }
    }

    /// Complement of [`filter`](Collection::filter): drops the entries whose
    /// value satisfies `pred`.
    pub fn reject<P>(&self, mut pred: P) -> Collection
    where
        P: FnMut(&Value) -> bool,
    {
        self.filter(|v| !pred(v))
    }

    /// Drops the entries loosely equal to `value`; remaining entries keep
    /// their keys.
    pub fn reject_value(&self, value: impl Into<Value>) -> Collection {
        let value = value.into();
        self.filter(|v| !v.loose_eq(&value))
    }

    /// New collection of the entries whose value is not loosely present
    /// among `other`'s values. Kept entries retain their keys.
    pub fn diff(&self, other: impl Into<Collection>) -> Collection {
        let other = other.into();
        self.filter(|v| !other.items.values().any(|o| v.loose_eq(o)))
    }

    /// Like [`diff`](Collection::diff), but values are matched with `cmp`;
    /// two values count as equal when `cmp` returns [`Ordering::Equal`].
    pub fn diff_using<F>(&self, other: impl Into<Collection>, mut cmp: F) -> Collection
    where
        F: FnMut(&Value, &Value) -> Ordering,
    {
        let other = other.into();
        self.filter(|v| !other.items.values().any(|o| cmp(v, o) == Ordering::Equal))
    }

    /// New collection retaining the entries whose key is absent from
    /// `other`'s keys. Values play no part in the comparison.
    pub fn diff_keys(&self, other: impl Into<Collection>) -> Collection {
        let other = other.into();
        Self {
            items: self
                .items
                .iter()
                .filter(|(k, _)| !other.items.contains_key(*k))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        }
    }

    /// New collection with values in ascending [`Value::total_cmp`] order.
    /// Each key travels with its value.
    pub fn sorted(&self) -> Collection {
        self.sorted_by(Value::total_cmp)
    }

    /// New collection with values ordered by `cmp`. Each key travels with
    /// its value; the sort is stable.
    pub fn sorted_by<F>(&self, mut cmp: F) -> Collection
    where
        F: FnMut(&Value, &Value) -> Ordering,
    {
        let mut entries: Vec<(Key, Value)> = self
            .items
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        entries.sort_by(|a, b| cmp(&a.1, &b.1));
        entries.into_iter().collect()
    }

    /// New collection with the entries in reverse iteration order. Each
    /// entry keeps its original key.
    pub fn reverse(&self) -> Collection {
        self.items
            .iter()
            .rev()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// New collection with keys and values exchanged.
    ///
    /// Only strings and non-negative integers can become keys; any other
    /// value fails with [`Error::UnsupportedKeyType`] and the receiver is
    /// left untouched. When two entries share a value, the last one wins and
    /// takes the position of the first.
    pub fn flip(&self) -> Result<Collection, Error> {
        let mut flipped = OrderMap::with_capacity(self.items.len());
        for (key, value) in &self.items {
            let new_key = match value {
                Value::Int(i) if *i >= 0 => Key::Index(*i as u64),
                Value::Int(_) => return Err(Error::UnsupportedKeyType("negative int")),
                Value::Str(s) => Key::Name(s.clone()),
                other => return Err(Error::UnsupportedKeyType(other.type_name())),
            };
            let new_value = match key {
                Key::Index(i) => Value::Int(*i as i64),
                Key::Name(s) => Value::Str(s.clone()),
            };
            flipped.insert(new_key, new_value);
        }
        Ok(Self { items: flipped })
    }

    /// Left fold over the values in iteration order, starting from `init`.
    pub fn fold<T, F>(&self, init: T, mut f: F) -> T
    where
        F: FnMut(T, &Value) -> T,
    {
        self.items.values().fold(init, |acc, v| f(acc, v))
    }

    /// Left fold seeded with the first value; `None` on an empty collection.
    ///
    /// This is the no-initial form of [`fold`](Collection::fold), following
    /// the [`Iterator::reduce`] convention.
    pub fn reduce<F>(&self, mut f: F) -> Option<Value>
    where
        F: FnMut(Value, &Value) -> Value,
    {
        let mut values = self.items.values();
        let first = values.next()?.clone();
        Some(values.fold(first, |acc, v| f(acc, v)))
    }

    /// Iterates over `(&Key, &Value)` pairs in order. Each call returns a
    /// fresh iterator.
    pub fn iter(&self) -> ordermap::map::Iter<'_, Key, Value> {
        self.items.iter()
    }
}

impl Debug for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<Q> Index<&Q> for Collection
where
    Q: ?Sized + Hash + Equivalent<Key>,
{
    type Output = Value;

    fn index(&self, key: &Q) -> &Self::Output {
        self.items.get(key).expect("no entry found for key")
    }
}

impl IntoIterator for Collection {
    type Item = (Key, Value);
    type IntoIter = ordermap::map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = (&'a Key, &'a Value);
    type IntoIter = ordermap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl FromIterator<Value> for Collection {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self {
            items: iter
                .into_iter()
                .enumerate()
                .map(|(i, v)| (Key::Index(i as u64), v))
                .collect(),
        }
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for Collection {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl<K: Into<Key>, V: Into<Value>> Extend<(K, V)> for Collection {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.items.insert(k.into(), v.into());
        }
    }
}

impl From<OrderMap<Key, Value>> for Collection {
    fn from(items: OrderMap<Key, Value>) -> Self {
        Self { items }
    }
}

/// The normalization step every collection-like argument goes through: a
/// nested collection contributes its entries, any other value wraps as a
/// single entry at index `0`.
impl From<Value> for Collection {
    fn from(value: Value) -> Self {
        match value {
            Value::Coll(c) => c,
            scalar => Self {
                items: OrderMap::from_iter([(Key::Index(0), scalar)]),
            },
        }
    }
}

impl From<&Collection> for Collection {
    fn from(c: &Collection) -> Self {
        c.clone()
    }
}

impl From<serde_json::Value> for Collection {
    fn from(json: serde_json::Value) -> Self {
        Collection::from(Value::from(json))
    }
}

impl<T: Into<Value>> From<Vec<T>> for Collection {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().map(Into::into).collect()
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Collection {
    fn from(values: [T; N]) -> Self {
        values.into_iter().map(Into::into).collect()
    }
}

impl From<&str> for Collection {
    fn from(s: &str) -> Self {
        Collection::from(Value::from(s))
    }
}

impl From<String> for Collection {
    fn from(s: String) -> Self {
        Collection::from(Value::from(s))
    }
}

impl From<i64> for Collection {
    fn from(i: i64) -> Self {
        Collection::from(Value::from(i))
    }
}

impl From<i32> for Collection {
    fn from(i: i32) -> Self {
        Collection::from(Value::from(i))
    }
}

impl From<bool> for Collection {
    fn from(b: bool) -> Self {
        Collection::from(Value::from(b))
    }
}

impl From<f64> for Collection {
    fn from(f: f64) -> Self {
        Collection::from(Value::from(f))
    }
}
