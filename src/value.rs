//! Heterogeneous element values stored in a collection.

use std::cmp::Ordering;

use crate::collection::Collection;
use crate::key::Key;

/// A value held by a [`Collection`].
///
/// Collections are heterogeneous: any mix of scalars and nested collections
/// can live side by side in one container. Nested collections participate
/// recursively in JSON serialization.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Absent/null value. Entries bound to `Null` exist for
    /// [`Collection::contains_key`] but not for [`Collection::has`].
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Integer scalar.
    Int(i64),
    /// Floating-point scalar.
    Float(f64),
    /// String scalar.
    Str(String),
    /// A nested collection (serializes as a JSON array or object).
    Coll(Collection),
}

impl Value {
    /// Name of the variant, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Coll(_) => "collection",
        }
    }

    /// Returns `true` if this is [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Integer payload, if this is an [`Value::Int`].
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric payload as `f64`; accepts both [`Value::Int`] and
    /// [`Value::Float`].
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Boolean payload, if this is a [`Value::Bool`].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// String payload, if this is a [`Value::Str`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Nested collection, if this is a [`Value::Coll`].
    pub fn as_collection(&self) -> Option<&Collection> {
        match self {
            Value::Coll(c) => Some(c),
            _ => None,
        }
    }

    /// Loose equality: `Int` and `Float` compare numerically across the two
    /// variants; every other comparison is strict same-variant equality.
    ///
    /// This is the crate's rendition of the origin ecosystem's coercive `==`.
    /// Cross-type string/number coercion is intentionally not reproduced, so
    /// within a single variant loose equality collapses to strict equality.
    pub fn loose_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Int(i), Value::Float(f)) | (Value::Float(f), Value::Int(i)) => {
                *i as f64 == *f
            }
            _ => self == other,
        }
    }

    /// Total order over heterogeneous values, used by comparator-less
    /// [`Collection::sorted`].
    ///
    /// Values order by variant rank (`Null < Bool < Int/Float < Str < Coll`);
    /// integers and floats compare numerically with each other, floats via
    /// [`f64::total_cmp`], strings lexicographically, and collections by
    /// pairwise entry comparison followed by length.
    pub fn total_cmp(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Null, Value::Null) => Ordering::Equal,
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (Value::Float(a), Value::Float(b)) => a.total_cmp(b),
            (Value::Int(a), Value::Float(b)) => (*a as f64).total_cmp(b),
            (Value::Float(a), Value::Int(b)) => a.total_cmp(&(*b as f64)),
            (Value::Str(a), Value::Str(b)) => a.cmp(b),
            (Value::Coll(a), Value::Coll(b)) => {
                for ((ka, va), (kb, vb)) in a.iter().zip(b.iter()) {
                    let entry = ka.cmp(kb).then_with(|| va.total_cmp(vb));
                    if entry != Ordering::Equal {
                        return entry;
                    }
                }
                a.len().cmp(&b.len())
            }
            _ => self.rank().cmp(&other.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Int(_) | Value::Float(_) => 2,
            Value::Str(_) => 3,
            Value::Coll(_) => 4,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Collection> for Value {
    fn from(c: Collection) -> Self {
        Value::Coll(c)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Value::Coll(values.into_iter().collect())
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                // u64 beyond i64::MAX, or a true float
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(values) => {
                Value::Coll(values.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Coll(
                entries
                    .into_iter()
                    .map(|(k, v)| (Key::Name(k), Value::from(v)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_loose_eq_numeric_cross_variant() {
        assert!(Value::Int(2).loose_eq(&Value::Float(2.0)));
        assert!(Value::Float(2.0).loose_eq(&Value::Int(2)));
        assert!(!Value::Int(2).loose_eq(&Value::Float(2.5)));
        assert!(!Value::Int(1).loose_eq(&Value::Str("1".into())));
        assert!(Value::from("doe").loose_eq(&Value::from("doe")));
    }

    #[test]
    fn test_value_total_cmp_ranks_variants() {
        let ordered = [
            Value::Null,
            Value::Bool(false),
            Value::Int(10),
            Value::Str("a".into()),
        ];
        for pair in ordered.windows(2) {
            assert_eq!(pair[0].total_cmp(&pair[1]), Ordering::Less);
        }
    }

    #[test]
    fn test_value_total_cmp_numeric_cross_variant() {
        assert_eq!(Value::Int(1).total_cmp(&Value::Float(1.5)), Ordering::Less);
        assert_eq!(Value::Float(3.0).total_cmp(&Value::Int(2)), Ordering::Greater);
        assert_eq!(Value::Int(2).total_cmp(&Value::Float(2.0)), Ordering::Equal);
    }

    #[test]
    fn test_value_from_json() {
        let json: serde_json::Value = serde_json::from_str(r#"{"a":1,"b":[true,null]}"#).unwrap();
        let value = Value::from(json);
        let coll = value.as_collection().unwrap();
        assert_eq!(coll.get("a"), Some(&Value::Int(1)));
        let nested = coll.get("b").unwrap().as_collection().unwrap();
        assert_eq!(nested.len(), 2);
        assert_eq!(nested.get(&0u64), Some(&Value::Bool(true)));
        // `get` follows isset semantics: a Null binding reads as absent
        assert_eq!(nested.get(&1u64), None);
        assert!(nested.contains_key(&1u64));
    }
}
