//! # Fluent Collection
//!
//! An insertion-ordered, heterogeneous key-value collection with chainable,
//! functional-style operations: a richer vocabulary over keyed data than the
//! built-in containers, in a single small type.
//!
//! This crate provides [`Collection`], an ordered mapping from [`Key`]
//! (string or non-negative integer) to [`Value`] (any mix of scalars and
//! nested collections), plus the transformation, inspection, and access
//! operations application code keeps re-writing by hand.
//!
//! ## Key Features
//!
//! * **Insertion order preserved:** backed by `ordermap::OrderMap`; iteration
//!   order equals construction order unless an operation explicitly reorders
//!   (`sorted`, `reverse`, `flip`).
//! * **Chainable transformations:** `map`, `filter`, `reject`, `diff`,
//!   `sorted`, `reverse`, `flip`, `fold`/`reduce` — each returns a new
//!   collection and leaves the receiver untouched.
//! * **Container protocol:** indexed access, key/value membership tests,
//!   counting, restartable iteration, `FromIterator`/`Extend`.
//! * **JSON convention:** serializes as an array when keys are sequential
//!   from zero, as an object otherwise; nested collections expand
//!   recursively. Deserialization accepts either shape.
//!
//! ## Examples
//!
//! ### Building and transforming
//!
//! ```rust
//! use fluent_collection::Collection;
//!
//! let mut scores = Collection::new();
//! scores.insert("maths", 17);
//! scores.insert("history", 9);
//! scores.insert("art", 13);
//!
//! let passing = scores.filter(|v| v.as_i64().unwrap() >= 10);
//! assert_eq!(passing.len(), 2);
//! assert!(passing.contains_key("maths"));
//! assert!(!passing.contains_key("history"));
//! ```
//!
//! ### Searching and folding
//!
//! ```rust
//! use fluent_collection::{Collection, Value};
//!
//! let numbers: Collection = vec![0i64, 1, 2, 3].into();
//!
//! assert_eq!(numbers.first(), Some(&Value::Int(0)));
//! assert_eq!(
//!     numbers.first_where(|v| v.as_i64() == Some(2)),
//!     Some(&Value::Int(2))
//! );
//!
//! let sum = numbers.fold(0i64, |acc, v| acc + v.as_i64().unwrap());
//! assert_eq!(sum, 6);
//! ```
//!
//! ### JSON
//!
//! ```rust
//! use fluent_collection::Collection;
//!
//! let mut user = Collection::new();
//! user.insert("name", "Ada");
//! user.insert("age", 36);
//!
//! assert_eq!(
//!     serde_json::to_string(&user).unwrap(),
//!     r#"{"name":"Ada","age":36}"#
//! );
//!
//! let back: Collection = serde_json::from_str(r#"{"name":"Ada","age":36}"#).unwrap();
//! assert_eq!(back, user);
//! ```

// --- Module Declarations ---

pub mod collection;
pub mod error;
pub mod key;
pub mod value;

mod json;

// --- Re-exports ---

pub use collection::Collection;
pub use error::Error;
pub use key::Key;
pub use value::Value;
