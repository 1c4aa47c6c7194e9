#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

/// The error type returned by fallible constructors.
pub mod error;

/// A HashMap implementation using separate chaining.
///
/// This module provides a `HashMap` that wraps the `HashTable` and provides
/// a key-value map interface, including the deduplicating `keys`, `values`
/// and `entries` views.
pub mod hash_map;

pub mod hash_table;

/// A hash set implementation using separate chaining.
///
/// This module provides a `HashSet` that wraps the `HashTable` and provides
/// a standard set interface.
pub mod hash_set;

pub use error::Error;
pub use hash_map::Entry;
pub use hash_map::HashMap;
pub use hash_set::HashSet;
pub use hash_table::HashTable;
