//! Arena-backed associative containers for Rust.
//!
//! This crate provides two maps that store their nodes in a slot arena and link them
//! with small integer handles instead of pointers:
//!
//! - [`HashMap`] - a fixed-bucket hash table with doubly linked chains. The bucket
//!   count is set at construction and never changes.
//! - [`OrderedMap`] - an unbalanced binary search tree whose nodes record their parent,
//!   giving ascending-order traversal in both directions.
//!
//! Both containers expose bidirectional cursors ([`hash_map::Cursor`],
//! [`ordered_map::Cursor`] and their `CursorMut` counterparts) with an explicit end
//! position, plus the usual iterator family.
//!
//! # Example
//!
//! ```
//! use arena_maps::{Error, HashMap, OrderedMap};
//!
//! let mut tree = OrderedMap::new();
//! tree.insert(3, "c");
//! tree.insert(1, "a");
//! tree.insert(2, "b");
//! assert_eq!(tree.iter().map(|(k, _)| *k).collect::<Vec<_>>(), [1, 2, 3]);
//!
//! // Fallible operations return `arena_maps::Result`.
//! assert_eq!(tree.remove(&4), Err(Error::KeyNotFound));
//!
//! let mut table: HashMap<&str, u32> = HashMap::with_bucket_count(64);
//! *table.get_or_insert_default("hits") += 1;
//! assert_eq!(table.value_of(&"hits"), Ok(&1));
//!
//! // Cursors report running off either end as an error.
//! let mut cursor = table.cursor_end();
//! assert_eq!(cursor.move_next(), Err(Error::InvalidPosition));
//! cursor.move_prev().unwrap();
//! assert_eq!(cursor.current(), Ok((&"hits", &1)));
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Stable handles** - Removing one entry never moves another
//! - **Deterministic** - The default [`FxBuildHasher`](rustc_hash::FxBuildHasher) makes
//!   hash map iteration order reproducible
//!
//! # Logging
//!
//! Structural changes emit [`tracing`] events: attaching and unlinking nodes at `trace`
//! level, clearing a map at `debug` level. The crate installs no subscriber.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
// NOTE: Unsafe code is confined to the disjoint node borrows behind `IterMut`.
// #![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod error;
mod raw;

pub mod hash_map;
pub mod ordered_map;

pub use error::{Error, Result};
pub use hash_map::HashMap;
pub use ordered_map::OrderedMap;
