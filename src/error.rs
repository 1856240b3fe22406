/// Failures reported by the map operations.
///
/// Every fallible operation checks before it mutates, so a returned error leaves the
/// map exactly as it was.
///
/// # Examples
///
/// ```
/// use arena_maps::{Error, OrderedMap};
///
/// let map: OrderedMap<i32, &str> = OrderedMap::new();
/// assert_eq!(map.value_of(&1), Err(Error::KeyNotFound));
/// assert_eq!(map.cursor_end().current().err(), Some(Error::InvalidPosition));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum Error {
    /// A lookup or removal named a key that has no entry.
    #[error("no entry found for key")]
    KeyNotFound,

    /// A cursor was dereferenced, advanced, receded, or removed through while not
    /// referencing a live element.
    #[error("cursor does not reference a live element")]
    InvalidPosition,
}

/// Shorthand for results carrying an [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;
