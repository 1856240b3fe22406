use core::fmt;
use core::ptr;

use rustc_hash::FxBuildHasher;

use crate::error::{Error, Result};
use crate::raw::{Position, RawHashMap};

/// A bidirectional position in a [`HashMap`](super::HashMap).
///
/// A cursor either stands on an entry or at the end, one past the last entry. It walks
/// entries in the same bucket order as [`iter`](super::HashMap::iter). Two cursors are
/// equal when they belong to the same map and stand on the same entry, or are both at
/// the end.
///
/// # Examples
///
/// ```
/// use arena_maps::{Error, HashMap};
///
/// let map = HashMap::from([(1, 'a')]);
/// let mut cursor = map.cursor_front();
/// assert_eq!(cursor.current(), Ok((&1, &'a')));
///
/// cursor.move_next().unwrap();
/// assert!(cursor.is_end());
/// assert_eq!(cursor.current(), Err(Error::InvalidPosition));
/// assert_eq!(cursor.move_next(), Err(Error::InvalidPosition));
///
/// cursor.move_prev().unwrap();
/// assert_eq!(cursor, map.cursor_front());
/// ```
pub struct Cursor<'a, K, V, S = FxBuildHasher> {
    raw: &'a RawHashMap<K, V, S>,
    position: Position,
}

/// A bidirectional position in a [`HashMap`](super::HashMap) that can modify or remove
/// the entry it stands on.
pub struct CursorMut<'a, K, V, S = FxBuildHasher> {
    raw: &'a mut RawHashMap<K, V, S>,
    position: Position,
}

impl<'a, K, V, S> Cursor<'a, K, V, S> {
    pub(super) const fn new(raw: &'a RawHashMap<K, V, S>, position: Position) -> Self {
        Cursor { raw, position }
    }

    /// Returns the entry under the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPosition`] at the end.
    pub fn current(&self) -> Result<(&'a K, &'a V)> {
        let node = self.raw.node(self.position.node.ok_or(Error::InvalidPosition)?);
        Ok((&node.key, &node.value))
    }

    /// Advances to the next entry, or to the end after the last one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPosition`] at the end; the cursor does not move.
    pub fn move_next(&mut self) -> Result<()> {
        self.position = self.raw.next(self.position).ok_or(Error::InvalidPosition)?;
        Ok(())
    }

    /// Moves back to the previous entry. From the end this is the last entry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPosition`] when no entry precedes the cursor; the cursor
    /// does not move.
    pub fn move_prev(&mut self) -> Result<()> {
        self.position = self.raw.prev(self.position).ok_or(Error::InvalidPosition)?;
        Ok(())
    }

    /// Returns `true` if the cursor is one past the last entry.
    #[must_use]
    pub const fn is_end(&self) -> bool {
        self.position.node.is_none()
    }

    /// Index of the bucket holding the current entry, or the bucket count at the end.
    #[must_use]
    pub const fn bucket_index(&self) -> usize {
        self.position.bucket
    }
}

impl<'a, K, V, S> CursorMut<'a, K, V, S> {
    pub(super) const fn new(raw: &'a mut RawHashMap<K, V, S>, position: Position) -> Self {
        CursorMut { raw, position }
    }

    /// Returns a read-only cursor at the same position, borrowing this one.
    #[must_use]
    pub fn as_cursor(&self) -> Cursor<'_, K, V, S> {
        Cursor::new(&*self.raw, self.position)
    }

    /// Returns the entry under the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPosition`] at the end.
    pub fn current(&self) -> Result<(&K, &V)> {
        let node = self.raw.node(self.position.node.ok_or(Error::InvalidPosition)?);
        Ok((&node.key, &node.value))
    }

    /// Returns the entry under the cursor with its value writable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPosition`] at the end.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_maps::HashMap;
    ///
    /// let mut map = HashMap::from([("k", 1)]);
    /// let mut cursor = map.find_mut(&"k");
    /// *cursor.current_mut().unwrap().1 += 1;
    /// assert_eq!(map[&"k"], 2);
    /// ```
    pub fn current_mut(&mut self) -> Result<(&K, &mut V)> {
        let node = self.raw.node_mut(self.position.node.ok_or(Error::InvalidPosition)?);
        Ok((&node.key, &mut node.value))
    }

    /// Advances to the next entry, or to the end after the last one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPosition`] at the end; the cursor does not move.
    pub fn move_next(&mut self) -> Result<()> {
        self.position = self.raw.next(self.position).ok_or(Error::InvalidPosition)?;
        Ok(())
    }

    /// Moves back to the previous entry. From the end this is the last entry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPosition`] when no entry precedes the cursor; the cursor
    /// does not move.
    pub fn move_prev(&mut self) -> Result<()> {
        self.position = self.raw.prev(self.position).ok_or(Error::InvalidPosition)?;
        Ok(())
    }

    /// Returns `true` if the cursor is one past the last entry.
    #[must_use]
    pub const fn is_end(&self) -> bool {
        self.position.node.is_none()
    }

    /// Index of the bucket holding the current entry, or the bucket count at the end.
    #[must_use]
    pub const fn bucket_index(&self) -> usize {
        self.position.bucket
    }

    /// Unlinks the entry under the cursor and returns it, consuming the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPosition`], leaving the map unchanged, at the end.
    pub fn remove(self) -> Result<(K, V)> {
        self.raw.remove_at(self.position).ok_or(Error::InvalidPosition)
    }
}

impl<K, V, S> Clone for Cursor<'_, K, V, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V, S> Copy for Cursor<'_, K, V, S> {}

impl<K, V, S> PartialEq for Cursor<'_, K, V, S> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.raw, other.raw) && self.position == other.position
    }
}

impl<K, V, S> Eq for Cursor<'_, K, V, S> {}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for Cursor<'_, K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor").field(&self.current().ok()).finish()
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for CursorMut<'_, K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CursorMut").field(&self.current().ok()).finish()
    }
}
