use core::fmt;
use core::ptr;

use crate::error::{Error, Result};
use crate::raw::{Handle, RawTreeMap};

/// A bidirectional position in an [`OrderedMap`](super::OrderedMap).
///
/// A cursor either stands on an entry or at the end, one past the maximum key. Moving
/// forward follows ascending key order.
///
/// # Examples
///
/// ```
/// use arena_maps::{Error, OrderedMap};
///
/// let map = OrderedMap::from([(2, 'b'), (1, 'a')]);
/// let mut cursor = map.cursor_front();
/// assert_eq!(cursor.current(), Ok((&1, &'a')));
/// assert_eq!(cursor.move_prev(), Err(Error::InvalidPosition));
///
/// cursor.move_next().unwrap();
/// cursor.move_next().unwrap();
/// assert_eq!(cursor, map.cursor_end());
/// ```
pub struct Cursor<'a, K, V> {
    raw: &'a RawTreeMap<K, V>,
    position: Option<Handle>,
}

/// A bidirectional position in an [`OrderedMap`](super::OrderedMap) that can modify or
/// remove the entry it stands on.
pub struct CursorMut<'a, K, V> {
    raw: &'a mut RawTreeMap<K, V>,
    position: Option<Handle>,
}

/// Successor of `position`; from the maximum this is the end.
fn step_next<K, V>(raw: &RawTreeMap<K, V>, position: Option<Handle>) -> Result<Option<Handle>> {
    let handle = position.ok_or(Error::InvalidPosition)?;
    Ok(raw.successor(handle))
}

/// Predecessor of `position`; from the end this is the maximum.
fn step_prev<K, V>(raw: &RawTreeMap<K, V>, position: Option<Handle>) -> Result<Option<Handle>> {
    let prev = match position {
        Some(handle) => raw.predecessor(handle),
        None => raw.last(),
    };
    prev.map(Some).ok_or(Error::InvalidPosition)
}

impl<'a, K, V> Cursor<'a, K, V> {
    pub(super) const fn new(raw: &'a RawTreeMap<K, V>, position: Option<Handle>) -> Self {
        Cursor { raw, position }
    }

    /// Returns the entry under the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPosition`] at the end.
    pub fn current(&self) -> Result<(&'a K, &'a V)> {
        let node = self.raw.node(self.position.ok_or(Error::InvalidPosition)?);
        Ok((&node.key, &node.value))
    }

    /// Advances to the next larger key, or to the end after the maximum.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPosition`] at the end; the cursor does not move.
    pub fn move_next(&mut self) -> Result<()> {
        self.position = step_next(self.raw, self.position)?;
        Ok(())
    }

    /// Moves back to the next smaller key. From the end this is the maximum.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPosition`] at the minimum or on an empty map; the cursor
    /// does not move.
    pub fn move_prev(&mut self) -> Result<()> {
        self.position = step_prev(self.raw, self.position)?;
        Ok(())
    }

    /// Returns `true` if the cursor is one past the maximum key.
    #[must_use]
    pub const fn is_end(&self) -> bool {
        self.position.is_none()
    }
}

impl<'a, K, V> CursorMut<'a, K, V> {
    pub(super) const fn new(raw: &'a mut RawTreeMap<K, V>, position: Option<Handle>) -> Self {
        CursorMut { raw, position }
    }

    /// Returns a read-only cursor at the same position, borrowing this one.
    #[must_use]
    pub fn as_cursor(&self) -> Cursor<'_, K, V> {
        Cursor::new(&*self.raw, self.position)
    }

    /// Returns the entry under the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPosition`] at the end.
    pub fn current(&self) -> Result<(&K, &V)> {
        let node = self.raw.node(self.position.ok_or(Error::InvalidPosition)?);
        Ok((&node.key, &node.value))
    }

    /// Returns the entry under the cursor with its value writable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPosition`] at the end.
    pub fn current_mut(&mut self) -> Result<(&K, &mut V)> {
        let node = self.raw.node_mut(self.position.ok_or(Error::InvalidPosition)?);
        Ok((&node.key, &mut node.value))
    }

    /// Advances to the next larger key, or to the end after the maximum.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPosition`] at the end; the cursor does not move.
    pub fn move_next(&mut self) -> Result<()> {
        self.position = step_next(self.raw, self.position)?;
        Ok(())
    }

    /// Moves back to the next smaller key. From the end this is the maximum.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPosition`] at the minimum or on an empty map; the cursor
    /// does not move.
    pub fn move_prev(&mut self) -> Result<()> {
        self.position = step_prev(self.raw, self.position)?;
        Ok(())
    }

    /// Returns `true` if the cursor is one past the maximum key.
    #[must_use]
    pub const fn is_end(&self) -> bool {
        self.position.is_none()
    }

    /// Removes the entry under the cursor and returns it, consuming the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPosition`], leaving the map unchanged, at the end.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_maps::OrderedMap;
    ///
    /// let mut map = OrderedMap::from([(10, ()), (5, ()), (15, ())]);
    /// assert_eq!(map.find_mut(&10).remove(), Ok((10, ())));
    /// assert_eq!(map.keys().copied().collect::<Vec<_>>(), [5, 15]);
    /// ```
    pub fn remove(self) -> Result<(K, V)> {
        let handle = self.position.ok_or(Error::InvalidPosition)?;
        Ok(self.raw.remove_node(handle))
    }
}

impl<K, V> Clone for Cursor<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for Cursor<'_, K, V> {}

impl<K, V> PartialEq for Cursor<'_, K, V> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.raw, other.raw) && self.position == other.position
    }
}

impl<K, V> Eq for Cursor<'_, K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Cursor<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor").field(&self.current().ok()).finish()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for CursorMut<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CursorMut").field(&self.current().ok()).finish()
    }
}
