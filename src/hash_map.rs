use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ops::Index;

use rustc_hash::FxBuildHasher;

use crate::error::{Error, Result};
use crate::raw::{self, Handle, Position, RawHashMap};

mod cursor;

pub use cursor::{Cursor, CursorMut};

/// Number of buckets a [`HashMap`] gets when none is requested.
pub const DEFAULT_BUCKET_COUNT: usize = raw::DEFAULT_BUCKET_COUNT;

/// A hash map with a fixed number of buckets and chained collision resolution.
///
/// Each bucket holds a doubly linked chain of the entries whose key hashes into it.
/// New entries are appended at the tail of their chain, so iteration visits buckets in
/// ascending index order and each chain in insertion order. The bucket count is chosen
/// at construction and never changes: once the map holds many more entries than it has
/// buckets, chains grow linearly and lookups degrade to O(n / buckets).
///
/// The default hasher is [`FxBuildHasher`], which is deterministic, so iteration order
/// is reproducible for a given bucket count and insertion sequence.
///
/// It is a logic error for a key to be modified in such a way that its hash or its
/// equality to any other key changes while it is in the map.
///
/// # Examples
///
/// ```
/// use arena_maps::HashMap;
///
/// let mut stock = HashMap::new();
/// stock.insert("apples", 3);
/// stock.insert("pears", 0);
///
/// *stock.get_or_insert_default("plums") += 12;
/// assert_eq!(stock.value_of(&"plums"), Ok(&12));
///
/// stock.remove(&"pears").unwrap();
/// assert_eq!(stock.len(), 2);
/// assert!(stock.find(&"pears").is_end());
/// ```
///
/// A map can be initialized from an array; later duplicates overwrite earlier ones:
///
/// ```
/// use arena_maps::HashMap;
///
/// let map = HashMap::from([(1, "a"), (2, "b"), (1, "c")]);
/// assert_eq!(map[&1], "c");
/// assert_eq!(map.len(), 2);
/// ```
pub struct HashMap<K, V, S = FxBuildHasher> {
    raw: RawHashMap<K, V, S>,
}

/// An iterator over the entries of a `HashMap`, in bucket order.
///
/// This `struct` is created by the [`iter`](HashMap::iter) method on [`HashMap`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K, V, S = FxBuildHasher> {
    raw: &'a RawHashMap<K, V, S>,
    front: Position,
    back: Option<Position>,
    remaining: usize,
}

/// A mutable iterator over the entries of a `HashMap`.
///
/// This `struct` is created by the [`iter_mut`](HashMap::iter_mut) method on [`HashMap`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IterMut<'a, K, V, S = FxBuildHasher> {
    raw: *mut RawHashMap<K, V, S>,
    order: alloc::vec::IntoIter<Handle>,
    _marker: PhantomData<&'a mut (K, V)>,
}

// SAFETY: IterMut behaves as &mut RawHashMap<K, V, S>.
unsafe impl<K: Send, V: Send, S: Send> Send for IterMut<'_, K, V, S> {}
unsafe impl<K: Sync, V: Sync, S: Sync> Sync for IterMut<'_, K, V, S> {}

/// An owning iterator over the entries of a `HashMap`, in bucket order.
pub struct IntoIter<K, V> {
    inner: alloc::vec::IntoIter<(K, V)>,
}

/// An iterator over the keys of a `HashMap`.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Keys<'a, K, V, S = FxBuildHasher> {
    inner: Iter<'a, K, V, S>,
}

/// An iterator over the values of a `HashMap`.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Values<'a, K, V, S = FxBuildHasher> {
    inner: Iter<'a, K, V, S>,
}

/// A mutable iterator over the values of a `HashMap`.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct ValuesMut<'a, K, V, S = FxBuildHasher> {
    inner: IterMut<'a, K, V, S>,
}

impl<K, V> HashMap<K, V, FxBuildHasher> {
    /// Makes a new, empty `HashMap` with [`DEFAULT_BUCKET_COUNT`] buckets.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_maps::hash_map::{DEFAULT_BUCKET_COUNT, HashMap};
    ///
    /// let map: HashMap<u32, u32> = HashMap::new();
    /// assert!(map.is_empty());
    /// assert_eq!(map.bucket_count(), DEFAULT_BUCKET_COUNT);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::with_bucket_count(DEFAULT_BUCKET_COUNT)
    }

    /// Makes a new, empty `HashMap` with exactly `bucket_count` buckets.
    ///
    /// # Panics
    ///
    /// Panics if `bucket_count` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_maps::HashMap;
    ///
    /// let map: HashMap<u32, u32> = HashMap::with_bucket_count(16);
    /// assert_eq!(map.bucket_count(), 16);
    /// ```
    #[must_use]
    pub fn with_bucket_count(bucket_count: usize) -> Self {
        Self::with_bucket_count_and_hasher(bucket_count, FxBuildHasher)
    }
}

impl<K, V, S> HashMap<K, V, S> {
    /// Makes a new, empty `HashMap` with [`DEFAULT_BUCKET_COUNT`] buckets that hashes
    /// keys with `hash_builder`.
    #[must_use]
    pub fn with_hasher(hash_builder: S) -> Self {
        Self::with_bucket_count_and_hasher(DEFAULT_BUCKET_COUNT, hash_builder)
    }

    /// Makes a new, empty `HashMap` with `bucket_count` buckets that hashes keys with
    /// `hash_builder`.
    ///
    /// # Panics
    ///
    /// Panics if `bucket_count` is zero.
    #[must_use]
    pub fn with_bucket_count_and_hasher(bucket_count: usize, hash_builder: S) -> Self {
        HashMap {
            raw: RawHashMap::with_bucket_count_and_hasher(bucket_count, hash_builder),
        }
    }

    /// Returns the number of elements in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_maps::HashMap;
    ///
    /// let mut a = HashMap::new();
    /// assert_eq!(a.len(), 0);
    /// a.insert(1, "a");
    /// assert_eq!(a.len(), 1);
    /// ```
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the map contains no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the fixed number of buckets.
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.raw.bucket_count()
    }

    /// Returns a reference to the map's [`BuildHasher`].
    #[must_use]
    pub const fn hasher(&self) -> &S {
        self.raw.hasher()
    }

    /// Clears the map, removing all elements. The bucket count is kept.
    ///
    /// # Complexity
    ///
    /// O(n + buckets)
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Moves every element out into a new map, leaving `self` empty with the same bucket
    /// count and hasher.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_maps::HashMap;
    ///
    /// let mut a = HashMap::with_bucket_count(8);
    /// a.insert(1, "a");
    ///
    /// let b = a.take();
    /// assert!(a.is_empty());
    /// assert_eq!(a.bucket_count(), 8);
    /// assert_eq!(b[&1], "a");
    /// ```
    #[must_use]
    pub fn take(&mut self) -> Self
    where
        S: Clone,
    {
        HashMap { raw: self.raw.take() }
    }

    /// Gets an iterator over the entries of the map, in bucket order.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_maps::HashMap;
    ///
    /// let map = HashMap::from([(1, "a"), (2, "b")]);
    /// let mut pairs: Vec<_> = map.iter().collect();
    /// pairs.sort();
    /// assert_eq!(pairs, [(&1, &"a"), (&2, &"b")]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V, S> {
        Iter {
            raw: &self.raw,
            front: self.raw.first(),
            back: self.raw.last(),
            remaining: self.raw.len(),
        }
    }

    /// Gets a mutable iterator over the entries of the map, in bucket order.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_maps::HashMap;
    ///
    /// let mut map = HashMap::from([("a", 1), ("b", 2)]);
    /// for (_, value) in map.iter_mut() {
    ///     *value *= 10;
    /// }
    /// assert_eq!(map[&"b"], 20);
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V, S> {
        let order = self.raw.handles_in_order();
        IterMut {
            raw: &raw mut self.raw,
            order: order.into_iter(),
            _marker: PhantomData,
        }
    }

    /// Gets an iterator over the keys of the map, in bucket order.
    pub fn keys(&self) -> Keys<'_, K, V, S> {
        Keys { inner: self.iter() }
    }

    /// Gets an iterator over the values of the map, in bucket order.
    pub fn values(&self) -> Values<'_, K, V, S> {
        Values { inner: self.iter() }
    }

    /// Gets a mutable iterator over the values of the map, in bucket order.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V, S> {
        ValuesMut { inner: self.iter_mut() }
    }

    /// Returns a cursor at the first element, or at the end if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_maps::HashMap;
    ///
    /// let map: HashMap<i32, i32> = HashMap::new();
    /// assert_eq!(map.cursor_front(), map.cursor_end());
    /// ```
    pub fn cursor_front(&self) -> Cursor<'_, K, V, S> {
        Cursor::new(&self.raw, self.raw.first())
    }

    /// Returns a cursor one past the last element.
    pub fn cursor_end(&self) -> Cursor<'_, K, V, S> {
        Cursor::new(&self.raw, self.raw.end())
    }

    /// Returns a mutable cursor at the first element, or at the end if the map is empty.
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, K, V, S> {
        let position = self.raw.first();
        CursorMut::new(&mut self.raw, position)
    }

    /// Returns a mutable cursor one past the last element.
    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, K, V, S> {
        let position = self.raw.end();
        CursorMut::new(&mut self.raw, position)
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> HashMap<K, V, S> {
    /// Returns a reference to the value corresponding to the key.
    ///
    /// # Complexity
    ///
    /// O(1 + n / buckets) expected
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_maps::HashMap;
    ///
    /// let mut map = HashMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.raw.get_key_value(key).map(|(_, v)| v)
    }

    /// Returns the key-value pair corresponding to the supplied key.
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.raw.get_key_value(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.raw.get_mut(key)
    }

    /// Returns `true` if the map contains a value for the specified key.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.raw.search(key).node.is_some()
    }

    /// Returns the value for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if the map has no entry for `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_maps::{Error, HashMap};
    ///
    /// let map = HashMap::from([(7, "seven")]);
    /// assert_eq!(map.value_of(&7), Ok(&"seven"));
    /// assert_eq!(map.value_of(&8), Err(Error::KeyNotFound));
    /// ```
    pub fn value_of<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.get(key).ok_or(Error::KeyNotFound)
    }

    /// Returns the value for `key` mutably.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if the map has no entry for `key`.
    pub fn value_of_mut<Q>(&mut self, key: &Q) -> Result<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.get_mut(key).ok_or(Error::KeyNotFound)
    }

    /// Returns the value for `key`, first appending an entry holding `make()` to the
    /// key's bucket if there is none.
    pub fn get_or_insert_with<F>(&mut self, key: K, make: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        let handle = self.raw.get_or_insert_with(key, make);
        &mut self.raw.node_mut(handle).value
    }

    /// Returns the value for `key`, first appending an entry holding `V::default()` if
    /// there is none. Never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_maps::HashMap;
    ///
    /// let mut counts: HashMap<char, u32> = HashMap::new();
    /// for c in "hello".chars() {
    ///     *counts.get_or_insert_default(c) += 1;
    /// }
    /// assert_eq!(counts[&'l'], 2);
    /// assert_eq!(counts.len(), 4);
    /// ```
    pub fn get_or_insert_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        self.get_or_insert_with(key, V::default)
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the key was present its value is replaced and the old value returned; the
    /// entry keeps its place in the chain.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_maps::HashMap;
    ///
    /// let mut map = HashMap::new();
    /// assert_eq!(map.insert(37, "a"), None);
    /// assert_eq!(map.insert(37, "b"), Some("a"));
    /// assert_eq!(map[&37], "b");
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.raw.insert(key, value)
    }

    /// Removes a key from the map, returning its value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`], leaving the map unchanged, if the key is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_maps::{Error, HashMap};
    ///
    /// let mut map = HashMap::from([(1, "a")]);
    /// assert_eq!(map.remove(&1), Ok("a"));
    /// assert_eq!(map.remove(&1), Err(Error::KeyNotFound));
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Result<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Removes a key from the map, returning the stored key and value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`], leaving the map unchanged, if the key is absent.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Result<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.raw.remove_entry(key).ok_or(Error::KeyNotFound)
    }

    /// Returns a cursor at the entry for `key`, or at the end if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_maps::HashMap;
    ///
    /// let map = HashMap::from([(5, "x")]);
    /// assert_eq!(map.find(&5).current(), Ok((&5, &"x")));
    /// assert_eq!(map.find(&9), map.cursor_end());
    /// ```
    pub fn find<Q>(&self, key: &Q) -> Cursor<'_, K, V, S>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        Cursor::new(&self.raw, self.raw.search(key))
    }

    /// Returns a mutable cursor at the entry for `key`, or at the end if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_maps::HashMap;
    ///
    /// let mut map = HashMap::from([(1, "a"), (2, "b")]);
    /// let cursor = map.find_mut(&1);
    /// assert_eq!(cursor.remove(), Ok((1, "a")));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn find_mut<Q>(&mut self, key: &Q) -> CursorMut<'_, K, V, S>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let position = self.raw.search(key);
        CursorMut::new(&mut self.raw, position)
    }
}

impl<K: Clone, V: Clone, S: Clone> Clone for HashMap<K, V, S> {
    fn clone(&self) -> Self {
        HashMap { raw: self.raw.clone() }
    }

    fn clone_from(&mut self, source: &Self) {
        self.raw.clone_from(&source.raw);
    }
}

impl<K: PartialEq, V: PartialEq, S> PartialEq for HashMap<K, V, S> {
    /// Pairs entries up in iteration order. Equal contents inserted in a different order
    /// compare unequal when colliding keys sit in a different chain order.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<K: Eq, V: Eq, S> Eq for HashMap<K, V, S> {}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for HashMap<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, S: Default> Default for HashMap<K, V, S> {
    fn default() -> Self {
        HashMap::with_hasher(S::default())
    }
}

impl<K: Hash + Eq, V, S: BuildHasher + Default> FromIterator<(K, V)> for HashMap<K, V, S> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = HashMap::default();
        map.extend(iter);
        map
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> Extend<(K, V)> for HashMap<K, V, S> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<'a, K: Hash + Eq + Copy, V: Copy, S: BuildHasher> Extend<(&'a K, &'a V)> for HashMap<K, V, S> {
    fn extend<T: IntoIterator<Item = (&'a K, &'a V)>>(&mut self, iter: T) {
        for (&k, &v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K: Hash + Eq, V, const N: usize> From<[(K, V); N]> for HashMap<K, V, FxBuildHasher> {
    fn from(arr: [(K, V); N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<K, Q, V, S> Index<&Q> for HashMap<K, V, S>
where
    K: Hash + Eq + Borrow<Q>,
    Q: ?Sized + Hash + Eq,
    S: BuildHasher,
{
    type Output = V;

    /// # Panics
    ///
    /// Panics if the key is not present in the map.
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<'a, K, V, S> IntoIterator for &'a HashMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, S>;

    fn into_iter(self) -> Iter<'a, K, V, S> {
        self.iter()
    }
}

impl<'a, K, V, S> IntoIterator for &'a mut HashMap<K, V, S> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V, S>;

    fn into_iter(self) -> IterMut<'a, K, V, S> {
        self.iter_mut()
    }
}

impl<K, V, S> IntoIterator for HashMap<K, V, S> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    /// Gets an owning iterator over the entries of the map, in bucket order.
    fn into_iter(mut self) -> IntoIter<K, V> {
        IntoIter {
            inner: self.raw.drain_to_vec().into_iter(),
        }
    }
}

impl<'a, K, V, S> Iterator for Iter<'a, K, V, S> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let node = self.raw.node(self.front.node?);
        self.remaining -= 1;
        self.front = self.raw.next(self.front).unwrap_or_else(|| self.raw.end());
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V, S> DoubleEndedIterator for Iter<'_, K, V, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let back = self.back?;
        let node = self.raw.node(back.node?);
        self.remaining -= 1;
        self.back = self.raw.prev(back);
        Some((&node.key, &node.value))
    }
}

impl<K, V, S> ExactSizeIterator for Iter<'_, K, V, S> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V, S> FusedIterator for Iter<'_, K, V, S> {}

impl<K, V, S> Clone for Iter<'_, K, V, S> {
    fn clone(&self) -> Self {
        Iter {
            raw: self.raw,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for Iter<'_, K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V, S> Iterator for IterMut<'a, K, V, S> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.order.next()?;
        // SAFETY: `raw` came from a live `&'a mut` in `iter_mut`, every handle in `order`
        // is distinct and is yielded once, and the map cannot be relinked while borrowed.
        let node = unsafe { RawHashMap::node_mut_ptr(self.raw, handle) };
        Some((&node.key, &mut node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl<K, V, S> DoubleEndedIterator for IterMut<'_, K, V, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let handle = self.order.next_back()?;
        // SAFETY: See `next`.
        let node = unsafe { RawHashMap::node_mut_ptr(self.raw, handle) };
        Some((&node.key, &mut node.value))
    }
}

impl<K, V, S> ExactSizeIterator for IterMut<'_, K, V, S> {
    fn len(&self) -> usize {
        self.order.len()
    }
}

impl<K, V, S> FusedIterator for IterMut<'_, K, V, S> {}

impl<K, V, S> fmt::Debug for IterMut<'_, K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut").field("remaining", &self.order.len()).finish()
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<(K, V)> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for IntoIter<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.as_slice()).finish()
    }
}

impl<'a, K, V, S> Iterator for Keys<'a, K, V, S> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V, S> DoubleEndedIterator for Keys<'_, K, V, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

impl<K, V, S> ExactSizeIterator for Keys<'_, K, V, S> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V, S> FusedIterator for Keys<'_, K, V, S> {}

impl<K, V, S> Clone for Keys<'_, K, V, S> {
    fn clone(&self) -> Self {
        Keys {
            inner: self.inner.clone(),
        }
    }
}

impl<K: fmt::Debug, V, S> fmt::Debug for Keys<'_, K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V, S> Iterator for Values<'a, K, V, S> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V, S> DoubleEndedIterator for Values<'_, K, V, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<K, V, S> ExactSizeIterator for Values<'_, K, V, S> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V, S> FusedIterator for Values<'_, K, V, S> {}

impl<K, V, S> Clone for Values<'_, K, V, S> {
    fn clone(&self) -> Self {
        Values {
            inner: self.inner.clone(),
        }
    }
}

impl<K, V: fmt::Debug, S> fmt::Debug for Values<'_, K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V, S> Iterator for ValuesMut<'a, K, V, S> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<&'a mut V> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V, S> DoubleEndedIterator for ValuesMut<'_, K, V, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<K, V, S> ExactSizeIterator for ValuesMut<'_, K, V, S> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V, S> FusedIterator for ValuesMut<'_, K, V, S> {}

impl<K, V, S> fmt::Debug for ValuesMut<'_, K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValuesMut").field("remaining", &self.inner.len()).finish()
    }
}
