use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};

use alloc::boxed::Box;
use alloc::vec::Vec;

use tracing::{debug, trace};

use super::arena::Arena;
use super::handle::Handle;
use super::node::ChainNode;

/// Bucket count used when none is given.
pub(crate) const DEFAULT_BUCKET_COUNT: usize = 1000;

/// Where a hash map cursor stands: a bucket index and an entry of that bucket's chain.
///
/// The end position has no entry and a bucket index equal to the bucket count.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Position {
    pub(crate) bucket: usize,
    pub(crate) node: Option<Handle>,
}

/// The chained hash table backing `HashMap`.
#[derive(Clone)]
pub(crate) struct RawHashMap<K, V, S> {
    /// Arena storing every chain entry.
    nodes: Arena<ChainNode<K, V>>,
    /// Chain heads. Fixed length for the lifetime of the table.
    buckets: Box<[Option<Handle>]>,
    /// Total number of entries across all chains.
    len: usize,
    hash_builder: S,
}

impl<K, V, S> RawHashMap<K, V, S> {
    /// Creates an empty table with `bucket_count` chains.
    pub(crate) fn with_bucket_count_and_hasher(bucket_count: usize, hash_builder: S) -> Self {
        assert!(
            bucket_count > 0,
            "`RawHashMap::with_bucket_count_and_hasher()` - `bucket_count` must be non-zero!"
        );
        Self {
            nodes: Arena::new(),
            buckets: alloc::vec![None; bucket_count].into_boxed_slice(),
            len: 0,
            hash_builder,
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub(crate) const fn hasher(&self) -> &S {
        &self.hash_builder
    }

    pub(crate) fn node(&self, handle: Handle) -> &ChainNode<K, V> {
        self.nodes.get(handle)
    }

    pub(crate) fn node_mut(&mut self, handle: Handle) -> &mut ChainNode<K, V> {
        self.nodes.get_mut(handle)
    }

    /// Returns a mutable reference to an entry through a raw pointer to the table.
    ///
    /// # Safety
    /// - `ptr` must point to a valid `RawHashMap<K, V, S>` that outlives `'a`.
    /// - No other reference to the entry at `handle` may exist for `'a`.
    /// - No entry may be linked or unlinked during `'a`.
    pub(crate) unsafe fn node_mut_ptr<'a>(ptr: *mut Self, handle: Handle) -> &'a mut ChainNode<K, V> {
        // SAFETY: Only the `nodes` field is touched; forwarded to `Arena::get_mut_ptr`.
        unsafe { Arena::get_mut_ptr(core::ptr::addr_of_mut!((*ptr).nodes), handle) }
    }

    /// The one-past-the-last position.
    pub(crate) fn end(&self) -> Position {
        Position {
            bucket: self.buckets.len(),
            node: None,
        }
    }

    /// Head of the first non-empty chain, or end.
    pub(crate) fn first(&self) -> Position {
        self.first_occupied_from(0)
    }

    /// Tail of the last non-empty chain.
    pub(crate) fn last(&self) -> Option<Position> {
        self.prev(self.end())
    }

    fn first_occupied_from(&self, start: usize) -> Position {
        (start..self.buckets.len())
            .find_map(|bucket| self.buckets[bucket].map(|head| Position { bucket, node: Some(head) }))
            .unwrap_or_else(|| self.end())
    }

    fn tail(&self, bucket: usize) -> Option<Handle> {
        let mut current = self.buckets[bucket]?;
        while let Some(next) = self.nodes.get(current).next {
            current = next;
        }
        Some(current)
    }

    /// Steps forward one entry; `None` when `position` is already the end.
    pub(crate) fn next(&self, position: Position) -> Option<Position> {
        let handle = position.node?;
        match self.nodes.get(handle).next {
            Some(next) => Some(Position {
                bucket: position.bucket,
                node: Some(next),
            }),
            None => Some(self.first_occupied_from(position.bucket + 1)),
        }
    }

    /// Steps back one entry; `None` when no entry precedes `position`.
    pub(crate) fn prev(&self, position: Position) -> Option<Position> {
        if let Some(prev) = position.node.and_then(|handle| self.nodes.get(handle).prev) {
            return Some(Position {
                bucket: position.bucket,
                node: Some(prev),
            });
        }

        // At a chain head, or at the end: the tail of the nearest non-empty bucket below.
        (0..position.bucket).rev().find_map(|bucket| {
            self.tail(bucket).map(|tail| Position {
                bucket,
                node: Some(tail),
            })
        })
    }

    /// Every entry handle in iteration order.
    pub(crate) fn handles_in_order(&self) -> Vec<Handle> {
        let mut handles = Vec::with_capacity(self.len);
        for &head in &self.buckets {
            let mut current = head;
            while let Some(handle) = current {
                handles.push(handle);
                current = self.nodes.get(handle).next;
            }
        }
        handles
    }

    /// Unlinks and returns the entry at `position`; `None` at the end.
    pub(crate) fn remove_at(&mut self, position: Position) -> Option<(K, V)> {
        let handle = position.node?;
        Some(self.unlink(position.bucket, handle))
    }

    fn unlink(&mut self, bucket: usize, handle: Handle) -> (K, V) {
        let node = self.nodes.take(handle);

        match node.prev {
            Some(prev) => self.nodes.get_mut(prev).next = node.next,
            None => {
                debug_assert_eq!(self.buckets[bucket], Some(handle), "chain head mismatch");
                self.buckets[bucket] = node.next;
            }
        }
        if let Some(next) = node.next {
            self.nodes.get_mut(next).prev = node.prev;
        }

        self.len -= 1;
        trace!(bucket, len = self.len, "unlinked chain entry");
        node.into_pair()
    }

    /// Releases every entry; the bucket count is kept.
    pub(crate) fn clear(&mut self) {
        let released = self.len;
        self.nodes.clear();
        self.buckets.fill(None);
        self.len = 0;
        debug!(released, buckets = self.buckets.len(), "cleared hash map");
    }

    /// Takes every pair out in iteration order, leaving the table empty.
    pub(crate) fn drain_to_vec(&mut self) -> Vec<(K, V)> {
        let mut result = Vec::with_capacity(self.len);
        for bucket in 0..self.buckets.len() {
            let mut current = self.buckets[bucket].take();
            while let Some(handle) = current {
                let node = self.nodes.take(handle);
                current = node.next;
                result.push(node.into_pair());
            }
        }
        self.nodes.clear();
        self.len = 0;
        result
    }

    /// Moves the entries out into a new table sharing this one's shape.
    pub(crate) fn take(&mut self) -> Self
    where
        S: Clone,
    {
        let empty = Self::with_bucket_count_and_hasher(self.buckets.len(), self.hash_builder.clone());
        core::mem::replace(self, empty)
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> RawHashMap<K, V, S> {
    /// Bucket index of `key`: `hash(key) mod bucket_count`.
    // The remainder is below `bucket_count`, which is a `usize`.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn bucket_of<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        (self.hash_builder.hash_one(key) % self.buckets.len() as u64) as usize
    }

    /// Position of the entry for `key`, or end.
    pub(crate) fn search<Q>(&self, key: &Q) -> Position
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let bucket = self.bucket_of(key);
        let mut current = self.buckets[bucket];
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            if node.key.borrow() == key {
                return Position {
                    bucket,
                    node: Some(handle),
                };
            }
            current = node.next;
        }
        self.end()
    }

    pub(crate) fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let node = self.nodes.get(self.search(key).node?);
        Some((&node.key, &node.value))
    }

    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let handle = self.search(key).node?;
        Some(&mut self.nodes.get_mut(handle).value)
    }

    /// Looks `key` up in the chain of `bucket`: `Ok` with its entry, or `Err` with the
    /// chain's tail (the link a new entry hangs from).
    fn search_chain(&self, bucket: usize, key: &K) -> Result<Handle, Option<Handle>> {
        let mut tail = None;
        let mut current = self.buckets[bucket];
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            if node.key == *key {
                return Ok(handle);
            }
            tail = Some(handle);
            current = node.next;
        }
        Err(tail)
    }

    /// Appends a new entry at the tail of the chain of `bucket`.
    fn link_at_tail(&mut self, bucket: usize, tail: Option<Handle>, key: K, value: V) -> Handle {
        let mut node = ChainNode::new(key, value);
        node.prev = tail;
        let handle = self.nodes.alloc(node);
        match tail {
            Some(tail) => self.nodes.get_mut(tail).next = Some(handle),
            None => self.buckets[bucket] = Some(handle),
        }

        self.len += 1;
        trace!(bucket, len = self.len, "appended chain entry");
        handle
    }

    /// Returns the entry for `key`, appending one with `make()` when absent.
    pub(crate) fn get_or_insert_with<F>(&mut self, key: K, make: F) -> Handle
    where
        F: FnOnce() -> V,
    {
        let bucket = self.bucket_of(&key);
        match self.search_chain(bucket, &key) {
            Ok(handle) => handle,
            Err(tail) => self.link_at_tail(bucket, tail, key, make()),
        }
    }

    /// Inserts or overwrites; returns the previous value when the key was present.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<V> {
        let bucket = self.bucket_of(&key);
        match self.search_chain(bucket, &key) {
            Ok(handle) => Some(core::mem::replace(&mut self.nodes.get_mut(handle).value, value)),
            Err(tail) => {
                self.link_at_tail(bucket, tail, key, value);
                None
            }
        }
    }

    pub(crate) fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let position = self.search(key);
        self.remove_at(position)
    }
}
