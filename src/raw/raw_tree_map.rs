use core::borrow::Borrow;
use core::cmp::Ordering;

use alloc::vec::Vec;

use tracing::{debug, trace};

use super::arena::Arena;
use super::handle::Handle;
use super::node::TreeNode;

/// The unbalanced binary search tree backing `OrderedMap`.
#[derive(Clone)]
pub(crate) struct RawTreeMap<K, V> {
    /// Arena storing all tree nodes.
    nodes: Arena<TreeNode<K, V>>,
    /// The only node without a parent, if the tree is non-empty.
    root: Option<Handle>,
    /// Total number of nodes in the tree.
    len: usize,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Side {
    Left,
    Right,
}

/// The empty link a missing key would be attached to.
struct Slot {
    parent: Option<(Handle, Side)>,
    depth: usize,
}

impl<K, V> RawTreeMap<K, V> {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            len: 0,
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn node(&self, handle: Handle) -> &TreeNode<K, V> {
        self.nodes.get(handle)
    }

    pub(crate) fn node_mut(&mut self, handle: Handle) -> &mut TreeNode<K, V> {
        self.nodes.get_mut(handle)
    }

    /// Returns a mutable reference to a node through a raw pointer to the tree.
    ///
    /// # Safety
    /// - `ptr` must point to a valid `RawTreeMap<K, V>` that outlives `'a`.
    /// - No other reference to the node at `handle` may exist for `'a`.
    /// - No node may be attached or removed during `'a`.
    pub(crate) unsafe fn node_mut_ptr<'a>(ptr: *mut Self, handle: Handle) -> &'a mut TreeNode<K, V> {
        // SAFETY: Only the `nodes` field is touched; forwarded to `Arena::get_mut_ptr`.
        unsafe { Arena::get_mut_ptr(core::ptr::addr_of_mut!((*ptr).nodes), handle) }
    }

    /// Leftmost node of the subtree rooted at `handle`.
    fn minimum(&self, mut handle: Handle) -> Handle {
        while let Some(left) = self.nodes.get(handle).left {
            handle = left;
        }
        handle
    }

    /// Rightmost node of the subtree rooted at `handle`.
    fn maximum(&self, mut handle: Handle) -> Handle {
        while let Some(right) = self.nodes.get(handle).right {
            handle = right;
        }
        handle
    }

    /// The node with the smallest key.
    pub(crate) fn first(&self) -> Option<Handle> {
        self.root.map(|root| self.minimum(root))
    }

    /// The node with the largest key.
    pub(crate) fn last(&self) -> Option<Handle> {
        self.root.map(|root| self.maximum(root))
    }

    /// In-order successor: leftmost of the right subtree, otherwise the first ancestor
    /// reached from a left child.
    pub(crate) fn successor(&self, handle: Handle) -> Option<Handle> {
        let node = self.nodes.get(handle);
        if let Some(right) = node.right {
            return Some(self.minimum(right));
        }

        let mut child = handle;
        let mut parent = node.parent;
        while let Some(p) = parent {
            let parent_node = self.nodes.get(p);
            if parent_node.right != Some(child) {
                break;
            }
            child = p;
            parent = parent_node.parent;
        }
        parent
    }

    /// In-order predecessor; the mirror of [`Self::successor`].
    pub(crate) fn predecessor(&self, handle: Handle) -> Option<Handle> {
        let node = self.nodes.get(handle);
        if let Some(left) = node.left {
            return Some(self.maximum(left));
        }

        let mut child = handle;
        let mut parent = node.parent;
        while let Some(p) = parent {
            let parent_node = self.nodes.get(p);
            if parent_node.left != Some(child) {
                break;
            }
            child = p;
            parent = parent_node.parent;
        }
        parent
    }

    /// Every node handle in ascending key order.
    pub(crate) fn handles_in_order(&self) -> Vec<Handle> {
        let mut handles = Vec::with_capacity(self.len);
        let mut current = self.first();
        while let Some(handle) = current {
            handles.push(handle);
            current = self.successor(handle);
        }
        handles
    }

    /// Puts `replacement` (possibly empty) where `out` hangs, fixing the parent link on
    /// both sides. `out`'s own links are left untouched.
    fn transplant(&mut self, out: Handle, replacement: Option<Handle>) {
        let parent = self.nodes.get(out).parent;
        match parent {
            None => {
                debug_assert_eq!(self.root, Some(out), "parentless node is not the root");
                self.root = replacement;
            }
            Some(p) => {
                let parent_node = self.nodes.get_mut(p);
                if parent_node.left == Some(out) {
                    parent_node.left = replacement;
                } else {
                    debug_assert_eq!(parent_node.right, Some(out), "parent does not link back");
                    parent_node.right = replacement;
                }
            }
        }
        if let Some(replacement) = replacement {
            self.nodes.get_mut(replacement).parent = parent;
        }
    }

    /// Removes `handle` from the tree and returns its pair.
    pub(crate) fn remove_node(&mut self, handle: Handle) -> (K, V) {
        let (left, right) = {
            let node = self.nodes.get(handle);
            (node.left, node.right)
        };

        match (left, right) {
            (None, _) => self.transplant(handle, right),
            (_, None) => self.transplant(handle, left),
            (Some(left), Some(right)) => {
                // The successor has no left child, so it leaves its own spot like case one.
                let successor = self.minimum(right);
                if successor != right {
                    let successor_right = self.nodes.get(successor).right;
                    self.transplant(successor, successor_right);
                    self.nodes.get_mut(successor).right = Some(right);
                    self.nodes.get_mut(right).parent = Some(successor);
                }
                self.transplant(handle, Some(successor));
                self.nodes.get_mut(successor).left = Some(left);
                self.nodes.get_mut(left).parent = Some(successor);
            }
        }

        let node = self.nodes.take(handle);
        self.len -= 1;
        trace!(len = self.len, two_children = left.is_some() && right.is_some(), "removed tree node");
        node.into_pair()
    }

    /// Releases every node.
    pub(crate) fn clear(&mut self) {
        let released = self.len;
        self.nodes.clear();
        self.root = None;
        self.len = 0;
        debug!(released, "cleared ordered map");
    }

    /// Takes every pair out in ascending key order, leaving the tree empty.
    pub(crate) fn drain_to_vec(&mut self) -> Vec<(K, V)> {
        let order = self.handles_in_order();
        let result: Vec<(K, V)> = order.into_iter().map(|handle| self.nodes.take(handle).into_pair()).collect();
        self.clear();
        result
    }

    /// Moves the nodes out into a new tree.
    pub(crate) fn take(&mut self) -> Self {
        core::mem::replace(self, Self::new())
    }
}

impl<K: Ord, V> RawTreeMap<K, V> {
    /// Descends from the root to the node holding `key`.
    pub(crate) fn search<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            current = match key.cmp(node.key.borrow()) {
                Ordering::Equal => return Some(handle),
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
        }
        None
    }

    pub(crate) fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let node = self.nodes.get(self.search(key)?);
        Some((&node.key, &node.value))
    }

    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = self.search(key)?;
        Some(&mut self.nodes.get_mut(handle).value)
    }

    /// Finds the node holding `key`, or the empty link where it belongs.
    ///
    /// Goes right on greater-or-equal and left otherwise; an equal key stops the descent
    /// since keys are unique.
    fn search_slot(&self, key: &K) -> Result<Handle, Slot> {
        let mut parent = None;
        let mut depth = 0;
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            let side = match key.cmp(&node.key) {
                Ordering::Equal => return Ok(handle),
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
            };
            parent = Some((handle, side));
            depth += 1;
            current = match side {
                Side::Left => node.left,
                Side::Right => node.right,
            };
        }
        Err(Slot { parent, depth })
    }

    fn attach(&mut self, slot: Slot, key: K, value: V) -> Handle {
        let handle = self.nodes.alloc(TreeNode::new(key, value, slot.parent.map(|(parent, _)| parent)));
        match slot.parent {
            None => self.root = Some(handle),
            Some((parent, Side::Left)) => self.nodes.get_mut(parent).left = Some(handle),
            Some((parent, Side::Right)) => self.nodes.get_mut(parent).right = Some(handle),
        }

        self.len += 1;
        trace!(depth = slot.depth, len = self.len, "attached tree node");
        handle
    }

    /// Returns the node for `key`, attaching one with `make()` when absent.
    pub(crate) fn get_or_insert_with<F>(&mut self, key: K, make: F) -> Handle
    where
        F: FnOnce() -> V,
    {
        match self.search_slot(&key) {
            Ok(handle) => handle,
            Err(slot) => self.attach(slot, key, make()),
        }
    }

    /// Inserts or overwrites; returns the previous value when the key was present.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.search_slot(&key) {
            Ok(handle) => Some(core::mem::replace(&mut self.nodes.get_mut(handle).value, value)),
            Err(slot) => {
                self.attach(slot, key, value);
                None
            }
        }
    }

    pub(crate) fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = self.search(key)?;
        Some(self.remove_node(handle))
    }
}
