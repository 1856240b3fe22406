use super::handle::Handle;

// Chained hash map: one entry of a bucket chain.
#[derive(Clone)]
pub(crate) struct ChainNode<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    // Links never leave the bucket the entry was hashed into.
    pub(crate) prev: Option<Handle>,
    pub(crate) next: Option<Handle>,
}

// Binary search tree: one key/value pair with its structural links.
#[derive(Clone)]
pub(crate) struct TreeNode<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) left: Option<Handle>,
    pub(crate) right: Option<Handle>,
    // Back link only; the parent does not own the child through it.
    pub(crate) parent: Option<Handle>,
}

impl<K, V> ChainNode<K, V> {
    /// Creates a detached entry; the caller links it into a chain.
    pub(crate) const fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            prev: None,
            next: None,
        }
    }

    pub(crate) fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> TreeNode<K, V> {
    /// Creates a leaf hanging under `parent` (or a root when `parent` is `None`).
    pub(crate) const fn new(key: K, value: V, parent: Option<Handle>) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
            parent,
        }
    }

    pub(crate) fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}
