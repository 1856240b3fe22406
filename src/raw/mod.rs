mod arena;
mod handle;
mod node;
mod raw_hash_map;
mod raw_tree_map;

pub(crate) use handle::Handle;
pub(crate) use raw_hash_map::{DEFAULT_BUCKET_COUNT, Position, RawHashMap};
pub(crate) use raw_tree_map::RawTreeMap;
