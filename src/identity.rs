//! Stable ids for chart entries.
//!
//! Chart entries carry no identifier of their own, so ids are derived from a
//! SHA-256 digest of the attributes that locate an entry in the hierarchy.

use sha2::{Digest, Sha256};

use crate::chart::{Node, SubNode};

/// Number of digest bytes kept in an id.
pub const ID_BYTES: usize = 8;

const SEP: u8 = 0x1f;

fn digest_id(parts: &[&[u8]]) -> String {
    let mut hasher = Sha256::new();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            hasher.update([SEP]);
        }
        hasher.update(part);
    }
    hex::encode(&hasher.finalize()[..ID_BYTES])
}

/// Id of a top-level node, derived from its level and name.
pub fn node_id(node: &Node) -> String {
    level_name_id(node.level, &node.name)
}

/// Id of a sub-node, scoped under its parent so equal names in different
/// nodes do not collide.
pub fn sub_node_id(parent: &Node, sub: &SubNode) -> String {
    let parent_id = node_id(parent);
    digest_id(&[
        parent_id.as_bytes(),
        sub.sub_level.to_string().as_bytes(),
        sub.name.as_bytes(),
    ])
}

/// Id for an arbitrary level/name pair.
pub fn level_name_id(level: u32, name: &str) -> String {
    digest_id(&[level.to_string().as_bytes(), name.as_bytes()])
}
