//! Shallow map merging

use std::hash::Hash;

use indexmap::IndexMap;

/// Shallow-merge `overrides` over `base`
///
/// Keys present in both take the override's value but keep the base
/// position; keys only in `overrides` are appended in their own order.
pub fn join_objects<K, V>(base: &IndexMap<K, V>, overrides: Option<&IndexMap<K, V>>) -> IndexMap<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    let mut merged = base.clone();
    if let Some(overrides) = overrides {
        for (key, value) in overrides {
            merged.insert(key.clone(), value.clone());
        }
    }
    merged
}
