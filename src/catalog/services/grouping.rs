use std::collections::BTreeMap;

/// Bucket key produced by `group_by`
///
/// Items whose key function yields nothing land in `Undefined` instead of
/// being dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GroupKey<K> {
    Key(K),
    Undefined,
}

/// Groups items by key, preserving input order within each group
///
/// The result borrows from `items`; nothing is cloned or mutated.
pub fn group_by<'a, T, K, F>(items: &'a [T], key_fn: F) -> BTreeMap<GroupKey<K>, Vec<&'a T>>
where
    K: Ord,
    F: Fn(&'a T) -> Option<K>,
{
    let mut groups: BTreeMap<GroupKey<K>, Vec<&'a T>> = BTreeMap::new();
    for item in items {
        let key = key_fn(item).map_or(GroupKey::Undefined, GroupKey::Key);
        groups.entry(key).or_default().push(item);
    }
    groups
}

/// Counts items per key
///
/// The map is sparse: keys with no items are absent. Use
/// `fill_missing_keys` to present a full key set.
pub fn count_by_key<'a, T, K, F>(items: &'a [T], key_fn: F) -> BTreeMap<K, usize>
where
    K: Ord,
    F: Fn(&'a T) -> K,
{
    let mut counts = BTreeMap::new();
    for item in items {
        *counts.entry(key_fn(item)).or_insert(0) += 1;
    }
    counts
}

/// Merges sparse counts against the full key set, in `all_keys` order
///
/// Keys of `counts` that are not in `all_keys` are appended afterwards in
/// key order.
pub fn fill_missing_keys<K>(counts: &BTreeMap<K, usize>, all_keys: &[K]) -> Vec<(K, usize)>
where
    K: Ord + Clone,
{
    let mut filled: Vec<(K, usize)> = all_keys
        .iter()
        .map(|key| (key.clone(), counts.get(key).copied().unwrap_or(0)))
        .collect();

    filled.extend(
        counts
            .iter()
            .filter(|(key, _)| !all_keys.contains(key))
            .map(|(key, count)| (key.clone(), *count)),
    );

    filled
}
