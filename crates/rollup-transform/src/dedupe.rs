use std::collections::BTreeSet;

/// First-wins duplicate-key removal.
///
/// Keeps the first record in input order for each distinct key and drops
/// the rest. Returns the survivors (input order preserved) and the number
/// of records dropped.
///
/// Callers must have removed null-key records already: a record with no
/// natural key cannot be meaningfully deduplicated.
pub fn dedupe_by_key<T, K, F>(records: Vec<T>, key: F) -> (Vec<T>, usize)
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut seen = BTreeSet::new();
    let input = records.len();
    let survivors: Vec<T> = records
        .into_iter()
        .filter(|record| seen.insert(key(record)))
        .collect();
    let dropped = input - survivors.len();
    (survivors, dropped)
}
