//! Users at exactly `n` follow-hops from a start user.

use crate::directory::UserDirectory;
use crate::error::InputError;
use crate::payload::{as_integer, as_mapping, extract_user_list, Object};
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

/// Reads `n`, `findId` and the user list from `data`. `n` and `findId` are
/// looked up on `data` first and then on a nested `users` mapping.
pub fn solve(data: &Object) -> Result<Vec<i64>, InputError> {
    let nested = as_mapping(data, "users");
    let param = |key: &'static str| {
        as_integer(data, key)
            .or_else(|| nested.and_then(|inner| as_integer(inner, key)))
            .ok_or(InputError::MissingParameter(key))
    };

    let n = param("n")?;
    let find_id = param("findId")?;
    let users = extract_user_list(data).ok_or(InputError::MissingUsers)?;

    let directory = UserDirectory::from_values(users);
    debug!(users = directory.len(), n, find_id, "expanding follow levels");
    Ok(nth_level(&directory, find_id, n).into_iter().collect())
}

/// Level-by-level expansion that keeps only the latest frontier. Nodes seen
/// at earlier levels are not remembered, so cycles can bring them back.
/// A non-positive `n` returns the start id unchanged.
///
/// Each frontier depends only on the previous one, so once a frontier
/// repeats the sequence is periodic and the remaining levels are skipped
/// modulo the period. This keeps huge `n` values bounded by the number of
/// distinct frontiers.
pub fn nth_level(directory: &UserDirectory, start: i64, n: i64) -> BTreeSet<i64> {
    let mut frontier = BTreeSet::from([start]);
    let mut seen_at: HashMap<BTreeSet<i64>, i64> = HashMap::new();
    let mut level = 0;
    while level < n {
        if let Some(&first) = seen_at.get(&frontier) {
            let remaining = (n - level) % (level - first);
            debug!(level, period = level - first, remaining, "frontier cycle detected");
            for _ in 0..remaining {
                frontier = next_level(directory, &frontier);
            }
            return frontier;
        }
        let next = next_level(directory, &frontier);
        seen_at.insert(std::mem::replace(&mut frontier, next), level);
        level += 1;
        if frontier.is_empty() {
            break;
        }
    }
    frontier
}

/// Union of the follows lists of every id in `frontier`. Ids without a
/// matching user contribute nothing.
fn next_level(directory: &UserDirectory, frontier: &BTreeSet<i64>) -> BTreeSet<i64> {
    frontier
        .iter()
        .filter_map(|&id| directory.follows_of(id))
        .flatten()
        .copied()
        .collect()
}
