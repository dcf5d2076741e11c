//! Pairs of users who follow each other.

use crate::directory::UserDirectory;
use crate::domain::models::MutualPair;
use crate::error::InputError;
use crate::payload::{extract_user_list, Object};
use std::collections::BTreeSet;
use tracing::debug;

/// Reads the user list out of `data` and returns every mutual pair, sorted by
/// first then second member. An empty user list is a valid, empty answer.
pub fn solve(data: &Object) -> Result<Vec<MutualPair>, InputError> {
    let users = extract_user_list(data).ok_or(InputError::MissingUsers)?;
    let directory = UserDirectory::from_values(users);
    if directory.is_empty() {
        return Ok(Vec::new());
    }
    debug!(users = directory.len(), "scanning for mutual follows");
    Ok(mutual_pairs(&directory))
}

pub fn mutual_pairs(directory: &UserDirectory) -> Vec<MutualPair> {
    let mut pairs = BTreeSet::new();
    for user in directory.records() {
        let Some(follows) = &user.follows else {
            continue;
        };
        for &followed in follows {
            let follows_back = directory
                .follows_of(followed)
                .is_some_and(|theirs| theirs.contains(&user.id));
            if follows_back {
                pairs.insert(MutualPair::new(user.id, followed));
            }
        }
    }
    pairs.into_iter().collect()
}
