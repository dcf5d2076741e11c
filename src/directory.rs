//! Lookup over the normalized user list of one dataset.

use crate::domain::models::UserRecord;
use crate::payload::{as_integer, as_integer_list};
use serde_json::Value;
use std::collections::HashMap;

/// Immutable once built. Entries without a usable `id` are dropped because
/// no lookup could ever reach them.
#[derive(Debug, Default)]
pub struct UserDirectory {
    records: Vec<UserRecord>,
    index: HashMap<i64, usize>,
}

impl UserDirectory {
    pub fn from_values(users: &[Value]) -> Self {
        let records: Vec<UserRecord> = users
            .iter()
            .filter_map(Value::as_object)
            .filter_map(|user| {
                Some(UserRecord {
                    id: as_integer(user, "id")?,
                    follows: as_integer_list(user, "follows"),
                })
            })
            .collect();

        let mut index = HashMap::with_capacity(records.len());
        for (pos, record) in records.iter().enumerate() {
            // Duplicate ids: the first record in scan order wins.
            index.entry(record.id).or_insert(pos);
        }

        Self { records, index }
    }

    pub fn find_by_id(&self, id: i64) -> Option<&UserRecord> {
        self.index.get(&id).map(|&pos| &self.records[pos])
    }

    /// The follows list of `id`, if the user exists and has one.
    pub fn follows_of(&self, id: i64) -> Option<&[i64]> {
        self.find_by_id(id)?.follows.as_deref()
    }

    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
