use serde::Serialize;
use serde_json::{Map, Value};

/// Body of the fetch request. Field names follow the remote contract.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Identity {
    pub name: String,
    #[serde(rename = "regNo")]
    pub reg_no: String,
    pub email: String,
}

/// Where and how to deliver the result. Held in memory only for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryCredential {
    pub target_url: String,
    pub bearer_token: String,
}

/// Everything the fetch step hands to the rest of the run.
#[derive(Debug, Clone)]
pub struct Assignment {
    pub credential: DeliveryCredential,
    pub data: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: i64,
    /// `None` when the record carried no usable follows list.
    pub follows: Option<Vec<i64>>,
}

/// Unordered pair stored as `(min, max)`; serializes as a two-element array.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MutualPair(pub i64, pub i64);

impl MutualPair {
    pub fn new(a: i64, b: i64) -> Self {
        MutualPair(a.min(b), a.max(b))
    }
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Outcome {
    MutualPairs(Vec<MutualPair>),
    /// Order is not part of the contract.
    Reachable(Vec<i64>),
}

impl Outcome {
    pub fn len(&self) -> usize {
        match self {
            Outcome::MutualPairs(pairs) => pairs.len(),
            Outcome::Reachable(ids) => ids.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct WebhookResult {
    #[serde(rename = "regNo")]
    pub reg_no: String,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Delivered,
    Exhausted,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryReport {
    pub attempts: u32,
    pub outcome: DeliveryOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub solver: String,
    pub result_len: usize,
    pub delivery: DeliveryReport,
}
