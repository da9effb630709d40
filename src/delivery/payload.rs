//! Result payload posted to the webhook.

use serde::Serialize;
use std::collections::HashSet;

use crate::graph::MutualPair;

/// `{"regNo": ..., "outcome": [[a, b], ...]}`
///
/// The order of `outcome` follows the iteration order of the detector's set
/// and is not meaningful.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResultPayload {
    reg_no: String,
    outcome: Vec<MutualPair>,
}

impl ResultPayload {
    pub fn new(reg_no: impl Into<String>, pairs: HashSet<MutualPair>) -> Self {
        Self {
            reg_no: reg_no.into(),
            outcome: pairs.into_iter().collect(),
        }
    }

    pub fn reg_no(&self) -> &str {
        &self.reg_no
    }

    pub fn outcome(&self) -> &[MutualPair] {
        &self.outcome
    }
}
