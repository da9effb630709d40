//! Mutual-follow detection.
//!
//! # Responsibilities
//! - Build the follow adjacency map from the decoded user list
//! - Report every reciprocal edge exactly once as a `MutualPair`
//!
//! Duplicate user ids are merged: the follow lists of every entry sharing an
//! id are unioned, and the ids are reported through `duplicate_ids`.

use std::collections::{HashMap, HashSet};

use crate::graph::types::{MutualPair, User, UserId};

/// Directed follow graph, built once and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct FollowGraph {
    edges: HashMap<UserId, HashSet<UserId>>,
    duplicates: Vec<UserId>,
}

impl FollowGraph {
    /// Build the adjacency map from a user list.
    pub fn from_users(users: &[User]) -> Self {
        let mut edges: HashMap<UserId, HashSet<UserId>> = HashMap::with_capacity(users.len());
        let mut duplicates = Vec::new();

        for user in users {
            if edges.contains_key(&user.id) && !duplicates.contains(&user.id) {
                duplicates.push(user.id);
            }
            edges
                .entry(user.id)
                .or_default()
                .extend(user.follows.iter().copied());
        }

        if !duplicates.is_empty() {
            tracing::warn!(
                ids = ?duplicates,
                "Duplicate user ids in input; follow lists merged"
            );
        }

        Self { edges, duplicates }
    }

    /// Whether `from` follows `to`.
    pub fn follows(&self, from: UserId, to: UserId) -> bool {
        self.edges
            .get(&from)
            .map(|set| set.contains(&to))
            .unwrap_or(false)
    }

    /// Number of distinct users.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Ids that appeared more than once in the input, in first-seen order.
    pub fn duplicate_ids(&self) -> &[UserId] {
        &self.duplicates
    }

    /// Every pair of distinct users that follow each other.
    ///
    /// The set has no defined iteration order.
    pub fn mutual_pairs(&self) -> HashSet<MutualPair> {
        let mut pairs = HashSet::new();
        for (&from, followed) in &self.edges {
            for &to in followed {
                if !self.follows(to, from) {
                    continue;
                }
                // Self-follows yield None.
                if let Some(pair) = MutualPair::new(from, to) {
                    pairs.insert(pair);
                }
            }
        }
        pairs
    }
}

/// Build the graph for `users` and return its mutual pairs.
pub fn find_mutual_pairs(users: &[User]) -> HashSet<MutualPair> {
    FollowGraph::from_users(users).mutual_pairs()
}
