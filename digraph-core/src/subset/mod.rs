//! Budgeted Subsets
//!
//! A subset is everything reachable from one node without exceeding a
//! budget, together with what it cost to get there. A partition splits the
//! reachable universe of several seed nodes so that every node belongs to
//! exactly one seed.
//!
//! # Budgets
//!
//! A [`Budget`] maps attribute names to the maximum accumulated cost allowed
//! for each. One attribute, the governing attribute, orders the expansion:
//! nodes are settled cheapest-first on it. The others only bound it.

mod expander;
mod partition;

pub use partition::ClaimPolicy;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Accumulated cost per attribute along one path.
pub type Costs = IndexMap<String, f64>;

/// Nodes reached from one source, in the order they were settled, with the
/// cost of reaching each.
pub type Subset<N> = IndexMap<N, Costs>;

/// Seed -> the part of the reachable universe it claimed, in seed order.
pub type Partition<N> = IndexMap<N, Subset<N>>;

/// Maximum accumulated cost per attribute.
///
/// The first attribute inserted is the governing attribute used by
/// [`DirectedGraph::subset`](crate::DirectedGraph::subset).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Budget(IndexMap<String, f64>);

impl Budget {
    /// Create an empty budget.
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// A budget bounding a single attribute.
    pub fn single(attribute: impl Into<String>, limit: f64) -> Self {
        Self::new().with(attribute, limit)
    }

    /// Builder-style insert.
    pub fn with(mut self, attribute: impl Into<String>, limit: f64) -> Self {
        self.insert(attribute, limit);
        self
    }

    /// Set the limit for `attribute`, returning the previous one.
    pub fn insert(&mut self, attribute: impl Into<String>, limit: f64) -> Option<f64> {
        self.0.insert(attribute.into(), limit)
    }

    pub fn limit(&self, attribute: &str) -> Option<f64> {
        self.0.get(attribute).copied()
    }

    /// The attribute that orders expansion by default.
    pub fn governing(&self) -> Option<&str> {
        self.0.keys().next().map(String::as_str)
    }

    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `costs` stays within every limit. Attributes missing from
    /// `costs` count as zero.
    pub fn admits(&self, costs: &Costs) -> bool {
        self.0
            .iter()
            .all(|(attribute, &limit)| costs.get(attribute).copied().unwrap_or(0.0) <= limit)
    }

    /// Every budgeted attribute at zero: the cost of the expansion source.
    pub(crate) fn zero_costs(&self) -> Costs {
        self.0.keys().map(|attribute| (attribute.clone(), 0.0)).collect()
    }
}

impl<K: Into<String>, const M: usize> From<[(K, f64); M]> for Budget {
    fn from(limits: [(K, f64); M]) -> Self {
        limits.into_iter().collect()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Budget {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(name, limit)| (name.into(), limit)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_attribute_governs() {
        let budget = Budget::single("distance", 100.0).with("time", 30.0);
        assert_eq!(budget.governing(), Some("distance"));
        assert_eq!(budget.limit("time"), Some(30.0));
        assert_eq!(Budget::new().governing(), None);
    }

    #[test]
    fn admits_checks_every_limit() {
        let budget = Budget::from([("distance", 10.0), ("time", 5.0)]);

        let mut costs = Costs::new();
        costs.insert("distance".to_string(), 10.0);
        assert!(budget.admits(&costs));

        costs.insert("time".to_string(), 5.5);
        assert!(!budget.admits(&costs));
    }

    #[test]
    fn zero_costs_cover_budgeted_attributes() {
        let budget = Budget::from([("distance", 10.0), ("time", 5.0)]);
        let zero = budget.zero_costs();
        assert_eq!(zero.len(), 2);
        assert!(zero.values().all(|&cost| cost == 0.0));
    }

    #[test]
    fn budget_deserializes_from_json_map() {
        let budget: Budget = serde_json::from_str(r#"{"weight": 13}"#).unwrap();
        assert_eq!(budget, Budget::single("weight", 13.0));
    }
}
