//! Disjoint Partitioning
//!
//! Splits the nodes reachable from several seeds so that each node belongs
//! to exactly one seed.
//!
//! # Algorithm
//!
//! 1. Deduplicate the seeds, keeping first positions
//! 2. Expand a subset from every seed on the governing attribute
//! 3. Every seed claims itself
//! 4. Every other reached node is claimed according to the [`ClaimPolicy`]
//! 5. Each seed keeps the entries of its own subset it claimed
//!
//! Seed order decides ties, so seeds must come as an ordered sequence.
//! Callers holding a hash set should sort it first.

use std::borrow::Borrow;
use std::collections::HashMap;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::expander::check_budget;
use super::{Budget, Partition, Subset};
use crate::error::Result;
use crate::graph::{DirectedGraph, GraphNode};

/// How a node reached by several seeds is assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimPolicy {
    /// The seed reaching the node at the lowest governing cost wins; equal
    /// costs go to the earlier seed.
    #[default]
    Nearest,

    /// The earliest seed that reaches the node wins, whatever it cost.
    FirstSeed,
}

/// A claimed node: index of the owning seed and its governing cost.
#[derive(Debug, Clone, Copy)]
struct Claim {
    seed: usize,
    cost: f64,
}

impl<N: GraphNode> DirectedGraph<N> {
    /// Partition the nodes reachable from `seeds` within `budget`, giving
    /// every node to its nearest seed on `attribute`.
    ///
    /// Every seed appears in the result and owns at least itself. A seed with
    /// no edges maps to itself alone at zero cost.
    pub fn disjoint_subsets<I>(
        &self,
        seeds: I,
        budget: &Budget,
        attribute: &str,
    ) -> Result<Partition<N>>
    where
        I: IntoIterator,
        I::Item: Borrow<N>,
    {
        self.disjoint_subsets_with(seeds, budget, attribute, ClaimPolicy::Nearest)
    }

    /// Like [`disjoint_subsets`](Self::disjoint_subsets) with an explicit
    /// claim policy.
    pub fn disjoint_subsets_with<I>(
        &self,
        seeds: I,
        budget: &Budget,
        attribute: &str,
        policy: ClaimPolicy,
    ) -> Result<Partition<N>>
    where
        I: IntoIterator,
        I::Item: Borrow<N>,
    {
        check_budget(budget, attribute)?;

        let seeds: IndexSet<N> = seeds
            .into_iter()
            .map(|seed| seed.borrow().clone())
            .collect();
        let subsets: Vec<Subset<N>> = seeds
            .iter()
            .map(|seed| self.expand(seed, budget, attribute))
            .collect();

        let mut claims: HashMap<&N, Claim> = HashMap::new();
        for (index, subset) in subsets.iter().enumerate() {
            for (node, costs) in subset {
                if seeds.contains(node) {
                    continue;
                }
                let cost = costs.get(attribute).copied().unwrap_or(0.0);
                let wins = match (claims.get(node), policy) {
                    (None, _) => true,
                    (Some(held), ClaimPolicy::Nearest) => cost < held.cost,
                    (Some(_), ClaimPolicy::FirstSeed) => false,
                };
                if wins {
                    claims.insert(node, Claim { seed: index, cost });
                }
            }
        }

        let mut partition = Partition::new();
        for (index, (seed, subset)) in seeds.iter().zip(&subsets).enumerate() {
            let owned: Subset<N> = subset
                .iter()
                .filter(|(node, _)| {
                    *node == seed || claims.get(node).is_some_and(|claim| claim.seed == index)
                })
                .map(|(node, costs)| (node.clone(), costs.clone()))
                .collect();
            debug!(?seed, reached = subset.len(), claimed = owned.len(), "partitioned seed");
            partition.insert(seed.clone(), owned);
        }

        Ok(partition)
    }
}
