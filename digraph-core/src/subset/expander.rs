//! Subset Expansion
//!
//! Cost-bounded Dijkstra expansion from a single source. Each reached node
//! records the accumulated cost of every attribute seen on the path that
//! reached it, so a `distance`-governed subset also reports travel `time`.

use std::collections::HashMap;

use tracing::{debug, trace};

use super::{Budget, Costs, Subset};
use crate::error::{GraphError, Result};
use crate::graph::{DirectedGraph, GraphNode};
use crate::search::Frontier;

impl<N: GraphNode> DirectedGraph<N> {
    /// Nodes reachable from `source` within `budget`, governed by the
    /// budget's first attribute.
    ///
    /// # Errors
    ///
    /// - [`EmptyBudget`](GraphError::EmptyBudget) if the budget names nothing
    pub fn subset(&self, source: &N, budget: &Budget) -> Result<Subset<N>> {
        let governing = budget.governing().ok_or(GraphError::EmptyBudget)?;
        self.subset_by(source, budget, governing)
    }

    /// Nodes reachable from `source` within `budget`, settled cheapest-first
    /// on `attribute`, which must be one of the budgeted attributes.
    ///
    /// The source is always part of the result with every budgeted
    /// attribute at zero, even when it has no edges. Budgeted attributes
    /// that no edge carries cost nothing.
    ///
    /// # Errors
    ///
    /// - [`EmptyBudget`](GraphError::EmptyBudget) if the budget names nothing
    /// - [`UnknownAttribute`](GraphError::UnknownAttribute) if `attribute` is
    ///   not one of the budget's keys
    pub fn subset_by(&self, source: &N, budget: &Budget, attribute: &str) -> Result<Subset<N>> {
        check_budget(budget, attribute)?;
        let subset = self.expand(source, budget, attribute);
        debug!(?source, attribute, reached = subset.len(), "expanded subset");
        Ok(subset)
    }

    /// Expansion proper; `budget` must already be checked against the graph.
    pub(crate) fn expand(&self, source: &N, budget: &Budget, attribute: &str) -> Subset<N> {
        let mut reached = Subset::new();
        let mut tentative = HashMap::new();
        let mut frontier = Frontier::new();

        tentative.insert(source.clone(), budget.zero_costs());
        frontier.push(0.0, source.clone());

        while let Some(node) = frontier.pop() {
            if reached.contains_key(&node) {
                continue;
            }
            let Some(costs) = tentative.remove(&node) else {
                continue;
            };
            trace!(?node, ?costs, "reached");

            for (next, attributes) in self.successors(&node) {
                if next == &node || reached.contains_key(next) {
                    continue;
                }

                let mut candidate = costs.clone();
                for (name, value) in attributes.iter() {
                    *candidate.entry(name.to_string()).or_insert(0.0) += value;
                }
                if !budget.admits(&candidate) {
                    continue;
                }

                let cost = governing_cost(&candidate, attribute);
                let improves = tentative
                    .get(next)
                    .map_or(true, |known| cost < governing_cost(known, attribute));
                if improves {
                    frontier.push(cost, next.clone());
                    tentative.insert(next.clone(), candidate);
                }
            }

            reached.insert(node, costs);
        }

        reached
    }
}

/// Budgets only need to name the governing attribute; the graph may carry
/// none of them, e.g. once every edge has been removed.
pub(crate) fn check_budget(budget: &Budget, attribute: &str) -> Result<()> {
    if budget.is_empty() {
        return Err(GraphError::EmptyBudget);
    }
    if budget.limit(attribute).is_none() {
        return Err(GraphError::UnknownAttribute(attribute.to_string()));
    }
    Ok(())
}

fn governing_cost(costs: &Costs, attribute: &str) -> f64 {
    costs.get(attribute).copied().unwrap_or(0.0)
}
