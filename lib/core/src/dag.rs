//! Cycle detection over a submitted [`Pipeline`] using Kahn's algorithm.
//!
//! The traversal seeds a FIFO queue with every *declared* node whose
//! in-degree is zero, then repeatedly removes the front identifier and
//! decrements the in-degree of each of its targets, enqueueing a target the
//! moment its counter reaches exactly zero. The pipeline is a DAG iff the
//! number of removed identifiers equals the number of submitted nodes.
//!
//! Edge endpoints that were never declared still take part in the
//! bookkeeping: they own adjacency lists and in-degree counters, and they are
//! removed like any other identifier once their counter drops to zero.
//! Nothing is validated away.

use std::collections::VecDeque;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::graph::Pipeline;

/// Verdict for one pipeline. Field names are part of the HTTP contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    pub num_nodes: usize,
    pub num_edges: usize,
    pub is_dag: bool,
}

/// Removal order produced by one Kahn traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopologicalWalk<'a> {
    order: Vec<&'a str>,
    num_nodes: usize,
}

impl<'a> TopologicalWalk<'a> {
    /// Identifiers in the order they left the queue. A declared id that was
    /// submitted twice with in-degree zero appears twice.
    #[inline]
    pub fn order(&self) -> &[&'a str] {
        &self.order
    }

    #[inline]
    pub fn visited(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_dag(&self) -> bool {
        self.visited() == self.num_nodes
    }

    #[must_use]
    pub fn into_result(self, num_edges: usize) -> ParseResult {
        ParseResult {
            num_nodes: self.num_nodes,
            num_edges,
            is_dag: self.is_dag(),
        }
    }
}

/// Run Kahn's algorithm over `pipeline` and record the removal order.
pub fn topological_walk(pipeline: &Pipeline) -> TopologicalWalk<'_> {
    let mut adj: AHashMap<&str, Vec<&str>> = AHashMap::new();
    // Signed: a target shared by two copies of a declared source is
    // decremented once per copy and can go below zero.
    let mut indegree: AHashMap<&str, i64> = AHashMap::new();

    for edge in &pipeline.edges {
        adj.entry(edge.source.as_str())
            .or_default()
            .push(edge.target.as_str());
        *indegree.entry(edge.target.as_str()).or_insert(0) += 1;
    }

    let mut queue: VecDeque<&str> = pipeline
        .nodes
        .iter()
        .map(|node| node.id.as_str())
        .filter(|id| indegree.get(id).copied().unwrap_or(0) == 0)
        .collect();

    let mut order = Vec::with_capacity(pipeline.num_nodes());
    while let Some(current) = queue.pop_front() {
        order.push(current);
        let Some(targets) = adj.get(current) else {
            continue;
        };
        for &neighbor in targets {
            let degree = indegree.entry(neighbor).or_insert(0);
            *degree -= 1;
            if *degree == 0 {
                queue.push_back(neighbor);
            }
        }
    }

    TopologicalWalk {
        order,
        num_nodes: pipeline.num_nodes(),
    }
}

/// Count the pipeline and decide whether it is acyclic.
#[inline]
pub fn check_dag(pipeline: &Pipeline) -> ParseResult {
    topological_walk(pipeline).into_result(pipeline.num_edges())
}

impl Pipeline {
    /// Shorthand for [`check_dag`].
    #[inline]
    pub fn parse(&self) -> ParseResult {
        check_dag(self)
    }
}
