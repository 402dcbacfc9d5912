//! # dagcheck Core
//!
//! Core library for the dagcheck service.
//!
//! This crate provides the pipeline graph model and the cycle detector:
//!
//! - [`Node`], [`Edge`] - graph elements identified by plain strings
//! - [`Pipeline`] - one submitted graph
//! - [`check_dag`] - Kahn's algorithm, producing a [`ParseResult`]
//! - [`topological_walk`] - the same traversal, exposing the removal order
//!
//! The detector is a pure function: it keeps no state between calls and
//! never fails. Self-loops, duplicate ids and edges that point at
//! undeclared nodes are all accepted.
//!
//! ## Example
//!
//! ```rust
//! use dagcheck_core::{check_dag, Pipeline};
//!
//! let pipeline = Pipeline::default()
//!     .with_node("load")
//!     .with_node("transform")
//!     .with_node("store")
//!     .with_edge("load", "transform")
//!     .with_edge("transform", "store");
//!
//! let result = check_dag(&pipeline);
//! assert_eq!(result.num_nodes, 3);
//! assert_eq!(result.num_edges, 2);
//! assert!(result.is_dag);
//! ```

pub mod dag;
pub mod graph;

pub use dag::{check_dag, topological_walk, ParseResult, TopologicalWalk};
pub use graph::{Edge, Node, Pipeline};
