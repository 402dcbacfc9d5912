//! # dagcheck
//!
//! A small HTTP service that reports whether a submitted pipeline graph is a
//! Directed Acyclic Graph.
//!
//! A pipeline is an ordered list of nodes (string ids) and an ordered list of
//! directed edges between ids. dagcheck counts both and runs Kahn's
//! algorithm to decide acyclicity. Nothing is stored between requests.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! cargo install dagcheck
//! dagcheck --http-port 8000
//!
//! curl -X POST localhost:8000/pipelines/parse \
//!   -H 'content-type: application/json' \
//!   -d '{"nodes":[{"id":"a"},{"id":"b"}],"edges":[{"source":"a","target":"b"}]}'
//! # {"num_nodes":2,"num_edges":1,"is_dag":true}
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use dagcheck::prelude::*;
//!
//! let pipeline = Pipeline::default()
//!     .with_node("a")
//!     .with_node("b")
//!     .with_edge("a", "b")
//!     .with_edge("b", "a");
//!
//! let result = check_dag(&pipeline);
//! assert_eq!(result.num_nodes, 2);
//! assert!(!result.is_dag);
//! ```
//!
//! ## Crate Structure
//!
//! - [`dagcheck-core`](https://docs.rs/dagcheck-core) - Graph model and cycle detection
//! - [`dagcheck-api`](https://docs.rs/dagcheck-api) - REST API, request decoding, CORS

// Re-export core types
pub use dagcheck_core::{
    check_dag, topological_walk,
    Edge, Node, Pipeline,
    ParseResult, TopologicalWalk,
};

// Re-export API
pub use dagcheck_api::{
    decode_pipeline, decode_request,
    AllowedOrigins, CorsConfig, ServerConfig,
    ApiError, DecodeError, FieldError,
    RestApi,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        check_dag, topological_walk,
        Edge, Node, Pipeline,
        ParseResult, TopologicalWalk,
        CorsConfig, ServerConfig,
        RestApi,
    };
}
