//! # dagcheck API
//!
//! HTTP surface for the dagcheck service.
//!
//! | Method | Path               | Response                                  |
//! |--------|--------------------|-------------------------------------------|
//! | GET    | `/`                | `{"Ping": "Pong"}`                        |
//! | POST   | `/pipelines/parse` | `{"num_nodes", "num_edges", "is_dag"}`    |
//!
//! Bodies are read as JSON when `Content-Type` is absent or JSON-typed.
//! Malformed bodies are answered with `422` and one diagnostic per offending
//! field; bodies above the configured limit get `413`.

pub mod config;
pub mod decode;
pub mod error;
pub mod rest;

pub use config::{AllowedOrigins, CorsConfig, ServerConfig};
pub use decode::{decode_pipeline, decode_request};
pub use error::{ApiError, DecodeError, FieldError, FieldErrorKind, Loc};
pub use rest::RestApi;
