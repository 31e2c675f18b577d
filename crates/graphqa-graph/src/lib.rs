//! # graphqa Graph
//!
//! Neo4j integration for graphqa.
//!
//! Provides the connection client, a lazily-connected service that answers
//! mapped Cypher queries, schema initialization and the demo seed graph.

pub mod client;
pub mod convert;
pub mod schema;
pub mod seed;
pub mod service;

pub use client::{GraphClient, GraphConfig, GraphCounts};
pub use service::Neo4jService;
