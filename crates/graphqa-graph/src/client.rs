//! Neo4j connection client.

use std::time::Duration;

use anyhow::{Context, Result};
use neo4rs::{ConfigBuilder, Graph, Query};
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Configuration for connecting to Neo4j.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
    pub database: String,
    /// Upgrade plain `bolt://` / `neo4j://` URIs to their TLS variants.
    pub encrypted: bool,
    pub connect_timeout_secs: u64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            uri: String::new(),
            user: String::new(),
            password: String::new(),
            database: "neo4j".to_string(),
            encrypted: false,
            connect_timeout_secs: 5,
        }
    }
}

impl GraphConfig {
    /// Names of required environment variables whose value is empty.
    pub fn missing(&self) -> Vec<&'static str> {
        [
            ("NEO4J_URI", &self.uri),
            ("NEO4J_USER", &self.user),
            ("NEO4J_PASSWORD", &self.password),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// URI actually dialed, with the encryption flag applied.
    pub fn effective_uri(&self) -> String {
        if !self.encrypted {
            return self.uri.clone();
        }

        match self.uri.split_once("://") {
            Some((scheme @ ("bolt" | "neo4j"), rest)) => format!("{scheme}+s://{rest}"),
            _ => self.uri.clone(),
        }
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs.max(1))
    }
}

/// Client for Neo4j operations.
#[derive(Clone)]
pub struct GraphClient {
    graph: Graph,
}

impl GraphClient {
    /// Create a new GraphClient from config.
    ///
    /// `Graph::connect` only builds the pool; the `RETURN 1` ping forces a
    /// real bolt handshake so unreachable or unresolvable hosts fail here.
    pub async fn connect(config: &GraphConfig) -> Result<Self> {
        let uri = config.effective_uri();
        let neo4j_config = ConfigBuilder::default()
            .uri(uri.as_str())
            .user(config.user.as_str())
            .password(config.password.as_str())
            .db(config.database.as_str())
            .max_connections(16)
            .fetch_size(200)
            .build()
            .context("Failed to build Neo4j config")?;

        let graph = Graph::connect(neo4j_config)
            .await
            .with_context(|| format!("Failed to connect to Neo4j at {uri}"))?;

        graph
            .run(Query::new("RETURN 1".to_string()))
            .await
            .with_context(|| format!("Neo4j at {uri} is not responding to queries"))?;

        Ok(Self { graph })
    }

    /// Execute a Cypher query that returns no results.
    pub async fn execute(&self, query: Query) -> Result<()> {
        self.graph.run(query).await.context("Neo4j query execution failed")?;
        Ok(())
    }

    /// Execute a Cypher query and return results as rows.
    pub async fn query(&self, query: Query) -> Result<Vec<neo4rs::Row>> {
        let mut result = self.graph.execute(query).await
            .context("Neo4j query failed")?;

        let mut rows = Vec::new();
        while let Some(row) = result.next().await.context("Failed to fetch Neo4j row")? {
            rows.push(row);
        }
        Ok(rows)
    }

    /// Execute a Cypher query and return a single scalar value.
    pub async fn query_scalar<T: DeserializeOwned>(&self, query: Query, field: &str) -> Result<Option<T>> {
        let rows = self.query(query).await?;
        if let Some(row) = rows.into_iter().next() {
            let val: T = row.get(field)
                .map_err(|e| anyhow::anyhow!("Failed to get field '{}': {:?}", field, e))?;
            Ok(Some(val))
        } else {
            Ok(None)
        }
    }

    /// Round-trip a trivial query.
    pub async fn ping(&self) -> Result<()> {
        let one: Option<i64> = self
            .query_scalar(Query::new("RETURN 1 AS one".to_string()), "one")
            .await?;
        anyhow::ensure!(one == Some(1), "Unexpected ping response from Neo4j");
        Ok(())
    }

    /// Get node and relationship counts for status display.
    pub async fn get_counts(&self) -> Result<GraphCounts> {
        let node_query = Query::new("MATCH (n) RETURN count(n) as count".to_string());
        let rel_query = Query::new("MATCH ()-[r]->() RETURN count(r) as count".to_string());

        let node_count: i64 = self.query_scalar(node_query, "count").await?
            .unwrap_or(0);
        let rel_count: i64 = self.query_scalar(rel_query, "count").await?
            .unwrap_or(0);

        Ok(GraphCounts {
            nodes: node_count as usize,
            relationships: rel_count as usize,
        })
    }
}

/// Node and relationship counts.
#[derive(Debug, Clone)]
pub struct GraphCounts {
    pub nodes: usize,
    pub relationships: usize,
}
