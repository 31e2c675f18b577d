//! Lazily-connected Neo4j service shared by request handlers.

use std::future::Future;

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::{info, warn};

use graphqa_core::{CypherQuery, GraphExecutor, QaError, QaResult, Row};

use crate::client::{GraphClient, GraphConfig};
use crate::convert;

/// Owns the configuration and a connection created on first use.
///
/// A failed connection attempt is not remembered; the next call retries.
pub struct Neo4jService {
    config: GraphConfig,
    client: OnceCell<GraphClient>,
}

impl Neo4jService {
    pub fn new(config: GraphConfig) -> Self {
        Self {
            config,
            client: OnceCell::new(),
        }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Get the shared client, connecting if needed.
    pub async fn client(&self) -> QaResult<&GraphClient> {
        let missing = self.config.missing();
        if !missing.is_empty() {
            return Err(QaError::config(format!(
                "Neo4j configuration missing. Please set environment variables: {}.",
                missing.join(", ")
            )));
        }

        self.client
            .get_or_try_init(|| async {
                info!(uri = %self.config.effective_uri(), "Connecting to Neo4j");
                self.bounded("connect", GraphClient::connect(&self.config)).await
            })
            .await
    }

    /// Run a Neo4j round-trip under the configured connect timeout.
    async fn bounded<T>(
        &self,
        action: &str,
        fut: impl Future<Output = anyhow::Result<T>>,
    ) -> QaResult<T> {
        let timeout = self.config.connect_timeout();
        match tokio::time::timeout(timeout, fut).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                warn!(error = %format!("{e:#}"), "Neo4j {action} failed");
                Err(QaError::graph(format!("{e:#}")))
            }
            Err(_) => {
                warn!(?timeout, "Neo4j {action} timed out");
                Err(QaError::graph(format!(
                    "Timed out after {}s waiting for Neo4j {action} at {}",
                    timeout.as_secs(),
                    self.config.effective_uri()
                )))
            }
        }
    }
}

#[async_trait]
impl GraphExecutor for Neo4jService {
    async fn run_cypher(&self, query: &CypherQuery) -> QaResult<Vec<Row>> {
        let client = self.client().await?;
        let rows = client
            .query(convert::to_query(query))
            .await
            .map_err(|e| QaError::graph(format!("{e:#}")))?;

        Ok(rows
            .iter()
            .map(|row| convert::row_to_json(row, &query.columns))
            .collect())
    }

    /// Connect if needed and round-trip `RETURN 1`.
    ///
    /// A fresh connection has already been pinged by `GraphClient::connect`.
    async fn check_connectivity(&self) -> QaResult<()> {
        let fresh = !self.client.initialized();
        let client = self.client().await?;
        if fresh {
            return Ok(());
        }
        self.bounded("ping", client.ping()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_config_reported() {
        let service = Neo4jService::new(GraphConfig::default());
        let err = service.check_connectivity().await.unwrap_err();
        assert!(matches!(err, QaError::Config(_)));
        assert_eq!(
            err.to_string(),
            "Neo4j configuration missing. Please set environment variables: NEO4J_URI, NEO4J_USER, NEO4J_PASSWORD."
        );
    }

    #[tokio::test]
    async fn test_missing_config_fails_queries() {
        let service = Neo4jService::new(GraphConfig::default());
        let query = CypherQuery::new("t", "RETURN 1 AS one").returning(&["one"]);
        assert!(matches!(
            service.run_cypher(&query).await,
            Err(QaError::Config(_))
        ));
    }

    #[tokio::test]
    async fn test_unresolvable_host_is_graph_error() {
        let service = Neo4jService::new(GraphConfig {
            uri: "bolt://graphqa-no-such-host.invalid:7687".to_string(),
            user: "neo4j".to_string(),
            password: "secret".to_string(),
            connect_timeout_secs: 2,
            ..Default::default()
        });
        let err = service.check_connectivity().await.unwrap_err();
        assert!(matches!(err, QaError::Graph(_)));
    }

    fn local_config(addr: std::net::SocketAddr) -> GraphConfig {
        GraphConfig {
            uri: format!("bolt://{addr}"),
            user: "neo4j".to_string(),
            password: "secret".to_string(),
            connect_timeout_secs: 1,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_silent_server_times_out() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        // Accept and hold sockets open without ever answering the handshake.
        let silent = tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let service = Neo4jService::new(local_config(addr));
        let err = service.check_connectivity().await.unwrap_err();
        assert!(matches!(err, QaError::Graph(_)));
        assert!(err.to_string().contains("Timed out"), "{err}");
        assert!(service.client.get().is_none());

        silent.abort();
    }

    #[tokio::test]
    async fn test_stalled_ping_times_out() {
        let service = Neo4jService::new(local_config("127.0.0.1:7687".parse().unwrap()));
        let err = service
            .bounded("ping", std::future::pending::<anyhow::Result<()>>())
            .await
            .unwrap_err();
        assert!(matches!(err, QaError::Graph(_)));
        assert!(err.to_string().contains("Timed out after 1s waiting for Neo4j ping"), "{err}");
    }
}
