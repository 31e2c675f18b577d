//! Neo4j schema initialization (indexes used by the question rules).

use anyhow::Result;
use neo4rs::Query;
use tracing::info;

use crate::GraphClient;

/// Cypher statements for schema initialization.
pub const SCHEMA_STATEMENTS: &[&str] = &[
    "CREATE INDEX person_name IF NOT EXISTS FOR (p:Person) ON (p.name)",
    "CREATE INDEX organization_name IF NOT EXISTS FOR (o:Organization) ON (o.name)",
    "CREATE INDEX team_name IF NOT EXISTS FOR (t:Team) ON (t.name)",
    "CREATE INDEX city_name IF NOT EXISTS FOR (c:City) ON (c.name)",
    "CREATE INDEX record_type IF NOT EXISTS FOR (r:Record) ON (r.type)",
];

/// Initialize Neo4j schema with indexes.
///
/// Safe to run multiple times - uses IF NOT EXISTS clauses.
pub async fn initialize_schema(client: &GraphClient) -> Result<usize> {
    info!("Initializing Neo4j schema...");

    for statement in SCHEMA_STATEMENTS {
        client.execute(Query::new(statement.to_string())).await?;
    }

    info!("Neo4j schema initialized ({} statements)", SCHEMA_STATEMENTS.len());
    Ok(SCHEMA_STATEMENTS.len())
}
