//! Neo4j connectivity check.

use anyhow::Result;
use colored::Colorize;

use graphqa_core::GraphExecutor;

use super::Neo4jArgs;

pub async fn execute(neo4j: &Neo4jArgs) -> Result<()> {
    let service = neo4j.service();
    let uri = service.config().effective_uri();

    println!("{}", "Neo4j Status".bold());
    println!("{}", "─".repeat(40));
    println!("  URI:           {}", uri.cyan());
    println!("  Database:      {}", service.config().database.cyan());

    if let Err(e) = service.check_connectivity().await {
        println!("  Reachable:     {}", "no".red());
        println!("{}", "─".repeat(40));
        return Err(e.into());
    }

    let client = service.client().await?;
    let counts = client.get_counts().await?;
    println!("  Reachable:     {}", "yes".green());
    println!("  Nodes:         {}", counts.nodes.to_string().cyan());
    println!("  Relationships: {}", counts.relationships.to_string().cyan());
    println!("{}", "─".repeat(40));

    Ok(())
}
