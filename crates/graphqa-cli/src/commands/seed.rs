//! Seed the demo knowledge graph.

use anyhow::Result;
use colored::Colorize;

use super::Neo4jArgs;

pub async fn execute(neo4j: &Neo4jArgs) -> Result<()> {
    let service = neo4j.service();
    let client = service.client().await?;

    println!("{}", "Seeding Sachin Tendulkar knowledge graph into Neo4j...".bold());
    graphqa_graph::seed::seed_graph(client).await?;

    let counts = client.get_counts().await?;
    println!("{}", "Sachin Tendulkar seed complete.".green().bold());
    println!("  Nodes:         {}", counts.nodes.to_string().cyan());
    println!("  Relationships: {}", counts.relationships.to_string().cyan());

    Ok(())
}
