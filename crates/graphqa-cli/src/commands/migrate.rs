//! Schema migration command.

use anyhow::Result;
use colored::Colorize;

use super::Neo4jArgs;

pub async fn execute(neo4j: &Neo4jArgs) -> Result<()> {
    let service = neo4j.service();
    let client = service.client().await?;

    println!("{}", "Applying graph schema...".bold());
    let applied = graphqa_graph::schema::initialize_schema(client).await?;
    println!("{} {} statements applied", "Done:".green().bold(), applied);

    Ok(())
}
