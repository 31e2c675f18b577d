//! Web server command.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use tracing::warn;

use graphqa_web::AppState;

use super::Neo4jArgs;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, env = "GRAPHQA_PORT", default_value = "3000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "GRAPHQA_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file used with --log
    #[arg(long, default_value = "logs/graphqa.log")]
    pub log_file: PathBuf,
}

pub async fn execute(args: ServeArgs, neo4j: &Neo4jArgs) -> Result<()> {
    let service = neo4j.service();

    let missing = service.config().missing();
    if !missing.is_empty() {
        warn!(?missing, "Neo4j is not configured; graph endpoints will report errors");
    }

    println!();
    println!("  {} {}", "graphqa".cyan().bold(), "Web Server".bold());
    println!();
    println!("  {}       http://{}:{}/api/ask/", "Ask".green(), args.host, args.port);
    println!("  {}    http://{}:{}/api/health/", "Health".green(), args.host, args.port);
    println!("  {}      http://{}:{}/docs", "Docs".green(), args.host, args.port);
    println!(
        "  {}     {}",
        "Neo4j".green(),
        if missing.is_empty() {
            service.config().effective_uri().normal()
        } else {
            "not configured".yellow()
        }
    );
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    let state = AppState::new(Arc::new(service));
    graphqa_web::run_server(state, &args.host, args.port).await?;

    Ok(())
}
