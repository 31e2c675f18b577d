//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use graphqa_graph::{GraphConfig, Neo4jService};

pub mod ask;
pub mod health;
pub mod migrate;
pub mod seed;
pub mod serve;

/// graphqa - Natural-language questions over a Neo4j knowledge graph
#[derive(Parser)]
#[command(name = "graphqa")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub neo4j: Neo4jArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Neo4j connection settings, read from flags or the environment.
#[derive(Args, Clone, Debug)]
pub struct Neo4jArgs {
    /// Neo4j URI, e.g. bolt://localhost:7687 or neo4j+s://host
    #[arg(long = "neo4j-uri", env = "NEO4J_URI", global = true)]
    pub uri: Option<String>,

    /// Neo4j user
    #[arg(long = "neo4j-user", env = "NEO4J_USER", global = true)]
    pub user: Option<String>,

    /// Neo4j password
    #[arg(long = "neo4j-password", env = "NEO4J_PASSWORD", global = true, hide_env_values = true)]
    pub password: Option<String>,

    /// Neo4j database name
    #[arg(long = "neo4j-database", env = "NEO4J_DATABASE", global = true, default_value = "neo4j")]
    pub database: String,

    /// Use TLS for plain bolt:// and neo4j:// URIs
    #[arg(long = "neo4j-encrypted", env = "NEO4J_ENCRYPTED", global = true)]
    pub encrypted: bool,

    /// Seconds to wait for the first connection
    #[arg(long = "neo4j-connect-timeout", env = "NEO4J_CONNECT_TIMEOUT", global = true, default_value = "5")]
    pub connect_timeout: u64,
}

impl Neo4jArgs {
    pub fn to_config(&self) -> GraphConfig {
        GraphConfig {
            uri: self.uri.clone().unwrap_or_default(),
            user: self.user.clone().unwrap_or_default(),
            password: self.password.clone().unwrap_or_default(),
            database: self.database.clone(),
            encrypted: self.encrypted,
            connect_timeout_secs: self.connect_timeout,
        }
    }

    pub fn service(&self) -> Neo4jService {
        Neo4jService::new(self.to_config())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve(serve::ServeArgs),

    /// Create the graph indexes used by the question rules
    Migrate,

    /// Replace the demo graph with the seeded knowledge graph
    SeedGraph,

    /// Answer a question from the command line
    Ask(ask::AskArgs),

    /// Check Neo4j connectivity
    Health,
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Serve(args) => serve::execute(args, &self.neo4j).await,
            Commands::Migrate => migrate::execute(&self.neo4j).await,
            Commands::SeedGraph => seed::execute(&self.neo4j).await,
            Commands::Ask(args) => ask::execute(args, &self.neo4j).await,
            Commands::Health => health::execute(&self.neo4j).await,
        }
    }
}
