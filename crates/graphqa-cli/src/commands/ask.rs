//! Ask a question from the command line.

use std::sync::Arc;

use anyhow::Result;
use clap::Args;

use graphqa_core::{AskRequest, QuestionAnswerService};

use super::Neo4jArgs;

#[derive(Args)]
pub struct AskArgs {
    /// Natural language question
    pub question: String,

    /// Maximum number of results (1-100)
    #[arg(long)]
    pub top_k: Option<i64>,
}

pub async fn execute(args: AskArgs, neo4j: &Neo4jArgs) -> Result<()> {
    let ask = AskRequest {
        question: Some(args.question),
        top_k: args.top_k,
    }
    .validate()
    .map_err(graphqa_core::QaError::from)?;

    let service = QuestionAnswerService::new(Arc::new(neo4j.service()));
    let answer = service.ask(&ask).await?;

    println!("{}", serde_json::to_string_pretty(&answer)?);
    Ok(())
}
