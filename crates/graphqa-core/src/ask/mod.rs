//! Question answering: map a question to Cypher, run it, shape the answer.

pub mod model;

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Map, Value};
use tracing::{debug, info};

use crate::error::QaResult;
use crate::mapping::{self, CypherQuery};
use model::{Ask, AskResponse};

/// A result row keyed by column alias.
pub type Row = Map<String, Value>;

/// Something that can run a Cypher query and return rows as JSON objects.
#[async_trait]
pub trait GraphExecutor: Send + Sync {
    async fn run_cypher(&self, query: &CypherQuery) -> QaResult<Vec<Row>>;

    /// Verify the graph is reachable.
    async fn check_connectivity(&self) -> QaResult<()>;
}

/// Orchestrates mapping and execution of questions.
#[derive(Clone)]
pub struct QuestionAnswerService {
    graph: Arc<dyn GraphExecutor>,
}

impl QuestionAnswerService {
    pub fn new(graph: Arc<dyn GraphExecutor>) -> Self {
        Self { graph }
    }

    /// Answer a validated question.
    ///
    /// An unmapped question is not an error: the answer carries an empty
    /// query and a hint listing supported questions.
    pub async fn ask(&self, ask: &Ask) -> QaResult<AskResponse> {
        let Some(query) = mapping::map_question(&ask.question, ask.top_k) else {
            info!(question = %ask.question, "No mapping rule matched");
            return Ok(unmapped(&ask.question));
        };

        debug!(rule = query.rule, cypher = %query.query, "Mapped question");
        let results = self.graph.run_cypher(&query).await?;
        info!(rule = query.rule, rows = results.len(), "Answered question");

        let mut meta = Map::new();
        meta.insert("rule".to_string(), json!(query.rule));
        meta.insert("count".to_string(), json!(results.len()));

        Ok(AskResponse {
            question: ask.question.clone(),
            cypher: query.query,
            parameters: query.parameters,
            results,
            meta,
        })
    }
}

fn unmapped(question: &str) -> AskResponse {
    let mut meta = Map::new();
    meta.insert(
        "note".to_string(),
        json!("No mapping found. Try a supported pattern like 'Who works at OrgName?'"),
    );
    meta.insert(
        "supported_examples".to_string(),
        json!(mapping::SUPPORTED_EXAMPLES),
    );

    AskResponse {
        question: question.to_string(),
        cypher: String::new(),
        parameters: Map::new(),
        results: Vec::new(),
        meta,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QaError;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingGraph {
        seen: Mutex<Vec<String>>,
        fail: bool,
    }

    #[async_trait]
    impl GraphExecutor for RecordingGraph {
        async fn run_cypher(&self, query: &CypherQuery) -> QaResult<Vec<Row>> {
            self.seen.lock().unwrap().push(query.rule.to_string());
            if self.fail {
                return Err(QaError::graph("connection refused"));
            }
            let mut row = Row::new();
            row.insert("team".to_string(), json!("India"));
            Ok(vec![row])
        }

        async fn check_connectivity(&self) -> QaResult<()> {
            Ok(())
        }
    }

    fn ask(question: &str) -> Ask {
        Ask {
            question: question.to_string(),
            top_k: 10,
        }
    }

    #[tokio::test]
    async fn test_mapped_question_runs_query() {
        let graph = Arc::new(RecordingGraph::default());
        let service = QuestionAnswerService::new(graph.clone());

        let answer = service
            .ask(&ask("What teams did Sachin Tendulkar play for?"))
            .await
            .unwrap();

        assert!(answer.cypher.contains("PLAYED_FOR"));
        assert_eq!(answer.parameters["person"], json!("Sachin Tendulkar"));
        assert_eq!(answer.results.len(), 1);
        assert_eq!(answer.meta["rule"], json!("teams_played_for"));
        assert_eq!(answer.meta["count"], json!(1));
        assert_eq!(*graph.seen.lock().unwrap(), vec!["teams_played_for"]);
    }

    #[tokio::test]
    async fn test_unmapped_question_skips_graph() {
        let graph = Arc::new(RecordingGraph::default());
        let service = QuestionAnswerService::new(graph.clone());

        let answer = service.ask(&ask("How tall is Everest?")).await.unwrap();

        assert_eq!(answer.cypher, "");
        assert!(answer.parameters.is_empty());
        assert!(answer.results.is_empty());
        assert!(answer.meta["supported_examples"].as_array().unwrap().len() > 1);
        assert!(graph.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_graph_error_propagates() {
        let graph = Arc::new(RecordingGraph {
            fail: true,
            ..Default::default()
        });
        let service = QuestionAnswerService::new(graph);

        let err = service
            .ask(&ask("Where was Sachin Tendulkar born?"))
            .await
            .unwrap_err();
        assert!(matches!(err, QaError::Graph(_)));
    }
}
