//! graphqa Core Library
//!
//! Question validation, rule-based question-to-Cypher mapping and the
//! question answering service.

pub mod ask;
pub mod error;
pub mod mapping;

pub use ask::model::{Ask, AskRequest, AskResponse};
pub use ask::{GraphExecutor, QuestionAnswerService, Row};
pub use error::{FieldErrors, QaError, QaResult};
pub use mapping::{map_question, CypherQuery};
