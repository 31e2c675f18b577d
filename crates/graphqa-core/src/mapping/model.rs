//! Cypher query model produced by the question mapper.

use serde::Serialize;
use serde_json::{Map, Value};

/// A parameterized Cypher query together with the rule that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CypherQuery {
    pub query: String,
    pub parameters: Map<String, Value>,
    /// Name of the mapping rule that matched.
    #[serde(skip)]
    pub rule: &'static str,
    /// Column aliases returned by `query`, in order.
    #[serde(skip)]
    pub columns: Vec<&'static str>,
}

impl CypherQuery {
    pub fn new(rule: &'static str, query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            parameters: Map::new(),
            rule,
            columns: Vec::new(),
        }
    }

    /// Add a query parameter.
    pub fn param(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.parameters.insert(key.to_string(), value.into());
        self
    }

    /// Declare the returned columns.
    pub fn returning(mut self, columns: &[&'static str]) -> Self {
        self.columns = columns.to_vec();
        self
    }

    /// Parameters as sent to Neo4j.
    ///
    /// `person` and `persons` are kept in sync so a query may reference
    /// either: a non-empty `persons` list supplies `person`, and a non-empty
    /// `person` string supplies a one-element `persons`.
    pub fn normalized_parameters(&self) -> Map<String, Value> {
        let mut params = self.parameters.clone();

        if !params.contains_key("person") {
            let first = params
                .get("persons")
                .and_then(Value::as_array)
                .and_then(|list| list.first())
                .cloned();
            if let Some(first) = first {
                params.insert("person".to_string(), first);
            }
        }

        if !params.contains_key("persons") {
            let person = params
                .get("person")
                .and_then(Value::as_str)
                .filter(|p| !p.is_empty())
                .map(str::to_string);
            if let Some(person) = person {
                params.insert("persons".to_string(), Value::Array(vec![Value::String(person)]));
            }
        }

        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_person_adds_persons() {
        let query = CypherQuery::new("t", "RETURN 1").param("person", "Alice");
        let params = query.normalized_parameters();
        assert_eq!(params["persons"], json!(["Alice"]));
        assert_eq!(params["person"], json!("Alice"));
    }

    #[test]
    fn test_persons_adds_person() {
        let query = CypherQuery::new("t", "RETURN 1").param("persons", json!(["Bob", "Carol"]));
        let params = query.normalized_parameters();
        assert_eq!(params["person"], json!("Bob"));
    }

    #[test]
    fn test_empty_values_left_alone() {
        let query = CypherQuery::new("t", "RETURN 1")
            .param("person", "")
            .param("top_k", 5);
        let params = query.normalized_parameters();
        assert!(!params.contains_key("persons"));

        let query = CypherQuery::new("t", "RETURN 1").param("persons", json!([]));
        assert!(!query.normalized_parameters().contains_key("person"));
    }

    #[test]
    fn test_original_parameters_untouched() {
        let query = CypherQuery::new("t", "RETURN 1").param("person", "Alice");
        let _ = query.normalized_parameters();
        assert_eq!(query.parameters.len(), 1);
    }

    #[test]
    fn test_serializes_query_and_parameters_only() {
        let query = CypherQuery::new("t", "RETURN 1 AS one")
            .param("top_k", 3)
            .returning(&["one"]);
        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(value, json!({"query": "RETURN 1 AS one", "parameters": {"top_k": 3}}));
    }
}
