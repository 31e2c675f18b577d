//! API documentation routes.
//!
//! Serves the embedded docs page and the OpenAPI document it renders.

use axum::{
    response::{Html, IntoResponse},
    Json,
};
use serde_json::{json, Value};

use graphqa_core::ask::model::{DEFAULT_TOP_K, MAX_QUESTION_LEN, MAX_TOP_K, MIN_TOP_K};
use graphqa_core::mapping::SUPPORTED_EXAMPLES;

const DOCS_HTML: &str = include_str!("../../../../assets/web/docs.html");

/// GET /docs - Serve the API documentation page.
pub async fn index() -> impl IntoResponse {
    Html(DOCS_HTML)
}

/// GET /openapi.json - OpenAPI 3 description of the API.
pub async fn openapi() -> Json<Value> {
    Json(openapi_document())
}

pub fn openapi_document() -> Value {
    let examples: Vec<Value> = SUPPORTED_EXAMPLES
        .iter()
        .map(|q| json!({ "question": q }))
        .collect();

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "graphqa",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "Ask natural-language questions of a Neo4j knowledge graph."
        },
        "paths": {
            "/api/health/": {
                "get": {
                    "summary": "Liveness probe",
                    "tags": ["Health"],
                    "responses": {
                        "200": { "description": "Server is up" }
                    }
                }
            },
            "/api/health/neo4j/": {
                "get": {
                    "summary": "Neo4j connectivity probe",
                    "tags": ["Health"],
                    "responses": {
                        "200": { "description": "Neo4j reachable: {\"ok\": true}" },
                        "503": { "description": "Neo4j unreachable or not configured: {\"ok\": false, \"error\": ...}" }
                    }
                }
            },
            "/api/ask/": {
                "post": {
                    "operationId": "ask_question",
                    "summary": "Ask Question",
                    "tags": ["Question Answering"],
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": { "$ref": "#/components/schemas/AskRequest" },
                                "examples": { "first": { "value": examples.first() } }
                            }
                        }
                    },
                    "responses": {
                        "200": {
                            "description": "Answer payload with results, the generated Cypher query, and parameters.",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/AskResponse" }
                                }
                            }
                        },
                        "400": { "description": "Invalid request" },
                        "500": { "description": "Graph error" }
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "AskRequest": {
                    "type": "object",
                    "required": ["question"],
                    "properties": {
                        "question": {
                            "type": "string",
                            "minLength": 1,
                            "maxLength": MAX_QUESTION_LEN,
                            "description": "A natural language question to query the knowledge graph."
                        },
                        "top_k": {
                            "type": "integer",
                            "minimum": MIN_TOP_K,
                            "maximum": MAX_TOP_K,
                            "default": DEFAULT_TOP_K,
                            "description": "Optional limit on number of results."
                        }
                    }
                },
                "AskResponse": {
                    "type": "object",
                    "properties": {
                        "question": { "type": "string" },
                        "cypher": { "type": "string" },
                        "parameters": { "type": "object" },
                        "results": { "type": "array", "items": { "type": "object" } },
                        "meta": { "type": "object" }
                    }
                }
            }
        },
        "x-supported-questions": SUPPORTED_EXAMPLES
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_endpoint() {
        let doc = openapi_document();
        let paths = doc["paths"].as_object().unwrap();
        for path in ["/api/health/", "/api/health/neo4j/", "/api/ask/"] {
            assert!(paths.contains_key(path), "{path}");
        }
        assert_eq!(
            doc["components"]["schemas"]["AskRequest"]["properties"]["top_k"]["default"],
            json!(10)
        );
    }
}
