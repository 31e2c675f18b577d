//! Ask request and response models.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::FieldErrors;

pub const MAX_QUESTION_LEN: usize = 500;
pub const DEFAULT_TOP_K: i64 = 10;
pub const MIN_TOP_K: i64 = 1;
pub const MAX_TOP_K: i64 = 100;

/// Incoming question with already-typed fields.
#[derive(Debug, Clone, Default)]
pub struct AskRequest {
    pub question: Option<String>,
    pub top_k: Option<i64>,
}

/// A validated question.
#[derive(Debug, Clone, PartialEq)]
pub struct Ask {
    pub question: String,
    pub top_k: i64,
}

impl AskRequest {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: Some(question.into()),
            top_k: None,
        }
    }

    /// Trim and check the question, apply the `top_k` default and bounds.
    pub fn validate(self) -> Result<Ask, FieldErrors> {
        finish(
            clean_question(self.question.as_deref()),
            clean_top_k(self.top_k),
        )
    }
}

impl Ask {
    /// Validate a decoded JSON request body.
    ///
    /// The body must be an object. Type errors are reported under the
    /// offending field, and `top_k` also accepts integer strings.
    pub fn from_json(body: &Value) -> Result<Ask, FieldErrors> {
        let Some(fields) = body.as_object() else {
            let mut errors = FieldErrors::new();
            errors.add(
                "body",
                format!(
                    "Invalid data. Expected a dictionary, but got {}.",
                    json_type(body)
                ),
            );
            return Err(errors);
        };

        let question = read_question(fields.get("question"))
            .and_then(|q| clean_question(q.as_deref()));
        let top_k = read_top_k(fields.get("top_k")).and_then(clean_top_k);
        finish(question, top_k)
    }
}

fn finish(
    question: Result<String, String>,
    top_k: Result<i64, String>,
) -> Result<Ask, FieldErrors> {
    match (question, top_k) {
        (Ok(question), Ok(top_k)) => Ok(Ask { question, top_k }),
        (question, top_k) => {
            let mut errors = FieldErrors::new();
            if let Err(message) = question {
                errors.add("question", message);
            }
            if let Err(message) = top_k {
                errors.add("top_k", message);
            }
            Err(errors)
        }
    }
}

fn clean_question(raw: Option<&str>) -> Result<String, String> {
    match raw.map(str::trim) {
        None => Err("This field is required.".to_string()),
        Some("") => Err("This field may not be blank.".to_string()),
        Some(q) if q.chars().count() > MAX_QUESTION_LEN => Err(format!(
            "Ensure this field has no more than {MAX_QUESTION_LEN} characters."
        )),
        Some(q) => Ok(q.to_string()),
    }
}

fn clean_top_k(raw: Option<i64>) -> Result<i64, String> {
    let top_k = raw.unwrap_or(DEFAULT_TOP_K);
    if top_k < MIN_TOP_K {
        Err(format!(
            "Ensure this value is greater than or equal to {MIN_TOP_K}."
        ))
    } else if top_k > MAX_TOP_K {
        Err(format!("Ensure this value is less than or equal to {MAX_TOP_K}."))
    } else {
        Ok(top_k)
    }
}

fn read_question(value: Option<&Value>) -> Result<Option<String>, String> {
    match value {
        None => Ok(None),
        Some(Value::Null) => Err("This field may not be null.".to_string()),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(_) => Err("Not a valid string.".to_string()),
    }
}

fn read_top_k(value: Option<&Value>) -> Result<Option<i64>, String> {
    let invalid = || "A valid integer is required.".to_string();
    match value {
        None => Ok(None),
        Some(Value::Null) => Err("This field may not be null.".to_string()),
        Some(Value::Number(n)) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => Ok(Some(i)),
            (None, Some(f)) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                Ok(Some(f as i64))
            }
            _ => Err(invalid()),
        },
        Some(Value::String(s)) => s.trim().parse().map(Some).map_err(|_| invalid()),
        Some(_) => Err(invalid()),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}

/// Answer payload: the question, the generated Cypher, its parameters and
/// the result rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AskResponse {
    pub question: String,
    pub cypher: String,
    pub parameters: Map<String, Value>,
    pub results: Vec<Map<String, Value>>,
    pub meta: Map<String, Value>,
}
