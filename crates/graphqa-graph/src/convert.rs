//! Conversions between JSON parameters/rows and Bolt values.

use neo4rs::{
    BoltBoolean, BoltFloat, BoltInteger, BoltList, BoltMap, BoltNull, BoltType, Query,
};
use serde_json::{Map, Value};
use tracing::debug;

use graphqa_core::{CypherQuery, Row};

/// Convert a JSON value into a Bolt parameter value.
pub fn to_bolt(value: &Value) -> BoltType {
    match value {
        Value::Null => BoltType::Null(BoltNull),
        Value::Bool(b) => BoltType::Boolean(BoltBoolean::new(*b)),
        Value::Number(n) => match n.as_i64() {
            Some(i) => BoltType::Integer(BoltInteger::new(i)),
            None => BoltType::Float(BoltFloat::new(n.as_f64().unwrap_or_default())),
        },
        Value::String(s) => BoltType::String(s.as_str().into()),
        Value::Array(items) => {
            let mut list = BoltList::with_capacity(items.len());
            for item in items {
                list.push(to_bolt(item));
            }
            BoltType::List(list)
        }
        Value::Object(fields) => {
            let mut map = BoltMap::with_capacity(fields.len());
            for (key, item) in fields {
                map.put(key.as_str().into(), to_bolt(item));
            }
            BoltType::Map(map)
        }
    }
}

/// Build a neo4rs query with normalized parameters bound.
pub fn to_query(cypher: &CypherQuery) -> Query {
    cypher
        .normalized_parameters()
        .iter()
        .fold(Query::new(cypher.query.clone()), |query, (key, value)| {
            query.param(key, to_bolt(value))
        })
}

/// Read the declared columns of a row into a JSON object.
///
/// Columns the row lacks, or whose value cannot be represented, become `null`.
pub fn row_to_json(row: &neo4rs::Row, columns: &[&str]) -> Row {
    let mut out = Map::with_capacity(columns.len());
    for &column in columns {
        let value = row.get::<Value>(column).unwrap_or_else(|e| {
            debug!(column, error = ?e, "Column not readable as JSON");
            Value::Null
        });
        out.insert(column.to_string(), value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalars() {
        assert!(matches!(to_bolt(&Value::Null), BoltType::Null(_)));
        assert!(matches!(to_bolt(&json!(true)), BoltType::Boolean(b) if b.value));
        assert!(matches!(to_bolt(&json!(10)), BoltType::Integer(i) if i.value == 10));
        assert!(matches!(to_bolt(&json!(53.78)), BoltType::Float(f) if f.value == 53.78));
        assert!(matches!(to_bolt(&json!("ODI")), BoltType::String(s) if s.value == "ODI"));
    }

    #[test]
    fn test_nested() {
        match to_bolt(&json!(["Sachin Tendulkar"])) {
            BoltType::List(list) => assert_eq!(list.len(), 1),
            other => panic!("expected list, got {other:?}"),
        }
        match to_bolt(&json!({"from": 1989, "to": 2013})) {
            BoltType::Map(map) => assert_eq!(map.value.len(), 2),
            other => panic!("expected map, got {other:?}"),
        }
    }

    #[test]
    fn test_to_query_binds_normalized_parameters() {
        let cypher = CypherQuery::new("t", "MATCH (p:Person {name: $person}) RETURN p")
            .param("person", "Alice")
            .param("top_k", 10);
        let query = to_query(&cypher);
        assert!(query.has_param_key("person"));
        assert!(query.has_param_key("persons"));
        assert!(query.has_param_key("top_k"));
    }
}
