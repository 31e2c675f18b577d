//! Rule-based mapping of natural language questions to Cypher.
//!
//! Questions are trimmed and lowercased, then tested against an ordered list
//! of rules; the first rule that matches produces the query. Two families of
//! rules exist:
//!
//! - generic person/organization patterns ("who works at Contoso?")
//! - cricket-biography patterns over the seeded Sachin Tendulkar graph
//!   ("when did sachin tendulkar debut in odi?")

pub mod model;

pub use model::CypherQuery;

/// Canonical name of the seeded person.
pub const SACHIN: &str = "Sachin Tendulkar";

const SACHIN_LOWER: &str = "sachin tendulkar";

/// Example questions shown when nothing matches.
pub const SUPPORTED_EXAMPLES: &[&str] = &[
    "Who works at Contoso?",
    "Where is Alice located?",
    "List people in Contoso",
    "What organizations is Alice affiliated with?",
    "Who is Alice?",
    "What teams did Sachin Tendulkar play for?",
    "What records does Sachin Tendulkar hold?",
    "When did Sachin Tendulkar debut in ODI?",
    "When did Sachin Tendulkar retire?",
    "What are the career statistics of Sachin Tendulkar in Test?",
    "Where was Sachin Tendulkar born?",
    "Tell me about Sachin Tendulkar",
];

/// Map a question to a Cypher query if a supported rule matches.
///
/// `top_k` is bound as `$top_k` for every query that has a `LIMIT`.
pub fn map_question(question: &str, top_k: i64) -> Option<CypherQuery> {
    let q = question.trim().to_lowercase();
    if q.is_empty() {
        return None;
    }

    generic_rule(&q, top_k).or_else(|| sachin_rule(&q, top_k))
}

fn generic_rule(q: &str, top_k: i64) -> Option<CypherQuery> {
    if let Some(org) = q.strip_prefix("who works at ").map(trim_question) {
        if !org.is_empty() {
            return Some(
                CypherQuery::new(
                    "who_works_at",
                    "MATCH (p:Person)-[:WORKS_AT]->(o:Organization) \
                     WHERE toLower(o.name) = $org \
                     RETURN p.name AS person LIMIT $top_k",
                )
                .param("org", org)
                .param("top_k", top_k)
                .returning(&["person"]),
            );
        }
    }

    if let Some(person) = q
        .strip_prefix("where is ")
        .and_then(|rest| rest.strip_suffix(" located?"))
        .map(str::trim)
    {
        if !person.is_empty() {
            return Some(
                CypherQuery::new(
                    "person_location",
                    "MATCH (p:Person)-[:LOCATED_IN]->(l:Location) \
                     WHERE toLower(p.name) = $person \
                     RETURN l.name AS location LIMIT $top_k",
                )
                .param("person", person)
                .param("top_k", top_k)
                .returning(&["location"]),
            );
        }
    }

    if let Some(org) = q.strip_prefix("list people in ").map(trim_question) {
        if !org.is_empty() {
            return Some(
                CypherQuery::new(
                    "people_in_org",
                    "MATCH (o:Organization)<-[:WORKS_AT]-(p:Person) \
                     WHERE toLower(o.name) = $org \
                     RETURN p.name AS person ORDER BY p.name LIMIT $top_k",
                )
                .param("org", org)
                .param("top_k", top_k)
                .returning(&["person"]),
            );
        }
    }

    if let Some(person) = q
        .strip_prefix("what organizations is ")
        .and_then(|rest| rest.strip_suffix(" affiliated with?"))
        .map(str::trim)
    {
        if !person.is_empty() {
            return Some(
                CypherQuery::new(
                    "person_organizations",
                    "MATCH (p:Person)-[:WORKS_AT]->(o:Organization) \
                     WHERE toLower(p.name) = $person \
                     RETURN o.name AS organization ORDER BY o.name LIMIT $top_k",
                )
                .param("person", person)
                .param("top_k", top_k)
                .returning(&["organization"]),
            );
        }
    }

    if let Some(person) = q.strip_prefix("who is ").map(trim_question) {
        if !person.is_empty() {
            return Some(
                CypherQuery::new(
                    "who_is",
                    "MATCH (p:Person) WHERE toLower(p.name) = $person \
                     OPTIONAL MATCH (p)-[:WORKS_AT]->(o:Organization) \
                     OPTIONAL MATCH (p)-[:LOCATED_IN]->(l:Location) \
                     RETURN p.name AS person, o.name AS organization, l.name AS location \
                     LIMIT $top_k",
                )
                .param("person", person)
                .param("top_k", top_k)
                .returning(&["person", "organization", "location"]),
            );
        }
    }

    None
}

fn sachin_rule(q: &str, top_k: i64) -> Option<CypherQuery> {
    let about_sachin = q.contains(SACHIN_LOWER);

    if (about_sachin && q.contains("what teams did") && q.contains("play for"))
        || q == "teams sachin tendulkar played for?"
    {
        return Some(
            CypherQuery::new(
                "teams_played_for",
                "MATCH (p:Person {name: $person})-[:PLAYED_FOR|REPRESENTED|CAPTAINED]->(t) \
                 RETURN DISTINCT t.name AS team \
                 ORDER BY team \
                 LIMIT $top_k",
            )
            .param("person", SACHIN)
            .param("top_k", top_k)
            .returning(&["team"]),
        );
    }

    if (about_sachin && q.contains("what records does") && q.contains("hold"))
        || matches!(q, "sachin tendulkar records?" | "records of sachin tendulkar?")
    {
        return Some(
            CypherQuery::new(
                "records_held",
                "MATCH (p:Person {name: $person})-[:HOLDS_RECORD]->(r:Record) \
                 RETURN r.label AS record, r.value AS value, r.unit AS unit, r.year AS year \
                 ORDER BY record \
                 LIMIT $top_k",
            )
            .param("person", SACHIN)
            .param("top_k", top_k)
            .returning(&["record", "value", "unit", "year"]),
        );
    }

    if about_sachin && q.contains("when did") && q.contains("debut") {
        return Some(
            CypherQuery::new(
                "debut",
                "MATCH (p:Person {name: $person})-[:DEBUTED_IN]->(d:Record {type:'Debut'}) \
                 WHERE ($format IS NULL) OR toLower(d.format) = toLower($format) \
                 RETURN d.format AS format, d.year AS year, d.opponent AS opponent, d.location AS location \
                 ORDER BY d.year ASC \
                 LIMIT $top_k",
            )
            .param("person", SACHIN)
            .param("format", extract_format(q))
            .param("top_k", top_k)
            .returning(&["format", "year", "opponent", "location"]),
        );
    }

    if about_sachin && q.contains("when did") && q.contains("retire") {
        return Some(
            CypherQuery::new(
                "retirement",
                "MATCH (p:Person {name: $person})-[:RETIRED_IN]->(r:Record {type:'Retirement'}) \
                 WHERE ($format IS NULL) OR toLower(r.format) = toLower($format) \
                 RETURN r.format AS format, r.year AS year, r.opponent AS opponent, r.location AS location \
                 ORDER BY r.year ASC \
                 LIMIT $top_k",
            )
            .param("person", SACHIN)
            .param("format", extract_format(q))
            .param("top_k", top_k)
            .returning(&["format", "year", "opponent", "location"]),
        );
    }

    if about_sachin && (q.contains("career statistics of") || q.contains("stats of")) {
        return Some(
            CypherQuery::new(
                "career_stats",
                "MATCH (p:Person {name: $person})-[:FORMAT_STATS]->(s:Record {type:'Stats'}) \
                 WHERE ($format IS NULL) OR toLower(s.format) = toLower($format) \
                 RETURN s.format AS format, s.matches AS matches, s.runs AS runs, \
                 s.hundreds AS hundreds, s.fifties AS fifties, s.average AS average \
                 ORDER BY s.format \
                 LIMIT $top_k",
            )
            .param("person", SACHIN)
            .param("format", extract_format(q))
            .param("top_k", top_k)
            .returning(&["format", "matches", "runs", "hundreds", "fifties", "average"]),
        );
    }

    if (about_sachin && q.contains("where was") && q.contains("born"))
        || matches!(q, "sachin tendulkar birthplace?" | "birthplace of sachin tendulkar?")
    {
        return Some(
            CypherQuery::new(
                "birthplace",
                "MATCH (p:Person {name: $person})-[:BORN_IN]->(c:City) \
                 OPTIONAL MATCH (c)-[:IN_COUNTRY]->(country:Country) \
                 RETURN c.name AS city, country.name AS country \
                 LIMIT $top_k",
            )
            .param("person", SACHIN)
            .param("top_k", top_k)
            .returning(&["city", "country"]),
        );
    }

    if (about_sachin && q.starts_with("tell me about "))
        || matches!(q, "about sachin tendulkar" | "who is sachin tendulkar")
    {
        return Some(
            CypherQuery::new(
                "profile",
                "MATCH (p:Person {name: $person}) \
                 OPTIONAL MATCH (p)-[:BORN_IN]->(city:City) \
                 OPTIONAL MATCH (p)-[:FORMAT_STATS]->(s:Record {type:'Stats'}) \
                 RETURN p.name AS name, p.full_name AS full_name, p.nickname AS nickname, \
                 p.batting_style AS batting_style, p.bowling_style AS bowling_style, \
                 p.birth_year AS birth_year, city.name AS birth_city, \
                 collect({format:s.format, runs:s.runs, matches:s.matches, hundreds:s.hundreds, \
                 fifties:s.fifties, average:s.average}) AS formats \
                 LIMIT 1",
            )
            .param("person", SACHIN)
            .returning(&[
                "name",
                "full_name",
                "nickname",
                "batting_style",
                "bowling_style",
                "birth_year",
                "birth_city",
                "formats",
            ]),
        );
    }

    None
}

/// Recognize a cricket format keyword seeded in the graph.
///
/// `None` means "all formats"; "international" has no dedicated stats node
/// so it also yields `None`.
pub fn extract_format(text: &str) -> Option<&'static str> {
    if text.contains("test") {
        Some("Test")
    } else if text.contains("odi") {
        Some("ODI")
    } else if text.contains("t20") {
        Some("T20I")
    } else if text.contains("ipl") {
        Some("IPL")
    } else {
        None
    }
}

fn trim_question(s: &str) -> &str {
    s.trim_end_matches('?').trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_who_works_at() {
        let query = map_question("Who works at Contoso?", 10).unwrap();
        assert_eq!(query.rule, "who_works_at");
        assert_eq!(query.parameters["org"], json!("contoso"));
        assert_eq!(query.parameters["top_k"], json!(10));
        assert_eq!(query.columns, vec!["person"]);
    }

    #[test]
    fn test_where_is_located() {
        let query = map_question("  Where is Alice located?  ", 3).unwrap();
        assert_eq!(query.rule, "person_location");
        assert_eq!(query.parameters["person"], json!("alice"));
        assert_eq!(query.parameters["top_k"], json!(3));
    }

    #[test]
    fn test_where_is_requires_suffix() {
        assert!(map_question("Where is Alice?", 10).is_none());
        assert!(map_question("where is located?", 10).is_none());
    }

    #[test]
    fn test_list_people_and_affiliations() {
        let query = map_question("List people in Contoso", 10).unwrap();
        assert_eq!(query.rule, "people_in_org");
        assert_eq!(query.parameters["org"], json!("contoso"));
        assert!(query.query.contains("ORDER BY p.name"));

        let query = map_question("What organizations is Alice affiliated with?", 10).unwrap();
        assert_eq!(query.rule, "person_organizations");
        assert_eq!(query.parameters["person"], json!("alice"));
    }

    #[test]
    fn test_empty_capture_falls_through() {
        assert!(map_question("who works at ?", 10).is_none());
        assert!(map_question("who is ?", 10).is_none());
    }

    #[test]
    fn test_who_is_precedes_profile() {
        let query = map_question("Who is Sachin Tendulkar?", 10).unwrap();
        assert_eq!(query.rule, "who_is");
        assert_eq!(query.parameters["person"], json!("sachin tendulkar"));
    }

    #[test]
    fn test_teams_played_for() {
        let query = map_question("What teams did Sachin Tendulkar play for?", 10).unwrap();
        assert_eq!(query.rule, "teams_played_for");
        assert_eq!(query.parameters["person"], json!(SACHIN));

        let query = map_question("teams sachin tendulkar played for?", 10).unwrap();
        assert_eq!(query.rule, "teams_played_for");
    }

    #[test]
    fn test_records_held() {
        for question in [
            "What records does Sachin Tendulkar hold?",
            "Sachin Tendulkar records?",
            "records of sachin tendulkar?",
        ] {
            let query = map_question(question, 10).unwrap();
            assert_eq!(query.rule, "records_held", "{question}");
        }
    }

    #[test]
    fn test_debut_with_format() {
        let query = map_question("When did Sachin Tendulkar debut in ODI cricket?", 10).unwrap();
        assert_eq!(query.rule, "debut");
        assert_eq!(query.parameters["format"], json!("ODI"));
        assert_eq!(query.columns, vec!["format", "year", "opponent", "location"]);
    }

    #[test]
    fn test_debut_international_is_all_formats() {
        let query =
            map_question("When did Sachin Tendulkar debut in international cricket?", 10).unwrap();
        assert_eq!(query.parameters["format"], Value::Null);
    }

    #[test]
    fn test_retirement() {
        let query = map_question("When did Sachin Tendulkar retire from Test cricket?", 5).unwrap();
        assert_eq!(query.rule, "retirement");
        assert_eq!(query.parameters["format"], json!("Test"));
        assert_eq!(query.parameters["top_k"], json!(5));
    }

    #[test]
    fn test_career_stats() {
        let query =
            map_question("What are the career statistics of Sachin Tendulkar in T20?", 10).unwrap();
        assert_eq!(query.rule, "career_stats");
        assert_eq!(query.parameters["format"], json!("T20I"));

        let query = map_question("stats of sachin tendulkar", 10).unwrap();
        assert_eq!(query.parameters["format"], Value::Null);
    }

    #[test]
    fn test_birthplace() {
        let query = map_question("Where was Sachin Tendulkar born?", 10).unwrap();
        assert_eq!(query.rule, "birthplace");
        assert_eq!(query.columns, vec!["city", "country"]);

        let query = map_question("Birthplace of Sachin Tendulkar?", 10).unwrap();
        assert_eq!(query.rule, "birthplace");
    }

    #[test]
    fn test_profile_has_no_top_k() {
        let query = map_question("Tell me about Sachin Tendulkar", 10).unwrap();
        assert_eq!(query.rule, "profile");
        assert!(!query.parameters.contains_key("top_k"));
        assert!(query.query.ends_with("LIMIT 1"));
        assert_eq!(query.columns.last(), Some(&"formats"));
    }

    #[test]
    fn test_unmapped() {
        assert!(map_question("", 10).is_none());
        assert!(map_question("   ", 10).is_none());
        assert!(map_question("What is the meaning of life?", 10).is_none());
        assert!(map_question("Tell me about Rahul Dravid", 10).is_none());
    }

    #[test]
    fn test_extract_format() {
        assert_eq!(extract_format("in test matches"), Some("Test"));
        assert_eq!(extract_format("odi"), Some("ODI"));
        assert_eq!(extract_format("t20i"), Some("T20I"));
        assert_eq!(extract_format("ipl seasons"), Some("IPL"));
        assert_eq!(extract_format("international"), None);
        assert_eq!(extract_format("career"), None);
    }
}
