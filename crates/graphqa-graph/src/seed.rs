//! Demonstration knowledge graph centred on Sachin Tendulkar.

use anyhow::{Context, Result};
use neo4rs::Query;
use tracing::info;

use crate::GraphClient;

/// Labels cleared before seeding.
pub const SEED_LABELS: &[&str] = &[
    "Person",
    "Organization",
    "Team",
    "Country",
    "City",
    "Record",
    "Trophy",
    "Format",
    "Role",
];

/// Creates every seeded node and relationship in one statement.
pub const SEED_CYPHER: &str = r#"
CREATE (sachin:Person {
    name: 'Sachin Tendulkar',
    full_name: 'Sachin Ramesh Tendulkar',
    nickname: 'Little Master',
    batting_style: 'Right-hand bat',
    bowling_style: 'Right-arm offbreak/legbreak',
    birth_year: 1973
})

CREATE (mumbai:City {name: 'Mumbai'})
CREATE (indiaCountry:Country {name: 'India'})
MERGE (mumbai)-[:IN_COUNTRY]->(indiaCountry)

MERGE (sachin)-[:BORN_IN]->(mumbai)
MERGE (sachin)-[:BORN_ON {year: 1973, month: 4, day: 24}]->(:Record {type: 'BirthDate', label: '24 April 1973'})

CREATE (india:Team {name: 'India', level: 'International', sport: 'Cricket'})
CREATE (mumbaiTeam:Team {name: 'Mumbai', level: 'Domestic', sport: 'Cricket'})
CREATE (mi:Organization {name: 'Mumbai Indians', type: 'IPL Franchise', sport: 'Cricket'})
CREATE (bcci:Organization {name: 'BCCI', type: 'Cricket Board'})
CREATE (icc:Organization {name: 'ICC', type: 'Governing Body'})

CREATE (batsman:Role {name: 'Batsman'})
CREATE (opener:Role {name: 'Opening Batsman'})
CREATE (partTimeBowler:Role {name: 'Part-time Bowler'})
CREATE (:Format {name: 'Test'})
CREATE (:Format {name: 'ODI'})
CREATE (:Format {name: 'T20I'})
CREATE (:Format {name: 'IPL'})

MERGE (sachin)-[:REPRESENTED {from: 1989, to: 2013}]->(india)
MERGE (sachin)-[:PLAYED_FOR {from: 1988, to: 2013}]->(mumbaiTeam)
MERGE (sachin)-[:PLAYED_FOR {from: 2008, to: 2013}]->(mi)
MERGE (sachin)-[:CAPTAINED {format: 'International', from: 1996, to: 2000}]->(india)

CREATE (testDebut:Record {type: 'Debut', format: 'Test', year: 1989, opponent: 'Pakistan', location: 'Karachi'})
CREATE (odiDebut:Record {type: 'Debut', format: 'ODI', year: 1989, opponent: 'Pakistan', location: 'Gujranwala'})
CREATE (testRetire:Record {type: 'Retirement', format: 'Test', year: 2013, opponent: 'West Indies', location: 'Mumbai'})
CREATE (odiRetire:Record {type: 'Retirement', format: 'ODI', year: 2012, opponent: 'Pakistan', location: 'Mirpur'})

MERGE (sachin)-[:DEBUTED_IN]->(testDebut)
MERGE (sachin)-[:DEBUTED_IN]->(odiDebut)
MERGE (sachin)-[:RETIRED_IN]->(testRetire)
MERGE (sachin)-[:RETIRED_IN]->(odiRetire)

MERGE (sachin)-[:ROLE_AS]->(batsman)
MERGE (sachin)-[:ROLE_AS]->(opener)
MERGE (sachin)-[:ROLE_AS]->(partTimeBowler)

CREATE (cwc2011:Trophy {name: 'ICC Cricket World Cup 2011', year: 2011})
MERGE (india)-[:WON]->(cwc2011)
MERGE (sachin)-[:WON]->(cwc2011)

CREATE (recMostOdiRuns:Record {type: 'CareerRecord', label: 'Most ODI runs', value: 18426, unit: 'runs'})
CREATE (recMostIntlRuns:Record {type: 'CareerRecord', label: 'Most international runs', value: 34357, unit: 'runs'})
CREATE (recHundredHundreds:Record {type: 'CareerRecord', label: '100 international centuries', value: 100, unit: 'centuries'})
CREATE (recMostTestRuns:Record {type: 'CareerRecord', label: 'Most Test runs', value: 15921, unit: 'runs'})
CREATE (recOdiDouble:Record {type: 'Milestone', label: 'First ODI double century by an Indian', value: 200, unit: 'runs', year: 2010, opponent: 'South Africa', location: 'Gwalior'})

MERGE (sachin)-[:HOLDS_RECORD]->(recMostOdiRuns)
MERGE (sachin)-[:HOLDS_RECORD]->(recMostIntlRuns)
MERGE (sachin)-[:HOLDS_RECORD]->(recHundredHundreds)
MERGE (sachin)-[:HOLDS_RECORD]->(recMostTestRuns)
MERGE (sachin)-[:HOLDS_RECORD]->(recOdiDouble)

CREATE (testStats:Record {type: 'Stats', format: 'Test', matches: 200, runs: 15921, hundreds: 51, fifties: 68, average: 53.78})
CREATE (odiStats:Record {type: 'Stats', format: 'ODI', matches: 463, runs: 18426, hundreds: 49, fifties: 96, average: 44.83})
CREATE (t20iStats:Record {type: 'Stats', format: 'T20I', matches: 1, runs: 10, hundreds: 0, fifties: 0, average: 10.0})
CREATE (iplStats:Record {type: 'Stats', format: 'IPL', matches: 78, runs: 2334, hundreds: 1, fifties: 13, average: 34.83})

MERGE (sachin)-[:FORMAT_STATS]->(testStats)
MERGE (sachin)-[:FORMAT_STATS]->(odiStats)
MERGE (sachin)-[:FORMAT_STATS]->(t20iStats)
MERGE (sachin)-[:FORMAT_STATS]->(iplStats)

MERGE (bcci)-[:GOVERNS]->(india)
MERGE (icc)-[:GOVERNS]->(bcci)

MERGE (mumbai)-[:HOME_TEAM]->(mumbaiTeam)

CREATE (achrekar:Person {name: 'Ramakant Achrekar'})
CREATE (gavaskar:Person {name: 'Sunil Gavaskar'})

MERGE (achrekar)-[:COACHED {from: 1984, to: 1990}]->(sachin)
MERGE (sachin)-[:COACHED_BY {from: 1984, to: 1990}]->(achrekar)
MERGE (gavaskar)-[:COACHED {note: 'Mentor/Inspiration'}]->(sachin)
MERGE (sachin)-[:COACHED_BY {note: 'Mentor/Inspiration'}]->(gavaskar)

RETURN 'ok' AS status
"#;

/// Statements that remove previously seeded data, one per label.
pub fn clear_statements() -> Vec<String> {
    SEED_LABELS
        .iter()
        .map(|label| format!("MATCH (n:{label}) DETACH DELETE n"))
        .collect()
}

/// Replace the demo graph: clear the seeded labels, then create everything.
pub async fn seed_graph(client: &GraphClient) -> Result<()> {
    for statement in clear_statements() {
        client
            .execute(Query::new(statement.clone()))
            .await
            .with_context(|| format!("Failed to clear seed data: {statement}"))?;
    }
    info!(labels = SEED_LABELS.len(), "Cleared previous seed data");

    let status: Option<String> = client
        .query_scalar(Query::new(SEED_CYPHER.to_string()), "status")
        .await
        .context("Failed to create seed graph")?;
    anyhow::ensure!(
        status.as_deref() == Some("ok"),
        "Seed statement did not report success"
    );

    info!("Seed graph created");
    Ok(())
}
