//! Team list for selection front-ends. Derived from the advanced stats
//! table and independent of the prediction engine.

use crate::tables::AdvancedStatsRow;

/// Sorted, de-duplicated team names.
pub fn team_names(rows: &[AdvancedStatsRow]) -> Vec<String> {
    let mut names: Vec<String> = rows.iter().map(|r| r.team.clone()).collect();
    names.sort();
    names.dedup();
    names
}

/// Names containing `query`, ignoring case. A blank query matches everything.
pub fn search<'a>(names: &'a [String], query: &str) -> Vec<&'a str> {
    let query = query.trim().to_lowercase();
    names
        .iter()
        .filter(|name| query.is_empty() || name.to_lowercase().contains(&query))
        .map(String::as_str)
        .collect()
}
