use std::collections::HashMap;

use tracing::debug;

use crate::tables::RatingEdge;

/// Directed pairwise rating differentials.
///
/// Each key is stored in the direction it appears in the table. Lookups
/// try the requested direction first, then the reverse with the sign
/// flipped, so a pair stored only one way answers from either side.
#[derive(Clone, Debug, Default)]
pub struct RatingIndex {
    edges: HashMap<(String, String), Option<f64>>,
}

impl RatingIndex {
    /// Build the index. When the same directed pair appears twice the first row wins.
    pub fn build(edges: &[RatingEdge]) -> Self {
        let mut map = HashMap::with_capacity(edges.len());
        for edge in edges {
            map.entry((edge.team.clone(), edge.opponent.clone()))
                .or_insert_with(|| edge.diff());
        }
        RatingIndex { edges: map }
    }

    /// Rating differential from `team`'s perspective (positive = team favored).
    ///
    /// Returns 0.0 when neither direction is present, or when the matching
    /// row has no usable rating values.
    pub fn rating_diff(&self, team: &str, opponent: &str) -> f64 {
        if let Some(diff) = self.edges.get(&(team.to_string(), opponent.to_string())) {
            return diff.unwrap_or(0.0);
        }
        if let Some(diff) = self.edges.get(&(opponent.to_string(), team.to_string())) {
            return diff.map(|d| -d).unwrap_or(0.0);
        }
        debug!(team, opponent, "no pairwise rating, treating as neutral");
        0.0
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
