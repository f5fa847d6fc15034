use std::collections::HashMap;

use statrs::statistics::Statistics;
use tracing::debug;

use crate::constants::DEFAULT_TEMPO;
use crate::tables::AdvancedStatsRow;
use crate::team::{valid_tempo, TeamProfile};

/// Team name to profile mapping built once from the advanced stats table.
///
/// Lookups never fail: unknown names resolve to an average-team profile.
#[derive(Clone, Debug)]
pub struct FeatureIndex {
    profiles: HashMap<String, TeamProfile>,
    league_avg_tempo: f64,
}

impl FeatureIndex {
    /// Build the index. When a team appears more than once the first row wins.
    pub fn build(rows: &[AdvancedStatsRow]) -> Self {
        let league_avg_tempo = league_average_tempo(rows);

        let mut profiles = HashMap::with_capacity(rows.len());
        for row in rows {
            profiles
                .entry(row.team.clone())
                .or_insert_with(|| TeamProfile::from_row(row, league_avg_tempo));
        }

        FeatureIndex {
            profiles,
            league_avg_tempo,
        }
    }

    /// Profile for `team`, or the average-team profile if it is not in the data.
    pub fn lookup(&self, team: &str) -> TeamProfile {
        match self.profiles.get(team) {
            Some(profile) => profile.clone(),
            None => {
                debug!(team, "team not in advanced stats, using average profile");
                TeamProfile::average(team, self.league_avg_tempo)
            }
        }
    }

    pub fn contains(&self, team: &str) -> bool {
        self.profiles.contains_key(team)
    }

    /// Mean tempo across teams with a valid tempo figure.
    pub fn league_avg_tempo(&self) -> f64 {
        self.league_avg_tempo
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

fn league_average_tempo(rows: &[AdvancedStatsRow]) -> f64 {
    let tempos: Vec<f64> = rows.iter().filter_map(|r| valid_tempo(r.tempo)).collect();
    if tempos.is_empty() {
        DEFAULT_TEMPO
    } else {
        tempos.iter().mean()
    }
}
