use std::collections::HashMap;

use statrs::statistics::Statistics;

use crate::constants::{DEFAULT_LEAGUE_TOTAL, MAX_TOTAL_POINTS, MIN_TOTAL_POINTS};
use crate::tables::GameResult;
use crate::team::TeamProfile;

/// Combined-score estimate for one matchup.
#[derive(Clone, Debug, PartialEq)]
pub struct TotalsBreakdown {
    /// League and team scoring averages blended
    pub baseline_total: f64,
    /// Baseline scaled by the matchup's pace
    pub tempo_total: f64,
    /// Tempo total clamped to the plausible range, the default league total if it is NaN
    pub final_total_pts: f64,
}

/// League and per-team scoring averages derived from the results table.
#[derive(Clone, Debug)]
pub struct ScoringEnvironment {
    league_avg_total: f64,
    team_avg_totals: HashMap<String, f64>,
    league_avg_tempo: f64,
}

impl ScoringEnvironment {
    /// Build from game results. A team's games are every row naming it as
    /// either `team` or `opponent`; rows missing a score are ignored.
    pub fn build(results: &[GameResult], league_avg_tempo: f64) -> Self {
        let mut per_team: HashMap<String, Vec<f64>> = HashMap::new();
        let mut all_totals = Vec::with_capacity(results.len());

        for game in results {
            let Some(total) = game.total_points() else {
                continue;
            };
            all_totals.push(total);
            per_team.entry(game.team.clone()).or_default().push(total);
            if game.opponent != game.team {
                per_team.entry(game.opponent.clone()).or_default().push(total);
            }
        }

        let league_avg_total = if all_totals.is_empty() {
            DEFAULT_LEAGUE_TOTAL
        } else {
            all_totals.iter().mean()
        };

        let team_avg_totals = per_team
            .into_iter()
            .map(|(team, totals)| (team, totals.iter().mean()))
            .collect();

        ScoringEnvironment {
            league_avg_total,
            team_avg_totals,
            league_avg_tempo,
        }
    }

    pub fn league_avg_total(&self) -> f64 {
        self.league_avg_total
    }

    /// Historical average combined score in games involving `team`.
    pub fn team_avg_total(&self, team: &str) -> Option<f64> {
        self.team_avg_totals.get(team).copied()
    }

    /// Predict the combined score of `team` vs `opponent`.
    pub fn compute_totals(&self, team: &TeamProfile, opponent: &TeamProfile) -> TotalsBreakdown {
        let mut inputs = vec![self.league_avg_total];
        inputs.extend(self.team_avg_total(&team.name));
        inputs.extend(self.team_avg_total(&opponent.name));
        let baseline_total = inputs.iter().mean();

        let pace = (team.tempo + opponent.tempo) / 2.0;
        let tempo_total = baseline_total * pace / self.league_avg_tempo;

        let final_total_pts = if tempo_total.is_nan() {
            DEFAULT_LEAGUE_TOTAL
        } else {
            tempo_total.clamp(MIN_TOTAL_POINTS, MAX_TOTAL_POINTS)
        };

        TotalsBreakdown {
            baseline_total,
            tempo_total,
            final_total_pts,
        }
    }
}
