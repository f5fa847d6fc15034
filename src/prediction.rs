//! Matchup prediction: ties the feature, rating, margin, totals and win
//! probability models together into one result record.

use tracing::{debug, info};

use crate::config::DataPaths;
use crate::error::Result;
use crate::features::FeatureIndex;
use crate::margin::{compute_margin, Location, MarginBreakdown};
use crate::rating::RatingIndex;
use crate::tables::DatasetTables;
use crate::team::TeamProfile;
use crate::totals::{ScoringEnvironment, TotalsBreakdown};
use crate::win_prob::{split_total, win_probability};

/// Every intermediate value behind a prediction, for reporting.
#[cfg_attr(feature = "python", pyo3::pyclass(get_all, frozen))]
#[derive(Clone, Debug, PartialEq)]
pub struct PredictionParts {
    pub team1_adjoe: f64,
    pub team1_adjde: f64,
    pub team1_barthag: f64,
    pub team1_rank: f64,
    pub team1_tempo: f64,

    pub team2_adjoe: f64,
    pub team2_adjde: f64,
    pub team2_barthag: f64,
    pub team2_rank: f64,
    pub team2_tempo: f64,

    pub offense_diff: f64,
    pub defense_diff: f64,
    pub barthag_diff: f64,
    pub rank_diff: f64,
    pub rating_diff: f64,

    pub margin_off_def: f64,
    pub margin_barth: f64,
    pub margin_rank: f64,
    pub margin_rating: f64,
    pub location_edge: f64,

    pub raw_margin: f64,
    pub final_margin_cap: f64,

    pub baseline_total: f64,
    pub tempo_total: f64,
    pub final_total_pts: f64,
}

impl PredictionParts {
    fn assemble(
        team: &TeamProfile,
        opponent: &TeamProfile,
        margin: &MarginBreakdown,
        totals: &TotalsBreakdown,
    ) -> Self {
        PredictionParts {
            team1_adjoe: team.adjoe,
            team1_adjde: team.adjde,
            team1_barthag: team.barthag,
            team1_rank: team.rank as f64,
            team1_tempo: team.tempo,
            team2_adjoe: opponent.adjoe,
            team2_adjde: opponent.adjde,
            team2_barthag: opponent.barthag,
            team2_rank: opponent.rank as f64,
            team2_tempo: opponent.tempo,
            offense_diff: margin.offense_diff,
            defense_diff: margin.defense_diff,
            barthag_diff: margin.barthag_diff,
            rank_diff: margin.rank_diff,
            rating_diff: margin.rating_diff,
            margin_off_def: margin.margin_off_def,
            margin_barth: margin.margin_barth,
            margin_rank: margin.margin_rank,
            margin_rating: margin.margin_rating,
            location_edge: margin.location_edge,
            raw_margin: margin.raw_margin,
            final_margin_cap: margin.final_margin_cap,
            baseline_total: totals.baseline_total,
            tempo_total: totals.tempo_total,
            final_total_pts: totals.final_total_pts,
        }
    }
}

/// Predicted outcome of one hypothetical game.
#[cfg_attr(feature = "python", pyo3::pyclass(get_all, frozen))]
#[derive(Clone, Debug, PartialEq)]
pub struct PredictionResult {
    pub team: String,
    pub opponent: String,
    pub team_score: f64,
    pub opponent_score: f64,
    /// Probability of `team` winning, in (0, 1)
    pub win_prob: f64,
    pub parts: PredictionParts,
}

impl PredictionResult {
    /// Predicted spread, team minus opponent.
    pub fn margin(&self) -> f64 {
        self.parts.final_margin_cap
    }

    /// Name of the team favored to win; the first team on a pick'em.
    pub fn favorite(&self) -> &str {
        if self.margin() >= 0.0 {
            &self.team
        } else {
            &self.opponent
        }
    }
}

/// The prediction engine. Holds read-only indexes built once from the tables,
/// so it can be shared freely across threads.
#[derive(Clone, Debug)]
pub struct MatchupPredictor {
    features: FeatureIndex,
    ratings: RatingIndex,
    scoring: ScoringEnvironment,
}

impl MatchupPredictor {
    /// Build the engine from already-parsed tables.
    pub fn new(tables: &DatasetTables) -> Self {
        let features = FeatureIndex::build(&tables.advanced);
        let ratings = RatingIndex::build(&tables.ratings);
        let scoring = ScoringEnvironment::build(&tables.results, features.league_avg_tempo());

        info!(
            teams = features.len(),
            rating_pairs = ratings.len(),
            league_avg_total = scoring.league_avg_total(),
            league_avg_tempo = features.league_avg_tempo(),
            "matchup predictor ready"
        );

        MatchupPredictor {
            features,
            ratings,
            scoring,
        }
    }

    /// Load the three tables from disk and build the engine.
    pub fn load(paths: &DataPaths) -> Result<Self> {
        let tables = DatasetTables::load(paths)?;
        Ok(Self::new(&tables))
    }

    /// Profile used for `team`, the average profile if it is unknown.
    pub fn lookup(&self, team: &str) -> TeamProfile {
        self.features.lookup(team)
    }

    /// Rating differential from `team`'s perspective.
    pub fn rating_diff(&self, team: &str, opponent: &str) -> f64 {
        self.ratings.rating_diff(team, opponent)
    }

    /// Capped point spread of `team` over `opponent`, with every step.
    pub fn compute_margin(&self, team: &str, opponent: &str, location: Location) -> MarginBreakdown {
        let t1 = self.features.lookup(team);
        let t2 = self.features.lookup(opponent);
        compute_margin(&t1, &t2, self.ratings.rating_diff(team, opponent), location)
    }

    /// Predicted combined score for the matchup.
    pub fn compute_totals(&self, team: &str, opponent: &str) -> TotalsBreakdown {
        let t1 = self.features.lookup(team);
        let t2 = self.features.lookup(opponent);
        self.scoring.compute_totals(&t1, &t2)
    }

    /// Predict `team` vs `opponent` at `location`.
    ///
    /// Never fails: unknown teams play as an average team and missing
    /// ratings count as even.
    pub fn predict_matchup(&self, team: &str, opponent: &str, location: Location) -> PredictionResult {
        let t1 = self.features.lookup(team);
        let t2 = self.features.lookup(opponent);
        let rating_diff = self.ratings.rating_diff(team, opponent);

        let margin = compute_margin(&t1, &t2, rating_diff, location);
        let totals = self.scoring.compute_totals(&t1, &t2);
        let win_prob = win_probability(margin.final_margin_cap);
        let (team_score, opponent_score) = split_total(totals.final_total_pts, margin.final_margin_cap);

        debug!(
            team,
            opponent,
            %location,
            margin = margin.final_margin_cap,
            total = totals.final_total_pts,
            win_prob,
            "predicted matchup"
        );

        PredictionResult {
            team: team.to_string(),
            opponent: opponent.to_string(),
            team_score,
            opponent_score,
            win_prob,
            parts: PredictionParts::assemble(&t1, &t2, &margin, &totals),
        }
    }

    pub fn features(&self) -> &FeatureIndex {
        &self.features
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const RESULTS: &str = "team,opponent,teamscore,oppscore\n\
        Alpha,Beta,80,70\n\
        Beta,Gamma,66,64\n";

    const RATINGS: &str = "team,opponent,rating_team,rating_opponent\n\
        Beta,Gamma,0.55,0.45\n";

    const ADVANCED: &str = "Team,ADJOE,ADJDE,BARTHAG,ADJ_T,rk,SEED\n\
        Alpha,115,95,0.80,70,5,2\n\
        Beta,105,105,0.40,65,120,\n\
        Gamma,108,101,0.55,67,60,\n";

    fn predictor() -> MatchupPredictor {
        let tables = DatasetTables::from_readers(RESULTS.as_bytes(), RATINGS.as_bytes(), ADVANCED.as_bytes()).unwrap();
        MatchupPredictor::new(&tables)
    }

    #[test]
    fn test_capped_scenario() {
        let p = predictor().predict_matchup("Alpha", "Beta", Location::Neutral);
        assert_relative_eq!(p.parts.raw_margin, 40.75, epsilon = 1e-9);
        assert_eq!(p.parts.final_margin_cap, 30.0);
        assert_eq!(p.parts.rating_diff, 0.0);
        assert_relative_eq!(p.win_prob, 1.0 / (1.0 + (-30.0f64 / 7.0).exp()), epsilon = 1e-12);
        assert_eq!(p.favorite(), "Alpha");
    }

    #[test]
    fn test_scores_split_total() {
        let p = predictor().predict_matchup("Alpha", "Beta", Location::Neutral);
        assert_relative_eq!(p.team_score + p.opponent_score, p.parts.final_total_pts, epsilon = 1e-9);
        assert_relative_eq!(p.team_score - p.opponent_score, 30.0, epsilon = 1e-9);
    }

    #[test]
    fn test_parts_carry_raw_stats() {
        let p = predictor().predict_matchup("Alpha", "Beta", Location::Home);
        assert_eq!(p.parts.team1_adjoe, 115.0);
        assert_eq!(p.parts.team2_adjde, 105.0);
        assert_eq!(p.parts.team1_rank, 5.0);
        assert_eq!(p.parts.team2_tempo, 65.0);
        assert_eq!(p.parts.location_edge, 3.5);
    }

    #[test]
    fn test_rating_table_used_in_both_orders() {
        let engine = predictor();
        let fwd = engine.predict_matchup("Beta", "Gamma", Location::Neutral);
        let rev = engine.predict_matchup("Gamma", "Beta", Location::Neutral);
        assert_relative_eq!(fwd.parts.rating_diff, 0.1, epsilon = 1e-12);
        assert_relative_eq!(rev.parts.rating_diff, -0.1, epsilon = 1e-12);
        assert_relative_eq!(fwd.parts.raw_margin, -rev.parts.raw_margin, epsilon = 1e-9);
        assert_relative_eq!(fwd.win_prob + rev.win_prob, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_unknown_teams_never_fail() {
        let engine = predictor();
        let p = engine.predict_matchup("Nowhere St", "Alpha", Location::Neutral);
        assert_eq!(p.parts.team1_adjoe, 110.0);
        assert_eq!(p.parts.team1_rank, 180.0);
        assert!(p.win_prob > 0.0 && p.win_prob < 1.0);

        let both = engine.predict_matchup("Ghost A", "Ghost B", Location::Neutral);
        assert_eq!(both.parts.raw_margin, 0.0);
        assert_eq!(both.win_prob, 0.5);
    }

    #[test]
    fn test_prediction_is_idempotent() {
        let engine = predictor();
        let a = engine.predict_matchup("Alpha", "Gamma", Location::Neutral);
        let b = engine.predict_matchup("Alpha", "Gamma", Location::Neutral);
        assert_eq!(a, b);
    }

    #[test]
    fn test_component_accessors_match_prediction() {
        let engine = predictor();
        let p = engine.predict_matchup("Gamma", "Beta", Location::Visitor);
        let margin = engine.compute_margin("Gamma", "Beta", Location::Visitor);
        let totals = engine.compute_totals("Gamma", "Beta");
        assert_eq!(margin.final_margin_cap, p.parts.final_margin_cap);
        assert_eq!(totals.final_total_pts, p.parts.final_total_pts);
        assert_eq!(engine.rating_diff("Gamma", "Beta"), p.parts.rating_diff);
    }
}
