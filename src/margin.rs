use std::fmt;
use std::str::FromStr;

use crate::constants::{
    COEF_BARTHAG, COEF_DEFENSE, COEF_OFFENSE, COEF_RANK, COEF_RATING, HOME_EDGE, MARGIN_CAP,
};
use crate::team::TeamProfile;

/// Where the game is played, from the first team's point of view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Location {
    Home,
    Visitor,
    #[default]
    Neutral,
}

impl Location {
    /// Parse a location code. Exactly `H` and `V` are home and away;
    /// anything else is a neutral site.
    pub fn from_code(code: &str) -> Self {
        match code {
            "H" => Location::Home,
            "V" => Location::Visitor,
            _ => Location::Neutral,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Location::Home => "H",
            Location::Visitor => "V",
            Location::Neutral => "N",
        }
    }

    /// Points added to the first team's margin.
    pub fn edge(self) -> f64 {
        match self {
            Location::Home => HOME_EDGE,
            Location::Visitor => -HOME_EDGE,
            Location::Neutral => 0.0,
        }
    }
}

impl FromStr for Location {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Location::from_code(s))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Every step of the spread calculation, all from the first team's perspective.
#[derive(Clone, Debug, PartialEq)]
pub struct MarginBreakdown {
    pub offense_diff: f64,
    pub defense_diff: f64,
    pub barthag_diff: f64,
    pub rank_diff: f64,
    pub rating_diff: f64,

    /// Offense and defense contributions combined
    pub margin_off_def: f64,
    pub margin_barth: f64,
    pub margin_rank: f64,
    pub margin_rating: f64,
    pub location_edge: f64,

    pub raw_margin: f64,
    /// `raw_margin` clamped to +/- MARGIN_CAP, 0.0 if it is NaN
    pub final_margin_cap: f64,
}

/// Predicted point spread of `team` over `opponent`.
///
/// Lower ADJDE and lower rank are better, so those differences are taken
/// opponent minus team.
pub fn compute_margin(
    team: &TeamProfile,
    opponent: &TeamProfile,
    rating_diff: f64,
    location: Location,
) -> MarginBreakdown {
    let offense_diff = team.adjoe - opponent.adjoe;
    let defense_diff = opponent.adjde - team.adjde;
    let barthag_diff = team.barthag - opponent.barthag;
    let rank_diff = opponent.rank as f64 - team.rank as f64;

    let margin_off_def = COEF_OFFENSE * offense_diff + COEF_DEFENSE * defense_diff;
    let margin_barth = COEF_BARTHAG * barthag_diff;
    let margin_rank = COEF_RANK * rank_diff;
    let margin_rating = COEF_RATING * rating_diff;
    let location_edge = location.edge();

    let raw_margin = margin_off_def + margin_barth + margin_rank + margin_rating + location_edge;

    MarginBreakdown {
        offense_diff,
        defense_diff,
        barthag_diff,
        rank_diff,
        rating_diff,
        margin_off_def,
        margin_barth,
        margin_rank,
        margin_rating,
        location_edge,
        raw_margin,
        final_margin_cap: cap_margin(raw_margin),
    }
}

/// Clamp a spread to +/- MARGIN_CAP. An undefined spread counts as even.
fn cap_margin(raw_margin: f64) -> f64 {
    if raw_margin.is_nan() {
        0.0
    } else {
        raw_margin.clamp(-MARGIN_CAP, MARGIN_CAP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn team(name: &str, adjoe: f64, adjde: f64, barthag: f64, rank: u32, tempo: f64) -> TeamProfile {
        TeamProfile {
            name: name.to_string(),
            adjoe,
            adjde,
            barthag,
            tempo,
            rank,
            seed: 16,
        }
    }

    #[test]
    fn test_location_codes() {
        assert_eq!(Location::from_code("H"), Location::Home);
        assert_eq!(Location::from_code("V"), Location::Visitor);
        assert_eq!(Location::from_code("N"), Location::Neutral);
        assert_eq!(Location::from_code("X"), Location::Neutral);
        assert_eq!(Location::from_code(""), Location::Neutral);
        assert_eq!(Location::from_code("h"), Location::Neutral);
        assert_eq!(Location::from_code("v"), Location::Neutral);
        assert_eq!(Location::from_code(" H"), Location::Neutral);
        assert_eq!("H".parse::<Location>().unwrap(), Location::Home);
        assert_eq!(Location::Visitor.to_string(), "V");
    }

    #[test]
    fn test_strong_vs_weak_is_capped() {
        let a = team("A", 115.0, 95.0, 0.80, 5, 70.0);
        let b = team("B", 105.0, 105.0, 0.40, 120, 65.0);

        let m = compute_margin(&a, &b, 0.0, Location::Neutral);
        assert_relative_eq!(m.offense_diff, 10.0, epsilon = 1e-12);
        assert_relative_eq!(m.defense_diff, 10.0, epsilon = 1e-12);
        assert_relative_eq!(m.barthag_diff, 0.40, epsilon = 1e-12);
        assert_relative_eq!(m.rank_diff, 115.0, epsilon = 1e-12);
        assert_eq!(m.rating_diff, 0.0);
        assert_relative_eq!(m.margin_off_def, 3.2, epsilon = 1e-9);
        assert_relative_eq!(m.margin_barth, 8.8, epsilon = 1e-9);
        assert_relative_eq!(m.margin_rank, 28.75, epsilon = 1e-9);
        assert_relative_eq!(m.raw_margin, 40.75, epsilon = 1e-9);
        assert_eq!(m.final_margin_cap, 30.0);
    }

    #[test]
    fn test_rating_component() {
        let a = team("A", 110.0, 100.0, 0.5, 180, 67.0);
        let b = team("B", 110.0, 100.0, 0.5, 180, 67.0);

        let m = compute_margin(&a, &b, 0.1, Location::Neutral);
        assert_relative_eq!(m.margin_rating, 5.5, epsilon = 1e-9);
        assert_relative_eq!(m.raw_margin, 5.5, epsilon = 1e-9);
        assert_relative_eq!(m.final_margin_cap, 5.5, epsilon = 1e-9);
    }

    #[test]
    fn test_home_and_visitor_shift() {
        let a = team("A", 112.0, 98.0, 0.6, 40, 67.0);
        let b = team("B", 109.0, 101.0, 0.5, 70, 67.0);

        let neutral = compute_margin(&a, &b, 0.02, Location::Neutral);
        let home = compute_margin(&a, &b, 0.02, Location::Home);
        let away = compute_margin(&a, &b, 0.02, Location::Visitor);

        assert_relative_eq!(home.raw_margin - neutral.raw_margin, 3.5, epsilon = 1e-9);
        assert_relative_eq!(neutral.raw_margin - away.raw_margin, 3.5, epsilon = 1e-9);
        assert_eq!(home.location_edge, 3.5);
        assert_eq!(away.location_edge, -3.5);
    }

    #[test]
    fn test_lopsided_negative_is_capped() {
        let a = team("A", 95.0, 115.0, 0.05, 360, 67.0);
        let b = team("B", 125.0, 88.0, 0.98, 1, 67.0);

        let m = compute_margin(&a, &b, -0.5, Location::Visitor);
        assert!(m.raw_margin < -30.0);
        assert_eq!(m.final_margin_cap, -30.0);
    }

    #[test]
    fn test_mirror_matchup_negates_margin() {
        let a = team("A", 112.0, 98.0, 0.6, 40, 67.0);
        let b = team("B", 109.0, 101.0, 0.5, 70, 67.0);

        let ab = compute_margin(&a, &b, 0.03, Location::Neutral);
        let ba = compute_margin(&b, &a, -0.03, Location::Neutral);
        assert_relative_eq!(ab.raw_margin, -ba.raw_margin, epsilon = 1e-9);
    }

    #[test]
    fn test_overflowing_inputs_stay_capped() {
        let a = team("A", f64::MAX, f64::MAX, 0.5, 180, 67.0);
        let b = team("B", -f64::MAX, -f64::MAX, 0.5, 180, 67.0);

        let m = compute_margin(&a, &b, 0.0, Location::Neutral);
        assert!(m.raw_margin.is_nan());
        assert_eq!(m.final_margin_cap, 0.0);

        let even = team("C", 110.0, 100.0, 0.5, 180, 67.0);
        let one_sided = compute_margin(&even, &even, f64::INFINITY, Location::Neutral);
        assert_eq!(one_sided.raw_margin, f64::INFINITY);
        assert_eq!(one_sided.final_margin_cap, 30.0);
    }

    proptest! {
        #[test]
        fn prop_final_margin_within_cap(
            adjoe in 60.0f64..160.0,
            adjde in 60.0f64..160.0,
            barthag in 0.0f64..=1.0,
            rank in 1u32..400,
            rating in -5.0f64..5.0,
            loc in prop::sample::select(vec![Location::Home, Location::Visitor, Location::Neutral]),
        ) {
            let a = team("A", adjoe, adjde, barthag, rank, 67.0);
            let b = team("B", 110.0, 100.0, 0.5, 180, 67.0);
            let m = compute_margin(&a, &b, rating, loc);
            prop_assert!(m.final_margin_cap >= -30.0 && m.final_margin_cap <= 30.0);
        }
    }
}
