use crate::constants::{
    DEFAULT_ADJDE, DEFAULT_ADJOE, DEFAULT_BARTHAG, DEFAULT_RANK, DEFAULT_SEED, MAX_EFFICIENCY,
};
use crate::tables::AdvancedStatsRow;

/// Advanced statistical profile of one team.
///
/// Every field is concrete: missing or invalid source values have already
/// been replaced by the average-team defaults.
#[cfg_attr(feature = "python", pyo3::pyclass(get_all, frozen))]
#[derive(Clone, Debug, PartialEq)]
pub struct TeamProfile {
    pub name: String,

    /// Adjusted offensive efficiency (points scored per 100 possessions)
    pub adjoe: f64,

    /// Adjusted defensive efficiency (points allowed per 100 possessions, lower is better)
    pub adjde: f64,

    /// Power rating in [0, 1]
    pub barthag: f64,

    /// Expected possessions per game
    pub tempo: f64,

    /// Ordinal strength, 1 = best
    pub rank: u32,

    /// Tournament seed, 16 for unseeded teams
    pub seed: u8,
}

impl TeamProfile {
    /// Synthetic profile of an average team, for names absent from the data.
    pub fn average(name: &str, league_tempo: f64) -> Self {
        TeamProfile {
            name: name.to_string(),
            adjoe: DEFAULT_ADJOE,
            adjde: DEFAULT_ADJDE,
            barthag: DEFAULT_BARTHAG,
            tempo: league_tempo,
            rank: DEFAULT_RANK,
            seed: DEFAULT_SEED,
        }
    }

    /// Resolve a parsed row, filling missing or out-of-range values with defaults.
    pub fn from_row(row: &AdvancedStatsRow, league_tempo: f64) -> Self {
        TeamProfile {
            name: row.team.clone(),
            adjoe: valid_efficiency(row.adjoe).unwrap_or(DEFAULT_ADJOE),
            adjde: valid_efficiency(row.adjde).unwrap_or(DEFAULT_ADJDE),
            barthag: row
                .barthag
                .filter(|b| (0.0..=1.0).contains(b))
                .unwrap_or(DEFAULT_BARTHAG),
            tempo: valid_tempo(row.tempo).unwrap_or(league_tempo),
            rank: row
                .rank
                .filter(|r| *r >= 1.0)
                .map(|r| r.round() as u32)
                .unwrap_or(DEFAULT_RANK),
            seed: row
                .seed
                .filter(|s| (1.0..=16.0).contains(s))
                .map(|s| s.round() as u8)
                .unwrap_or(DEFAULT_SEED),
        }
    }
}

/// Efficiencies are points per 100 possessions and must lie in (0, MAX_EFFICIENCY].
pub fn valid_efficiency(efficiency: Option<f64>) -> Option<f64> {
    efficiency.filter(|e| *e > 0.0 && *e <= MAX_EFFICIENCY)
}

/// Tempo figures must be strictly positive to be usable.
pub fn valid_tempo(tempo: Option<f64>) -> Option<f64> {
    tempo.filter(|t| *t > 0.0)
}
