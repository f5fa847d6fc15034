//! Hoops Core - College basketball matchup prediction engine.
//!
//! Turns per-team advanced stats, pairwise ratings and game results into a
//! predicted spread, total score and win probability for a hypothetical
//! game. Python bindings via PyO3 are available behind the `python` feature.

#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod explain;
pub mod features;
pub mod margin;
pub mod prediction;
#[cfg(feature = "python")]
pub mod python;
pub mod rating;
pub mod tables;
pub mod team;
pub mod totals;
pub mod win_prob;

pub use config::DataPaths;
pub use constants::{HOME_EDGE, MARGIN_CAP, MARGIN_SCALE, MAX_TOTAL_POINTS, MIN_TOTAL_POINTS};
pub use error::{DataError, TableKind};
pub use explain::{breakdown_text, summary_line};
pub use features::FeatureIndex;
pub use margin::{compute_margin, Location, MarginBreakdown};
pub use prediction::{MatchupPredictor, PredictionParts, PredictionResult};
pub use rating::RatingIndex;
pub use tables::{AdvancedStatsRow, DatasetTables, GameResult, RatingEdge};
pub use team::TeamProfile;
pub use totals::{ScoringEnvironment, TotalsBreakdown};
pub use win_prob::{split_total, win_probability};

/// Python module definition
#[cfg(feature = "python")]
#[pymodule]
fn hoops_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Classes
    m.add_class::<python::PyMatchupPredictor>()?;
    m.add_class::<PredictionResult>()?;
    m.add_class::<PredictionParts>()?;
    m.add_class::<TeamProfile>()?;

    // Functions
    m.add_function(wrap_pyfunction!(python::py_win_probability, m)?)?;

    // Constants
    m.add("HOME_EDGE", HOME_EDGE)?;
    m.add("MARGIN_CAP", MARGIN_CAP)?;
    m.add("MARGIN_SCALE", MARGIN_SCALE)?;
    m.add("MIN_TOTAL_POINTS", MIN_TOTAL_POINTS)?;
    m.add("MAX_TOTAL_POINTS", MAX_TOTAL_POINTS)?;

    Ok(())
}
