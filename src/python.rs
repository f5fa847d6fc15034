//! Python bindings for the desktop front-end.

use std::path::PathBuf;

use pyo3::exceptions::PyIOError;
use pyo3::prelude::*;

use crate::catalog;
use crate::config::DataPaths;
use crate::error::DataError;
use crate::explain::{breakdown_text, summary_line};
use crate::margin::Location;
use crate::prediction::{MatchupPredictor, PredictionResult};
use crate::tables::DatasetTables;
use crate::win_prob::win_probability;

impl From<DataError> for PyErr {
    fn from(err: DataError) -> PyErr {
        PyIOError::new_err(err.to_string())
    }
}

/// Prediction engine plus the team list, loaded from one data directory.
#[pyclass(name = "MatchupPredictor", frozen)]
pub struct PyMatchupPredictor {
    engine: MatchupPredictor,
    teams: Vec<String>,
}

#[pymethods]
impl PyMatchupPredictor {
    /// Load the three CSV tables. Individual files can be overridden;
    /// raises IOError if any table cannot be read.
    #[new]
    #[pyo3(signature = (data_dir, results = None, ratings = None, advanced = None))]
    pub fn new(
        data_dir: PathBuf,
        results: Option<PathBuf>,
        ratings: Option<PathBuf>,
        advanced: Option<PathBuf>,
    ) -> PyResult<Self> {
        let paths = DataPaths::in_dir(data_dir).with_overrides(results, ratings, advanced);
        let tables = DatasetTables::load(&paths)?;

        Ok(PyMatchupPredictor {
            engine: MatchupPredictor::new(&tables),
            teams: catalog::team_names(&tables.advanced),
        })
    }

    /// Predict `team` vs `opponent`. Location is "H", "V" or "N".
    #[pyo3(signature = (team, opponent, location = "N"))]
    pub fn predict_matchup(&self, team: &str, opponent: &str, location: &str) -> PredictionResult {
        self.engine
            .predict_matchup(team, opponent, Location::from_code(location))
    }

    /// Sorted list of every known team.
    pub fn team_names(&self) -> Vec<String> {
        self.teams.clone()
    }

    /// Known teams whose name contains `query`, ignoring case.
    pub fn search_teams(&self, query: &str) -> Vec<String> {
        catalog::search(&self.teams, query)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    fn __len__(&self) -> usize {
        self.teams.len()
    }

    fn __repr__(&self) -> String {
        format!("MatchupPredictor({} teams)", self.teams.len())
    }
}

#[pymethods]
impl PredictionResult {
    /// Multi-line numeric breakdown of the prediction.
    pub fn breakdown(&self) -> String {
        breakdown_text(self)
    }

    fn __str__(&self) -> String {
        summary_line(self)
    }

    fn __repr__(&self) -> String {
        format!(
            "PredictionResult({:?}, {:?}, {:.1}-{:.1}, win_prob={:.4})",
            self.team, self.opponent, self.team_score, self.opponent_score, self.win_prob
        )
    }
}

/// Win probability for a capped point spread.
#[pyfunction]
#[pyo3(name = "win_probability")]
pub fn py_win_probability(final_margin_cap: f64) -> f64 {
    win_probability(final_margin_cap)
}
