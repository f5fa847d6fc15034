use std::path::{Path, PathBuf};

/// Default file name of the game results table
pub const RESULTS_FILE: &str = "2025_cbb_results.csv";

/// Default file name of the pairwise ratings table
pub const RATINGS_FILE: &str = "ncaa_wp_matrix_2025.csv";

/// Default file name of the advanced stats table
pub const ADVANCED_FILE: &str = "cbb25.csv";

/// Locations of the three CSV tables the engine is built from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataPaths {
    pub results: PathBuf,
    pub ratings: PathBuf,
    pub advanced: PathBuf,
}

impl DataPaths {
    /// All three tables under `dir` with their default file names.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        DataPaths {
            results: dir.join(RESULTS_FILE),
            ratings: dir.join(RATINGS_FILE),
            advanced: dir.join(ADVANCED_FILE),
        }
    }

    /// Replace individual table paths, leaving the rest untouched.
    pub fn with_overrides(
        mut self,
        results: Option<PathBuf>,
        ratings: Option<PathBuf>,
        advanced: Option<PathBuf>,
    ) -> Self {
        if let Some(path) = results {
            self.results = path;
        }
        if let Some(path) = ratings {
            self.ratings = path;
        }
        if let Some(path) = advanced {
            self.advanced = path;
        }
        self
    }
}
