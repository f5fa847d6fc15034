use std::fmt;

use thiserror::Error;

/// Which of the three input tables an error or log line refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TableKind {
    Results,
    Ratings,
    AdvancedStats,
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TableKind::Results => "results",
            TableKind::Ratings => "ratings",
            TableKind::AdvancedStats => "advanced stats",
        };
        f.write_str(name)
    }
}

/// A dataset could not be loaded. The engine is unusable until it is fixed.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("{table} table unavailable ({origin}): {source}")]
    Unavailable {
        table: TableKind,
        origin: String,
        source: csv::Error,
    },

    #[error("{table} table has no recognized team column (expected one of Team, TEAM, team, TeamName, School)")]
    NoTeamColumn { table: TableKind },
}

impl DataError {
    pub fn table(&self) -> TableKind {
        match self {
            DataError::Unavailable { table, .. } | DataError::NoTeamColumn { table } => *table,
        }
    }
}

pub type Result<T> = std::result::Result<T, DataError>;
