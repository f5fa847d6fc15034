//! CSV loading for the three input tables.
//!
//! Tables are parsed once into typed rows. Numeric cells are coerced
//! leniently: anything that is not a finite number becomes `None` and is
//! resolved to a default by whichever model consumes it.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{Reader, ReaderBuilder, StringRecord};
use tracing::{info, warn};

use crate::config::DataPaths;
use crate::error::{DataError, Result, TableKind};

/// Accepted names for the team column of the advanced stats table, in priority order.
pub const TEAM_COLUMNS: [&str; 5] = ["Team", "TEAM", "team", "TeamName", "School"];

/// Parse a cell as a number. Blank, unparsable and non-finite cells are missing.
pub fn parse_numeric(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// One played game, from `team`'s perspective.
#[derive(Clone, Debug, PartialEq)]
pub struct GameResult {
    pub team: String,
    pub opponent: String,
    pub teamscore: Option<f64>,
    pub oppscore: Option<f64>,
}

impl GameResult {
    /// Combined score, if both scores are known.
    pub fn total_points(&self) -> Option<f64> {
        Some(self.teamscore? + self.oppscore?)
    }

    /// Team score minus opponent score, if both are known.
    pub fn margin(&self) -> Option<f64> {
        Some(self.teamscore? - self.oppscore?)
    }
}

/// A directed pairwise rating record.
#[derive(Clone, Debug, PartialEq)]
pub struct RatingEdge {
    pub team: String,
    pub opponent: String,
    pub rating_team: Option<f64>,
    pub rating_opponent: Option<f64>,
}

impl RatingEdge {
    /// `rating_team - rating_opponent`, if both are known.
    pub fn diff(&self) -> Option<f64> {
        Some(self.rating_team? - self.rating_opponent?)
    }
}

/// One row of the advanced stats table, before defaults are applied.
#[derive(Clone, Debug, PartialEq)]
pub struct AdvancedStatsRow {
    pub team: String,
    pub adjoe: Option<f64>,
    pub adjde: Option<f64>,
    pub barthag: Option<f64>,
    pub tempo: Option<f64>,
    /// From the `rk` column when the table has one, otherwise `RK`
    pub rank: Option<f64>,
    pub seed: Option<f64>,
}

/// The three input tables, already parsed.
#[derive(Clone, Debug, Default)]
pub struct DatasetTables {
    pub results: Vec<GameResult>,
    pub ratings: Vec<RatingEdge>,
    pub advanced: Vec<AdvancedStatsRow>,
}

impl DatasetTables {
    /// Load all three tables from disk. Fails fast on the first unreadable table.
    pub fn load(paths: &DataPaths) -> Result<Self> {
        let results = RawTable::from_path(TableKind::Results, &paths.results)?;
        let ratings = RawTable::from_path(TableKind::Ratings, &paths.ratings)?;
        let advanced = RawTable::from_path(TableKind::AdvancedStats, &paths.advanced)?;

        Ok(DatasetTables {
            results: results.game_results(),
            ratings: ratings.rating_edges(),
            advanced: advanced.advanced_stats()?,
        })
    }

    /// Load all three tables from in-memory CSV sources.
    pub fn from_readers<A: Read, B: Read, C: Read>(results: A, ratings: B, advanced: C) -> Result<Self> {
        let results = RawTable::from_reader(TableKind::Results, results)?;
        let ratings = RawTable::from_reader(TableKind::Ratings, ratings)?;
        let advanced = RawTable::from_reader(TableKind::AdvancedStats, advanced)?;

        Ok(DatasetTables {
            results: results.game_results(),
            ratings: ratings.rating_edges(),
            advanced: advanced.advanced_stats()?,
        })
    }
}

/// Header index plus untyped records.
struct RawTable {
    table: TableKind,
    columns: HashMap<String, usize>,
    rows: Vec<StringRecord>,
}

impl RawTable {
    fn from_path(table: TableKind, path: &Path) -> Result<Self> {
        let origin = path.display().to_string();
        let reader = ReaderBuilder::new()
            .flexible(true)
            .from_path(path)
            .map_err(|source| DataError::Unavailable {
                table,
                origin: origin.clone(),
                source,
            })?;
        Self::read::<File>(table, &origin, reader)
    }

    fn from_reader<R: Read>(table: TableKind, source: R) -> Result<Self> {
        let reader = ReaderBuilder::new().flexible(true).from_reader(source);
        Self::read(table, "<reader>", reader)
    }

    fn read<R: Read>(table: TableKind, origin: &str, mut reader: Reader<R>) -> Result<Self> {
        let unavailable = |source| DataError::Unavailable {
            table,
            origin: origin.to_string(),
            source,
        };

        let headers = reader.headers().map_err(unavailable)?.clone();
        let mut columns = HashMap::new();
        for (idx, name) in headers.iter().enumerate() {
            columns.entry(name.trim().to_string()).or_insert(idx);
        }

        let rows = reader
            .records()
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(unavailable)?;

        info!(%table, origin, rows = rows.len(), "loaded table");
        Ok(RawTable { table, columns, rows })
    }

    fn column(&self, name: &str) -> Option<usize> {
        self.columns.get(name).copied()
    }

    /// Index of a column the table should have; logs when it is absent.
    fn expect_column(&self, name: &str) -> Option<usize> {
        let idx = self.column(name);
        if idx.is_none() {
            warn!(table = %self.table, column = name, "column missing, values default");
        }
        idx
    }

    fn game_results(&self) -> Vec<GameResult> {
        let (Some(team), Some(opponent)) = (self.expect_column("team"), self.expect_column("opponent")) else {
            return Vec::new();
        };
        let teamscore = self.expect_column("teamscore");
        let oppscore = self.expect_column("oppscore");

        self.rows
            .iter()
            .filter_map(|row| {
                Some(GameResult {
                    team: text(row, Some(team))?,
                    opponent: text(row, Some(opponent))?,
                    teamscore: numeric(row, teamscore),
                    oppscore: numeric(row, oppscore),
                })
            })
            .collect()
    }

    fn rating_edges(&self) -> Vec<RatingEdge> {
        let (Some(team), Some(opponent)) = (self.expect_column("team"), self.expect_column("opponent")) else {
            return Vec::new();
        };
        let rating_team = self.expect_column("rating_team");
        let rating_opponent = self.expect_column("rating_opponent");

        self.rows
            .iter()
            .filter_map(|row| {
                Some(RatingEdge {
                    team: text(row, Some(team))?,
                    opponent: text(row, Some(opponent))?,
                    rating_team: numeric(row, rating_team),
                    rating_opponent: numeric(row, rating_opponent),
                })
            })
            .collect()
    }

    fn advanced_stats(&self) -> Result<Vec<AdvancedStatsRow>> {
        let team = TEAM_COLUMNS
            .iter()
            .find_map(|name| self.column(name))
            .ok_or(DataError::NoTeamColumn { table: self.table })?;

        let adjoe = self.expect_column("ADJOE");
        let adjde = self.expect_column("ADJDE");
        let barthag = self.expect_column("BARTHAG");
        let tempo = self.expect_column("ADJ_T");
        let rank = self.column("rk").or_else(|| self.column("RK"));
        if rank.is_none() {
            warn!(table = %self.table, "no rk/RK column, ranks default");
        }
        let seed = self.column("SEED");

        Ok(self
            .rows
            .iter()
            .filter_map(|row| {
                Some(AdvancedStatsRow {
                    team: text(row, Some(team))?,
                    adjoe: numeric(row, adjoe),
                    adjde: numeric(row, adjde),
                    barthag: numeric(row, barthag),
                    tempo: numeric(row, tempo),
                    rank: numeric(row, rank),
                    seed: numeric(row, seed),
                })
            })
            .collect())
    }
}

/// Non-blank text cell, kept verbatim for exact-match lookups.
fn text(row: &StringRecord, col: Option<usize>) -> Option<String> {
    let cell = row.get(col?)?;
    if cell.trim().is_empty() {
        None
    } else {
        Some(cell.to_string())
    }
}

fn numeric(row: &StringRecord, col: Option<usize>) -> Option<f64> {
    parse_numeric(row.get(col?)?)
}
