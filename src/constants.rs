/// Points per unit of ADJOE difference
pub const COEF_OFFENSE: f64 = 0.18;

/// Points per unit of ADJDE difference (opponent minus team)
pub const COEF_DEFENSE: f64 = 0.14;

/// Points per unit of BARTHAG difference
pub const COEF_BARTHAG: f64 = 22.0;

/// Points per rank position (opponent rank minus team rank)
pub const COEF_RANK: f64 = 0.25;

/// Points per unit of pairwise rating difference
pub const COEF_RATING: f64 = 55.0;

/// Home court advantage in points
pub const HOME_EDGE: f64 = 3.5;

/// Largest predicted spread either way
pub const MARGIN_CAP: f64 = 30.0;

/// Logistic scale for converting a spread to a win probability
pub const MARGIN_SCALE: f64 = 7.0;

/// Largest believable ADJOE/ADJDE; anything above is treated as missing
pub const MAX_EFFICIENCY: f64 = 200.0;

/// Plausible range for the combined score of one game
pub const MIN_TOTAL_POINTS: f64 = 100.0;
pub const MAX_TOTAL_POINTS: f64 = 200.0;

/// League average combined score, used when the results table has no usable games
pub const DEFAULT_LEAGUE_TOTAL: f64 = 145.0;

/// League average tempo (possessions per game) when no team has a valid tempo
pub const DEFAULT_TEMPO: f64 = 67.0;

/// Profile of an average Division I team, used for teams missing from the data
pub const DEFAULT_ADJOE: f64 = 110.0;
pub const DEFAULT_ADJDE: f64 = 100.0;
pub const DEFAULT_BARTHAG: f64 = 0.50;
pub const DEFAULT_RANK: u32 = 180;
pub const DEFAULT_SEED: u8 = 16;
