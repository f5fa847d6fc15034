use crate::constants::MARGIN_SCALE;

/// Calculate the probability of the first team winning from its capped spread.
///
/// Logistic curve on `margin / MARGIN_SCALE`: 0.5 at a pick'em, strictly
/// increasing in the margin and never reaching 0 or 1 for a finite spread.
pub fn win_probability(final_margin_cap: f64) -> f64 {
    1.0 / (1.0 + (-final_margin_cap / MARGIN_SCALE).exp())
}

/// Split a combined score into (team_score, opponent_score) so that the
/// difference is `margin` and the sum is `total`.
pub fn split_total(total: f64, margin: f64) -> (f64, f64) {
    ((total + margin) / 2.0, (total - margin) / 2.0)
}
