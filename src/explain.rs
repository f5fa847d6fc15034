use crate::prediction::PredictionResult;

fn team_line(name: &str, adjoe: f64, adjde: f64, barthag: f64, rank: f64, tempo: f64) -> String {
    format!(
        "{name:>15}  off_ADJOE = {adjoe:6.2}   def_ADJDE = {adjde:6.2}   BARTHAG = {barthag:6.3}   rank = {rank:6.1}   tempo = {tempo:6.2}"
    )
}

/// Render the numeric breakdown of a prediction as a multi-line report.
///
/// Signed values are from the first team's perspective: positive favors
/// `result.team`.
pub fn breakdown_text(result: &PredictionResult) -> String {
    let p = &result.parts;

    let lines = vec![
        "=== team_ratings ===".to_string(),
        team_line(&result.team, p.team1_adjoe, p.team1_adjde, p.team1_barthag, p.team1_rank, p.team1_tempo),
        team_line(&result.opponent, p.team2_adjoe, p.team2_adjde, p.team2_barthag, p.team2_rank, p.team2_tempo),
        String::new(),
        "=== feature_differences (Team1 - Team2) ===".to_string(),
        format!("offense_diff      = {:+7.2}", p.offense_diff),
        format!("defense_diff      = {:+7.2}", p.defense_diff),
        format!("barthag_diff      = {:+7.3}", p.barthag_diff),
        format!("rank_diff         = {:+7.1}", p.rank_diff),
        format!("rating_diff       = {:+7.3}", p.rating_diff),
        String::new(),
        "=== margin_components (points, + favors Team1) ===".to_string(),
        format!("margin_off_def    = {:+7.2}", p.margin_off_def),
        format!("margin_barth      = {:+7.2}", p.margin_barth),
        format!("margin_rank       = {:+7.2}", p.margin_rank),
        format!("margin_rating     = {:+7.2}", p.margin_rating),
        format!("location_edge     = {:+7.2}", p.location_edge),
        String::new(),
        "=== final_numbers ===".to_string(),
        format!("raw_margin        = {:+7.2}", p.raw_margin),
        format!("final_margin_cap  = {:+7.2}", p.final_margin_cap),
        String::new(),
        format!("baseline_total    = {:7.2}", p.baseline_total),
        format!("tempo_total       = {:7.2}", p.tempo_total),
        format!("final_total_pts   = {:7.2}", p.final_total_pts),
    ];

    lines.join("\n")
}

/// One-line headline: projected score and win probability.
pub fn summary_line(result: &PredictionResult) -> String {
    format!(
        "{} {:.1} - {} {:.1}  ({} win prob {:.1}%)",
        result.team,
        result.team_score,
        result.opponent,
        result.opponent_score,
        result.team,
        result.win_prob * 100.0
    )
}
