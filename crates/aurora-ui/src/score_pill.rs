//! Signal score pill.

use leptos::prelude::*;

use crate::badge::{render_badge, Badge};
use crate::category::ScoreCategory;

/// Text shown inside the pill, e.g. `Signal 80`.
pub fn score_label(score: f64) -> String {
    format!("Signal {}", format_score(score))
}

/// Format a score the way browsers print numbers: `Infinity`, no negative
/// zero, exponent form outside `[1e-6, 1e21)`.
fn format_score(score: f64) -> String {
    if score.is_nan() {
        return "NaN".to_string();
    }
    if score.is_infinite() {
        return if score > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if score == 0.0 {
        return "0".to_string();
    }

    let magnitude = score.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let exp = format!("{:e}", score);
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                format!("{}e+{}", mantissa, power)
            }
            _ => exp,
        };
    }

    score.to_string()
}

/// Badge colored by score category and labelled with the score.
#[component]
pub fn ScorePill(#[prop(into)] score: f64) -> impl IntoView {
    let variant = ScoreCategory::from_score(score).variant();

    view! { <Badge variant=variant>{score_label(score)}</Badge> }
}

/// Render a score pill to an HTML string.
pub fn render_score_pill(score: f64) -> String {
    render_badge(ScoreCategory::from_score(score).variant(), &score_label(score), None)
}
