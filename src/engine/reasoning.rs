//! Human-readable reasoning for a prediction.
//!
//! Short canned phrases, each added only when its condition holds.

use crate::types::{DataOrigin, Dimension, DimensionScore, Fixture};

const RATING_CLEAR: f64 = 0.10;
const RATING_SLIGHT: f64 = 0.03;
const FORM_GAP: f64 = 0.15;
const RECORD_GAP: f64 = 0.10;
const MARKET_AGREES: f64 = 0.05;
const HIGH_VOLATILITY: f64 = 0.35;

/// Build the reasoning string for `pick` from the dimension scores.
pub fn build_reasoning(
    fixture: &Fixture,
    pick: &str,
    dimensions: &[DimensionScore],
    market_edge: Option<f64>,
) -> String {
    let score = |d: Dimension| dimensions.iter().find(|s| s.dimension == d && s.available);
    let leader = |lean: f64| {
        if lean >= 0.0 {
            fixture.home.as_str()
        } else {
            fixture.away.as_str()
        }
    };

    let mut parts: Vec<String> = Vec::new();

    if let Some(rating) = score(Dimension::Rating) {
        let lean = rating.lean();
        if lean.abs() >= RATING_CLEAR {
            parts.push(format!("{} holds a clear rating edge.", leader(lean)));
        } else if lean.abs() >= RATING_SLIGHT {
            parts.push(format!("{} rates slightly higher.", leader(lean)));
        } else {
            parts.push("Ratings are closely matched.".to_string());
        }
    }

    if let Some(venue) = score(Dimension::Venue) {
        if venue.lean() > 0.0 {
            parts.push(format!("Home advantage at {} favours {}.", fixture.venue, fixture.home));
        }
    }

    if let Some(form) = score(Dimension::Form) {
        if form.lean().abs() >= FORM_GAP {
            parts.push(format!("{} arrives in noticeably better form.", leader(form.lean())));
        }
    }

    if let Some(record) = score(Dimension::Record) {
        if record.lean().abs() >= RECORD_GAP {
            parts.push(format!("{} has the stronger season record.", leader(record.lean())));
        }
    }

    match market_edge {
        Some(edge) if edge.abs() < MARKET_AGREES => {
            parts.push("The market broadly agrees.".to_string());
        }
        Some(edge) if edge > 0.0 => {
            parts.push(format!(
                "Model sees value on {pick} against the market ({:+.0} pts).",
                edge * 100.0
            ));
        }
        Some(_) => {
            parts.push(format!("The market rates {pick} higher than the model does."));
        }
        None => {}
    }

    match &fixture.origin {
        DataOrigin::Live { .. } => {}
        DataOrigin::Fallback { source, .. } => {
            parts.push(format!("{source} was unavailable, so this fixture is simulated."));
        }
        DataOrigin::Synthetic => parts.push("Fixture simulated from the roster.".to_string()),
    }

    if fixture.sport.volatility() >= HIGH_VOLATILITY {
        parts.push(format!("{} is prone to upsets.", fixture.sport));
    }

    if parts.is_empty() {
        return format!("Too close to call; slight lean to {pick}.");
    }
    parts.join(" ")
}
