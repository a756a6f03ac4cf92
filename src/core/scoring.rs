use chrono::Datelike;
use crate::models::{CompetencyLevel, Event, MatchBreakdown, ScoringWeights, Talent};
use crate::core::distance::{distance_between, proximity_band};

/// Score returned by a factor when the data it needs is missing
pub const NEUTRAL_SCORE: f64 = 0.5;

const CATEGORY_WEIGHT: f64 = 0.4;
const TYPE_WEIGHT: f64 = 0.4;
const GENRE_WEIGHT: f64 = 0.2;

const AI_BOOST: f64 = 0.10;
const PRIORITY_LISTING_BOOST: f64 = 0.05;

/// Compute every factor for one talent/event pair
pub fn score_breakdown(talent: &Talent, event: &Event, radius_km: f64) -> MatchBreakdown {
    MatchBreakdown {
        skill_match: calculate_skill_match(talent, event),
        location_match: calculate_location_match(talent, event, radius_km),
        availability_match: calculate_availability_match(talent, event),
        rating_match: calculate_rating_match(talent),
        competency_match: calculate_competency_match(talent, event),
        ai_boost: calculate_ai_boost(talent),
    }
}

/// Combine a breakdown into the overall match score
///
/// score = (
///     skill_match * 0.30 +
///     location_match * 0.25 +
///     availability_match * 0.20 +
///     rating_match * 0.15 +
///     competency_match * 0.10
/// ) + ai_boost
///
/// Rounded to two decimals. The boost sits on top of the weighted sum, so a
/// boosted talent can score above 1.0; the result is not clamped.
pub fn composite_score(breakdown: &MatchBreakdown, weights: &ScoringWeights) -> f64 {
    let weighted = breakdown.skill_match * weights.skill
        + breakdown.location_match * weights.location
        + breakdown.availability_match * weights.availability
        + breakdown.rating_match * weights.rating
        + breakdown.competency_match * weights.competency;

    round_to_hundredths(weighted + breakdown.ai_boost)
}

#[inline]
fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Calculate skill match score (0-1)
///
/// Only the checks whose event-side field is present are evaluated, and the
/// result is normalized by the weight of those checks alone.
pub fn calculate_skill_match(talent: &Talent, event: &Event) -> f64 {
    let mut earned = 0.0;
    let mut evaluated = 0.0;

    if let Some(category) = non_empty(event.musician_category.as_deref()) {
        evaluated += CATEGORY_WEIGHT;
        if talent.category.as_deref() == Some(category) {
            earned += CATEGORY_WEIGHT;
        }
    }

    let wanted_types: Vec<String> = event
        .musician_types
        .iter()
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
        .collect();

    if !wanted_types.is_empty() {
        evaluated += TYPE_WEIGHT;

        let subcategory = talent.subcategory.as_deref().map(str::to_lowercase);
        let skills = lowercase_all(&talent.skills);

        let covered = wanted_types.iter().any(|wanted| {
            subcategory.as_deref().is_some_and(|s| s.contains(wanted.as_str()))
                || skills.iter().any(|s| s.contains(wanted.as_str()))
        });

        if covered {
            earned += TYPE_WEIGHT;
        }
    }

    if let Some(genre) = non_empty(event.genre.as_deref()) {
        evaluated += GENRE_WEIGHT;
        let genre = genre.to_lowercase();
        if talent.skills.iter().any(|s| s.to_lowercase().contains(&genre)) {
            earned += GENRE_WEIGHT;
        }
    }

    if evaluated > 0.0 {
        earned / evaluated
    } else {
        0.0
    }
}

/// Calculate location score (0-1) banded by the search radius
pub fn calculate_location_match(talent: &Talent, event: &Event, radius_km: f64) -> f64 {
    match (talent.coordinates(), event.coordinates()) {
        (Some(from), Some(to)) => proximity_band(distance_between(from, to), radius_km),
        _ => NEUTRAL_SCORE,
    }
}

/// Calculate availability score (0-1) from the talent's free-text availability
pub fn calculate_availability_match(talent: &Talent, event: &Event) -> f64 {
    let availability = match non_empty(talent.availability.as_deref()) {
        Some(text) => text.to_lowercase(),
        None => return NEUTRAL_SCORE,
    };

    if availability.contains("flexible") || availability.contains("anytime") {
        return 1.0;
    }

    let Some(date) = event.date else {
        return NEUTRAL_SCORE;
    };

    // 0 = Sunday, 6 = Saturday
    let day = date.weekday().num_days_from_sunday();
    let is_weekend = day == 0 || day == 6;

    if is_weekend {
        if availability.contains("weekend") {
            return 1.0;
        }
        if availability.contains("saturday") || availability.contains("sunday") {
            return 0.9;
        }
    } else {
        if availability.contains("weekday") {
            return 1.0;
        }
        if availability.contains("evening") {
            return 0.8;
        }
    }

    NEUTRAL_SCORE
}

/// Calculate rating score (0-1) with review-count and verification bonuses
pub fn calculate_rating_match(talent: &Talent) -> f64 {
    let rating = talent.rating.unwrap_or_default();

    let mut score = rating.average / 5.0;

    score += match rating.total_reviews {
        n if n >= 10 => 0.10,
        n if n >= 5 => 0.05,
        n if n >= 1 => 0.02,
        _ => 0.0,
    };

    if talent.verified() {
        score += 0.10;
    }

    // Averages outside 0-5 come from bad data; keep the factor in range
    score.clamp(0.0, 1.0)
}

/// Calculate competency score (0-1), adjusted for corporate events
pub fn calculate_competency_match(talent: &Talent, event: &Event) -> f64 {
    let level = talent.competency_level.unwrap_or(CompetencyLevel::Unrecognized);

    let mut score = match level {
        CompetencyLevel::Beginner => 0.3,
        CompetencyLevel::Intermediate => 0.6,
        CompetencyLevel::Pro => 0.8,
        CompetencyLevel::Expert => 1.0,
        CompetencyLevel::Unrecognized => NEUTRAL_SCORE,
    };

    let corporate = event
        .event_type
        .as_deref()
        .is_some_and(|t| t.to_lowercase().contains("corporate"));

    if corporate {
        match level {
            CompetencyLevel::Beginner => score *= 0.7,
            CompetencyLevel::Expert => score *= 1.1,
            _ => {}
        }
    }

    score.min(1.0)
}

/// Additive subscription boost (0-0.15); only the pro tier earns it
pub fn calculate_ai_boost(talent: &Talent) -> f64 {
    let Some(subscription) = talent.subscription.as_ref() else {
        return 0.0;
    };

    if !subscription.is_pro() {
        return 0.0;
    }

    let mut boost = 0.0;
    if subscription.features.ai_boosted {
        boost += AI_BOOST;
    }
    if subscription.features.priority_listing {
        boost += PRIORITY_LISTING_BOOST;
    }
    boost
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn lowercase_all(values: &[String]) -> Vec<String> {
    values.iter().map(|v| v.to_lowercase()).collect()
}
