use thiserror::Error;
use crate::models::{Event, EventMatch, ScoringWeights, Talent, TalentMatch};
use crate::core::{
    filters::{is_eligible_event, is_eligible_talent},
    scoring::{composite_score, score_breakdown},
};

pub const DEFAULT_RADIUS_KM: f64 = 10.0;
pub const DEFAULT_LIMIT: usize = 20;

/// Errors raised while building match options
#[derive(Debug, Error, PartialEq)]
pub enum MatchError {
    #[error("Invalid radius: {0} (must be a positive number of kilometers)")]
    InvalidRadius(f64),

    #[error("Invalid limit: must be at least 1")]
    InvalidLimit,
}

/// Tuning knobs for a single ranking request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchOptions {
    /// Search radius in kilometers; only shapes the location score
    pub radius_km: f64,
    pub limit: usize,
    pub include_inactive: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            radius_km: DEFAULT_RADIUS_KM,
            limit: DEFAULT_LIMIT,
            include_inactive: false,
        }
    }
}

impl MatchOptions {
    /// Build options from optional request fields, falling back to defaults
    pub fn try_new(
        radius_km: Option<f64>,
        limit: Option<usize>,
        include_inactive: bool,
    ) -> Result<Self, MatchError> {
        let radius_km = radius_km.unwrap_or(DEFAULT_RADIUS_KM);
        if !radius_km.is_finite() || radius_km <= 0.0 {
            return Err(MatchError::InvalidRadius(radius_km));
        }

        let limit = limit.unwrap_or(DEFAULT_LIMIT);
        if limit == 0 {
            return Err(MatchError::InvalidLimit);
        }

        Ok(Self { radius_km, limit, include_inactive })
    }

    /// Cap the limit, e.g. at the configured maximum
    pub fn with_max_limit(mut self, max_limit: usize) -> Self {
        self.limit = self.limit.min(max_limit.max(1));
        self
    }
}

/// Result of the matching process
#[derive(Debug)]
pub struct MatchResult<T> {
    pub matches: Vec<T>,
    pub total_candidates: usize,
}

/// Main matching orchestrator
///
/// # Pipeline Stages
/// 1. Eligibility filtering (inactive talents, non-open events)
/// 2. Per-factor scoring
/// 3. Weighted combination plus subscription boost
/// 4. Ranking and truncation
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Rank candidate talents for an event
    ///
    /// # Arguments
    /// * `event` - The event being staffed
    /// * `candidates` - Talent pool already fetched by the caller
    /// * `options` - Radius, limit and inactive-profile handling
    ///
    /// # Returns
    /// MatchResult with talents sorted by descending score
    pub fn find_matches(
        &self,
        event: &Event,
        candidates: Vec<Talent>,
        options: &MatchOptions,
    ) -> MatchResult<TalentMatch> {
        let total_candidates = candidates.len();

        let mut scored: Vec<TalentMatch> = candidates
            .into_iter()
            .filter(|talent| is_eligible_talent(talent, options.include_inactive))
            .map(|talent| {
                let breakdown = score_breakdown(&talent, event, options.radius_km);
                let score = composite_score(&breakdown, &self.weights);

                TalentMatch {
                    talent,
                    event_id: event.id.clone(),
                    score,
                    breakdown,
                }
            })
            .collect();

        rank(&mut scored, |m| m.score, options.limit);

        tracing::debug!(
            "Ranked {} of {} candidates for event {}",
            scored.len(),
            total_candidates,
            event.id
        );

        MatchResult {
            matches: scored,
            total_candidates,
        }
    }

    /// Rank open events for a talent
    ///
    /// Mirrors `find_matches` from the talent's side: events that are closed
    /// or cancelled are skipped, everything else is scored with the same
    /// factors and weights.
    pub fn find_events_for_talent(
        &self,
        talent: &Talent,
        events: Vec<Event>,
        options: &MatchOptions,
    ) -> MatchResult<EventMatch> {
        let total_candidates = events.len();

        let mut scored: Vec<EventMatch> = events
            .into_iter()
            .filter(is_eligible_event)
            .map(|event| {
                let breakdown = score_breakdown(talent, &event, options.radius_km);
                let score = composite_score(&breakdown, &self.weights);

                EventMatch {
                    event,
                    talent_id: talent.id.clone(),
                    score,
                    breakdown,
                }
            })
            .collect();

        rank(&mut scored, |m| m.score, options.limit);

        tracing::debug!(
            "Ranked {} of {} events for talent {}",
            scored.len(),
            total_candidates,
            talent.id
        );

        MatchResult {
            matches: scored,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Stable sort by descending score, then truncate
fn rank<T>(matches: &mut Vec<T>, score: impl Fn(&T) -> f64, limit: usize) {
    matches.sort_by(|a, b| {
        score(b)
            .partial_cmp(&score(a))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    matches.truncate(limit);
}
