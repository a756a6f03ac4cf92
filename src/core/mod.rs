// Core algorithm exports
pub mod distance;
pub mod filters;
pub mod matcher;
pub mod scoring;

pub use distance::{haversine_distance, distance_between, proximity_band};
pub use filters::{filter_by_subscription, is_eligible_event, is_eligible_talent, shares_skill};
pub use matcher::{Matcher, MatchError, MatchOptions, MatchResult};
pub use scoring::{
    calculate_ai_boost, calculate_availability_match, calculate_competency_match,
    calculate_location_match, calculate_rating_match, calculate_skill_match, composite_score,
    score_breakdown,
};
