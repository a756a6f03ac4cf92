//! GigMatch - talent/event match scoring for the GigMatch marketplace
//!
//! This library ranks candidate talents for an event (and open events for a
//! talent) with a weighted, heuristic scoring pipeline. It performs no I/O:
//! callers fetch the documents and pass them in.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{Matcher, MatchOptions, filter_by_subscription, distance::haversine_distance};
pub use crate::models::{Event, Talent, TalentMatch, EventMatch, MatchBreakdown, ScoringWeights, ViewingUser};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let matcher = Matcher::default();
        assert_eq!(*matcher.weights(), ScoringWeights::default());
        assert!(haversine_distance(0.0, 0.0, 0.0, 0.0) < 1e-9);
    }
}
