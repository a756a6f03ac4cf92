// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Coordinates, Location, Event, EventStatus, Rating, CompetencyLevel, Subscription,
    SubscriptionFeatures, Talent, ViewingUser, MatchBreakdown, TalentMatch, EventMatch,
    ScoringWeights,
};
pub use requests::{FindMatchesRequest, FindEventsRequest};
pub use responses::{FindMatchesResponse, HealthResponse, ErrorResponse};
