use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{Event, Talent, ViewingUser};

/// Request to rank candidate talents for an event
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    pub event: Event,
    #[validate(length(max = 5000))]
    #[serde(default)]
    pub candidates: Vec<Talent>,
    #[validate(range(exclusive_min = 0.0))]
    #[serde(default, alias = "radiusKm")]
    pub radius: Option<f64>,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<u16>,
    #[serde(rename = "includeInactive", default)]
    pub include_inactive: bool,
    #[serde(default)]
    pub viewer: Option<ViewingUser>,
}

/// Request to rank open events for a talent
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindEventsRequest {
    pub talent: Talent,
    #[validate(length(max = 5000))]
    #[serde(default)]
    pub events: Vec<Event>,
    #[validate(range(exclusive_min = 0.0))]
    #[serde(default, alias = "radiusKm")]
    pub radius: Option<f64>,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<u16>,
}
