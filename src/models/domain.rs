use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Geographic point stored as a GeoJSON `[longitude, latitude]` pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinates {
    pub longitude: f64,
    pub latitude: f64,
}

impl Coordinates {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self { longitude, latitude }
    }
}

impl From<[f64; 2]> for Coordinates {
    fn from(pair: [f64; 2]) -> Self {
        Self::new(pair[0], pair[1])
    }
}

impl From<Coordinates> for [f64; 2] {
    fn from(coords: Coordinates) -> Self {
        [coords.longitude, coords.latitude]
    }
}

/// Postal location with optional geo point
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "lenient_coordinates")]
    pub coordinates: Option<Coordinates>,
}

/// Accept a `[longitude, latitude]` pair; anything else (including the empty
/// array stored for an unset GeoJSON point) reads as "no coordinates"
fn lenient_coordinates<'de, D>(deserializer: D) -> Result<Option<Coordinates>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<serde_json::Value>> = Option::deserialize(deserializer)?;

    let pair: Option<Vec<f64>> = raw.and_then(|values| values.iter().map(|v| v.as_f64()).collect());

    Ok(match pair.as_deref() {
        Some(&[longitude, latitude]) if longitude.is_finite() && latitude.is_finite() => {
            Some(Coordinates::new(longitude, latitude))
        }
        _ => None,
    })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    #[default]
    Open,
    Closed,
    Cancelled,
}

/// Gig posting created by a planner or studio
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "type", default)]
    pub event_type: Option<String>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: EventStatus,
    #[serde(rename = "musicianCategory", default)]
    pub musician_category: Option<String>,
    #[serde(rename = "musicianTypes", default)]
    pub musician_types: Vec<String>,
    #[serde(rename = "musicianCount", default)]
    pub musician_count: Option<u32>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Event {
    pub fn coordinates(&self) -> Option<Coordinates> {
        self.location.as_ref().and_then(|l| l.coordinates)
    }

    pub fn is_open(&self) -> bool {
        self.status == EventStatus::Open
    }
}

/// Aggregate review rating on a 0-5 scale
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Rating {
    #[serde(default)]
    pub average: f64,
    #[serde(rename = "totalReviews", default)]
    pub total_reviews: u32,
}

/// Self-declared experience level of a talent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompetencyLevel {
    Beginner,
    Intermediate,
    Pro,
    Expert,
    #[serde(other)]
    Unrecognized,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SubscriptionFeatures {
    #[serde(rename = "aiBoosted", default)]
    pub ai_boosted: bool,
    #[serde(rename = "priorityListing", default)]
    pub priority_listing: bool,
    #[serde(rename = "skillFiltering", default)]
    pub skill_filtering: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Subscription {
    #[serde(default)]
    pub tier: String,
    #[serde(default)]
    pub features: SubscriptionFeatures,
}

impl Subscription {
    pub const PRO_TIER: &'static str = "pro";

    pub fn is_pro(&self) -> bool {
        self.tier == Self::PRO_TIER
    }
}

/// Service provider profile (musician, DJ, photographer, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Talent {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub subcategory: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub availability: Option<String>,
    #[serde(default)]
    pub rating: Option<Rating>,
    #[serde(rename = "isVerified", default)]
    pub is_verified: Option<bool>,
    #[serde(rename = "isActive", default = "default_true")]
    pub is_active: bool,
    #[serde(rename = "competencyLevel", default)]
    pub competency_level: Option<CompetencyLevel>,
    #[serde(default)]
    pub subscription: Option<Subscription>,
}

impl Talent {
    /// Helper to get is_verified as a bool, defaulting to false
    pub fn verified(&self) -> bool {
        self.is_verified.unwrap_or(false)
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        self.location.as_ref().and_then(|l| l.coordinates)
    }
}

fn default_true() -> bool { true }

/// The user looking at a ranked list, used for subscription post-filtering
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViewingUser {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub subscription: Option<Subscription>,
}

impl ViewingUser {
    pub fn skill_filtering(&self) -> bool {
        self.subscription
            .as_ref()
            .map(|s| s.features.skill_filtering)
            .unwrap_or(false)
    }
}

/// Per-factor scores behind a composite match score
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchBreakdown {
    #[serde(rename = "skillMatch")]
    pub skill_match: f64,
    #[serde(rename = "locationMatch")]
    pub location_match: f64,
    #[serde(rename = "availabilityMatch")]
    pub availability_match: f64,
    #[serde(rename = "ratingMatch")]
    pub rating_match: f64,
    #[serde(rename = "competencyMatch")]
    pub competency_match: f64,
    #[serde(rename = "aiBoost")]
    pub ai_boost: f64,
}

/// Ranked talent for an event (event -> talent direction)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TalentMatch {
    pub talent: Talent,
    #[serde(rename = "eventId")]
    pub event_id: String,
    pub score: f64,
    pub breakdown: MatchBreakdown,
}

/// Ranked event for a talent (talent -> event direction)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventMatch {
    pub event: Event,
    #[serde(rename = "talentId")]
    pub talent_id: String,
    pub score: f64,
    pub breakdown: MatchBreakdown,
}

/// Scoring weights for the five primary factors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub skill: f64,
    pub location: f64,
    pub availability: f64,
    pub rating: f64,
    pub competency: f64,
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.skill + self.location + self.availability + self.rating + self.competency
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skill: 0.30,
            location: 0.25,
            availability: 0.20,
            rating: 0.15,
            competency: 0.10,
        }
    }
}
