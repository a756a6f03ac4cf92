use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::config::MatchingSettings;
use crate::core::{filter_by_subscription, Matcher, MatchOptions};
use crate::models::{FindEventsRequest, FindMatchesRequest, FindMatchesResponse, HealthResponse};
use crate::routes::ApiError;

const DEFAULT_MAX_LIMIT: usize = 100;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub matching: MatchingSettings,
}

impl AppState {
    pub fn new(matcher: Matcher, matching: MatchingSettings) -> Self {
        Self { matcher, matching }
    }

    /// Resolve request overrides against the configured defaults
    fn options(
        &self,
        radius: Option<f64>,
        limit: Option<u16>,
        include_inactive: bool,
    ) -> Result<MatchOptions, ApiError> {
        let radius = radius.or(self.matching.default_radius_km);
        let limit = limit.or(self.matching.default_limit).map(usize::from);
        let max_limit = self
            .matching
            .max_limit
            .map(usize::from)
            .unwrap_or(DEFAULT_MAX_LIMIT);

        Ok(MatchOptions::try_new(radius, limit, include_inactive)?.with_max_limit(max_limit))
    }
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/find", web::post().to(find_matches))
        .route("/matches/events", web::post().to(find_events));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Find matches endpoint
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// {
///   "event": { "_id": "string", "musicianCategory": "musician", ... },
///   "candidates": [{ "_id": "string", "skills": ["Jazz"], ... }],
///   "radius": 10,
///   "limit": 20,
///   "includeInactive": false,
///   "viewer": { "_id": "string", "skills": [], "subscription": { ... } }
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_matches request: field_errors={:?}", errors);
        return Err(errors.into());
    }

    let req = req.into_inner();
    let options = state.options(req.radius, req.limit, req.include_inactive)?;

    tracing::info!(
        "Finding matches for event: {}, candidates: {}, radius: {}km, limit: {}",
        req.event.id,
        req.candidates.len(),
        options.radius_km,
        options.limit
    );

    let result = state.matcher.find_matches(&req.event, req.candidates, &options);

    let matches = match req.viewer.as_ref() {
        Some(viewer) => filter_by_subscription(result.matches, viewer),
        None => result.matches,
    };

    tracing::info!(
        "Returning {} matches for event {} (from {} candidates)",
        matches.len(),
        req.event.id,
        result.total_candidates
    );

    Ok(HttpResponse::Ok().json(FindMatchesResponse {
        matches,
        total_candidates: result.total_candidates,
    }))
}

/// Find events endpoint (talent -> event direction)
///
/// POST /api/v1/matches/events
///
/// Request body:
/// ```json
/// {
///   "talent": { "_id": "string", "skills": ["Jazz"], ... },
///   "events": [{ "_id": "string", "status": "open", ... }],
///   "radius": 10,
///   "limit": 20
/// }
/// ```
async fn find_events(
    state: web::Data<AppState>,
    req: web::Json<FindEventsRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_events request: field_errors={:?}", errors);
        return Err(errors.into());
    }

    let req = req.into_inner();
    let options = state.options(req.radius, req.limit, false)?;

    tracing::info!(
        "Finding events for talent: {}, events: {}",
        req.talent.id,
        req.events.len()
    );

    let result = state.matcher.find_events_for_talent(&req.talent, req.events, &options);

    tracing::info!(
        "Returning {} events for talent {} (from {} events)",
        result.matches.len(),
        req.talent.id,
        result.total_candidates
    );

    Ok(HttpResponse::Ok().json(FindMatchesResponse {
        matches: result.matches,
        total_candidates: result.total_candidates,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(matching: MatchingSettings) -> AppState {
        AppState::new(Matcher::with_default_weights(), matching)
    }

    #[test]
    fn test_options_use_configured_defaults() {
        let state = state(MatchingSettings {
            default_radius_km: Some(25.0),
            default_limit: Some(10),
            max_limit: Some(50),
        });

        let options = state.options(None, None, false).unwrap();
        assert_eq!(options.radius_km, 25.0);
        assert_eq!(options.limit, 10);

        let options = state.options(Some(5.0), Some(80), true).unwrap();
        assert_eq!(options.radius_km, 5.0);
        assert_eq!(options.limit, 50);
        assert!(options.include_inactive);
    }

    #[test]
    fn test_options_without_config() {
        let state = state(MatchingSettings::default());
        let options = state.options(None, Some(500), false).unwrap();
        assert_eq!(options.radius_km, 10.0);
        assert_eq!(options.limit, DEFAULT_MAX_LIMIT);

        assert!(state.options(Some(0.0), None, false).is_err());
    }
}
