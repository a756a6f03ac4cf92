// Unit tests for GigMatch scoring factors

use gigmatch::core::{
    distance::{distance_between, haversine_distance},
    scoring::{
        calculate_ai_boost, calculate_availability_match, calculate_competency_match,
        calculate_location_match, calculate_rating_match, calculate_skill_match,
    },
};
use gigmatch::models::{
    CompetencyLevel, Coordinates, Event, EventStatus, Location, Rating, Subscription,
    SubscriptionFeatures, Talent,
};
use chrono::{TimeZone, Utc};

fn located(longitude: f64, latitude: f64) -> Option<Location> {
    Some(Location {
        city: None,
        state: None,
        country: None,
        coordinates: Some(Coordinates::new(longitude, latitude)),
    })
}

fn blank_talent() -> Talent {
    Talent {
        id: "talent".to_string(),
        name: "Talent".to_string(),
        category: None,
        subcategory: None,
        skills: vec![],
        location: None,
        availability: None,
        rating: None,
        is_verified: None,
        is_active: true,
        competency_level: None,
        subscription: None,
    }
}

fn blank_event() -> Event {
    Event {
        id: "event".to_string(),
        title: "Event".to_string(),
        event_type: None,
        location: None,
        budget: None,
        date: None,
        status: EventStatus::Open,
        musician_category: None,
        musician_types: vec![],
        musician_count: None,
        genre: None,
        tags: vec![],
    }
}

fn pro_subscription(ai_boosted: bool, priority_listing: bool) -> Subscription {
    Subscription {
        tier: "pro".to_string(),
        features: SubscriptionFeatures {
            ai_boosted,
            priority_listing,
            skill_filtering: false,
        },
    }
}

#[test]
fn test_haversine_distance_zero() {
    let distance = haversine_distance(0.0, 0.0, 0.0, 0.0);
    assert!(distance < 1e-9);
}

#[test]
fn test_coincident_points_score_full_location() {
    let mut talent = blank_talent();
    talent.location = located(0.0, 0.0);
    let mut event = blank_event();
    event.location = located(0.0, 0.0);

    for radius in [0.1, 1.0, 10.0, 500.0] {
        assert_eq!(calculate_location_match(&talent, &event, radius), 1.0);
    }
}

#[test]
fn test_new_york_to_los_angeles() {
    let nyc = Coordinates::new(-74.006, 40.7128);
    let la = Coordinates::new(-118.2437, 34.0522);

    let distance = distance_between(nyc, la);
    assert!((distance - 3936.0).abs() < 10.0, "Expected ~3936km, got {}", distance);

    let mut talent = blank_talent();
    talent.location = located(-74.006, 40.7128);
    let mut event = blank_event();
    event.location = located(-118.2437, 34.0522);

    assert_eq!(calculate_location_match(&talent, &event, 10.0), 0.2);
}

#[test]
fn test_location_match_symmetric() {
    let a = Coordinates::new(2.3522, 48.8566);
    let b = Coordinates::new(-0.1278, 51.5074);
    assert!((distance_between(a, b) - distance_between(b, a)).abs() < 1e-9);

    let mut talent = blank_talent();
    talent.location = located(2.3522, 48.8566);
    let mut event = blank_event();
    event.location = located(-0.1278, 51.5074);

    let mut swapped_talent = blank_talent();
    swapped_talent.location = located(-0.1278, 51.5074);
    let mut swapped_event = blank_event();
    swapped_event.location = located(2.3522, 48.8566);

    for radius in [100.0, 200.0, 300.0, 1000.0] {
        assert_eq!(
            calculate_location_match(&talent, &event, radius),
            calculate_location_match(&swapped_talent, &swapped_event, radius)
        );
    }
}

#[test]
fn test_skill_match_zero_without_overlap() {
    let mut talent = blank_talent();
    talent.category = Some("photographer".to_string());
    talent.subcategory = Some("wedding photographer".to_string());
    talent.skills = vec!["Portraits".to_string(), "Editing".to_string()];

    let mut event = blank_event();
    event.musician_category = Some("musician".to_string());
    event.musician_types = vec!["drummer".to_string()];
    event.genre = Some("Metal".to_string());

    assert_eq!(calculate_skill_match(&talent, &event), 0.0);
}

#[test]
fn test_rating_clamped_at_one() {
    let mut talent = blank_talent();
    talent.rating = Some(Rating { average: 5.0, total_reviews: 20 });
    talent.is_verified = Some(true);

    assert_eq!(calculate_rating_match(&talent), 1.0);
}

#[test]
fn test_beginner_at_corporate_event() {
    let mut talent = blank_talent();
    talent.competency_level = Some(CompetencyLevel::Beginner);
    let mut event = blank_event();
    event.event_type = Some("Corporate Gala".to_string());

    assert!((calculate_competency_match(&talent, &event) - 0.21).abs() < 1e-9);
}

#[test]
fn test_ai_boost_tiers() {
    let mut talent = blank_talent();
    talent.subscription = Some(pro_subscription(true, true));
    assert!((calculate_ai_boost(&talent) - 0.15).abs() < 1e-9);

    talent.subscription = Some(pro_subscription(false, true));
    assert!((calculate_ai_boost(&talent) - 0.05).abs() < 1e-9);

    talent.subscription = Some(Subscription {
        tier: "free-basic".to_string(),
        features: SubscriptionFeatures {
            ai_boosted: true,
            priority_listing: true,
            skill_filtering: true,
        },
    });
    assert_eq!(calculate_ai_boost(&talent), 0.0);
}

#[test]
fn test_factors_stay_in_unit_range() {
    let levels = [
        None,
        Some(CompetencyLevel::Beginner),
        Some(CompetencyLevel::Intermediate),
        Some(CompetencyLevel::Pro),
        Some(CompetencyLevel::Expert),
        Some(CompetencyLevel::Unrecognized),
    ];
    let event_types = [None, Some("Corporate Retreat"), Some("Wedding")];
    let availabilities = [None, Some("weekends"), Some("Weekday evenings"), Some("by appointment")];
    let dates = [
        None,
        Some(Utc.with_ymd_and_hms(2024, 3, 9, 20, 0, 0).unwrap()),
        Some(Utc.with_ymd_and_hms(2024, 3, 12, 20, 0, 0).unwrap()),
    ];

    for level in levels {
        for event_type in event_types {
            for availability in availabilities {
                for date in dates {
                    for (average, reviews, verified) in [(0.0, 0, false), (3.3, 6, true), (5.0, 50, true)] {
                        let mut talent = blank_talent();
                        talent.competency_level = level;
                        talent.availability = availability.map(str::to_string);
                        talent.rating = Some(Rating { average, total_reviews: reviews });
                        talent.is_verified = Some(verified);

                        let mut event = blank_event();
                        event.event_type = event_type.map(str::to_string);
                        event.date = date;

                        for score in [
                            calculate_skill_match(&talent, &event),
                            calculate_location_match(&talent, &event, 10.0),
                            calculate_availability_match(&talent, &event),
                            calculate_rating_match(&talent),
                            calculate_competency_match(&talent, &event),
                        ] {
                            assert!((0.0..=1.0).contains(&score), "score {} out of range", score);
                        }
                    }
                }
            }
        }
    }
}
