use crate::models::{Event, Talent, TalentMatch, ViewingUser};

/// Check if a talent may enter the ranking at all
///
/// Inactive profiles are skipped unless the caller asked for them.
#[inline]
pub fn is_eligible_talent(talent: &Talent, include_inactive: bool) -> bool {
    include_inactive || talent.is_active
}

/// Check if an event is still taking applications
#[inline]
pub fn is_eligible_event(event: &Event) -> bool {
    event.is_open()
}

/// Check if any of `wanted` is a case-insensitive substring of any of `offered`
pub fn shares_skill(wanted: &[String], offered: &[String]) -> bool {
    let offered: Vec<String> = offered.iter().map(|s| s.to_lowercase()).collect();

    wanted
        .iter()
        .filter(|s| !s.is_empty())
        .map(|s| s.to_lowercase())
        .any(|w| offered.iter().any(|o| o.contains(w.as_str())))
}

/// Post-filter a ranked list by the viewer's subscription
///
/// When the viewer's plan has skill filtering, only talents sharing at least
/// one of the viewer's skills are kept. Otherwise the list is returned as is.
/// Ranking order is preserved either way.
pub fn filter_by_subscription(matches: Vec<TalentMatch>, viewer: &ViewingUser) -> Vec<TalentMatch> {
    if !viewer.skill_filtering() {
        return matches;
    }

    let before = matches.len();
    let kept: Vec<TalentMatch> = matches
        .into_iter()
        .filter(|m| shares_skill(&viewer.skills, &m.talent.skills))
        .collect();

    tracing::debug!(
        "Skill filtering for viewer {} kept {} of {} matches",
        viewer.id,
        kept.len(),
        before
    );

    kept
}
