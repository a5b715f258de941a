//! Default rating for teams an event introduces.

use crate::Match;

/// Baseline used when an event has no matches at all.
pub const FALLBACK_RATING: f64 = 60.0;

/// Team slots counted per match: two alliances of two teams.
///
/// Short alliances still count as two teams here.
pub const TEAM_SLOTS_PER_MATCH: usize = 4;

#[must_use]
/// Average points scored per team slot across all of an event's matches.
///
/// The result becomes the Default Rating for teams first seen in that event.
/// Teams already rated keep their rating.
/// An event without matches yields [`FALLBACK_RATING`].
///
/// # Examples
/// ```rust
/// # use assert_eq_float::assert_eq_float;
/// use epa::{Match, default_rating};
///
/// assert_eq_float!(default_rating(&[]), 60.0);
///
/// let matches = [Match::new(vec![1, 2], vec![3, 4], 100.0, 80.0)];
/// assert_eq_float!(default_rating(&matches), 45.0);
/// ```
pub fn default_rating(matches: &[Match]) -> f64 {
    if matches.is_empty() {
        return FALLBACK_RATING;
    }

    let total_points: f64 = matches
        .iter()
        .map(|game| game.red_score + game.blue_score)
        .sum();
    let total_team_slots = matches.len() * TEAM_SLOTS_PER_MATCH;

    total_points / total_team_slots as f64
}
