//! Chronological ordering of an event's matches.

use crate::Match;

#[must_use]
/// Orders an event's matches by ascending actual start time.
///
/// Matches without a start time come first. The sort is stable, so matches that
/// tie keep their input order. The position in the returned vector, counted from 1,
/// is the match number fed to [`MatchParameters::for_match`](crate::MatchParameters::for_match).
///
/// # Examples
/// ```rust
/// use chrono::NaiveDate;
/// use epa::{Match, order_matches};
///
/// let day = NaiveDate::from_ymd_opt(2024, 1, 13).unwrap();
/// let late = Match::new(vec![1, 2], vec![3, 4], 10.0, 20.0)
///     .started_at(day.and_hms_opt(11, 0, 0).unwrap());
/// let early = Match::new(vec![5, 6], vec![7, 8], 30.0, 40.0)
///     .started_at(day.and_hms_opt(9, 0, 0).unwrap());
/// let unplayed = Match::new(vec![1, 5], vec![3, 7], 0.0, 0.0);
///
/// let matches = [late.clone(), early.clone(), unplayed.clone()];
/// let ordered = order_matches(&matches);
///
/// assert_eq!(ordered, vec![&unplayed, &early, &late]);
/// ```
pub fn order_matches(matches: &[Match]) -> Vec<&Match> {
    let mut ordered: Vec<&Match> = matches.iter().collect();
    ordered.sort_by_key(|game| game.actual_start_time);
    ordered
}
