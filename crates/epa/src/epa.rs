//! Expected Points Added rating updates.
//!
//! A team's EPA is its expected contribution to its alliance's score. After a
//! match every participating team moves by a share of its alliance's *surprise*,
//! the gap between the alliance's actual score and the sum of its members' EPAs.
//! Once the margin parameter kicks in, the opposing alliance's surprise is
//! subtracted as well:
//!
//! ```text
//! surprise   = (score - total) - m * (opponent_score - opponent_total)
//! new_rating = rating + k / (1 + m) * surprise / alliance_size
//! ```
//!
//! # Quickstart
//!
//! ```rust
//! # use assert_eq_float::assert_eq_float;
//! use epa::{Match, RatingStore, predict, process_event};
//!
//! let mut store = RatingStore::new();
//! let matches = vec![
//!     Match::new(vec![1, 2], vec![3, 4], 120.0, 80.0),
//!     Match::new(vec![1, 3], vec![2, 4], 90.0, 110.0),
//! ];
//!
//! // Seeds new teams with the event's average points per team and rates every match.
//! let summary = process_event(&mut store, &matches);
//! assert_eq_float!(summary.default_rating, 50.0);
//! assert_eq!(summary.matches_processed, 2);
//!
//! let prediction = predict(&store, summary.default_rating, [1, 2], [3, 4]);
//! assert!((prediction.red_win_probability + prediction.blue_win_probability - 1.0).abs() < 1e-12);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Alliance, Match, MatchParameters, TeamNumber, baseline::default_rating, schedule::order_matches,
    store::RatingStore,
};

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// Outcome of rating a whole event.
pub struct EventSummary {
    /// Default rating computed for the event, used to seed its new teams.
    pub default_rating: f64,
    /// Number of matches fed through [`update_epa`].
    pub matches_processed: usize,
}

/// Sum of the current ratings of `teams`.
fn alliance_total(store: &RatingStore, teams: &[TeamNumber], default_rating: f64) -> f64 {
    teams
        .iter()
        .map(|&team| store.get(team, default_rating))
        .sum()
}

/// Surprise of an alliance, corrected by the opposing alliance's surprise.
fn surprise(
    (score, total): (f64, f64),
    (opponent_score, opponent_total): (f64, f64),
    margin: f64,
) -> f64 {
    margin.mul_add(-(opponent_score - opponent_total), score - total)
}

/// Updates the EPA of every team in a match from the final scores.
///
/// Alliance totals are taken before any rating changes, so teams of the same
/// match never see each other's updates. Teams missing from `store` start at
/// `default_rating`. Teams outside the match are untouched.
///
/// Both alliances are expected to be non-empty.
///
/// # Examples
/// ```rust
/// # use assert_eq_float::assert_eq_float;
/// use epa::{MatchParameters, RatingStore, update_epa};
///
/// let mut store = RatingStore::new();
/// let params = MatchParameters { k_factor: 0.5, margin: 0.0 };
///
/// update_epa(&mut store, 80.0, &[1, 2], &[3, 4], 100.0, 50.0, params);
///
/// assert_eq_float!(store.get(1, 80.0), 65.0);
/// assert_eq_float!(store.get(2, 80.0), 65.0);
/// assert_eq_float!(store.get(3, 80.0), 52.5);
/// assert_eq_float!(store.get(4, 80.0), 52.5);
/// ```
pub fn update_epa(
    store: &mut RatingStore,
    default_rating: f64,
    red_teams: &[TeamNumber],
    blue_teams: &[TeamNumber],
    red_score: f64,
    blue_score: f64,
    params: MatchParameters,
) {
    let red_total = alliance_total(store, red_teams, default_rating);
    let blue_total = alliance_total(store, blue_teams, default_rating);

    let red_surprise = surprise(
        (red_score, red_total),
        (blue_score, blue_total),
        params.margin,
    );
    let blue_surprise = surprise(
        (blue_score, blue_total),
        (red_score, red_total),
        params.margin,
    );

    let step = params.step();
    let updates: Vec<(TeamNumber, f64)> = [(red_teams, red_surprise), (blue_teams, blue_surprise)]
        .into_iter()
        .flat_map(|(teams, alliance_surprise)| {
            let share = step * alliance_surprise / teams.len() as f64;
            teams.iter().map(move |&team| (team, share))
        })
        .map(|(team, share)| (team, store.get(team, default_rating) + share))
        .collect();

    for (team, rating) in updates {
        store.set(team, rating);
    }
}

/// Rates a single match given its 1-indexed position in its event.
pub fn process_match(
    store: &mut RatingStore,
    default_rating: f64,
    game: &Match,
    match_number: usize,
) {
    update_epa(
        store,
        default_rating,
        game.teams(Alliance::Red),
        game.teams(Alliance::Blue),
        game.score(Alliance::Red),
        game.score(Alliance::Blue),
        MatchParameters::for_match(match_number),
    );
}

/// Rates every match of an event, in chronological order.
///
/// The event's [default rating](crate::default_rating) seeds teams it introduces
/// and is returned so callers can keep using it for predictions.
/// Match numbers start at 1 for every event.
pub fn process_event(store: &mut RatingStore, matches: &[Match]) -> EventSummary {
    let default_rating = default_rating(matches);
    let ordered = order_matches(matches);

    for (match_number, game) in (1..).zip(&ordered) {
        process_match(store, default_rating, game, match_number);
    }

    EventSummary {
        default_rating,
        matches_processed: ordered.len(),
    }
}
