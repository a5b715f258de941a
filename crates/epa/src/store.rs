//! In-memory table of current team ratings.

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::TeamNumber;

/// Default rating in force before any event has set one.
pub const INITIAL_DEFAULT_RATING: f64 = 80.0;

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "Vec<(TeamNumber, f64)>", into = "Vec<(TeamNumber, f64)>")
)]
/// Current EPA of every team seen so far.
///
/// Entries are never removed and keep the order in which teams were first rated.
/// Reads of unknown teams fall back to a caller supplied default rating
/// without storing anything.
///
/// Serializes as the list of `(team, rating)` pairs. The lookup index is rebuilt
/// on deserialization, and a team listed twice keeps its first position and last rating.
pub struct RatingStore {
    entries: Vec<(TeamNumber, f64)>,
    index: HashMap<TeamNumber, usize>,
}

impl RatingStore {
    #[must_use]
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    /// Current rating of `team`, or `default_rating` if the team was never rated.
    pub fn get(&self, team: TeamNumber, default_rating: f64) -> f64 {
        self.index
            .get(&team)
            .and_then(|&position| self.entries.get(position))
            .map_or(default_rating, |&(_, rating)| rating)
    }

    /// Stores `rating` as the current rating of `team`.
    pub fn set(&mut self, team: TeamNumber, rating: f64) {
        if let Some(&position) = self.index.get(&team) {
            self.entries[position].1 = rating;
        } else {
            self.index.insert(team, self.entries.len());
            self.entries.push((team, rating));
        }
    }

    #[must_use]
    /// Whether `team` has a stored rating.
    pub fn contains(&self, team: TeamNumber) -> bool {
        self.index.contains_key(&team)
    }

    #[must_use]
    /// Number of rated teams.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    /// Whether no team has been rated yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    /// Every `(team, rating)` pair, in the order teams were first rated.
    pub fn entries(&self) -> &[(TeamNumber, f64)] {
        &self.entries
    }

    #[must_use]
    /// The `n` highest rated teams, best first.
    ///
    /// Teams with equal ratings keep the order in which they were first rated.
    ///
    /// # Examples
    /// ```rust
    /// use epa::RatingStore;
    ///
    /// let mut store = RatingStore::new();
    /// store.set(7, 50.0);
    /// store.set(3, 90.0);
    /// store.set(9, 50.0);
    ///
    /// assert_eq!(store.top(2), vec![(3, 90.0), (7, 50.0)]);
    /// assert_eq!(store.top(10).len(), 3);
    /// ```
    pub fn top(&self, n: usize) -> Vec<(TeamNumber, f64)> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|(_, a), (_, b)| b.total_cmp(a));
        ranked.truncate(n);
        ranked
    }
}

impl FromIterator<(TeamNumber, f64)> for RatingStore {
    fn from_iter<I: IntoIterator<Item = (TeamNumber, f64)>>(iter: I) -> Self {
        let mut store = Self::new();
        for (team, rating) in iter {
            store.set(team, rating);
        }
        store
    }
}

impl From<Vec<(TeamNumber, f64)>> for RatingStore {
    fn from(entries: Vec<(TeamNumber, f64)>) -> Self {
        entries.into_iter().collect()
    }
}

impl From<RatingStore> for Vec<(TeamNumber, f64)> {
    fn from(store: RatingStore) -> Self {
        store.entries
    }
}
