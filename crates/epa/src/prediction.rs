//! Match predictions from current ratings.
//!
//! Ratings are read as expected points, so an alliance's predicted score is the sum of its
//! members' EPAs. Win probabilities come from an Elo-style logistic curve on the gap between
//! the two totals, taken in the opposing direction:
//!
//! ```text
//! blue = 1 / (1 + 10^((blue_total - red_total) / 400))
//! red  = 1 - blue
//! ```
//!
//! The winner label only looks at the predicted margin.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Alliance, TeamNumber, store::RatingStore};

/// Score gap, in points, that moves the odds by a factor of ten.
pub const LOGISTIC_SCALE: f64 = 400.0;

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// Predicted outcome of a hypothetical match.
pub struct Prediction {
    /// Predicted red alliance score.
    pub red_score: f64,
    /// Predicted blue alliance score.
    pub blue_score: f64,
    /// `red_score - blue_score`.
    pub margin: f64,
    /// Probability of a red win, from 0.0 to 1.0.
    pub red_win_probability: f64,
    /// Probability of a blue win, `1 - red_win_probability`.
    pub blue_win_probability: f64,
    /// Red if the margin is positive, otherwise Blue.
    pub winner: Alliance,
}

#[must_use]
/// Win probabilities `(red, blue)` for two alliance totals.
///
/// A 400 point gap puts the odds at 10:1, in favour of the alliance with the lower total.
///
/// # Examples
/// ```rust
/// # use assert_eq_float::assert_eq_float;
/// use epa::win_probability;
///
/// let (red, blue) = win_probability(150.0, 150.0);
/// assert_eq_float!(red, 0.5);
/// assert_eq_float!(blue, 0.5);
///
/// let (red, blue) = win_probability(560.0, 160.0);
/// assert_eq_float!((blue * 1000.0).round(), 909.0);
/// assert!((red + blue - 1.0).abs() < 1e-12);
/// ```
pub fn win_probability(red_total: f64, blue_total: f64) -> (f64, f64) {
    let difference = blue_total - red_total;
    let blue = 1.0 / (1.0 + 10f64.powf(difference / LOGISTIC_SCALE));

    (1.0 - blue, blue)
}

#[must_use]
/// Predicts a match between `red` and `blue` from the ratings in `store`.
///
/// Unrated teams count as `default_rating`. The store is only read.
/// An even margin goes to the blue alliance.
///
/// # Examples
/// ```rust
/// # use assert_eq_float::assert_eq_float;
/// use epa::{Alliance, RatingStore, predict};
///
/// let mut store = RatingStore::new();
/// store.set(16_236, 110.0);
/// store.set(19_456, 95.0);
///
/// let prediction = predict(&store, 60.0, [16_236, 19_456], [7_250, 8_565]);
///
/// assert_eq_float!(prediction.red_score, 205.0);
/// assert_eq_float!(prediction.blue_score, 120.0);
/// assert_eq_float!(prediction.margin, 85.0);
/// assert!((prediction.red_win_probability + prediction.blue_win_probability - 1.0).abs() < 1e-12);
/// assert_eq!(prediction.winner, Alliance::Red);
/// assert!(!store.contains(7_250));
/// ```
pub fn predict(
    store: &RatingStore,
    default_rating: f64,
    red: [TeamNumber; 2],
    blue: [TeamNumber; 2],
) -> Prediction {
    let red_score: f64 = red.iter().map(|&team| store.get(team, default_rating)).sum();
    let blue_score: f64 = blue.iter().map(|&team| store.get(team, default_rating)).sum();
    let margin = red_score - blue_score;
    let (red_win_probability, blue_win_probability) = win_probability(red_score, blue_score);

    Prediction {
        red_score,
        blue_score,
        margin,
        red_win_probability,
        blue_win_probability,
        winner: if margin > 0.0 {
            Alliance::Red
        } else {
            Alliance::Blue
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_eq_float::assert_eq_float;

    fn store() -> RatingStore {
        let mut store = RatingStore::new();
        for (team, rating) in [(1, 70.0), (2, 30.0), (3, 55.0), (4, 45.0), (5, 120.0)] {
            store.set(team, rating);
        }
        store
    }

    #[test]
    fn even_alliances() {
        let prediction = predict(&store(), 80.0, [1, 2], [3, 4]);

        assert_eq_float!(prediction.margin, 0.0);
        assert_eq_float!(prediction.red_win_probability, 0.5);
        assert_eq_float!(prediction.blue_win_probability, 0.5);
        assert_eq!(prediction.winner, Alliance::Blue);
    }

    #[test]
    fn stronger_red() {
        let prediction = predict(&store(), 80.0, [5, 1], [3, 4]);

        assert_eq_float!(prediction.red_score, 190.0);
        assert_eq_float!(prediction.blue_score, 100.0);
        assert_eq_float!(prediction.margin, 90.0);
        assert_eq_float!((prediction.red_win_probability * 1000.0).round(), 373.0);
        assert_eq_float!((prediction.blue_win_probability * 1000.0).round(), 627.0);
        assert_eq!(prediction.winner, Alliance::Red);
    }

    #[test]
    fn stronger_blue() {
        let prediction = predict(&store(), 80.0, [2, 4], [5, 3]);

        assert_eq_float!(prediction.margin, -100.0);
        assert_eq_float!((prediction.red_win_probability * 1000.0).round(), 640.0);
        assert_eq_float!((prediction.blue_win_probability * 1000.0).round(), 360.0);
        assert_eq!(prediction.winner, Alliance::Blue);
    }

    #[test]
    fn unknown_teams_use_default_without_writing() {
        let store = store();
        let prediction = predict(&store, 42.0, [100, 101], [1, 2]);

        assert_eq_float!(prediction.red_score, 84.0);
        assert!(!store.contains(100));
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn prediction_is_idempotent() {
        let store = store();

        assert_eq!(
            predict(&store, 80.0, [1, 3], [2, 5]),
            predict(&store, 80.0, [1, 3], [2, 5])
        );
    }

    #[test]
    fn probabilities_sum_to_one() {
        for (red, blue) in [(0.0, 0.0), (10.0, 900.0), (-50.0, 25.0), (1e4, 1.0)] {
            let (red_win, blue_win) = win_probability(red, blue);
            assert!((red_win + blue_win - 1.0).abs() < 1e-12);
            assert!((0.0..=1.0).contains(&red_win));
        }
    }

    #[test]
    fn logistic_scale() {
        // 400 points between the totals means 10:1 odds
        let (red, blue) = win_probability(500.0, 100.0);

        assert_eq_float!((red * 1000.0).round(), 91.0);
        assert_eq_float!((blue * 1000.0).round(), 909.0);
    }
}
