#![deny(
    missing_docs,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    // `EpaEngine`-style names read better than the alternatives here
    clippy::module_name_repetitions,
    // "FTC" and "EPA" show up as false positives otherwise
    clippy::doc_markdown,
    // Match numbers and alliance sizes are small, precision is not a concern.
    clippy::cast_precision_loss,
)]
#![doc = include_str!("../README.md")]

use std::fmt;

use chrono::NaiveDateTime;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod baseline;
pub mod epa;
pub mod parameters;
pub mod prediction;
pub mod schedule;
pub mod store;

pub use baseline::{FALLBACK_RATING, default_rating};
pub use epa::{EventSummary, process_event, process_match, update_epa};
pub use parameters::{MatchParameters, k_factor, margin_parameter};
pub use prediction::{Prediction, predict, win_probability};
pub use schedule::order_matches;
pub use store::{INITIAL_DEFAULT_RATING, RatingStore};

/// The competition's team number.
///
/// Nothing is assumed about it beyond equality, hashing and ordering.
pub type TeamNumber = u32;

/// One of the two sides of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Alliance {
    /// The red alliance.
    Red,
    /// The blue alliance.
    Blue,
}

impl Alliance {
    #[must_use]
    /// Human readable label, `"Red Alliance"` or `"Blue Alliance"`.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Red => "Red Alliance",
            Self::Blue => "Blue Alliance",
        }
    }
}

impl fmt::Display for Alliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A played match, as consumed by the rating engine.
///
/// Alliances normally hold two teams each, but the engine works with whatever
/// teams are present. Unscored matches carry `0.0` for both scores.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Match {
    /// Teams playing on the red alliance.
    pub red_teams: Vec<TeamNumber>,
    /// Teams playing on the blue alliance.
    pub blue_teams: Vec<TeamNumber>,
    /// Final red alliance score.
    pub red_score: f64,
    /// Final blue alliance score.
    pub blue_score: f64,
    /// When the match actually started. Only used for ordering, missing times sort first.
    pub actual_start_time: Option<NaiveDateTime>,
}

impl Match {
    #[must_use]
    /// Creates a match without a start time.
    pub const fn new(
        red_teams: Vec<TeamNumber>,
        blue_teams: Vec<TeamNumber>,
        red_score: f64,
        blue_score: f64,
    ) -> Self {
        Self {
            red_teams,
            blue_teams,
            red_score,
            blue_score,
            actual_start_time: None,
        }
    }

    #[must_use]
    /// Sets the actual start time of the match.
    pub fn started_at(mut self, actual_start_time: NaiveDateTime) -> Self {
        self.actual_start_time = Some(actual_start_time);
        self
    }

    #[must_use]
    /// Teams of the given alliance.
    pub fn teams(&self, alliance: Alliance) -> &[TeamNumber] {
        match alliance {
            Alliance::Red => &self.red_teams,
            Alliance::Blue => &self.blue_teams,
        }
    }

    #[must_use]
    /// Final score of the given alliance.
    pub const fn score(&self, alliance: Alliance) -> f64 {
        match alliance {
            Alliance::Red => self.red_score,
            Alliance::Blue => self.blue_score,
        }
    }
}
