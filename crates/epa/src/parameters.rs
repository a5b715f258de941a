//! Per-match learning rate (K-factor) and margin parameter (M).
//!
//! Both depend only on the match number, the 1-indexed position of a match in
//! its event's chronological order. Match numbers restart at 1 for every event.
//!
//! Early matches move ratings fast and judge every alliance on its own score.
//! Later on the K-factor settles at `0.3` while the margin parameter grows to `1`,
//! so the opposing alliance's over or under performance is taken into account too.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// K-factor for the first matches of an event.
pub const INITIAL_K_FACTOR: f64 = 0.5;
/// K-factor once an event is past its twelfth match.
pub const SETTLED_K_FACTOR: f64 = 0.3;

#[must_use]
/// K-factor for the `match_number`-th match of an event.
///
/// `0.5` up to match 6, then down by `1/30` per match, `0.3` after match 12.
///
/// # Examples
/// ```rust
/// # use assert_eq_float::assert_eq_float;
/// use epa::k_factor;
///
/// assert_eq_float!(k_factor(1), 0.5);
/// assert_eq_float!(k_factor(9), 0.4);
/// assert_eq_float!(k_factor(40), 0.3);
/// ```
pub const fn k_factor(match_number: usize) -> f64 {
    if match_number <= 6 {
        INITIAL_K_FACTOR
    } else if match_number <= 12 {
        INITIAL_K_FACTOR - (match_number - 6) as f64 / 30.0
    } else {
        SETTLED_K_FACTOR
    }
}

#[must_use]
/// Margin parameter for the `match_number`-th match of an event.
///
/// `0` up to match 12, grows by `1/24` per match, `1` after match 36.
///
/// # Examples
/// ```rust
/// # use assert_eq_float::assert_eq_float;
/// use epa::margin_parameter;
///
/// assert_eq_float!(margin_parameter(12), 0.0);
/// assert_eq_float!(margin_parameter(24), 0.5);
/// assert_eq_float!(margin_parameter(36), 1.0);
/// ```
pub const fn margin_parameter(match_number: usize) -> f64 {
    if match_number <= 12 {
        0.0
    } else if match_number <= 36 {
        (match_number - 12) as f64 / 24.0
    } else {
        1.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// The K-factor and margin parameter applied to a single match.
pub struct MatchParameters {
    /// Learning rate, in `[0.3, 0.5]`.
    pub k_factor: f64,
    /// Margin parameter, in `[0, 1]`.
    pub margin: f64,
}

impl MatchParameters {
    #[must_use]
    /// Parameters for the `match_number`-th match of an event.
    pub const fn for_match(match_number: usize) -> Self {
        Self {
            k_factor: k_factor(match_number),
            margin: margin_parameter(match_number),
        }
    }

    #[must_use]
    /// Effective step size, `k / (1 + m)`.
    pub fn step(self) -> f64 {
        self.k_factor / (1.0 + self.margin)
    }
}
