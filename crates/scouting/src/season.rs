use std::{fmt::Display, future::Future};

use epa::{EventSummary, INITIAL_DEFAULT_RATING, Match, RatingStore, process_event};
use tracing::{info, warn};

use crate::ftc::{self, FtcClient};

/// Supplies the complete, already parsed match list of an event.
pub trait MatchSource {
    type Error: Display;

    fn matches(&self, event_code: &str) -> impl Future<Output = Result<Vec<Match>, Self::Error>>;
}

/// [`MatchSource`] backed by the FTC Events API.
#[derive(Debug, Clone, Copy)]
pub struct FtcSource<'a> {
    pub client: &'a FtcClient,
    pub http_client: &'a reqwest::Client,
}

impl MatchSource for FtcSource<'_> {
    type Error = ftc::Error;

    fn matches(&self, event_code: &str) -> impl Future<Output = Result<Vec<Match>, ftc::Error>> {
        self.client.fetch_matches(self.http_client, event_code)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventOutcome {
    pub event_code: String,
    pub summary: EventSummary,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Season {
    /// Default rating of the last rated event, used for predictions.
    pub default_rating: f64,
    pub events: Vec<EventOutcome>,
    /// Events whose matches could not be fetched.
    pub skipped: Vec<String>,
}

impl Default for Season {
    fn default() -> Self {
        Self {
            default_rating: INITIAL_DEFAULT_RATING,
            events: Vec::new(),
            skipped: Vec::new(),
        }
    }
}

/// Rates `event_codes` one after the other, carrying ratings across events.
///
/// Events that fail to load are logged and skipped.
pub async fn run_season<S: MatchSource>(
    source: &S,
    event_codes: &[String],
    store: &mut RatingStore,
) -> Season {
    let mut season = Season::default();

    for event_code in event_codes {
        let matches = match source.matches(event_code).await {
            Ok(matches) => matches,
            Err(err) => {
                warn!("skipping event {event_code}: {err}");
                season.skipped.push(event_code.clone());
                continue;
            }
        };

        let summary = process_event(store, &matches);
        info!(
            "Default EPA for {event_code}: {:.2} ({} matches)",
            summary.default_rating, summary.matches_processed
        );

        season.default_rating = summary.default_rating;
        season.events.push(EventOutcome {
            event_code: event_code.clone(),
            summary,
        });
    }

    info!(
        "rated {} teams across {} events, {} skipped",
        store.len(),
        season.events.len(),
        season.skipped.len()
    );

    season
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    struct InMemorySource(HashMap<String, Vec<Match>>);

    impl MatchSource for InMemorySource {
        type Error = String;

        async fn matches(&self, event_code: &str) -> Result<Vec<Match>, String> {
            self.0
                .get(event_code)
                .cloned()
                .ok_or_else(|| format!("unknown event {event_code}"))
        }
    }

    fn codes(codes: &[&str]) -> Vec<String> {
        codes.iter().map(ToString::to_string).collect()
    }

    fn source() -> InMemorySource {
        InMemorySource(HashMap::from([
            (
                "QUAL1".to_string(),
                vec![Match::new(vec![1, 2], vec![3, 4], 100.0, 60.0)],
            ),
            (
                "QUAL2".to_string(),
                vec![
                    Match::new(vec![1, 5], vec![6, 7], 40.0, 40.0),
                    Match::new(vec![5, 6], vec![1, 7], 20.0, 60.0),
                ],
            ),
            ("EMPTY".to_string(), vec![]),
        ]))
    }

    #[tokio::test]
    async fn ratings_carry_across_events() {
        let mut store = RatingStore::new();
        let season = run_season(&source(), &codes(&["QUAL1", "QUAL2"]), &mut store).await;

        let mut expected = RatingStore::new();
        process_event(
            &mut expected,
            &[Match::new(vec![1, 2], vec![3, 4], 100.0, 60.0)],
        );
        process_event(
            &mut expected,
            &[
                Match::new(vec![1, 5], vec![6, 7], 40.0, 40.0),
                Match::new(vec![5, 6], vec![1, 7], 20.0, 60.0),
            ],
        );

        assert_eq!(store, expected);
        assert_eq!(store.len(), 7);
        assert_eq!(season.events.len(), 2);
        assert!((season.events[0].summary.default_rating - 40.0).abs() < f64::EPSILON);
        assert!((season.default_rating - 20.0).abs() < f64::EPSILON);
        assert!(season.skipped.is_empty());
    }

    #[tokio::test]
    async fn failed_events_are_skipped() {
        let mut store = RatingStore::new();
        let season = run_season(&source(), &codes(&["MISSING", "QUAL1"]), &mut store).await;

        assert_eq!(season.skipped, vec!["MISSING"]);
        assert_eq!(season.events.len(), 1);
        assert_eq!(season.events[0].event_code, "QUAL1");
        assert_eq!(store.len(), 4);
    }

    #[tokio::test]
    async fn empty_event_resets_default_to_fallback() {
        let mut store = RatingStore::new();
        let season = run_season(&source(), &codes(&["QUAL1", "EMPTY"]), &mut store).await;

        assert!((season.default_rating - 60.0).abs() < f64::EPSILON);
        assert_eq!(season.events[1].summary.matches_processed, 0);
        assert_eq!(store.len(), 4);
    }

    #[tokio::test]
    async fn nothing_rated_keeps_initial_default() {
        let mut store = RatingStore::new();
        let season = run_season(&source(), &codes(&["MISSING"]), &mut store).await;

        assert!((season.default_rating - INITIAL_DEFAULT_RATING).abs() < f64::EPSILON);
        assert!(store.is_empty());
    }
}
