use chrono::{DateTime, NaiveDateTime};
use epa::{Alliance, Match, TeamNumber};
use serde::{Deserialize, Deserializer, de};
use serde_with::{DefaultOnNull, serde_as};

/// `GET /{season}/matches/{eventCode}`
pub fn matches_path(season: u16, event_code: &str) -> String {
    format!("/{season}/matches/{event_code}")
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct MatchesResponse {
    pub matches: Vec<MatchResult>,
}

#[serde_as]
#[derive(Debug, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    #[serde(default, deserialize_with = "de_start_time")]
    pub actual_start_time: Option<NaiveDateTime>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub score_red_final: f64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub score_blue_final: f64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub teams: Vec<MatchTeam>,
}

#[serde_as]
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MatchTeam {
    pub team_number: Option<TeamNumber>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub station: String,
}

impl MatchTeam {
    /// `Red1`, `Red2` play red, `Blue1`, `Blue2` play blue.
    pub fn alliance(&self) -> Option<Alliance> {
        if self.station.starts_with("Red") {
            Some(Alliance::Red)
        } else if self.station.starts_with("Blue") {
            Some(Alliance::Blue)
        } else {
            None
        }
    }
}

impl From<MatchResult> for Match {
    fn from(result: MatchResult) -> Self {
        let alliance_teams = |alliance: Alliance| -> Vec<TeamNumber> {
            result
                .teams
                .iter()
                .filter(|team| team.alliance() == Some(alliance))
                .filter_map(|team| team.team_number)
                .collect()
        };

        Self {
            red_teams: alliance_teams(Alliance::Red),
            blue_teams: alliance_teams(Alliance::Blue),
            red_score: result.score_red_final,
            blue_score: result.score_blue_final,
            actual_start_time: result.actual_start_time,
        }
    }
}

const START_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

fn de_start_time<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    NaiveDateTime::parse_from_str(raw, START_TIME_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.naive_utc()))
        .map(Some)
        .map_err(|err| de::Error::custom(format!("invalid actualStartTime `{raw}`: {err}")))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    const PAYLOAD: &str = r#"{
        "matches": [
            {
                "actualStartTime": "2024-01-13T09:05:12.45",
                "description": "Qualification 1",
                "tournamentLevel": "QUALIFICATION",
                "matchNumber": 1,
                "scoreRedFinal": 112,
                "scoreBlueFinal": 87,
                "teams": [
                    {"teamNumber": 16236, "station": "Red1", "dq": false, "onField": true},
                    {"teamNumber": 19456, "station": "Red2", "dq": false, "onField": true},
                    {"teamNumber": 7250, "station": "Blue1", "dq": false, "onField": true},
                    {"teamNumber": 8565, "station": "Blue2", "dq": false, "onField": true}
                ]
            },
            {
                "actualStartTime": null,
                "scoreRedFinal": null,
                "teams": [
                    {"teamNumber": 16236, "station": "Blue1"},
                    {"teamNumber": null, "station": "Blue2"},
                    {"teamNumber": 19456, "station": "Red1"},
                    {"teamNumber": 1, "station": "Field"}
                ]
            }
        ]
    }"#;

    #[test]
    fn path() {
        assert_eq!(matches_path(2024, "MXCMQ2"), "/2024/matches/MXCMQ2");
    }

    #[test]
    fn deser_matches_response() {
        let response: MatchesResponse = serde_json::from_str(PAYLOAD).unwrap();
        let start = NaiveDate::from_ymd_opt(2024, 1, 13)
            .and_then(|d| d.and_hms_milli_opt(9, 5, 12, 450))
            .unwrap();

        assert_eq!(response.matches.len(), 2);
        assert_eq!(response.matches[0].actual_start_time, Some(start));
        assert!((response.matches[0].score_red_final - 112.0).abs() < f64::EPSILON);
        assert!((response.matches[0].score_blue_final - 87.0).abs() < f64::EPSILON);
        assert_eq!(response.matches[1].actual_start_time, None);
        assert!(response.matches[1].score_red_final.abs() < f64::EPSILON);
        assert!(response.matches[1].score_blue_final.abs() < f64::EPSILON);
    }

    #[test]
    fn into_match_splits_alliances() {
        let response: MatchesResponse = serde_json::from_str(PAYLOAD).unwrap();
        let mut matches = response.matches.into_iter().map(Match::from);

        let first = matches.next().unwrap();
        assert_eq!(first.red_teams, vec![16236, 19456]);
        assert_eq!(first.blue_teams, vec![7250, 8565]);

        let second = matches.next().unwrap();
        assert_eq!(second.red_teams, vec![19456]);
        assert_eq!(second.blue_teams, vec![16236]);
        assert_eq!(second.actual_start_time, None);
    }

    #[test]
    fn empty_and_rfc3339_start_times() {
        let result: MatchResult =
            serde_json::from_str(r#"{"actualStartTime": "", "teams": null}"#).unwrap();
        assert_eq!(result, MatchResult::default());

        let result: MatchResult =
            serde_json::from_str(r#"{"actualStartTime": "2024-01-13T15:05:12Z"}"#).unwrap();
        let start = NaiveDate::from_ymd_opt(2024, 1, 13)
            .and_then(|d| d.and_hms_opt(15, 5, 12))
            .unwrap();
        assert_eq!(result.actual_start_time, Some(start));
    }

    #[test]
    fn malformed_start_time() {
        let err = serde_json::from_str::<MatchResult>(r#"{"actualStartTime": "yesterday"}"#)
            .unwrap_err();

        assert!(err.to_string().contains("invalid actualStartTime `yesterday`"));
    }

    #[test]
    fn station_alliance() {
        let team = |station: &str| MatchTeam {
            team_number: Some(1),
            station: station.to_string(),
        };

        assert_eq!(team("Red1").alliance(), Some(Alliance::Red));
        assert_eq!(team("Blue2").alliance(), Some(Alliance::Blue));
        assert_eq!(team("").alliance(), None);
    }

    #[test]
    fn null_or_missing_station_drops_only_that_team() {
        let result: MatchResult = serde_json::from_str(
            r#"{
                "scoreRedFinal": 40,
                "scoreBlueFinal": 30,
                "teams": [
                    {"teamNumber": 16236, "station": "Red1"},
                    {"teamNumber": 19456, "station": null},
                    {"teamNumber": 7250},
                    {"teamNumber": 8565, "station": "Blue2"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(result.teams[1].station, "");
        assert_eq!(result.teams[1].alliance(), None);

        let game = Match::from(result);
        assert_eq!(game.red_teams, vec![16236]);
        assert_eq!(game.blue_teams, vec![8565]);
    }
}
