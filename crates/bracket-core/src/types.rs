//! Canonical bracket types shared by every provider.
//!
//! Providers disagree on nearly everything (numeric vs string IDs, where the
//! display name lives, whether timestamps exist at the tournament level), so
//! the types here are the single shape every adapter converts into.

use crate::error::CoreError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One tournament snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bracket {
    /// Canonical link for this bracket
    pub url: String,

    /// Tournament name, empty when the provider does not expose one
    pub name: String,

    /// Tournament state, absent when the provider reports none
    pub state: Option<State>,

    /// When the tournament started
    pub started_at: Option<Timestamp>,

    /// When the tournament was last updated
    pub updated_at: Option<Timestamp>,

    /// Participants in provider response order
    pub players: Vec<Player>,

    /// Matches, with synthetic placeholder entries removed
    pub matches: Vec<Match>,
}

impl Bracket {
    /// Create an empty bracket for the given URL.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            name: String::new(),
            state: None,
            started_at: None,
            updated_at: None,
            players: Vec::new(),
            matches: Vec::new(),
        }
    }

    /// Look up a player by ID.
    #[must_use]
    pub fn player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Player IDs referenced by matches that have no matching `Player`.
    ///
    /// Providers occasionally reference entrants outside the returned
    /// participant set. Each ID is reported once, in first-seen order.
    #[must_use]
    pub fn unresolved_player_ids(&self) -> Vec<&str> {
        let mut unresolved: Vec<&str> = Vec::new();
        for m in &self.matches {
            for id in [m.player1_id.as_str(), m.player2_id.as_str()] {
                if !id.is_empty() && self.player(id).is_none() && !unresolved.contains(&id) {
                    unresolved.push(id);
                }
            }
        }
        unresolved
    }
}

/// One tournament participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Provider ID rendered as a string
    pub id: String,

    /// Display name
    pub name: String,

    /// Provider-assigned seed
    pub seed: u32,

    /// Final placement, known once the tournament is decided
    pub rank: Option<u32>,
}

/// One bracket match (a "set" on some providers).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    /// Opaque provider ID
    pub id: String,

    /// Human-facing label such as `"A"`
    pub identifier: String,

    /// Round number; negative rounds belong to the losers bracket
    pub round: i32,

    /// Match state
    pub state: State,

    /// When the match started
    pub started_at: Option<Timestamp>,

    /// When the match was last updated
    pub updated_at: Option<Timestamp>,

    /// First slot's player ID, empty until determined
    pub player1_id: String,

    /// Second slot's player ID, empty until determined
    pub player2_id: String,

    /// Match feeding the first slot, absent for seeded slots
    pub player1_prereq_match_id: Option<String>,

    /// Match feeding the second slot, absent for seeded slots
    pub player2_prereq_match_id: Option<String>,

    /// Winner's player ID, empty unless complete
    pub winner_id: String,

    /// Loser's player ID, empty unless complete
    pub loser_id: String,

    /// Aggregate score of the first slot
    pub player1_score: i64,

    /// Aggregate score of the second slot
    pub player2_score: i64,
}

impl Match {
    /// Whether both participant slots are filled.
    #[must_use]
    pub fn has_both_players(&self) -> bool {
        !self.player1_id.is_empty() && !self.player2_id.is_empty()
    }
}

/// Progress of a match or tournament.
///
/// Moves only forward: `Pending` to `Open` to `Complete`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum State {
    /// Waiting on participants or scheduling
    #[default]
    Pending,
    /// Both participants known, being played
    Open,
    /// Result recorded
    Complete,
}

impl State {
    /// Lowercase wire name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Open => "open",
            Self::Complete => "complete",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for State {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "open" => Ok(Self::Open),
            "complete" => Ok(Self::Complete),
            other => Err(CoreError::InvalidState(other.to_string())),
        }
    }
}

/// Wrapper around `chrono::DateTime<Utc>` for consistent timestamp handling.
///
/// Provider offsets are normalized to UTC so equal instants compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a timestamp from a `DateTime<Utc>`.
    #[must_use]
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Create a timestamp from whole seconds since the Unix epoch.
    ///
    /// Returns `None` when the value is out of chrono's range.
    #[must_use]
    pub fn from_unix(secs: i64) -> Option<Self> {
        DateTime::from_timestamp(secs, 0).map(Self)
    }

    /// Get the inner `DateTime<Utc>`.
    #[must_use]
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Parse a timestamp from an RFC3339 string.
    pub fn from_rfc3339(s: &str) -> Result<Self, CoreError> {
        DateTime::parse_from_rfc3339(s)
            .map(|dt| Self(dt.with_timezone(&Utc)))
            .map_err(|e| CoreError::InvalidTimestamp(format!("{s}: {e}")))
    }

    /// Format as RFC3339 string.
    #[must_use]
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339()
    }

    /// Get seconds since Unix epoch.
    #[must_use]
    pub fn timestamp(&self) -> i64 {
        self.0.timestamp()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

impl<Tz: chrono::TimeZone> From<&DateTime<Tz>> for Timestamp {
    fn from(dt: &DateTime<Tz>) -> Self {
        Self(dt.with_timezone(&Utc))
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_match(id: &str, p1: &str, p2: &str) -> Match {
        Match {
            id: id.to_string(),
            identifier: "A".to_string(),
            round: 1,
            state: State::Pending,
            started_at: None,
            updated_at: None,
            player1_id: p1.to_string(),
            player2_id: p2.to_string(),
            player1_prereq_match_id: None,
            player2_prereq_match_id: None,
            winner_id: String::new(),
            loser_id: String::new(),
            player1_score: 0,
            player2_score: 0,
        }
    }

    fn sample_player(id: &str) -> Player {
        Player {
            id: id.to_string(),
            name: format!("player {id}"),
            seed: 1,
            rank: None,
        }
    }

    #[test]
    fn test_state_ordering_moves_forward() {
        assert!(State::Pending < State::Open);
        assert!(State::Open < State::Complete);
    }

    #[test]
    fn test_state_from_str() {
        assert_eq!("open".parse::<State>().expect("parse open"), State::Open);
        assert_eq!(
            "complete".parse::<State>().expect("parse complete"),
            State::Complete
        );
        assert!("underway".parse::<State>().is_err());
    }

    #[test]
    fn test_state_serialization() {
        let json = serde_json::to_string(&State::Complete).expect("serialize state");
        assert_eq!(json, "\"complete\"");
    }

    #[test]
    fn test_player_lookup() {
        let mut bracket = Bracket::new("https://example.com/bracket");
        bracket.players = vec![sample_player("1"), sample_player("2")];

        assert_eq!(bracket.player("2").map(|p| p.name.as_str()), Some("player 2"));
        assert!(bracket.player("3").is_none());
    }

    #[test]
    fn test_unresolved_player_ids() {
        let mut bracket = Bracket::new("https://example.com/bracket");
        bracket.players = vec![sample_player("1"), sample_player("2")];
        bracket.matches = vec![
            sample_match("10", "1", "2"),
            sample_match("11", "1", "99"),
            sample_match("12", "99", ""),
        ];

        assert_eq!(bracket.unresolved_player_ids(), vec!["99"]);
    }

    #[test]
    fn test_has_both_players() {
        assert!(sample_match("1", "a", "b").has_both_players());
        assert!(!sample_match("1", "a", "").has_both_players());
    }

    #[test]
    fn test_timestamp_offsets_normalize_to_utc() {
        let mountain = Timestamp::from_rfc3339("2016-04-02T21:02:39.766-06:00")
            .expect("parse offset timestamp");
        let utc = Timestamp::from_rfc3339("2016-04-03T03:02:39.766Z").expect("parse utc timestamp");
        assert_eq!(mountain, utc);
    }

    #[test]
    fn test_timestamp_from_unix() {
        let ts = Timestamp::from_unix(1_468_187_020).expect("in range");
        assert_eq!(ts.timestamp(), 1_468_187_020);
        assert_eq!(ts.to_rfc3339(), "2016-07-10T21:43:40+00:00");
    }

    #[test]
    fn test_bracket_json_field_names() {
        let mut bracket = Bracket::new("https://example.com/bracket");
        bracket.matches = vec![sample_match("10", "1", "2")];
        let json = serde_json::to_value(&bracket).expect("serialize bracket");

        assert!(json.get("startedAt").is_some());
        assert_eq!(json["matches"][0]["player1Id"], "1");
        assert!(json["matches"][0]["player1PrereqMatchId"].is_null());
    }
}
