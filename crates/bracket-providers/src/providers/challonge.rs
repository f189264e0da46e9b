//! Challonge provider implementation.

use crate::error::{BracketError, Result};
use crate::provider::{BracketProvider, ProviderRequest};
use crate::providers::common::{
    aggregate_scores, id_string, null_as_default, optional_id, settled_result,
};
use bracket_core::{Bracket, ChallongeConfig, Match, Player, State, Timestamp};
use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use tracing::debug;
use url::Url;

const API_BASE_URL: &str = "https://api.challonge.com/v1/tournaments";

/// Challonge API provider.
///
/// Challonge requires HTTP basic auth with an account name and API key; the
/// provider sends them with every request when configured.
pub struct ChallongeProvider {
    username: Option<String>,
    api_key: Option<String>,
}

impl ChallongeProvider {
    /// Create a provider with the given credentials.
    #[must_use]
    pub fn new(username: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            api_key: Some(api_key.into()),
        }
    }

    /// Create a provider from configuration; missing credentials send no auth.
    #[must_use]
    pub fn from_config(config: &ChallongeConfig) -> Self {
        Self {
            username: config.username.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Build the API URL for a bracket URL.
    fn api_url(url: &str) -> Result<String> {
        let hash = tournament_hash(url).ok_or_else(|| BracketError::InvalidUrl {
            provider: "challonge".to_string(),
            url: url.to_string(),
            reason: "no tournament segment in path".to_string(),
        })?;
        Ok(format!(
            "{API_BASE_URL}/{hash}.json?include_matches=1&include_participants=1"
        ))
    }
}

/// Derive Challonge's tournament identifier from a bracket URL.
///
/// The identifier is the last path segment, prefixed with `"<org>-"` when the
/// tournament lives under an organization subdomain
/// (`smashchateau.challonge.com/melee_halloween` becomes
/// `smashchateau-melee_halloween`).
#[must_use]
pub fn tournament_hash(url: &str) -> Option<String> {
    let url = url.trim();
    let parsed = Url::parse(url)
        .or_else(|_| Url::parse(&format!("https://{url}")))
        .ok()?;

    let slug = parsed
        .path_segments()?
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .next_back()?
        .to_string();

    let labels: Vec<&str> = parsed.host_str()?.split('.').collect();
    match labels.as_slice() {
        [org, _, _, ..] if *org != "www" => Some(format!("{org}-{slug}")),
        _ => Some(slug),
    }
}

impl BracketProvider for ChallongeProvider {
    type Payload = ChallongeResponse;

    fn provider_id(&self) -> &'static str {
        "challonge"
    }

    fn recognizes(&self, url: &str) -> bool {
        url.contains("challonge")
    }

    fn build_request(&self, url: &str) -> Result<ProviderRequest> {
        let request = ProviderRequest::get(Self::api_url(url)?);
        debug!("Challonge request URL: {}", request.url);

        Ok(match (&self.username, &self.api_key) {
            (Some(username), Some(api_key)) => request.with_basic_auth(username, api_key),
            _ => request,
        })
    }

    fn convert(&self, payload: ChallongeResponse, source_url: &str) -> Bracket {
        let tournament = payload.tournament;

        let url = if tournament.full_challonge_url.is_empty() {
            source_url.to_string()
        } else {
            tournament.full_challonge_url
        };

        Bracket {
            url,
            name: tournament.name,
            state: tournament_state(&tournament.state),
            started_at: tournament.started_at.as_ref().map(Timestamp::from),
            updated_at: tournament.updated_at.as_ref().map(Timestamp::from),
            players: tournament
                .participants
                .into_iter()
                .map(|envelope| convert_participant(envelope.participant))
                .collect(),
            matches: tournament
                .matches
                .into_iter()
                .map(|envelope| convert_match(envelope.r#match))
                .collect(),
        }
    }
}

/// Map a Challonge tournament state onto the canonical three states.
///
/// A missing state stays unknown rather than being guessed.
fn tournament_state(state: &str) -> Option<State> {
    match state.trim() {
        "" => None,
        "pending" | "checking_in" | "checked_in" => Some(State::Pending),
        "complete" => Some(State::Complete),
        _ => Some(State::Open),
    }
}

fn convert_participant(participant: ChallongeParticipant) -> Player {
    let name = if participant.display_name.is_empty() {
        participant.name
    } else {
        participant.display_name
    };

    Player {
        id: participant.id.to_string(),
        name,
        seed: participant.seed,
        rank: participant.final_rank,
    }
}

fn convert_match(m: ChallongeMatch) -> Match {
    let state: State = m.state.parse().unwrap_or_default();
    let (player1_score, player2_score) = aggregate_scores(&m.scores_csv);
    let (winner_id, loser_id) = settled_result(state, m.winner_id, m.loser_id);

    Match {
        id: m.id.to_string(),
        identifier: m.identifier,
        round: m.round,
        state,
        started_at: m.started_at.as_ref().map(Timestamp::from),
        updated_at: m.updated_at.as_ref().map(Timestamp::from),
        player1_id: id_string(m.player1_id),
        player2_id: id_string(m.player2_id),
        player1_prereq_match_id: optional_id(m.player1_prereq_match_id),
        player2_prereq_match_id: optional_id(m.player2_prereq_match_id),
        winner_id,
        loser_id,
        player1_score,
        player2_score,
    }
}

// Challonge API types

/// Top-level `tournaments/<hash>.json` response.
#[derive(Debug, Clone, Deserialize)]
pub struct ChallongeResponse {
    /// The requested tournament
    pub tournament: ChallongeTournament,
}

/// Tournament record with participants and matches included.
#[derive(Debug, Clone, Deserialize)]
pub struct ChallongeTournament {
    /// Numeric tournament ID
    pub id: i64,
    /// Tournament name
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Challonge state name (`pending`, `underway`, `complete`, ...)
    #[serde(default, deserialize_with = "null_as_default")]
    pub state: String,
    /// When the tournament started
    #[serde(default)]
    pub started_at: Option<DateTime<FixedOffset>>,
    /// When the tournament was finalized
    #[serde(default)]
    pub completed_at: Option<DateTime<FixedOffset>>,
    /// When the tournament was created
    #[serde(default)]
    pub created_at: Option<DateTime<FixedOffset>>,
    /// Last modification time
    #[serde(default)]
    pub updated_at: Option<DateTime<FixedOffset>>,
    /// Public bracket URL
    #[serde(default, deserialize_with = "null_as_default")]
    pub full_challonge_url: String,
    /// Participants, each wrapped in an envelope
    #[serde(default, deserialize_with = "null_as_default")]
    pub participants: Vec<ParticipantEnvelope>,
    /// Matches, each wrapped in an envelope
    #[serde(default, deserialize_with = "null_as_default")]
    pub matches: Vec<MatchEnvelope>,
}

/// `{"participant": {...}}` wrapper.
#[derive(Debug, Clone, Deserialize)]
pub struct ParticipantEnvelope {
    /// The wrapped participant
    pub participant: ChallongeParticipant,
}

/// Tournament participant.
#[derive(Debug, Clone, Deserialize)]
pub struct ChallongeParticipant {
    /// Numeric participant ID
    pub id: i64,
    /// Registered name
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Seed
    #[serde(default, deserialize_with = "null_as_default")]
    pub seed: u32,
    /// Final placement, null until the tournament ends
    #[serde(default)]
    pub final_rank: Option<u32>,
    /// Name shown in the bracket
    #[serde(default, deserialize_with = "null_as_default")]
    pub display_name: String,
}

/// `{"match": {...}}` wrapper.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchEnvelope {
    /// The wrapped match
    #[serde(rename = "match")]
    pub r#match: ChallongeMatch,
}

/// Bracket match.
#[derive(Debug, Clone, Deserialize)]
pub struct ChallongeMatch {
    /// Numeric match ID
    pub id: i64,
    /// Bracket label (`"A"`, `"B"`, ...)
    #[serde(default, deserialize_with = "null_as_default")]
    pub identifier: String,
    /// Round; negative in the losers bracket
    #[serde(default, deserialize_with = "null_as_default")]
    pub round: i32,
    /// When the match started
    #[serde(default)]
    pub started_at: Option<DateTime<FixedOffset>>,
    /// When the match was completed
    #[serde(default)]
    pub completed_at: Option<DateTime<FixedOffset>>,
    /// When the match was created
    #[serde(default)]
    pub created_at: Option<DateTime<FixedOffset>>,
    /// Last modification time
    #[serde(default)]
    pub updated_at: Option<DateTime<FixedOffset>>,
    /// `pending`, `open` or `complete`
    #[serde(default, deserialize_with = "null_as_default")]
    pub state: String,
    /// First participant, null until known
    #[serde(default)]
    pub player1_id: Option<i64>,
    /// Second participant, null until known
    #[serde(default)]
    pub player2_id: Option<i64>,
    /// Match feeding the first slot
    #[serde(default)]
    pub player1_prereq_match_id: Option<i64>,
    /// Match feeding the second slot
    #[serde(default)]
    pub player2_prereq_match_id: Option<i64>,
    /// Winning participant
    #[serde(default)]
    pub winner_id: Option<i64>,
    /// Losing participant
    #[serde(default)]
    pub loser_id: Option<i64>,
    /// Per-game scores, e.g. `"3-1,2-3"`
    #[serde(default, deserialize_with = "null_as_default")]
    pub scores_csv: String,
}
