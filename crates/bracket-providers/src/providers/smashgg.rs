//! smash.gg provider implementation.
//!
//! smash.gg serves one phase group (a single bracket or pool) per request.
//! The response has no tournament name, URL or timestamps, so those are
//! derived from the caller's URL and the converted matches.

use crate::error::{BracketError, Result};
use crate::provider::{BracketProvider, ProviderRequest};
use crate::providers::common::{id_string, null_as_default, settled_result};
use bracket_core::{Bracket, Match, Player, State, Timestamp};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;
use url::Url;

const API_BASE_URL: &str = "https://smash.gg/api/-/resource/gg_api./phase_group";

/// Expands sets, seeds and standings and asks for denormalized player data.
const API_QUERY: &str = "expand=%5B%22sets%22%2C%22seeds%22%2C%22standings%22%5D;mutations=%5B%22playerData%22%5D;reset=false";

const STATE_CREATED: i64 = 1;
const STATE_COMPLETED: i64 = 3;

/// smash.gg phase group provider. The endpoint needs no credentials.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmashGgProvider;

impl SmashGgProvider {
    /// Create a new smash.gg provider.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// Extract the numeric phase group ID from a bracket URL.
#[must_use]
pub fn phase_group_id(url: &str) -> Option<String> {
    let url = url.trim();
    let parsed = Url::parse(url)
        .or_else(|_| Url::parse(&format!("https://{url}")))
        .ok()?;

    let group = parsed
        .path_segments()?
        .filter(|segment| !segment.is_empty())
        .next_back()?;

    group
        .chars()
        .all(|c| c.is_ascii_digit())
        .then(|| group.to_string())
}

/// Map a smash.gg state code onto the canonical states.
///
/// A created set only counts as open once both entrants are known.
fn state_from_code(code: i64, both_entrants: bool) -> State {
    match code {
        STATE_COMPLETED => State::Complete,
        STATE_CREATED if both_entrants => State::Open,
        _ => State::Pending,
    }
}

/// Whether a set exists only to pad the bracket to a power of two.
///
/// In the first winners round and the first losers round any bye slot
/// disqualifies the set. A set fed by two byes is dropped in every round.
fn is_bye_padding(set: &SmashGgSet) -> bool {
    let is_bye = |prereq: &Option<String>| prereq.as_deref() == Some("bye");
    let bye1 = is_bye(&set.entrant1_prereq_type);
    let bye2 = is_bye(&set.entrant2_prereq_type);

    (bye1 && bye2) || (matches!(set.round, 1 | -1) && (bye1 || bye2))
}

fn convert_set(set: SmashGgSet) -> Match {
    let both_entrants = set.entrant1_id.is_some() && set.entrant2_id.is_some();
    let state = state_from_code(set.state, both_entrants);
    let (winner_id, loser_id) = settled_result(state, set.winner_id, set.loser_id);

    Match {
        id: set.id.to_string(),
        identifier: set.identifier,
        round: set.round,
        state,
        started_at: set.started_at.and_then(Timestamp::from_unix),
        updated_at: set.updated_at.and_then(Timestamp::from_unix),
        player1_id: id_string(set.entrant1_id),
        player2_id: id_string(set.entrant2_id),
        player1_prereq_match_id: set.entrant1_prereq_id.map(|id| id.to_string()),
        player2_prereq_match_id: set.entrant2_prereq_id.map(|id| id.to_string()),
        winner_id,
        loser_id,
        player1_score: set.entrant1_score.unwrap_or(0),
        player2_score: set.entrant2_score.unwrap_or(0),
    }
}

fn convert_seed(seed: SmashGgSeed) -> Option<Player> {
    let Some(entrant_id) = seed.entrant_id else {
        debug!("Skipping seed {} with no entrant", seed.id);
        return None;
    };
    let id = entrant_id.to_string();

    let name = seed
        .mutations
        .as_ref()
        .and_then(|mutations| mutations.entrants.get(&id))
        .map(|entrant| entrant.name.clone())
        .unwrap_or_default();

    Some(Player {
        id,
        name,
        seed: seed.seed_num,
        rank: seed.placement,
    })
}

impl BracketProvider for SmashGgProvider {
    type Payload = SmashGgResponse;

    fn provider_id(&self) -> &'static str {
        "smashgg"
    }

    fn recognizes(&self, url: &str) -> bool {
        url.contains("smash.gg")
    }

    fn build_request(&self, url: &str) -> Result<ProviderRequest> {
        let group = phase_group_id(url).ok_or_else(|| BracketError::InvalidUrl {
            provider: self.provider_id().to_string(),
            url: url.to_string(),
            reason: "last path segment is not a phase group ID".to_string(),
        })?;

        let request = ProviderRequest::get(format!("{API_BASE_URL}/{group};{API_QUERY}"));
        debug!("smash.gg request URL: {}", request.url);
        Ok(request)
    }

    /// Players come from seeds in response order. Placeholder seeds with no
    /// entrant yield no player, so there can be fewer players than seeds.
    fn convert(&self, payload: SmashGgResponse, source_url: &str) -> Bracket {
        let entities = payload.entities;

        let total_sets = entities.sets.len();
        let matches: Vec<Match> = entities
            .sets
            .into_iter()
            .filter(|set| !is_bye_padding(set))
            .map(convert_set)
            .collect();
        debug!(
            "Dropped {} bye padding sets of {}",
            total_sets - matches.len(),
            total_sets
        );

        let players = entities.seeds.into_iter().filter_map(convert_seed).collect();

        Bracket {
            url: source_url.to_string(),
            name: String::new(),
            state: entities
                .groups
                .map(|group| state_from_code(group.state, true)),
            started_at: matches.iter().filter_map(|m| m.started_at).min(),
            updated_at: matches.iter().filter_map(|m| m.updated_at).max(),
            players,
            matches,
        }
    }
}

// smash.gg API types

/// Set or prerequisite ID.
///
/// Usually numeric, but sets in unstarted brackets carry string IDs such as
/// `"preview_171722_1_0"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "IdInner")]
pub struct EntityId(String);

impl EntityId {
    /// Get the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdInner {
    Number(serde_json::Number),
    String(String),
}

impl From<IdInner> for EntityId {
    fn from(inner: IdInner) -> Self {
        Self(match inner {
            IdInner::Number(n) => n.to_string(),
            IdInner::String(s) => s,
        })
    }
}

/// Top-level phase group response.
#[derive(Debug, Clone, Deserialize)]
pub struct SmashGgResponse {
    /// The expanded entities
    pub entities: SmashGgEntities,
}

/// Collections nested under `entities`.
#[derive(Debug, Clone, Deserialize)]
pub struct SmashGgEntities {
    /// The phase group descriptor
    #[serde(default)]
    pub groups: Option<SmashGgGroup>,
    /// Sets (matches)
    #[serde(default, deserialize_with = "null_as_default")]
    pub sets: Vec<SmashGgSet>,
    /// Seeds (participant placements)
    #[serde(default, deserialize_with = "null_as_default")]
    pub seeds: Vec<SmashGgSeed>,
}

/// Phase group descriptor.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmashGgGroup {
    /// Phase group ID
    pub id: i64,
    /// Owning phase
    #[serde(default)]
    pub phase_id: Option<i64>,
    /// Wave the group is scheduled in
    #[serde(default)]
    pub wave_id: Option<i64>,
    /// State code
    #[serde(default, deserialize_with = "null_as_default")]
    pub state: i64,
}

/// One set (match) in the phase group.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmashGgSet {
    /// Set ID
    pub id: EntityId,
    /// Bracket label
    #[serde(default, deserialize_with = "null_as_default")]
    pub identifier: String,
    /// Round; negative in the losers bracket
    #[serde(default, deserialize_with = "null_as_default")]
    pub round: i32,
    /// State code
    #[serde(default, deserialize_with = "null_as_default")]
    pub state: i64,
    /// Start time in epoch seconds
    #[serde(default)]
    pub started_at: Option<i64>,
    /// Last update in epoch seconds
    #[serde(default)]
    pub updated_at: Option<i64>,
    /// Completion time in epoch seconds
    #[serde(default)]
    pub completed_at: Option<i64>,
    /// First entrant
    #[serde(default)]
    pub entrant1_id: Option<i64>,
    /// Second entrant
    #[serde(default)]
    pub entrant2_id: Option<i64>,
    /// First entrant's score
    #[serde(default)]
    pub entrant1_score: Option<i64>,
    /// Second entrant's score
    #[serde(default)]
    pub entrant2_score: Option<i64>,
    /// Winning entrant
    #[serde(default)]
    pub winner_id: Option<i64>,
    /// Losing entrant
    #[serde(default)]
    pub loser_id: Option<i64>,
    /// What feeds the first slot: `seed`, `set` or `bye`
    #[serde(default)]
    pub entrant1_prereq_type: Option<String>,
    /// Seed or set feeding the first slot
    #[serde(default)]
    pub entrant1_prereq_id: Option<EntityId>,
    /// What feeds the second slot
    #[serde(default)]
    pub entrant2_prereq_type: Option<String>,
    /// Seed or set feeding the second slot
    #[serde(default)]
    pub entrant2_prereq_id: Option<EntityId>,
}

/// One seed with its denormalized entrant data.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmashGgSeed {
    /// Seed ID
    pub id: i64,
    /// Entrant holding the seed, absent for placeholder seeds
    #[serde(default)]
    pub entrant_id: Option<i64>,
    /// Seed number
    #[serde(default, deserialize_with = "null_as_default")]
    pub seed_num: u32,
    /// Final placement
    #[serde(default)]
    pub placement: Option<u32>,
    /// Entrant, player and participant records keyed by string ID
    #[serde(default)]
    pub mutations: Option<SeedMutations>,
}

/// Denormalized records attached to a seed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedMutations {
    /// Participants keyed by participant ID
    #[serde(default, deserialize_with = "null_as_default")]
    pub participants: HashMap<String, SmashGgParticipant>,
    /// Players keyed by player ID
    #[serde(default, deserialize_with = "null_as_default")]
    pub players: HashMap<String, SmashGgPlayer>,
    /// Entrants keyed by entrant ID
    #[serde(default, deserialize_with = "null_as_default")]
    pub entrants: HashMap<String, SmashGgEntrant>,
}

/// Event registration record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmashGgParticipant {
    /// Participant ID
    pub id: i64,
    /// Tag
    #[serde(default, deserialize_with = "null_as_default")]
    pub gamer_tag: String,
    /// Sponsor prefix
    #[serde(default, deserialize_with = "null_as_default")]
    pub prefix: String,
    /// Contact details
    #[serde(default)]
    pub contact_info: Option<ContactInfo>,
}

/// Participant contact details.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    /// Given name
    #[serde(default, deserialize_with = "null_as_default")]
    pub name_first: String,
    /// Family name
    #[serde(default, deserialize_with = "null_as_default")]
    pub name_last: String,
}

/// Global player profile.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmashGgPlayer {
    /// Player ID
    pub id: i64,
    /// Tag
    #[serde(default, deserialize_with = "null_as_default")]
    pub gamer_tag: String,
    /// Sponsor prefix
    #[serde(default, deserialize_with = "null_as_default")]
    pub prefix: String,
    /// Real name
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// State or province
    #[serde(default, deserialize_with = "null_as_default")]
    pub state: String,
    /// Country
    #[serde(default, deserialize_with = "null_as_default")]
    pub country: String,
}

/// Bracket entrant (a player or team).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmashGgEntrant {
    /// Entrant ID
    pub id: i64,
    /// Name shown in the bracket, sponsor prefix included
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Participants making up the entrant
    #[serde(default, deserialize_with = "null_as_default")]
    pub participant_ids: Vec<i64>,
    /// Player ID per participant ID
    #[serde(default, deserialize_with = "null_as_default")]
    pub player_ids: HashMap<String, i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = include_str!("../../tests/fixtures/smashgg.json");
    const BRACKET_URL: &str =
        "https://smash.gg/tournament/super-smash-sundays-48/brackets/14221/50133/165583";

    fn fixture() -> SmashGgResponse {
        SmashGgProvider::new()
            .decode(FIXTURE.as_bytes())
            .expect("decode smash.gg fixture")
    }

    fn set(id: i64, round: i32, prereq1: Option<&str>, prereq2: Option<&str>) -> SmashGgSet {
        SmashGgSet {
            id: EntityId(id.to_string()),
            identifier: String::new(),
            round,
            state: STATE_CREATED,
            started_at: None,
            updated_at: None,
            completed_at: None,
            entrant1_id: None,
            entrant2_id: None,
            entrant1_score: None,
            entrant2_score: None,
            winner_id: None,
            loser_id: None,
            entrant1_prereq_type: prereq1.map(ToString::to_string),
            entrant1_prereq_id: None,
            entrant2_prereq_type: prereq2.map(ToString::to_string),
            entrant2_prereq_id: None,
        }
    }

    fn response(sets: Vec<SmashGgSet>) -> SmashGgResponse {
        SmashGgResponse {
            entities: SmashGgEntities {
                groups: None,
                sets,
                seeds: Vec::new(),
            },
        }
    }

    #[test]
    fn test_recognizes_smashgg_urls() {
        let provider = SmashGgProvider::new();
        assert!(provider.recognizes(BRACKET_URL));
        assert!(!provider.recognizes("http://challonge.com/xyfuz5c3"));
    }

    #[test]
    fn test_build_request() {
        let request = SmashGgProvider::new()
            .build_request(BRACKET_URL)
            .expect("build request");
        assert_eq!(
            request.url,
            "https://smash.gg/api/-/resource/gg_api./phase_group/165583;expand=%5B%22sets%22%2C%22seeds%22%2C%22standings%22%5D;mutations=%5B%22playerData%22%5D;reset=false"
        );
        assert!(request.basic_auth.is_none());
    }

    #[test]
    fn test_phase_group_id_trims_trailing_slash() {
        assert_eq!(
            phase_group_id(&format!("{BRACKET_URL}/")).as_deref(),
            Some("165583")
        );
        assert_eq!(phase_group_id("https://smash.gg/tournament/genesis-4"), None);
    }

    #[test]
    fn test_build_request_rejects_non_numeric_group() {
        let err = SmashGgProvider::new()
            .build_request("https://smash.gg/tournament/genesis-4/events")
            .expect_err("not a phase group");
        assert!(matches!(err, BracketError::InvalidUrl { .. }));
    }

    #[test]
    fn test_decode_fixture() {
        let e = fixture().entities;

        let g = e.groups.expect("group descriptor");
        assert_eq!(g.id, 171_722);
        assert_eq!(g.phase_id, Some(50_132));
        assert_eq!(g.wave_id, Some(8_322));
        assert_eq!(g.state, 3);

        assert_eq!(e.sets.len(), 2);
        let s = &e.sets[0];
        assert_eq!(s.id.as_str(), "4689059");
        assert_eq!(s.identifier, "A");
        assert_eq!(s.round, 1);
        assert_eq!(s.entrant1_id, Some(211_768));
        assert_eq!(s.entrant1_prereq_type.as_deref(), Some("seed"));
        assert_eq!(
            s.entrant1_prereq_id.as_ref().map(EntityId::as_str),
            Some("2426316")
        );
        assert_eq!(s.entrant2_score, Some(0));
        assert_eq!(s.updated_at, Some(1_468_185_969));
        let s = &e.sets[1];
        assert_eq!(s.entrant2_prereq_type.as_deref(), Some("set"));
        assert_eq!(s.started_at, None);
        assert_eq!(s.updated_at, Some(1_468_187_020));

        assert_eq!(e.seeds.len(), 3);
        let seed = &e.seeds[0];
        assert_eq!(seed.id, 2_426_316);
        assert_eq!(seed.entrant_id, Some(211_768));
        assert_eq!(seed.placement, Some(3));
        assert_eq!(seed.seed_num, 7);
        let mutations = seed.mutations.as_ref().expect("mutations");
        let entrant = &mutations.entrants["211768"];
        assert_eq!(entrant.name, "TA | CDK");
        assert_eq!(entrant.participant_ids, vec![238_181]);
        assert_eq!(entrant.player_ids.get("238181"), Some(&1092));
        let player = &mutations.players["1092"];
        assert_eq!(player.gamer_tag, "CDK");
        assert_eq!(player.prefix, "TA");
        assert_eq!(player.name, "Connor Nguyen");
        assert_eq!(player.country, "United States");
        let participant = &mutations.participants["238181"];
        let contact = participant.contact_info.as_ref().expect("contact info");
        assert_eq!(contact.name_first, "Connor");
        assert_eq!(contact.name_last, "Nguyen");

        // null prefix decodes as empty
        let slime = &e.seeds[2].mutations.as_ref().expect("mutations").players["13963"];
        assert_eq!(slime.prefix, "");
    }

    #[test]
    fn test_convert_fixture() {
        let bracket = SmashGgProvider::new().convert(fixture(), BRACKET_URL);

        assert_eq!(bracket.name, "");
        assert_eq!(bracket.url, BRACKET_URL);
        assert_eq!(bracket.state, Some(State::Complete));
        assert_eq!(bracket.updated_at, Timestamp::from_unix(1_468_187_020));
        assert_eq!(bracket.started_at, Timestamp::from_unix(1_468_185_102));

        let players: Vec<(&str, &str, u32, Option<u32>)> = bracket
            .players
            .iter()
            .map(|p| (p.id.as_str(), p.name.as_str(), p.seed, p.rank))
            .collect();
        assert_eq!(
            players,
            vec![
                ("211768", "TA | CDK", 7, Some(3)),
                ("211974", "A-Dar", 70, Some(5)),
                ("212928", "Slime", 122, Some(9)),
            ]
        );

        assert_eq!(bracket.matches.len(), 2);
        let m = &bracket.matches[0];
        assert_eq!(m.id, "4689059");
        assert_eq!(m.identifier, "A");
        assert_eq!(m.round, 1);
        assert_eq!(m.updated_at, Timestamp::from_unix(1_468_185_969));
        assert_eq!(m.state, State::Complete);
        assert_eq!((m.player1_id.as_str(), m.player1_score), ("211768", 2));
        assert_eq!((m.player2_id.as_str(), m.player2_score), ("212928", 0));
        assert_eq!(m.winner_id, "211768");
        assert_eq!(m.loser_id, "212928");
        assert_eq!(m.player1_prereq_match_id.as_deref(), Some("2426316"));

        let m = &bracket.matches[1];
        assert_eq!(m.id, "4689067");
        assert_eq!(m.identifier, "I");
        assert_eq!(m.round, 2);
        assert_eq!(m.started_at, None);
        assert_eq!(m.player2_id, "211974");
        assert_eq!(m.loser_id, "211974");
        assert_eq!(m.player1_prereq_match_id.as_deref(), Some("4689059"));
        assert_eq!(m.player2_prereq_match_id.as_deref(), Some("4689060"));
    }

    #[test]
    fn test_convert_is_deterministic() {
        let provider = SmashGgProvider::new();
        assert_eq!(
            provider.convert(fixture(), BRACKET_URL),
            provider.convert(fixture(), BRACKET_URL)
        );
    }

    #[test]
    fn test_bye_filter() {
        let sets = vec![
            set(1, 1, Some("seed"), Some("seed")),
            set(2, 1, Some("seed"), Some("bye")),
            set(3, 1, Some("bye"), Some("bye")),
            set(4, -1, Some("bye"), Some("set")),
            set(5, -1, Some("set"), Some("set")),
            set(6, 2, Some("bye"), Some("set")),
            set(7, -2, Some("bye"), Some("bye")),
            set(8, 1, None, None),
        ];
        let bracket = SmashGgProvider::new().convert(response(sets), BRACKET_URL);

        let ids: Vec<&str> = bracket.matches.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "5", "6", "8"]);
    }

    #[test]
    fn test_double_bye_sets_dropped_in_later_rounds() {
        let sets = vec![
            set(1, 2, Some("bye"), Some("bye")),
            set(2, -3, Some("bye"), Some("bye")),
            set(3, 3, Some("set"), Some("bye")),
        ];
        let bracket = SmashGgProvider::new().convert(response(sets), BRACKET_URL);

        let ids: Vec<&str> = bracket.matches.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["3"]);
    }

    #[test]
    fn test_derived_bounds_ignore_dropped_sets() {
        let mut early_bye = set(1, 1, Some("bye"), Some("seed"));
        early_bye.started_at = Some(100);
        early_bye.updated_at = Some(900);

        let mut first = set(2, 1, Some("seed"), Some("seed"));
        first.started_at = Some(200);
        first.updated_at = Some(300);

        let mut unscheduled = set(3, 2, Some("set"), Some("set"));
        unscheduled.updated_at = Some(400);

        let bracket = SmashGgProvider::new()
            .convert(response(vec![early_bye, first, unscheduled]), BRACKET_URL);

        assert_eq!(bracket.matches.len(), 2);
        assert_eq!(bracket.started_at, Timestamp::from_unix(200));
        assert_eq!(bracket.updated_at, Timestamp::from_unix(400));
        assert_eq!(bracket.matches[1].started_at, None);
        assert_eq!(bracket.state, None);
    }

    #[test]
    fn test_state_codes() {
        assert_eq!(state_from_code(3, false), State::Complete);
        assert_eq!(state_from_code(1, true), State::Open);
        assert_eq!(state_from_code(1, false), State::Pending);
        assert_eq!(state_from_code(2, true), State::Pending);
        assert_eq!(state_from_code(0, true), State::Pending);
    }

    #[test]
    fn test_set_with_one_entrant_is_pending() {
        let mut waiting = set(1, 2, Some("set"), Some("set"));
        waiting.entrant1_id = Some(42);
        waiting.winner_id = Some(42);

        let bracket = SmashGgProvider::new().convert(response(vec![waiting]), BRACKET_URL);
        let m = &bracket.matches[0];
        assert_eq!(m.state, State::Pending);
        assert_eq!(m.player1_id, "42");
        assert_eq!(m.player2_id, "");
        assert!(m.winner_id.is_empty());
    }

    #[test]
    fn test_preview_ids_and_missing_entrants() {
        let body = br#"{"entities": {
            "groups": {"id": 9, "state": 1},
            "sets": [{"id": "preview_9_1_0", "round": 2, "state": 1,
                      "entrant1PrereqType": "set", "entrant1PrereqId": "preview_9_0_0"}],
            "seeds": [
                {"id": 1, "entrantId": 77, "seedNum": 1, "mutations": {"entrants": {}}},
                {"id": 2, "entrantId": null, "seedNum": 2}
            ]
        }}"#;
        let bracket = SmashGgProvider::new()
            .normalize(body, BRACKET_URL)
            .expect("normalize");

        assert_eq!(bracket.state, Some(State::Open));
        assert_eq!(bracket.matches[0].id, "preview_9_1_0");
        assert_eq!(
            bracket.matches[0].player1_prereq_match_id.as_deref(),
            Some("preview_9_0_0")
        );
        assert_eq!(bracket.players.len(), 1);
        assert_eq!(bracket.players[0].id, "77");
        assert_eq!(bracket.players[0].name, "");
        assert_eq!(bracket.players[0].rank, None);
    }

    #[test]
    fn test_decode_rejects_missing_entities() {
        let err = SmashGgProvider::new()
            .decode(br#"{"success": false}"#)
            .expect_err("no entities");
        assert!(matches!(err, BracketError::Decode { .. }));
    }
}
