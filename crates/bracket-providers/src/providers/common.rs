//! Common utilities shared across bracket providers.

use bracket_core::State;
use serde::{Deserialize, Deserializer};
use tracing::trace;

/// Deserialize a field that may be `null`, substituting the type's default.
///
/// Provider APIs send `null` for strings and numbers they have not filled in
/// yet; the canonical model wants empty values instead.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Render a nullable numeric ID as a string, empty when absent.
#[must_use]
pub fn id_string(id: Option<i64>) -> String {
    id.map(|id| id.to_string()).unwrap_or_default()
}

/// Render a nullable numeric ID, keeping absence distinct from zero.
#[must_use]
pub fn optional_id(id: Option<i64>) -> Option<String> {
    id.map(|id| id.to_string())
}

/// Winner and loser IDs, cleared unless the match is complete.
#[must_use]
pub fn settled_result(state: State, winner: Option<i64>, loser: Option<i64>) -> (String, String) {
    if state == State::Complete {
        (id_string(winner), id_string(loser))
    } else {
        (String::new(), String::new())
    }
}

/// Sum a comma-separated list of per-game scores into match totals.
///
/// Each game is `<p1>-<p2>`; either side may be negative, so `"0--1"` is
/// `(0, -1)`. Unparseable fragments count as zero and totals saturate
/// instead of overflowing.
#[must_use]
pub fn aggregate_scores(scores_csv: &str) -> (i64, i64) {
    scores_csv
        .split(',')
        .map(str::trim)
        .filter(|game| !game.is_empty())
        .map(parse_game_score)
        .fold((0_i64, 0_i64), |(p1, p2), (g1, g2)| {
            (p1.saturating_add(g1), p2.saturating_add(g2))
        })
}

/// Parse one `<p1>-<p2>` game token.
///
/// Splits at the first hyphen that is not a leading sign.
#[must_use]
pub fn parse_game_score(game: &str) -> (i64, i64) {
    let split_at = game
        .char_indices()
        .skip(1)
        .find(|&(_, c)| c == '-')
        .map(|(i, _)| i);

    match split_at {
        Some(i) => (parse_fragment(&game[..i]), parse_fragment(&game[i + 1..])),
        None => (parse_fragment(game), 0),
    }
}

fn parse_fragment(fragment: &str) -> i64 {
    let fragment = fragment.trim();
    fragment.parse().unwrap_or_else(|_| {
        trace!("Treating unparseable score fragment {:?} as zero", fragment);
        0
    })
}
