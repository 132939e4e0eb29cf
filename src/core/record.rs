//! Game record data model and strict-shape parsing of `games.json`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One showcased game entry.
///
/// The generated module always lists fields in this declaration order, whatever order
/// the keys had in `games.json`. Array order is kept as read.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub title: String,
    pub team_name: String,
    pub description: String,
    pub published_date: String,
    pub link: String,
    pub thumbnail_url: String,
}

/// On-disk shape: the six required fields plus anything else the file carries.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecordEntry {
    title: String,
    team_name: String,
    description: String,
    published_date: String,
    link: String,
    thumbnail_url: String,
    #[serde(flatten)]
    extra: BTreeMap<String, Value>,
}

impl RecordEntry {
    fn into_record(self, index: usize) -> GameRecord {
        if !self.extra.is_empty() {
            let keys: Vec<&str> = self.extra.keys().map(String::as_str).collect();
            log::warn!(
                "Game #{} ({}): dropping unknown fields {}",
                index,
                self.title,
                keys.join(", ")
            );
        }
        GameRecord {
            title: self.title,
            team_name: self.team_name,
            description: self.description,
            published_date: self.published_date,
            link: self.link,
            thumbnail_url: self.thumbnail_url,
        }
    }
}

/// Parse a JSON array of game records.
/// Every record must carry all six string fields; unknown fields are dropped with a warning.
/// A key repeated within one record is rejected rather than resolved to either value.
pub fn parse_records(json: &str) -> Result<Vec<GameRecord>, serde_json::Error> {
    let entries: Vec<RecordEntry> = serde_json::from_str(json)?;
    Ok(entries
        .into_iter()
        .enumerate()
        .map(|(i, e)| e.into_record(i))
        .collect())
}

/// Pretty-print records with two-space indentation, preserving array order.
pub fn to_pretty_json(records: &[GameRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(records)
}
