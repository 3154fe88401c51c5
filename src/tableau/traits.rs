//! Common traits and models for Tableau resources

use log::warn;
use serde::{Deserialize, Deserializer};

/// Common trait for Tableau resources (projects, workbooks)
pub trait TableauResource {
    /// Get the resource ID
    fn id(&self) -> &str;

    /// Get the human-readable name
    fn name(&self) -> &str;

    /// Check if the resource name matches, ignoring case
    fn matches_name(&self, input: &str) -> bool {
        self.name().to_lowercase() == input.to_lowercase()
    }
}

/// Find the first resource whose name matches case-insensitively
///
/// Names are not unique across a listing. When several entries match, the
/// first one wins and the others are reported in a warning.
pub fn find_by_name<'a, T: TableauResource>(
    items: &'a [T],
    name: &str,
    kind: &str,
) -> Option<&'a T> {
    let mut matches = items.iter().filter(|item| item.matches_name(name));
    let first = matches.next()?;

    let others: Vec<&str> = matches.map(|item| item.id()).collect();
    if !others.is_empty() {
        warn!(
            "{} name '{}' is ambiguous: using {} and ignoring {}",
            kind,
            name,
            first.id(),
            others.join(", ")
        );
    }

    Some(first)
}

/// Pagination block returned with list responses
///
/// Tableau encodes these counters as strings in JSON.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default, deserialize_with = "de_counter")]
    pub page_number: u32,
    #[serde(default, deserialize_with = "de_counter")]
    pub page_size: u32,
    #[serde(default, deserialize_with = "de_counter")]
    pub total_available: u32,
}

impl Pagination {
    /// Whether the server holds more items than were returned
    pub fn is_truncated(&self, returned: usize) -> bool {
        self.total_available as usize > returned
    }
}

/// Trait for list responses that wrap a single page of items
pub trait ListResponse<T> {
    /// Consume self and return the items
    fn into_items(self) -> Vec<T>;
    /// Get reference to pagination metadata
    fn pagination(&self) -> Option<&Pagination>;
}

/// Accept a counter encoded as either a JSON string or a number
fn de_counter<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Counter {
        Num(u32),
        Text(String),
    }

    match Counter::deserialize(deserializer)? {
        Counter::Num(n) => Ok(n),
        Counter::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}
