//! Word definitions via the Free Dictionary API.

use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const API_BASE: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Deserialize)]
struct Entry {
    #[serde(default)]
    meanings: Vec<Meaning>,
}

#[derive(Debug, Deserialize)]
struct Meaning {
    #[serde(default)]
    definitions: Vec<Definition>,
}

#[derive(Debug, Deserialize)]
struct Definition {
    definition: String,
}

/// Dictionary lookup client.
pub struct Dictionary {
    client: Client,
    base_url: String,
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl Dictionary {
    pub fn new() -> Self {
        Self::with_base_url(API_BASE.to_string())
    }

    fn with_base_url(base_url: String) -> Self {
        // Client::builder only fails with TLS/resolver misconfiguration;
        // fall back to the default client rather than failing the lookup path.
        let client = Client::builder()
            .timeout(LOOKUP_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self { client, base_url }
    }

    /// Returns the first definition of `word`, or `None` when the word is
    /// unknown or the API is unreachable.
    pub async fn lookup(&self, word: &str) -> Option<String> {
        let url = format!("{}/{word}", self.base_url);
        let entries: Vec<Entry> = self
            .client
            .get(&url)
            .send()
            .await
            .ok()?
            .error_for_status()
            .ok()?
            .json()
            .await
            .ok()?;

        first_definition(&entries)
    }
}

fn first_definition(entries: &[Entry]) -> Option<String> {
    entries
        .first()?
        .meanings
        .first()?
        .definitions
        .first()
        .map(|d| d.definition.clone())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_first_definition_extracts_first() {
        let body = r#"[
            {"meanings": [
                {"definitions": [
                    {"definition": "A canopy carried to ward off rain."},
                    {"definition": "Something that covers a range of things."}
                ]},
                {"definitions": [{"definition": "To shelter."}]}
            ]}
        ]"#;
        let entries: Vec<Entry> = serde_json::from_str(body).unwrap();
        assert_eq!(
            first_definition(&entries).unwrap(),
            "A canopy carried to ward off rain."
        );
    }

    #[test]
    fn test_first_definition_empty_shapes() {
        let entries: Vec<Entry> = serde_json::from_str("[]").unwrap();
        assert!(first_definition(&entries).is_none());

        let entries: Vec<Entry> = serde_json::from_str(r#"[{"meanings": []}]"#).unwrap();
        assert!(first_definition(&entries).is_none());
    }

    #[tokio::test]
    async fn test_lookup_unreachable_api_is_none() {
        // Closed port: the lookup collapses any failure into None.
        let dictionary = Dictionary::with_base_url("http://127.0.0.1:1/entries".to_string());
        assert!(dictionary.lookup("umbrella").await.is_none());
    }
}
