//! Contract of the external business-directory collaborator.
//!
//! The directory is asked for a business by name and address and may answer
//! with a category label and corrected identity fields. Every field can be
//! missing or empty, and the call itself can fail. Callers never branch on the
//! error: [`LookupOutcome`] folds a failure and an empty answer into the same
//! `NoData` marker.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("directory transport failed: {0}")]
    Transport(String),

    #[error("malformed directory payload: {0}")]
    MalformedPayload(String),
}

/// Fields the directory may return for a business.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceData {
    #[serde(default)]
    pub place_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub visible_category: Option<String>,
    #[serde(default)]
    pub formatted_address: Option<String>,
}

impl PlaceData {
    /// Copy with blank strings turned into `None`.
    pub fn normalized(self) -> Self {
        Self {
            place_id: non_blank(self.place_id),
            name: non_blank(self.name),
            visible_category: non_blank(self.visible_category),
            formatted_address: non_blank(self.formatted_address),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.place_id.is_none()
            && self.name.is_none()
            && self.visible_category.is_none()
            && self.formatted_address.is_none()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Result of a best-effort directory lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found(PlaceData),
    NoData,
}

impl LookupOutcome {
    /// Collapse a lookup result. Errors and all-blank answers become `NoData`.
    pub fn from_result(result: Result<PlaceData, DirectoryError>) -> Self {
        match result {
            Ok(place) => {
                let place = place.normalized();
                if place.is_empty() {
                    LookupOutcome::NoData
                } else {
                    LookupOutcome::Found(place)
                }
            }
            Err(_) => LookupOutcome::NoData,
        }
    }

    pub fn place(&self) -> Option<&PlaceData> {
        match self {
            LookupOutcome::Found(place) => Some(place),
            LookupOutcome::NoData => None,
        }
    }
}

/// Business-directory lookup by name and address.
#[async_trait]
pub trait DirectoryLookup: Send + Sync {
    async fn lookup(&self, name: &str, address: &str) -> Result<PlaceData, DirectoryError>;
}

/// Transport that returns the directory's raw text reply.
#[async_trait]
pub trait DirectoryTransport: Send + Sync {
    async fn fetch(&self, name: &str, address: &str) -> Result<String, DirectoryError>;
}

/// Adapts a text transport into a [`DirectoryLookup`] by parsing the reply
/// with [`parse_place_payload`].
pub struct TextPayloadDirectory<T> {
    transport: T,
}

impl<T: DirectoryTransport> TextPayloadDirectory<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl<T: DirectoryTransport> DirectoryLookup for TextPayloadDirectory<T> {
    async fn lookup(&self, name: &str, address: &str) -> Result<PlaceData, DirectoryError> {
        let payload = self.transport.fetch(name, address).await?;
        parse_place_payload(&payload)
    }
}

/// Parse a directory reply into [`PlaceData`].
///
/// The reply may be wrapped in a Markdown code fence (with or without a
/// `json` tag), which is removed before parsing.
pub fn parse_place_payload(payload: &str) -> Result<PlaceData, DirectoryError> {
    let trimmed = payload.trim();
    let body = if let Some(rest) = trimmed.strip_prefix("```json") {
        rest.strip_suffix("```").unwrap_or(rest)
    } else if let Some(rest) = trimmed.strip_prefix("```") {
        rest.strip_suffix("```").unwrap_or(rest)
    } else {
        trimmed
    };

    serde_json::from_str(body.trim())
        .map_err(|e| DirectoryError::MalformedPayload(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_json() {
        let place = parse_place_payload(
            r#"{"place_id": "abc", "name": "Wok Express", "visible_category": "Restaurante chino", "formatted_address": "Calle Luna 3"}"#,
        )
        .unwrap();
        assert_eq!(place.place_id.as_deref(), Some("abc"));
        assert_eq!(place.visible_category.as_deref(), Some("Restaurante chino"));
    }

    #[test]
    fn test_parse_fenced_json() {
        let fenced = "```json\n{\"visible_category\": \"Hotel\"}\n```";
        let place = parse_place_payload(fenced).unwrap();
        assert_eq!(place.visible_category.as_deref(), Some("Hotel"));
        assert_eq!(place.name, None);

        let bare_fence = "```\n{\"name\": \"Bar Pepe\"}\n```";
        assert_eq!(parse_place_payload(bare_fence).unwrap().name.as_deref(), Some("Bar Pepe"));
    }

    #[test]
    fn test_parse_malformed() {
        assert!(matches!(
            parse_place_payload("Sorry, I could not find that place."),
            Err(DirectoryError::MalformedPayload(_))
        ));
        assert!(matches!(
            parse_place_payload(r#"{"place_id": 42}"#),
            Err(DirectoryError::MalformedPayload(_))
        ));
        assert!(parse_place_payload("").is_err());
    }

    #[test]
    fn test_outcome_collapses_blank_and_errors() {
        let blank = PlaceData {
            place_id: Some(String::new()),
            name: Some("  ".to_string()),
            visible_category: Some(String::new()),
            formatted_address: None,
        };
        assert_eq!(LookupOutcome::from_result(Ok(blank)), LookupOutcome::NoData);
        assert_eq!(
            LookupOutcome::from_result(Err(DirectoryError::Transport("timeout".to_string()))),
            LookupOutcome::NoData
        );

        let partial = PlaceData {
            visible_category: Some("Bar".to_string()),
            name: Some(String::new()),
            ..Default::default()
        };
        let outcome = LookupOutcome::from_result(Ok(partial));
        let place = outcome.place().unwrap();
        assert_eq!(place.visible_category.as_deref(), Some("Bar"));
        assert_eq!(place.name, None);
    }

    struct CannedTransport(Result<String, DirectoryError>);

    #[async_trait]
    impl DirectoryTransport for CannedTransport {
        async fn fetch(&self, _name: &str, _address: &str) -> Result<String, DirectoryError> {
            self.0.clone()
        }
    }

    #[tokio::test]
    async fn test_text_payload_directory() {
        let directory = TextPayloadDirectory::new(CannedTransport(Ok(
            "```json\n{\"visible_category\": \"Kebab\"}\n```".to_string(),
        )));
        let place = directory.lookup("Kebab Ali", "Plaza 2").await.unwrap();
        assert_eq!(place.visible_category.as_deref(), Some("Kebab"));

        let failing = TextPayloadDirectory::new(CannedTransport(Err(DirectoryError::Transport(
            "connection reset".to_string(),
        ))));
        assert!(failing.lookup("Kebab Ali", "Plaza 2").await.is_err());
    }
}
