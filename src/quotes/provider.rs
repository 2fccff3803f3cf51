//! Remote quote providers.
//!
//! Each provider is one independent, bounded fetch attempt behind the
//! [`QuoteProvider`] trait. Transport failures and malformed bodies are both
//! reported as [`ProviderError`]; a well-formed response without usable quote
//! text is `Ok(None)` so the resolver can fall through without recording an
//! error.

use crate::quotes::{Quote, Topic};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(StatusCode),
    #[error("malformed response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One attempt to produce a quote for a topic hint.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Short name used in logs and failure summaries.
    fn name(&self) -> &'static str;

    /// Issues a single bounded request. `Ok(None)` means the provider
    /// answered but had no usable quote text.
    async fn fetch(&self, topic: Topic) -> Result<Option<Quote>, ProviderError>;
}

/// quotable.io: generic quote API with tag filtering.
pub struct Quotable {
    client: Client,
    base_url: String,
}

impl Quotable {
    pub const BASE_URL: &'static str = "https://api.quotable.io";

    pub fn new(client: Client) -> Self {
        Self {
            client,
            base_url: Self::BASE_URL.to_string(),
        }
    }

    /// Overrides the endpoint, e.g. to point at a local stub.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Maps a topic into quotable's tag vocabulary. `None` means no filter.
    fn tag(topic: Topic) -> Option<&'static str> {
        match topic {
            Topic::Any => None,
            Topic::Programming | Topic::Technology => Some("technology"),
            Topic::Inspiration => Some("inspirational"),
        }
    }
}

#[async_trait]
impl QuoteProvider for Quotable {
    fn name(&self) -> &'static str {
        "quotable"
    }

    async fn fetch(&self, topic: Topic) -> Result<Option<Quote>, ProviderError> {
        let mut request = self.client.get(format!("{}/random", self.base_url));
        if let Some(tag) = Self::tag(topic) {
            request = request.query(&[("tags", tag)]);
        }
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status));
        }
        let body = response.text().await?;
        parse_quotable(&body)
    }
}

#[derive(Deserialize)]
struct QuotableBody {
    content: Option<String>,
    author: Option<String>,
}

fn parse_quotable(body: &str) -> Result<Option<Quote>, ProviderError> {
    let body: QuotableBody = serde_json::from_str(body)?;
    Ok(match body.content {
        Some(text) if !text.is_empty() => Some(Quote::attributed(text, body.author)),
        _ => None,
    })
}

/// programming-quotes-api: no tagging, the topic hint is ignored.
pub struct ProgrammingQuotes {
    client: Client,
    base_url: String,
}

impl ProgrammingQuotes {
    pub const BASE_URL: &'static str = "https://programming-quotes-api.vercel.app";

    pub fn new(client: Client) -> Self {
        Self {
            client,
            base_url: Self::BASE_URL.to_string(),
        }
    }

    /// Overrides the endpoint, e.g. to point at a local stub.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl QuoteProvider for ProgrammingQuotes {
    fn name(&self) -> &'static str {
        "programming-quotes"
    }

    async fn fetch(&self, _topic: Topic) -> Result<Option<Quote>, ProviderError> {
        let response = self
            .client
            .get(format!("{}/api/random", self.base_url))
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status));
        }
        let body = response.text().await?;
        parse_programming_quotes(&body)
    }
}

#[derive(Deserialize)]
struct ProgrammingQuotesBody {
    en: Option<String>,
    quote: Option<String>,
    text: Option<String>,
    author: Option<String>,
}

fn parse_programming_quotes(body: &str) -> Result<Option<Quote>, ProviderError> {
    let body: ProgrammingQuotesBody = serde_json::from_str(body)?;
    // The API has shipped the quote text under several names over time;
    // take the first non-empty candidate.
    let text = [body.en, body.quote, body.text]
        .into_iter()
        .flatten()
        .find(|t| !t.is_empty());
    Ok(text.map(|t| Quote::attributed(t, body.author)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quotes::UNKNOWN_AUTHOR;

    #[test]
    fn test_parse_quotable_full_body() {
        let body = r#"{"content":"Stay hungry.","author":"Someone","tags":["famous"]}"#;
        let quote = parse_quotable(body).unwrap().unwrap();
        assert_eq!(quote.text, "Stay hungry.");
        assert_eq!(quote.author, "Someone");
    }

    #[test]
    fn test_parse_quotable_missing_author_defaults_to_unknown() {
        let body = r#"{"content":"Stay hungry."}"#;
        let quote = parse_quotable(body).unwrap().unwrap();
        assert_eq!(quote.author, UNKNOWN_AUTHOR);

        let body = r#"{"content":"Stay hungry.","author":""}"#;
        let quote = parse_quotable(body).unwrap().unwrap();
        assert_eq!(quote.author, UNKNOWN_AUTHOR);
    }

    #[test]
    fn test_parse_quotable_empty_content_is_no_quote() {
        assert!(parse_quotable(r#"{"content":"","author":"X"}"#)
            .unwrap()
            .is_none());
        assert!(parse_quotable(r#"{"author":"X"}"#).unwrap().is_none());
    }

    #[test]
    fn test_parse_quotable_malformed_body_is_an_error() {
        assert!(matches!(
            parse_quotable("not json at all"),
            Err(ProviderError::Parse(_))
        ));
    }

    #[test]
    fn test_parse_programming_quotes_field_precedence() {
        let body = r#"{"en":"first","quote":"second","text":"third","author":"A"}"#;
        assert_eq!(
            parse_programming_quotes(body).unwrap().unwrap().text,
            "first"
        );

        // Empty candidates fall through to the next field name.
        let body = r#"{"en":"","quote":"second","text":"third"}"#;
        assert_eq!(
            parse_programming_quotes(body).unwrap().unwrap().text,
            "second"
        );

        let body = r#"{"text":"third"}"#;
        assert_eq!(
            parse_programming_quotes(body).unwrap().unwrap().text,
            "third"
        );
    }

    #[test]
    fn test_parse_programming_quotes_without_text_is_no_quote() {
        assert!(parse_programming_quotes(r#"{"author":"A"}"#)
            .unwrap()
            .is_none());
        assert!(parse_programming_quotes(r#"{"en":"","quote":""}"#)
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_parse_programming_quotes_author_defaults_to_unknown() {
        let body = r#"{"en":"some wisdom"}"#;
        let quote = parse_programming_quotes(body).unwrap().unwrap();
        assert_eq!(quote.author, UNKNOWN_AUTHOR);
    }

    #[test]
    fn test_quotable_tag_mapping() {
        assert_eq!(Quotable::tag(Topic::Any), None);
        assert_eq!(Quotable::tag(Topic::Programming), Some("technology"));
        assert_eq!(Quotable::tag(Topic::Technology), Some("technology"));
        assert_eq!(Quotable::tag(Topic::Inspiration), Some("inspirational"));
    }
}
