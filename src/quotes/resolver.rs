//! Ordered provider fan-out with a local fallback pool.
//!
//! Providers are tried in a fixed order with one attempt each. The first
//! usable quote wins and the rest of the chain is skipped. If the whole
//! chain comes up empty, a quote is picked from the fallback pool instead,
//! so resolution only fails when the pool itself is empty.

use crate::config::ProvidersConfig;
use crate::quotes::fallback::FallbackPool;
use crate::quotes::provider::{ProgrammingQuotes, QuoteProvider, Quotable};
use crate::quotes::{Quote, Topic};
use anyhow::Context;
use std::time::Duration;
use tracing::{debug, warn};

/// Every provider failed or returned nothing and the fallback pool is empty.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct NoQuoteAvailable {
    message: String,
}

impl NoQuoteAvailable {
    fn new(errors: Vec<String>) -> Self {
        let message = if errors.is_empty() {
            "No quote available".to_string()
        } else {
            errors.join("; ")
        };
        Self { message }
    }
}

/// Resolves a quote for a topic from the provider chain or the fallback pool.
pub struct QuoteResolver {
    providers: Vec<Box<dyn QuoteProvider>>,
    fallback: FallbackPool,
}

impl QuoteResolver {
    /// Builds the standard provider chain with one shared HTTP client.
    pub fn new(config: &ProvidersConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("devquote/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        let providers: Vec<Box<dyn QuoteProvider>> = vec![
            Box::new(Quotable::new(client.clone())),
            Box::new(ProgrammingQuotes::new(client)),
        ];

        Ok(Self::with_providers(providers, FallbackPool::builtin()))
    }

    pub fn with_providers(providers: Vec<Box<dyn QuoteProvider>>, fallback: FallbackPool) -> Self {
        Self {
            providers,
            fallback,
        }
    }

    /// One pass over the chain, no retries. Provider errors are recorded and
    /// absorbed; an empty answer falls through without recording anything.
    pub async fn resolve(&self, topic: Topic) -> Result<Quote, NoQuoteAvailable> {
        let mut errors = Vec::new();

        for provider in &self.providers {
            match provider.fetch(topic).await {
                Ok(Some(quote)) => {
                    debug!("{} produced a quote by {}", provider.name(), quote.author);
                    return Ok(quote);
                }
                Ok(None) => {
                    debug!("{} answered without usable text", provider.name());
                }
                Err(e) => {
                    warn!("{} failed: {}", provider.name(), e);
                    errors.push(format!("{}: {}", provider.name(), e));
                }
            }
        }

        match self.fallback.pick() {
            Some(quote) => {
                debug!("serving a fallback quote by {}", quote.author);
                Ok(quote)
            }
            None => Err(NoQuoteAvailable::new(errors)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quotes::provider::ProviderError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    enum Outcome {
        Quote(&'static str, &'static str),
        Empty,
        Fail,
    }

    struct ScriptedProvider {
        name: &'static str,
        outcome: Outcome,
        calls: Arc<AtomicUsize>,
    }

    impl ScriptedProvider {
        fn new(name: &'static str, outcome: Outcome) -> (Box<dyn QuoteProvider>, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            let provider = Box::new(Self {
                name,
                outcome,
                calls: calls.clone(),
            });
            (provider, calls)
        }
    }

    #[async_trait]
    impl QuoteProvider for ScriptedProvider {
        fn name(&self) -> &'static str {
            self.name
        }

        async fn fetch(&self, _topic: Topic) -> Result<Option<Quote>, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.outcome {
                Outcome::Quote(text, author) => Ok(Some(Quote::new(text, author))),
                Outcome::Empty => Ok(None),
                Outcome::Fail => Err(ProviderError::Status(
                    reqwest::StatusCode::SERVICE_UNAVAILABLE,
                )),
            }
        }
    }

    #[tokio::test]
    async fn test_first_success_skips_later_providers() {
        let (first, first_calls) =
            ScriptedProvider::new("first", Outcome::Quote("Keep it simple.", "Anon"));
        let (second, second_calls) = ScriptedProvider::new("second", Outcome::Fail);
        let resolver =
            QuoteResolver::with_providers(vec![first, second], FallbackPool::builtin());

        let quote = resolver.resolve(Topic::Any).await.unwrap();
        assert_eq!(quote, Quote::new("Keep it simple.", "Anon"));
        assert_eq!(first_calls.load(Ordering::SeqCst), 1);
        assert_eq!(second_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_second_provider_answers_after_first_fails() {
        let (first, _) = ScriptedProvider::new("first", Outcome::Fail);
        let (second, second_calls) =
            ScriptedProvider::new("second", Outcome::Quote("Ship it.", "Anon"));
        let resolver =
            QuoteResolver::with_providers(vec![first, second], FallbackPool::builtin());

        let quote = resolver.resolve(Topic::Programming).await.unwrap();
        assert_eq!(quote, Quote::new("Ship it.", "Anon"));
        assert_eq!(second_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_all_providers_failing_serves_fallback() {
        let (first, _) = ScriptedProvider::new("first", Outcome::Fail);
        let (second, _) = ScriptedProvider::new("second", Outcome::Fail);
        let pool = FallbackPool::builtin();
        let resolver = QuoteResolver::with_providers(vec![first, second], FallbackPool::builtin());

        let quote = resolver.resolve(Topic::Any).await.unwrap();
        assert!(pool.contains(&quote));
    }

    #[tokio::test]
    async fn test_total_failure_reports_every_provider() {
        let (first, _) = ScriptedProvider::new("alpha", Outcome::Fail);
        let (second, _) = ScriptedProvider::new("beta", Outcome::Fail);
        let resolver =
            QuoteResolver::with_providers(vec![first, second], FallbackPool::new(Vec::new()));

        let err = resolver.resolve(Topic::Any).await.unwrap_err();
        let message = err.to_string();
        assert!(message.contains("alpha"));
        assert!(message.contains("beta"));
        assert!(message.contains("; "));
    }

    #[tokio::test]
    async fn test_empty_answer_records_no_error() {
        let (first, _) = ScriptedProvider::new("first", Outcome::Empty);
        let (second, _) = ScriptedProvider::new("second", Outcome::Empty);
        let resolver =
            QuoteResolver::with_providers(vec![first, second], FallbackPool::new(Vec::new()));

        let err = resolver.resolve(Topic::Any).await.unwrap_err();
        assert_eq!(err.to_string(), "No quote available");
    }

    #[tokio::test]
    async fn test_every_topic_resolves_to_a_complete_quote() {
        for topic in Topic::ALL {
            let (provider, _) = ScriptedProvider::new("only", Outcome::Empty);
            let resolver = QuoteResolver::with_providers(vec![provider], FallbackPool::builtin());

            let quote = resolver.resolve(topic).await.unwrap();
            assert!(!quote.text.is_empty());
            assert!(!quote.author.is_empty());
        }
    }
}
