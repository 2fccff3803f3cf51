//! Quote sourcing: remote providers, fallback pool, and the resolver.
//!
//! The resolver tries a fixed, ordered list of HTTP quote APIs and falls
//! back to a built-in local pool when none of them produce a usable quote.

pub mod fallback;
pub mod provider;
pub mod resolver;
pub mod topic;

pub use fallback::FallbackPool;
pub use provider::{ProviderError, QuoteProvider};
pub use resolver::{NoQuoteAvailable, QuoteResolver};
pub use topic::Topic;

/// Attribution used when a provider omits or blanks the author field.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// A single immutable quote. Equality is by value; there is no identity
/// beyond the two fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

impl Quote {
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
        }
    }

    /// Builds a quote from provider fields, defaulting the author to
    /// [`UNKNOWN_AUTHOR`] when it is missing or empty.
    pub fn attributed(text: impl Into<String>, author: Option<String>) -> Self {
        let author = match author {
            Some(a) if !a.is_empty() => a,
            _ => UNKNOWN_AUTHOR.to_string(),
        };
        Self {
            text: text.into(),
            author,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attributed_defaults_missing_author() {
        let quote = Quote::attributed("some text", None);
        assert_eq!(quote.author, UNKNOWN_AUTHOR);

        let quote = Quote::attributed("some text", Some(String::new()));
        assert_eq!(quote.author, UNKNOWN_AUTHOR);

        let quote = Quote::attributed("some text", Some("Ada Lovelace".to_string()));
        assert_eq!(quote.author, "Ada Lovelace");
    }

    #[test]
    fn test_value_equality() {
        let a = Quote::new("same", "person");
        let b = Quote::new("same", "person");
        assert_eq!(a, b);
        assert_ne!(a, Quote::new("same", "someone else"));
    }
}
