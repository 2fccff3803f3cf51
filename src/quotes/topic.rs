//! Topic hints for quote fetching.
//!
//! A topic is a coarse filter passed to providers that support tagging.
//! Providers without a tag vocabulary ignore it and still return a quote.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Topic {
    #[default]
    Any,
    Programming,
    Technology,
    Inspiration,
}

impl Topic {
    /// All topics in selector order.
    pub const ALL: [Topic; 4] = [
        Topic::Any,
        Topic::Programming,
        Topic::Technology,
        Topic::Inspiration,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Topic::Any => "Any",
            Topic::Programming => "Programming",
            Topic::Technology => "Technology",
            Topic::Inspiration => "Inspiration",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Topic> {
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> Topic {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Topic {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_covers_all_topics_and_wraps() {
        let mut seen = Vec::new();
        let mut topic = Topic::Any;
        for _ in 0..Topic::ALL.len() {
            seen.push(topic);
            topic = topic.next();
        }
        assert_eq!(seen, Topic::ALL.to_vec());
        assert_eq!(topic, Topic::Any);
    }

    #[test]
    fn test_prev_is_inverse_of_next() {
        for topic in Topic::ALL {
            assert_eq!(topic.next().prev(), topic);
            assert_eq!(topic.prev().next(), topic);
        }
    }

    #[test]
    fn test_from_index() {
        assert_eq!(Topic::from_index(0), Some(Topic::Any));
        assert_eq!(Topic::from_index(3), Some(Topic::Inspiration));
        assert_eq!(Topic::from_index(4), None);
    }
}
