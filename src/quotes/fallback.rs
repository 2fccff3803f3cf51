//! Built-in fallback quotes, used when every remote provider comes up empty.

use crate::quotes::Quote;
use rand::RngExt;

const BUILTIN_QUOTES: &[(&str, &str)] = &[
    (
        "Programs must be written for people to read, and only incidentally for machines to execute.",
        "Harold Abelson",
    ),
    (
        "Simplicity is prerequisite for reliability.",
        "Edsger W. Dijkstra",
    ),
    ("Talk is cheap. Show me the code.", "Linus Torvalds"),
    ("The only way to go fast, is to go well.", "Robert C. Martin"),
    (
        "First, solve the problem. Then, write the code.",
        "John Johnson",
    ),
];

/// Fixed local pool of quotes. Non-empty in normal operation; an empty pool
/// only occurs in tests exercising the total-failure path.
pub struct FallbackPool {
    quotes: Vec<Quote>,
}

impl FallbackPool {
    pub fn new(quotes: Vec<Quote>) -> Self {
        Self { quotes }
    }

    /// The built-in pool.
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_QUOTES
                .iter()
                .map(|(text, author)| Quote::new(*text, *author))
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Uniform random pick; `None` only when the pool is empty.
    pub fn pick(&self) -> Option<Quote> {
        if self.quotes.is_empty() {
            return None;
        }
        let mut rng = rand::rng();
        Some(self.quotes[rng.random_range(0..self.quotes.len())].clone())
    }

    pub fn contains(&self, quote: &Quote) -> bool {
        self.quotes.iter().any(|q| q == quote)
    }
}

impl Default for FallbackPool {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_pool_is_well_formed() {
        let pool = FallbackPool::builtin();
        assert!(!pool.is_empty());
        for (text, author) in BUILTIN_QUOTES {
            assert!(!text.is_empty());
            assert!(!author.is_empty());
            assert!(pool.contains(&Quote::new(*text, *author)));
        }
    }

    #[test]
    fn test_pick_returns_a_pool_member() {
        let pool = FallbackPool::builtin();
        for _ in 0..20 {
            let quote = pool.pick().unwrap();
            assert!(pool.contains(&quote));
        }
    }

    #[test]
    fn test_empty_pool_picks_nothing() {
        let pool = FallbackPool::new(Vec::new());
        assert!(pool.is_empty());
        assert!(pool.pick().is_none());
    }
}
