//! Session configuration

use crate::core::FeedbackRules;

/// Which guesses a session accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuessPolicy {
    /// Only words in the vocabulary
    #[default]
    Vocabulary,
    /// Any word of the right length
    Any,
}

/// Configuration for an interactive session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub rules: FeedbackRules,
    pub guess_policy: GuessPolicy,
    /// How many ranked guesses to report each round
    pub top_k: usize,
    /// List every remaining candidate with its score at or below this many
    pub candidate_listing_limit: usize,
}

impl SessionConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rules: FeedbackRules::Classic,
            guess_policy: GuessPolicy::Vocabulary,
            top_k: 20,
            candidate_listing_limit: 10,
        }
    }

    #[must_use]
    pub const fn with_rules(mut self, rules: FeedbackRules) -> Self {
        self.rules = rules;
        self
    }

    #[must_use]
    pub const fn with_guess_policy(mut self, guess_policy: GuessPolicy) -> Self {
        self.guess_policy = guess_policy;
        self
    }

    #[must_use]
    pub const fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.rules, FeedbackRules::Classic);
        assert_eq!(config.guess_policy, GuessPolicy::Vocabulary);
        assert_eq!(config.top_k, 20);
        assert_eq!(config.candidate_listing_limit, 10);
    }

    #[test]
    fn builders_override_fields() {
        let config = SessionConfig::new()
            .with_rules(FeedbackRules::Standard)
            .with_guess_policy(GuessPolicy::Any)
            .with_top_k(5);
        assert_eq!(config.rules, FeedbackRules::Standard);
        assert_eq!(config.guess_policy, GuessPolicy::Any);
        assert_eq!(config.top_k, 5);
    }
}
