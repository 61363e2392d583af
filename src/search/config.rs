//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Lookahead search configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Plies to expand below the root (default: 3).
    /// Tree size grows as branching^depth, so keep this small.
    /// A depth of 0 produces no candidates and the search fails.
    pub max_depth: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_depth: 3 }
    }
}

impl SearchConfig {
    /// Create a new config with custom max depth.
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.max_depth, 3);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SearchConfig::default().with_max_depth(1);
        assert_eq!(config.max_depth, 1);
    }

    #[test]
    fn test_serialization() {
        let config = SearchConfig::default().with_max_depth(4);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
