//! Application Configuration
//!
//! Configuration for the contest application layer.

use std::time::Duration;

/// Contest application configuration
#[derive(Debug, Clone)]
pub struct ContestConfig {
    /// Hard cap on the countdown timer at start
    pub max_timer: Duration,
    /// Maximum case title length (characters)
    pub max_title_len: usize,
    /// Maximum case description length (characters)
    pub max_description_len: usize,
    /// Maximum secret flag length (characters)
    pub max_flag_len: usize,
    /// Maximum number of hints per case
    pub max_hints_per_case: usize,
}

impl Default for ContestConfig {
    fn default() -> Self {
        Self {
            max_timer: Duration::from_secs(24 * 3600),
            max_title_len: 120,
            max_description_len: 4000,
            max_flag_len: 256,
            max_hints_per_case: 10,
        }
    }
}

impl ContestConfig {
    pub fn max_timer_seconds(&self) -> i64 {
        self.max_timer.as_secs() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ContestConfig::default();
        assert_eq!(config.max_timer, Duration::from_secs(86_400));
        assert_eq!(config.max_timer_seconds(), 86_400);
        assert_eq!(config.max_title_len, 120);
        assert_eq!(config.max_flag_len, 256);
        assert_eq!(config.max_hints_per_case, 10);
    }
}
