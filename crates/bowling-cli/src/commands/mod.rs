pub mod example;
pub mod score;

use bowling_core::{Config, LookaheadMode};

use crate::cli::Lookahead;

/// Scoring options after merging config and command-line flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreOptions {
    pub lookahead: LookaheadMode,
    pub strict: bool,
    pub json: bool,
}

impl ScoreOptions {
    /// Flags override the config file; `--strict` can only turn validation on
    pub fn resolve(config: &Config, strict: bool, lookahead: Option<Lookahead>, json: bool) -> Self {
        Self {
            lookahead: lookahead
                .map(LookaheadMode::from)
                .unwrap_or(config.scoring.lookahead),
            strict: strict || config.scoring.strict,
            json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults() {
        let options = ScoreOptions::resolve(&Config::default(), false, None, false);
        assert_eq!(options.lookahead, LookaheadMode::Frames);
        assert!(!options.strict);
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = Config::default();
        config.scoring.lookahead = LookaheadMode::Rolls;

        let options = ScoreOptions::resolve(&config, true, Some(Lookahead::Frames), true);
        assert_eq!(options.lookahead, LookaheadMode::Frames);
        assert!(options.strict);
        assert!(options.json);

        let options = ScoreOptions::resolve(&config, false, None, false);
        assert_eq!(options.lookahead, LookaheadMode::Rolls);
    }

    #[test]
    fn test_strict_from_config() {
        let mut config = Config::default();
        config.scoring.strict = true;
        assert!(ScoreOptions::resolve(&config, false, None, false).strict);
    }
}
