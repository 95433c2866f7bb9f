//! Difficulty tiers and their search/error-rate profiles

use std::fmt;

use serde::{Deserialize, Serialize};

/// Engine skill tier.
///
/// A closed enum rather than a string keyed table: library callers cannot
/// pass an unrecognized difficulty at all. The CLI string boundary surfaces
/// [`Error::ParseDifficulty`](crate::Error::ParseDifficulty) instead of
/// silently falling back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
    Hardest,
}

/// The tuple of search depth and error probabilities governing one tier.
/// Selected once per move request; never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    /// Plies of lookahead for the full search
    pub max_depth: u8,
    /// Chance to play a uniformly random cell instead of searching
    pub blunder_probability: f64,
    /// Chance to skip the immediate-block shortcut (easiest tier only)
    pub lapse_probability: f64,
    /// Whether the first move of a game is randomized between center and
    /// corners
    pub opening_variety: bool,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Normal,
        Difficulty::Hard,
        Difficulty::Hardest,
    ];

    /// Fixed profile table. Exact constants are tuning, but the ordering is
    /// a contract: higher tiers search deeper and err less, and only Easy
    /// has a defensive lapse. Hardest looks well past the six-ply fade
    /// horizon so a line that dissolves cannot fool it.
    pub fn profile(self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile {
                max_depth: 2,
                blunder_probability: 0.35,
                lapse_probability: 0.25,
                opening_variety: true,
            },
            Difficulty::Normal => DifficultyProfile {
                max_depth: 5,
                blunder_probability: 0.10,
                lapse_probability: 0.0,
                opening_variety: true,
            },
            Difficulty::Hard => DifficultyProfile {
                max_depth: 9,
                blunder_probability: 0.02,
                lapse_probability: 0.0,
                opening_variety: true,
            },
            Difficulty::Hardest => DifficultyProfile {
                max_depth: 13,
                blunder_probability: 0.0,
                lapse_probability: 0.0,
                opening_variety: true,
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
            Difficulty::Hardest => "hardest",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "normal" => Ok(Difficulty::Normal),
            "hard" => Ok(Difficulty::Hard),
            "hardest" => Ok(Difficulty::Hardest),
            _ => Err(crate::Error::ParseDifficulty {
                input: s.to_string(),
                expected: Difficulty::ALL
                    .iter()
                    .map(|d| d.name())
                    .collect::<Vec<_>>()
                    .join(", "),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_are_monotonic() {
        let profiles: Vec<_> = Difficulty::ALL.iter().map(|d| d.profile()).collect();

        for pair in profiles.windows(2) {
            assert!(pair[1].max_depth > pair[0].max_depth);
            assert!(pair[1].blunder_probability < pair[0].blunder_probability);
            assert!(pair[1].lapse_probability <= pair[0].lapse_probability);
        }
    }

    #[test]
    fn test_only_easy_lapses() {
        for difficulty in Difficulty::ALL {
            let profile = difficulty.profile();
            if difficulty == Difficulty::Easy {
                assert!(profile.lapse_probability > 0.0);
            } else {
                assert_eq!(profile.lapse_probability, 0.0);
            }
        }
    }

    #[test]
    fn test_hardest_is_error_free() {
        let profile = Difficulty::Hardest.profile();
        assert_eq!(profile.blunder_probability, 0.0);
        assert_eq!(profile.lapse_probability, 0.0);
    }

    #[test]
    fn test_hardest_sees_past_fade_horizon() {
        // A piece survives at most three of its owner's placements, i.e. six
        // plies. The deepest tier must look beyond that.
        assert!(Difficulty::Hardest.profile().max_depth > 6);
    }

    #[test]
    fn test_parse_and_display_roundtrip() {
        for difficulty in Difficulty::ALL {
            let parsed: Difficulty = difficulty.name().parse().unwrap();
            assert_eq!(parsed, difficulty);
        }

        let parsed: Difficulty = "HARD".parse().unwrap();
        assert_eq!(parsed, Difficulty::Hard);

        let err = "impossible".parse::<Difficulty>().unwrap_err();
        assert!(err.to_string().contains("hardest"));
    }
}
