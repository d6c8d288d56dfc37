use std::fmt;

use clap::ValueEnum;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::error::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
    Expert,
}

// Persisted as its tag, including as a map key in the leaderboard set. An
// unrecognized tag is rejected here, at the gateway boundary, instead of
// leaking a bad difficulty into the core.
impl Serialize for Difficulty {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for Difficulty {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TagVisitor;

        impl de::Visitor<'_> for TagVisitor {
            type Value = Difficulty;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a difficulty tag")
            }

            fn visit_str<E: de::Error>(self, tag: &str) -> Result<Difficulty, E> {
                Difficulty::from_tag(tag).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(TagVisitor)
    }
}

/// Fixed per-difficulty preset: guessing range plus attempt and hint budgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyConfig {
    pub min: u32,
    pub max: u32,
    pub max_attempts: u32,
    pub hint_budget: u32,
}

impl Difficulty {
    pub fn all() -> [Difficulty; 4] {
        [
            Difficulty::Easy,
            Difficulty::Medium,
            Difficulty::Hard,
            Difficulty::Expert,
        ]
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Expert => "expert",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        }
    }

    pub fn from_tag(tag: &str) -> Result<Difficulty, GameError> {
        match tag {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "expert" => Ok(Difficulty::Expert),
            _ => Err(GameError::UnknownDifficulty {
                tag: tag.to_string(),
            }),
        }
    }

    pub fn config(&self) -> DifficultyConfig {
        match self {
            Difficulty::Easy => DifficultyConfig {
                min: 1,
                max: 50,
                max_attempts: 10,
                hint_budget: 3,
            },
            Difficulty::Medium => DifficultyConfig {
                min: 1,
                max: 100,
                max_attempts: 12,
                hint_budget: 2,
            },
            Difficulty::Hard => DifficultyConfig {
                min: 1,
                max: 200,
                max_attempts: 15,
                hint_budget: 1,
            },
            Difficulty::Expert => DifficultyConfig {
                min: 1,
                max: 500,
                max_attempts: 20,
                hint_budget: 0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_invariants() {
        for difficulty in Difficulty::all() {
            let config = difficulty.config();
            assert!(config.min < config.max, "{:?}", difficulty);
            assert!(config.max_attempts >= 1, "{:?}", difficulty);
        }
    }

    #[test]
    fn test_from_tag_round_trip() {
        for difficulty in Difficulty::all() {
            assert_eq!(Difficulty::from_tag(difficulty.tag()).unwrap(), difficulty);
        }
    }

    #[test]
    fn test_from_tag_unknown() {
        let err = Difficulty::from_tag("nightmare").unwrap_err();
        assert!(matches!(
            err,
            GameError::UnknownDifficulty { ref tag } if tag == "nightmare"
        ));
    }

    #[test]
    fn test_expert_has_no_hints() {
        assert_eq!(Difficulty::Expert.config().hint_budget, 0);
    }

    #[test]
    fn test_serde_uses_tags() {
        assert_eq!(serde_json::to_string(&Difficulty::Hard).unwrap(), "\"hard\"");
        assert_eq!(
            serde_json::from_str::<Difficulty>("\"expert\"").unwrap(),
            Difficulty::Expert
        );
        assert!(serde_json::from_str::<Difficulty>("\"nightmare\"").is_err());
    }
}
