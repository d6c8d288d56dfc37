use rand::Rng;

use crate::error::GameError;
use crate::models::Difficulty;

/// Coarse distance-to-target label shown after an incorrect guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Proximity {
    VeryHot,
    Hot,
    Warm,
    Cold,
    VeryCold,
}

impl Proximity {
    /// Inclusive thresholds, checked in ascending order.
    pub fn from_distance(distance: u32) -> Proximity {
        if distance <= 5 {
            Proximity::VeryHot
        } else if distance <= 10 {
            Proximity::Hot
        } else if distance <= 20 {
            Proximity::Warm
        } else if distance <= 50 {
            Proximity::Cold
        } else {
            Proximity::VeryCold
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Proximity::VeryHot => "Very Hot!",
            Proximity::Hot => "Hot!",
            Proximity::Warm => "Warm",
            Proximity::Cold => "Cold",
            Proximity::VeryCold => "Very Cold!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    TooLow,
    TooHigh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Win { attempts: u32 },
    Loss { target: u32 },
    Continue { direction: Direction, proximity: Proximity },
}

/// Scores a guess against the target without touching session state.
pub fn evaluate(target: u32, value: u32) -> (Direction, Proximity) {
    let direction = if value < target {
        Direction::TooLow
    } else {
        Direction::TooHigh
    };
    (direction, Proximity::from_distance(target.abs_diff(value)))
}

/// One in-progress or finished guessing game.
///
/// `range_min`/`range_max` track the narrowed search window; they only ever
/// move inward. The session goes inactive on a correct guess or when the
/// attempt budget runs out, and stays inactive until replaced.
#[derive(Debug, Clone)]
pub struct Session {
    pub difficulty: Difficulty,
    pub target: u32,
    pub attempts: u32,
    pub hints_used: u32,
    pub range_min: u32,
    pub range_max: u32,
    pub active: bool,
    pub last_guess: Option<u32>,
}

/// Plain data snapshot for the presentation layer.
#[derive(Debug, Clone, Copy)]
pub struct SessionSnapshot {
    pub difficulty: Difficulty,
    pub attempts: u32,
    pub max_attempts: u32,
    pub hints_used: u32,
    pub hint_budget: u32,
    pub range_min: u32,
    pub range_max: u32,
}

impl Session {
    pub fn start(difficulty: Difficulty) -> Session {
        let config = difficulty.config();
        let target = rand::rng().random_range(config.min..=config.max);
        Session::with_target(difficulty, target)
    }

    /// Deterministic constructor with an injected target.
    pub fn with_target(difficulty: Difficulty, target: u32) -> Session {
        let config = difficulty.config();
        debug_assert!(target >= config.min && target <= config.max);
        Session {
            difficulty,
            target,
            attempts: 0,
            hints_used: 0,
            range_min: config.min,
            range_max: config.max,
            active: true,
            last_guess: None,
        }
    }

    pub fn guess(&mut self, value: u32) -> Result<GuessOutcome, GameError> {
        if !self.active {
            return Err(GameError::InactiveSession);
        }

        let config = self.difficulty.config();
        if value < config.min || value > config.max {
            // No attempt consumed; the caller re-prompts.
            return Err(GameError::OutOfRange {
                min: config.min,
                max: config.max,
            });
        }

        self.attempts += 1;
        self.last_guess = Some(value);

        if value == self.target {
            self.active = false;
            return Ok(GuessOutcome::Win {
                attempts: self.attempts,
            });
        }

        if self.attempts >= config.max_attempts {
            self.active = false;
            return Ok(GuessOutcome::Loss {
                target: self.target,
            });
        }

        let (direction, proximity) = evaluate(self.target, value);
        match direction {
            Direction::TooLow => self.range_min = self.range_min.max(value + 1),
            Direction::TooHigh => self.range_max = self.range_max.min(value - 1),
        }

        Ok(GuessOutcome::Continue {
            direction,
            proximity,
        })
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let config = self.difficulty.config();
        SessionSnapshot {
            difficulty: self.difficulty,
            attempts: self.attempts,
            max_attempts: config.max_attempts,
            hints_used: self.hints_used,
            hint_budget: config.hint_budget,
            range_min: self.range_min,
            range_max: self.range_max,
        }
    }
}
