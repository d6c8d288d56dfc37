use clap::ValueEnum;

use crate::error::GameError;
use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HintKind {
    Range,
    Parity,
    Proximity,
}

/// Spends one unit of the session's shared hint budget and returns the hint
/// text. Every kind draws from the same budget.
pub fn use_hint(session: &mut Session, kind: HintKind) -> Result<String, GameError> {
    if !session.active {
        return Err(GameError::InactiveSession);
    }
    if session.hints_used >= session.difficulty.config().hint_budget {
        return Err(GameError::HintExhausted);
    }

    session.hints_used += 1;

    Ok(match kind {
        HintKind::Range => range_hint(session),
        HintKind::Parity => parity_hint(session),
        HintKind::Proximity => proximity_hint(session),
    })
}

/// Partitions the narrowed range into thirds and reports which the target
/// falls in.
fn range_hint(session: &Session) -> String {
    let width = (session.range_max - session.range_min) / 3;
    if session.target <= session.range_min + width {
        format!(
            "The number is in the lower third ({}-{})",
            session.range_min,
            session.range_min + width
        )
    } else if session.target >= session.range_max - width {
        format!(
            "The number is in the upper third ({}-{})",
            session.range_max - width,
            session.range_max
        )
    } else {
        "The number is in the middle third".to_string()
    }
}

fn parity_hint(session: &Session) -> String {
    if session.target % 2 == 0 {
        "The number is EVEN".to_string()
    } else {
        "The number is ODD".to_string()
    }
}

/// Distance from the last submitted guess, or from the range midpoint when
/// nothing has been guessed yet.
fn proximity_hint(session: &Session) -> String {
    let reference = session
        .last_guess
        .unwrap_or((session.range_min + session.range_max) / 2);
    let distance = session.target.abs_diff(reference);
    if distance < 10 {
        "You're very close!".to_string()
    } else if distance < 25 {
        "You're getting warmer!".to_string()
    } else {
        "You're still far away".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Difficulty;

    #[test]
    fn test_budget_allows_exactly_hint_budget_calls() {
        let mut session = Session::with_target(Difficulty::Easy, 25);
        let budget = Difficulty::Easy.config().hint_budget;

        for _ in 0..budget {
            use_hint(&mut session, HintKind::Parity).unwrap();
        }
        assert!(matches!(
            use_hint(&mut session, HintKind::Parity),
            Err(GameError::HintExhausted)
        ));
    }

    #[test]
    fn test_budget_is_shared_across_kinds() {
        // Medium allows two hints total, not two per kind.
        let mut session = Session::with_target(Difficulty::Medium, 50);
        use_hint(&mut session, HintKind::Range).unwrap();
        use_hint(&mut session, HintKind::Parity).unwrap();
        assert!(matches!(
            use_hint(&mut session, HintKind::Proximity),
            Err(GameError::HintExhausted)
        ));
    }

    #[test]
    fn test_expert_has_no_hints() {
        let mut session = Session::with_target(Difficulty::Expert, 250);
        assert!(matches!(
            use_hint(&mut session, HintKind::Range),
            Err(GameError::HintExhausted)
        ));
    }

    #[test]
    fn test_inactive_session_rejected() {
        let mut session = Session::with_target(Difficulty::Easy, 25);
        session.guess(25).unwrap();
        assert!(matches!(
            use_hint(&mut session, HintKind::Parity),
            Err(GameError::InactiveSession)
        ));
    }

    #[test]
    fn test_parity_hint() {
        let mut even = Session::with_target(Difficulty::Easy, 24);
        assert_eq!(
            use_hint(&mut even, HintKind::Parity).unwrap(),
            "The number is EVEN"
        );

        let mut odd = Session::with_target(Difficulty::Easy, 25);
        assert_eq!(
            use_hint(&mut odd, HintKind::Parity).unwrap(),
            "The number is ODD"
        );
    }

    #[test]
    fn test_range_hint_thirds() {
        // Range 1-50, width 16: lower third is 1-17, upper third starts at 34.
        let mut low = Session::with_target(Difficulty::Easy, 5);
        assert_eq!(
            use_hint(&mut low, HintKind::Range).unwrap(),
            "The number is in the lower third (1-17)"
        );

        let mut high = Session::with_target(Difficulty::Easy, 48);
        assert_eq!(
            use_hint(&mut high, HintKind::Range).unwrap(),
            "The number is in the upper third (34-50)"
        );

        let mut mid = Session::with_target(Difficulty::Easy, 25);
        assert_eq!(
            use_hint(&mut mid, HintKind::Range).unwrap(),
            "The number is in the middle third"
        );
    }

    #[test]
    fn test_proximity_hint_uses_last_guess() {
        let mut session = Session::with_target(Difficulty::Medium, 60);
        session.guess(55).unwrap();
        assert_eq!(
            use_hint(&mut session, HintKind::Proximity).unwrap(),
            "You're very close!"
        );
    }

    #[test]
    fn test_proximity_hint_falls_back_to_midpoint() {
        // No guess yet: midpoint of 1-100 is 50, distance to 60 is 10.
        let mut session = Session::with_target(Difficulty::Medium, 60);
        assert_eq!(
            use_hint(&mut session, HintKind::Proximity).unwrap(),
            "You're getting warmer!"
        );
    }
}
