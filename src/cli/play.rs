use std::io::{self, BufRead, Write};

use chrono::{Local, Utc};

use crate::display;
use crate::error::GameError;
use crate::hint::{self, HintKind};
use crate::models::{Difficulty, History, HistoryEntry, LeaderboardEntry, Leaderboards, Settings, Stats};
use crate::session::{GuessOutcome, Session};
use crate::storage::{
    self, FileStore, KeyValueStore, HISTORY_KEY, LEADERBOARDS_KEY, SETTINGS_KEY, STATS_KEY,
};

pub fn play(difficulty: Option<Difficulty>) {
    let mut store = FileStore::open_default();
    let settings: Settings = storage::load_or_default(&store, SETTINGS_KEY);
    let difficulty = difficulty.unwrap_or(settings.default_difficulty);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let mut session = Session::start(difficulty);
        if !run_session(&mut session, &mut lines, &mut store, &settings) {
            return;
        }
        if !prompt_yes_no(&mut lines, "Play again? [y/N] ") {
            return;
        }
    }
}

/// Runs one session to completion. Returns false when input ended or the
/// player quit.
fn run_session(
    session: &mut Session,
    lines: &mut impl Iterator<Item = io::Result<String>>,
    store: &mut dyn KeyValueStore,
    settings: &Settings,
) -> bool {
    display::print_session_banner(&session.snapshot());

    while session.active {
        print!("> ");
        let _ = io::stdout().flush();

        let line = match lines.next() {
            Some(Ok(line)) => line,
            _ => return false,
        };
        let input = line.trim();

        if input.is_empty() {
            continue;
        }
        if input == "quit" || input == "q" {
            println!("Game abandoned.");
            return false;
        }
        if let Some(rest) = input.strip_prefix("hint") {
            handle_hint(session, rest.trim());
            continue;
        }

        let value: u32 = match input.parse() {
            Ok(v) => v,
            Err(_) => {
                println!("Please enter a number, `hint <kind>`, or `quit`.");
                continue;
            }
        };

        match session.guess(value) {
            Ok(outcome) => {
                display::print_outcome(&outcome, &session.snapshot());
                if let Some(won) = finished(&outcome) {
                    match record_outcome(store, settings, session.difficulty, won, session.attempts)
                    {
                        Ok(stats) => {
                            display::print_game_summary(&stats, session.difficulty)
                        }
                        Err(e) => eprintln!("Failed to save progress: {}", e),
                    }
                }
            }
            // OutOfRange and friends are recoverable: report and re-prompt.
            Err(e) => println!("{}", e),
        }
    }

    true
}

fn finished(outcome: &GuessOutcome) -> Option<bool> {
    match outcome {
        GuessOutcome::Win { .. } => Some(true),
        GuessOutcome::Loss { .. } => Some(false),
        GuessOutcome::Continue { .. } => None,
    }
}

fn handle_hint(session: &mut Session, kind: &str) {
    let kind = match kind {
        "range" => HintKind::Range,
        "parity" => HintKind::Parity,
        "proximity" => HintKind::Proximity,
        other => {
            println!("Unknown hint '{}'. Try range, parity, or proximity.", other);
            return;
        }
    };

    match hint::use_hint(session, kind) {
        Ok(text) => {
            let snapshot = session.snapshot();
            println!("{}", text);
            println!(
                "Hints used: {}/{}",
                snapshot.hints_used, snapshot.hint_budget
            );
        }
        Err(e) => println!("{}", e),
    }
}

/// Applies a finished session to every store and writes each back. Stats and
/// history respect the player's save toggles; the leaderboard only sees wins.
/// Returns the updated stats for the end-of-game summary.
pub(crate) fn record_outcome(
    store: &mut dyn KeyValueStore,
    settings: &Settings,
    difficulty: Difficulty,
    won: bool,
    attempts: u32,
) -> Result<Stats, GameError> {
    let mut stats: Stats = storage::load_or_default(store, STATS_KEY);
    stats.record(difficulty, won, attempts);
    if settings.save_stats {
        storage::save(store, STATS_KEY, &stats)?;
    }

    if settings.save_history {
        let mut history: History = storage::load_or_default(store, HISTORY_KEY);
        history.append(HistoryEntry {
            difficulty,
            attempts,
            won,
            date: Local::now().format("%Y-%m-%d").to_string(),
        });
        storage::save(store, HISTORY_KEY, &history)?;
    }

    if won {
        let now = Utc::now();
        let mut boards: Leaderboards = storage::load_or_default(store, LEADERBOARDS_KEY);
        boards.submit(
            difficulty,
            LeaderboardEntry {
                name: storage::load_player_name(store),
                score: attempts,
                win_rate: stats.win_rate(),
                games_played: stats.games_played,
                date: now,
                timestamp: now.timestamp_millis(),
            },
        );
        storage::save(store, LEADERBOARDS_KEY, &boards)?;
    }

    Ok(stats)
}

fn prompt_yes_no(lines: &mut impl Iterator<Item = io::Result<String>>, prompt: &str) -> bool {
    print!("{}", prompt);
    let _ = io::stdout().flush();
    match lines.next() {
        Some(Ok(line)) => matches!(line.trim(), "y" | "Y" | "yes"),
        _ => false,
    }
}
