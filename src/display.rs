use crate::models::{Difficulty, History, LeaderboardEntry, Rank, Stats};
use crate::session::{Direction, GuessOutcome, SessionSnapshot};

pub fn print_session_banner(snapshot: &SessionSnapshot) {
    let difficulty = snapshot.difficulty;
    println!("\n{}", "=".repeat(60));
    println!("  NUMBERMIND - {} Mode", difficulty.display_name());
    println!("{}\n", "=".repeat(60));

    println!(
        "I'm thinking of a number between {} and {}",
        snapshot.range_min, snapshot.range_max
    );
    println!("Attempts: {}", snapshot.max_attempts);
    println!("Hints:    {} available", snapshot.hint_budget);
    println!();
    println!("Type a number to guess, `hint <range|parity|proximity>`, or `quit`.");
    println!();
}

pub fn print_outcome(outcome: &GuessOutcome, snapshot: &SessionSnapshot) {
    match outcome {
        GuessOutcome::Win { attempts } => {
            println!("Congratulations! Solved in {} attempts", attempts);
        }
        GuessOutcome::Loss { target } => {
            println!("Game Over! The number was {}", target);
        }
        GuessOutcome::Continue {
            direction,
            proximity,
        } => {
            let feedback = match direction {
                Direction::TooLow => "Too Low!",
                Direction::TooHigh => "Too High!",
            };
            println!("{} ({})", feedback, proximity.label());
            println!(
                "Range: {}-{} | Attempt {}/{}",
                snapshot.range_min, snapshot.range_max, snapshot.attempts, snapshot.max_attempts
            );
        }
    }
}

pub fn print_game_summary(stats: &Stats, difficulty: Difficulty) {
    let best = stats
        .best_score(difficulty)
        .map(|b| b.to_string())
        .unwrap_or_else(|| "-".to_string());
    println!();
    println!(
        "Streak: {} | Win rate: {}% | Best ({}): {}",
        stats.current_streak,
        stats.win_rate(),
        difficulty.display_name(),
        best
    );
}

pub fn print_stats(stats: &Stats, history: &History) {
    println!("\n{}", "=".repeat(60));
    println!("  STATISTICS");
    println!("{}\n", "=".repeat(60));

    println!("Games played:     {}", stats.games_played);
    println!("Games won:        {}", stats.games_won);
    println!("Win rate:         {}%", stats.win_rate());
    println!("Current streak:   {}", stats.current_streak);
    println!("Longest streak:   {}", stats.max_streak);
    println!("Average attempts: {}", history.average_attempts());

    println!("\nBest scores:");
    for difficulty in Difficulty::all() {
        let best = stats
            .best_score(difficulty)
            .map(|b| b.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("  {:<8} {}", difficulty.display_name(), best);
    }

    println!("\nRecent games:");
    if history.is_empty() {
        println!("  No games played yet.");
    } else {
        for entry in history.entries() {
            let result = if entry.won { "won" } else { "lost" };
            println!(
                "  {}  {:<8} {:>2} attempts  {}",
                entry.date,
                entry.difficulty.display_name(),
                entry.attempts,
                result
            );
        }
    }
    println!();
}

pub fn print_leaderboard(
    difficulty: Difficulty,
    entries: &[LeaderboardEntry],
    player_name: &str,
    rank: Option<Rank>,
) {
    println!("\n{}", "=".repeat(60));
    println!("  {} Mode Champions", difficulty.display_name());
    println!("{}\n", "=".repeat(60));

    if entries.is_empty() {
        println!("No champions yet! Be the first to claim the top spot.");
        println!();
        return;
    }

    for (index, entry) in entries.iter().enumerate() {
        let medal = match index {
            0 => "1st".to_string(),
            1 => "2nd".to_string(),
            2 => "3rd".to_string(),
            n => format!("#{}", n + 1),
        };
        println!(
            "  {:<4} {:<20} {:>3} attempts  {} games, {}% wins, {}",
            medal,
            entry.name,
            entry.score,
            entry.games_played,
            entry.win_rate,
            entry.date.format("%Y-%m-%d")
        );
    }

    println!();
    match rank {
        Some(rank) => println!("Your rank ({}): {}", player_name, rank),
        None => println!("Your rank ({}): -", player_name),
    }
    println!();
}
