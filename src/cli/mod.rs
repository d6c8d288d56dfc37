mod data;
mod difficulty_cmd;
mod leaderboard_cmd;
mod name_cmd;
mod play;
mod stats_cmd;
mod theme_cmd;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::models::{Difficulty, Theme};

#[derive(Parser)]
#[command(name = "numbermind")]
#[command(about = "Number guessing game with stats and leaderboards", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start a game
    Play {
        #[arg(short, long, value_enum)]
        difficulty: Option<Difficulty>,
    },
    /// Show lifetime statistics and recent games
    Stats,
    /// Show or set the default difficulty
    Difficulty {
        #[arg(value_enum)]
        level: Option<Difficulty>,
    },
    /// Show a difficulty's leaderboard and your rank
    Leaderboard {
        #[arg(value_enum)]
        difficulty: Option<Difficulty>,
    },
    /// Show or set your display name
    Name { value: Option<String> },
    /// Show or set the color theme
    Theme {
        #[arg(value_enum)]
        value: Option<Theme>,
    },
    /// Write a backup of settings, stats, and history
    Export { path: PathBuf },
    /// Merge a backup file into the local data
    Import { path: PathBuf },
    /// Clear stored data
    Reset {
        #[arg(value_enum)]
        target: ResetTarget,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ResetTarget {
    Stats,
    History,
    Leaderboards,
    All,
}

pub fn run(cli: Cli) {
    match cli.command {
        None => play::play(None),
        Some(Commands::Play { difficulty }) => play::play(difficulty),
        Some(Commands::Stats) => stats_cmd::show_stats(),
        Some(Commands::Difficulty { level }) => difficulty_cmd::handle_difficulty(level),
        Some(Commands::Leaderboard { difficulty }) => {
            leaderboard_cmd::show_leaderboard(difficulty)
        }
        Some(Commands::Name { value }) => name_cmd::handle_name(value),
        Some(Commands::Theme { value }) => theme_cmd::handle_theme(value),
        Some(Commands::Export { path }) => data::export_to_file(&path),
        Some(Commands::Import { path }) => data::import_from_file(&path),
        Some(Commands::Reset { target }) => data::reset(target),
    }
}
