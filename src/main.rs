mod cli;
mod display;
mod error;
mod hint;
mod models;
mod session;
mod storage;
mod transfer;

use clap::Parser;
use crate::cli::Cli;

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    cli::run(cli);
}
