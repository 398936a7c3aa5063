mod cli;
mod console;
mod entry;
mod logging;
mod reveal;
mod session;

use clap::Parser;
use cli::Args;
use console::Console;
use santa_core::AssignmentEngine;
use std::io;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(&args.log_level);

    let policy = args.retry_policy();
    policy.validate()?;
    let mut engine = AssignmentEngine::with_rng(policy, args.rng());

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout(), !args.no_clear);
    session::run(&mut console, &mut engine)
}
