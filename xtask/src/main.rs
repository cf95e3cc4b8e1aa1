use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::Command;

#[derive(Parser)]
#[command(name = "xtask", about = "Workspace automation for litcube")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run fmt, clippy, tests, docs and a headless replay
    Check,
    /// Run cargo fmt --check on all crates
    Fmt,
    /// Run clippy on all crates
    Clippy,
    /// Run all tests
    Test,
    /// Build rustdoc for the workspace
    Doc,
    /// Replay a short key script through the headless CLI
    Replay,
    /// Launch the desktop window
    Run,
}

/// One cargo invocation, named for its progress line and failure message.
struct Step {
    name: &'static str,
    args: &'static [&'static str],
}

const FMT: Step = Step {
    name: "cargo fmt --check",
    args: &["fmt", "--all", "--", "--check"],
};
const CLIPPY: Step = Step {
    name: "cargo clippy",
    args: &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
};
const TEST: Step = Step {
    name: "cargo test",
    args: &["test", "--workspace"],
};
const DOC: Step = Step {
    name: "cargo doc",
    args: &["doc", "--workspace", "--no-deps"],
};
const REPLAY: Step = Step {
    name: "headless replay",
    args: &["run", "-p", "litcube-cli", "--", "replay", "--keys", "jllik", "--json"],
};
const RUN: Step = Step {
    name: "litcube-desktop",
    args: &["run", "-p", "litcube-desktop"],
};

fn run(step: &Step) -> Result<()> {
    println!("==> Running {}", step.name);
    let status = Command::new("cargo").args(step.args).status()?;
    if !status.success() {
        anyhow::bail!("{} failed", step.name);
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check => {
            for step in [&FMT, &CLIPPY, &TEST, &DOC, &REPLAY] {
                run(step)?;
            }
        }
        Commands::Fmt => run(&FMT)?,
        Commands::Clippy => run(&CLIPPY)?,
        Commands::Test => run(&TEST)?,
        Commands::Doc => run(&DOC)?,
        Commands::Replay => run(&REPLAY)?,
        Commands::Run => run(&RUN)?,
    }

    Ok(())
}
