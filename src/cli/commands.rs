use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tn", about = concat!("[x] tasknote v", env!("CARGO_PKG_VERSION"), " - to-dos and notes, in memory"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Start the to-do list with the sample tasks
    #[arg(long, global = true)]
    pub seed: bool,

    /// Config file (default: $XDG_CONFIG_HOME/tasknote/config.toml)
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// More log output on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replay a gesture script against a fresh session and print the result
    Script(ScriptArgs),
    /// Print the sample task list
    Sample,
}

#[derive(Args)]
pub struct ScriptArgs {
    /// Script file, or `-` for stdin
    pub path: String,
}
