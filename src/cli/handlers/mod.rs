use std::io::Read;

use tracing::info;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::cli::script::parse_script;
use crate::model::config::AppConfig;
use crate::ops::{NoteSession, TaskSession, TaskStore};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli, config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    match cli.command {
        None => {
            eprintln!("no subcommand given (try `tn --help`)");
            Ok(())
        }
        Some(Commands::Script(args)) => cmd_script(args, config, cli.seed, json),
        Some(Commands::Sample) => cmd_sample(config, json),
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_script(
    args: ScriptArgs,
    config: &AppConfig,
    seed: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let src = read_script(&args.path)?;
    let gestures = parse_script(&src)?;
    info!(path = %args.path, gestures = gestures.len(), "replaying script");

    let mut tasks = TaskSession::new(TaskStore::from_config(config, seed));
    let mut notes = NoteSession::default();
    for gesture in &gestures {
        gesture.apply(&mut tasks, &mut notes);
    }

    print_session(&tasks, &notes, json)
}

fn cmd_sample(config: &AppConfig, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let tasks = TaskSession::new(TaskStore::from_config(config, true));
    print_session(&tasks, &NoteSession::default(), json)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_script(path: &str) -> Result<String, Box<dyn std::error::Error>> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read script '{}': {}", path, e).into())
}

fn print_session(
    tasks: &TaskSession,
    notes: &NoteSession,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let out = session_to_json(tasks, notes);
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print!("{}", format_session(tasks, notes));
    }
    Ok(())
}
