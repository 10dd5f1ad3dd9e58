use clap::Parser;
use tasknote::cli::commands::Cli;
use tasknote::cli::handlers;
use tasknote::io::config_io::load_config;
use tasknote::io::logging::{LogTarget, init_logging};

fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let level = match cli.verbose {
        0 => config.log.level.clone(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    };

    match cli.command {
        None => {
            // No subcommand → launch TUI; stderr belongs to the terminal, so log to a file or not at all
            if let Some(path) = config.log.file.as_deref() {
                if let Err(e) = init_logging(&level, LogTarget::File(path)) {
                    eprintln!("error: {}", e);
                    std::process::exit(1);
                }
            }
            if let Err(e) = tasknote::tui::run(&config, cli.seed) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(_) => {
            if let Err(e) = init_logging(&level, LogTarget::Stderr) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
            if let Err(e) = handlers::dispatch(cli, &config) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
