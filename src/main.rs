//! Interactive terminal front-end.
//!
//! A line-oriented REPL over one [`TerminalSession`] and one
//! [`VirtualFileStore`]: print the prompt, read a line, execute, print the
//! output (errors in red), repeat until EOF. `clear` wipes the screen the
//! way the in-browser terminal wipes its output buffer.

use std::fs;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

use deskshell::models::SeedManifest;
use deskshell::{TerminalSession, VirtualFileStore, config};

/// Desktop-environment terminal over an in-memory virtual filesystem.
#[derive(Parser, Debug)]
#[command(name = "deskshell", version, about)]
struct Cli {
    /// Replace the built-in filesystem with a JSON seed manifest.
    #[arg(long, value_name = "FILE")]
    seed: Option<PathBuf>,
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let mut store = match build_store(cli.seed.as_deref()) {
        Ok(store) => store,
        Err(message) => {
            eprintln!("{}", message.red());
            return ExitCode::FAILURE;
        }
    };
    let mut session = TerminalSession::new();

    print!("{}", config::WELCOME_TEXT);

    let stdin = io::stdin();
    let color = io::stdout().is_terminal();
    let mut line = String::new();
    loop {
        if color {
            print!("{} ", session.prompt().green());
        } else {
            print!("{} ", session.prompt());
        }
        let _ = io::stdout().flush();

        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let result = session.execute(&mut store, &line);
        if result.clear_screen {
            // ANSI: erase the display, cursor to the top-left corner.
            print!("\x1b[2J\x1b[1;1H");
            continue;
        }
        for output_line in &result.output {
            if result.is_error && color {
                println!("{}", output_line.red());
            } else {
                println!("{output_line}");
            }
        }
    }

    ExitCode::SUCCESS
}

/// Build the store from the embedded seed, or from a manifest file.
fn build_store(seed: Option<&std::path::Path>) -> Result<VirtualFileStore, String> {
    let Some(seed_path) = seed else {
        return Ok(VirtualFileStore::seeded());
    };

    let text = fs::read_to_string(seed_path)
        .map_err(|e| format!("deskshell: cannot read {}: {e}", seed_path.display()))?;
    let manifest: SeedManifest = serde_json::from_str(&text)
        .map_err(|e| format!("deskshell: invalid seed manifest {}: {e}", seed_path.display()))?;
    Ok(VirtualFileStore::from_manifest(&manifest))
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
