// src/main.rs

use anyhow::Result;
use clap::{CommandFactory, Parser};
use pull::cli::Cli;
use pull::clipboard::SystemClipboard;
use pull::config::ConfigBuilder;
use pull::{execute, Outcome, OutputDestination};

fn main() -> Result<()> {
    // Initialize logging. Default to 'info' (or 'debug' in debug builds) if RUST_LOG is not set.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                if cfg!(debug_assertions) {
                    "pull=debug".parse()?
                } else {
                    "pull=info".parse()?
                },
            ),
        )
        .init();

    log::debug!("Starting pull v{}...", env!("CARGO_PKG_VERSION"));
    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    std::panic::set_hook(Box::new(|info| {
        let msg = match info.payload().downcast_ref::<&str>() {
            Some(s) => *s,
            None => match info.payload().downcast_ref::<String>() {
                Some(s) => s.as_str(),
                None => "Box<Any>",
            },
        };
        eprintln!(
            "Application Error: {}",
            msg.replace(env!("CARGO_MANIFEST_DIR"), "<redacted>")
        );
    }));

    // No arguments at all: show usage and succeed.
    if std::env::args_os().len() <= 1 {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    }

    // Usage errors exit 1 like every other failure; --help and --version exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            e.print()?;
            std::process::exit(code);
        }
    };
    let config = match ConfigBuilder::from_cli(cli).build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    log::debug!("Configuration built successfully.");

    let mut clipboard = SystemClipboard::new();
    let mut stdout = std::io::stdout().lock();

    match execute(&config, &mut clipboard, &mut stdout) {
        Ok(outcome) => {
            drop(stdout);
            report(&outcome);
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Prints the one-line status message for a finished action.
fn report(outcome: &Outcome) {
    match outcome {
        Outcome::Cleared => println!("Clipboard cleared."),
        Outcome::Written(path) => println!("Clipboard content written to {}", path.display()),
        Outcome::Delivered(OutputDestination::Clipboard) => println!("Copied to clipboard!"),
        Outcome::Delivered(OutputDestination::File(path)) => {
            println!("Output written to {}", path.display())
        }
        // The content itself went to stdout; keep it clean.
        Outcome::Emitted | Outcome::Delivered(OutputDestination::Stdout) => {}
    }
}
