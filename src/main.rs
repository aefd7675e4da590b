//! snip - A tiny keyword-addressed snippet notebook.
//!
//! Provides both human-friendly and agent-friendly (robot mode) interfaces.
#![forbid(unsafe_code)]

use std::io::{self, IsTerminal};

use clap::Parser;
use console::style;
use serde::Serialize;

use snip::cli::{self, Cli, Commands};
use snip::config;
use snip::error::{Result, SnipError};
use snip::logging;
use snip::store::SnippetStore;

/// Printed by `get` when no snippet exists under the requested keyword.
/// Presentation only: the store API reports absence as `None`.
const NOT_FOUND_SENTINEL: &str = "404: Snippet Not Found";

/// Build information embedded at compile time.
mod build_info {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    pub fn git_sha() -> &'static str {
        option_env!("VERGEN_GIT_SHA").unwrap_or("unknown")
    }

    pub fn git_dirty() -> &'static str {
        option_env!("VERGEN_GIT_DIRTY").unwrap_or("false")
    }

    pub fn build_timestamp() -> &'static str {
        option_env!("VERGEN_BUILD_TIMESTAMP").unwrap_or("unknown")
    }

    pub fn rustc_semver() -> &'static str {
        option_env!("VERGEN_RUSTC_SEMVER").unwrap_or("unknown")
    }
}

fn main() {
    let cli = Cli::parse();

    // Handle no-color flag or non-TTY
    if cli.no_color || !io::stdout().is_terminal() {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    logging::init_logging(cli.robot, cli.verbose, cli.quiet);

    if let Err(e) = run(&cli) {
        output_error(&cli, &e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Put(args) => cmd_put(cli, args),
        Commands::Get(args) => cmd_get(cli, args),
        Commands::Catalog => cmd_catalog(cli),
        Commands::Search(args) => cmd_search(cli, args),
        Commands::Version => cmd_version(cli),
        Commands::Completions(args) => cmd_completions(args),
    }
}

/// Opens the snippet store at the resolved database path.
fn open_store(cli: &Cli) -> Result<SnippetStore> {
    let path = config::resolve_db_path(cli.db.as_deref())?;
    SnippetStore::open(path)
}

// === Command Implementations ===

fn cmd_put(cli: &Cli, args: &cli::PutArgs) -> Result<()> {
    let mut store = open_store(cli)?;
    let stored = store.put(&args.name, &args.snippet, args.hidden_flag())?;

    if cli.robot {
        output_json(&serde_json::json!({
            "keyword": stored.keyword,
            "message": stored.message,
            "hidden": stored.hidden,
            "recorded_at": stored.recorded_at,
            "ok": true,
        }));
    } else if !cli.quiet {
        println!("Stored {:?} as {:?}", stored.message, stored.keyword);
    }
    Ok(())
}

fn cmd_get(cli: &Cli, args: &cli::GetArgs) -> Result<()> {
    let store = open_store(cli)?;
    let snippet = store.get(&args.name)?;

    if cli.robot {
        match snippet {
            Some(snip) => output_json(&serde_json::json!({
                "found": true,
                "keyword": snip.keyword,
                "message": snip.message,
                "hidden": snip.hidden,
                "recorded_at": snip.recorded_at,
            })),
            None => output_json(&serde_json::json!({
                "found": false,
                "keyword": args.name,
            })),
        }
    } else {
        match snippet {
            Some(snip) => println!("Retrieved snippet: {:?}", snip.message),
            None => println!("{NOT_FOUND_SENTINEL}"),
        }
    }
    Ok(())
}

fn cmd_catalog(cli: &Cli) -> Result<()> {
    let store = open_store(cli)?;
    let keywords = store.catalog()?;

    if cli.robot {
        output_json(&keywords);
    } else {
        for keyword in &keywords {
            println!("{keyword}");
        }
    }
    Ok(())
}

fn cmd_search(cli: &Cli, args: &cli::SearchArgs) -> Result<()> {
    let store = open_store(cli)?;
    let matches = store.search(&args.needle)?;

    if cli.robot {
        output_json(&matches);
    } else {
        for snip in &matches {
            println!("Keyword: {}  Snippet: {}", snip.keyword, snip.message);
        }
    }
    Ok(())
}

#[allow(clippy::unnecessary_wraps)] // Consistent return type with other commands
fn cmd_version(cli: &Cli) -> Result<()> {
    if cli.robot {
        output_json(&serde_json::json!({
            "version": build_info::VERSION,
            "git_sha": build_info::git_sha(),
            "git_dirty": build_info::git_dirty() == "true",
            "build_timestamp": build_info::build_timestamp(),
            "rustc_version": build_info::rustc_semver(),
        }));
    } else {
        println!("snip {}", build_info::VERSION);
        println!(
            "git: {}{}",
            build_info::git_sha(),
            if build_info::git_dirty() == "true" {
                " (dirty)"
            } else {
                ""
            }
        );
        println!("built: {}", build_info::build_timestamp());
        println!("rustc: {}", build_info::rustc_semver());
    }
    Ok(())
}

#[allow(clippy::unnecessary_wraps)] // Consistent return type with other commands
fn cmd_completions(args: &cli::CompletionsArgs) -> Result<()> {
    use clap::CommandFactory;
    clap_complete::generate(args.shell, &mut Cli::command(), "snip", &mut io::stdout());
    Ok(())
}

// === Output Helpers ===

fn output_json<T: Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("Failed to serialize output: {e}"),
    }
}

fn output_error(cli: &Cli, error: &SnipError) {
    if cli.robot {
        let json = serde_json::json!({
            "error": true,
            "message": error.to_string(),
            "suggestion": error.suggestion(),
            "recoverable": error.is_user_recoverable(),
        });
        match serde_json::to_string_pretty(&json) {
            Ok(out) => eprintln!("{out}"),
            Err(e) => eprintln!("Failed to serialize error: {e}"),
        }
    } else {
        eprintln!("{}: {error}", style("Error").for_stderr().red().bold());
        if let Some(suggestion) = error.suggestion() {
            eprintln!("{}: {suggestion}", style("Hint").for_stderr().yellow());
        }
    }
}
