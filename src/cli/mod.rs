//! CLI argument definitions and command dispatch.

use clap::builder::{FalseyValueParser, NonEmptyStringValueParser};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// snip - A tiny keyword-addressed snippet notebook.
///
/// Robot Mode: Use --robot for machine-parseable output optimized for AI agents.
#[derive(Parser, Debug)]
#[command(name = "snip", version, about, long_about = None)]
#[command(propagate_version = true, arg_required_else_help = true)]
pub struct Cli {
    /// Path to the snippet database (created on first use)
    #[arg(long, global = true, value_name = "PATH", env = "SNIP_DB")]
    pub db: Option<PathBuf>,

    /// Robot mode: machine-parseable JSON output (optimized for AI agents)
    #[arg(long, global = true)]
    pub robot: bool,

    /// Verbose output (-v for debug, -vv for trace)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-essential output)
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR", value_parser = FalseyValueParser::new())]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    // === Snippets ===
    /// Store a snippet under a keyword (overwrites any existing one)
    Put(PutArgs),

    /// Fetch the snippet stored under a keyword
    Get(GetArgs),

    /// List all visible keywords in ascending order
    Catalog,

    /// Find snippets containing a string
    Search(SearchArgs),

    // === Utilities ===
    /// Show version and build information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// === Argument Structs ===

#[derive(Parser, Debug)]
pub struct PutArgs {
    /// Keyword to file the snippet under
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub name: String,

    /// The snippet text to store
    pub snippet: String,

    /// Hide this snippet from catalog and search
    #[arg(long, conflicts_with = "unhide")]
    pub hide: bool,

    /// Make a hidden snippet visible again
    #[arg(long, visible_alias = "show", alias = "no-hide")]
    pub unhide: bool,
}

impl PutArgs {
    /// Visibility to store: `None` leaves an existing snippet's flag
    /// unchanged (new snippets default to visible).
    pub const fn hidden_flag(&self) -> Option<bool> {
        if self.hide {
            Some(true)
        } else if self.unhide {
            Some(false)
        } else {
            None
        }
    }
}

#[derive(Parser, Debug)]
pub struct GetArgs {
    /// Keyword to look up
    pub name: String,
}

#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Substring to look for in snippet text (literal, case-sensitive)
    #[arg(value_name = "STRING")]
    pub needle: String,
}

#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
