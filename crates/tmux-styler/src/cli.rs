//! CLI definition using clap derive.

use clap::error::ErrorKind;
use clap::{Parser, Subcommand, ValueEnum};

pub const USAGE: &str = "Usage: tmux-styler <command> [args...]";
pub const SESSION_INFO_USAGE: &str = "Usage: tmux-styler session-info <session-name>";

#[derive(Debug, Parser)]
#[command(
    name = "tmux-styler",
    version,
    about = "Colorized listings of tmux sessions and windows",
    disable_help_subcommand = true
)]
pub struct Cli {
    /// tmux binary to invoke
    #[arg(long, global = true, env = "TMUX_STYLER_TMUX_BIN", default_value = "tmux")]
    pub tmux_bin: String,

    /// tmux socket name (passed as `tmux -L`)
    #[arg(long, short = 'L', global = true, env = "TMUX_STYLER_SOCKET_NAME")]
    pub socket_name: Option<String>,

    /// tmux socket path (passed as `tmux -S`, wins over --socket-name)
    #[arg(long, short = 'S', global = true, env = "TMUX_STYLER_SOCKET_PATH")]
    pub socket_path: Option<String>,

    /// When to style output
    #[arg(
        long,
        global = true,
        value_enum,
        env = "TMUX_STYLER_COLOR",
        default_value_t = ColorChoice::Auto
    )]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List tmux sessions with attach state and window counts
    Sessions,
    /// List the windows of one session with active state and pane counts
    SessionInfo {
        /// Session to inspect
        session: Option<String>,
    },
    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

/// What to do when clap rejects the command line: help and version go out
/// as clap renders them, everything else prints one line with exit status 1.
pub fn handle_parse_error(err: &clap::Error, args: &[String]) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            0
        }
        kind => {
            tracing::debug!(error = %err, "rejected command line");
            println!("{}", rejection_message(kind, args));
            1
        }
    }
}

/// An unrecognized flag in command position is reported as an unknown
/// command; every other rejection gets the matching usage line.
fn rejection_message(kind: ErrorKind, args: &[String]) -> String {
    let has_command = args
        .iter()
        .skip(1)
        .any(|a| a == "sessions" || a == "session-info");
    match args.get(1) {
        Some(first) if kind == ErrorKind::UnknownArgument && !has_command => {
            format!("Unknown command: {first}")
        }
        _ => usage_for(args).to_string(),
    }
}

fn usage_for(args: &[String]) -> &'static str {
    if args.iter().skip(1).any(|a| a == "session-info") {
        SESSION_INFO_USAGE
    } else {
        USAGE
    }
}
