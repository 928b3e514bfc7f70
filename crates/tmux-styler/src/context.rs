//! Output context: color resolution and executor construction from CLI options.

use std::io::IsTerminal;

use styler_tmux::TmuxExecutor;

use crate::cli::{Cli, ColorChoice};

/// Resolve --color flag to bool.
pub fn resolve_color(choice: ColorChoice) -> bool {
    let no_color = std::env::var("NO_COLOR").ok();
    color_enabled(choice, std::io::stdout().is_terminal(), no_color.as_deref())
}

/// `auto` styles only a terminal, and a non-empty `NO_COLOR` turns it off.
fn color_enabled(choice: ColorChoice, stdout_is_terminal: bool, no_color: Option<&str>) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => stdout_is_terminal && no_color.is_none_or(str::is_empty),
    }
}

/// Build the tmux executor from the global options.
pub fn executor_from_cli(cli: &Cli) -> TmuxExecutor {
    let mut executor = TmuxExecutor::new(cli.tmux_bin.as_str());
    if let Some(ref path) = cli.socket_path {
        executor = executor.with_socket_path(path.as_str());
    }
    if let Some(ref name) = cli.socket_name {
        executor = executor.with_socket_name(name.as_str());
    }
    executor
}
