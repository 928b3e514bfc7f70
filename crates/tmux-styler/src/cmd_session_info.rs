//! `tmux-styler session-info <name>` — styled window list for one session.

use std::io::Write;

use styler_tmux::{TmuxCommandRunner, WindowRecord, list_windows};

use crate::display::window_indicator;
use crate::style::{StyleToken, render};

/// Entry point for `tmux-styler session-info`.
pub fn cmd_session_info(
    runner: &impl TmuxCommandRunner,
    session: &str,
    use_color: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let windows = match list_windows(runner, session) {
        Ok(windows) if !windows.is_empty() => windows,
        Ok(_) => {
            tracing::debug!(session, "list-windows returned no usable records");
            writeln!(out, "Session '{session}' not found")?;
            return Ok(());
        }
        Err(e) => {
            tracing::debug!(session, error = %e, "list-windows failed");
            writeln!(out, "Session '{session}' not found")?;
            return Ok(());
        }
    };

    out.write_all(format_session_info(session, &windows, use_color).as_bytes())?;
    out.flush()?;
    Ok(())
}

/// One window line: `▶ 0: bash (2 panes)`, styled as a whole.
pub fn format_window_line(window: &WindowRecord, use_color: bool) -> String {
    let state = if window.active {
        StyleToken::Active
    } else {
        StyleToken::Inactive
    };
    let line = format!(
        "{} {}: {} ({} panes)",
        window_indicator(window.active),
        window.index,
        window.name,
        window.pane_count
    );
    render(state, &line, use_color)
}

/// Header, one line per window in tmux order, then a blank line.
pub fn format_session_info(session: &str, windows: &[WindowRecord], use_color: bool) -> String {
    let mut out = String::new();
    let header = format!("SESSION: {}", session.to_uppercase());
    out.push_str(&render(StyleToken::Header, &header, use_color));
    out.push_str("\n\n");

    for window in windows {
        out.push_str(&format_window_line(window, use_color));
        out.push('\n');
    }

    out.push('\n');
    out
}
