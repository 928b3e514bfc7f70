//! `tmux-styler sessions` — styled session list with keybinding footer.

use std::io::Write;

use styler_tmux::{SessionRecord, TmuxCommandRunner, list_sessions};

use crate::display::{SESSIONS_FOOTER, session_indicator};
use crate::style::{StyleToken, render};

pub const NO_SESSIONS: &str = "No tmux sessions found";
const HEADER: &str = "TMUX SESSIONS";

/// Entry point for `tmux-styler sessions`.
pub fn cmd_sessions(
    runner: &impl TmuxCommandRunner,
    use_color: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let sessions = match list_sessions(runner) {
        Ok(sessions) if !sessions.is_empty() => sessions,
        Ok(_) => {
            tracing::debug!("list-sessions returned no usable records");
            writeln!(out, "{NO_SESSIONS}")?;
            return Ok(());
        }
        Err(e) => {
            tracing::debug!(error = %e, "list-sessions failed");
            writeln!(out, "{NO_SESSIONS}")?;
            return Ok(());
        }
    };

    out.write_all(format_sessions(&sessions, use_color).as_bytes())?;
    out.flush()?;
    Ok(())
}

/// One session line: `● main (3 windows)`.
pub fn format_session_line(session: &SessionRecord, use_color: bool) -> String {
    let state = if session.attached {
        StyleToken::Active
    } else {
        StyleToken::Inactive
    };
    format!(
        "{} {} {}",
        render(state, session_indicator(session.attached), use_color),
        render(StyleToken::Name, &session.name, use_color),
        render(
            StyleToken::Count,
            &format!("({} windows)", session.window_count),
            use_color
        ),
    )
}

/// Header, one line per session in tmux order, then the footer.
pub fn format_sessions(sessions: &[SessionRecord], use_color: bool) -> String {
    let mut out = String::new();
    out.push_str(&render(StyleToken::Header, HEADER, use_color));
    out.push_str("\n\n");

    for session in sessions {
        out.push_str(&format_session_line(session, use_color));
        out.push('\n');
    }

    out.push('\n');
    out.push_str(&render(StyleToken::Inactive, SESSIONS_FOOTER, use_color));
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use styler_tmux::TmuxError;

    struct StaticRunner(&'static str);

    impl TmuxCommandRunner for StaticRunner {
        fn run(&self, args: &[&str]) -> Result<String, TmuxError> {
            assert_eq!(args[0], "list-sessions");
            Ok(self.0.to_string())
        }
    }

    struct FailingRunner;

    impl TmuxCommandRunner for FailingRunner {
        fn run(&self, _args: &[&str]) -> Result<String, TmuxError> {
            Err(TmuxError::CommandFailed("exit 1: no server running".into()))
        }
    }

    fn run_plain(runner: &impl TmuxCommandRunner) -> String {
        let mut buf = Vec::new();
        cmd_sessions(runner, false, &mut buf).expect("writes to a Vec");
        String::from_utf8(buf).expect("utf8")
    }

    fn session(name: &str, attached: bool, windows: &str) -> SessionRecord {
        SessionRecord {
            name: name.into(),
            attached,
            window_count: windows.into(),
        }
    }

    #[test]
    fn lists_attached_and_detached_sessions() {
        let output = run_plain(&StaticRunner("main:1:3\ndev:0:1\n"));
        assert_eq!(
            output,
            "TMUX SESSIONS\n\
             \n\
             ● main (3 windows)\n\
             ○ dev (1 windows)\n\
             \n\
             Enter: switch • Ctrl+d: kill • Ctrl+r: rename • Ctrl+n: new\n"
        );
    }

    #[test]
    fn query_failure_prints_fixed_message() {
        assert_eq!(run_plain(&FailingRunner), "No tmux sessions found\n");
    }

    #[test]
    fn missing_binary_prints_fixed_message() {
        struct NotFound;
        impl TmuxCommandRunner for NotFound {
            fn run(&self, _args: &[&str]) -> Result<String, TmuxError> {
                Err(TmuxError::NotFound)
            }
        }
        assert_eq!(run_plain(&NotFound), "No tmux sessions found\n");
    }

    #[test]
    fn only_malformed_lines_counts_as_no_sessions() {
        assert_eq!(run_plain(&StaticRunner("garbage\nmore:1\n")), "No tmux sessions found\n");
    }

    #[test]
    fn malformed_lines_are_skipped_silently() {
        let output = run_plain(&StaticRunner("main:1:3\nbad\ndev:0:1"));
        assert!(!output.contains("bad"));
        assert_eq!(output.lines().filter(|l| l.contains("windows")).count(), 2);
    }

    #[test]
    fn formatting_is_idempotent() {
        let s = session("main", true, "3");
        assert_eq!(format_session_line(&s, true), format_session_line(&s, true));
        assert_eq!(format_session_line(&s, false), format_session_line(&s, false));
    }

    #[test]
    fn colored_session_line() {
        let line = format_session_line(&session("main", true, "3"), true);
        assert_eq!(
            line,
            "\x1b[1;92m●\x1b[0m \x1b[1;97mmain\x1b[0m \x1b[1;93m(3 windows)\x1b[0m"
        );
        let line = format_session_line(&session("dev", false, "1"), true);
        assert!(line.starts_with("\x1b[90m○\x1b[0m "));
    }

    #[test]
    fn colored_header_and_footer() {
        let output = format_sessions(&[session("main", true, "3")], true);
        assert!(output.starts_with("\x1b[1;4;94mTMUX SESSIONS\x1b[0m\n\n"));
        assert!(output.ends_with(&format!("\n\n\x1b[90m{SESSIONS_FOOTER}\x1b[0m\n")));
    }
}
