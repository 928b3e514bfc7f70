//! SessionRecord, list-sessions format string, and parser.

use crate::error::TmuxError;
use crate::executor::TmuxCommandRunner;
use crate::parser::{parse_flag, parse_records};

/// Colon-delimited format string for `tmux list-sessions -F`.
pub const LIST_SESSIONS_FORMAT: &str = "#{session_name}:#{session_attached}:#{session_windows}";

const SESSION_FIELDS: usize = 3;

/// One line of `tmux list-sessions` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    pub name: String,
    pub attached: bool,
    /// Raw `#{session_windows}` text, display only.
    pub window_count: String,
}

impl SessionRecord {
    fn from_fields(fields: &[&str]) -> Self {
        Self {
            name: fields[0].to_string(),
            attached: parse_flag(fields[1]),
            window_count: fields[2].to_string(),
        }
    }
}

/// Execute `tmux list-sessions` and parse the output.
pub fn list_sessions(runner: &impl TmuxCommandRunner) -> Result<Vec<SessionRecord>, TmuxError> {
    let output = runner.run(&["list-sessions", "-F", LIST_SESSIONS_FORMAT])?;
    Ok(parse_list_sessions_output(&output))
}

/// Parse the raw output of `tmux list-sessions -F <FORMAT>`, in tmux order.
pub fn parse_list_sessions_output(output: &str) -> Vec<SessionRecord> {
    parse_records(output, SESSION_FIELDS)
        .iter()
        .map(|fields| SessionRecord::from_fields(fields))
        .collect()
}
