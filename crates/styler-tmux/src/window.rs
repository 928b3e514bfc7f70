//! WindowRecord, list-windows format string, and parser.

use crate::error::TmuxError;
use crate::executor::TmuxCommandRunner;
use crate::parser::{parse_flag, parse_records};

/// Colon-delimited format string for `tmux list-windows -F`.
pub const LIST_WINDOWS_FORMAT: &str =
    "#{window_index}:#{window_name}:#{?window_active,1,0}:#{window_panes}";

const WINDOW_FIELDS: usize = 4;

/// One line of `tmux list-windows` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRecord {
    pub index: String,
    pub name: String,
    pub active: bool,
    /// Raw `#{window_panes}` text, display only.
    pub pane_count: String,
}

impl WindowRecord {
    fn from_fields(fields: &[&str]) -> Self {
        Self {
            index: fields[0].to_string(),
            name: fields[1].to_string(),
            active: parse_flag(fields[2]),
            pane_count: fields[3].to_string(),
        }
    }
}

/// Execute `tmux list-windows -t <session>` and parse the output.
pub fn list_windows(
    runner: &impl TmuxCommandRunner,
    session: &str,
) -> Result<Vec<WindowRecord>, TmuxError> {
    let output = runner.run(&["list-windows", "-t", session, "-F", LIST_WINDOWS_FORMAT])?;
    Ok(parse_list_windows_output(&output))
}

/// Parse the raw output of `tmux list-windows -F <FORMAT>`, in tmux order.
pub fn parse_list_windows_output(output: &str) -> Vec<WindowRecord> {
    parse_records(output, WINDOW_FIELDS)
        .iter()
        .map(|fields| WindowRecord::from_fields(fields))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_active_and_inactive() {
        let windows = parse_list_windows_output("0:bash:1:2\n1:vim:0:1");
        assert_eq!(
            windows,
            vec![
                WindowRecord {
                    index: "0".into(),
                    name: "bash".into(),
                    active: true,
                    pane_count: "2".into(),
                },
                WindowRecord {
                    index: "1".into(),
                    name: "vim".into(),
                    active: false,
                    pane_count: "1".into(),
                },
            ]
        );
    }

    #[test]
    fn extra_fields_are_ignored_positionally() {
        let windows = parse_list_windows_output("0:a:b:1:2");
        assert_eq!(
            windows,
            vec![WindowRecord {
                index: "0".into(),
                name: "a".into(),
                active: false,
                pane_count: "1".into(),
            }]
        );
    }

    #[test]
    fn empty_window_name() {
        let windows = parse_list_windows_output("2::1:1");
        assert_eq!(windows[0].name, "");
        assert!(windows[0].active);
    }

    #[test]
    fn short_lines_are_skipped() {
        let windows = parse_list_windows_output("0:bash:1\n1:vim:0:1");
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].name, "vim");
    }

    #[test]
    fn mock_runner_list_windows() {
        struct MockRunner;
        impl TmuxCommandRunner for MockRunner {
            fn run(&self, args: &[&str]) -> Result<String, TmuxError> {
                assert_eq!(
                    args,
                    ["list-windows", "-t", "work", "-F", LIST_WINDOWS_FORMAT]
                );
                Ok("0:bash:1:2\n".to_string())
            }
        }
        let windows = list_windows(&MockRunner, "work").expect("should list");
        assert_eq!(windows.len(), 1);
        assert!(windows[0].active);
    }
}
