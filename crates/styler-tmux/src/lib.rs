//! styler-tmux: tmux backend IO boundary.
//! Provides subprocess execution, the colon-delimited record parser, and the
//! session/window listing queries. No presentation logic.

pub mod error;
pub mod executor;
pub mod parser;
pub mod session;
pub mod window;

pub use error::TmuxError;
pub use executor::{TmuxCommandRunner, TmuxExecutor};
pub use parser::parse_records;
pub use session::{LIST_SESSIONS_FORMAT, SessionRecord, list_sessions, parse_list_sessions_output};
pub use window::{LIST_WINDOWS_FORMAT, WindowRecord, list_windows, parse_list_windows_output};
