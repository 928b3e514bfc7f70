//! Indicator glyphs and fixed hint text shared by the listings.

/// Indicator symbols used by the session and window listings.
pub const INDICATOR_ATTACHED: &str = "●";
pub const INDICATOR_DETACHED: &str = "○";
pub const INDICATOR_ACTIVE_WINDOW: &str = "▶";
pub const INDICATOR_WINDOW: &str = "•";

/// Keybinding hints printed under the session listing.
pub const SESSIONS_FOOTER: &str = "Enter: switch • Ctrl+d: kill • Ctrl+r: rename • Ctrl+n: new";

pub fn session_indicator(attached: bool) -> &'static str {
    if attached {
        INDICATOR_ATTACHED
    } else {
        INDICATOR_DETACHED
    }
}

pub fn window_indicator(active: bool) -> &'static str {
    if active {
        INDICATOR_ACTIVE_WINDOW
    } else {
        INDICATOR_WINDOW
    }
}
