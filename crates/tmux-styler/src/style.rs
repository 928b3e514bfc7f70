//! Style table: fixed ANSI SGR rules for every visual role in the output.

/// Terminal colors used by the style table (bright ANSI range).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Gray,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightWhite,
}

impl Color {
    /// SGR foreground code.
    pub const fn sgr(self) -> u8 {
        match self {
            Color::Gray => 90,
            Color::BrightGreen => 92,
            Color::BrightYellow => 93,
            Color::BrightBlue => 94,
            Color::BrightWhite => 97,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleRule {
    pub color: Color,
    pub bold: bool,
    pub underline: bool,
}

pub const ACTIVE: StyleRule = StyleRule {
    color: Color::BrightGreen,
    bold: true,
    underline: false,
};

pub const INACTIVE: StyleRule = StyleRule {
    color: Color::Gray,
    bold: false,
    underline: false,
};

pub const NAME: StyleRule = StyleRule {
    color: Color::BrightWhite,
    bold: true,
    underline: false,
};

pub const COUNT: StyleRule = StyleRule {
    color: Color::BrightYellow,
    bold: true,
    underline: false,
};

pub const HEADER: StyleRule = StyleRule {
    color: Color::BrightBlue,
    bold: true,
    underline: true,
};

/// Semantic role of a piece of output text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleToken {
    Active,
    Inactive,
    Name,
    Count,
    Header,
}

impl StyleToken {
    pub const fn rule(self) -> StyleRule {
        match self {
            StyleToken::Active => ACTIVE,
            StyleToken::Inactive => INACTIVE,
            StyleToken::Name => NAME,
            StyleToken::Count => COUNT,
            StyleToken::Header => HEADER,
        }
    }
}

impl StyleRule {
    /// SGR parameter list, e.g. `1;4;94`.
    fn sgr_params(self) -> String {
        let mut params = Vec::with_capacity(3);
        if self.bold {
            params.push("1".to_string());
        }
        if self.underline {
            params.push("4".to_string());
        }
        params.push(self.color.sgr().to_string());
        params.join(";")
    }
}

/// Render `text` through the rule for `token`. Returns `text` unchanged when
/// styling is disabled.
pub fn render(token: StyleToken, text: &str, enabled: bool) -> String {
    if !enabled {
        return text.to_string();
    }
    format!("\x1b[{}m{text}\x1b[0m", token.rule().sgr_params())
}
