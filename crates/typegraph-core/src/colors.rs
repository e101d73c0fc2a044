//! ANSI colors for rendered declarations.
//!
//! - Blue: declared names and table keys
//! - Green: string literal types
//! - Dim: keywords and punctuation

/// Terminal palette. Only the standard 16-color codes are used so output
/// reads the same on light and dark themes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    pub blue: &'static str,
    pub green: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        blue: "\x1b[34m",
        green: "\x1b[32m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        blue: "",
        green: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.blue.is_empty()
    }

    /// `text` in blue, or unchanged when colors are off.
    pub fn name(&self, text: &str) -> String {
        format!("{}{}{}", self.blue, text, self.reset)
    }

    /// `text` dimmed, or unchanged when colors are off.
    pub fn punct(&self, text: &str) -> String {
        format!("{}{}{}", self.dim, text, self.reset)
    }
}
