//! CLI styling utilities
//!
//! Semantic styling via the [`Stylize`] trait, with terminal color
//! support detection delegated to `owo-colors` (respects `NO_COLOR`,
//! `CLICOLOR`, `CLICOLOR_FORCE`, and TTY detection).

use std::fmt::{self, Display};

use owo_colors::{OwoColorize, Stream, Style};

const ACCENT: Style = Style::new().cyan();
const SUCCESS: Style = Style::new().green();
const ERROR: Style = Style::new().red();
const WARN: Style = Style::new().yellow();
const MUTED: Style = Style::new().dimmed();
const EMPHASIS: Style = Style::new().bold();

/// A value with semantic styling applied.
#[derive(Clone, Debug)]
pub struct Styled<T> {
    value: T,
    style: Style,
    stream: Stream,
}

impl<T: Display> Display for Styled<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.value
                .if_supports_color(self.stream, |v| v.style(self.style))
        )
    }
}

/// Extension trait for semantic terminal styling.
///
/// Automatically implemented for all [`Display`] types. Methods take
/// `&self` so borrowed data can be styled without moving.
pub trait Stylize: Display {
    /// Accent color (cyan): branch names, counts
    fn accent(&self) -> Styled<&Self> {
        Styled {
            value: self,
            style: ACCENT,
            stream: Stream::Stdout,
        }
    }

    /// Success color (green): completion states
    fn success(&self) -> Styled<&Self> {
        Styled {
            value: self,
            style: SUCCESS,
            stream: Stream::Stdout,
        }
    }

    /// Error color (red), rendered for stderr
    fn error(&self) -> Styled<&Self> {
        Styled {
            value: self,
            style: ERROR,
            stream: Stream::Stderr,
        }
    }

    /// Warning color (yellow), rendered for stderr
    fn warn(&self) -> Styled<&Self> {
        Styled {
            value: self,
            style: WARN,
            stream: Stream::Stderr,
        }
    }

    /// Muted style (dim): hints, secondary detail
    fn muted(&self) -> Styled<&Self> {
        Styled {
            value: self,
            style: MUTED,
            stream: Stream::Stdout,
        }
    }

    /// Emphasis style (bold): headers, current action
    fn emphasis(&self) -> Styled<&Self> {
        Styled {
            value: self,
            style: EMPHASIS,
            stream: Stream::Stdout,
        }
    }
}

impl<T: Display + ?Sized> Stylize for T {}

/// Success checkmark
pub const CHECK: &str = "✓";

/// Green checkmark for success states.
#[inline]
pub fn check() -> Styled<&'static str> {
    Styled {
        value: CHECK,
        style: SUCCESS,
        stream: Stream::Stdout,
    }
}

/// Cyan arrow for action steps.
#[inline]
pub fn arrow() -> Styled<&'static str> {
    Styled {
        value: "→",
        style: ACCENT,
        stream: Stream::Stdout,
    }
}

use indicatif::ProgressStyle;
use std::sync::OnceLock;

/// Default spinner style - cyan dots.
pub fn spinner_style() -> ProgressStyle {
    static STYLE: OnceLock<ProgressStyle> = OnceLock::new();
    STYLE
        .get_or_init(|| {
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("hardcoded spinner template is valid")
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
        })
        .clone()
}
