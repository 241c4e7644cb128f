#![forbid(unsafe_code)]

//! Cascading text styles and their CSS form.

use std::fmt::Write as _;

use bitflags::bitflags;

use crate::color::Rgb;

bitflags! {
    /// Text attribute flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleFlags: u8 {
        const BOLD          = 0b0000_0001;
        const DIM           = 0b0000_0010;
        const ITALIC        = 0b0000_0100;
        const UNDERLINE     = 0b0000_1000;
        const STRIKETHROUGH = 0b0001_0000;
        const MONOSPACE     = 0b0010_0000;
    }
}

/// Foreground, background, and attribute flags.
///
/// Unset colors inherit from the surrounding element when merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    pub fg: Option<Rgb>,
    pub bg: Option<Rgb>,
    pub flags: StyleFlags,
}

impl Style {
    #[inline]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            flags: StyleFlags::empty(),
        }
    }

    #[must_use]
    pub const fn fg(mut self, color: Rgb) -> Self {
        self.fg = Some(color);
        self
    }

    #[must_use]
    pub const fn bg(mut self, color: Rgb) -> Self {
        self.bg = Some(color);
        self
    }

    #[must_use]
    pub const fn bold(self) -> Self {
        self.with(StyleFlags::BOLD)
    }

    #[must_use]
    pub const fn dim(self) -> Self {
        self.with(StyleFlags::DIM)
    }

    #[must_use]
    pub const fn italic(self) -> Self {
        self.with(StyleFlags::ITALIC)
    }

    #[must_use]
    pub const fn underline(self) -> Self {
        self.with(StyleFlags::UNDERLINE)
    }

    #[must_use]
    pub const fn strikethrough(self) -> Self {
        self.with(StyleFlags::STRIKETHROUGH)
    }

    #[must_use]
    pub const fn monospace(self) -> Self {
        self.with(StyleFlags::MONOSPACE)
    }

    const fn with(mut self, flag: StyleFlags) -> Self {
        self.flags = self.flags.union(flag);
        self
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.flags.is_empty()
    }

    /// Layer `other` on top of `self`: set colors in `other` win, flags accumulate.
    #[must_use]
    pub fn merge(&self, other: &Style) -> Style {
        Style {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            flags: self.flags | other.flags,
        }
    }

    /// Append CSS declarations (`color:#..;font-weight:bold;`) to `out`.
    pub fn write_css(&self, out: &mut String) {
        if let Some(fg) = self.fg {
            let _ = write!(out, "color:{fg};");
        }
        if let Some(bg) = self.bg.filter(|bg| bg.a() > 0) {
            let _ = write!(out, "background:{bg};");
        }
        if self.flags.contains(StyleFlags::BOLD) {
            out.push_str("font-weight:bold;");
        }
        if self.flags.contains(StyleFlags::DIM) {
            out.push_str("opacity:0.5;");
        }
        if self.flags.contains(StyleFlags::ITALIC) {
            out.push_str("font-style:italic;");
        }
        if self.flags.contains(StyleFlags::MONOSPACE) {
            out.push_str("font-family:monospace;");
        }

        let mut decorations = Vec::new();
        if self.flags.contains(StyleFlags::UNDERLINE) {
            decorations.push("underline");
        }
        if self.flags.contains(StyleFlags::STRIKETHROUGH) {
            decorations.push("line-through");
        }
        if !decorations.is_empty() {
            let _ = write!(out, "text-decoration:{};", decorations.join(" "));
        }
    }

    /// CSS declarations as a fresh string. Empty for an empty style.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut out = String::new();
        self.write_css(&mut out);
        out
    }
}
