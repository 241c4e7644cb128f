#![forbid(unsafe_code)]

//! StyleSheet registry for named styles.
//!
//! Named styles behave like CSS classes: widgets refer to a name
//! (`"nav-active"`) and the sheet decides what it looks like. The sheet
//! can emit itself as a CSS file so the static pages and the stylesheet
//! never drift apart.
//!
//! # Example
//! ```
//! use folio_style::{Rgb, Style, StyleSheet};
//!
//! let mut sheet = StyleSheet::new();
//! sheet.define("error", Style::new().fg(Rgb::rgb(220, 38, 38)).bold());
//! assert!(sheet.contains("error"));
//! assert_eq!(sheet.to_css("folio"), ".folio-error{color:#dc2626;font-weight:bold;}\n");
//! ```

use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::color::Rgb;
use crate::style::Style;

/// A registry of named styles.
///
/// Names are kept ordered so serialized CSS is stable across runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleSheet {
    styles: BTreeMap<String, Style>,
}

impl StyleSheet {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sheet with the semantic styles used by the site chrome.
    ///
    /// - `nav-active`: highlighted sidebar entry
    /// - `nav-scrolled`: navbar after the page scrolled
    /// - `status-success` / `status-error`: contact form banners
    /// - `muted`, `link`, `tag`
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut sheet = Self::new();
        sheet.define(
            "nav-active",
            Style::new()
                .bg(Rgb::rgb(191, 219, 254))
                .fg(Rgb::rgb(30, 58, 138))
                .bold(),
        );
        sheet.define(
            "nav-scrolled",
            Style::new().bg(Rgb::rgba(255, 255, 255, 242)),
        );
        sheet.define(
            "status-success",
            Style::new().fg(Rgb::rgb(21, 128, 61)).bg(Rgb::rgb(240, 253, 244)),
        );
        sheet.define(
            "status-error",
            Style::new().fg(Rgb::rgb(185, 28, 28)).bg(Rgb::rgb(254, 242, 242)),
        );
        sheet.define("muted", Style::new().fg(Rgb::rgb(107, 114, 128)));
        sheet.define(
            "link",
            Style::new().fg(Rgb::rgb(37, 99, 235)).underline(),
        );
        sheet.define(
            "tag",
            Style::new().fg(Rgb::rgb(55, 65, 81)).bg(Rgb::rgb(243, 244, 246)),
        );
        sheet
    }

    /// Define a named style, replacing any previous definition.
    pub fn define(&mut self, name: impl Into<String>, style: Style) {
        self.styles.insert(name.into(), style);
    }

    pub fn remove(&mut self, name: &str) -> Option<Style> {
        self.styles.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<Style> {
        self.styles.get(name).copied()
    }

    pub fn get_or_default(&self, name: &str) -> Style {
        self.get(name).unwrap_or_default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }

    /// Merge several named styles left to right. Unknown names are skipped.
    pub fn compose(&self, names: &[&str]) -> Style {
        names
            .iter()
            .filter_map(|name| self.get(name))
            .fold(Style::new(), |acc, s| acc.merge(&s))
    }

    /// Serialize as CSS class rules, one per line: `.{prefix}-{name}{...}`.
    #[must_use]
    pub fn to_css(&self, prefix: &str) -> String {
        let mut out = String::new();
        for (name, style) in &self.styles {
            let _ = writeln!(out, ".{prefix}-{name}{{{}}}", style.to_css());
        }
        out
    }
}
