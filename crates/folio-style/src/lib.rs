#![forbid(unsafe_code)]

//! Style primitives for folio.
//!
//! Colors are packed RGBA ([`Rgb`]), text attributes are [`StyleFlags`], and a
//! [`Style`] combines them with cascading [`Style::merge`]. Styles serialize to
//! inline CSS declarations; a [`StyleSheet`] serializes to class rules.

pub mod color;
pub mod style;
pub mod stylesheet;

pub use color::{ColorParseError, Rgb};
pub use style::{Style, StyleFlags};
pub use stylesheet::StyleSheet;
