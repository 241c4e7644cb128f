#![forbid(unsafe_code)]

//! Render kernel: element trees and their HTML form.
//!
//! # Role in folio
//! Widgets, the content renderer, and the diagram renderer all produce
//! [`node::Node`] trees. Nothing above this crate writes markup by hand;
//! [`html::HtmlPresenter`] is the single place where escaping happens.
//!
//! # Primary responsibilities
//! - **Node / Element**: an ordered, deterministic element tree.
//! - **HtmlPresenter**: serialization with text and attribute escaping.
//! - **Document**: head metadata plus body, rendered as a full page.

pub mod document;
pub mod html;
pub mod node;

pub use document::{Document, PageMeta};
pub use html::{HtmlPresenter, escape_attr_into, escape_text_into};
pub use node::{Element, Node};
