#![forbid(unsafe_code)]

//! HTML serialization.
//!
//! [`HtmlPresenter`] turns element trees into markup. Text is escaped for
//! `<`, `>`, `&`; attribute values additionally escape `"`.

use memchr::memchr3;

use crate::node::{Element, Node};

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Configuration for HTML output.
#[derive(Debug, Clone)]
pub struct HtmlPresenter {
    /// Emit element styles as `style="..."` attributes.
    pub inline_styles: bool,
}

impl Default for HtmlPresenter {
    fn default() -> Self {
        Self {
            inline_styles: true,
        }
    }
}

impl HtmlPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render a sequence of sibling nodes.
    pub fn render(&self, nodes: &[Node]) -> String {
        let mut out = String::new();
        for node in nodes {
            self.write_node(&mut out, node);
        }
        out
    }

    pub fn render_node(&self, node: &Node) -> String {
        let mut out = String::new();
        self.write_node(&mut out, node);
        out
    }

    pub fn write_node(&self, out: &mut String, node: &Node) {
        match node {
            Node::Text(text) => escape_text_into(out, text),
            Node::Element(el) => self.write_element(out, el),
        }
    }

    fn write_element(&self, out: &mut String, el: &Element) {
        out.push('<');
        out.push_str(&el.tag);
        for (name, value) in el.attrs() {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            escape_attr_into(out, value);
            out.push('"');
        }
        if self.inline_styles
            && let Some(style) = el.style
        {
            out.push_str(" style=\"");
            escape_attr_into(out, &style.to_css());
            out.push('"');
        }
        out.push('>');

        if VOID_ELEMENTS.contains(&el.tag.as_ref()) {
            return;
        }
        for child in &el.children {
            self.write_node(out, child);
        }
        out.push_str("</");
        out.push_str(&el.tag);
        out.push('>');
    }
}

/// Escape text content into `out`.
pub fn escape_text_into(out: &mut String, s: &str) {
    if memchr3(b'<', b'>', b'&', s.as_bytes()).is_none() {
        out.push_str(s);
        return;
    }
    for c in s.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            _ => out.push(c),
        }
    }
}

/// Escape an attribute value into `out`.
pub fn escape_attr_into(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
