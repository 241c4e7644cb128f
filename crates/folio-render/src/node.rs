#![forbid(unsafe_code)]

//! Element tree.
//!
//! A [`Node`] is either an [`Element`] or a run of text. Attribute order is
//! insertion order, so a tree always serializes to the same bytes.

use std::borrow::Cow;

use smallvec::SmallVec;

use folio_style::Style;

/// Tag name. Almost always a literal, occasionally computed (`h1`..`h6`).
pub type Tag = Cow<'static, str>;

type Attrs = SmallVec<[(Cow<'static, str>, String); 4]>;

/// A node in the element tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(el) => Some(el),
            Self::Text(_) => None,
        }
    }

    /// Concatenated text of this node and all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text(t) => out.push_str(t),
            Self::Element(el) => {
                for child in &el.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Depth-first search for elements matching `pred`.
    pub fn find_all<'a>(&'a self, pred: &dyn Fn(&Element) -> bool) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.walk(pred, &mut found);
        found
    }

    fn walk<'a>(&'a self, pred: &dyn Fn(&Element) -> bool, found: &mut Vec<&'a Element>) {
        if let Self::Element(el) = self {
            if pred(el) {
                found.push(el);
            }
            for child in &el.children {
                child.walk(pred, found);
            }
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Self::Element(el)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// An element with attributes, an optional inline style, and children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: Tag,
    attrs: Attrs,
    pub style: Option<Style>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<Tag>) -> Self {
        Self {
            tag: tag.into(),
            attrs: SmallVec::new(),
            style: None,
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing an earlier value for the same name.
    #[must_use]
    pub fn attr(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn set_attr(&mut self, name: impl Into<Cow<'static, str>>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(slot) = self.attrs.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.attrs.push((name, value));
        }
    }

    /// Set the `class` attribute. Empty class strings are ignored.
    #[must_use]
    pub fn class(self, class: impl Into<String>) -> Self {
        let class = class.into();
        if class.is_empty() {
            self
        } else {
            self.attr("class", class)
        }
    }

    #[must_use]
    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    /// Inline style. An empty style is dropped.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = (!style.is_empty()).then_some(style);
        self
    }

    #[must_use]
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    #[must_use]
    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn push(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(n, v)| (n.as_ref(), v.as_str()))
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .is_some_and(|c| c.split_whitespace().any(|c| c == class))
    }

    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }

    /// Depth-first search including `self`.
    pub fn find_all<'a>(&'a self, pred: &dyn Fn(&Element) -> bool) -> Vec<&'a Element> {
        let mut found = Vec::new();
        if pred(self) {
            found.push(self);
        }
        for child in &self.children {
            found.extend(child.find_all(pred));
        }
        found
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.find_all(&|el| el.get_attr("id") == Some(id))
            .into_iter()
            .next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn attr_replaces_in_place() {
        let el = Element::new("a")
            .attr("href", "/one")
            .attr("title", "t")
            .attr("href", "/two");
        let attrs: Vec<_> = el.attrs().collect();
        assert_eq!(attrs, vec![("href", "/two"), ("title", "t")]);
    }

    #[test]
    fn empty_class_and_style_are_dropped() {
        let el = Element::new("p").class("").style(Style::new());
        assert_eq!(el.get_attr("class"), None);
        assert_eq!(el.style, None);
    }

    #[test]
    fn text_content_is_depth_first() {
        let el = Element::new("p")
            .text("a")
            .child(Element::new("strong").text("b"))
            .text("c");
        assert_eq!(el.text_content(), "abc");
    }

    #[test]
    fn find_by_id_and_class() {
        let tree = Element::new("main").child(
            Element::new("section")
                .id("intro")
                .class("prose wide")
                .child(Element::new("h2").id("deep")),
        );
        assert_eq!(tree.find_by_id("deep").map(|e| e.tag.as_ref()), Some("h2"));
        assert!(tree.find_by_id("intro").is_some_and(|e| e.has_class("wide")));
        assert!(tree.find_by_id("nope").is_none());
    }
}
