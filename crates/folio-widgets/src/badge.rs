#![forbid(unsafe_code)]

//! Badge widget.
//!
//! A small pill label for categories and tags.

use folio_render::{Element, Node};
use folio_style::Style;

use crate::Widget;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Badge<'a> {
    label: &'a str,
    class: &'static str,
    style: Style,
}

impl<'a> Badge<'a> {
    /// Category badge: rounded, blue.
    #[must_use]
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            class: "px-3 py-1 bg-blue-100 text-blue-800 text-sm font-medium rounded-full",
            style: Style::new(),
        }
    }

    /// Tag chip: square-ish, gray.
    #[must_use]
    pub fn tag(label: &'a str) -> Self {
        Self {
            label,
            class: "px-2 py-1 bg-gray-100 text-gray-700 text-sm rounded-md folio-tag",
            style: Style::new(),
        }
    }

    /// Override colors inline.
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn label(&self) -> &str {
        self.label
    }
}

impl Widget for Badge<'_> {
    fn render(&self) -> Node {
        Element::new("span")
            .class(self.class)
            .style(self.style)
            .text(self.label)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_render::HtmlPresenter;
    use folio_style::Rgb;

    #[test]
    fn renders_label_and_optional_style() {
        let html = HtmlPresenter::new().render_node(&Badge::tag("AWS").render());
        assert_eq!(
            html,
            r#"<span class="px-2 py-1 bg-gray-100 text-gray-700 text-sm rounded-md folio-tag">AWS</span>"#
        );
        let styled = Badge::new("DevOps").with_style(Style::new().fg(Rgb::BLACK));
        let html = HtmlPresenter::new().render_node(&styled.render());
        assert!(html.ends_with(r#" style="color:#000000;">DevOps</span>"#));
    }
}
