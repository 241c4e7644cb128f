#![forbid(unsafe_code)]

//! Full HTML documents.

use crate::html::{HtmlPresenter, escape_attr_into, escape_text_into};
use crate::node::Node;

/// Head metadata for a page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub keywords: String,
    /// Absolute canonical URL, when known.
    pub canonical: Option<String>,
}

impl PageMeta {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = keywords.into();
        self
    }

    #[must_use]
    pub fn canonical(mut self, url: impl Into<String>) -> Self {
        self.canonical = Some(url.into());
        self
    }
}

/// A page: metadata, linked assets, and body nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub lang: String,
    pub meta: PageMeta,
    pub stylesheets: Vec<String>,
    pub scripts: Vec<String>,
    pub body: Vec<Node>,
}

impl Document {
    pub fn new(meta: PageMeta) -> Self {
        Self {
            lang: "en".to_string(),
            meta,
            stylesheets: Vec::new(),
            scripts: Vec::new(),
            body: Vec::new(),
        }
    }

    #[must_use]
    pub fn stylesheet(mut self, href: impl Into<String>) -> Self {
        self.stylesheets.push(href.into());
        self
    }

    #[must_use]
    pub fn script(mut self, src: impl Into<String>) -> Self {
        self.scripts.push(src.into());
        self
    }

    #[must_use]
    pub fn body<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.body.extend(nodes.into_iter().map(Into::into));
        self
    }

    /// Render the complete page, doctype included.
    pub fn to_html(&self, presenter: &HtmlPresenter) -> String {
        let mut out = String::with_capacity(4096);
        out.push_str("<!DOCTYPE html>\n<html lang=\"");
        escape_attr_into(&mut out, &self.lang);
        out.push_str("\">\n<head>\n<meta charset=\"utf-8\">\n");
        out.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
        );
        out.push_str("<title>");
        escape_text_into(&mut out, &self.meta.title);
        out.push_str("</title>\n");
        meta_tag(&mut out, "description", &self.meta.description);
        meta_tag(&mut out, "keywords", &self.meta.keywords);
        if let Some(url) = &self.meta.canonical {
            out.push_str("<link rel=\"canonical\" href=\"");
            escape_attr_into(&mut out, url);
            out.push_str("\">\n");
        }
        for href in &self.stylesheets {
            out.push_str("<link rel=\"stylesheet\" href=\"");
            escape_attr_into(&mut out, href);
            out.push_str("\">\n");
        }
        out.push_str("</head>\n<body>\n");
        for node in &self.body {
            presenter.write_node(&mut out, node);
            out.push('\n');
        }
        for src in &self.scripts {
            out.push_str("<script type=\"module\" src=\"");
            escape_attr_into(&mut out, src);
            out.push_str("\"></script>\n");
        }
        out.push_str("</body>\n</html>\n");
        out
    }
}

fn meta_tag(out: &mut String, name: &str, content: &str) {
    if content.is_empty() {
        return;
    }
    out.push_str("<meta name=\"");
    out.push_str(name);
    out.push_str("\" content=\"");
    escape_attr_into(out, content);
    out.push_str("\">\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Element;

    #[test]
    fn head_carries_metadata() {
        let doc = Document::new(
            PageMeta::new("Blog | Q&A")
                .description("Notes \"quoted\"")
                .canonical("https://example.dev/blog"),
        )
        .stylesheet("/assets/folio.css")
        .body([Element::new("main").text("hi")]);

        let html = doc.to_html(&HtmlPresenter::new());
        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
        assert!(html.contains("<title>Blog | Q&amp;A</title>"));
        assert!(html.contains(r#"<meta name="description" content="Notes &quot;quoted&quot;">"#));
        assert!(html.contains(r#"<link rel="canonical" href="https://example.dev/blog">"#));
        assert!(html.contains(r#"<link rel="stylesheet" href="/assets/folio.css">"#));
        assert!(html.contains("<main>hi</main>"));
        assert!(!html.contains("keywords"));
    }
}
