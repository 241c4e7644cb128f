#![forbid(unsafe_code)]

//! Markdown to element tree.
//!
//! Parses GitHub-flavoured markdown with [`pulldown_cmark`] and builds a
//! [`Node`] tree styled from a fixed class table ([`CLASSES`]).
//!
//! Fenced code blocks are dispatched on their tag through [`FenceKind`]:
//! `mermaid` blocks become SVG diagrams, known languages go through the
//! [`SyntaxHighlighter`], and everything else renders as plain
//! preformatted text.
//!
//! # Example
//!
//! ```
//! use folio_extras::markdown::MarkdownRenderer;
//!
//! let renderer = MarkdownRenderer::new();
//! let html = renderer.render_html("## Results {#results}\n\nLatency dropped.");
//! assert!(html.starts_with("<h2 class=\"text-2xl font-semibold mt-6 mb-3\" id=\"results\">"));
//! ```

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

use folio_render::{Element, HtmlPresenter, Node};

use crate::mermaid;
use crate::syntax::{Language, SyntaxHighlighter};

/// Classes applied to each markdown element kind.
///
/// There is one table, [`CLASSES`]; it is not configurable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkdownClasses {
    pub h1: &'static str,
    pub h2: &'static str,
    /// Also used for h4-h6.
    pub h3: &'static str,
    pub p: &'static str,
    pub ul: &'static str,
    pub ol: &'static str,
    pub li: &'static str,
    pub blockquote: &'static str,
    pub table_wrapper: &'static str,
    pub table: &'static str,
    pub thead: &'static str,
    pub tbody: &'static str,
    pub th: &'static str,
    pub td: &'static str,
    pub link: &'static str,
    pub inline_code: &'static str,
    pub plain_pre: &'static str,
    pub diagram: &'static str,
    pub diagram_error: &'static str,
    pub hr: &'static str,
    pub img: &'static str,
}

pub const CLASSES: MarkdownClasses = MarkdownClasses {
    h1: "text-3xl font-bold mt-8 mb-4",
    h2: "text-2xl font-semibold mt-6 mb-3",
    h3: "text-xl font-semibold mt-4 mb-2",
    p: "text-gray-700 mb-4",
    ul: "list-disc pl-6 mb-4",
    ol: "list-decimal pl-6 mb-4",
    li: "text-gray-700 mb-1",
    blockquote: "border-l-4 border-gray-300 pl-4 italic text-gray-600 mb-4",
    table_wrapper: "overflow-x-auto",
    table: "min-w-full divide-y divide-gray-200",
    thead: "bg-gray-50",
    tbody: "bg-white divide-y divide-gray-200",
    th: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider",
    td: "px-6 py-4 whitespace-nowrap text-sm text-gray-500",
    link: "text-blue-600 hover:underline",
    inline_code: "bg-gray-100 rounded px-1 font-mono text-sm",
    plain_pre: "folio-plain bg-gray-100 rounded-lg p-4 overflow-x-auto mb-4 text-sm",
    diagram: "my-6 folio-mermaid",
    diagram_error: "folio-mermaid-error bg-red-50 text-red-700 rounded-lg p-4 mb-4 text-sm",
    hr: "my-8 border-gray-200",
    img: "rounded-lg my-4",
};

impl MarkdownClasses {
    pub const fn heading(&self, level: u8) -> &'static str {
        match level {
            1 => self.h1,
            2 => self.h2,
            _ => self.h3,
        }
    }
}

/// How a fenced block is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Diagram,
    Code(Language),
    /// Absent or unrecognised tag.
    Plain,
}

impl FenceKind {
    /// Resolve from a fence info string. Only the first word counts.
    pub fn from_info(info: &str) -> Self {
        let tag = info.split_whitespace().next().unwrap_or_default();
        if tag.eq_ignore_ascii_case("mermaid") {
            Self::Diagram
        } else {
            Language::from_tag(tag).map_or(Self::Plain, Self::Code)
        }
    }
}

/// A heading found by [`outline`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineEntry {
    pub level: u8,
    pub id: String,
    pub text: String,
}

fn options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_HEADING_ATTRIBUTES
        | Options::ENABLE_GFM
}

fn level_number(level: HeadingLevel) -> u8 {
    level as u8
}

/// Anchor id for heading text without an explicit `{#id}`.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut dash = false;
    for c in text.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
            dash = false;
        } else if (c.is_whitespace() || c == '-' || c == '_') && !slug.is_empty() && !dash {
            slug.push('-');
            dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Every heading as `(level, id, text)` in document order.
pub fn outline(markdown: &str) -> Vec<OutlineEntry> {
    let mut entries = Vec::new();
    let mut current: Option<(u8, Option<String>, String)> = None;
    for event in Parser::new_ext(markdown, options()) {
        match event {
            Event::Start(Tag::Heading { level, id, .. }) => {
                current = Some((level_number(level), id.map(|i| i.to_string()), String::new()));
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some((_, _, buf)) = current.as_mut() {
                    buf.push_str(&text);
                }
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some((level, id, text)) = current.take() {
                    let text = text.trim().to_string();
                    let id = id.unwrap_or_else(|| slugify(&text));
                    entries.push(OutlineEntry { level, id, text });
                }
            }
            _ => {}
        }
    }
    entries
}

/// Markdown renderer. Holds the highlighter so tokenizers are built once.
pub struct MarkdownRenderer {
    highlighter: SyntaxHighlighter,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self {
            highlighter: SyntaxHighlighter::new(),
        }
    }

    /// Render markdown into sibling nodes. Pure: same input, same tree.
    pub fn render(&self, markdown: &str) -> Vec<Node> {
        let mut state = RenderState::new(&self.highlighter);
        for event in Parser::new_ext(markdown, options()) {
            state.event(event);
        }
        state.finish()
    }

    pub fn render_html(&self, markdown: &str) -> String {
        HtmlPresenter::new().render(&self.render(markdown))
    }

    /// Render one fenced block body according to its kind.
    pub fn render_fence(&self, kind: FenceKind, text: &str) -> Node {
        render_fence(&self.highlighter, kind, text)
    }
}

fn render_fence(highlighter: &SyntaxHighlighter, kind: FenceKind, text: &str) -> Node {
    let code = text.strip_suffix('\n').unwrap_or(text);
    match kind {
        FenceKind::Diagram => match mermaid::render(text.trim()) {
            Ok(svg) => Element::new("div").class(CLASSES.diagram).child(svg).into(),
            Err(err) => Element::new("pre")
                .class(CLASSES.diagram_error)
                .attr("role", "alert")
                .text(format!("Diagram error: {err}"))
                .into(),
        },
        FenceKind::Code(lang) => highlighter.render(code, lang),
        FenceKind::Plain => Element::new("pre")
            .class(CLASSES.plain_pre)
            .child(Element::new("code").text(code))
            .into(),
    }
}

// ---------------------------------------------------------------------------
// Internal render state machine
// ---------------------------------------------------------------------------

struct CodeBlock {
    kind: FenceKind,
    text: String,
}

struct RenderState<'h> {
    highlighter: &'h SyntaxHighlighter,
    /// Open elements; index 0 is the synthetic root.
    stack: Vec<Element>,
    code: Option<CodeBlock>,
    /// Alt text being collected for an image.
    image: Option<(String, String, String)>,
    heading_text: Option<String>,
    in_table_head: bool,
}

impl<'h> RenderState<'h> {
    fn new(highlighter: &'h SyntaxHighlighter) -> Self {
        Self {
            highlighter,
            stack: vec![Element::new("div")],
            code: None,
            image: None,
            heading_text: None,
            in_table_head: false,
        }
    }

    fn open(&mut self, el: Element) {
        self.stack.push(el);
    }

    fn close(&mut self) {
        if self.stack.len() > 1
            && let Some(el) = self.stack.pop()
        {
            self.append(el);
        }
    }

    fn close_if(&mut self, tag: &str) {
        if self.stack.last().is_some_and(|el| el.tag == tag) {
            self.close();
        }
    }

    fn append(&mut self, node: impl Into<Node>) {
        if let Some(parent) = self.stack.last_mut() {
            parent.push(node);
        }
    }

    fn event(&mut self, event: Event<'_>) {
        if let Some(code) = self.code.as_mut() {
            match event {
                Event::Text(text) => code.text.push_str(&text),
                Event::End(TagEnd::CodeBlock) => self.finish_code_block(),
                _ => {}
            }
            return;
        }
        if let Some((_, _, alt)) = self.image.as_mut() {
            match event {
                Event::Text(text) | Event::Code(text) => alt.push_str(&text),
                Event::End(TagEnd::Image) => self.finish_image(),
                _ => {}
            }
            return;
        }
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) => {
                if let Some(buf) = self.heading_text.as_mut() {
                    buf.push_str(&text);
                }
                self.append(&*text);
            }
            Event::Code(code) => {
                if let Some(buf) = self.heading_text.as_mut() {
                    buf.push_str(&code);
                }
                self.append(Element::new("code").class(CLASSES.inline_code).text(code.to_string()));
            }
            Event::SoftBreak => self.append("\n"),
            Event::HardBreak => self.append(Element::new("br")),
            Event::Rule => self.append(Element::new("hr").class(CLASSES.hr)),
            Event::TaskListMarker(checked) => {
                let mut input = Element::new("input")
                    .attr("type", "checkbox")
                    .attr("disabled", "")
                    .class("mr-2");
                if checked {
                    input.set_attr("checked", "");
                }
                self.append(input);
            }
            Event::Html(html) | Event::InlineHtml(html) => self.raw_html(&html),
            _ => {}
        }
    }

    /// Raw HTML is shown as text, except line breaks.
    fn raw_html(&mut self, html: &str) {
        let tag = html.trim().to_ascii_lowercase();
        if matches!(tag.as_str(), "<br>" | "<br/>" | "<br />") {
            self.append(Element::new("br"));
        } else {
            self.append(html);
        }
    }

    fn start_tag(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => self.open(Element::new("p").class(CLASSES.p)),
            Tag::Heading { level, id, .. } => {
                let level = level_number(level);
                let mut el = Element::new(format!("h{level}")).class(CLASSES.heading(level));
                if let Some(id) = id {
                    el = el.id(id.to_string());
                }
                self.heading_text = Some(String::new());
                self.open(el);
            }
            Tag::BlockQuote(_) => {
                self.open(Element::new("blockquote").class(CLASSES.blockquote));
            }
            Tag::CodeBlock(kind) => {
                let kind = match kind {
                    CodeBlockKind::Fenced(info) => FenceKind::from_info(&info),
                    CodeBlockKind::Indented => FenceKind::Plain,
                };
                self.code = Some(CodeBlock {
                    kind,
                    text: String::new(),
                });
            }
            Tag::List(start) => {
                let el = match start {
                    Some(1) => Element::new("ol").class(CLASSES.ol),
                    Some(n) => Element::new("ol").class(CLASSES.ol).attr("start", n.to_string()),
                    None => Element::new("ul").class(CLASSES.ul),
                };
                self.open(el);
            }
            Tag::Item => self.open(Element::new("li").class(CLASSES.li)),
            Tag::Table(_) => {
                self.open(Element::new("div").class(CLASSES.table_wrapper));
                self.open(Element::new("table").class(CLASSES.table));
            }
            Tag::TableHead => {
                self.in_table_head = true;
                self.open(Element::new("thead").class(CLASSES.thead));
                self.open(Element::new("tr"));
            }
            Tag::TableRow => {
                if self.stack.last().is_some_and(|el| el.tag == "table") {
                    self.open(Element::new("tbody").class(CLASSES.tbody));
                }
                self.open(Element::new("tr"));
            }
            Tag::TableCell => {
                let el = if self.in_table_head {
                    Element::new("th").class(CLASSES.th)
                } else {
                    Element::new("td").class(CLASSES.td)
                };
                self.open(el);
            }
            Tag::Emphasis => self.open(Element::new("em")),
            Tag::Strong => self.open(Element::new("strong")),
            Tag::Strikethrough => self.open(Element::new("del")),
            Tag::Link {
                dest_url, title, ..
            } => {
                let mut el = Element::new("a")
                    .attr("href", dest_url.to_string())
                    .class(CLASSES.link);
                if !title.is_empty() {
                    el.set_attr("title", title.to_string());
                }
                if dest_url.starts_with("http://") || dest_url.starts_with("https://") {
                    el.set_attr("target", "_blank");
                    el.set_attr("rel", "noopener noreferrer");
                }
                self.open(el);
            }
            Tag::Image {
                dest_url, title, ..
            } => {
                self.image = Some((dest_url.to_string(), title.to_string(), String::new()));
            }
            // HTML blocks carry their content as Html events.
            _ => {}
        }
    }

    fn end_tag(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Heading(_) => {
                if let Some(text) = self.heading_text.take()
                    && let Some(el) = self.stack.last_mut()
                    && el.get_attr("id").is_none()
                {
                    let slug = slugify(text.trim());
                    if !slug.is_empty() {
                        el.set_attr("id", slug);
                    }
                }
                self.close();
            }
            TagEnd::Table => {
                self.close_if("tbody");
                self.close_if("table");
                self.close_if("div");
            }
            TagEnd::TableHead => {
                self.in_table_head = false;
                self.close_if("tr");
                self.close_if("thead");
            }
            TagEnd::Paragraph
            | TagEnd::BlockQuote(_)
            | TagEnd::List(_)
            | TagEnd::Item
            | TagEnd::TableRow
            | TagEnd::TableCell
            | TagEnd::Emphasis
            | TagEnd::Strong
            | TagEnd::Strikethrough
            | TagEnd::Link => self.close(),
            _ => {}
        }
    }

    fn finish_code_block(&mut self) {
        if let Some(block) = self.code.take() {
            let node = render_fence(self.highlighter, block.kind, &block.text);
            self.append(node);
        }
    }

    fn finish_image(&mut self) {
        if let Some((src, title, alt)) = self.image.take() {
            let mut img = Element::new("img")
                .attr("src", src)
                .attr("alt", alt)
                .class(CLASSES.img);
            if !title.is_empty() {
                img.set_attr("title", title);
            }
            self.append(img);
        }
    }

    fn finish(mut self) -> Vec<Node> {
        while self.stack.len() > 1 {
            self.close();
        }
        self.stack.pop().map(|root| root.children).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn root(nodes: &[Node]) -> Element {
        Element::new("div").children(nodes.iter().cloned())
    }

    #[test]
    fn fence_dispatch() {
        assert_eq!(FenceKind::from_info("mermaid"), FenceKind::Diagram);
        assert_eq!(FenceKind::from_info("Python title=x"), FenceKind::Code(Language::Python));
        assert_eq!(FenceKind::from_info("ini"), FenceKind::Code(Language::Ini));
        assert_eq!(FenceKind::from_info("brainfuck"), FenceKind::Plain);
        assert_eq!(FenceKind::from_info(""), FenceKind::Plain);
    }

    #[test]
    fn headings_use_table_classes_and_ids() {
        let nodes = MarkdownRenderer::new().render("# Title\n\n## The Problem {#problem}\n\n#### Deep");
        let html = HtmlPresenter::new().render(&nodes);
        assert!(html.contains(r#"<h1 class="text-3xl font-bold mt-8 mb-4" id="title">Title</h1>"#));
        assert!(html.contains(r#"<h2 class="text-2xl font-semibold mt-6 mb-3" id="problem">The Problem</h2>"#));
        assert!(html.contains(r#"<h4 class="text-xl font-semibold mt-4 mb-2" id="deep">Deep</h4>"#));
    }

    #[test]
    fn known_language_goes_to_highlighter() {
        let md = "```python\nprint('hi')\n```\n";
        let tree = root(&MarkdownRenderer::new().render(md));
        let pre = tree.find_all(&|e| e.tag == "pre");
        assert_eq!(pre.len(), 1);
        assert_eq!(pre[0].get_attr("data-language"), Some("python"));
        assert_eq!(pre[0].text_content(), "print('hi')");
    }

    #[test]
    fn exactly_one_trailing_newline_is_stripped() {
        let md = "```bash\necho hi\n\n```\n";
        let tree = root(&MarkdownRenderer::new().render(md));
        assert_eq!(tree.text_content(), "echo hi\n");
    }

    #[test]
    fn mermaid_goes_to_diagram_renderer() {
        let md = "```mermaid\n\n  graph TD\n  A --> B\n\n```\n";
        let tree = root(&MarkdownRenderer::new().render(md));
        let diagram = tree.find_all(&|e| e.has_class("folio-mermaid"));
        assert_eq!(diagram.len(), 1);
        assert_eq!(diagram[0].find_all(&|e| e.tag == "svg").len(), 1);
        assert!(tree.find_all(&|e| e.get_attr("data-language").is_some()).is_empty());
    }

    #[test]
    fn broken_diagram_shows_error_inline() {
        let md = "Before\n\n```mermaid\ngraph TD\nA -->\n```\n\nAfter\n";
        let tree = root(&MarkdownRenderer::new().render(md));
        let err = tree.find_all(&|e| e.has_class("folio-mermaid-error"));
        assert_eq!(err.len(), 1);
        assert!(err[0].text_content().contains("expected node after arrow"));
        assert!(tree.text_content().ends_with("After"));
    }

    #[test]
    fn untagged_unknown_and_indented_blocks_are_plain() {
        let md = "```\nplain one\n```\n\n```foo\nplain two\n```\n\n    indented\n";
        let tree = root(&MarkdownRenderer::new().render(md));
        let plain = tree.find_all(&|e| e.has_class("folio-plain"));
        let texts: Vec<_> = plain.iter().map(|e| e.text_content()).collect();
        assert_eq!(texts, vec!["plain one", "plain two", "indented"]);
        assert!(tree.find_all(&|e| e.has_class("folio-code")).is_empty());
    }

    #[test]
    fn tables_get_head_and_body() {
        let md = "| Metric | Before |\n|---|---|\n| Latency | 30ms |\n| Errors | 4 |\n";
        let tree = root(&MarkdownRenderer::new().render(md));
        let wrapper = tree.find_all(&|e| e.has_class("overflow-x-auto"));
        assert_eq!(wrapper.len(), 1);
        let th: Vec<_> = tree.find_all(&|e| e.tag == "th").iter().map(|e| e.text_content()).collect();
        assert_eq!(th, vec!["Metric", "Before"]);
        let tbody = tree.find_all(&|e| e.tag == "tbody");
        assert_eq!(tbody.len(), 1);
        assert_eq!(tbody[0].find_all(&|e| e.tag == "tr").len(), 2);
        assert_eq!(tbody[0].find_all(&|e| e.tag == "td")[1].text_content(), "30ms");
    }

    #[test]
    fn lists_blockquotes_and_inline() {
        let md = "- **bold** and *em*\n- `code` ~~gone~~\n\n3. third\n\n> quoted\n";
        let html = MarkdownRenderer::new().render_html(md);
        assert!(html.contains(r#"<ul class="list-disc pl-6 mb-4">"#));
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<em>em</em>"));
        assert!(html.contains("<del>gone</del>"));
        assert!(html.contains(r#"<code class="bg-gray-100 rounded px-1 font-mono text-sm">code</code>"#));
        assert!(html.contains(r#"<ol class="list-decimal pl-6 mb-4" start="3">"#));
        assert!(html.contains(r#"<blockquote class="border-l-4"#));
    }

    #[test]
    fn external_links_open_in_new_tab() {
        let html = MarkdownRenderer::new().render_html("[docs](https://aws.amazon.com) [home](/blog)");
        assert!(html.contains(r#"href="https://aws.amazon.com" class="text-blue-600 hover:underline" target="_blank" rel="noopener noreferrer""#));
        assert!(html.contains(r#"<a href="/blog" class="text-blue-600 hover:underline">home</a>"#));
    }

    #[test]
    fn raw_html_is_escaped_except_line_breaks() {
        let html = MarkdownRenderer::new().render_html("one<br>two <script>x</script>");
        assert!(html.contains("one<br>two"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn images_collect_alt_text() {
        let html = MarkdownRenderer::new().render_html("![arch *diagram*](/img/a.png)");
        assert!(html.contains(r#"<img src="/img/a.png" alt="arch diagram" class="rounded-lg my-4">"#));
    }

    #[test]
    fn rendering_is_idempotent() {
        let md = "## A {#a}\n\n```rust\nfn main() {}\n```\n\n```mermaid\ngraph LR\nA-->B\n```\n";
        let r = MarkdownRenderer::new();
        assert_eq!(r.render(md), r.render(md));
    }

    #[test]
    fn outline_lists_headings() {
        let md = "# Intro\n\n## The `EFS` Problem {#problem}\n\ntext\n\n### Next Steps\n";
        let entries = outline(md);
        assert_eq!(
            entries,
            vec![
                OutlineEntry {
                    level: 1,
                    id: "intro".into(),
                    text: "Intro".into()
                },
                OutlineEntry {
                    level: 2,
                    id: "problem".into(),
                    text: "The EFS Problem".into()
                },
                OutlineEntry {
                    level: 3,
                    id: "next-steps".into(),
                    text: "Next Steps".into()
                },
            ]
        );
    }

    #[test]
    fn slugs() {
        assert_eq!(slugify("Lessons Learned!"), "lessons-learned");
        assert_eq!(slugify("  AWS -- EFS  "), "aws-efs");
        assert_eq!(slugify("???"), "");
    }
}
