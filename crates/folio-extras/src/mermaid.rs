#![forbid(unsafe_code)]

//! Mermaid flowchart parsing.
//!
//! Supports the flowchart subset used by project write-ups:
//!
//! - `graph` / `flowchart` headers with a direction (`TB`, `TD`, `LR`, `RL`, `BT`)
//! - node shapes `[x]`, `(x)`, `{x}`, `((x))`, `([x])`, `[[x]]`, `{{x}}`, `>x]`
//! - edges `-->`, `---`, `-.->`, `-.-`, `==>`, `===` with `|label|` or
//!   `-- label -->` labels, chained as `A --> B --> C`
//! - nested `subgraph` / `end` blocks
//! - `%%` comments
//!
//! Styling statements (`classDef`, `class`, `style`, `linkStyle`, `click`)
//! are accepted and ignored. `<br>` inside a label becomes a line break.
//!
//! [`render`] parses, lays out, and returns an SVG element in one call.
//!
//! # Example
//!
//! ```
//! use folio_extras::mermaid::{parse, GraphDirection};
//!
//! let chart = parse("graph LR\n  A[Push] -->|CI| B[Deploy]").unwrap();
//! assert_eq!(chart.direction, GraphDirection::LR);
//! assert_eq!(chart.edges.len(), 1);
//! assert_eq!(chart.node("A").unwrap().label, "Push");
//! ```

use std::fmt;

use folio_render::Node;

use crate::mermaid_layout;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// A parse failure with a 1-based source position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MermaidError {
    pub message: String,
    pub line: usize,
    pub col: usize,
}

impl MermaidError {
    fn new(message: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            message: message.into(),
            line,
            col,
        }
    }
}

impl fmt::Display for MermaidError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (line {}, col {})", self.message, self.line, self.col)
    }
}

impl std::error::Error for MermaidError {}

// ---------------------------------------------------------------------------
// Model
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GraphDirection {
    #[default]
    TB,
    TD,
    LR,
    RL,
    BT,
}

impl GraphDirection {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "tb" => Some(Self::TB),
            "td" => Some(Self::TD),
            "lr" => Some(Self::LR),
            "rl" => Some(Self::RL),
            "bt" => Some(Self::BT),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TB => "TB",
            Self::TD => "TD",
            Self::LR => "LR",
            Self::RL => "RL",
            Self::BT => "BT",
        }
    }

    /// Layers advance along the x axis.
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::LR | Self::RL)
    }

    /// Layers advance toward the origin (bottom-to-top or right-to-left).
    pub const fn is_reversed(self) -> bool {
        matches!(self, Self::BT | Self::RL)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeShape {
    /// `[text]`
    #[default]
    Rect,
    /// `(text)`
    Rounded,
    /// `([text])`
    Stadium,
    /// `[[text]]`
    Subroutine,
    /// `{text}`
    Diamond,
    /// `{{text}}`
    Hexagon,
    /// `((text))`
    Circle,
    /// `>text]`
    Asymmetric,
}

impl NodeShape {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rect => "rect",
            Self::Rounded => "rounded",
            Self::Stadium => "stadium",
            Self::Subroutine => "subroutine",
            Self::Diamond => "diamond",
            Self::Hexagon => "hexagon",
            Self::Circle => "circle",
            Self::Asymmetric => "asymmetric",
        }
    }
}

/// Line style of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stroke {
    Solid,
    Dotted,
    Thick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrowKind {
    pub stroke: Stroke,
    pub head: bool,
}

impl ArrowKind {
    pub const ARROW: Self = Self {
        stroke: Stroke::Solid,
        head: true,
    };
    pub const OPEN: Self = Self {
        stroke: Stroke::Solid,
        head: false,
    };
    pub const DOTTED: Self = Self {
        stroke: Stroke::Dotted,
        head: true,
    };
    pub const THICK: Self = Self {
        stroke: Stroke::Thick,
        head: true,
    };
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowNode {
    pub id: String,
    /// Display text; lines are separated by `\n`. Defaults to the id.
    pub label: String,
    pub shape: NodeShape,
    /// Innermost subgraph that owns this node.
    pub subgraph: Option<usize>,
}

impl FlowNode {
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.label.split('\n')
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowEdge {
    pub from: String,
    pub to: String,
    pub kind: ArrowKind,
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subgraph {
    pub id: String,
    pub title: String,
    pub parent: Option<usize>,
    /// Line of the `subgraph` keyword.
    pub line: usize,
}

/// A parsed flowchart.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Flowchart {
    pub direction: GraphDirection,
    /// In order of first appearance.
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<FlowEdge>,
    pub subgraphs: Vec<Subgraph>,
}

impl Flowchart {
    pub fn node(&self, id: &str) -> Option<&FlowNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn node_index(&self, id: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n.id == id)
    }

    /// Nodes owned directly by subgraph `idx`.
    pub fn members(&self, idx: usize) -> impl Iterator<Item = usize> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(move |(_, n)| n.subgraph == Some(idx))
            .map(|(i, _)| i)
    }

    /// Direct child subgraphs of `idx`.
    pub fn children(&self, idx: usize) -> impl Iterator<Item = usize> + '_ {
        self.subgraphs
            .iter()
            .enumerate()
            .filter(move |(_, s)| s.parent == Some(idx))
            .map(|(i, _)| i)
    }

    /// Nesting depth of subgraph `idx` (top level is 0).
    pub fn depth(&self, idx: usize) -> usize {
        let mut depth = 0;
        let mut cur = self.subgraphs.get(idx).and_then(|s| s.parent);
        while let Some(p) = cur {
            depth += 1;
            cur = self.subgraphs.get(p).and_then(|s| s.parent);
        }
        depth
    }

    fn declare(&mut self, spec: NodeSpec, scope: Option<usize>) {
        match self.nodes.iter_mut().find(|n| n.id == spec.id) {
            Some(node) => {
                if let Some((label, shape)) = spec.shape {
                    node.label = label;
                    node.shape = shape;
                }
                if node.subgraph.is_none() {
                    node.subgraph = scope;
                }
            }
            None => {
                let (label, shape) = spec
                    .shape
                    .unwrap_or_else(|| (spec.id.clone(), NodeShape::Rect));
                self.nodes.push(FlowNode {
                    id: spec.id,
                    label,
                    shape,
                    subgraph: scope,
                });
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Parse, lay out, and render `source` as an `<svg>` element.
pub fn render(source: &str) -> Result<Node, MermaidError> {
    let chart = parse(source)?;
    let layout = mermaid_layout::layout(&chart);
    Ok(mermaid_layout::to_svg(&chart, &layout))
}

/// Parse a flowchart.
pub fn parse(input: &str) -> Result<Flowchart, MermaidError> {
    let mut chart = Flowchart::default();
    let mut saw_header = false;
    let mut stack: Vec<usize> = Vec::new();

    for (idx, raw_line) in input.lines().enumerate() {
        let line_no = idx + 1;
        let raw = raw_line.trim_end_matches('\r');
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with("%%") {
            continue;
        }
        let start = raw.len() - raw.trim_start().len();

        if !saw_header {
            chart.direction = parse_header(trimmed, line_no, start)?;
            saw_header = true;
            continue;
        }

        let first_word = trimmed.split_whitespace().next().unwrap_or_default();
        match first_word {
            "subgraph" => {
                let rest = trimmed["subgraph".len()..].trim();
                let (id, title) = parse_subgraph_title(rest);
                chart.subgraphs.push(Subgraph {
                    id,
                    title,
                    parent: stack.last().copied(),
                    line: line_no,
                });
                stack.push(chart.subgraphs.len() - 1);
            }
            "end" if trimmed == "end" => {
                if stack.pop().is_none() {
                    return Err(MermaidError::new(
                        "`end` without matching `subgraph`",
                        line_no,
                        start + 1,
                    ));
                }
            }
            "direction" | "classDef" | "class" | "style" | "linkStyle" | "click" => {}
            _ => {
                let mut cursor = Cursor::new(raw, start, line_no);
                parse_statement(&mut cursor, &mut chart, stack.last().copied())?;
            }
        }
    }

    if !saw_header {
        return Err(MermaidError::new(
            "expected `graph` or `flowchart` header",
            1,
            1,
        ));
    }
    if let Some(open) = stack.last() {
        let sg = &chart.subgraphs[*open];
        return Err(MermaidError::new(
            format!("unclosed subgraph `{}`", sg.title),
            sg.line,
            1,
        ));
    }
    Ok(chart)
}

fn parse_header(line: &str, line_no: usize, start: usize) -> Result<GraphDirection, MermaidError> {
    let mut parts = line.split_whitespace();
    let keyword = parts.next().unwrap_or_default();
    if !keyword.eq_ignore_ascii_case("graph") && !keyword.eq_ignore_ascii_case("flowchart") {
        return Err(MermaidError::new(
            format!("expected `graph` or `flowchart` header, found `{keyword}`"),
            line_no,
            start + 1,
        ));
    }
    match parts.next() {
        None => Ok(GraphDirection::TB),
        Some(dir) => GraphDirection::parse(dir.trim_end_matches(';')).ok_or_else(|| {
            MermaidError::new(
                format!("unknown direction `{dir}`"),
                line_no,
                start + keyword.len() + 2,
            )
        }),
    }
}

/// `subgraph id [Title]`, `subgraph "Title"`, or `subgraph Title`.
fn parse_subgraph_title(rest: &str) -> (String, String) {
    if let Some(open) = rest.find('[')
        && let Some(close) = rest.rfind(']')
        && close > open
    {
        let id = rest[..open].trim();
        let title = clean_label(&rest[open + 1..close]);
        let id = if id.is_empty() { title.clone() } else { id.to_string() };
        return (id, title);
    }
    let title = clean_label(rest);
    (title.clone(), title)
}

// ---------------------------------------------------------------------------
// Statement parsing
// ---------------------------------------------------------------------------

struct NodeSpec {
    id: String,
    shape: Option<(String, NodeShape)>,
}

/// Byte cursor over one source line that reports 1-based columns.
struct Cursor<'a> {
    line: &'a str,
    pos: usize,
    line_no: usize,
}

impl<'a> Cursor<'a> {
    fn new(line: &'a str, pos: usize, line_no: usize) -> Self {
        Self { line, pos, line_no }
    }

    fn rest(&self) -> &'a str {
        &self.line[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn at_end(&self) -> bool {
        self.rest().trim().trim_end_matches(';').trim().is_empty()
    }

    fn skip_ws(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn eat(&mut self, s: &str) -> bool {
        if self.rest().starts_with(s) {
            self.pos += s.len();
            true
        } else {
            false
        }
    }

    fn eat_while(&mut self, ch: char) -> usize {
        let count = self.rest().chars().take_while(|c| *c == ch).count();
        self.pos += count * ch.len_utf8();
        count
    }

    fn col(&self) -> usize {
        self.line[..self.pos].chars().count() + 1
    }

    fn error(&self, message: impl Into<String>) -> MermaidError {
        MermaidError::new(message, self.line_no, self.col())
    }
}

fn parse_statement(
    cur: &mut Cursor<'_>,
    chart: &mut Flowchart,
    scope: Option<usize>,
) -> Result<(), MermaidError> {
    let mut from = parse_node_spec(cur)?;
    loop {
        cur.skip_ws();
        if cur.at_end() {
            chart.declare(from, scope);
            return Ok(());
        }
        let (kind, mut label) = parse_arrow(cur)?;
        cur.skip_ws();
        if cur.peek() == Some('|') {
            label = Some(parse_pipe_label(cur)?);
            cur.skip_ws();
        }
        if cur.at_end() {
            return Err(cur.error("expected node after arrow"));
        }
        let to = parse_node_spec(cur)?;
        let edge = FlowEdge {
            from: from.id.clone(),
            to: to.id.clone(),
            kind,
            label,
        };
        chart.declare(from, scope);
        chart.edges.push(edge);
        from = to;
    }
}

fn is_id_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn parse_node_spec(cur: &mut Cursor<'_>) -> Result<NodeSpec, MermaidError> {
    let rest = cur.rest();
    let mut end = 0;
    let mut chars = rest.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        let joins_id = c == '-'
            && end > 0
            && chars.peek().is_some_and(|(_, next)| next.is_alphanumeric());
        if is_id_char(c) || joins_id {
            end = i + c.len_utf8();
        } else {
            break;
        }
    }
    if end == 0 {
        return Err(cur.error("expected node id"));
    }
    let id = rest[..end].to_string();
    cur.pos += end;

    const SHAPES: &[(&str, &str, NodeShape)] = &[
        ("((", "))", NodeShape::Circle),
        ("([", "])", NodeShape::Stadium),
        ("[[", "]]", NodeShape::Subroutine),
        ("{{", "}}", NodeShape::Hexagon),
        ("[", "]", NodeShape::Rect),
        ("(", ")", NodeShape::Rounded),
        ("{", "}", NodeShape::Diamond),
        (">", "]", NodeShape::Asymmetric),
    ];
    for (open, close, shape) in SHAPES {
        if cur.rest().starts_with(open) {
            let open_col = cur.col();
            let body = &cur.rest()[open.len()..];
            let Some(len) = body.find(close) else {
                return Err(MermaidError::new(
                    format!("unclosed `{open}` in node `{id}`"),
                    cur.line_no,
                    open_col,
                ));
            };
            let label = clean_label(&body[..len]);
            cur.pos += open.len() + len + close.len();
            return Ok(NodeSpec {
                id,
                shape: Some((label, *shape)),
            });
        }
    }
    Ok(NodeSpec { id, shape: None })
}

/// Parse an arrow, including the `-- text -->` inline label form.
fn parse_arrow(cur: &mut Cursor<'_>) -> Result<(ArrowKind, Option<String>), MermaidError> {
    let start_col = cur.col();
    if cur.eat("-.") {
        cur.eat_while('.');
        let closed = cur.eat("-");
        let head = cur.eat(">");
        if !closed && !head {
            return Err(MermaidError::new("malformed dotted arrow", cur.line_no, start_col));
        }
        return Ok((
            ArrowKind {
                stroke: Stroke::Dotted,
                head,
            },
            None,
        ));
    }
    if cur.rest().starts_with("==") {
        let count = cur.eat_while('=');
        if cur.eat(">") {
            return Ok((ArrowKind::THICK, None));
        }
        if count >= 3 {
            return Ok((
                ArrowKind {
                    stroke: Stroke::Thick,
                    head: false,
                },
                None,
            ));
        }
        return inline_label(cur, "==", Stroke::Thick, start_col);
    }
    if cur.rest().starts_with("--") {
        let count = cur.eat_while('-');
        if cur.eat(">") {
            return Ok((ArrowKind::ARROW, None));
        }
        if count >= 3 {
            return Ok((ArrowKind::OPEN, None));
        }
        return inline_label(cur, "--", Stroke::Solid, start_col);
    }
    Err(cur.error("expected arrow"))
}

/// After `--` (or `==`) followed by text: read up to the closing arrow.
fn inline_label(
    cur: &mut Cursor<'_>,
    marker: &str,
    stroke: Stroke,
    start_col: usize,
) -> Result<(ArrowKind, Option<String>), MermaidError> {
    let rest = cur.rest();
    let Some(close) = rest.find(marker) else {
        return Err(MermaidError::new(
            format!("unterminated `{marker}` edge label"),
            cur.line_no,
            start_col,
        ));
    };
    let label = clean_label(&rest[..close]);
    cur.pos += close;
    let ch = marker.chars().next().unwrap_or('-');
    let count = cur.eat_while(ch);
    let head = cur.eat(">");
    if !head && count < 3 {
        return Err(MermaidError::new(
            format!("unterminated `{marker}` edge label"),
            cur.line_no,
            start_col,
        ));
    }
    Ok((ArrowKind { stroke, head }, Some(label)))
}

fn parse_pipe_label(cur: &mut Cursor<'_>) -> Result<String, MermaidError> {
    let col = cur.col();
    cur.pos += 1;
    let rest = cur.rest();
    let Some(end) = rest.find('|') else {
        return Err(MermaidError::new("unclosed `|` edge label", cur.line_no, col));
    };
    let label = clean_label(&rest[..end]);
    cur.pos += end + 1;
    Ok(label)
}

/// Strip quotes, turn `<br>` variants into newlines, and collapse spaces.
fn clean_label(raw: &str) -> String {
    let raw = raw.trim();
    let raw = raw
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(raw);
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(open) = rest.find('<') {
        let tail = &rest[open..];
        let tag_len = ["<br>", "<br/>", "<br />"]
            .iter()
            .find(|tag| tail.get(..tag.len()).is_some_and(|head| head.eq_ignore_ascii_case(tag)))
            .map(|tag| tag.len());
        match tag_len {
            Some(len) => {
                out.push_str(&rest[..open]);
                out.push('\n');
                rest = &rest[open + len..];
            }
            None => {
                out.push_str(&rest[..=open]);
                rest = &rest[open + 1..];
            }
        }
    }
    out.push_str(rest);
    out.split('\n')
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const INFRA: &str = "graph TD
A[Client Browser] -->|HTTPS| B[Route 53<br>DNS]
B --> C[ALB<br>HTTPS, Path Routing]

subgraph VPC
    subgraph Public
        C -->|TLS| D[WAF]
        E[Bastion Host via SSM]
    end

    subgraph Private
        F[ASG Web Apps<br>EFS:/apps/web] --> H[RDS MySQL<br>Multi-AZ]
        F --> I[EFS]
    end
end

H -.-> L[AWS Backup]
";

    #[test]
    fn parses_nodes_edges_and_labels() {
        let chart = parse(INFRA).unwrap();
        assert_eq!(chart.direction, GraphDirection::TD);
        assert_eq!(chart.node("B").unwrap().label, "Route 53\nDNS");
        assert_eq!(chart.edges[0].label.as_deref(), Some("HTTPS"));
        assert_eq!(chart.edges.last().unwrap().kind, ArrowKind::DOTTED);
        assert_eq!(chart.node("F").unwrap().label, "ASG Web Apps\nEFS:/apps/web");
    }

    #[test]
    fn nested_subgraphs_and_ownership() {
        let chart = parse(INFRA).unwrap();
        let titles: Vec<_> = chart.subgraphs.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["VPC", "Public", "Private"]);
        assert_eq!(chart.subgraphs[1].parent, Some(0));
        assert_eq!(chart.depth(2), 1);

        // C is first mentioned at the top level, then inside Public.
        let c = chart.node("C").unwrap();
        assert_eq!(c.subgraph, Some(1));
        assert_eq!(chart.node("A").unwrap().subgraph, None);
        assert_eq!(chart.node("L").unwrap().subgraph, None);
        let public: Vec<_> = chart.members(1).map(|i| chart.nodes[i].id.as_str()).collect();
        assert_eq!(public, vec!["C", "D", "E"]);
    }

    #[test]
    fn shapes() {
        let chart = parse(
            "flowchart LR\n a((Circle)) --> b([Stadium]) --> c[[Sub]]\n d{{Hex}} --- e{Ok?}\n f>Flag] --> g(Round)",
        )
        .unwrap();
        let shapes: Vec<_> = chart.nodes.iter().map(|n| n.shape).collect();
        assert_eq!(
            shapes,
            vec![
                NodeShape::Circle,
                NodeShape::Stadium,
                NodeShape::Subroutine,
                NodeShape::Hexagon,
                NodeShape::Diamond,
                NodeShape::Asymmetric,
                NodeShape::Rounded,
            ]
        );
        assert_eq!(chart.edges.len(), 4);
        assert_eq!(chart.edges[2].kind, ArrowKind::OPEN);
    }

    #[test]
    fn arrow_kinds_and_inline_labels() {
        let chart = parse("graph TB\nA -- yes --> B\nB == fast ==> C\nC ==> D\nD -.- E").unwrap();
        assert_eq!(chart.edges[0].label.as_deref(), Some("yes"));
        assert_eq!(chart.edges[0].kind, ArrowKind::ARROW);
        assert_eq!(chart.edges[1].label.as_deref(), Some("fast"));
        assert_eq!(chart.edges[1].kind, ArrowKind::THICK);
        assert_eq!(chart.edges[2].kind, ArrowKind::THICK);
        assert_eq!(
            chart.edges[3].kind,
            ArrowKind {
                stroke: Stroke::Dotted,
                head: false
            }
        );
    }

    #[test]
    fn bare_ids_default_to_their_name() {
        let chart = parse("graph TD\n%% comment\nG --> H;\nG[Fixed EC2]").unwrap();
        assert_eq!(chart.node("G").unwrap().label, "Fixed EC2");
        assert_eq!(chart.node("H").unwrap().label, "H");
        assert_eq!(chart.nodes.len(), 2);
    }

    #[test]
    fn header_errors() {
        let err = parse("sequenceDiagram\nA->>B: hi").unwrap_err();
        assert_eq!((err.line, err.col), (1, 1));
        assert!(err.message.contains("graph"));

        let err = parse("graph XY\nA --> B").unwrap_err();
        assert_eq!(err.message, "unknown direction `XY`");
        assert_eq!(parse("").unwrap_err().line, 1);
    }

    #[test]
    fn statement_errors_report_position() {
        let err = parse("graph TD\n  A[Open --> B").unwrap_err();
        assert_eq!((err.line, err.col), (2, 4));
        assert!(err.message.starts_with("unclosed `[`"));

        let err = parse("graph TD\nA -->").unwrap_err();
        assert_eq!(err.message, "expected node after arrow");

        let err = parse("graph TD\nA ~~ B").unwrap_err();
        assert_eq!((err.line, err.col), (2, 3));
    }

    #[test]
    fn subgraph_balance() {
        let err = parse("graph TD\nsubgraph One\nA --> B").unwrap_err();
        assert_eq!(err.message, "unclosed subgraph `One`");
        assert_eq!(err.line, 2);

        let err = parse("graph TD\nA --> B\nend").unwrap_err();
        assert_eq!(err.line, 3);
    }

    #[test]
    fn error_display() {
        let err = MermaidError::new("bad", 3, 7);
        assert_eq!(err.to_string(), "bad (line 3, col 7)");
    }

    #[test]
    fn render_produces_svg() {
        let Node::Element(svg) = render(INFRA).unwrap() else {
            panic!("diagram renders an element");
        };
        assert_eq!(svg.tag, "svg");
        assert!(render("graph TD\nA -->").is_err());
    }
}
