#![forbid(unsafe_code)]

//! Layered layout and SVG output for flowcharts.
//!
//! 1. Rank assignment: longest path from the sources. Cycles are broken at
//!    the earliest-declared node still waiting on a predecessor.
//! 2. Ordering within ranks: first appearance in the source.
//! 3. Coordinates: ranks advance along the main axis given by the graph
//!    direction; each rank is centred on the cross axis.
//! 4. Cluster bounds: innermost subgraphs first, so parents enclose children.
//! 5. Edge routing: straight segments clipped to node borders.
//!
//! Identical input produces identical layout and markup.

use folio_render::{Element, Node};
use folio_style::Rgb;

use crate::mermaid::{FlowNode, Flowchart, NodeShape, Stroke};

// ── Layout output types ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl LayoutRect {
    #[must_use]
    pub fn center(&self) -> LayoutPoint {
        LayoutPoint {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Whether `other` lies entirely inside `self`.
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Self {
            x,
            y,
            width: self.right().max(other.right()) - x,
            height: self.bottom().max(other.bottom()) - y,
        }
    }

    fn inflate(&self, left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            x: self.x - left,
            y: self.y - top,
            width: self.width + left + right,
            height: self.height + top + bottom,
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    /// Point where the segment from the centre toward `target` leaves the rect.
    fn clip_toward(&self, target: LayoutPoint) -> LayoutPoint {
        let c = self.center();
        let (dx, dy) = (target.x - c.x, target.y - c.y);
        if dx == 0.0 && dy == 0.0 {
            return c;
        }
        let sx = if dx == 0.0 { f64::INFINITY } else { (self.width / 2.0) / dx.abs() };
        let sy = if dy == 0.0 { f64::INFINITY } else { (self.height / 2.0) / dy.abs() };
        let s = sx.min(sy).min(1.0);
        LayoutPoint {
            x: c.x + dx * s,
            y: c.y + dy * s,
        }
    }
}

/// Positioned node.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutNodeBox {
    pub node_idx: usize,
    pub rect: LayoutRect,
    pub rank: usize,
    pub order: usize,
}

/// Positioned subgraph boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutClusterBox {
    pub cluster_idx: usize,
    pub rect: LayoutRect,
    pub title_rect: LayoutRect,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutEdgePath {
    pub edge_idx: usize,
    pub waypoints: Vec<LayoutPoint>,
}

impl LayoutEdgePath {
    /// Midpoint of the path, where the label goes.
    pub fn midpoint(&self) -> Option<LayoutPoint> {
        let first = self.waypoints.first()?;
        let last = self.waypoints.last()?;
        Some(LayoutPoint {
            x: (first.x + last.x) / 2.0,
            y: (first.y + last.y) / 2.0,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiagramLayout {
    pub nodes: Vec<LayoutNodeBox>,
    pub clusters: Vec<LayoutClusterBox>,
    pub edges: Vec<LayoutEdgePath>,
    /// Origin is `(0, 0)`; everything is inside it.
    pub bounding_box: LayoutRect,
}

/// Spacing constants, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutSpacing {
    pub char_width: f64,
    pub line_height: f64,
    pub node_min_width: f64,
    pub node_padding_x: f64,
    pub node_padding_y: f64,
    /// Gap between neighbouring nodes in one rank.
    pub node_gap: f64,
    /// Gap between consecutive ranks.
    pub rank_gap: f64,
    pub cluster_padding: f64,
    pub cluster_title_height: f64,
    pub margin: f64,
}

impl Default for LayoutSpacing {
    fn default() -> Self {
        Self {
            char_width: 7.5,
            line_height: 18.0,
            node_min_width: 90.0,
            node_padding_x: 16.0,
            node_padding_y: 10.0,
            node_gap: 40.0,
            rank_gap: 60.0,
            cluster_padding: 16.0,
            cluster_title_height: 24.0,
            margin: 16.0,
        }
    }
}

// ── Phase 1: ranks ───────────────────────────────────────────────────

fn adjacency(chart: &Flowchart) -> (Vec<Vec<usize>>, Vec<Vec<usize>>) {
    let n = chart.nodes.len();
    let mut succ = vec![Vec::new(); n];
    let mut pred = vec![Vec::new(); n];
    for edge in &chart.edges {
        let (Some(u), Some(v)) = (chart.node_index(&edge.from), chart.node_index(&edge.to)) else {
            continue;
        };
        if u != v {
            succ[u].push(v);
            pred[v].push(u);
        }
    }
    (succ, pred)
}

/// Longest-path ranks. Every node gets a rank, cycles included.
pub fn assign_ranks(chart: &Flowchart) -> Vec<usize> {
    let n = chart.nodes.len();
    let (succ, pred) = adjacency(chart);
    let mut in_degree: Vec<usize> = pred.iter().map(Vec::len).collect();
    let mut ranks = vec![0usize; n];
    let mut placed = vec![false; n];
    let mut ready: Vec<usize> = (0..n).filter(|&v| in_degree[v] == 0).collect();
    let mut done = 0;

    while done < n {
        let u = match ready.iter().copied().min() {
            Some(u) => {
                ready.retain(|&v| v != u);
                u
            }
            // Every remaining node waits on a cycle; break it at the first one.
            None => match (0..n).find(|&v| !placed[v]) {
                Some(v) => {
                    ranks[v] = pred[v]
                        .iter()
                        .filter(|&&p| placed[p])
                        .map(|&p| ranks[p] + 1)
                        .max()
                        .unwrap_or(0);
                    v
                }
                None => break,
            },
        };
        placed[u] = true;
        done += 1;
        for &v in &succ[u] {
            if placed[v] {
                continue;
            }
            ranks[v] = ranks[v].max(ranks[u] + 1);
            in_degree[v] = in_degree[v].saturating_sub(1);
            if in_degree[v] == 0 && !ready.contains(&v) {
                ready.push(v);
            }
        }
    }
    ranks
}

// ── Phase 2-3: sizes and coordinates ─────────────────────────────────

fn node_size(node: &FlowNode, spacing: &LayoutSpacing) -> (f64, f64) {
    let lines = node.lines().count().max(1) as f64;
    let widest = node.lines().map(|l| l.chars().count()).max().unwrap_or(0) as f64;
    let w = (widest * spacing.char_width + 2.0 * spacing.node_padding_x).max(spacing.node_min_width);
    let h = lines * spacing.line_height + 2.0 * spacing.node_padding_y;
    match node.shape {
        NodeShape::Circle => {
            let d = w.max(h);
            (d, d)
        }
        NodeShape::Diamond => (w * 1.4, h * 1.6),
        NodeShape::Hexagon | NodeShape::Asymmetric => (w + 2.0 * spacing.node_padding_x, h),
        _ => (w, h),
    }
}

/// Compute the full layout with default spacing.
pub fn layout(chart: &Flowchart) -> DiagramLayout {
    layout_with_spacing(chart, &LayoutSpacing::default())
}

pub fn layout_with_spacing(chart: &Flowchart, spacing: &LayoutSpacing) -> DiagramLayout {
    let ranks = assign_ranks(chart);
    let rank_count = ranks.iter().copied().max().map_or(0, |r| r + 1);
    let mut buckets: Vec<Vec<usize>> = vec![Vec::new(); rank_count];
    for (idx, &rank) in ranks.iter().enumerate() {
        buckets[rank].push(idx);
    }

    let sizes: Vec<(f64, f64)> = chart.nodes.iter().map(|n| node_size(n, spacing)).collect();
    let horizontal = chart.direction.is_horizontal();
    // (main, cross) extents for a node.
    let extent = |idx: usize| {
        let (w, h) = sizes[idx];
        if horizontal { (w, h) } else { (h, w) }
    };

    let mut rank_order: Vec<usize> = (0..rank_count).collect();
    if chart.direction.is_reversed() {
        rank_order.reverse();
    }

    let mut rects = vec![
        LayoutRect {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
        };
        chart.nodes.len()
    ];
    let mut orders = vec![0usize; chart.nodes.len()];
    let mut main = 0.0;
    for &rank in &rank_order {
        let bucket = &buckets[rank];
        let depth = bucket.iter().map(|&i| extent(i).0).fold(0.0, f64::max);
        let span: f64 = bucket.iter().map(|&i| extent(i).1).sum::<f64>()
            + spacing.node_gap * bucket.len().saturating_sub(1) as f64;
        let mut cross = -span / 2.0;
        for (order, &idx) in bucket.iter().enumerate() {
            let (m, c) = extent(idx);
            let (main_pos, cross_pos) = (main + (depth - m) / 2.0, cross);
            let (w, h) = sizes[idx];
            rects[idx] = if horizontal {
                LayoutRect {
                    x: main_pos,
                    y: cross_pos,
                    width: w,
                    height: h,
                }
            } else {
                LayoutRect {
                    x: cross_pos,
                    y: main_pos,
                    width: w,
                    height: h,
                }
            };
            orders[idx] = order;
            cross += c + spacing.node_gap;
        }
        main += depth + spacing.rank_gap;
    }

    // ── Phase 4: clusters ────────────────────────────────────────────
    let mut cluster_rects: Vec<Option<LayoutRect>> = vec![None; chart.subgraphs.len()];
    for idx in (0..chart.subgraphs.len()).rev() {
        let inner = chart
            .members(idx)
            .map(|n| rects[n])
            .chain(chart.children(idx).filter_map(|c| cluster_rects[c]))
            .reduce(|a, b| a.union(&b));
        cluster_rects[idx] = inner.map(|r| {
            let pad = spacing.cluster_padding;
            r.inflate(pad, pad + spacing.cluster_title_height, pad, pad)
        });
    }

    // Normalise so the bounding box starts at the origin.
    let bounds = rects
        .iter()
        .copied()
        .chain(cluster_rects.iter().flatten().copied())
        .reduce(|a, b| a.union(&b))
        .unwrap_or(LayoutRect {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
        });
    let (dx, dy) = (spacing.margin - bounds.x, spacing.margin - bounds.y);
    for rect in rects.iter_mut().chain(cluster_rects.iter_mut().flatten()) {
        rect.translate(dx, dy);
    }

    let nodes = rects
        .iter()
        .enumerate()
        .map(|(idx, rect)| LayoutNodeBox {
            node_idx: idx,
            rect: *rect,
            rank: ranks[idx],
            order: orders[idx],
        })
        .collect();

    let clusters = cluster_rects
        .iter()
        .enumerate()
        .filter_map(|(idx, rect)| {
            rect.map(|rect| LayoutClusterBox {
                cluster_idx: idx,
                rect,
                title_rect: LayoutRect {
                    x: rect.x,
                    y: rect.y,
                    width: rect.width,
                    height: spacing.cluster_title_height,
                },
            })
        })
        .collect();

    DiagramLayout {
        nodes,
        clusters,
        edges: route_edges(chart, &rects),
        bounding_box: LayoutRect {
            x: 0.0,
            y: 0.0,
            width: bounds.width + 2.0 * spacing.margin,
            height: bounds.height + 2.0 * spacing.margin,
        },
    }
}

// ── Phase 5: edge routing ────────────────────────────────────────────

fn route_edges(chart: &Flowchart, rects: &[LayoutRect]) -> Vec<LayoutEdgePath> {
    chart
        .edges
        .iter()
        .enumerate()
        .filter_map(|(edge_idx, edge)| {
            let from = rects[chart.node_index(&edge.from)?];
            let to = rects[chart.node_index(&edge.to)?];
            let waypoints = if edge.from == edge.to {
                let top = LayoutPoint {
                    x: from.right(),
                    y: from.y + from.height * 0.25,
                };
                let bottom = LayoutPoint {
                    x: from.right(),
                    y: from.y + from.height * 0.75,
                };
                vec![
                    top,
                    LayoutPoint {
                        x: top.x + 24.0,
                        y: top.y,
                    },
                    LayoutPoint {
                        x: bottom.x + 24.0,
                        y: bottom.y,
                    },
                    bottom,
                ]
            } else {
                vec![from.clip_toward(to.center()), to.clip_toward(from.center())]
            };
            Some(LayoutEdgePath {
                edge_idx,
                waypoints,
            })
        })
        .collect()
}

// ── SVG output ───────────────────────────────────────────────────────

const NODE_FILL: Rgb = Rgb::rgb(0xec, 0xec, 0xff);
const NODE_STROKE: Rgb = Rgb::rgb(0x93, 0x70, 0xdb);
const CLUSTER_FILL: Rgb = Rgb::rgb(0xff, 0xff, 0xde);
const CLUSTER_STROKE: Rgb = Rgb::rgb(0xaa, 0xaa, 0x33);
const EDGE_STROKE: Rgb = Rgb::rgb(0x33, 0x33, 0x33);
const TEXT_FILL: Rgb = Rgb::rgb(0x33, 0x33, 0x33);
const ARROW_MARKER: &str = "folio-arrow";

fn num(v: f64) -> String {
    let s = format!("{v:.1}");
    s.strip_suffix(".0").map(str::to_string).unwrap_or(s)
}

fn points(pts: &[(f64, f64)]) -> String {
    pts.iter()
        .map(|(x, y)| format!("{},{}", num(*x), num(*y)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn rect_element(r: &LayoutRect, rx: f64) -> Element {
    Element::new("rect")
        .attr("x", num(r.x))
        .attr("y", num(r.y))
        .attr("width", num(r.width))
        .attr("height", num(r.height))
        .attr("rx", num(rx))
}

fn shape_element(shape: NodeShape, r: &LayoutRect) -> Vec<Element> {
    let (x, y, w, h) = (r.x, r.y, r.width, r.height);
    let c = r.center();
    match shape {
        NodeShape::Rect => vec![rect_element(r, 4.0)],
        NodeShape::Rounded => vec![rect_element(r, 12.0)],
        NodeShape::Stadium => vec![rect_element(r, h / 2.0)],
        NodeShape::Subroutine => vec![
            rect_element(r, 0.0),
            Element::new("path").attr(
                "d",
                format!(
                    "M {} {} V {} M {} {} V {}",
                    num(x + 8.0),
                    num(y),
                    num(y + h),
                    num(x + w - 8.0),
                    num(y),
                    num(y + h)
                ),
            ),
        ],
        NodeShape::Circle => vec![Element::new("circle")
            .attr("cx", num(c.x))
            .attr("cy", num(c.y))
            .attr("r", num(w / 2.0))],
        NodeShape::Diamond => vec![Element::new("polygon").attr(
            "points",
            points(&[(c.x, y), (x + w, c.y), (c.x, y + h), (x, c.y)]),
        )],
        NodeShape::Hexagon => {
            let inset = h / 2.0;
            vec![Element::new("polygon").attr(
                "points",
                points(&[
                    (x + inset, y),
                    (x + w - inset, y),
                    (x + w, c.y),
                    (x + w - inset, y + h),
                    (x + inset, y + h),
                    (x, c.y),
                ]),
            )]
        }
        NodeShape::Asymmetric => vec![Element::new("polygon").attr(
            "points",
            points(&[(x, y), (x + w, y), (x + w, y + h), (x, y + h), (x + h / 2.0, c.y)]),
        )],
    }
}

fn text_element(lines: &[&str], at: LayoutPoint, line_height: f64) -> Element {
    let first_dy = -(lines.len().saturating_sub(1) as f64) * line_height / 2.0;
    let spans = lines.iter().enumerate().map(|(i, line)| {
        let dy = if i == 0 { first_dy } else { line_height };
        Element::new("tspan")
            .attr("x", num(at.x))
            .attr("dy", num(dy))
            .text(*line)
    });
    Element::new("text")
        .attr("x", num(at.x))
        .attr("y", num(at.y))
        .attr("text-anchor", "middle")
        .attr("dominant-baseline", "middle")
        .attr("fill", TEXT_FILL.to_css())
        .children(spans)
}

/// Render a laid-out chart as an `<svg>` element.
pub fn to_svg(chart: &Flowchart, layout: &DiagramLayout) -> Node {
    let spacing = LayoutSpacing::default();
    let bb = layout.bounding_box;

    let marker = Element::new("marker")
        .id(ARROW_MARKER)
        .attr("viewBox", "0 0 10 10")
        .attr("refX", "9")
        .attr("refY", "5")
        .attr("markerWidth", "8")
        .attr("markerHeight", "8")
        .attr("orient", "auto-start-reverse")
        .child(
            Element::new("path")
                .attr("d", "M 0 0 L 10 5 L 0 10 z")
                .attr("fill", EDGE_STROKE.to_css()),
        );

    let clusters = layout.clusters.iter().filter_map(|cluster| {
        let sg = chart.subgraphs.get(cluster.cluster_idx)?;
        let title_at = cluster.title_rect.center();
        Some(
            Element::new("g")
                .class("cluster")
                .attr("data-id", sg.id.clone())
                .child(
                    rect_element(&cluster.rect, 6.0)
                        .attr("fill", CLUSTER_FILL.to_css())
                        .attr("stroke", CLUSTER_STROKE.to_css()),
                )
                .child(text_element(&[sg.title.as_str()], title_at, spacing.line_height)),
        )
    });

    let edges = layout.edges.iter().filter_map(|path| {
        let edge = chart.edges.get(path.edge_idx)?;
        let mut d = String::new();
        for (i, p) in path.waypoints.iter().enumerate() {
            let cmd = if i == 0 { "M" } else { "L" };
            if i > 0 {
                d.push(' ');
            }
            d.push_str(&format!("{cmd} {} {}", num(p.x), num(p.y)));
        }
        let mut line = Element::new("path")
            .attr("d", d)
            .attr("fill", "none")
            .attr("stroke", EDGE_STROKE.to_css());
        line = match edge.kind.stroke {
            Stroke::Solid => line.attr("stroke-width", "1.5"),
            Stroke::Dotted => line
                .attr("stroke-width", "1.5")
                .attr("stroke-dasharray", "5 4"),
            Stroke::Thick => line.attr("stroke-width", "3.5"),
        };
        if edge.kind.head {
            line = line.attr("marker-end", format!("url(#{ARROW_MARKER})"));
        }
        let mut group = Element::new("g").class("edge").child(line);
        if let Some(label) = &edge.label
            && let Some(mid) = path.midpoint()
        {
            let lines: Vec<&str> = label.split('\n').collect();
            group.push(text_element(&lines, mid, spacing.line_height).class("edge-label"));
        }
        Some(group)
    });

    let nodes = layout.nodes.iter().filter_map(|b| {
        let node = chart.nodes.get(b.node_idx)?;
        let lines: Vec<&str> = node.lines().collect();
        let shapes = shape_element(node.shape, &b.rect).into_iter().map(|s| {
            s.attr("fill", NODE_FILL.to_css())
                .attr("stroke", NODE_STROKE.to_css())
        });
        Some(
            Element::new("g")
                .class(format!("node {}", node.shape.as_str()))
                .attr("data-id", node.id.clone())
                .children(shapes)
                .child(text_element(&lines, b.rect.center(), spacing.line_height)),
        )
    });

    Element::new("svg")
        .attr("xmlns", "http://www.w3.org/2000/svg")
        .attr("viewBox", format!("0 0 {} {}", num(bb.width), num(bb.height)))
        .attr("width", num(bb.width))
        .attr("height", num(bb.height))
        .attr("role", "img")
        .attr("aria-label", format!("flowchart {}", chart.direction.as_str()))
        .class("folio-diagram")
        .attr("font-family", "sans-serif")
        .attr("font-size", "14")
        .child(Element::new("defs").child(marker))
        .child(Element::new("g").class("clusters").children(clusters))
        .child(Element::new("g").class("edges").children(edges))
        .child(Element::new("g").class("nodes").children(nodes))
        .into()
}
