#![forbid(unsafe_code)]

//! Scroll-driven active section tracking and the sidebar that shows it.
//!
//! The tracker answers one question: given how far the page has scrolled,
//! which section is the reader looking at? The answer is the section whose
//! anchor top is the greatest value not exceeding
//! `scroll + SCROLL_LOOKAHEAD_PX`, or the first section when the reader is
//! above all of them.
//!
//! Anchors that were not found in the document are skipped entirely. An
//! unmeasured anchor has no position, so it cannot be "above" the reader.

use std::fmt;

use folio_core::{AnchorLayout, SectionDescriptor};
use folio_render::{Element, Node};

use crate::{StatefulWidget, classes};

/// Lookahead added to the scroll offset to account for the fixed header.
pub const SCROLL_LOOKAHEAD_PX: f64 = 100.0;

/// Errors constructing an [`ActiveSectionTracker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerError {
    /// A tracker needs at least one section to have an active one.
    Empty,
}

impl fmt::Display for TrackerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "section list is empty"),
        }
    }
}

impl std::error::Error for TrackerError {}

/// Index of the active section for `offset`.
///
/// Ties between equal offsets keep the earlier section.
pub fn select_active(sections: &[SectionDescriptor], layout: &AnchorLayout, offset: f64) -> usize {
    let target = offset + SCROLL_LOOKAHEAD_PX;
    let mut best: Option<(usize, f64)> = None;
    for (idx, section) in sections.iter().enumerate() {
        let Some(top) = layout.top_of(section.id) else {
            continue;
        };
        if top <= target && best.is_none_or(|(_, best_top)| top > best_top) {
            best = Some((idx, top));
        }
    }
    best.map_or(0, |(idx, _)| idx)
}

/// Owns one page's section list, its measured layout, and the active id.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveSectionTracker {
    sections: Vec<SectionDescriptor>,
    layout: AnchorLayout,
    offset: f64,
    active: usize,
}

impl ActiveSectionTracker {
    /// Start tracking. The first section is active until the first scroll.
    pub fn new(sections: &[SectionDescriptor]) -> Result<Self, TrackerError> {
        if sections.is_empty() {
            return Err(TrackerError::Empty);
        }
        Ok(Self {
            sections: sections.to_vec(),
            layout: AnchorLayout::new(),
            offset: 0.0,
            active: 0,
        })
    }

    /// Replace the measured layout and recompute. Returns `true` if the active id changed.
    pub fn set_layout(&mut self, layout: AnchorLayout) -> bool {
        #[cfg(feature = "tracing")]
        {
            let missing = layout.missing(&self.sections);
            if !missing.is_empty() {
                tracing::warn!(?missing, "section anchors not found; excluded from tracking");
            }
        }
        self.layout = layout;
        self.recompute()
    }

    /// Handle a scroll event. Returns `true` if the active id changed.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        self.offset = offset;
        self.recompute()
    }

    fn recompute(&mut self) -> bool {
        let next = select_active(&self.sections, &self.layout, self.offset);
        let changed = next != self.active;
        if changed {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                from = self.sections[self.active].id,
                to = self.sections[next].id,
                offset = self.offset,
                "active section changed"
            );
            self.active = next;
        }
        changed
    }

    /// The active section id. Always exactly one.
    pub fn active(&self) -> &'static str {
        self.sections[self.active].id
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active() == id
    }

    pub fn sections(&self) -> &[SectionDescriptor] {
        &self.sections
    }

    pub fn layout(&self) -> &AnchorLayout {
        &self.layout
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }
}

/// Sidebar navigation listing every section, with the active one highlighted.
#[derive(Debug, Clone)]
pub struct SectionNav {
    item_class: &'static str,
    active_class: &'static str,
}

impl Default for SectionNav {
    fn default() -> Self {
        Self {
            item_class: "flex items-center p-2 rounded-lg text-gray-700 hover:bg-blue-100 transition-colors",
            active_class: "bg-blue-200 text-blue-900 font-semibold folio-nav-active",
        }
    }
}

impl SectionNav {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compact variant used on project pages.
    pub fn compact() -> Self {
        Self {
            item_class: "flex items-center p-1.5 rounded-lg text-gray-700 hover:bg-blue-100 transition-colors text-sm",
            ..Self::default()
        }
    }
}

impl StatefulWidget for SectionNav {
    type State = ActiveSectionTracker;

    fn render(&self, state: &ActiveSectionTracker) -> Node {
        let items = state.sections().iter().map(|section| {
            let active = state.is_active(section.id);
            let mut link = Element::new("a")
                .attr("href", section.href())
                .attr("data-section", section.id)
                .class(classes(&[
                    self.item_class,
                    if active { self.active_class } else { "" },
                ]));
            if active {
                link.set_attr("aria-current", "location");
            }
            let link = link
                .child(
                    Element::new("span")
                        .class(format!("icon icon-{}", section.icon.name()))
                        .attr("aria-hidden", "true"),
                )
                .child(Element::new("span").class("ml-3").text(section.label));
            Element::new("li").child(link)
        });

        Element::new("nav")
            .class("folio-section-nav")
            .attr("aria-label", "Sections")
            .child(Element::new("ul").class("space-y-2").children(items))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    const SECTIONS: &[SectionDescriptor] = &[
        SectionDescriptor::new("intro", "Introduction", "cloud"),
        SectionDescriptor::new("problem", "The Problem", "alert-triangle"),
        SectionDescriptor::new("solution", "The Solution", "zap"),
    ];

    fn tracker() -> ActiveSectionTracker {
        let mut t = ActiveSectionTracker::new(SECTIONS).unwrap();
        t.set_layout(AnchorLayout::from_offsets([
            ("intro", 0.0),
            ("problem", 800.0),
            ("solution", 1600.0),
        ]));
        t
    }

    #[test]
    fn empty_section_list_is_rejected() {
        assert_eq!(ActiveSectionTracker::new(&[]), Err(TrackerError::Empty));
    }

    #[test]
    fn first_section_is_active_initially() {
        let t = ActiveSectionTracker::new(SECTIONS).unwrap();
        assert_eq!(t.active(), "intro");
    }

    #[test]
    fn lookahead_selects_upcoming_section() {
        let mut t = tracker();
        assert!(t.on_scroll(750.0));
        assert_eq!(t.active(), "problem");
        assert!(!t.on_scroll(760.0));
        assert!(t.on_scroll(0.0));
        assert_eq!(t.active(), "intro");
    }

    #[test]
    fn boundary_is_inclusive() {
        let mut t = tracker();
        t.on_scroll(700.0);
        assert_eq!(t.active(), "problem");
        t.on_scroll(699.9);
        assert_eq!(t.active(), "intro");
        t.on_scroll(10_000.0);
        assert_eq!(t.active(), "solution");
    }

    #[test]
    fn above_all_sections_falls_back_to_first() {
        let mut t = ActiveSectionTracker::new(SECTIONS).unwrap();
        t.set_layout(AnchorLayout::from_offsets([
            ("intro", 400.0),
            ("problem", 800.0),
            ("solution", 1600.0),
        ]));
        t.on_scroll(0.0);
        assert_eq!(t.active(), "intro");
    }

    #[test]
    fn absent_anchor_is_never_selected() {
        let mut layout = AnchorLayout::from_offsets([("intro", 200.0), ("solution", 1600.0)]);
        layout.push("problem", None);
        let mut t = ActiveSectionTracker::new(SECTIONS).unwrap();
        t.set_layout(layout);
        t.on_scroll(900.0);
        assert_eq!(t.active(), "intro");
        t.on_scroll(0.0);
        assert_eq!(t.active(), "intro");
    }

    #[test]
    fn equal_offsets_keep_earlier_section() {
        let layout = AnchorLayout::from_offsets([("intro", 0.0), ("problem", 0.0), ("solution", 0.0)]);
        assert_eq!(select_active(SECTIONS, &layout, 50.0), 0);
    }

    #[test]
    fn nav_highlights_only_active_entry() {
        let mut t = tracker();
        t.on_scroll(750.0);
        let Node::Element(nav) = SectionNav::new().render(&t) else {
            panic!("nav should be an element");
        };
        let links = nav.find_all(&|el| el.tag == "a");
        assert_eq!(links.len(), 3);
        let active: Vec<_> = links
            .iter()
            .filter(|a| a.has_class("folio-nav-active"))
            .map(|a| a.get_attr("href").unwrap_or_default())
            .collect();
        assert_eq!(active, vec!["#problem"]);
        assert_eq!(links[1].get_attr("aria-current"), Some("location"));
        assert_eq!(links[1].text_content(), "The Problem");
    }

    fn oracle(tops: &[Option<f64>], offset: f64) -> usize {
        let target = offset + SCROLL_LOOKAHEAD_PX;
        let qualifying: Vec<(usize, f64)> = tops
            .iter()
            .enumerate()
            .filter_map(|(i, t)| t.filter(|t| *t <= target).map(|t| (i, t)))
            .collect();
        let Some(max) = qualifying.iter().map(|(_, t)| *t).reduce(f64::max) else {
            return 0;
        };
        qualifying
            .iter()
            .find(|(_, t)| *t == max)
            .map_or(0, |(i, _)| *i)
    }

    proptest! {
        #[test]
        fn matches_brute_force_oracle(
            tops in proptest::collection::vec(proptest::option::of(0.0f64..5000.0), 3),
            offset in 0.0f64..6000.0,
        ) {
            let mut layout = AnchorLayout::new();
            for (section, top) in SECTIONS.iter().zip(&tops) {
                layout.push(section.id, *top);
            }
            let picked = select_active(SECTIONS, &layout, offset);
            prop_assert_eq!(picked, oracle(&tops, offset));
            if picked != 0 {
                let top = tops[picked];
                prop_assert!(top.is_some_and(|t| t <= offset + SCROLL_LOOKAHEAD_PX));
            }
        }
    }
}
