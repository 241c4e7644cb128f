#![forbid(unsafe_code)]

//! Expandable card group. At most one card is open at a time.

use folio_render::{Element, Node};

use crate::Widget;

/// A card with a summary line and details revealed when expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub title: &'static str,
    pub summary: &'static str,
    pub details: &'static [&'static str],
}

impl Card {
    pub const fn new(
        title: &'static str,
        summary: &'static str,
        details: &'static [&'static str],
    ) -> Self {
        Self {
            title,
            summary,
            details,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardGroup {
    cards: Vec<Card>,
    expanded: Option<usize>,
}

impl CardGroup {
    pub fn new(cards: &[Card]) -> Self {
        Self {
            cards: cards.to_vec(),
            expanded: None,
        }
    }

    /// Toggle card `index`: opening it closes any other; toggling the open card closes it.
    ///
    /// Out-of-range indices are ignored. Returns the new expanded index.
    pub fn toggle(&mut self, index: usize) -> Option<usize> {
        if index < self.cards.len() {
            self.expanded = if self.expanded == Some(index) {
                None
            } else {
                Some(index)
            };
        }
        self.expanded
    }

    /// Toggle by title.
    pub fn toggle_title(&mut self, title: &str) -> Option<usize> {
        match self.cards.iter().position(|c| c.title == title) {
            Some(index) => self.toggle(index),
            None => self.expanded,
        }
    }

    pub fn collapse_all(&mut self) {
        self.expanded = None;
    }

    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Widget for CardGroup {
    fn render(&self) -> Node {
        let cards = self.cards.iter().enumerate().map(|(idx, card)| {
            let open = self.is_expanded(idx);
            let header = Element::new("button")
                .attr("type", "button")
                .attr("data-card", idx.to_string())
                .attr("aria-expanded", open.to_string())
                .class("w-full text-left text-lg font-semibold text-blue-900")
                .text(card.title);
            let mut article = Element::new("article")
                .class("bg-white rounded-2xl shadow-md p-6")
                .child(header)
                .child(Element::new("p").class("text-gray-600 mt-2").text(card.summary));
            if open {
                article.push(
                    Element::new("ul")
                        .class("list-disc pl-6 mt-4 text-gray-700")
                        .children(card.details.iter().map(|d| Element::new("li").text(*d))),
                );
            }
            article
        });
        Element::new("div")
            .class("grid gap-6 md:grid-cols-2 folio-cards")
            .children(cards)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARDS: &[Card] = &[
        Card::new("GitLab", "Self-hosted CI", &["Runners on ASG", "Nightly backups"]),
        Card::new("Mattermost", "Team chat", &["S3 uploads"]),
    ];

    #[test]
    fn single_expansion() {
        let mut group = CardGroup::new(CARDS);
        assert_eq!(group.toggle(0), Some(0));
        assert_eq!(group.toggle(1), Some(1));
        assert!(!group.is_expanded(0));
        assert_eq!(group.toggle(1), None);
        assert_eq!(group.toggle(9), None);
    }

    #[test]
    fn toggle_by_title() {
        let mut group = CardGroup::new(CARDS);
        assert_eq!(group.toggle_title("Mattermost"), Some(1));
        assert_eq!(group.toggle_title("Unknown"), Some(1));
        group.collapse_all();
        assert_eq!(group.expanded(), None);
    }

    #[test]
    fn details_render_only_when_open() {
        let mut group = CardGroup::new(CARDS);
        let Node::Element(el) = group.render() else {
            panic!("card group renders an element");
        };
        assert!(el.find_all(&|e| e.tag == "li").is_empty());

        group.toggle(0);
        let Node::Element(el) = group.render() else {
            panic!("card group renders an element");
        };
        let items: Vec<_> = el
            .find_all(&|e| e.tag == "li")
            .iter()
            .map(|e| e.text_content())
            .collect();
        assert_eq!(items, vec!["Runners on ASG", "Nightly backups"]);
    }
}
