#![forbid(unsafe_code)]

//! Core widgets for folio pages.

pub mod badge;
pub mod cards;
pub mod navbar;
pub mod section_nav;

pub use badge::Badge;
pub use cards::{Card, CardGroup};
pub use navbar::{NavItem, Navbar, SCROLLED_THRESHOLD_PX};
pub use section_nav::{ActiveSectionTracker, SCROLL_LOOKAHEAD_PX, SectionNav, TrackerError};

use folio_render::Node;

/// A `Widget` is a renderable component.
///
/// Widgets produce an element tree; they never write markup directly.
pub trait Widget {
    fn render(&self) -> Node;
}

/// A widget whose output depends on externally owned state.
pub trait StatefulWidget {
    type State;

    fn render(&self, state: &Self::State) -> Node;
}

/// Join utility classes, skipping empty fragments.
pub(crate) fn classes(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}
