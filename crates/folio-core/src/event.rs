#![forbid(unsafe_code)]

//! Canonical host events.
//!
//! Every interactive page model receives input through [`Event`]. The host
//! (browser bridge or test) is responsible for measuring the document and
//! reporting scroll positions; models never read layout themselves.
//!
//! # Design Notes
//!
//! - Offsets are CSS pixels measured from the top of the document.
//! - `AnchorsMeasured` replaces the previous layout wholesale.
//! - Events derive `PartialEq` only, because offsets are `f64`.

use crate::section::AnchorLayout;

/// Canonical host event.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The viewport scrolled to a new vertical offset.
    Scroll {
        /// Vertical scroll offset in pixels (`window.scrollY`).
        offset: f64,
    },

    /// Section anchors were (re)measured after layout settled.
    AnchorsMeasured(AnchorLayout),

    /// Viewport was resized.
    Resize {
        /// New viewport width in pixels.
        width: u32,
        /// New viewport height in pixels.
        height: u32,
    },

    /// A tick from the host clock.
    Tick,
}

impl Event {
    /// Shorthand for a scroll event.
    #[must_use]
    pub const fn scroll(offset: f64) -> Self {
        Self::Scroll { offset }
    }

    /// The scroll offset carried by this event, if it is a scroll.
    #[must_use]
    pub fn scroll_offset(&self) -> Option<f64> {
        match self {
            Self::Scroll { offset } => Some(*offset),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_shorthand() {
        assert_eq!(Event::scroll(42.0), Event::Scroll { offset: 42.0 });
        assert_eq!(Event::scroll(42.0).scroll_offset(), Some(42.0));
        assert_eq!(Event::Tick.scroll_offset(), None);
    }
}
