#![forbid(unsafe_code)]

//! Fixed top navigation bar.
//!
//! The bar is transparent at the top of the page and switches to an opaque,
//! shadowed style once the page has scrolled past [`SCROLLED_THRESHOLD_PX`].
//! On narrow viewports the items collapse into a toggled menu.

use folio_render::{Element, Node};

use crate::{Widget, classes};

/// Scroll offset after which the bar is drawn in its "scrolled" style.
pub const SCROLLED_THRESHOLD_PX: f64 = 10.0;

/// One entry in the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
}

impl NavItem {
    pub const fn new(href: &'static str, label: &'static str) -> Self {
        Self { href, label }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Navbar {
    brand: &'static str,
    subtitle: &'static str,
    items: Vec<NavItem>,
    resume_href: Option<&'static str>,
    scrolled: bool,
    menu_open: bool,
}

impl Navbar {
    pub fn new(brand: &'static str, subtitle: &'static str, items: &[NavItem]) -> Self {
        Self {
            brand,
            subtitle,
            items: items.to_vec(),
            resume_href: None,
            scrolled: false,
            menu_open: false,
        }
    }

    /// Show a resume download button.
    #[must_use]
    pub fn resume(mut self, href: &'static str) -> Self {
        self.resume_href = Some(href);
        self
    }

    /// Track the scroll offset. Returns `true` if the scrolled state flipped.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        let scrolled = offset > SCROLLED_THRESHOLD_PX;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Following a link closes the mobile menu.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    fn links(&self, class: &str) -> Element {
        Element::new("ul").class(class).children(self.items.iter().map(|item| {
            Element::new("li").child(
                Element::new("a")
                    .attr("href", item.href)
                    .class("text-gray-700 hover:text-blue-600 font-medium transition-colors")
                    .text(item.label),
            )
        }))
    }
}

impl Widget for Navbar {
    fn render(&self) -> Node {
        let bar_class = if self.scrolled {
            "bg-white/95 backdrop-blur-md shadow-lg border-b border-gray-200 folio-nav-scrolled"
        } else {
            "bg-transparent"
        };

        let brand = Element::new("a")
            .attr("href", "#home")
            .class("flex flex-col")
            .child(Element::new("span").class("font-bold text-gray-900").text(self.brand))
            .child(Element::new("span").class("text-xs text-gray-600").text(self.subtitle));

        let mut row = Element::new("div")
            .class("flex justify-between items-center py-4")
            .child(brand)
            .child(self.links("hidden md:flex space-x-8"));
        if let Some(href) = self.resume_href {
            row.push(
                Element::new("a")
                    .attr("href", href)
                    .attr("download", "")
                    .class("hidden md:inline-flex px-4 py-2 rounded-lg bg-blue-600 text-white")
                    .text("Resume"),
            );
        }
        row.push(
            Element::new("button")
                .attr("type", "button")
                .attr("aria-expanded", self.menu_open.to_string())
                .attr("aria-controls", "mobile-menu")
                .class("md:hidden")
                .text("Menu"),
        );

        let mut inner = Element::new("div")
            .class("max-w-7xl mx-auto px-4 sm:px-6 lg:px-8")
            .child(row);
        if self.menu_open {
            inner.push(self.links("md:hidden space-y-2 pb-4").id("mobile-menu"));
        }

        Element::new("nav")
            .class(classes(&[
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300",
                bar_class,
            ]))
            .attr("data-scrolled", self.scrolled.to_string())
            .child(inner)
            .into()
    }
}
