#![forbid(unsafe_code)]

//! Page sections and their measured anchors.

use serde::Serialize;

/// Opaque reference to an icon in the site's icon set (e.g. `"cloud"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct IconRef(pub &'static str);

impl IconRef {
    /// Icon name as understood by the stylesheet (`icon-{name}`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.0
    }
}

/// Static metadata for one navigable region of a long page.
///
/// `id` matches the DOM anchor of the section heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionDescriptor {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: IconRef,
}

impl SectionDescriptor {
    #[must_use]
    pub const fn new(id: &'static str, label: &'static str, icon: &'static str) -> Self {
        Self {
            id,
            label,
            icon: IconRef(icon),
        }
    }

    /// Fragment link target (`#id`).
    #[must_use]
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

/// Measured top offset of a single anchor.
///
/// `top` is `None` when the anchor element was not present in the document
/// at measurement time.
#[derive(Debug, Clone, PartialEq)]
pub struct Anchor {
    pub id: String,
    pub top: Option<f64>,
}

/// Document-relative offsets for a set of section anchors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnchorLayout {
    anchors: Vec<Anchor>,
}

impl AnchorLayout {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a layout where every anchor was found.
    pub fn from_offsets<'a, I>(offsets: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut layout = Self::new();
        for (id, top) in offsets {
            layout.push(id, Some(top));
        }
        layout
    }

    /// Record (or overwrite) the measurement for `id`.
    pub fn push(&mut self, id: impl Into<String>, top: Option<f64>) {
        let id = id.into();
        if let Some(existing) = self.anchors.iter_mut().find(|a| a.id == id) {
            existing.top = top;
        } else {
            self.anchors.push(Anchor { id, top });
        }
    }

    /// Measured offset of `id`. `None` if it was never measured or was absent.
    #[must_use]
    pub fn top_of(&self, id: &str) -> Option<f64> {
        self.anchors
            .iter()
            .find(|a| a.id == id)
            .and_then(|a| a.top)
    }

    /// Section ids from `sections` with no usable measurement.
    #[must_use]
    pub fn missing(&self, sections: &[SectionDescriptor]) -> Vec<&'static str> {
        sections
            .iter()
            .filter(|s| self.top_of(s.id).is_none())
            .map(|s| s.id)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Anchor> {
        self.anchors.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }
}
