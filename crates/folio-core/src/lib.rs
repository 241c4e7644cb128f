#![forbid(unsafe_code)]

//! Core: host events and page-section metadata.
//!
//! # Role in folio
//! `folio-core` is the input layer. Hosts (the static generator, the wasm
//! bridge, tests) translate whatever they observe into [`event::Event`]
//! values, and every interactive model consumes those events.
//!
//! # Primary responsibilities
//! - **Event**: scroll offsets, measured anchor layouts, viewport resizes, ticks.
//! - **SectionDescriptor**: the static ordered list of navigable regions on a page.
//! - **AnchorLayout**: the measured document offset of each section anchor.
//!
//! # How it fits in the system
//! `folio-widgets` builds the active-section tracker on these types and
//! `folio-runtime` requires every model message to be `From<Event>`.

pub mod event;
pub mod section;

pub use event::Event;
pub use section::{Anchor, AnchorLayout, IconRef, SectionDescriptor};
