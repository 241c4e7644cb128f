#![forbid(unsafe_code)]

//! Static site generator for the folio portfolio.
//!
//! - [`cli`]: flags and `FOLIO_*` environment overrides
//! - [`pages`]: route to [`folio_render::Document`]
//! - [`generate`]: every route to disk, plus styles, manifest and assets

pub mod cli;
pub mod generate;
pub mod pages;

pub use cli::{CliError, Command, Opts};
pub use generate::{GenerateError, GenerateReport, SiteGenerator};
pub use pages::SiteRenderer;
