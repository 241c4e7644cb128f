#![forbid(unsafe_code)]

//! Feature-gated extras for folio.
//!
//! # Feature Flags
//!
//! | Feature    | Module            | Description                                        |
//! |------------|-------------------|----------------------------------------------------|
//! | `markdown` | [`markdown`]      | Markdown to element tree with fenced-block dispatch|
//! | `syntax`   | [`syntax`]        | Line tokenizers and the dark highlight theme       |
//! | `diagram`  | [`mermaid`]       | Mermaid flowchart parsing and SVG layout           |
//! | `forms`    | [`forms`]         | Form fields, validators, and form rendering        |
//! | `contact`  | [`contact`]       | Contact form model and submission transport        |
//! | `http`     | `contact::http`   | Blocking HTTP transport (native targets)           |
//! | `logging`  | [`logging`]       | tracing-subscriber setup for binaries              |

#[cfg(feature = "contact")]
pub mod contact;
#[cfg(feature = "forms")]
pub mod forms;
#[cfg(feature = "logging")]
pub mod logging;
#[cfg(feature = "markdown")]
pub mod markdown;
#[cfg(feature = "diagram")]
pub mod mermaid;
#[cfg(feature = "diagram")]
pub mod mermaid_layout;
#[cfg(feature = "syntax")]
pub mod syntax;
