#![forbid(unsafe_code)]

//! `folio-web` runs folio page models under a host-driven loop.
//!
//! Design goals:
//! - **Host-driven I/O**: the embedding environment pushes scroll offsets and
//!   measured anchor positions; nothing here reads the DOM on its own.
//! - **Deterministic time**: the host advances a monotonic clock explicitly.
//! - **No blocking / no threads**: suitable for `wasm32-unknown-unknown`.
//!
//! The stepping core ([`StepProgram`], [`PageModel`]) builds on every target.
//! The `wasm-bindgen` surface ([`FolioWeb`]) exists only on wasm32.

pub mod page;
pub mod step_program;

#[cfg(target_arch = "wasm32")]
mod fetch;
#[cfg(target_arch = "wasm32")]
mod wasm;
#[cfg(target_arch = "wasm32")]
pub use fetch::FetchTransport;
#[cfg(target_arch = "wasm32")]
pub use wasm::FolioWeb;

use core::time::Duration;

pub use page::{PageModel, PageMsg, REGION_ATTR};
pub use step_program::{StepProgram, StepResult};

/// Errors from driving a [`StepProgram`] out of order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepError {
    /// `init` was called a second time.
    AlreadyInitialized,
    /// `step` was called before `init`.
    NotInitialized,
}

impl core::fmt::Display for StepError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::AlreadyInitialized => write!(f, "step program already initialized"),
            Self::NotInitialized => write!(f, "step program not initialized"),
        }
    }
}

impl std::error::Error for StepError {}

/// Deterministic monotonic clock controlled by the host.
#[derive(Debug, Default, Clone)]
pub struct DeterministicClock {
    now: Duration,
}

impl DeterministicClock {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            now: Duration::ZERO,
        }
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn set(&mut self, now: Duration) {
        self.now = now;
    }

    pub fn advance(&mut self, dt: Duration) {
        self.now = self.now.saturating_add(dt);
    }
}

/// Captured presentation outputs for host consumption.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WebOutputs {
    /// Log lines from `Cmd::Log`.
    pub logs: Vec<String>,
    /// HTML of the most recent render.
    pub last_html: Option<String>,
    /// Number of renders since the outputs were last taken.
    pub renders: u32,
}
