#![forbid(unsafe_code)]

//! Runtime for interactive page state.
//!
//! Page behavior is written as a [`Model`]: host [`Event`]s become messages,
//! `update` mutates state and returns a [`Cmd`] describing side effects, and
//! `view` renders the state as an element tree. Hosts decide how commands
//! run; [`ProgramSimulator`] runs everything synchronously for tests.
//!
//! [`Event`]: folio_core::Event

pub mod program;
pub mod simulator;

pub use program::{Cmd, Model, TaskSpec};
pub use simulator::{CmdRecord, ProgramSimulator};
