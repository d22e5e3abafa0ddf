//! Core logic for the current-transformer to single-phase-meter wiring trainer.
//!
//! The trainer shows two CT secondary terminals (S1, S2) and two meter input
//! terminals (M1, L1). A wire is drawn by selecting one terminal and then a
//! terminal of the other category; each meter terminal accepts at most one wire.
//! The resulting wiring can be checked for correct polarity, reversed polarity,
//! an open circuit or a fault.
//!
//! # Architecture Overview
//!
//! - **Terminal registry**: the four fixed terminals and their layout positions
//! - **Switchboard**: the connection state machine and the derived meter mapping
//! - **Validator**: a pure evaluation of the mapping into a wiring outcome
//! - **Trainer**: the presentation adapter that turns state transitions into
//!   render-surface calls and status messages
//!
//! Rendering and status output are reached only through the [`RenderSurface`]
//! and [`StatusDisplay`] ports, so the whole crate runs without a terminal.

pub mod errors;
pub mod mapping;
pub mod registry;
pub mod surface;
pub mod switchboard;
pub mod terminal;
pub mod trainer;
pub mod validator;

pub use errors::WiringError;
pub use mapping::Mapping;
pub use registry::TerminalRegistry;
pub use surface::{NodeHandle, Point, RenderSurface, StatusColor, StatusDisplay, WireHandle};
pub use switchboard::{ClickResult, Connection, SelectionState, Switchboard};
pub use terminal::{Category, CtTerminal, MeterTerminal, Terminal};
pub use trainer::Trainer;
pub use validator::{evaluate, Outcome};

#[cfg(test)]
pub mod test_utils;
