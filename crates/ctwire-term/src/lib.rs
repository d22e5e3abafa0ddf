//! Terminal user interface for the CT wiring trainer.
//!
//! This crate hosts the trainer from `ctwire-core` inside a terminal: the
//! diagram is drawn on a ratatui canvas, terminals and buttons are clicked with
//! the mouse, and the status line shows the result of every action.

pub mod application;
pub mod configuration;
pub mod domain;
pub mod infrastructure;
pub use application::cli::Startup;
pub use application::ui::{destruct_terminal_for_panic, start_loop};
pub use configuration::{Config, ConfigKey};
pub use domain::models::{Action, Event};
pub use domain::services::{AppState, AppStateProps};
pub use infrastructure::surface::{CanvasSurface, StatusLine};
