//! Domain logic for the terminal interface.
//!
//! This module turns raw terminal input into trainer commands and keeps the
//! screen state that the UI loop renders.

pub mod models;
pub mod services;
