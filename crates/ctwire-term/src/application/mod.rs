//! Application layer orchestrating the terminal interface.
//!
//! This module handles command-line parsing and the main UI loop. It
//! coordinates between the domain services and the drawing infrastructure.

pub mod cli;
pub mod ui;
