//! Configuration management for the terminal interface.
//!
//! This module provides centralized handling of the config file, logging
//! destination and drawing options.

mod config;

pub use config::*;
