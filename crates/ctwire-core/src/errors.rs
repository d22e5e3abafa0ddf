//! Error types for rejected wiring attempts.
//!
//! Every error here is recoverable: the switchboard detects it before any state
//! is touched, and the trainer turns it into a status message.

use thiserror::Error;

use crate::terminal::{Category, Terminal};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WiringError {
    #[error("cannot connect {0} to itself")]
    SelfConnection(Terminal),
    #[error("{from} and {to} are both {category} terminals")]
    SameCategoryPair {
        from: Terminal,
        to: Terminal,
        category: Category,
    },
    #[error("unknown terminal '{0}', expected one of S1, S2, M1, L1")]
    UnknownTerminal(String),
}
