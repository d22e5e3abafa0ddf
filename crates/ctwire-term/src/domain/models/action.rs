use ctwire_core::Terminal;

/// A command for the trainer, resolved from an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SelectTerminal(Terminal),
    Reset,
    Check,
    Quit,
}
