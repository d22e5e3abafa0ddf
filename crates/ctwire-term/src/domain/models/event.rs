use ctwire_core::Terminal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    MouseClick { column: u16, row: u16 },
    KeyboardTerminal(Terminal),
    KeyboardReset,
    KeyboardCheck,
    KeyboardQuit,
    KeyboardCTRLC,
    UIResize,
    UITick,
}
