//! Connection state machine for the training board.
//!
//! The switchboard tracks the pending selection (the first terminal of a wire
//! still waiting for its partner), the set of drawn wires and the derived
//! meter mapping. A meter terminal accepts at most one wire: connecting it
//! again replaces the old wire instead of adding a second one. Any pair that
//! fails validation leaves the wire set untouched.
//!
//! The render surface is borrowed for each operation and belongs to the
//! caller, which keeps the switchboard free of any drawing backend.

use crate::errors::WiringError;
use crate::mapping::Mapping;
use crate::registry::TerminalRegistry;
use crate::surface::{RenderSurface, WireHandle};
use crate::terminal::{CtTerminal, MeterTerminal, Terminal};

/// A drawn wire between a CT terminal and a meter terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub ct: CtTerminal,
    pub meter: MeterTerminal,
    wire: WireHandle,
}

impl Connection {
    pub fn wire(&self) -> WireHandle {
        self.wire
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    Idle,
    Selecting(Terminal),
}

/// What a successful click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickResult {
    Selected(Terminal),
    Connected {
        ct: CtTerminal,
        meter: MeterTerminal,
        replaced: Option<CtTerminal>,
    },
}

#[derive(Debug)]
pub struct Switchboard {
    registry: TerminalRegistry,
    pending: Option<Terminal>,
    connections: Vec<Connection>,
    mapping: Mapping,
}

impl Switchboard {
    /// Creates the terminal visuals on `surface` and starts idle.
    pub fn new<S: RenderSurface + ?Sized>(surface: &mut S) -> Self {
        Self {
            registry: TerminalRegistry::initialize(surface),
            pending: None,
            connections: Vec::new(),
            mapping: Mapping::default(),
        }
    }

    pub fn state(&self) -> SelectionState {
        match self.pending {
            Some(terminal) => SelectionState::Selecting(terminal),
            None => SelectionState::Idle,
        }
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn mapping(&self) -> &Mapping {
        &self.mapping
    }

    pub fn registry(&self) -> &TerminalRegistry {
        &self.registry
    }

    /// Handles a click on `terminal`.
    ///
    /// The first click of a pair only selects. The second click always clears
    /// the selection, then either connects the pair or reports why it cannot.
    pub fn on_terminal_clicked<S: RenderSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        terminal: Terminal,
    ) -> Result<ClickResult, WiringError> {
        let Some(from) = self.pending.take() else {
            self.pending = Some(terminal);
            surface.set_selected(self.registry.node(terminal), true);
            surface.redraw();
            tracing::debug!(%terminal, "terminal selected");
            return Ok(ClickResult::Selected(terminal));
        };

        surface.set_selected(self.registry.node(from), false);
        surface.redraw();

        let (ct, meter) = pair(from, terminal)?;
        let replaced = self.connect(surface, ct, meter);

        Ok(ClickResult::Connected {
            ct,
            meter,
            replaced,
        })
    }

    /// Draws a wire from `ct` to `meter`, replacing the wire currently on
    /// `meter` if there is one. Returns the CT terminal that was unplugged.
    pub fn connect<S: RenderSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        ct: CtTerminal,
        meter: MeterTerminal,
    ) -> Option<CtTerminal> {
        let mut replaced = None;
        self.connections.retain(|conn| {
            if conn.meter != meter {
                return true;
            }
            surface.destroy_wire(conn.wire);
            replaced = Some(conn.ct);
            false
        });

        let from = surface.position(self.registry.node(ct.into()));
        let to = surface.position(self.registry.node(meter.into()));
        let wire = surface.create_wire(from, to);
        surface.move_to_bottom(wire);
        surface.redraw();

        self.connections.push(Connection { ct, meter, wire });
        self.mapping.set(meter, ct);

        tracing::debug!(%ct, %meter, replaced = ?replaced, wire = wire.0, "wire connected");

        replaced
    }

    /// Removes every wire and selection. Safe to call on an empty board.
    pub fn reset<S: RenderSurface + ?Sized>(&mut self, surface: &mut S) {
        for conn in self.connections.drain(..) {
            surface.destroy_wire(conn.wire);
        }
        self.mapping.clear();
        self.pending = None;

        for (_, node) in self.registry.iter() {
            surface.set_selected(node, false);
        }
        surface.redraw();

        tracing::debug!("switchboard reset");
    }
}

/// Orders a clicked pair as (CT, meter), whichever was clicked first.
fn pair(from: Terminal, to: Terminal) -> Result<(CtTerminal, MeterTerminal), WiringError> {
    if from == to {
        return Err(WiringError::SelfConnection(from));
    }

    match (from, to) {
        (Terminal::Ct(ct), Terminal::Meter(meter)) | (Terminal::Meter(meter), Terminal::Ct(ct)) => {
            Ok((ct, meter))
        }
        _ => Err(WiringError::SameCategoryPair {
            from,
            to,
            category: from.category(),
        }),
    }
}
