// src/test_utils/mod.rs
use crate::surface::{NodeHandle, Point, RenderSurface, StatusColor, StatusDisplay, WireHandle};
use crate::terminal::Terminal;

#[derive(Debug, Clone)]
pub struct FakeNode {
    pub handle: NodeHandle,
    pub terminal: Terminal,
    pub position: Point,
    pub selected: bool,
}

#[derive(Debug, Clone)]
pub struct FakeWire {
    pub handle: WireHandle,
    pub from: Point,
    pub to: Point,
}

/// Render surface that records every call instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub nodes: Vec<FakeNode>,
    /// Live wires, bottom of the draw order first.
    pub wires: Vec<FakeWire>,
    pub destroyed: Vec<WireHandle>,
    pub redraws: usize,
    next_id: u64,
}

impl RecordingSurface {
    pub fn selected_terminals(&self) -> Vec<Terminal> {
        self.nodes
            .iter()
            .filter(|n| n.selected)
            .map(|n| n.terminal)
            .collect()
    }

    pub fn bottom_wire(&self) -> Option<WireHandle> {
        self.wires.first().map(|w| w.handle)
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl RenderSurface for RecordingSurface {
    fn create_terminal(&mut self, terminal: Terminal, position: Point) -> NodeHandle {
        let handle = NodeHandle(self.next_id());
        self.nodes.push(FakeNode {
            handle,
            terminal,
            position,
            selected: false,
        });
        handle
    }

    fn position(&self, node: NodeHandle) -> Point {
        self.nodes
            .iter()
            .find(|n| n.handle == node)
            .map(|n| n.position)
            .unwrap()
    }

    fn create_wire(&mut self, from: Point, to: Point) -> WireHandle {
        let handle = WireHandle(self.next_id());
        self.wires.push(FakeWire { handle, from, to });
        handle
    }

    fn move_to_bottom(&mut self, wire: WireHandle) {
        let idx = self.wires.iter().position(|w| w.handle == wire).unwrap();
        let wire = self.wires.remove(idx);
        self.wires.insert(0, wire);
    }

    fn destroy_wire(&mut self, wire: WireHandle) {
        self.wires.retain(|w| w.handle != wire);
        self.destroyed.push(wire);
    }

    fn set_selected(&mut self, node: NodeHandle, selected: bool) {
        if let Some(n) = self.nodes.iter_mut().find(|n| n.handle == node) {
            n.selected = selected;
        }
    }

    fn redraw(&mut self) {
        self.redraws += 1;
    }
}

#[derive(Debug, Default)]
pub struct RecordingStatus {
    pub history: Vec<(String, StatusColor)>,
}

impl RecordingStatus {
    pub fn last(&self) -> Option<(&str, StatusColor)> {
        self.history
            .last()
            .map(|(text, color)| (text.as_str(), *color))
    }
}

impl StatusDisplay for RecordingStatus {
    fn show(&mut self, text: &str, color: StatusColor) {
        self.history.push((text.to_string(), color));
    }
}
