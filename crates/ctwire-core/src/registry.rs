//! Terminal registry: creates the four terminal visuals once at startup and
//! remembers which surface handle belongs to which terminal.

use crate::surface::{NodeHandle, Point, RenderSurface};
use crate::terminal::{CtTerminal, MeterTerminal, Terminal};

/// Fixed layout: CT terminals on the left, meter terminals on the right.
pub fn layout_position(terminal: Terminal) -> Point {
    match terminal {
        Terminal::Ct(CtTerminal::S1) => Point::new(0.25, 0.3),
        Terminal::Ct(CtTerminal::S2) => Point::new(0.25, 0.7),
        Terminal::Meter(MeterTerminal::M1) => Point::new(0.75, 0.3),
        Terminal::Meter(MeterTerminal::L1) => Point::new(0.75, 0.7),
    }
}

#[derive(Debug, Clone)]
pub struct TerminalRegistry {
    nodes: [(Terminal, NodeHandle); 4],
}

impl TerminalRegistry {
    pub fn initialize<S: RenderSurface + ?Sized>(surface: &mut S) -> Self {
        let nodes = Terminal::ALL.map(|terminal| {
            let node = surface.create_terminal(terminal, layout_position(terminal));
            tracing::debug!(%terminal, node = node.0, "terminal created");
            (terminal, node)
        });
        surface.redraw();

        Self { nodes }
    }

    pub fn node(&self, terminal: Terminal) -> NodeHandle {
        self.nodes[terminal.index()].1
    }

    pub fn iter(&self) -> impl Iterator<Item = (Terminal, NodeHandle)> + '_ {
        self.nodes.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::Category;
    use crate::test_utils::RecordingSurface;

    #[test]
    fn test_initialize_creates_four_terminals() {
        let mut surface = RecordingSurface::default();
        let registry = TerminalRegistry::initialize(&mut surface);

        assert_eq!(surface.nodes.len(), 4);
        assert_eq!(surface.redraws, 1);
        for terminal in Terminal::ALL {
            let node = registry.node(terminal);
            assert_eq!(surface.position(node), layout_position(terminal));
        }
    }

    #[test]
    fn test_layout_separates_categories() {
        for terminal in Terminal::ALL {
            let position = layout_position(terminal);
            match terminal.category() {
                Category::Ct => assert!(position.x < 0.5),
                Category::Meter => assert!(position.x > 0.5),
            }
        }
        assert_ne!(
            layout_position(CtTerminal::S1.into()).y,
            layout_position(CtTerminal::S2.into()).y
        );
    }
}
