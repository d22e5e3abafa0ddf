#[cfg(test)]
#[path = "canvas_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use ctwire_core::Category;
use ctwire_core::NodeHandle;
use ctwire_core::Point;
use ctwire_core::RenderSurface;
use ctwire_core::Terminal;
use ctwire_core::WireHandle;
use ratatui::layout::Position;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::canvas::Canvas;
use ratatui::widgets::canvas::Circle;
use ratatui::widgets::canvas::Line as CanvasLine;
use ratatui::widgets::Block;
use ratatui::Frame;

const CT_COLOR: Color = Color::Cyan;
const METER_COLOR: Color = Color::Green;
const SELECTED_COLOR: Color = Color::Red;
const WIRE_COLOR: Color = Color::White;

/// Circle radius in columns.
const NODE_RADIUS: f64 = 2.0;

/// Half extents of the clickable box around a terminal, in cells.
const HIT_COLUMNS: u16 = 3;
const HIT_ROWS: u16 = 1;

pub fn parse_marker(name: &str) -> Result<Marker> {
    let marker = match name {
        "braille" => Marker::Braille,
        "dot" => Marker::Dot,
        "block" => Marker::Block,
        "half-block" => Marker::HalfBlock,
        _ => bail!("unknown marker '{name}', expected braille, dot, block or half-block"),
    };

    return Ok(marker);
}

#[derive(Debug, Clone)]
struct NodeVisual {
    handle: NodeHandle,
    terminal: Terminal,
    position: Point,
    selected: bool,
}

#[derive(Debug, Clone)]
struct WireVisual {
    handle: WireHandle,
    from: Point,
    to: Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Item {
    Node(NodeHandle),
    Wire(WireHandle),
}

/// Render surface backed by a ratatui canvas.
///
/// Visuals live in normalized coordinates and are scaled to the canvas area on
/// every render, so the diagram follows terminal resizes. `order` is the draw
/// order, bottom first.
#[derive(Debug)]
pub struct CanvasSurface {
    nodes: Vec<NodeVisual>,
    wires: Vec<WireVisual>,
    order: Vec<Item>,
    marker: Marker,
    next_id: u64,
    dirty: bool,
}

impl CanvasSurface {
    pub fn new(marker: Marker) -> CanvasSurface {
        return CanvasSurface {
            nodes: vec![],
            wires: vec![],
            order: vec![],
            marker,
            next_id: 0,
            dirty: true,
        };
    }

    pub fn wire_count(&self) -> usize {
        return self.wires.len();
    }

    pub fn is_selected(&self, terminal: Terminal) -> bool {
        return self
            .nodes
            .iter()
            .any(|node| node.terminal == terminal && node.selected);
    }

    /// Returns whether a redraw was requested since the last call.
    pub fn take_dirty(&mut self) -> bool {
        return std::mem::replace(&mut self.dirty, false);
    }

    /// Finds the terminal whose hit box covers the given cell. `inner` is the
    /// canvas area inside its border.
    pub fn terminal_at(&self, inner: Rect, column: u16, row: u16) -> Option<Terminal> {
        if !inner.contains(Position::new(column, row)) {
            return None;
        }

        return self
            .nodes
            .iter()
            .find(|node| {
                let (x, y) = cell_of(inner, node.position);
                return column.abs_diff(x) <= HIT_COLUMNS && row.abs_diff(y) <= HIT_ROWS;
            })
            .map(|node| node.terminal);
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered().title(" CT secondary → single-phase meter ");
        let inner = block.inner(area);
        let width = f64::from(inner.width.max(1));
        let height = f64::from(inner.height.max(1)) * 2.0;

        let canvas = Canvas::default()
            .block(block)
            .marker(self.marker)
            .x_bounds([0.0, width])
            .y_bounds([0.0, height])
            .paint(|ctx| {
                for item in &self.order {
                    match item {
                        Item::Wire(handle) => {
                            if let Some(wire) = self.wires.iter().find(|w| w.handle == *handle) {
                                let (x1, y1) = to_canvas(wire.from, width, height);
                                let (x2, y2) = to_canvas(wire.to, width, height);
                                ctx.draw(&CanvasLine {
                                    x1,
                                    y1,
                                    x2,
                                    y2,
                                    color: WIRE_COLOR,
                                });
                            }
                        }
                        Item::Node(handle) => {
                            if let Some(node) = self.nodes.iter().find(|n| n.handle == *handle) {
                                let (x, y) = to_canvas(node.position, width, height);
                                ctx.draw(&Circle {
                                    x,
                                    y,
                                    radius: NODE_RADIUS,
                                    color: node_color(node),
                                });
                            }
                        }
                    }
                    ctx.layer();
                }

                for node in &self.nodes {
                    let (x, y) = to_canvas(node.position, width, height);
                    let mut style = Style::default().fg(node_color(node));
                    if node.selected {
                        style = style.add_modifier(Modifier::BOLD);
                    }
                    ctx.print(x - 1.0, y, Span::styled(node.terminal.to_string(), style));
                }
            });

        frame.render_widget(canvas, area);
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        return self.next_id;
    }
}

impl RenderSurface for CanvasSurface {
    fn create_terminal(&mut self, terminal: Terminal, position: Point) -> NodeHandle {
        let handle = NodeHandle(self.next_id());
        self.nodes.push(NodeVisual {
            handle,
            terminal,
            position,
            selected: false,
        });
        self.order.push(Item::Node(handle));

        return handle;
    }

    fn position(&self, node: NodeHandle) -> Point {
        return self
            .nodes
            .iter()
            .find(|n| n.handle == node)
            .map(|n| n.position)
            .unwrap_or_default();
    }

    fn create_wire(&mut self, from: Point, to: Point) -> WireHandle {
        let handle = WireHandle(self.next_id());
        self.wires.push(WireVisual { handle, from, to });
        self.order.push(Item::Wire(handle));

        return handle;
    }

    fn move_to_bottom(&mut self, wire: WireHandle) {
        if let Some(idx) = self.order.iter().position(|i| *i == Item::Wire(wire)) {
            let item = self.order.remove(idx);
            self.order.insert(0, item);
        }
    }

    fn destroy_wire(&mut self, wire: WireHandle) {
        self.wires.retain(|w| w.handle != wire);
        self.order.retain(|i| *i != Item::Wire(wire));
    }

    fn set_selected(&mut self, node: NodeHandle, selected: bool) {
        if let Some(n) = self.nodes.iter_mut().find(|n| n.handle == node) {
            n.selected = selected;
        }
    }

    fn redraw(&mut self) {
        self.dirty = true;
    }
}

fn node_color(node: &NodeVisual) -> Color {
    if node.selected {
        return SELECTED_COLOR;
    }

    return match node.terminal.category() {
        Category::Ct => CT_COLOR,
        Category::Meter => METER_COLOR,
    };
}

/// Canvas y grows upwards, normalized y grows downwards.
fn to_canvas(point: Point, width: f64, height: f64) -> (f64, f64) {
    return (point.x * width, (1.0 - point.y) * height);
}

fn cell_of(inner: Rect, point: Point) -> (u16, u16) {
    let x = (point.x * f64::from(inner.width)).floor() as u16;
    let y = (point.y * f64::from(inner.height)).floor() as u16;

    return (
        inner.x + x.min(inner.width.saturating_sub(1)),
        inner.y + y.min(inner.height.saturating_sub(1)),
    );
}
