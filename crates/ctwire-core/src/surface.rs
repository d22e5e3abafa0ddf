//! Ports through which the trainer reaches its drawing surface and status line.
//!
//! Implementations own every visual object. The core only keeps the opaque
//! handles returned here and hands them back when it needs to move, highlight
//! or destroy something.

use strum_macros::Display;

use crate::terminal::Terminal;

/// A position in normalized surface coordinates, measured from the top-left
/// corner. Both axes run from 0.0 to 1.0.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeHandle(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WireHandle(pub u64);

pub trait RenderSurface {
    /// Creates the circle and label for a terminal at `position`.
    fn create_terminal(&mut self, terminal: Terminal, position: Point) -> NodeHandle;

    /// Current center of a terminal visual.
    fn position(&self, node: NodeHandle) -> Point;

    fn create_wire(&mut self, from: Point, to: Point) -> WireHandle;

    /// Moves a wire below every other visual in the draw order.
    fn move_to_bottom(&mut self, wire: WireHandle);

    fn destroy_wire(&mut self, wire: WireHandle);

    /// Switches a terminal between its normal and its selected stroke.
    fn set_selected(&mut self, node: NodeHandle, selected: bool);

    /// Requests a redraw after a batch of visual changes.
    fn redraw(&mut self);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum StatusColor {
    #[default]
    Neutral,
    Success,
    Warning,
    Error,
}

pub trait StatusDisplay {
    fn show(&mut self, text: &str, color: StatusColor);
}
