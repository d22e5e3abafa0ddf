//! Presentation adapter between the switchboard and the outside world.
//!
//! The trainer owns the render surface and the status display. Hosts call
//! [`Trainer::click`], [`Trainer::reset`] and [`Trainer::check`]; every call
//! ends with exactly one status message, and rejected input never escapes as
//! an error.

use crate::errors::WiringError;
use crate::surface::{RenderSurface, StatusColor, StatusDisplay};
use crate::switchboard::{ClickResult, Switchboard};
use crate::terminal::Terminal;
use crate::validator::{evaluate, Outcome};

pub const STARTUP_MESSAGE: &str = "Click a terminal, then another terminal to draw a wire.";
pub const RESET_MESSAGE: &str =
    "Connections reset. Click a terminal, then another terminal to draw a wire.";

impl Outcome {
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Incomplete => {
                "Open / incomplete circuit — both M1 and L1 must be connected to S1/S2."
            }
            Outcome::CorrectPolarity => "Correct polarity — S1 → M1 and S2 → L1.",
            Outcome::ReversedPolarity => {
                "Reverse polarity — S2 → M1 and S1 → L1. Meter will measure reverse direction."
            }
            Outcome::Fault => "Fault wiring — CT terminals connected incorrectly.",
        }
    }

    pub fn color(&self) -> StatusColor {
        match self {
            Outcome::CorrectPolarity => StatusColor::Success,
            Outcome::ReversedPolarity => StatusColor::Warning,
            Outcome::Incomplete | Outcome::Fault => StatusColor::Error,
        }
    }
}

fn error_message(err: &WiringError) -> String {
    match err {
        WiringError::SelfConnection(_) => "Cannot connect a terminal to itself.".to_string(),
        WiringError::SameCategoryPair { .. } => {
            "Connect a CT terminal to a Meter terminal (S1/S2 ↔ M1/L1).".to_string()
        }
        WiringError::UnknownTerminal(_) => err.to_string(),
    }
}

pub struct Trainer<S, D> {
    surface: S,
    status: D,
    board: Switchboard,
}

impl<S: RenderSurface, D: StatusDisplay> Trainer<S, D> {
    /// Lays out the terminals on `surface` and shows the startup prompt.
    pub fn new(mut surface: S, mut status: D) -> Self {
        let board = Switchboard::new(&mut surface);
        status.show(STARTUP_MESSAGE, StatusColor::Neutral);

        Self {
            surface,
            status,
            board,
        }
    }

    pub fn click(&mut self, terminal: Terminal) {
        match self.board.on_terminal_clicked(&mut self.surface, terminal) {
            Ok(ClickResult::Selected(terminal)) => self.status.show(
                &format!("Selected: {terminal}. Now click another terminal to complete the wire."),
                StatusColor::Neutral,
            ),
            Ok(ClickResult::Connected { ct, meter, .. }) => self
                .status
                .show(&format!("Connected {ct} ↔ {meter}"), StatusColor::Neutral),
            Err(err) => {
                tracing::warn!(error = %err, "wire rejected");
                self.status.show(&error_message(&err), StatusColor::Error);
            }
        }
    }

    pub fn reset(&mut self) {
        self.board.reset(&mut self.surface);
        self.status.show(RESET_MESSAGE, StatusColor::Neutral);
        tracing::info!("connections reset");
    }

    pub fn check(&mut self) -> Outcome {
        let outcome = evaluate(self.board.mapping());
        self.status.show(outcome.message(), outcome.color());
        tracing::info!(%outcome, mapping = ?self.board.mapping(), "wiring checked");

        outcome
    }

    pub fn board(&self) -> &Switchboard {
        &self.board
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn status(&self) -> &D {
        &self.status
    }

    pub fn status_mut(&mut self) -> &mut D {
        &mut self.status
    }
}
