//! The closed set of terminals on the training board.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString};

use crate::errors::WiringError;

/// Secondary terminal of the current transformer.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, EnumIter, Serialize,
)]
#[strum(ascii_case_insensitive)]
pub enum CtTerminal {
    S1,
    S2,
}

/// Input terminal of the single-phase meter.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum MeterTerminal {
    M1,
    L1,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum Category {
    #[strum(serialize = "CT")]
    Ct,
    #[strum(serialize = "METER")]
    Meter,
}

/// Any terminal on the board. The category is carried by the variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Terminal {
    Ct(CtTerminal),
    Meter(MeterTerminal),
}

impl Terminal {
    /// All terminals in layout order.
    pub const ALL: [Terminal; 4] = [
        Terminal::Ct(CtTerminal::S1),
        Terminal::Ct(CtTerminal::S2),
        Terminal::Meter(MeterTerminal::M1),
        Terminal::Meter(MeterTerminal::L1),
    ];

    /// Position of this terminal in [`Terminal::ALL`].
    pub fn index(self) -> usize {
        match self {
            Terminal::Ct(CtTerminal::S1) => 0,
            Terminal::Ct(CtTerminal::S2) => 1,
            Terminal::Meter(MeterTerminal::M1) => 2,
            Terminal::Meter(MeterTerminal::L1) => 3,
        }
    }

    pub fn category(self) -> Category {
        match self {
            Terminal::Ct(_) => Category::Ct,
            Terminal::Meter(_) => Category::Meter,
        }
    }
}

impl From<CtTerminal> for Terminal {
    fn from(ct: CtTerminal) -> Self {
        Terminal::Ct(ct)
    }
}

impl From<MeterTerminal> for Terminal {
    fn from(meter: MeterTerminal) -> Self {
        Terminal::Meter(meter)
    }
}

impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Terminal::Ct(ct) => write!(f, "{ct}"),
            Terminal::Meter(meter) => write!(f, "{meter}"),
        }
    }
}

impl FromStr for Terminal {
    type Err = WiringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if let Ok(ct) = name.parse::<CtTerminal>() {
            return Ok(Terminal::Ct(ct));
        }
        if let Ok(meter) = name.parse::<MeterTerminal>() {
            return Ok(Terminal::Meter(meter));
        }
        Err(WiringError::UnknownTerminal(name.to_string()))
    }
}
