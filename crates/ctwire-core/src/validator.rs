//! Polarity check over the meter mapping.

use serde::Serialize;
use strum_macros::Display;

use crate::mapping::Mapping;
use crate::terminal::{CtTerminal, MeterTerminal};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    /// At least one meter terminal has no wire.
    Incomplete,
    /// S1 feeds M1 and S2 feeds L1.
    CorrectPolarity,
    /// S2 feeds M1 and S1 feeds L1.
    ReversedPolarity,
    /// Both meter terminals are fed by the same CT terminal.
    Fault,
}

/// Evaluates a mapping. Checks run in a fixed order: completeness first, then
/// correct polarity, then reversed polarity; anything else is a fault.
pub fn evaluate(mapping: &Mapping) -> Outcome {
    let (Some(m1), Some(l1)) = (mapping.get(MeterTerminal::M1), mapping.get(MeterTerminal::L1))
    else {
        return Outcome::Incomplete;
    };

    match (m1, l1) {
        (CtTerminal::S1, CtTerminal::S2) => Outcome::CorrectPolarity,
        (CtTerminal::S2, CtTerminal::S1) => Outcome::ReversedPolarity,
        _ => Outcome::Fault,
    }
}
