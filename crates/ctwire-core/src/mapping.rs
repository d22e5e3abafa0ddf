//! Meter-side view of the wiring: which CT terminal feeds each meter terminal.

use serde::Serialize;

use crate::terminal::{CtTerminal, MeterTerminal};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Mapping {
    #[serde(rename = "M1")]
    m1: Option<CtTerminal>,
    #[serde(rename = "L1")]
    l1: Option<CtTerminal>,
}

impl Mapping {
    pub fn new(m1: Option<CtTerminal>, l1: Option<CtTerminal>) -> Self {
        Self { m1, l1 }
    }

    pub fn get(&self, meter: MeterTerminal) -> Option<CtTerminal> {
        match meter {
            MeterTerminal::M1 => self.m1,
            MeterTerminal::L1 => self.l1,
        }
    }

    pub(crate) fn set(&mut self, meter: MeterTerminal, ct: CtTerminal) {
        match meter {
            MeterTerminal::M1 => self.m1 = Some(ct),
            MeterTerminal::L1 => self.l1 = Some(ct),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.m1 = None;
        self.l1 = None;
    }

    pub fn is_complete(&self) -> bool {
        self.m1.is_some() && self.l1.is_some()
    }
}
