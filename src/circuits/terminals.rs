//! Connection points of components.
//!
//! Terminal positions are never stored: they are offsets from the component anchor,
//! fixed per kind, so they always follow the component when it moves.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::vector::Vec2f;

use super::gates::GateKind;

/// Squared radius around a terminal that still counts as clicking it.
pub const TERMINAL_HIT_RADIUS_SQ: f32 = 25.0;

const GATE_INPUTS: [Vec2f; 2] = [Vec2f::new(-10.0, 10.0), Vec2f::new(-10.0, 30.0)];
const NOT_INPUTS: [Vec2f; 1] = [Vec2f::new(-10.0, 20.0)];
const GATE_OUTPUT: Vec2f = Vec2f::new(70.0, 20.0);
const SWITCH_OUTPUT: Vec2f = Vec2f::new(50.0, 10.0);
const LIGHT_INPUTS: [Vec2f; 1] = [Vec2f::new(-10.0, 15.0)];

/// Reference to one terminal of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terminal {
    Input(usize),
    Output,
}

impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Terminal::Input(i) => write!(f, "input {i}"),
            Terminal::Output => f.write_str("output"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerminalLayout {
    pub inputs: &'static [Vec2f],
    pub output: Option<Vec2f>,
}

impl TerminalLayout {
    pub const fn gate(kind: GateKind) -> Self {
        let inputs: &'static [Vec2f] = match kind {
            GateKind::Not => &NOT_INPUTS,
            _ => &GATE_INPUTS,
        };
        Self {
            inputs,
            output: Some(GATE_OUTPUT),
        }
    }

    pub const fn switch() -> Self {
        Self {
            inputs: &[],
            output: Some(SWITCH_OUTPUT),
        }
    }

    pub const fn light() -> Self {
        Self {
            inputs: &LIGHT_INPUTS,
            output: None,
        }
    }

    /// Offset of `terminal` from the anchor, if the layout has it.
    pub fn offset(&self, terminal: Terminal) -> Option<Vec2f> {
        match terminal {
            Terminal::Input(i) => self.inputs.get(i).copied(),
            Terminal::Output => self.output,
        }
    }

    /// Inputs in order, then the output.
    pub fn iter(self) -> impl Iterator<Item = (Terminal, Vec2f)> {
        let inputs: &'static [Vec2f] = self.inputs;
        inputs
            .iter()
            .enumerate()
            .map(|(i, o)| (Terminal::Input(i), *o))
            .chain(self.output.map(|o| (Terminal::Output, o)))
    }
}
