pub mod gates;
pub mod light;
pub mod switch;
pub mod terminals;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::vector::{Rect, Vec2f};

use gates::{Gate, GateKind};
use light::Light;
use switch::Switch;
use terminals::{Terminal, TerminalLayout, TERMINAL_HIT_RADIUS_SQ};

/// Everything that can be picked from the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    Gate(GateKind),
    Switch,
    Light,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 9] = [
        ComponentKind::Gate(GateKind::And),
        ComponentKind::Gate(GateKind::Or),
        ComponentKind::Gate(GateKind::Not),
        ComponentKind::Gate(GateKind::Nand),
        ComponentKind::Gate(GateKind::Nor),
        ComponentKind::Gate(GateKind::Xor),
        ComponentKind::Gate(GateKind::Xnor),
        ComponentKind::Switch,
        ComponentKind::Light,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ComponentKind::Gate(kind) => kind.label(),
            ComponentKind::Switch => "Switch",
            ComponentKind::Light => "Light",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ComponentKind::Gate(kind) => kind.display_name(),
            ComponentKind::Switch => "Switch",
            ComponentKind::Light => "Light",
        }
    }

    pub fn size(self) -> Vec2f {
        match self {
            ComponentKind::Gate(_) => gates::GATE_SIZE,
            ComponentKind::Switch => switch::SWITCH_SIZE,
            ComponentKind::Light => light::LIGHT_SIZE,
        }
    }

    pub fn terminals(self) -> TerminalLayout {
        match self {
            ComponentKind::Gate(kind) => TerminalLayout::gate(kind),
            ComponentKind::Switch => TerminalLayout::switch(),
            ComponentKind::Light => TerminalLayout::light(),
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A component placed on a board.
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    Gate(Gate),
    Switch(Switch),
    Light(Light),
}

impl Component {
    pub fn new(kind: ComponentKind, pos: Vec2f) -> Self {
        match kind {
            ComponentKind::Gate(kind) => Component::Gate(Gate::new(kind, pos)),
            ComponentKind::Switch => Component::Switch(Switch::new(pos)),
            ComponentKind::Light => Component::Light(Light::new(pos)),
        }
    }

    pub fn kind(&self) -> ComponentKind {
        match self {
            Component::Gate(gate) => ComponentKind::Gate(gate.kind),
            Component::Switch(_) => ComponentKind::Switch,
            Component::Light(_) => ComponentKind::Light,
        }
    }

    pub fn pos(&self) -> Vec2f {
        match self {
            Component::Gate(gate) => gate.pos,
            Component::Switch(switch) => switch.pos,
            Component::Light(light) => light.pos,
        }
    }

    pub fn set_pos(&mut self, pos: Vec2f) {
        match self {
            Component::Gate(gate) => gate.pos = pos,
            Component::Switch(switch) => switch.pos = pos,
            Component::Light(light) => light.pos = pos,
        }
    }

    pub fn state(&self) -> bool {
        match self {
            Component::Gate(gate) => gate.state,
            Component::Switch(switch) => switch.state,
            Component::Light(light) => light.state,
        }
    }

    /// State seen by whatever this component's output drives. Lights have no output.
    pub fn output_state(&self) -> Option<bool> {
        match self {
            Component::Gate(gate) => Some(gate.state),
            Component::Switch(switch) => Some(switch.state),
            Component::Light(_) => None,
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Component::Gate(gate) => gate.bounds(),
            Component::Switch(switch) => switch.bounds(),
            Component::Light(light) => light.bounds(),
        }
    }

    pub fn terminals(&self) -> TerminalLayout {
        match self {
            Component::Gate(gate) => gate.terminals(),
            Component::Switch(switch) => switch.terminals(),
            Component::Light(light) => light.terminals(),
        }
    }

    pub fn contains_point(&self, point: Vec2f) -> bool {
        self.bounds().contains(point)
    }

    /// Current position of `terminal`, or `None` if this component has no such terminal.
    pub fn terminal_pos(&self, terminal: Terminal) -> Option<Vec2f> {
        self.terminals().offset(terminal).map(|o| self.pos() + o)
    }

    /// All terminals with their current positions, inputs first.
    pub fn terminal_positions(&self) -> impl Iterator<Item = (Terminal, Vec2f)> {
        let pos = self.pos();
        self.terminals()
            .iter()
            .map(move |(terminal, offset)| (terminal, pos + offset))
    }

    pub fn terminal_at(&self, point: Vec2f) -> Option<Terminal> {
        self.terminal_positions()
            .find(|(_, pos)| pos.distance_sq(point) < TERMINAL_HIT_RADIUS_SQ)
            .map(|(terminal, _)| terminal)
    }

    pub fn as_switch_mut(&mut self) -> Option<&mut Switch> {
        match self {
            Component::Switch(switch) => Some(switch),
            _ => None,
        }
    }
}
