mod and;
mod nand;
mod nor;
mod not;
mod or;
mod xnor;
mod xor;

use serde::{Deserialize, Serialize};

use crate::vector::{Vec2f, Rect};

use super::terminals::TerminalLayout;

pub use and::And;
pub use nand::Nand;
pub use nor::Nor;
pub use not::Not;
pub use or::Or;
pub use xnor::Xnor;
pub use xor::Xor;

pub const GATE_SIZE: Vec2f = Vec2f::new(60.0, 40.0);

/// Result of folding one more input into a gate.
pub struct GateOutput {
    /// Output if no further inputs follow.
    pub out: bool,
    /// Further inputs cannot change `out`.
    pub fin: bool,
}

pub trait GateImpl {
    /// Name shown in the palette tooltip and in logs.
    fn display_name() -> &'static str;

    /// Short text drawn on the gate body.
    fn label() -> &'static str;

    fn input_count() -> usize {
        2
    }

    /// Output with no inputs folded in.
    fn init_state() -> bool;

    fn fold(state: &mut bool, input: bool) -> GateOutput;

    fn evaluate(inputs: &[bool]) -> bool {
        let mut state = Self::init_state();
        let mut out = state;
        for &input in inputs {
            let res = Self::fold(&mut state, input);
            out = res.out;
            if res.fin {
                break;
            }
        }
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GateKind {
    And,
    Or,
    Not,
    Nand,
    Nor,
    Xor,
    Xnor,
}

macro_rules! dispatch {
    ($kind:expr, $impl:ident => $body:expr) => {
        match $kind {
            GateKind::And => { type $impl = And; $body }
            GateKind::Or => { type $impl = Or; $body }
            GateKind::Not => { type $impl = Not; $body }
            GateKind::Nand => { type $impl = Nand; $body }
            GateKind::Nor => { type $impl = Nor; $body }
            GateKind::Xor => { type $impl = Xor; $body }
            GateKind::Xnor => { type $impl = Xnor; $body }
        }
    };
}

impl GateKind {
    pub const ALL: [GateKind; 7] = [
        GateKind::And,
        GateKind::Or,
        GateKind::Not,
        GateKind::Nand,
        GateKind::Nor,
        GateKind::Xor,
        GateKind::Xnor,
    ];

    pub fn display_name(self) -> &'static str {
        dispatch!(self, G => G::display_name())
    }

    pub fn label(self) -> &'static str {
        dispatch!(self, G => G::label())
    }

    pub fn input_count(self) -> usize {
        dispatch!(self, G => G::input_count())
    }

    pub fn evaluate(self, inputs: &[bool]) -> bool {
        dispatch!(self, G => G::evaluate(inputs))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Gate {
    pub pos: Vec2f,
    pub kind: GateKind,
    pub state: bool,
}

impl Gate {
    pub fn new(kind: GateKind, pos: Vec2f) -> Self {
        Self {
            pos,
            kind,
            state: false,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos, GATE_SIZE)
    }

    pub fn terminals(&self) -> TerminalLayout {
        TerminalLayout::gate(self.kind)
    }

    /// Recomputes and stores the output. Missing or extra inputs never fail, they fall
    /// back to the kind's default output.
    pub fn evaluate(&mut self, inputs: &[bool]) -> bool {
        self.state = self.kind.evaluate(inputs);
        self.state
    }
}
