use crate::vector::{Rect, Vec2f};

use super::terminals::TerminalLayout;

pub const SWITCH_SIZE: Vec2f = Vec2f::new(40.0, 20.0);

/// User-toggled source with a single output.
#[derive(Debug, Clone, PartialEq)]
pub struct Switch {
    pub pos: Vec2f,
    pub state: bool,
}

impl Switch {
    pub fn new(pos: Vec2f) -> Self {
        Self { pos, state: false }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos, SWITCH_SIZE)
    }

    pub fn terminals(&self) -> TerminalLayout {
        TerminalLayout::switch()
    }

    pub fn toggle(&mut self) -> bool {
        self.state = !self.state;
        self.state
    }
}
