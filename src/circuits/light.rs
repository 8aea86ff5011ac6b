use crate::vector::{Rect, Vec2f};

use super::terminals::TerminalLayout;

pub const LIGHT_SIZE: Vec2f = Vec2f::new(30.0, 30.0);

/// Indicator with a single input. Its state is written by the board on every pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    pub pos: Vec2f,
    pub state: bool,
}

impl Light {
    pub fn new(pos: Vec2f) -> Self {
        Self { pos, state: false }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos, LIGHT_SIZE)
    }

    pub fn terminals(&self) -> TerminalLayout {
        TerminalLayout::light()
    }
}
