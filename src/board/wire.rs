use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    circuits::terminals::Terminal,
    vector::{segment_distance, Vec2f},
};

use super::{Board, ComponentId};

/// Clicks closer than this to a wire hit it.
pub const WIRE_HIT_DISTANCE: f32 = 5.0;

/// Display tag of a wire. The front-end maps it to a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct WireTag(pub u8);

/// One end of a wire: a terminal on a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WireEnd {
    pub component: ComponentId,
    pub terminal: Terminal,
}

impl WireEnd {
    pub fn new(component: ComponentId, terminal: Terminal) -> Self {
        Self {
            component,
            terminal,
        }
    }

    /// Current position of this end, or `None` if the component is gone or has no such
    /// terminal.
    pub fn resolve(&self, board: &Board) -> Option<Vec2f> {
        board.component(self.component)?.terminal_pos(self.terminal)
    }
}

impl fmt::Display for WireEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.component, self.terminal)
    }
}

/// Directed connection. The source is the end that was picked first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Wire {
    pub source: WireEnd,
    pub target: WireEnd,
    pub tag: WireTag,
}

impl Wire {
    pub fn new(source: WireEnd, target: WireEnd, tag: WireTag) -> Self {
        Self {
            source,
            target,
            tag,
        }
    }

    pub fn endpoints(&self, board: &Board) -> Option<(Vec2f, Vec2f)> {
        Some((self.source.resolve(board)?, self.target.resolve(board)?))
    }

    pub fn is_stale(&self, board: &Board) -> bool {
        self.endpoints(board).is_none()
    }

    /// Stale and zero-length wires are never hit.
    pub fn hit_test(&self, board: &Board, point: Vec2f) -> bool {
        self.endpoints(board)
            .and_then(|(a, b)| segment_distance(point, a, b))
            .is_some_and(|d| d < WIRE_HIT_DISTANCE)
    }
}

impl fmt::Display for Wire {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}
